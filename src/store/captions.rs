//! Caption text for each storefront screen (HTML parse mode).

use crate::utils::html_escape;

use super::{Network, Plan};

pub const NOT_CONFIGURED: &str = "Not configured";

pub fn home() -> &'static str {
    "👻 <b>GhostGPT</b>\n\n\
    <i>Unfiltered AI Intelligence</i>\n\n\
    Choose an option below 👇"
}

pub fn benefits() -> &'static str {
    "🚀 <b>Why GhostGPT?</b>\n\n\
    ✅ No censorship\n\
    ⚡ Blazing fast responses\n\
    🧠 Premium AI models\n\
    🔒 Privacy focused\n\
    💰 Crypto friendly\n\
    🌐 Always online"
}

pub fn plans() -> String {
    let mut text = String::from("💎 <b>Plans</b>\n\n");
    for plan in Plan::all() {
        text.push_str(&format!(
            "{} <b>{}</b> — {}\n",
            plan.emoji(),
            plan.name(),
            plan.price()
        ));
    }
    text.push_str("\n⚡ Instant activation after payment.");
    text
}

pub fn select_network() -> &'static str {
    "💰 <b>Select payment network:</b>"
}

pub fn checkout(plan: Plan) -> String {
    format!(
        "{} <b>{} plan</b> — {}\n\n{}",
        plan.emoji(),
        plan.name(),
        plan.price(),
        select_network()
    )
}

/// Payment address screen. `address` is `None` when the network has no
/// wallet configured.
pub fn wallet(network: Network, address: Option<&str>, contact: &str) -> String {
    let address = address.map(html_escape).unwrap_or_else(|| NOT_CONFIGURED.to_string());
    format!(
        "{} <b>{} address</b>\n\n\
        <code>{}</code>\n\n\
        After paying, send the transaction hash to {}.",
        network.emoji(),
        network.name(),
        address,
        html_escape(contact)
    )
}

pub fn support(contact: &str) -> String {
    format!("📞 Support: {}", html_escape(contact))
}
