//! Inline keyboards for the storefront screens.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::menu::MenuAction;
use super::{Network, Plan};

fn button(text: impl Into<String>, action: MenuAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, action.callback_data())
}

fn back_row() -> Vec<InlineKeyboardButton> {
    vec![button("⬅️ Back", MenuAction::Home)]
}

pub fn main() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            button("💎 Plans", MenuAction::Plans),
            button("🚀 Benefits", MenuAction::Benefits),
        ],
        vec![
            button("💰 Pay Crypto", MenuAction::Pay),
            button("📞 Support", MenuAction::Support),
        ],
    ])
}

pub fn plans() -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    // Two plans per row, the last one alone.
    let plans: Vec<Plan> = Plan::all().collect();
    for pair in plans.chunks(2) {
        rows.push(
            pair.iter()
                .map(|&plan| button(plan.label(), MenuAction::Buy(plan)))
                .collect(),
        );
    }
    rows.push(back_row());
    InlineKeyboardMarkup::new(rows)
}

pub fn networks() -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Network::all()
        .map(|network| vec![button(network.label(), MenuAction::Network(network))])
        .collect();
    rows.push(back_row());
    InlineKeyboardMarkup::new(rows)
}
