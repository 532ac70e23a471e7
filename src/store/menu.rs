//! Menu routing: callback data to screen.
//!
//! Every button press carries a short callback payload (`plans`, `buy_pro`,
//! `net_btc`, ...). [`MenuAction::parse`] turns it into an action and
//! [`render`] produces the caption and keyboard to show for it.

use teloxide::types::InlineKeyboardMarkup;

use super::{captions, keyboards, Network, Plan, Wallets};

const BUY_PREFIX: &str = "buy_";
const NETWORK_PREFIX: &str = "net_";

/// A storefront menu action triggered by an inline button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Home,
    Benefits,
    Plans,
    Pay,
    Support,
    Buy(Plan),
    Network(Network),
}

impl MenuAction {
    /// Parse callback data. Returns `None` for payloads no button produces.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "home" => Some(Self::Home),
            "benefits" => Some(Self::Benefits),
            "plans" => Some(Self::Plans),
            "pay" => Some(Self::Pay),
            "support" => Some(Self::Support),
            _ => {
                if let Some(code) = data.strip_prefix(BUY_PREFIX) {
                    Plan::from_code(code).map(Self::Buy)
                } else if let Some(code) = data.strip_prefix(NETWORK_PREFIX) {
                    Network::from_code(code).map(Self::Network)
                } else {
                    None
                }
            }
        }
    }

    /// Callback data carried by the button for this action.
    pub fn callback_data(self) -> String {
        match self {
            Self::Home => "home".to_string(),
            Self::Benefits => "benefits".to_string(),
            Self::Plans => "plans".to_string(),
            Self::Pay => "pay".to_string(),
            Self::Support => "support".to_string(),
            Self::Buy(plan) => format!("{BUY_PREFIX}{}", plan.code()),
            Self::Network(network) => format!("{NETWORK_PREFIX}{}", network.code()),
        }
    }
}

/// Store details that vary per deployment.
#[derive(Debug, Clone)]
pub struct StoreInfo {
    pub support_contact: String,
    pub wallets: Wallets,
}

/// Caption and keyboard pair shown on the menu message.
#[derive(Debug, Clone)]
pub struct Screen {
    pub caption: String,
    pub keyboard: InlineKeyboardMarkup,
}

impl Screen {
    fn new(caption: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Self {
        Self {
            caption: caption.into(),
            keyboard,
        }
    }

    /// Landing screen sent by /start.
    pub fn home() -> Self {
        Self::new(captions::home(), keyboards::main())
    }
}

/// Build the screen for a menu action.
pub fn render(action: MenuAction, info: &StoreInfo) -> Screen {
    match action {
        MenuAction::Home => Screen::home(),
        MenuAction::Benefits => Screen::new(captions::benefits(), keyboards::main()),
        MenuAction::Plans => Screen::new(captions::plans(), keyboards::plans()),
        MenuAction::Pay => Screen::new(captions::select_network(), keyboards::networks()),
        MenuAction::Buy(plan) => Screen::new(captions::checkout(plan), keyboards::networks()),
        MenuAction::Network(network) => Screen::new(
            captions::wallet(network, info.wallets.address(network), &info.support_contact),
            keyboards::networks(),
        ),
        MenuAction::Support => {
            Screen::new(captions::support(&info.support_contact), keyboards::main())
        }
    }
}

#[cfg(test)]
mod tests {
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    fn info() -> StoreInfo {
        let mut wallets = Wallets::default();
        wallets.set(Network::Btc, "bc1qexample");
        StoreInfo {
            support_contact: "@GhostGptDev".to_string(),
            wallets,
        }
    }

    fn callback_payloads(keyboard: &InlineKeyboardMarkup) -> Vec<String> {
        keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|b| match &b.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_known_payloads() {
        assert_eq!(MenuAction::parse("home"), Some(MenuAction::Home));
        assert_eq!(MenuAction::parse("benefits"), Some(MenuAction::Benefits));
        assert_eq!(MenuAction::parse("plans"), Some(MenuAction::Plans));
        assert_eq!(MenuAction::parse("pay"), Some(MenuAction::Pay));
        assert_eq!(MenuAction::parse("support"), Some(MenuAction::Support));
        assert_eq!(MenuAction::parse("buy_pro"), Some(MenuAction::Buy(Plan::Pro)));
        assert_eq!(
            MenuAction::parse("net_sol"),
            Some(MenuAction::Network(Network::Sol))
        );
    }

    #[test]
    fn test_parse_unknown_payloads() {
        assert_eq!(MenuAction::parse(""), None);
        assert_eq!(MenuAction::parse("HOME"), None);
        assert_eq!(MenuAction::parse("net_"), None);
        assert_eq!(MenuAction::parse("net_doge"), None);
        assert_eq!(MenuAction::parse("buy_platinum"), None);
        assert_eq!(MenuAction::parse("warn_remove:1"), None);
    }

    #[test]
    fn test_every_button_routes() {
        let info = info();
        let screens = [
            Screen::home(),
            render(MenuAction::Plans, &info),
            render(MenuAction::Pay, &info),
            render(MenuAction::Buy(Plan::Basic), &info),
        ];
        for screen in &screens {
            let payloads = callback_payloads(&screen.keyboard);
            assert!(!payloads.is_empty());
            for data in payloads {
                assert!(MenuAction::parse(&data).is_some(), "unrouted button {data}");
            }
        }
    }

    #[test]
    fn test_keyboard_layouts() {
        let main = keyboards::main();
        assert_eq!(main.inline_keyboard.len(), 2);
        assert_eq!(
            callback_payloads(&main),
            ["plans", "benefits", "pay", "support"]
        );

        let plans = keyboards::plans();
        let row_lens: Vec<_> = plans.inline_keyboard.iter().map(Vec::len).collect();
        assert_eq!(row_lens, [2, 1, 1]);
        assert_eq!(
            callback_payloads(&plans),
            ["buy_basic", "buy_pro", "buy_elite", "home"]
        );

        let networks = keyboards::networks();
        assert_eq!(
            callback_payloads(&networks),
            ["net_trc", "net_sol", "net_btc", "net_eth", "net_bsc", "home"]
        );
    }

    #[test]
    fn test_wallet_screen() {
        let info = info();

        let btc = render(MenuAction::Network(Network::Btc), &info);
        assert!(btc.caption.contains("<code>bc1qexample</code>"));
        assert!(btc.caption.contains("Bitcoin"));

        let eth = render(MenuAction::Network(Network::Eth), &info);
        assert!(eth.caption.contains("<code>Not configured</code>"));
        assert_eq!(
            callback_payloads(&eth.keyboard),
            callback_payloads(&keyboards::networks())
        );
    }

    #[test]
    fn test_dynamic_text_is_escaped() {
        let mut info = info();
        info.support_contact = "@a<b>&c".to_string();
        info.wallets.set(Network::Trc, "T<script>");

        let support = render(MenuAction::Support, &info);
        assert_eq!(support.caption, "📞 Support: @a&lt;b&gt;&amp;c");

        let trc = render(MenuAction::Network(Network::Trc), &info);
        assert!(trc.caption.contains("<code>T&lt;script&gt;</code>"));
    }

    #[test]
    fn test_plans_and_checkout_captions() {
        let info = info();

        let plans = render(MenuAction::Plans, &info);
        for plan in Plan::all() {
            assert!(plans.caption.contains(&plan.price()));
        }
        assert!(plans.caption.contains("Instant activation after payment."));

        let checkout = render(MenuAction::Buy(Plan::Elite), &info);
        assert!(checkout.caption.contains("Elite"));
        assert!(checkout.caption.contains("$39.99"));
        assert!(checkout.caption.contains("Select payment network"));
    }
}
