//! Products and payment networks offered by the storefront.

use strum::{EnumIter, IntoEnumIterator};

/// Subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Plan {
    Basic,
    Pro,
    Elite,
}

impl Plan {
    /// All plans, cheapest first.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Short code used in callback data (`buy_<code>`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Elite => "elite",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().find(|p| p.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Pro => "Pro",
            Self::Elite => "Elite",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Basic => "🥉",
            Self::Pro => "🥈",
            Self::Elite => "👑",
        }
    }

    /// Monthly price in US cents.
    pub fn price_cents(self) -> u32 {
        match self {
            Self::Basic => 999,
            Self::Pro => 1999,
            Self::Elite => 3999,
        }
    }

    /// Price formatted as `$9.99`.
    pub fn price(self) -> String {
        let cents = self.price_cents();
        format!("${}.{:02}", cents / 100, cents % 100)
    }

    /// Button label, e.g. `🥉 Basic — $9.99`.
    pub fn label(self) -> String {
        format!("{} {} — {}", self.emoji(), self.name(), self.price())
    }
}

/// Blockchain network accepted for payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Network {
    Trc,
    Sol,
    Btc,
    Eth,
    Bsc,
}

impl Network {
    /// All networks in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Short code used in callback data (`net_<code>`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Trc => "trc",
            Self::Sol => "sol",
            Self::Btc => "btc",
            Self::Eth => "eth",
            Self::Bsc => "bsc",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().find(|n| n.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Trc => "TRC20",
            Self::Sol => "Solana",
            Self::Btc => "Bitcoin",
            Self::Eth => "Ethereum",
            Self::Bsc => "BSC",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Trc => "🟢",
            Self::Sol => "🟣",
            Self::Btc => "🟠",
            Self::Eth => "🔵",
            Self::Bsc => "🟡",
        }
    }

    pub fn label(self) -> String {
        format!("{} {}", self.emoji(), self.name())
    }

    /// Environment variable holding the wallet address for this network.
    pub fn env_key(self) -> &'static str {
        match self {
            Self::Trc => "CRYPTO_WALLET_TRC",
            Self::Sol => "CRYPTO_WALLET_SOL",
            Self::Btc => "CRYPTO_WALLET_BTC",
            Self::Eth => "CRYPTO_WALLET_ETH",
            Self::Bsc => "CRYPTO_WALLET_BSC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_prices() {
        assert_eq!(Plan::Basic.price(), "$9.99");
        assert_eq!(Plan::Pro.price(), "$19.99");
        assert_eq!(Plan::Elite.price(), "$39.99");
        assert_eq!(Plan::Elite.label(), "👑 Elite — $39.99");
    }

    #[test]
    fn test_codes_resolve() {
        for plan in Plan::all() {
            assert_eq!(Plan::from_code(plan.code()), Some(plan));
        }
        for network in Network::all() {
            assert_eq!(Network::from_code(network.code()), Some(network));
        }
        assert_eq!(Plan::from_code("platinum"), None);
        assert_eq!(Network::from_code("doge"), None);
    }

    #[test]
    fn test_network_order() {
        let codes: Vec<_> = Network::all().map(Network::code).collect();
        assert_eq!(codes, ["trc", "sol", "btc", "eth", "bsc"]);
    }
}
