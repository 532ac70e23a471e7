//! Configured payment addresses.

use std::collections::HashMap;

use super::Network;

/// Wallet address per payment network. Networks without an address are
/// shown as not configured.
#[derive(Debug, Clone, Default)]
pub struct Wallets {
    addresses: HashMap<Network, String>,
}

impl Wallets {
    pub fn set(&mut self, network: Network, address: impl Into<String>) {
        self.addresses.insert(network, address.into());
    }

    pub fn address(&self, network: Network) -> Option<&str> {
        self.addresses.get(&network).map(String::as_str)
    }

    /// Number of networks with an address.
    pub fn configured(&self) -> usize {
        self.addresses.len()
    }
}
