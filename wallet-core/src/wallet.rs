// wallet-core/src/wallet.rs
//
// Address / Wallet value objects. Immutable sau khi build xong; serialize
// thẳng ra JSON cho presentation layer.

use crate::chains::Coin;
use crate::crypto::AddressPath;
use crate::error::{WalletError, WalletResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Address text, or one address per sub-ledger for multi-ledger coins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AddressText {
    Single(String),
    PerLedger(BTreeMap<String, String>),
}

impl fmt::Display for AddressText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressText::Single(address) => f.write_str(address),
            // `C=0x..., P=P-avax1..., X=X-avax1...`, sorted by ledger code
            AddressText::PerLedger(addresses) => {
                for (i, (ledger, address)) in addresses.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", ledger, address)?;
                }
                Ok(())
            }
        }
    }
}

/// One derived address.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAddress {
    path: AddressPath,
    address: AddressText,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_key: Option<String>,
}

impl WalletAddress {
    pub fn new(path: AddressPath, address: AddressText) -> Self {
        Self {
            path,
            address,
            private_key: None,
            public_key: None,
        }
    }

    pub fn with_private_key(mut self, text: String) -> Self {
        self.private_key = Some(text);
        self
    }

    pub fn with_public_key(mut self, text: String) -> Self {
        self.public_key = Some(text);
        self
    }

    pub fn path(&self) -> &AddressPath {
        &self.path
    }

    pub fn address(&self) -> &AddressText {
        &self.address
    }

    /// Address for `ledger` on multi-ledger coins; the only address otherwise.
    pub fn ledger_address(&self, ledger: &str) -> Option<&str> {
        match &self.address {
            AddressText::Single(address) => Some(address),
            AddressText::PerLedger(addresses) => addresses.get(ledger).map(String::as_str),
        }
    }

    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }
}

impl fmt::Debug for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletAddress")
            .field("path", &self.path.to_string())
            .field("address", &self.address)
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Account-level artifact published next to the addresses (e.g. a zpub).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedKey {
    pub path: AddressPath,
    pub key: String,
}

/// Addresses for one coin. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    coin: Coin,
    #[serde(skip_serializing_if = "Option::is_none")]
    extended_public_key: Option<ExtendedKey>,
    addresses: Vec<WalletAddress>,
}

impl Wallet {
    pub fn new(
        coin: Coin,
        addresses: Vec<WalletAddress>,
        extended_public_key: Option<ExtendedKey>,
    ) -> WalletResult<Self> {
        if addresses.is_empty() {
            return Err(WalletError::parameter(
                "addresses",
                "a wallet holds at least one address",
            ));
        }
        Ok(Self {
            coin,
            extended_public_key,
            addresses,
        })
    }

    pub fn coin(&self) -> Coin {
        self.coin
    }

    pub fn addresses(&self) -> &[WalletAddress] {
        &self.addresses
    }

    pub fn extended_public_key(&self) -> Option<&ExtendedKey> {
        self.extended_public_key.as_ref()
    }
}
