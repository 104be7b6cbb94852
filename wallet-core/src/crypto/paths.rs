// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - per-coin HD path builder
// BIP-44 (Purpose), SLIP-44 (Coin Types), BIP-84 (Bitcoin SegWit)

use crate::error::{WalletError, WalletResult};
use serde::{Serialize, Serializer};
use std::fmt;

/// Hardened-index marker (bit 31).
pub const HARDENED: u32 = 0x8000_0000;

// =============================================================================
// PURPOSES & SLIP-44 COIN TYPES
// =============================================================================
pub mod purpose {
    /// BIP-44 multi-account hierarchy
    pub const BIP44: u32 = 44;
    /// BIP-84 native SegWit
    pub const BIP84: u32 = 84;
}

/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    // ---- secp256k1 chains ----
    pub const BITCOIN: u32 = 0;
    pub const LITECOIN: u32 = 2;
    pub const DOGECOIN: u32 = 3;
    pub const ETHEREUM: u32 = 60;
    pub const RIPPLE: u32 = 144;
    pub const ERGO: u32 = 429;
    pub const HANDSHAKE: u32 = 5353;
    pub const AVALANCHE: u32 = 9000;

    // ---- ed25519 chains ----
    pub const MONERO: u32 = 128;
    /// SEP-0005 key slot; Algorand keys are derived here (see `chains::algorand`).
    pub const STELLAR: u32 = 148;
    pub const ALGORAND: u32 = 283;
}

// =============================================================================
// FAMILIES & POSITIONS
// =============================================================================
/// Path shape shared by a group of coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathFamily {
    /// `m/purpose'/coin'/account'/change/index`
    AccountChangeIndex,
    /// `m/purpose'/coin'/0'/0/index`
    IndexOnly,
    /// `m/purpose'/coin'/account'`
    AccountOnly,
}

impl fmt::Display for PathFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathFamily::AccountChangeIndex => "account/change/index",
            PathFamily::IndexOnly => "index-only",
            PathFamily::AccountOnly => "account-only",
        };
        f.write_str(name)
    }
}

/// Where a range of addresses starts, in the coordinates of one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    AccountChangeIndex { account: u32, change: u32, index: u32 },
    Index { index: u32 },
    Account { account: u32 },
}

impl Position {
    /// The family's zero position.
    pub fn origin(family: PathFamily) -> Self {
        match family {
            PathFamily::AccountChangeIndex => Position::AccountChangeIndex {
                account: 0,
                change: 0,
                index: 0,
            },
            PathFamily::IndexOnly => Position::Index { index: 0 },
            PathFamily::AccountOnly => Position::Account { account: 0 },
        }
    }

    pub fn family(&self) -> PathFamily {
        match self {
            Position::AccountChangeIndex { .. } => PathFamily::AccountChangeIndex,
            Position::Index { .. } => PathFamily::IndexOnly,
            Position::Account { .. } => PathFamily::AccountOnly,
        }
    }

    /// Account field, if the family has one.
    pub fn account(&self) -> Option<u32> {
        match *self {
            Position::AccountChangeIndex { account, .. } | Position::Account { account } => {
                Some(account)
            }
            Position::Index { .. } => None,
        }
    }

    /// Move the innermost varying segment (index, or account for the
    /// account-only family) forward by `offset`.
    pub fn advance(&self, offset: u32) -> WalletResult<Self> {
        let step = |name: &str, value: u32| -> WalletResult<u32> {
            value
                .checked_add(offset)
                .filter(|v| *v < HARDENED)
                .ok_or_else(|| {
                    WalletError::parameter(
                        name,
                        format!("{} + {} exceeds the non-hardened range", value, offset),
                    )
                })
        };

        Ok(match *self {
            Position::AccountChangeIndex {
                account,
                change,
                index,
            } => Position::AccountChangeIndex {
                account,
                change,
                index: step("index", index)?,
            },
            Position::Index { index } => Position::Index {
                index: step("index", index)?,
            },
            Position::Account { account } => Position::Account {
                account: step("account", account)?,
            },
        })
    }
}

// =============================================================================
// ADDRESS PATH
// =============================================================================
/// Ordered path segments with hardening already applied.
///
/// Invariant: purpose, coin type and account are hardened; change and index
/// never are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressPath {
    segments: Vec<u32>,
}

impl AddressPath {
    /// Build the path for `position` under `purpose` / `coin_type`.
    pub fn new(purpose: u32, coin_type: u32, position: &Position) -> WalletResult<Self> {
        let head = [
            hardened("purpose", purpose)?,
            hardened("coin_type", coin_type)?,
        ];

        let tail: Vec<u32> = match *position {
            Position::AccountChangeIndex {
                account,
                change,
                index,
            } => vec![
                hardened("account", account)?,
                normal("change", change)?,
                normal("index", index)?,
            ],
            Position::Index { index } => vec![HARDENED, 0, normal("index", index)?],
            Position::Account { account } => vec![hardened("account", account)?],
        };

        let mut segments = Vec::with_capacity(head.len() + tail.len());
        segments.extend_from_slice(&head);
        segments.extend(tail);
        Ok(Self { segments })
    }

    /// `m/purpose'/coin'/account'`, the level extended public keys live at.
    pub fn account_level(purpose: u32, coin_type: u32, account: u32) -> WalletResult<Self> {
        Self::new(purpose, coin_type, &Position::Account { account })
    }

    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_hardened(&self, level: usize) -> bool {
        self.segments
            .get(level)
            .is_some_and(|s| s & HARDENED != 0)
    }

    /// Innermost segment with the hardening bit stripped.
    pub fn last_index(&self) -> Option<u32> {
        self.segments.last().map(|s| s & !HARDENED)
    }
}

impl fmt::Display for AddressPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            if segment & HARDENED != 0 {
                write!(f, "/{}'", segment & !HARDENED)?;
            } else {
                write!(f, "/{}", segment)?;
            }
        }
        Ok(())
    }
}

impl Serialize for AddressPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[inline]
fn normal(name: &str, value: u32) -> WalletResult<u32> {
    if value >= HARDENED {
        return Err(WalletError::parameter(
            name,
            format!("{} is outside 0..2^31", value),
        ));
    }
    Ok(value)
}

#[inline]
fn hardened(name: &str, value: u32) -> WalletResult<u32> {
    normal(name, value).map(|v| v | HARDENED)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_change_index_path() {
        let path = AddressPath::new(
            purpose::BIP84,
            coin_type::BITCOIN,
            &Position::AccountChangeIndex {
                account: 0,
                change: 1,
                index: 7,
            },
        )
        .unwrap();
        assert_eq!(path.to_string(), "m/84'/0'/0'/1/7");
        assert_eq!(path.depth(), 5);
        assert_eq!(path.last_index(), Some(7));
    }

    #[test]
    fn test_index_only_path() {
        let path = AddressPath::new(
            purpose::BIP44,
            coin_type::ETHEREUM,
            &Position::Index { index: 3 },
        )
        .unwrap();
        assert_eq!(path.to_string(), "m/44'/60'/0'/0/3");
    }

    #[test]
    fn test_account_only_path() {
        let path = AddressPath::new(
            purpose::BIP44,
            coin_type::ALGORAND,
            &Position::Account { account: 2 },
        )
        .unwrap();
        assert_eq!(path.to_string(), "m/44'/283'/2'");
        assert_eq!(
            path,
            AddressPath::account_level(purpose::BIP44, coin_type::ALGORAND, 2).unwrap()
        );
    }

    #[test]
    fn test_hardening_invariant_for_every_family() {
        for family in [
            PathFamily::AccountChangeIndex,
            PathFamily::IndexOnly,
            PathFamily::AccountOnly,
        ] {
            let path = AddressPath::new(44, 0, &Position::origin(family)).unwrap();
            for level in 0..path.depth() {
                // levels 0..3 are purpose, coin type, account
                assert_eq!(path.is_hardened(level), level < 3, "{} level {}", family, level);
            }
        }
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let err = AddressPath::new(
            84,
            0,
            &Position::AccountChangeIndex {
                account: HARDENED,
                change: 0,
                index: 0,
            },
        )
        .unwrap_err();
        assert!(matches!(err, WalletError::InvalidParameter(ref m) if m.starts_with("account")));

        let err = AddressPath::new(44, 60, &Position::Index { index: u32::MAX }).unwrap_err();
        assert!(matches!(err, WalletError::InvalidParameter(_)));
    }

    #[test]
    fn test_advance_moves_innermost_segment() {
        let start = Position::AccountChangeIndex {
            account: 1,
            change: 1,
            index: 5,
        };
        assert_eq!(
            start.advance(3).unwrap(),
            Position::AccountChangeIndex {
                account: 1,
                change: 1,
                index: 8
            }
        );
        assert_eq!(
            Position::Account { account: 4 }.advance(2).unwrap(),
            Position::Account { account: 6 }
        );
    }

    #[test]
    fn test_advance_overflow() {
        let start = Position::Index {
            index: HARDENED - 1,
        };
        assert!(start.advance(0).is_ok());
        assert!(start.advance(1).is_err());
        assert!(Position::Index { index: 1 }.advance(u32::MAX).is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let path = AddressPath::new(44, 3, &Position::origin(PathFamily::AccountChangeIndex))
            .unwrap();
        assert_eq!(
            serde_json::to_string(&path).unwrap(),
            "\"m/44'/3'/0'/0/0\""
        );
    }
}
