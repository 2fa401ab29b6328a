//! Typed identifiers for positions, claim types and external modules
//!
//! Zero-cost wrappers over the raw representations so that a position id can
//! never be passed where a claim-type id is expected. Module addresses follow
//! the 20-byte convention used across the execution boundary, with the
//! all-zero value reserved as the null sentinel.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hard upper bound on the claim-type namespace.
///
/// Claim-type identifiers are 8-bit by construction, so exactly 256 claim
/// types can ever exist. The outstanding-claim bitmap is sized to this bound
/// and must never grow past it.
pub const MAX_CLAIM_TYPES: usize = 256;

/// Identifier of a staked position owned by the staking registry.
///
/// Opaque to this system: we read the position's claim weight through the
/// registry and never interpret the id itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionId(u64);

impl PositionId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn inner(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position#{}", self.0)
    }
}

impl From<u64> for PositionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a configured claim category.
///
/// The full 0..=255 domain is valid; there is no reserved value. The id
/// doubles as the bit index into [`crate::ClaimBitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimTypeId(u8);

impl ClaimTypeId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Bit index of this claim type inside the outstanding bitmap.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClaimTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "claim-type#{}", self.0)
    }
}

impl From<u8> for ClaimTypeId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// Errors raised while parsing a [`ModuleAddress`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    /// Input does not carry the mandatory `0x` prefix
    #[error("module address '{input}' is missing the 0x prefix")]
    MissingPrefix { input: String },

    /// Input is not exactly 20 bytes of hex after the prefix
    #[error("module address '{input}' must be 40 hex digits, got {digits}")]
    BadLength { input: String, digits: usize },

    /// Input contains non-hex characters
    #[error("module address '{input}' contains invalid hex")]
    InvalidHex { input: String },
}

/// Address-like reference to an external module.
///
/// Names a derivative token contract, a helper module, the staking authority
/// or any caller/beneficiary identity crossing the system boundary. The
/// all-zero address is the null reference: a claim type whose derivative
/// address is zero is unconfigured, and a default helper stored as zero is
/// treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleAddress(pub [u8; 20]);

impl ModuleAddress {
    /// The null reference.
    pub const ZERO: Self = Self([0u8; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for ModuleAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Default for ModuleAddress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[u8; 20]> for ModuleAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl FromStr for ModuleAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").ok_or_else(|| AddressParseError::MissingPrefix {
            input: s.to_string(),
        })?;
        if digits.len() != 40 {
            return Err(AddressParseError::BadLength {
                input: s.to_string(),
                digits: digits.len(),
            });
        }
        let raw = hex::decode(digits).map_err(|_| AddressParseError::InvalidHex {
            input: s.to_string(),
        })?;
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }
}

// Addresses serialize as 0x-hex strings so config files and encoded hook
// payloads stay human-readable.
impl Serialize for ModuleAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ModuleAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
