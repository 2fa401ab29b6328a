//! Claim-type configuration and hook instruction types

use crate::identifiers::{ClaimTypeId, ModuleAddress};
use serde::{Deserialize, Serialize};

/// Per-claim-type configuration stored by the claim registry.
///
/// The zero value (`derivative == ModuleAddress::ZERO`, all flags false) is
/// the "never configured" sentinel that registry lookups return for unknown
/// ids; every create/destroy against such a claim type fails.
///
/// The three policy flags drive helper resolution:
/// - `has_default_helper` — a default helper is configured for this claim
///   type; without it, only caller-supplied overrides are ever consulted.
/// - `force_default` — the default helper wins over a caller override.
/// - `revert_on_forced_override` — when the default is forced, a caller
///   override that names a *different* helper is a policy conflict instead
///   of being silently ignored. An override equal to the default is never a
///   conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClaimTypeConfig {
    pub has_default_helper: bool,
    pub force_default: bool,
    pub revert_on_forced_override: bool,
    /// Derivative token contract issued against for this claim type.
    pub derivative: ModuleAddress,
}

impl ClaimTypeConfig {
    /// Unconfigured sentinel, as returned for ids never seen by `configure`.
    pub const UNCONFIGURED: Self = Self {
        has_default_helper: false,
        force_default: false,
        revert_on_forced_override: false,
        derivative: ModuleAddress::ZERO,
    };

    /// True iff a derivative contract is wired up for this claim type.
    pub fn is_configured(&self) -> bool {
        !self.derivative.is_zero()
    }
}

/// One caller-supplied claim creation instruction inside a registration
/// hook payload.
///
/// Untrusted structured input: batches are validated for duplicate claim
/// types before any state mutation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInstruction {
    pub claim_type: ClaimTypeId,
    /// Helper the caller asks for; subject to the claim type's policy flags.
    pub helper_override: Option<ModuleAddress>,
}

impl ClaimInstruction {
    pub fn new(claim_type: ClaimTypeId, helper_override: Option<ModuleAddress>) -> Self {
        Self {
            claim_type,
            helper_override,
        }
    }
}
