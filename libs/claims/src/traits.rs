//! Collaborator capability traits
//!
//! External contracts this engine depends on, modelled as object-safe
//! capability traits. Implementations are swappable per claim type and are
//! selected by the claim registry's configuration, never by inheritance.
//! All calls are synchronous: the execution model is serial and
//! transactional, so there is no async surface.

use thiserror::Error;
use types::{ClaimTypeId, ModuleAddress, PositionId};

/// Failure reported by an external module call.
///
/// Collaborators are opaque; a rejection carries the module identity and the
/// entry point so the caller can attribute the failure, everything else is
/// free text from the module.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("module {module} rejected {call}: {reason}")]
    Rejected {
        module: ModuleAddress,
        call: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The staking registry this engine locks positions for.
///
/// Only hook invocations originating from this authority are trusted; end
/// caller access to create/destroy is delegated to its ownership/approval
/// check.
pub trait StakingAuthority: Send + Sync {
    /// Current claim weight of a position. Read at issuance and again at
    /// retirement; claims always settle against the current value.
    fn staking_token_balance(&self, position: PositionId) -> Result<u128, ModuleError>;

    /// Lock manager the registry has installed for a position.
    fn lock_manager(&self, position: PositionId) -> Result<ModuleAddress, ModuleError>;

    /// Whether `caller` owns or is approved to operate `position`.
    fn is_approved_or_owner(
        &self,
        caller: ModuleAddress,
        position: PositionId,
    ) -> Result<bool, ModuleError>;
}

/// Derivative token contract issued against for one claim type.
pub trait DerivativeToken: Send + Sync {
    fn mint(&self, to: ModuleAddress, amount: u128) -> Result<(), ModuleError>;

    fn burn(
        &self,
        caller: ModuleAddress,
        from: ModuleAddress,
        amount: u128,
    ) -> Result<(), ModuleError>;
}

/// Optional distribution module for freshly issued claim supply.
///
/// When a helper resolves for a create, the full issuance lands in the
/// helper's custody first and the helper performs its own allocation logic;
/// the beneficiary only receives supply directly when no helper resolves.
pub trait HelperModule: Send + Sync {
    fn create_for(
        &self,
        claim_type: ClaimTypeId,
        derivative: ModuleAddress,
        positions: &[PositionId],
        amount: u128,
        beneficiary: ModuleAddress,
    ) -> Result<(), ModuleError>;
}
