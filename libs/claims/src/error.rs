//! Claim engine error taxonomy
//!
//! Every failure is a synchronous, non-retryable rejection of the whole
//! call, and every failure class has its own identifiable variant so calling
//! software can tell a programming error from an expected state conflict.
//! There are no internal retries; retry means resubmitting the corrected
//! call.

use crate::traits::ModuleError;
use thiserror::Error;
use types::{ClaimTypeId, ModuleAddress, PositionId};

#[derive(Debug, Error)]
pub enum ClaimError {
    /// Hook invoked by something other than the configured staking authority
    #[error("caller {caller} is not the recognized staking authority")]
    NotAuthority { caller: ModuleAddress },

    /// Caller neither owns nor is approved to operate the position
    #[error("caller {caller} is not approved or owner of {position}")]
    NotApprovedOrOwner {
        caller: ModuleAddress,
        position: PositionId,
    },

    /// Create attempted while the claim is already outstanding
    #[error("{claim_type} is already outstanding for {position}")]
    AlreadyCreated {
        claim_type: ClaimTypeId,
        position: PositionId,
    },

    /// Destroy attempted while the claim is not outstanding
    #[error("{claim_type} is not outstanding for {position}")]
    NotCreated {
        claim_type: ClaimTypeId,
        position: PositionId,
    },

    /// Claim type has no configured derivative contract
    #[error("{claim_type} has no configured derivative contract")]
    ClaimTypeNotConfigured { claim_type: ClaimTypeId },

    /// Helper override conflicts with a forced default helper
    #[error(
        "{claim_type} forces default helper {default}, refusing conflicting override {requested}"
    )]
    DefaultHelperConflict {
        claim_type: ClaimTypeId,
        requested: ModuleAddress,
        default: ModuleAddress,
    },

    /// One registration batch names the same claim type twice
    #[error("{claim_type} appears more than once in a single instruction batch")]
    DuplicateClaimType { claim_type: ClaimTypeId },

    /// Hook instruction payload failed to decode
    #[error("malformed claim instruction payload: {0}")]
    MalformedInstructions(#[from] bincode::Error),

    /// No live module is bound at the referenced address
    #[error("no module bound at {address}")]
    ModuleUnavailable { address: ModuleAddress },

    /// A collaborator call failed; the whole operation is aborted
    #[error(transparent)]
    Module(#[from] ModuleError),
}
