//! # Tentacle Claims Engine - Staked-Position Lock & Claim Lifecycle
//!
//! ## Purpose
//!
//! Lock/coordination layer between a staking registry and a family of
//! pluggable derivative-issuance modules. Holders of staked positions create
//! derivative claims ("tentacles") against a position's value; the engine
//! tracks each claim in a 256-bit per-position bitmap and guarantees the
//! position is never reported withdrawable while any claim is outstanding.
//!
//! ## Integration Points
//!
//! - **Input Sources**: registration/redemption hooks from the staking
//!   registry, direct create/destroy calls from position owners
//! - **Output Destinations**: mint/burn calls to per-claim-type derivative
//!   token modules, distribution calls to resolved helper modules
//! - **Access Control**: delegated to the staking authority's
//!   ownership/approval check; hooks authenticated by caller identity
//! - **State**: two keyed stores only — outstanding bitmap per position,
//!   configuration + default helper per claim type
//!
//! ## Architecture Role
//!
//! ```text
//! Staking Registry ──hooks──→ [TentacleManager] ──mint/burn──→ Derivative Tokens
//!        ↓                        ↓        ↓
//!   isUnlocked? ←── [OutstandingClaims] [ClaimRegistry] ──create_for──→ Helpers
//! ```
//!
//! Create marks the outstanding flag *before* any collaborator call and
//! compensates on failure; destroy retires supply against the position's
//! current value before clearing the flag. Helper selection follows the
//! three-flag policy in [`resolver`], with an override equal to the forced
//! default deliberately treated as a non-conflict.

pub mod config;
pub mod directory;
pub mod error;
pub mod manager;
pub mod outstanding;
pub mod registry;
pub mod resolver;
pub mod traits;

pub use config::{load_config, ManagerConfig};
pub use directory::ModuleDirectory;
pub use error::ClaimError;
pub use manager::TentacleManager;
pub use outstanding::OutstandingClaims;
pub use registry::ClaimRegistry;
pub use resolver::resolve_helper;
pub use traits::{DerivativeToken, HelperModule, ModuleError, StakingAuthority};
