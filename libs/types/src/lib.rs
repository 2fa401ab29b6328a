//! # Tentacle Type System - Claim Lock Domain Types
//!
//! ## Purpose
//!
//! Foundational type layer for the Tentacle claim lock system. Provides typed
//! identifiers for staked positions, claim types and external modules, the
//! fixed-width outstanding-claim bitmap, and the per-claim-type configuration
//! records consumed by the claims engine. Everything in this crate is pure
//! data: no collaborator calls, no shared state, no I/O.
//!
//! ## Integration Points
//!
//! - **Consumers**: `tentacle-claims` (registry, resolver, manager), test
//!   harnesses and embedding services
//! - **Identifier Safety**: zero-cost newtypes prevent mixing position ids,
//!   claim-type ids and module addresses at compile time
//! - **Serialization**: serde derives throughout; module addresses round-trip
//!   as `0x`-prefixed hex strings, hook instruction batches as bincode
//!
//! ## Architecture Role
//!
//! ```text
//! Staking Registry Hooks → [ClaimInstruction] → Claims Engine
//!                                                    ↓
//!                          [ClaimTypeConfig] ← Claim Registry
//!                                                    ↓
//!                          [ClaimBitmap] per PositionId (outstanding flags)
//! ```
//!
//! The claim bitmap is the heart of the lock invariant: a position with any
//! bit set cannot be reported unlocked. Bit algebra lives here so the state
//! machine in `tentacle-claims` stays free of word-twiddling.

pub mod bitmap;
pub mod claims;
pub mod identifiers;

pub use bitmap::ClaimBitmap;
pub use claims::{ClaimInstruction, ClaimTypeConfig};
pub use identifiers::{
    AddressParseError, ClaimTypeId, ModuleAddress, PositionId, MAX_CLAIM_TYPES,
};
