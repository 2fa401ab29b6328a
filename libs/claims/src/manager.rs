//! Tentacle manager
//!
//! The lock/coordination engine sitting between the staking registry and the
//! pluggable derivative modules. Owns the outstanding-claim store, the claim
//! registry and the module directory, and drives the create/destroy state
//! machine for every (position, claim type) pair:
//!
//! ```text
//!            create
//!   ABSENT ──────────→ OUTSTANDING
//!     ↑                    │
//!     └────────────────────┘
//!            destroy
//! ```
//!
//! No other transition exists. Duplicate create fails `AlreadyCreated`,
//! duplicate destroy fails `NotCreated`, and a position is reported unlocked
//! only when its whole map is clear.
//!
//! Effect ordering on create: the outstanding flag is set before any
//! collaborator call, closing the window where a nested call could
//! re-trigger creation for the same pair while issuance is in flight. The
//! host gives us no transactional rollback, so a collaborator failure after
//! the flag was set compensates by clearing it before the error propagates.

use crate::config::ManagerConfig;
use crate::directory::ModuleDirectory;
use crate::error::ClaimError;
use crate::outstanding::OutstandingClaims;
use crate::registry::ClaimRegistry;
use crate::resolver::resolve_helper;
use crate::traits::StakingAuthority;
use std::sync::Arc;
use tracing::{debug, info, warn};
use types::{ClaimBitmap, ClaimInstruction, ClaimTypeConfig, ClaimTypeId, ModuleAddress, PositionId};

pub struct TentacleManager {
    /// Identity of the staking authority whose hook invocations are trusted.
    authority_id: ModuleAddress,
    authority: Arc<dyn StakingAuthority>,
    outstanding: OutstandingClaims,
    registry: ClaimRegistry,
    modules: ModuleDirectory,
}

impl TentacleManager {
    pub fn new(authority_id: ModuleAddress, authority: Arc<dyn StakingAuthority>) -> Self {
        Self {
            authority_id,
            authority,
            outstanding: OutstandingClaims::new(),
            registry: ClaimRegistry::new(),
            modules: ModuleDirectory::new(),
        }
    }

    pub fn from_config(config: &ManagerConfig, authority: Arc<dyn StakingAuthority>) -> Self {
        Self::new(config.authority, authority)
    }

    /// Directory used to bind derivative and helper implementations to the
    /// addresses configuration refers to.
    pub fn modules(&self) -> &ModuleDirectory {
        &self.modules
    }

    /// Install or replace the configuration for a claim type.
    ///
    /// Overwrites unconditionally; subsequent create/destroy calls observe
    /// the new configuration immediately, with no grandfathering of claims
    /// created under the old one.
    // TODO: gate this on an admin identity once the staking authority
    // exposes one; today any caller may reconfigure a claim type.
    pub fn configure(
        &self,
        claim_type: ClaimTypeId,
        config: ClaimTypeConfig,
        default_helper: Option<ModuleAddress>,
    ) {
        self.registry.configure(claim_type, config, default_helper);
    }

    /// Create a claim of `claim_type` against `position`.
    ///
    /// The caller must own or be approved for the position. Issuance size is
    /// `size_hint` when supplied, otherwise the position's current claim
    /// weight. Supply lands with the resolved helper for distribution, or
    /// directly with `beneficiary` when no helper resolves.
    pub fn create(
        &self,
        caller: ModuleAddress,
        claim_type: ClaimTypeId,
        position: PositionId,
        beneficiary: ModuleAddress,
        size_hint: Option<u128>,
        helper_override: Option<ModuleAddress>,
    ) -> Result<(), ClaimError> {
        if !self.authority.is_approved_or_owner(caller, position)? {
            return Err(ClaimError::NotApprovedOrOwner { caller, position });
        }
        self.create_unchecked(claim_type, position, beneficiary, size_hint, helper_override)
    }

    /// Destroy the outstanding claim of `claim_type` against `position`,
    /// retiring supply held by `from` proportional to the position's current
    /// claim weight.
    pub fn destroy(
        &self,
        caller: ModuleAddress,
        claim_type: ClaimTypeId,
        position: PositionId,
        from: ModuleAddress,
    ) -> Result<(), ClaimError> {
        if !self.authority.is_approved_or_owner(caller, position)? {
            return Err(ClaimError::NotApprovedOrOwner { caller, position });
        }
        self.destroy_unchecked(caller, claim_type, position, from)
    }

    /// Registration hook: decode the caller-supplied instruction payload and
    /// create every instructed claim type for every registered position.
    ///
    /// `payload` is a bincode-encoded `Vec<ClaimInstruction>`; it is
    /// untrusted input and is validated before any state mutation.
    pub fn on_registration(
        &self,
        caller: ModuleAddress,
        beneficiary: ModuleAddress,
        staking_amount: u128,
        positions: &[PositionId],
        payload: &[u8],
    ) -> Result<(), ClaimError> {
        if caller != self.authority_id {
            return Err(ClaimError::NotAuthority { caller });
        }
        let instructions: Vec<ClaimInstruction> = bincode::deserialize(payload)?;
        self.register_claims(caller, beneficiary, staking_amount, positions, &instructions)
    }

    /// Pre-decoded registration path.
    ///
    /// Rejects a batch naming the same claim type twice before touching any
    /// state, then runs the create protocol once per (position, claim type)
    /// pair. Sizes are read per position; `staking_amount` is the registry's
    /// declared aggregate and is only logged.
    pub fn register_claims(
        &self,
        caller: ModuleAddress,
        beneficiary: ModuleAddress,
        staking_amount: u128,
        positions: &[PositionId],
        instructions: &[ClaimInstruction],
    ) -> Result<(), ClaimError> {
        if caller != self.authority_id {
            return Err(ClaimError::NotAuthority { caller });
        }

        // validate the untrusted batch in full before touching any state
        let mut seen = ClaimBitmap::EMPTY;
        for instruction in instructions {
            if seen.is_set(instruction.claim_type) {
                return Err(ClaimError::DuplicateClaimType {
                    claim_type: instruction.claim_type,
                });
            }
            seen = seen.with_set(instruction.claim_type);
            if !self.registry.lookup(instruction.claim_type).is_configured() {
                return Err(ClaimError::ClaimTypeNotConfigured {
                    claim_type: instruction.claim_type,
                });
            }
        }

        info!(
            %beneficiary,
            declared_stake = staking_amount,
            positions = positions.len(),
            claim_types = instructions.len(),
            "processing registration hook"
        );

        for position in positions {
            for instruction in instructions {
                self.create_unchecked(
                    instruction.claim_type,
                    *position,
                    beneficiary,
                    None,
                    instruction.helper_override,
                )?;
            }
        }
        Ok(())
    }

    /// Redemption hook: force-destroy every outstanding claim for
    /// `position`, driving its map back to all-zero. Safe to repeat; a
    /// second sweep finds nothing to destroy.
    pub fn on_redemption(
        &self,
        caller: ModuleAddress,
        position: PositionId,
        owner: ModuleAddress,
    ) -> Result<(), ClaimError> {
        if caller != self.authority_id {
            return Err(ClaimError::NotAuthority { caller });
        }

        let snapshot = self.outstanding.snapshot(position);
        if snapshot.is_empty() {
            debug!(%position, "redemption sweep found no outstanding claims");
            return Ok(());
        }

        info!(
            %position,
            outstanding = snapshot.count_set(),
            "force-destroying outstanding claims for redemption"
        );
        for claim_type in snapshot.iter_set() {
            self.destroy_unchecked(caller, claim_type, position, owner)?;
        }
        Ok(())
    }

    /// Whether `position` may be withdrawn.
    ///
    /// Fails open when asked about an authority other than the configured
    /// one, so a misconfigured registry can never strand positions behind a
    /// lock this engine does not actually manage. Otherwise a position is
    /// unlocked exactly when it has no outstanding claim.
    pub fn is_unlocked(&self, authority_identity: ModuleAddress, position: PositionId) -> bool {
        if authority_identity != self.authority_id {
            warn!(
                %authority_identity,
                configured = %self.authority_id,
                "unlock query for unrecognized authority, failing open"
            );
            return true;
        }
        self.outstanding.is_empty(position)
    }

    /// True iff `claim_type` is currently outstanding for `position`.
    pub fn is_outstanding(&self, position: PositionId, claim_type: ClaimTypeId) -> bool {
        self.outstanding.is_outstanding(position, claim_type)
    }

    /// Copy of the position's outstanding-claim map.
    pub fn outstanding_claims(&self, position: PositionId) -> ClaimBitmap {
        self.outstanding.snapshot(position)
    }

    fn create_unchecked(
        &self,
        claim_type: ClaimTypeId,
        position: PositionId,
        beneficiary: ModuleAddress,
        size_hint: Option<u128>,
        helper_override: Option<ModuleAddress>,
    ) -> Result<(), ClaimError> {
        let config = self.registry.lookup(claim_type);
        if !config.is_configured() {
            return Err(ClaimError::ClaimTypeNotConfigured { claim_type });
        }

        // a zero override is no override
        let helper_override = helper_override.filter(|helper| !helper.is_zero());

        if !self.outstanding.try_mark(position, claim_type) {
            return Err(ClaimError::AlreadyCreated {
                claim_type,
                position,
            });
        }

        match self.issue(claim_type, &config, position, beneficiary, size_hint, helper_override) {
            Ok(()) => Ok(()),
            Err(err) => {
                // no transactional host to roll us back; compensate the flag
                self.outstanding.clear(position, claim_type);
                Err(err)
            }
        }
    }

    fn issue(
        &self,
        claim_type: ClaimTypeId,
        config: &ClaimTypeConfig,
        position: PositionId,
        beneficiary: ModuleAddress,
        size_hint: Option<u128>,
        helper_override: Option<ModuleAddress>,
    ) -> Result<(), ClaimError> {
        let default_helper = self.registry.default_helper(claim_type);
        let helper = resolve_helper(claim_type, config, helper_override, default_helper)?;

        let size = match size_hint {
            Some(size) => size,
            None => self.authority.staking_token_balance(position)?,
        };

        let derivative = self.modules.derivative(config.derivative)?;
        match helper {
            Some(address) => {
                let module = self.modules.helper(address)?;
                derivative.mint(address, size)?;
                module.create_for(claim_type, config.derivative, &[position], size, beneficiary)?;
                debug!(%claim_type, %position, helper = %address, size, "issued claim supply to helper custody");
            }
            None => {
                derivative.mint(beneficiary, size)?;
                debug!(%claim_type, %position, to = %beneficiary, size, "issued claim supply to beneficiary");
            }
        }
        Ok(())
    }

    fn destroy_unchecked(
        &self,
        caller: ModuleAddress,
        claim_type: ClaimTypeId,
        position: PositionId,
        from: ModuleAddress,
    ) -> Result<(), ClaimError> {
        if !self.outstanding.is_outstanding(position, claim_type) {
            return Err(ClaimError::NotCreated {
                claim_type,
                position,
            });
        }

        let config = self.registry.lookup(claim_type);
        if !config.is_configured() {
            return Err(ClaimError::ClaimTypeNotConfigured { claim_type });
        }

        // settle against the position's value now, not the value at creation
        let amount = self.authority.staking_token_balance(position)?;
        let derivative = self.modules.derivative(config.derivative)?;
        derivative.burn(caller, from, amount)?;

        self.outstanding.clear(position, claim_type);
        debug!(%claim_type, %position, amount, "retired claim supply and cleared flag");
        Ok(())
    }
}
