//! Claim-type registry
//!
//! Maps each 8-bit claim-type id to its configuration and optional default
//! helper, both written together by `configure`. Entries persist for the
//! life of the process and are never purged; reconfiguring an id silently
//! overwrites the previous entry with no transition period, so in-flight
//! claims observe the new configuration immediately.

use dashmap::DashMap;
use tracing::{info, warn};
use types::{ClaimTypeConfig, ClaimTypeId, ModuleAddress};

#[derive(Debug, Clone, Copy)]
struct ClaimTypeEntry {
    config: ClaimTypeConfig,
    /// Stored as an address with zero meaning "none"; lookups normalize.
    default_helper: ModuleAddress,
}

#[derive(Debug, Default)]
pub struct ClaimRegistry {
    entries: DashMap<ClaimTypeId, ClaimTypeEntry>,
}

impl ClaimRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store configuration and default helper for `claim_type`,
    /// unconditionally overwriting any prior entry.
    pub fn configure(
        &self,
        claim_type: ClaimTypeId,
        config: ClaimTypeConfig,
        default_helper: Option<ModuleAddress>,
    ) {
        let entry = ClaimTypeEntry {
            config,
            default_helper: default_helper.unwrap_or(ModuleAddress::ZERO),
        };
        if self.entries.insert(claim_type, entry).is_some() {
            warn!(%claim_type, derivative = %config.derivative, "claim type reconfigured, previous entry overwritten");
        } else {
            info!(%claim_type, derivative = %config.derivative, "claim type configured");
        }
    }

    /// Stored configuration, or the zero-value sentinel for ids never
    /// configured.
    pub fn lookup(&self, claim_type: ClaimTypeId) -> ClaimTypeConfig {
        self.entries
            .get(&claim_type)
            .map(|entry| entry.config)
            .unwrap_or(ClaimTypeConfig::UNCONFIGURED)
    }

    /// Default helper for `claim_type`, `None` when unset or stored as the
    /// null address. Callers must not assume a present default just because
    /// the config's `has_default_helper` flag is true.
    pub fn default_helper(&self, claim_type: ClaimTypeId) -> Option<ModuleAddress> {
        self.entries
            .get(&claim_type)
            .map(|entry| entry.default_helper)
            .filter(|helper| !helper.is_zero())
    }
}
