//! Module directory
//!
//! Binds module addresses to live collaborator handles. Configuration and
//! hook payloads reference modules by address; at call time the address must
//! resolve to a bound implementation or the call fails with a routing error.
//! Bindings may be replaced at any time and are never purged, matching the
//! no-deletion posture of the other registries.

use crate::error::ClaimError;
use crate::traits::{DerivativeToken, HelperModule};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use types::ModuleAddress;

#[derive(Default)]
pub struct ModuleDirectory {
    derivatives: DashMap<ModuleAddress, Arc<dyn DerivativeToken>>,
    helpers: DashMap<ModuleAddress, Arc<dyn HelperModule>>,
}

impl ModuleDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_derivative(&self, address: ModuleAddress, module: Arc<dyn DerivativeToken>) {
        if self.derivatives.insert(address, module).is_some() {
            warn!(%address, "derivative binding replaced");
        } else {
            debug!(%address, "derivative bound");
        }
    }

    pub fn bind_helper(&self, address: ModuleAddress, module: Arc<dyn HelperModule>) {
        if self.helpers.insert(address, module).is_some() {
            warn!(%address, "helper binding replaced");
        } else {
            debug!(%address, "helper bound");
        }
    }

    pub fn derivative(&self, address: ModuleAddress) -> Result<Arc<dyn DerivativeToken>, ClaimError> {
        self.derivatives
            .get(&address)
            .map(|module| module.value().clone())
            .ok_or(ClaimError::ModuleUnavailable { address })
    }

    pub fn helper(&self, address: ModuleAddress) -> Result<Arc<dyn HelperModule>, ClaimError> {
        self.helpers
            .get(&address)
            .map(|module| module.value().clone())
            .ok_or(ClaimError::ModuleUnavailable { address })
    }
}
