//! Helper resolution
//!
//! Decides which helper module, if any, receives a freshly issued claim.
//! This is an ordered decision table, not a chain of independent checks:
//! the forced-default rule subsumes "override equals default" as a
//! non-conflicting case, so an override that merely restates the configured
//! default never trips the conflict policy.

use crate::error::ClaimError;
use types::{ClaimTypeConfig, ClaimTypeId, ModuleAddress};

/// Resolve the helper for one create.
///
/// Table, in order:
/// 1. no default helper configured → the caller's override stands, present
///    or not;
/// 2. the default is forced, or the caller supplied no override → the
///    default stands, except that a present override naming a *different*
///    helper while `revert_on_forced_override` is set is a policy conflict;
/// 3. otherwise (default exists, not forced, override present) → the
///    override stands.
pub fn resolve_helper(
    claim_type: ClaimTypeId,
    config: &ClaimTypeConfig,
    requested: Option<ModuleAddress>,
    default_helper: Option<ModuleAddress>,
) -> Result<Option<ModuleAddress>, ClaimError> {
    if !config.has_default_helper {
        return Ok(requested);
    }

    if config.force_default || requested.is_none() {
        if config.revert_on_forced_override {
            if let Some(requested) = requested {
                if Some(requested) != default_helper {
                    return Err(ClaimError::DefaultHelperConflict {
                        claim_type,
                        requested,
                        default: default_helper.unwrap_or(ModuleAddress::ZERO),
                    });
                }
            }
        }
        return Ok(default_helper);
    }

    Ok(requested)
}
