//! Redemption sweep scenarios
//!
//! On redemption the registry force-destroys every outstanding claim for the
//! position, driving the map back to all-zero so the position reports
//! unlocked. The sweep is idempotent and only the registry may drive it.

use assert_matches::assert_matches;
use claims::ClaimError;
use tentacle_e2e_tests::fixtures::{World, BENEFICIARY, REGISTRY};
use types::{ClaimTypeConfig, ClaimTypeId, ModuleAddress, PositionId};

const OWNER: ModuleAddress = ModuleAddress::new([0x01; 20]);
const OUTSIDER: ModuleAddress = ModuleAddress::new([0x66; 20]);
const POS: PositionId = PositionId::new(42);

/// World with position 42 (weight 1000) carrying outstanding claims {0, 2}.
fn locked_world() -> World {
    let world = World::new();
    world.authority.register_position(POS, OWNER, 1_000);
    for id in [0u8, 2, 5] {
        world.configure_claim_type(ClaimTypeId::new(id), ClaimTypeConfig::default());
    }
    for id in [0u8, 2] {
        world
            .manager
            .create(OWNER, ClaimTypeId::new(id), POS, BENEFICIARY, None, None)
            .unwrap();
    }
    world
}

#[test]
fn sweep_destroys_exactly_the_outstanding_claims() {
    let world = locked_world();
    assert_eq!(world.manager.outstanding_claims(POS).count_set(), 2);
    assert!(!world.manager.is_unlocked(REGISTRY, POS));

    world.manager.on_redemption(REGISTRY, POS, OWNER).unwrap();

    // both flags retired against the position's current weight, nothing else
    let burns = world.derivative.burns();
    assert_eq!(burns, vec![(REGISTRY, OWNER, 1_000), (REGISTRY, OWNER, 1_000)]);
    assert!(world.manager.outstanding_claims(POS).is_empty());
    assert!(world.manager.is_unlocked(REGISTRY, POS));
}

#[test]
fn sweep_is_idempotent() {
    let world = locked_world();
    world.manager.on_redemption(REGISTRY, POS, OWNER).unwrap();
    world.manager.on_redemption(REGISTRY, POS, OWNER).unwrap();

    // the second sweep found nothing to destroy
    assert_eq!(world.derivative.burns().len(), 2);
    assert!(world.manager.is_unlocked(REGISTRY, POS));
}

#[test]
fn unlock_reporting_fails_open_for_foreign_authorities() {
    let world = locked_world();
    // locked for the configured registry...
    assert!(!world.manager.is_unlocked(REGISTRY, POS));
    // ...but a query naming any other authority is answered unlocked, so a
    // misconfigured registry can never strand the position
    assert!(world.manager.is_unlocked(OUTSIDER, POS));
}

#[test]
fn sweep_rejects_callers_other_than_the_registry() {
    let world = locked_world();
    assert_matches!(
        world.manager.on_redemption(OUTSIDER, POS, OWNER),
        Err(ClaimError::NotAuthority { .. })
    );
    // still locked
    assert_eq!(world.manager.outstanding_claims(POS).count_set(), 2);
}

#[test]
fn position_is_reusable_after_redemption() {
    let world = locked_world();
    world.manager.on_redemption(REGISTRY, POS, OWNER).unwrap();

    world
        .manager
        .create(OWNER, ClaimTypeId::new(5), POS, BENEFICIARY, None, None)
        .unwrap();
    assert!(world.manager.is_outstanding(POS, ClaimTypeId::new(5)));
    assert!(!world.manager.is_unlocked(REGISTRY, POS));
}
