//! Registration hook scenarios
//!
//! The staking registry batch-creates claims while registering positions:
//! every instructed claim type is created for every registered position,
//! untrusted instruction batches are validated before any state mutation,
//! and only the configured registry identity may drive the hook.

use assert_matches::assert_matches;
use claims::ClaimError;
use tentacle_e2e_tests::fixtures::{World, BENEFICIARY, DERIVATIVE, LOCK_MANAGER, REGISTRY};
use types::{ClaimInstruction, ClaimTypeConfig, ClaimTypeId, ModuleAddress, PositionId};

const OWNER: ModuleAddress = ModuleAddress::new([0x01; 20]);
const OUTSIDER: ModuleAddress = ModuleAddress::new([0x66; 20]);
const POS_A: PositionId = PositionId::new(1);
const POS_B: PositionId = PositionId::new(2);

fn encode(instructions: &[ClaimInstruction]) -> Vec<u8> {
    bincode::serialize(&instructions.to_vec()).expect("instruction batch encodes")
}

fn registration_world() -> World {
    let world = World::new();
    world.authority.register_position(POS_A, OWNER, 100);
    world.authority.register_position(POS_B, OWNER, 250);
    world.configure_claim_type(ClaimTypeId::new(3), ClaimTypeConfig::default());
    world.configure_claim_type(ClaimTypeId::new(5), ClaimTypeConfig::default());
    world
}

#[test]
fn registration_creates_each_claim_for_each_position() {
    let world = registration_world();
    let payload = encode(&[
        ClaimInstruction::new(ClaimTypeId::new(3), None),
        ClaimInstruction::new(ClaimTypeId::new(5), None),
    ]);

    world
        .manager
        .on_registration(REGISTRY, BENEFICIARY, 350, &[POS_A, POS_B], &payload)
        .unwrap();

    for position in [POS_A, POS_B] {
        assert!(world.manager.is_outstanding(position, ClaimTypeId::new(3)));
        assert!(world.manager.is_outstanding(position, ClaimTypeId::new(5)));
        assert_eq!(world.manager.outstanding_claims(position).count_set(), 2);
        assert!(!world.manager.is_unlocked(REGISTRY, position));
    }

    // one issuance per pair, each sized from its own position's weight
    let mints = world.derivative.mints();
    assert_eq!(mints.len(), 4);
    assert_eq!(mints.iter().filter(|m| **m == (BENEFICIARY, 100)).count(), 2);
    assert_eq!(mints.iter().filter(|m| **m == (BENEFICIARY, 250)).count(), 2);
    assert_eq!(world.derivative.balance_of(BENEFICIARY), 700);
}

#[test]
fn predecoded_batch_path_matches_the_hook() {
    let world = registration_world();
    let instructions = [ClaimInstruction::new(ClaimTypeId::new(3), None)];

    world
        .manager
        .register_claims(REGISTRY, BENEFICIARY, 100, &[POS_A], &instructions)
        .unwrap();

    assert!(world.manager.is_outstanding(POS_A, ClaimTypeId::new(3)));
    assert_eq!(world.derivative.mints(), vec![(BENEFICIARY, 100)]);
}

#[test]
fn duplicate_claim_type_in_one_batch_is_rejected_untouched() {
    let world = registration_world();
    let payload = encode(&[
        ClaimInstruction::new(ClaimTypeId::new(3), None),
        ClaimInstruction::new(ClaimTypeId::new(3), None),
    ]);

    assert_matches!(
        world
            .manager
            .on_registration(REGISTRY, BENEFICIARY, 350, &[POS_A, POS_B], &payload),
        Err(ClaimError::DuplicateClaimType { claim_type }) if claim_type == ClaimTypeId::new(3)
    );

    // validation failed before any state mutation
    assert!(world.manager.outstanding_claims(POS_A).is_empty());
    assert!(world.manager.outstanding_claims(POS_B).is_empty());
    assert!(world.derivative.mints().is_empty());
}

#[test]
fn unconfigured_claim_type_in_a_batch_is_rejected_untouched() {
    let world = registration_world();
    let payload = encode(&[
        ClaimInstruction::new(ClaimTypeId::new(3), None),
        ClaimInstruction::new(ClaimTypeId::new(9), None),
    ]);

    assert_matches!(
        world
            .manager
            .on_registration(REGISTRY, BENEFICIARY, 350, &[POS_A], &payload),
        Err(ClaimError::ClaimTypeNotConfigured { claim_type }) if claim_type == ClaimTypeId::new(9)
    );

    assert!(world.manager.outstanding_claims(POS_A).is_empty());
    assert!(world.derivative.mints().is_empty());
}

#[test]
fn hook_rejects_callers_other_than_the_registry() {
    let world = registration_world();
    let payload = encode(&[ClaimInstruction::new(ClaimTypeId::new(3), None)]);

    assert_matches!(
        world
            .manager
            .on_registration(OUTSIDER, BENEFICIARY, 100, &[POS_A], &payload),
        Err(ClaimError::NotAuthority { caller }) if caller == OUTSIDER
    );
    assert!(world.manager.outstanding_claims(POS_A).is_empty());
}

#[test]
fn malformed_instruction_payload_is_rejected() {
    let world = registration_world();

    assert_matches!(
        world
            .manager
            .on_registration(REGISTRY, BENEFICIARY, 100, &[POS_A], &[0xff, 0xff, 0xff]),
        Err(ClaimError::MalformedInstructions(_))
    );
    assert!(world.manager.outstanding_claims(POS_A).is_empty());
}

#[test]
fn registry_reports_the_installed_lock_manager() {
    use claims::StakingAuthority;

    let world = registration_world();
    // the registry wires positions to a lock manager before it ever invokes
    // the hooks; the fixture mirrors that contract
    assert_eq!(world.authority.lock_manager(POS_A).unwrap(), LOCK_MANAGER);
    assert_eq!(
        world.manager.outstanding_claims(POS_A),
        types::ClaimBitmap::EMPTY
    );
    // derivative address is shared by every configured claim type here
    assert!(!DERIVATIVE.is_zero());
}
