#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use setup::{TestEnv, TOTAL_SUPPLY};
use skc_token::{SkcError, TransferPhase};
use soroban_sdk::String;

// ============================================================================
// 1. CRIAÇÃO E METADADOS
// ============================================================================

#[test]
fn test_creation_transfers_ownership_correctly() {
    let t = TestEnv::new();

    // O admin deve ter os 3 bilhões de tokens
    assert_eq!(t.client.balance(&t.admin), TOTAL_SUPPLY);
}

#[test]
fn test_creation_sets_token_info_correctly() {
    let t = TestEnv::new();

    assert_eq!(t.client.total_supply(), TOTAL_SUPPLY);
    assert_eq!(
        t.client.name(),
        String::from_str(&t.env, "SoccerK Community Token")
    );
    assert_eq!(t.client.decimals(), 18);
    assert_eq!(t.client.symbol(), String::from_str(&t.env, "SKC"));
}

#[test]
fn test_creation_records_admin_and_owner() {
    let t = TestEnv::new();

    assert_eq!(t.client.get_admin(), t.admin);
    assert_eq!(t.client.get_owner(), t.owner);
    assert_ne!(t.admin, t.owner);
}

#[test]
fn test_creation_starts_restricted() {
    let t = TestEnv::new();

    assert_eq!(t.client.transfer_phase(), TransferPhase::Restricted);

    // Usuário qualquer não está na whitelist
    let user = t.create_user();
    assert_eq!(t.client.is_whitelisted(&user), false);
}

#[test]
fn test_unknown_account_has_zero_balance() {
    let t = TestEnv::new();
    let stranger = t.create_user();

    assert_eq!(t.client.balance(&stranger), 0);
}

#[test]
fn test_cannot_initialize_twice() {
    let t = TestEnv::new();

    let res = t.client.try_initialize(&t.admin, &t.owner);
    assert_eq!(res.unwrap_err().unwrap(), SkcError::AlreadyInitialized);

    // Estado original intacto
    assert_eq!(t.client.balance(&t.admin), TOTAL_SUPPLY);
}
