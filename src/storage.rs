use soroban_sdk::{Address, Env, symbol_short};
use crate::types::{TokenMetadata, TransferPhase};

// ============================================================================
// CONSTANTES
// ============================================================================

/// Supply total: 3 bilhões SKC com 18 decimais (3e27).
/// Creditado integralmente ao admin na inicialização; só diminui via burn.
pub const TOTAL_SUPPLY: i128 = 3_000_000_000_000_000_000_000_000_000;

/// Decimais fixos do token
pub const DECIMALS: u32 = 18;

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (admin, owner, phase, supply, metadata)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

/// Faz bump do TTL de balance de um endereço
pub fn bump_balance(env: &Env, addr: &Address) {
    let key = (symbol_short!("balance"), addr);
    if env.storage().persistent().has(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            CRITICAL_STORAGE_THRESHOLD,
            CRITICAL_STORAGE_TTL,
        );
    }
}

// ============================================================================
// ADMIN / OWNER
// ============================================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("admin"))
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("admin")).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&symbol_short!("admin"), admin);
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("owner")).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&symbol_short!("owner"), owner);
}

// ============================================================================
// FASE DE TRANSFERÊNCIA
// ============================================================================

pub fn get_transfer_phase(env: &Env) -> TransferPhase {
    env.storage()
        .instance()
        .get(&symbol_short!("phase"))
        .unwrap_or(TransferPhase::Restricted)
}

/// Única escrita de fase fora da inicialização. Só existe a transição
/// Restricted -> Open; não há função que grave Restricted de volta.
pub fn open_transfers(env: &Env) {
    env.storage()
        .instance()
        .set(&symbol_short!("phase"), &TransferPhase::Open);
}

pub fn init_transfer_phase(env: &Env) {
    env.storage()
        .instance()
        .set(&symbol_short!("phase"), &TransferPhase::Restricted);
}

// ============================================================================
// TOTAL SUPPLY
// ============================================================================

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}

// ============================================================================
// BALANCE
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().set(&key, &amount);
}

// ============================================================================
// ALLOWANCE
// ============================================================================

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = (symbol_short!("allowance"), owner, spender);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = (symbol_short!("allowance"), owner, spender);
    env.storage().persistent().set(&key, &amount);
}

// ============================================================================
// WHITELIST
// ============================================================================

pub fn is_whitelisted(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("whitelist"), addr);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(false)
}

/// Inserção idempotente; não existe remoção da whitelist.
pub fn add_whitelisted(env: &Env, addr: &Address) {
    let key = (symbol_short!("whitelist"), addr);
    env.storage().persistent().set(&key, &true);
}

// ============================================================================
// METADATA
// ============================================================================

pub fn get_metadata(env: &Env) -> TokenMetadata {
    env.storage().instance().get(&symbol_short!("metadata")).unwrap()
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&symbol_short!("metadata"), metadata);
}
