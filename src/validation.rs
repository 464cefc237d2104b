use soroban_sdk::{Address, Env, String};
use crate::storage;
use crate::types::SkcError;

// ============================================================================
// VALIDAÇÕES (CEI Pattern - todas rodam antes de qualquer escrita)
// ============================================================================

/// Strkey ed25519 com chave pública toda zerada. É o sentinelo que o
/// formato de endereço do host escreve como 0x0...0.
const ZERO_ADDRESS_STRKEY: &str =
    "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Retorna o endereço-zero sentinelo.
pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ADDRESS_STRKEY))
}

/// Valida se o caller é o admin
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), SkcError> {
    let admin = storage::get_admin(env);
    if caller != &admin {
        return Err(SkcError::Unauthorized);
    }
    Ok(())
}

/// Valida o admin passado na inicialização (não pode ser o endereço-zero)
pub fn require_valid_admin(env: &Env, admin: &Address) -> Result<(), SkcError> {
    if admin == &zero_address(env) {
        return Err(SkcError::InvalidAddress);
    }
    Ok(())
}

/// Valida o destinatário de uma transferência (não pode ser o endereço-zero)
pub fn require_valid_recipient(env: &Env, to: &Address) -> Result<(), SkcError> {
    if to == &zero_address(env) {
        return Err(SkcError::InvalidRecipient);
    }
    Ok(())
}

/// Valida se o amount é válido (>= 0; amounts são i128 escalados por 10^18)
pub fn require_non_negative_amount(amount: i128) -> Result<(), SkcError> {
    if amount < 0 {
        return Err(SkcError::InvalidAmount);
    }
    Ok(())
}

/// Valida se o balance é suficiente
pub fn require_sufficient_balance(
    env: &Env,
    addr: &Address,
    required: i128,
) -> Result<(), SkcError> {
    let balance = storage::get_balance(env, addr);
    if balance < required {
        return Err(SkcError::InsufficientBalance);
    }
    Ok(())
}

/// Porta de autorização de transferência: admin sempre pode; depois que a
/// fase abre, qualquer um pode; na fase restrita, só quem está na whitelist.
pub fn require_transfer_authorized(env: &Env, from: &Address) -> Result<(), SkcError> {
    let admin = storage::get_admin(env);
    if from == &admin {
        return Ok(());
    }
    if storage::get_transfer_phase(env).is_open() {
        return Ok(());
    }
    if storage::is_whitelisted(env, from) {
        return Ok(());
    }
    Err(SkcError::Unauthorized)
}
