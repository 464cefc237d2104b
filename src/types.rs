use soroban_sdk::{contracttype, contracterror, String};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SkcError {
    AlreadyInitialized = 1,
    InvalidAddress = 2,
    InvalidRecipient = 3,
    InsufficientBalance = 4,
    Unauthorized = 5,
    InvalidAmount = 6,
}

// ============================================================================
// METADADOS DO TOKEN
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

// ============================================================================
// FASE DE TRANSFERÊNCIA
// ============================================================================

/// Máquina de estados de mão única: o contrato nasce em `Restricted`
/// (somente admin e whitelist transferem) e a única transição permitida
/// é `Restricted -> Open`, feita por `activate_transfer`. Nenhum código
/// escreve `Restricted` depois da inicialização.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransferPhase {
    Restricted,
    Open,
}

impl TransferPhase {
    /// Transferência liberada para qualquer endereço?
    pub fn is_open(&self) -> bool {
        matches!(self, TransferPhase::Open)
    }
}
