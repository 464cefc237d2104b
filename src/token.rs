use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use crate::events;
use crate::storage;
use crate::types::{SkcError, TokenMetadata, TransferPhase};
use crate::validation;

// ============================================================================
// CONTRATO PRINCIPAL - SKC TOKEN
// ============================================================================

#[contract]
pub struct SkcToken;

#[contractimpl]
impl SkcToken {

    // ========================================================================
    // INICIALIZAÇÃO
    // ========================================================================

    /// Inicializa o contrato SKC. Chamada uma única vez na implantação.
    ///
    /// Credita o supply total (3 bilhões, 18 decimais) ao `admin` e grava a
    /// fase de transferência como `Restricted`. O `owner` (identidade que
    /// implantou o contrato) é registrado apenas para consulta.
    ///
    /// # Erros
    /// - `AlreadyInitialized`: se o contrato já foi inicializado
    /// - `InvalidAddress`: se `admin` for o endereço-zero
    pub fn initialize(env: Env, admin: Address, owner: Address) -> Result<(), SkcError> {
        // === CHECKS ===
        if storage::has_admin(&env) {
            return Err(SkcError::AlreadyInitialized);
        }
        validation::require_valid_admin(&env, &admin)?;

        // === EFFECTS ===
        storage::set_admin(&env, &admin);
        storage::set_owner(&env, &owner);
        storage::init_transfer_phase(&env);

        storage::set_balance(&env, &admin, storage::TOTAL_SUPPLY);
        storage::set_total_supply(&env, storage::TOTAL_SUPPLY);

        let metadata = TokenMetadata {
            name: String::from_str(&env, "SoccerK Community Token"),
            symbol: String::from_str(&env, "SKC"),
            decimals: storage::DECIMALS,
        };
        storage::set_metadata(&env, &metadata);

        // === INTERACTIONS ===
        events::emit_init(&env, &admin, storage::TOTAL_SUPPLY);

        Ok(())
    }

    // ========================================================================
    // FUNÇÕES DE LEITURA (não modificam estado)
    // ========================================================================

    /// Retorna o nome do token.
    pub fn name(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env).name
    }

    /// Retorna o símbolo do token.
    pub fn symbol(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env).symbol
    }

    /// Retorna o número de decimais.
    pub fn decimals(env: Env) -> u32 {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env).decimals
    }

    /// Retorna o balance de um endereço (0 para endereços desconhecidos).
    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    /// Retorna o supply total.
    pub fn total_supply(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        storage::get_total_supply(&env)
    }

    /// Retorna a allowance de `spender` sobre os fundos de `owner`
    /// (0 se nunca aprovada).
    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &owner, &spender)
    }

    /// Verifica se um endereço está na whitelist de transferência.
    pub fn is_whitelisted(env: Env, addr: Address) -> bool {
        storage::is_whitelisted(&env, &addr)
    }

    /// Retorna a fase de transferência corrente.
    pub fn transfer_phase(env: Env) -> TransferPhase {
        storage::get_transfer_phase(&env)
    }

    /// Retorna o endereço do admin.
    pub fn get_admin(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_admin(&env)
    }

    /// Retorna o endereço do owner (quem implantou o contrato).
    pub fn get_owner(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_owner(&env)
    }

    // ========================================================================
    // TRANSFERÊNCIAS - CEI PATTERN
    // ========================================================================

    /// Transfere tokens de `from` para `to`.
    ///
    /// # Ordem das validações
    /// 1. `to` não pode ser o endereço-zero (`InvalidRecipient`)
    /// 2. balance de `from` suficiente (`InsufficientBalance`)
    /// 3. porta de autorização: `from` é admin, OU a fase está `Open`,
    ///    OU `from` está na whitelist (`Unauthorized`)
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), SkcError> {
        // === CHECKS ===
        from.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_non_negative_amount(amount)?;
        validation::require_valid_recipient(&env, &to)?;
        validation::require_sufficient_balance(&env, &from, amount)?;
        validation::require_transfer_authorized(&env, &from)?;

        // === EFFECTS ===
        Self::apply_transfer(&env, &from, &to, amount)?;

        // === INTERACTIONS ===
        events::emit_transfer(&env, &from, &to, amount);

        Ok(())
    }

    /// Transfere `amount` de `from` para cada destinatário de `to_list`.
    ///
    /// Atômico: a autorização é validada uma vez, o débito total
    /// (`amount * to_list.len()`) é validado contra o balance, e cada
    /// destinatário é checado contra o endereço-zero ANTES de qualquer
    /// escrita. Ou todas as pernas aplicam, ou nenhuma.
    pub fn batch_transfer(
        env: Env,
        from: Address,
        to_list: Vec<Address>,
        amount: i128,
    ) -> Result<(), SkcError> {
        // === CHECKS ===
        from.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_non_negative_amount(amount)?;
        for to in to_list.iter() {
            validation::require_valid_recipient(&env, &to)?;
        }

        let total = amount
            .checked_mul(to_list.len() as i128)
            .ok_or(SkcError::InvalidAmount)?;
        validation::require_sufficient_balance(&env, &from, total)?;
        validation::require_transfer_authorized(&env, &from)?;

        // === EFFECTS ===
        for to in to_list.iter() {
            Self::apply_transfer(&env, &from, &to, amount)?;
        }

        // === INTERACTIONS ===
        for to in to_list.iter() {
            events::emit_transfer(&env, &from, &to, amount);
        }

        Ok(())
    }

    // ========================================================================
    // ALLOWANCE
    // ========================================================================

    /// Aprova `spender` a gastar até `amount` dos fundos de `owner`.
    /// Semântica de re-aprovação padrão: sobrescreve, não soma.
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), SkcError> {
        // === CHECKS ===
        owner.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_non_negative_amount(amount)?;

        // === EFFECTS ===
        storage::set_allowance(&env, &owner, &spender, amount);

        // === INTERACTIONS ===
        events::emit_approval(&env, &owner, &spender, amount);

        Ok(())
    }

    // ========================================================================
    // FUNÇÕES ADMINISTRATIVAS (whitelist, ativação, burn)
    // ========================================================================

    /// Adiciona um endereço à whitelist de transferência (apenas admin).
    /// Idempotente: adicionar duas vezes não é erro.
    pub fn add_whitelisted_transfer(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), SkcError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_admin(&env, &caller)?;

        // === EFFECTS ===
        storage::add_whitelisted(&env, &account);

        // === INTERACTIONS ===
        events::emit_whitelist_added(&env, &account);

        Ok(())
    }

    /// Abre a fase de transferência para todos (apenas admin).
    /// Idempotente e irreversível: não existe caminho de volta para
    /// `Restricted`.
    pub fn active_transfer(env: Env, caller: Address) -> Result<(), SkcError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_admin(&env, &caller)?;

        // === EFFECTS ===
        storage::open_transfers(&env);

        // === INTERACTIONS ===
        events::emit_transfer_activated(&env);

        Ok(())
    }

    /// Destrói tokens do balance do admin, reduzindo o supply total
    /// (apenas admin). Única operação que reduz o supply; não há mint.
    pub fn burn(env: Env, caller: Address, amount: i128) -> Result<(), SkcError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_admin(&env, &caller)?;
        validation::require_non_negative_amount(amount)?;
        validation::require_sufficient_balance(&env, &caller, amount)?;

        // === EFFECTS ===
        let admin_balance = storage::get_balance(&env, &caller);
        let new_balance = admin_balance
            .checked_sub(amount)
            .ok_or(SkcError::InsufficientBalance)?;

        let current_supply = storage::get_total_supply(&env);
        let new_supply = current_supply
            .checked_sub(amount)
            .ok_or(SkcError::InvalidAmount)?;

        storage::set_balance(&env, &caller, new_balance);
        storage::set_total_supply(&env, new_supply);

        // === INTERACTIONS ===
        events::emit_burn(&env, &caller, amount);

        Ok(())
    }

    // ========================================================================
    // INTERNO
    // ========================================================================

    /// Aplica débito e crédito de uma perna de transferência. O débito é
    /// gravado antes da leitura do crédito para que `from == to` seja
    /// neutro em vez de inflacionar o balance.
    fn apply_transfer(
        env: &Env,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), SkcError> {
        let from_balance = storage::get_balance(env, from);
        let new_from_balance = from_balance
            .checked_sub(amount)
            .ok_or(SkcError::InsufficientBalance)?;
        storage::set_balance(env, from, new_from_balance);

        let to_balance = storage::get_balance(env, to);
        let new_to_balance = to_balance
            .checked_add(amount)
            .ok_or(SkcError::InvalidAmount)?;
        storage::set_balance(env, to, new_to_balance);

        storage::bump_balance(env, from);
        storage::bump_balance(env, to);

        Ok(())
    }
}

// ============================================================================
// TESTES UNITÁRIOS
// ============================================================================
