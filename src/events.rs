use soroban_sdk::{Address, Env, symbol_short};

//
// EVENTOS DO TOKEN
//

// Crédito inicial do supply ao admin
pub fn emit_init(env: &Env, admin: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("init"), admin),
        amount,
    );
}

// Transferência padrão SEP‑0041
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from, to),
        amount,
    );
}

// Burn padrão SEP‑0041
pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("burn"), from),
        amount,
    );
}

// Evento de aprovação (compatível SEP‑41 + ERC‑20)
pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), owner, spender),
        amount,
    );
}

// Endereço adicionado à whitelist de transferência
pub fn emit_whitelist_added(env: &Env, addr: &Address) {
    env.events().publish(
        (symbol_short!("wl_add"), addr),
        true,
    );
}

// Fase de transferência aberta (Restricted -> Open)
pub fn emit_transfer_activated(env: &Env) {
    env.events().publish(
        (symbol_short!("activate"),),
        true,
    );
}

//
// TESTES
//
