use soroban_sdk::{contracttype, log, panic_with_error, Address, Env, String};

use crate::{
    constants::{
        FIRST_REQUEST_ID, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{AuctionResult, ErrorCode},
    types::{AuctionState, Config, Item, Round},
};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Round,
    Item(u32, String),
    Participant(u32, Address),
    PendingRefund(Address),
    State,
    RequestId,
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ################################################################
//                             Config
// ################################################################

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Auction: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });
    bump_instance(env);

    config
}

// ################################################################
//                             Round
// ################################################################

pub fn save_round(env: &Env, round: &Round) {
    env.storage().persistent().set(&DataKey::Round, round);
    bump_persistent(env, &DataKey::Round);
}

pub fn get_round(env: &Env) -> Option<Round> {
    let round = env.storage().persistent().get::<_, Round>(&DataKey::Round);
    if round.is_some() {
        bump_persistent(env, &DataKey::Round);
    }

    round
}

pub fn get_current_round(env: &Env) -> AuctionResult<Round> {
    get_round(env).ok_or_else(|| {
        log!(env, "Auction: no round has been initialized");
        ErrorCode::NotInitialized
    })
}

// ################################################################
//                             Items
// ################################################################

pub fn save_item(env: &Env, round_id: u32, item: &Item) {
    let key = DataKey::Item(round_id, item.name.clone());
    env.storage().persistent().set(&key, item);
    bump_persistent(env, &key);
}

pub fn get_item(env: &Env, round_id: u32, name: &String) -> Option<Item> {
    let key = DataKey::Item(round_id, name.clone());
    let item = env.storage().persistent().get::<_, Item>(&key);
    if item.is_some() {
        bump_persistent(env, &key);
    }

    item
}

pub fn has_item(env: &Env, round_id: u32, name: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Item(round_id, name.clone()))
}

// ################################################################
//                           Participants
// ################################################################

pub fn is_participant(env: &Env, round_id: u32, bidder: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Participant(round_id, bidder.clone()))
}

pub fn set_participant(env: &Env, round_id: u32, bidder: &Address) {
    let key = DataKey::Participant(round_id, bidder.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

// ################################################################
//                          Pending refunds
// ################################################################

pub fn get_pending_refund(env: &Env, bidder: &Address) -> i128 {
    let key = DataKey::PendingRefund(bidder.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn save_pending_refund(env: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::PendingRefund(bidder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ################################################################
//                          Lifecycle state
// ################################################################

pub fn get_state(env: &Env) -> Option<AuctionState> {
    env.storage().instance().get(&DataKey::State)
}

pub fn save_state(env: &Env, state: AuctionState) {
    env.storage().instance().set(&DataKey::State, &state);
    bump_instance(env);
}

/// Hands out the next upkeep request id.
pub fn next_request_id(env: &Env) -> AuctionResult<u64> {
    let current = env
        .storage()
        .instance()
        .get::<_, u64>(&DataKey::RequestId)
        .unwrap_or(FIRST_REQUEST_ID);
    let next = current.checked_add(1).ok_or(ErrorCode::MathError)?;
    env.storage().instance().set(&DataKey::RequestId, &next);
    bump_instance(env);

    Ok(current)
}
