//! Open → Calculating transition driven by an external upkeep agent.
//!
//! The agent polls [`check_upkeep`] and calls [`perform_upkeep`] once it
//! reports `upkeep_needed`. The transition re-checks the same predicate, so
//! a stale or eager caller only ever gets `UpkeepNotNeeded`.

use soroban_sdk::{Bytes, Env};

use crate::{
    error::{AuctionResult, ErrorCode},
    events::AuctionEvents,
    storage::{get_current_round, get_round, get_state, next_request_id, save_state},
    types::{AuctionState, Round, UpkeepCheck},
    validate,
};

/// True once the window has elapsed on an open round that holds escrow from
/// at least one bidder.
pub fn upkeep_needed(round: &Round, state: AuctionState, now: u64) -> bool {
    let time_passed = round.has_elapsed(now);
    let is_open = state == AuctionState::Open;
    let has_balance = round.total_escrowed > 0;
    let has_players = round.participants > 0;

    time_passed && is_open && has_balance && has_players
}

fn is_upkeep_needed(env: &Env) -> bool {
    match (get_round(env), get_state(env)) {
        (Some(round), Some(state)) => upkeep_needed(&round, state, env.ledger().timestamp()),
        _ => false,
    }
}

pub fn open(env: &Env) {
    save_state(env, AuctionState::Open);
}

pub fn get_auction_state(env: &Env) -> AuctionResult<AuctionState> {
    get_state(env).ok_or(ErrorCode::NotInitialized)
}

pub fn check_upkeep(env: &Env, check_data: Bytes) -> UpkeepCheck {
    UpkeepCheck {
        upkeep_needed: is_upkeep_needed(env),
        perform_data: check_data,
    }
}

/// Closes the round and returns the request id of the finalization step.
pub fn perform_upkeep(env: &Env, _perform_data: Bytes) -> AuctionResult<u64> {
    validate!(
        env,
        is_upkeep_needed(env),
        ErrorCode::UpkeepNotNeeded,
        "Auction: Perform Upkeep: upkeep not needed"
    )?;

    let round = get_current_round(env)?;
    save_state(env, AuctionState::Calculating);

    let request_id = next_request_id(env)?;
    AuctionEvents::upkeep_performed(env, round.id, request_id);

    Ok(request_id)
}
