use soroban_sdk::{log, Address, Env, Map, String, Vec};

use crate::{
    error::{AuctionResult, ErrorCode},
    escrow,
    events::AuctionEvents,
    storage::{
        get_config, get_current_round, get_item, get_round, has_item, save_config, save_item,
        save_round,
    },
    types::{AuctionState, Config, Item, Round},
    validate,
};

pub fn init_config(env: &Env, owner: Address, bid_token: Address) {
    save_config(env, &Config { owner, bid_token });
}

pub fn ensure_owner(env: &Env, config: &Config, sender: &Address) -> AuctionResult {
    validate!(
        env,
        config.owner == *sender,
        ErrorCode::NotOwner,
        "Auction: You are not authorized!"
    )
}

/// Returns the first item name that appears more than once.
pub fn find_duplicate(env: &Env, items: &Vec<String>) -> Option<String> {
    let mut seen: Map<String, bool> = Map::new(env);
    for item in items.iter() {
        if seen.contains_key(item.clone()) {
            return Some(item);
        }
        seen.set(item, true);
    }

    None
}

/// Checks the arguments of a new round. Nothing is written.
pub fn validate_init(
    env: &Env,
    items: &Vec<String>,
    initial_bids: &Vec<i128>,
    start_time: u64,
    end_time: u64,
) -> AuctionResult {
    validate!(
        env,
        !items.is_empty(),
        ErrorCode::EmptyList,
        "Auction: Init Auction: at least one item must be provided"
    )?;
    validate!(
        env,
        items.len() == initial_bids.len(),
        ErrorCode::WrongArraySize,
        "Auction: Init Auction: items and initial bids differ in length",
        items.len(),
        initial_bids.len()
    )?;
    validate!(
        env,
        start_time < end_time,
        ErrorCode::WrongTimeValues,
        "Auction: Init Auction: start time must be before end time",
        start_time,
        end_time
    )?;
    validate!(
        env,
        initial_bids.iter().all(|bid| bid >= 0),
        ErrorCode::InvalidAmount,
        "Auction: Init Auction: initial bids cannot be negative"
    )?;
    validate!(
        env,
        find_duplicate(env, items).is_none(),
        ErrorCode::DuplicateItems,
        "Auction: Init Auction: item names must be unique"
    )?;

    Ok(())
}

/// Opens a new round, replacing the previous one.
pub fn init_auction(
    env: &Env,
    sender: &Address,
    items: Vec<String>,
    initial_bids: Vec<i128>,
    start_time: u64,
    end_time: u64,
) -> AuctionResult<Round> {
    sender.require_auth();

    let config = get_config(env);
    ensure_owner(env, &config, sender)?;
    validate_init(env, &items, &initial_bids, start_time, end_time)?;

    let id = match get_round(env) {
        Some(previous) => {
            release_round(env, &config, &previous)?;
            previous.id.checked_add(1).ok_or(ErrorCode::MathError)?
        }
        None => 1,
    };

    for (name, initial_bid) in items.iter().zip(initial_bids.iter()) {
        save_item(env, id, &Item::new(name, initial_bid));
    }

    let round = Round {
        id,
        items,
        start_time,
        end_time,
        total_escrowed: 0,
        participants: 0,
        settled: false,
    };
    save_round(env, &round);

    AuctionEvents::auction_initialized(env, id, start_time, end_time, round.items.len());

    Ok(round)
}

/// Releases whatever the previous round still holds before it is replaced.
/// An elapsed round pays its winning bids to the owner, a live one refunds
/// every leader.
fn release_round(env: &Env, config: &Config, previous: &Round) -> AuctionResult {
    if previous.settled || previous.total_escrowed == 0 {
        return Ok(());
    }

    if previous.has_elapsed(env.ledger().timestamp()) {
        escrow::pay_out(env, config, &config.owner, previous.total_escrowed);
        AuctionEvents::proceeds_withdrawn(
            env,
            config.owner.clone(),
            previous.id,
            previous.total_escrowed,
        );
        return Ok(());
    }

    log!(env, "Auction: Init Auction: refunding live round", previous.id);

    for name in previous.items.iter() {
        if let Some(item) = get_item(env, previous.id, &name) {
            if let Some(leader) = item.highest_bidder {
                escrow::refund(env, config, &leader, item.escrowed)?;
            }
        }
    }

    Ok(())
}

/// Looks up an item of the current round.
pub fn get_current_item(env: &Env, name: &String) -> AuctionResult<(Round, Item)> {
    let round = get_current_round(env)?;
    let item = get_item(env, round.id, name).ok_or_else(|| {
        log!(env, "Auction: unknown item", name.clone());
        ErrorCode::ItemNotFound
    })?;

    Ok((round, item))
}

pub fn is_registered(env: &Env, name: &String) -> bool {
    match get_round(env) {
        Some(round) => has_item(env, round.id, name),
        None => false,
    }
}

/// Leaders of every item, in registration order, once the window has elapsed.
pub fn highest_bidders(env: &Env) -> AuctionResult<Vec<Option<Address>>> {
    let round = get_current_round(env)?;
    validate!(
        env,
        round.has_elapsed(env.ledger().timestamp()),
        ErrorCode::AuctionLive,
        "Auction: Get Highest Bidders: the auction is still live",
        round.end_time
    )?;

    let mut bidders = Vec::new(env);
    for name in round.items.iter() {
        let bidder = get_item(env, round.id, &name).and_then(|item| item.highest_bidder);
        bidders.push_back(bidder);
    }

    Ok(bidders)
}

/// Pays the held escrow of a finished round to the owner.
///
/// `state` is the lifecycle state for contracts that track one; such a round
/// must have been closed by upkeep first.
pub fn withdraw_proceeds(
    env: &Env,
    sender: &Address,
    state: Option<AuctionState>,
) -> AuctionResult<i128> {
    sender.require_auth();

    let config = get_config(env);
    ensure_owner(env, &config, sender)?;

    let mut round = get_current_round(env)?;
    validate!(
        env,
        round.has_elapsed(env.ledger().timestamp()),
        ErrorCode::AuctionLive,
        "Auction: Withdraw Proceeds: the auction is still live"
    )?;
    validate!(
        env,
        state.map_or(true, |state| state == AuctionState::Calculating),
        ErrorCode::AuctionNotClosed,
        "Auction: Withdraw Proceeds: the round has not been closed"
    )?;
    validate!(env, !round.settled, ErrorCode::AlreadySettled)?;
    validate!(
        env,
        round.total_escrowed > 0,
        ErrorCode::NothingToWithdraw,
        "Auction: Withdraw Proceeds: no bids were placed"
    )?;

    let amount = round.total_escrowed;
    round.total_escrowed = 0;
    round.settled = true;
    save_round(env, &round);

    escrow::pay_out(env, &config, &config.owner, amount);
    AuctionEvents::proceeds_withdrawn(env, config.owner.clone(), round.id, amount);

    Ok(amount)
}
