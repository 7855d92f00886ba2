use soroban_sdk::{Address, Env, String};

use crate::{
    error::{AuctionResult, ErrorCode},
    escrow,
    events::AuctionEvents,
    registry::get_current_item,
    safe_decrement, safe_increment,
    storage::{get_config, is_participant, save_item, save_round, set_participant},
    types::{AuctionState, Config, Item, Outbid, Round},
    validate,
};

impl Item {
    /// Makes `bidder` the leader with `amount` held in escrow and hands back
    /// the escrow of the leader it displaced.
    pub fn outbid(&mut self, bidder: Address, amount: i128) -> Option<Outbid> {
        let previous = self.highest_bidder.take().map(|bidder| Outbid {
            bidder,
            amount: self.escrowed,
        });

        self.highest_bid = amount;
        self.highest_bidder = Some(bidder);
        self.escrowed = amount;

        previous
    }
}

pub fn validate_bid(
    env: &Env,
    config: &Config,
    round: &Round,
    item: &Item,
    state: Option<AuctionState>,
    bidder: &Address,
    amount: i128,
) -> AuctionResult {
    validate!(
        env,
        config.owner != *bidder,
        ErrorCode::Owner,
        "Auction: Place Bid: the owner cannot bid on its own auction"
    )?;
    validate!(
        env,
        round.accepts_bids(env.ledger().timestamp()),
        ErrorCode::AuctionEnded,
        "Auction: Place Bid: the auction ended at",
        round.end_time
    )?;
    validate!(
        env,
        !round.settled,
        ErrorCode::AuctionEnded,
        "Auction: Place Bid: proceeds of round already withdrawn",
        round.id
    )?;
    validate!(
        env,
        state.map_or(true, |state| state == AuctionState::Open),
        ErrorCode::AuctionEnded,
        "Auction: Place Bid: the auction is closed"
    )?;
    validate!(
        env,
        amount > item.highest_bid,
        ErrorCode::BidTooLow,
        "Auction: Place Bid: bid must exceed",
        item.highest_bid
    )?;

    Ok(())
}

/// Places a bid on an item of the current round.
///
/// `state` is the lifecycle state for contracts that track one; bids are only
/// accepted while it is `Open`.
pub fn place_bid(
    env: &Env,
    bidder: &Address,
    name: &String,
    amount: i128,
    state: Option<AuctionState>,
) -> AuctionResult<Item> {
    bidder.require_auth();

    let config = get_config(env);
    let (mut round, mut item) = get_current_item(env, name)?;
    validate_bid(env, &config, &round, &item, state, bidder, amount)?;

    escrow::collect(env, &config, bidder, amount);

    let previous = item.outbid(bidder.clone(), amount);

    safe_increment!(round.total_escrowed, amount);
    if let Some(Outbid { bidder: leader, amount: held }) = previous {
        safe_decrement!(round.total_escrowed, held);
        escrow::refund(env, &config, &leader, held)?;
    }

    if !is_participant(env, round.id, bidder) {
        set_participant(env, round.id, bidder);
        safe_increment!(round.participants, 1);
    }

    save_item(env, round.id, &item);
    save_round(env, &round);

    AuctionEvents::new_bid(env, name.clone(), bidder.clone(), amount);

    Ok(item)
}
