use auction::{
    bid, escrow,
    error::ErrorCode,
    lifecycle, registry,
    storage::{get_config, get_current_round, get_pending_refund as pending_refund_of},
    types::{AuctionState, Config, Round, UpkeepCheck},
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Bytes, Env, String, Vec};

use crate::interface::AuctionV2Trait;

contractmeta!(
    key = "Description",
    val = "Multi-item English auction closed by an upkeep agent"
);

#[contract]
pub struct AuctionV2;

#[contractimpl]
impl AuctionV2 {
    pub fn __constructor(env: Env, owner: Address, bid_token: Address) {
        registry::init_config(&env, owner, bid_token);
    }
}

#[contractimpl]
impl AuctionV2Trait for AuctionV2 {
    // ################################################################
    //                             OWNER
    // ################################################################

    fn init_auction(
        env: Env,
        sender: Address,
        items: Vec<String>,
        initial_bids: Vec<i128>,
        start_time: u64,
        end_time: u64,
    ) -> Result<u32, ErrorCode> {
        let round =
            registry::init_auction(&env, &sender, items, initial_bids, start_time, end_time)?;
        lifecycle::open(&env);

        log!(&env, "Auction: Init Auction: round opened", round.id);

        Ok(round.id)
    }

    fn withdraw_proceeds(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        let state = lifecycle::get_auction_state(&env)?;
        registry::withdraw_proceeds(&env, &sender, Some(state))
    }

    // ################################################################
    //                             KEEPER
    // ################################################################

    fn check_upkeep(env: Env, check_data: Bytes) -> UpkeepCheck {
        lifecycle::check_upkeep(&env, check_data)
    }

    fn perform_upkeep(env: Env, perform_data: Bytes) -> Result<u64, ErrorCode> {
        let request_id = lifecycle::perform_upkeep(&env, perform_data)?;

        log!(&env, "Auction: Perform Upkeep: round closed, request", request_id);

        Ok(request_id)
    }

    // ################################################################
    //                             BIDDERS
    // ################################################################

    fn place_bid(env: Env, bidder: Address, item: String, amount: i128) -> Result<(), ErrorCode> {
        let state = lifecycle::get_auction_state(&env)?;
        bid::place_bid(&env, &bidder, &item, amount, Some(state))?;
        Ok(())
    }

    fn withdraw_refund(env: Env, bidder: Address) -> Result<i128, ErrorCode> {
        let config = get_config(&env);
        escrow::withdraw_refund(&env, &config, &bidder)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn get_auction_state(env: Env) -> Result<AuctionState, ErrorCode> {
        lifecycle::get_auction_state(&env)
    }

    fn get_highest_bid(env: Env, item: String) -> Result<i128, ErrorCode> {
        let (_, item) = registry::get_current_item(&env, &item)?;
        Ok(item.highest_bid)
    }

    fn get_highest_bidder(env: Env, item: String) -> Result<Option<Address>, ErrorCode> {
        let (_, item) = registry::get_current_item(&env, &item)?;
        Ok(item.highest_bidder)
    }

    fn get_highest_bidders(env: Env) -> Result<Vec<Option<Address>>, ErrorCode> {
        registry::highest_bidders(&env)
    }

    fn get_duplicate_value(env: Env, item: String) -> bool {
        registry::is_registered(&env, &item)
    }

    fn get_pending_refund(env: Env, bidder: Address) -> i128 {
        pending_refund_of(&env, &bidder)
    }

    fn get_owner(env: Env) -> Address {
        get_config(&env).owner
    }

    fn get_time(env: Env) -> u64 {
        env.ledger().timestamp()
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_round(env: Env) -> Result<Round, ErrorCode> {
        get_current_round(&env)
    }
}
