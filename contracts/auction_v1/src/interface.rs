use auction::{
    error::ErrorCode,
    types::{Config, Round},
};
use soroban_sdk::{Address, Env, String, Vec};

pub trait AuctionV1Trait {
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
    ) -> Result<u32, ErrorCode>;

    fn withdraw_proceeds(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             BIDDERS
    // ################################################################

    fn place_bid(env: Env, bidder: Address, item: String, amount: i128) -> Result<(), ErrorCode>;

    fn withdraw_refund(env: Env, bidder: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn get_highest_bid(env: Env, item: String) -> Result<i128, ErrorCode>;

    fn get_highest_bidder(env: Env, item: String) -> Result<Option<Address>, ErrorCode>;

    fn get_highest_bidders(env: Env) -> Result<Vec<Option<Address>>, ErrorCode>;

    fn get_duplicate_value(env: Env, item: String) -> bool;

    fn get_pending_refund(env: Env, bidder: Address) -> i128;

    fn get_owner(env: Env) -> Address;

    fn get_time(env: Env) -> u64;

    fn query_config(env: Env) -> Config;

    fn query_round(env: Env) -> Result<Round, ErrorCode>;
}
