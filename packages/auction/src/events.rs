use soroban_sdk::{Address, Env, String, Symbol};

pub struct AuctionEvents {}

impl AuctionEvents {
    /// Emitted when the owner opens a new round
    ///
    /// - topics - `["auction_initialized", round_id: u32]`
    /// - data - `[start_time: u64, end_time: u64, item_count: u32]`
    pub fn auction_initialized(
        env: &Env,
        round_id: u32,
        start_time: u64,
        end_time: u64,
        item_count: u32,
    ) {
        let topics = (Symbol::new(env, "auction_initialized"), round_id);
        env.events()
            .publish(topics, (start_time, end_time, item_count));
    }

    /// Emitted when a bid becomes the highest bid on an item
    ///
    /// - topics - `["new_bid", item: String, bidder: Address]`
    /// - data - `amount: i128`
    pub fn new_bid(env: &Env, item: String, bidder: Address, amount: i128) {
        let topics = (Symbol::new(env, "new_bid"), item, bidder);
        env.events().publish(topics, amount);
    }

    /// Emitted when escrow is transferred back to an outbid leader
    ///
    /// - topics - `["refund", bidder: Address]`
    /// - data - `amount: i128`
    pub fn refund(env: &Env, bidder: Address, amount: i128) {
        let topics = (Symbol::new(env, "refund"), bidder);
        env.events().publish(topics, amount);
    }

    /// Emitted when a refund transfer failed and the amount was credited to
    /// the bidder's pending refund balance instead
    ///
    /// - topics - `["refund_deferred", bidder: Address]`
    /// - data - `amount: i128`
    pub fn refund_deferred(env: &Env, bidder: Address, amount: i128) {
        let topics = (Symbol::new(env, "refund_deferred"), bidder);
        env.events().publish(topics, amount);
    }

    /// - topics - `["refund_withdrawn", bidder: Address]`
    /// - data - `amount: i128`
    pub fn refund_withdrawn(env: &Env, bidder: Address, amount: i128) {
        let topics = (Symbol::new(env, "refund_withdrawn"), bidder);
        env.events().publish(topics, amount);
    }

    /// Emitted when the winning bids of a round are paid to the owner
    ///
    /// - topics - `["proceeds_withdrawn", owner: Address]`
    /// - data - `[round_id: u32, amount: i128]`
    pub fn proceeds_withdrawn(env: &Env, owner: Address, round_id: u32, amount: i128) {
        let topics = (Symbol::new(env, "proceeds_withdrawn"), owner);
        env.events().publish(topics, (round_id, amount));
    }

    /// Emitted when upkeep closes a round
    ///
    /// - topics - `["upkeep_performed", round_id: u32]`
    /// - data - `request_id: u64`
    pub fn upkeep_performed(env: &Env, round_id: u32, request_id: u64) {
        let topics = (Symbol::new(env, "upkeep_performed"), round_id);
        env.events().publish(topics, request_id);
    }
}
