use soroban_sdk::{contracttype, Address, Bytes, String, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Account that deployed the auction. Fixed for the life of the contract
    pub owner: Address,
    /// Token bids are escrowed and refunded in
    pub bid_token: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionState {
    /// bids are accepted until the end time
    Open = 0,
    /// the round was closed by upkeep and is waiting to be finalized
    Calculating = 1,
}

// ################################################################
//                             Item
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    pub name: String,
    /// Seeded with the initial bid, then the amount of the leading bid
    pub highest_bid: i128,
    /// `None` until the first bid is accepted
    pub highest_bidder: Option<Address>,
    /// Amount held in escrow for the current leader
    pub escrowed: i128,
}

impl Item {
    pub fn new(name: String, initial_bid: i128) -> Self {
        Item {
            name,
            highest_bid: initial_bid,
            highest_bidder: None,
            escrowed: 0,
        }
    }
}

/// The escrow handed back to a leader that was just outbid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Outbid {
    pub bidder: Address,
    pub amount: i128,
}

// ################################################################
//                             Round
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    pub id: u32,
    /// Item names in registration order
    pub items: Vec<String>,
    pub start_time: u64,
    pub end_time: u64,
    /// Sum of the escrow held for every item leader
    pub total_escrowed: i128,
    /// Number of distinct accounts that placed a bid
    pub participants: u32,
    /// Whether the held escrow was paid out to the owner
    pub settled: bool,
}

impl Round {
    pub fn accepts_bids(&self, now: u64) -> bool {
        now <= self.end_time
    }

    pub fn has_elapsed(&self, now: u64) -> bool {
        now >= self.end_time
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub perform_data: Bytes,
}
