use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    #[doc = "Only the owner may do this"]
    NotOwner = 1,
    #[doc = "The owner may not bid on its own auction"]
    Owner = 2,
    EmptyList = 3,
    #[doc = "Items and initial bids differ in length"]
    WrongArraySize = 4,
    #[doc = "Start time is not before end time"]
    WrongTimeValues = 5,
    DuplicateItems = 6,
    AuctionEnded = 7,
    #[doc = "Bid does not exceed the current highest bid"]
    BidTooLow = 8,
    #[doc = "The bidding window is still open"]
    AuctionLive = 9,
    UpkeepNotNeeded = 10,
    NotInitialized = 11,
    ItemNotFound = 12,
    InvalidAmount = 13,
    NothingToWithdraw = 14,
    #[doc = "The round has not been moved out of the open state"]
    AuctionNotClosed = 15,
    AlreadySettled = 16,
    MathError = 17,
}

pub type AuctionResult<T = ()> = core::result::Result<T, ErrorCode>;
