#![no_std]

pub mod bid;
pub mod constants;
pub mod error;
pub mod escrow;
pub mod events;
pub mod lifecycle;
pub mod macros;
pub mod registry;
pub mod storage;
pub mod types;
