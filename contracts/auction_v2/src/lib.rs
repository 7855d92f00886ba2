#![no_std]

mod contract;
mod interface;
