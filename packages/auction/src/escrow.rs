//! Token movements in and out of the auction.
//!
//! Refunds are pushed to the outbid account first. When that transfer fails
//! (for example because the account can no longer receive the bid token) the
//! amount is credited to a pending refund balance the account withdraws
//! later, so a refund can never block the bid that caused it.

use soroban_sdk::{log, token, Address, Env};

use crate::{
    error::{AuctionResult, ErrorCode},
    events::AuctionEvents,
    safe_increment,
    storage::{get_pending_refund, save_pending_refund},
    types::Config,
    validate,
};

/// Moves a bid from the bidder into escrow.
pub fn collect(env: &Env, config: &Config, from: &Address, amount: i128) {
    let token_client = token::Client::new(env, &config.bid_token);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Pays `amount` out of escrow. Fails the whole call if the transfer fails.
pub fn pay_out(env: &Env, config: &Config, to: &Address, amount: i128) {
    let token_client = token::Client::new(env, &config.bid_token);
    token_client.transfer(&env.current_contract_address(), to, &amount);
}

/// Returns escrow to `to`. Returns `true` when the transfer went through and
/// `false` when the amount was deferred to the pending refund balance.
pub fn refund(env: &Env, config: &Config, to: &Address, amount: i128) -> AuctionResult<bool> {
    let token_client = token::Client::new(env, &config.bid_token);
    let pushed = matches!(
        token_client.try_transfer(&env.current_contract_address(), to, &amount),
        Ok(Ok(()))
    );

    if pushed {
        AuctionEvents::refund(env, to.clone(), amount);
        return Ok(true);
    }

    log!(env, "Auction: Refund: transfer failed, deferring", to.clone(), amount);

    let mut pending = get_pending_refund(env, to);
    safe_increment!(pending, amount);
    save_pending_refund(env, to, pending);

    AuctionEvents::refund_deferred(env, to.clone(), amount);

    Ok(false)
}

pub fn withdraw_refund(env: &Env, config: &Config, bidder: &Address) -> AuctionResult<i128> {
    bidder.require_auth();

    let pending = get_pending_refund(env, bidder);
    validate!(
        env,
        pending > 0,
        ErrorCode::NothingToWithdraw,
        "Auction: Withdraw Refund: nothing owed to",
        bidder.clone()
    )?;

    save_pending_refund(env, bidder, 0);
    pay_out(env, config, bidder, pending);

    AuctionEvents::refund_withdrawn(env, bidder.clone(), pending);

    Ok(pending)
}
