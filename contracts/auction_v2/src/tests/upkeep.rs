use auction::{
    error::ErrorCode,
    types::{AuctionState, UpkeepCheck},
};
use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Events, Bytes, IntoVal, Symbol, TryFromVal, Val, Vec};

use super::setup::{item_names, set_time, TestSetup, BIDDER_FUNDS, END_TIME, START_TIME};

fn no_data(setup: &TestSetup) -> Bytes {
    Bytes::new(&setup.env)
}

#[test]
fn no_upkeep_before_first_round() {
    let setup = TestSetup::new();

    assert!(!setup.auction.check_upkeep(&no_data(&setup)).upkeep_needed);
    assert_eq!(
        setup.auction.try_perform_upkeep(&no_data(&setup)),
        Err(Ok(ErrorCode::UpkeepNotNeeded))
    );
}

#[test]
fn check_upkeep_echoes_check_data() {
    let setup = TestSetup::new();
    let env = &setup.env;
    setup.init_default_auction();
    let check_data = Bytes::from_slice(env, &[1, 2, 3]);

    assert_eq!(
        setup.auction.check_upkeep(&check_data),
        UpkeepCheck {
            upkeep_needed: false,
            perform_data: check_data.clone(),
        }
    );
}

#[test]
fn no_upkeep_while_window_is_open() {
    let setup = TestSetup::new();
    setup.init_default_auction();
    setup
        .auction
        .place_bid(&setup.bidders[0], &setup.item("first"), &2);

    set_time(&setup.env, END_TIME - 1);

    assert!(!setup.auction.check_upkeep(&no_data(&setup)).upkeep_needed);
    assert_eq!(
        setup.auction.try_perform_upkeep(&no_data(&setup)),
        Err(Ok(ErrorCode::UpkeepNotNeeded))
    );
    assert_eq!(setup.auction.get_auction_state(), AuctionState::Open);
}

#[test]
fn no_upkeep_without_bids() {
    let setup = TestSetup::new();
    setup.init_default_auction();

    set_time(&setup.env, END_TIME + 100);

    assert!(!setup.auction.check_upkeep(&no_data(&setup)).upkeep_needed);
    assert_eq!(
        setup.auction.try_perform_upkeep(&no_data(&setup)),
        Err(Ok(ErrorCode::UpkeepNotNeeded))
    );
}

#[test]
fn perform_upkeep_closes_round_once() {
    let setup = TestSetup::new();
    let env = &setup.env;
    setup.init_default_auction();
    setup
        .auction
        .place_bid(&setup.bidders[0], &setup.item("first"), &2);

    set_time(env, END_TIME + 1);
    assert!(setup.auction.check_upkeep(&no_data(&setup)).upkeep_needed);

    assert_eq!(setup.auction.perform_upkeep(&no_data(&setup)), 1);
    assert_eq!(setup.auction.get_auction_state(), AuctionState::Calculating);

    let (_, topics, data) = env
        .events()
        .all()
        .iter()
        .filter(|(contract, _, _)| *contract == setup.auction.address)
        .last()
        .unwrap();
    let expected: Vec<Val> = (Symbol::new(env, "upkeep_performed"), 1u32).into_val(env);
    assert_eq!(topics, expected);
    assert_eq!(u64::try_from_val(env, &data).unwrap(), 1);

    assert!(!setup.auction.check_upkeep(&no_data(&setup)).upkeep_needed);
    assert_eq!(
        setup.auction.try_perform_upkeep(&no_data(&setup)),
        Err(Ok(ErrorCode::UpkeepNotNeeded))
    );
}

#[test]
fn request_ids_increase_across_rounds() {
    let setup = TestSetup::new();
    let env = &setup.env;
    let alice = &setup.bidders[0];

    setup.init_default_auction();
    setup.auction.place_bid(alice, &setup.item("first"), &2);
    set_time(env, END_TIME);
    assert_eq!(setup.auction.perform_upkeep(&no_data(&setup)), 1);

    setup.auction.init_auction(
        &setup.owner,
        &item_names(env, &["first"]),
        &Vec::from_array(env, [1i128]),
        &END_TIME,
        &(END_TIME + 10),
    );
    setup.auction.place_bid(alice, &setup.item("first"), &2);
    set_time(env, END_TIME + 10);

    assert_eq!(setup.auction.perform_upkeep(&no_data(&setup)), 2);
}

#[test]
fn keeper_polling_closes_round_at_end_time() {
    let setup = TestSetup::new();
    let env = &setup.env;
    let [alice, bob, _] = setup.bidders.clone();
    setup.init_default_auction();

    let mut performed = None;
    for now in START_TIME..=END_TIME + 5 {
        set_time(env, now);

        if now == START_TIME + 3 {
            setup.auction.place_bid(&alice, &setup.item("first"), &5);
        }
        if now == START_TIME + 9 {
            setup.auction.place_bid(&bob, &setup.item("first"), &6);
        }

        let check = setup.auction.check_upkeep(&no_data(&setup));
        if check.upkeep_needed {
            assert!(performed.is_none());
            let request_id = setup.auction.perform_upkeep(&check.perform_data);
            performed = Some((now, request_id));
        }
    }

    assert_eq!(performed, Some((END_TIME, 1)));
    assert_eq!(setup.auction.get_auction_state(), AuctionState::Calculating);
    assert_eq!(setup.token.balance(&alice), BIDDER_FUNDS);
    assert_eq!(setup.auction.withdraw_proceeds(&setup.owner), 6);
}

/// Two items, two bidders: alice leads the first item until bob outbids her,
/// then the keeper closes the round and the owner collects.
#[test]
fn full_round_with_upkeep() {
    let setup = TestSetup::new();
    let env = &setup.env;
    let [alice, bob, _] = setup.bidders.clone();
    let first = setup.item("first");
    let second = setup.item("second");

    setup.init_default_auction();

    setup.auction.place_bid(&alice, &first, &2);
    assert_eq!(setup.token.balance(&alice), BIDDER_FUNDS - 2);

    setup.auction.place_bid(&bob, &first, &3);
    assert_eq!(setup.token.balance(&alice), BIDDER_FUNDS);

    setup.auction.place_bid(&alice, &second, &4);
    assert_eq!(
        setup.auction.try_get_highest_bidders(),
        Err(Ok(ErrorCode::AuctionLive))
    );

    set_time(env, END_TIME + 2);
    assert_eq!(
        setup.auction.try_place_bid(&bob, &second, &9),
        Err(Ok(ErrorCode::AuctionEnded))
    );

    assert!(setup.auction.check_upkeep(&no_data(&setup)).upkeep_needed);
    setup.auction.perform_upkeep(&no_data(&setup));

    assert_eq!(
        setup.auction.get_highest_bidders(),
        Vec::from_array(env, [Some(bob.clone()), Some(alice.clone())])
    );
    assert_eq!(setup.auction.withdraw_proceeds(&setup.owner), 7);
    assert_eq!(setup.token.balance(&setup.owner), 7);
    assert_eq!(setup.token.balance(&alice), BIDDER_FUNDS - 4);
    assert_eq!(setup.token.balance(&bob), BIDDER_FUNDS - 3);
}

#[test]
fn upkeep_after_two_item_round() {
    let setup = TestSetup::new();
    let env = &setup.env;
    let [alice, bob, _] = setup.bidders.clone();
    setup.init_default_auction();

    set_time(env, START_TIME + 1);
    setup.auction.place_bid(&alice, &setup.item("first"), &2);
    set_time(env, START_TIME + 2);
    setup.auction.place_bid(&bob, &setup.item("second"), &4);

    set_time(env, END_TIME + 1);
    assert!(setup.auction.check_upkeep(&no_data(&setup)).upkeep_needed);
    assert_eq!(setup.auction.perform_upkeep(&no_data(&setup)), 1);
    assert_eq!(
        setup.auction.try_perform_upkeep(&no_data(&setup)),
        Err(Ok(ErrorCode::UpkeepNotNeeded))
    );

    assert_eq!(
        setup.auction.get_highest_bidders(),
        Vec::from_array(env, [Some(alice), Some(bob)])
    );
}
