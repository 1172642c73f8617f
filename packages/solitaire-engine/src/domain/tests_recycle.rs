//! Stock/waste draw and recycle tests, including the regression for the
//! historical clear-before-append card-loss defect.

use crate::domain::cards::{Card, Rank, Suit};
use crate::domain::moves::Move;
use crate::domain::rules::apply;
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::{column, foundation_run, scenario};
use crate::errors::ErrorCode;

#[test]
fn draw_turns_three_cards_in_order() {
    let state = GameState::deal(7);
    let stock_before: Vec<Card> = state.stock.cards().to_vec();

    let after = apply(&state, Move::DrawFromStock).unwrap();
    assert_eq!(after.stock.len(), 21);
    assert_eq!(after.waste.len(), 3);

    // Draw order preserved: old stock top lands first, so it sits lowest of
    // the three on waste.
    let n = stock_before.len();
    assert_eq!(after.waste.cards()[0].id(), stock_before[n - 1].id());
    assert_eq!(after.waste.cards()[1].id(), stock_before[n - 2].id());
    assert_eq!(after.waste.cards()[2].id(), stock_before[n - 3].id());
    assert!(after.waste.cards().iter().all(|c| c.face_up));
}

#[test]
fn draw_takes_fewer_when_stock_is_short() {
    // Leave exactly two cards for the stock remainder.
    let state = scenario(|s| {
        for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts] {
            s.foundation_mut(suit).append_run(foundation_run(suit, Rank::King));
        }
        s.tableau[0].append_run(column(
            &["KS", "QS", "JS", "TS", "9S", "8S", "7S", "6S", "5S", "4S", "3S"],
            0,
        ));
    });
    assert_eq!(state.stock.len(), 2);

    let after = apply(&state, Move::DrawFromStock).unwrap();
    assert!(after.stock.is_empty());
    assert_eq!(after.waste.len(), 2);
    after.check_card_conservation().unwrap();
}

#[test]
fn eight_draws_exhaust_the_deal_stock() {
    let mut state = GameState::deal(42);
    for draw in 1..=8 {
        state = apply(&state, Move::DrawFromStock).unwrap();
        assert_eq!(state.stock.len(), 24 - draw * 3);
        assert_eq!(state.waste.len(), draw * 3);
    }
    assert!(state.stock.is_empty());
    assert_eq!(state.waste.len(), 24);
}

#[test]
fn ninth_draw_recycles_waste_into_stock() {
    let mut state = GameState::deal(42);
    for _ in 0..8 {
        state = apply(&state, Move::DrawFromStock).unwrap();
    }
    let waste_before: Vec<Card> = state.waste.cards().to_vec();

    let recycled = apply(&state, Move::DrawFromStock).unwrap();
    assert_eq!(recycled.stock.len(), waste_before.len());
    assert!(recycled.waste.is_empty());
    assert!(recycled.stock.cards().iter().all(|c| !c.face_up));

    // New stock is exactly the reversed waste; nothing dropped, nothing
    // duplicated (the clear-before-append regression).
    let expected: Vec<_> = waste_before.iter().rev().map(|c| c.id()).collect();
    let actual: Vec<_> = recycled.stock.cards().iter().map(|c| c.id()).collect();
    assert_eq!(actual, expected);
    recycled.check_card_conservation().unwrap();
}

#[test]
fn recycle_repeats_the_original_pass_order() {
    let mut state = GameState::deal(42);
    let first_pass = apply(&state, Move::DrawFromStock).unwrap();
    let first_drawn = first_pass.waste.cards()[0].id();

    for _ in 0..8 {
        state = apply(&state, Move::DrawFromStock).unwrap();
    }
    state = apply(&state, Move::DrawFromStock).unwrap(); // recycle
    let second_pass = apply(&state, Move::DrawFromStock).unwrap();
    assert_eq!(second_pass.waste.cards()[0].id(), first_drawn);
}

#[test]
fn many_recycle_cycles_conserve_cards() {
    let mut state = GameState::deal(3);
    for _ in 0..40 {
        state = apply(&state, Move::DrawFromStock).unwrap();
        state.check_card_conservation().unwrap();
    }
}

#[test]
fn draw_with_nothing_to_draw_is_rejected() {
    let state = scenario(|s| {
        for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts] {
            s.foundation_mut(suit).append_run(foundation_run(suit, Rank::King));
        }
        s.foundation_mut(Suit::Spades)
            .append_run(foundation_run(Suit::Spades, Rank::Queen));
        s.tableau[0].push(Card::face_up(Suit::Spades, Rank::King));
    });
    assert!(state.stock.is_empty());
    assert!(state.waste.is_empty());

    let err = apply(&state, Move::DrawFromStock).unwrap_err();
    assert_eq!(ErrorCode::from(&err), ErrorCode::NoCardsToDraw);
}
