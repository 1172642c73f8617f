//! Unit tests for move validation and application.

use crate::domain::cards::{Card, Rank, Suit};
use crate::domain::fixtures::CardFixtures;
use crate::domain::moves::Move;
use crate::domain::rules::apply;
use crate::domain::state::{GameState, GameStatus};
use crate::domain::test_state_helpers::{
    assert_foundations_monotonic, column, foundation_run, scenario,
};
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

fn rejection_code(result: Result<GameState, DomainError>) -> ErrorCode {
    match result {
        Ok(_) => panic!("expected rejection"),
        Err(err) => ErrorCode::from(&err),
    }
}

#[test]
fn waste_to_foundation_builds_ascending() {
    let state = scenario(|s| {
        // 2H under AH; AH is the exposed top
        s.waste.push(Card::face_up(Suit::Hearts, Rank::Two));
        s.waste.push(Card::face_up(Suit::Hearts, Rank::Ace));
    });

    let after = apply(&state, Move::WasteToFoundation { suit: Suit::Hearts }).unwrap();
    assert_eq!(after.foundation(Suit::Hearts).len(), 1);
    assert_eq!(after.waste.len(), 1);
    assert_eq!(after.score, 10);
    assert_eq!(after.move_count, 1);
    assert_eq!(after.version, 1);

    let after2 = apply(&after, Move::WasteToFoundation { suit: Suit::Hearts }).unwrap();
    assert_eq!(after2.foundation(Suit::Hearts).len(), 2);
    assert!(after2.waste.is_empty());
    assert_eq!(after2.score, 20);
    assert_foundations_monotonic(&after2);
}

#[test]
fn waste_to_foundation_rejects_wrong_suit() {
    let state = scenario(|s| s.waste.push(Card::face_up(Suit::Spades, Rank::Ace)));
    let code = rejection_code(apply(&state, Move::WasteToFoundation { suit: Suit::Hearts }));
    assert_eq!(code, ErrorCode::IllegalDestination);
}

#[test]
fn waste_to_foundation_rejects_empty_waste() {
    let state = scenario(|_| {});
    let code = rejection_code(apply(&state, Move::WasteToFoundation { suit: Suit::Hearts }));
    assert_eq!(code, ErrorCode::EmptySource);
}

#[test]
fn waste_to_tableau_continues_a_column() {
    let state = scenario(|s| {
        s.tableau[2].append_run(CardFixtures::parse_hardcoded(&["8S"]));
        s.waste.push(Card::face_up(Suit::Hearts, Rank::Seven));
    });

    let after = apply(&state, Move::WasteToTableau { column: 2 }).unwrap();
    assert_eq!(after.tableau[2].len(), 2);
    assert!(after.waste.is_empty());
    assert_eq!(after.score, 5);
}

#[test]
fn waste_to_tableau_rejects_same_color() {
    let state = scenario(|s| {
        s.tableau[2].append_run(CardFixtures::parse_hardcoded(&["8S"]));
        s.waste.push(Card::face_up(Suit::Clubs, Rank::Seven));
    });
    let code = rejection_code(apply(&state, Move::WasteToTableau { column: 2 }));
    assert_eq_code(code, ErrorCode::IllegalDestination);
}

// small helper so the assert message names the codes
fn assert_eq_code(actual: ErrorCode, expected: ErrorCode) {
    assert_eq!(actual, expected, "expected {expected}, got {actual}");
}

#[test]
fn tableau_to_foundation_flips_the_exposed_card() {
    let state = scenario(|s| {
        s.tableau[0].append_run(column(&["9D", "AH"], 1));
    });

    let after = apply(&state, Move::TableauToFoundation { column: 0 }).unwrap();
    assert_eq!(after.foundation(Suit::Hearts).len(), 1);
    let exposed = after.tableau[0].top().unwrap();
    assert_eq!(exposed.to_string(), "9D");
    assert!(exposed.face_up, "newly exposed card must flip face-up");
    // 10 for the foundation move, 5 for the flip
    assert_eq!(after.score, 15);
}

#[test]
fn tableau_to_foundation_needs_an_ace_first() {
    // An exposed 7S cannot start an empty foundation.
    let state = scenario(|s| {
        s.tableau[6].append_run(CardFixtures::parse_hardcoded(&["7S"]));
    });
    let code = rejection_code(apply(&state, Move::TableauToFoundation { column: 6 }));
    assert_eq_code(code, ErrorCode::IllegalDestination);
}

#[test]
fn tableau_to_foundation_rejects_empty_column() {
    let state = scenario(|_| {});
    let code = rejection_code(apply(&state, Move::TableauToFoundation { column: 3 }));
    assert_eq_code(code, ErrorCode::EmptySource);
}

#[test]
fn out_of_range_columns_are_rejected() {
    let state = scenario(|s| s.waste.push(Card::face_up(Suit::Hearts, Rank::King)));
    let code = rejection_code(apply(&state, Move::TableauToFoundation { column: 7 }));
    assert_eq_code(code, ErrorCode::UnknownColumn);

    let code = rejection_code(apply(&state, Move::WasteToTableau { column: 9 }));
    assert_eq_code(code, ErrorCode::UnknownColumn);
}

#[test]
fn tableau_run_moves_as_a_unit() {
    let state = scenario(|s| {
        s.tableau[1].append_run(column(&["2C", "9S", "8H", "7C"], 1));
        s.tableau[3].append_run(CardFixtures::parse_hardcoded(&["TD"]));
    });

    let after = apply(
        &state,
        Move::TableauToTableau {
            src: 1,
            card_index: 1,
            dst: 3,
        },
    )
    .unwrap();

    assert_eq!(after.tableau[3].len(), 4);
    assert_eq!(after.tableau[1].len(), 1);
    let exposed = after.tableau[1].top().unwrap();
    assert_eq!(exposed.to_string(), "2C");
    assert!(exposed.face_up);
    assert_eq!(after.score, 5, "only the flip scores");

    // run order preserved on the destination
    let dst_tokens: Vec<String> = after.tableau[3]
        .cards()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(dst_tokens, vec!["TD", "9S", "8H", "7C"]);
}

#[test]
fn only_kings_open_an_empty_column() {
    let state = scenario(|s| {
        s.tableau[0].append_run(CardFixtures::parse_hardcoded(&["KH", "QS"]));
        s.tableau[4].append_run(CardFixtures::parse_hardcoded(&["9D"]));
    });

    let moved = apply(
        &state,
        Move::TableauToTableau {
            src: 0,
            card_index: 0,
            dst: 5,
        },
    )
    .unwrap();
    assert_eq!(moved.tableau[5].len(), 2);
    assert!(moved.tableau[0].is_empty());

    let code = rejection_code(apply(
        &state,
        Move::TableauToTableau {
            src: 4,
            card_index: 0,
            dst: 5,
        },
    ));
    assert_eq_code(code, ErrorCode::IllegalDestination);
}

#[test]
fn face_down_runs_cannot_move() {
    let state = scenario(|s| {
        s.tableau[1].append_run(column(&["9S", "8H"], 1));
        s.tableau[2].append_run(CardFixtures::parse_hardcoded(&["TD"]));
    });
    let code = rejection_code(apply(
        &state,
        Move::TableauToTableau {
            src: 1,
            card_index: 0,
            dst: 2,
        },
    ));
    assert_eq_code(code, ErrorCode::FaceDownRun);
}

#[test]
fn broken_sequences_cannot_move() {
    let state = scenario(|s| {
        s.tableau[1].append_run(CardFixtures::parse_hardcoded(&["9S", "8H", "8D"]));
        s.tableau[2].append_run(CardFixtures::parse_hardcoded(&["TD"]));
    });
    let code = rejection_code(apply(
        &state,
        Move::TableauToTableau {
            src: 1,
            card_index: 0,
            dst: 2,
        },
    ));
    assert_eq_code(code, ErrorCode::InvalidRun);
}

#[test]
fn run_index_out_of_range_is_rejected() {
    let state = scenario(|s| {
        s.tableau[1].append_run(CardFixtures::parse_hardcoded(&["9S"]));
    });
    let code = rejection_code(apply(
        &state,
        Move::TableauToTableau {
            src: 1,
            card_index: 4,
            dst: 2,
        },
    ));
    assert_eq_code(code, ErrorCode::InvalidRun);
}

#[test]
fn moving_onto_the_same_column_is_rejected() {
    let state = scenario(|s| {
        s.tableau[1].append_run(CardFixtures::parse_hardcoded(&["9S"]));
    });
    let code = rejection_code(apply(
        &state,
        Move::TableauToTableau {
            src: 1,
            card_index: 0,
            dst: 1,
        },
    ));
    assert_eq_code(code, ErrorCode::IllegalDestination);
}

#[test]
fn won_games_accept_no_moves() {
    let mut state = scenario(|s| {
        for suit in Suit::ALL {
            *s.foundation_mut(suit) = crate::domain::pile::Pile::with_cards(
                s.foundation(suit).role(),
                foundation_run(suit, Rank::King),
            );
        }
    });
    state.status = GameStatus::Won;

    for mv in [
        Move::DrawFromStock,
        Move::AutoMove,
        Move::Undo,
        Move::TableauToFoundation { column: 0 },
    ] {
        let code = rejection_code(apply(&state, mv));
        assert_eq_code(code, ErrorCode::GameAlreadyWon);
    }
}

#[test]
fn auto_move_scans_columns_then_waste() {
    let state = scenario(|s| {
        s.tableau[1].append_run(CardFixtures::parse_hardcoded(&["AD"]));
        s.tableau[4].append_run(CardFixtures::parse_hardcoded(&["AH"]));
        s.waste.push(Card::face_up(Suit::Spades, Rank::Ace));
    });

    let first = apply(&state, Move::AutoMove).unwrap();
    assert_eq!(first.foundation(Suit::Diamonds).len(), 1, "leftmost column wins");
    assert!(first.tableau[1].is_empty());

    let second = apply(&first, Move::AutoMove).unwrap();
    assert_eq!(second.foundation(Suit::Hearts).len(), 1);

    let third = apply(&second, Move::AutoMove).unwrap();
    assert_eq!(third.foundation(Suit::Spades).len(), 1);
    assert!(third.waste.is_empty());

    let code = rejection_code(apply(&third, Move::AutoMove));
    assert_eq_code(code, ErrorCode::NoAutoMove);
}

#[test]
fn undo_never_reaches_pure_rules() {
    let state = scenario(|_| {});
    let code = rejection_code(apply(&state, Move::Undo));
    assert_eq_code(code, ErrorCode::ValidationError);
}

#[test]
fn rejected_moves_leave_state_untouched() {
    let state = scenario(|s| {
        s.tableau[6].append_run(CardFixtures::parse_hardcoded(&["7S"]));
    });
    let before = state.clone();

    let result = apply(&state, Move::TableauToFoundation { column: 6 });
    assert!(result.is_err());
    assert_eq!(state, before, "rejection must not mutate anything");
    assert_eq!(state.version, before.version);
    assert_eq!(state.move_count, before.move_count);
}

#[test]
fn accepted_moves_advance_version_and_count() {
    let state = GameState::deal(7);
    let a = apply(&state, Move::DrawFromStock).unwrap();
    let b = apply(&a, Move::DrawFromStock).unwrap();
    assert_eq!((a.version, a.move_count), (1, 1));
    assert_eq!((b.version, b.move_count), (2, 2));
}
