//! Pure move validation and application.
//!
//! Every operation here takes the current state by reference and produces a
//! fully-formed successor state or a rejection. Nothing is mutated in place,
//! so a rejected move can never leave stored state partially modified.

use crate::domain::cards::{Card, Suit};
use crate::domain::moves::Move;
use crate::domain::pile::is_valid_run;
use crate::domain::state::{GameState, GameStatus, TABLEAU_COLUMNS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Cards turned from stock per draw.
pub const DRAW_COUNT: usize = 3;

// Standard Klondike scoring for the moves this engine supports.
const SCORE_WASTE_TO_TABLEAU: i32 = 5;
const SCORE_WASTE_TO_FOUNDATION: i32 = 10;
const SCORE_TABLEAU_TO_FOUNDATION: i32 = 10;
const SCORE_TABLEAU_FLIP: i32 = 5;

/// Validate and apply a move, producing the successor state.
///
/// On success the successor has `move_count` and `version` advanced and win
/// detection applied. On rejection the input state is untouched and the error
/// carries the reason.
pub fn apply(state: &GameState, mv: Move) -> Result<GameState, DomainError> {
    if state.status == GameStatus::Won {
        return Err(DomainError::validation(
            ValidationKind::GameAlreadyWon,
            "the game is already won",
        ));
    }

    let mut next = state.clone();
    match mv {
        Move::DrawFromStock => draw_from_stock(&mut next)?,
        Move::WasteToFoundation { suit } => waste_to_foundation(&mut next, suit)?,
        Move::WasteToTableau { column } => waste_to_tableau(&mut next, column)?,
        Move::TableauToFoundation { column } => tableau_to_foundation(&mut next, column)?,
        Move::TableauToTableau {
            src,
            card_index,
            dst,
        } => tableau_to_tableau(&mut next, src, card_index, dst)?,
        Move::AutoMove => auto_move(&mut next)?,
        Move::Undo => {
            // Undo needs session history; the service resolves it before
            // reaching the pure rules.
            return Err(DomainError::validation_other(
                "undo is resolved from session history",
            ));
        }
    }

    next.move_count += 1;
    next.version += 1;
    if next.is_won() {
        next.status = GameStatus::Won;
    }
    next.check_card_conservation()?;
    Ok(next)
}

// Every helper below validates fully before its first mutation, so a failed
// helper leaves `state` untouched (auto_move relies on this).

fn draw_from_stock(state: &mut GameState) -> Result<(), DomainError> {
    if state.stock.is_empty() {
        if state.waste.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::NoCardsToDraw,
                "stock and waste are both empty",
            ));
        }
        // Recycle: the whole waste becomes the new stock, reversed and
        // face-down. Computed on the candidate state, so the stored state
        // never observes a half-moved table.
        let mut cards = state.waste.take_all();
        cards.reverse();
        let cards: Vec<Card> = cards.into_iter().map(Card::flipped_down).collect();
        state.stock.append_run(cards);
        return Ok(());
    }

    for _ in 0..DRAW_COUNT {
        match state.stock.pop() {
            Some(card) => state.waste.push(card.flipped_up()),
            None => break,
        }
    }
    Ok(())
}

fn waste_to_foundation(state: &mut GameState, suit: Suit) -> Result<(), DomainError> {
    let Some(card) = state.waste.top().copied() else {
        return Err(DomainError::validation(
            ValidationKind::EmptySource,
            "waste is empty",
        ));
    };
    state.foundation(suit).can_accept(&[card])?;

    state.waste.pop();
    state.foundation_mut(suit).push(card);
    state.score += SCORE_WASTE_TO_FOUNDATION;
    Ok(())
}

fn waste_to_tableau(state: &mut GameState, column: usize) -> Result<(), DomainError> {
    let Some(card) = state.waste.top().copied() else {
        return Err(DomainError::validation(
            ValidationKind::EmptySource,
            "waste is empty",
        ));
    };
    state.tableau_column(column)?.can_accept(&[card])?;

    state.waste.pop();
    state.tableau_column_mut(column)?.push(card);
    state.score += SCORE_WASTE_TO_TABLEAU;
    Ok(())
}

fn tableau_to_foundation(state: &mut GameState, column: usize) -> Result<(), DomainError> {
    let pile = state.tableau_column(column)?;
    let Some(card) = pile.top().copied() else {
        return Err(DomainError::validation(
            ValidationKind::EmptySource,
            format!("tableau column {column} is empty"),
        ));
    };
    if !card.face_up {
        return Err(DomainError::validation(
            ValidationKind::FaceDownRun,
            format!("top of column {column} is face-down"),
        ));
    }
    state.foundation(card.suit).can_accept(&[card])?;

    let source = state.tableau_column_mut(column)?;
    source.pop();
    let flipped = source.flip_top_up();
    state.foundation_mut(card.suit).push(card);
    state.score += SCORE_TABLEAU_TO_FOUNDATION;
    if flipped {
        state.score += SCORE_TABLEAU_FLIP;
    }
    Ok(())
}

fn tableau_to_tableau(
    state: &mut GameState,
    src: usize,
    card_index: usize,
    dst: usize,
) -> Result<(), DomainError> {
    if src == dst {
        return Err(DomainError::validation(
            ValidationKind::IllegalDestination,
            "source and destination are the same column",
        ));
    }
    let src_pile = state.tableau_column(src)?;
    if card_index >= src_pile.len() {
        return Err(DomainError::validation(
            ValidationKind::InvalidRun,
            format!("no card at index {card_index} in column {src}"),
        ));
    }
    let run = &src_pile.cards()[card_index..];
    if run.iter().any(|c| !c.face_up) {
        return Err(DomainError::validation(
            ValidationKind::FaceDownRun,
            "run contains a face-down card",
        ));
    }
    if !is_valid_run(run) {
        return Err(DomainError::validation(
            ValidationKind::InvalidRun,
            "run is not an alternating-color descending sequence",
        ));
    }
    state.tableau_column(dst)?.can_accept(run)?;

    let run = state.tableau_column_mut(src)?.take_from(card_index);
    let flipped = state.tableau_column_mut(src)?.flip_top_up();
    state.tableau_column_mut(dst)?.append_run(run);
    if flipped {
        state.score += SCORE_TABLEAU_FLIP;
    }
    Ok(())
}

/// Scan exposed cards in fixed priority order (tableau columns left to right,
/// then waste) and perform the first legal foundation move.
fn auto_move(state: &mut GameState) -> Result<(), DomainError> {
    for column in 0..TABLEAU_COLUMNS {
        if let Some(card) = state.tableau[column].top().copied() {
            if card.face_up && state.foundation(card.suit).can_accept(&[card]).is_ok() {
                return tableau_to_foundation(state, column);
            }
        }
    }
    if let Some(card) = state.waste.top().copied() {
        if state.foundation(card.suit).can_accept(&[card]).is_ok() {
            return waste_to_foundation(state, card.suit);
        }
    }
    Err(DomainError::validation(
        ValidationKind::NoAutoMove,
        "no exposed card can move to a foundation",
    ))
}
