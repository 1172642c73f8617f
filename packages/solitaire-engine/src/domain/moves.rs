//! Wire-level move intents. This is the only way a caller influences state.

use serde::{Deserialize, Serialize};

use crate::domain::cards::Suit;

/// A proposed move against the current state. Column indices are 0-based,
/// left to right.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "move", content = "args", rename_all = "camelCase")]
pub enum Move {
    /// Turn up to three stock cards onto waste, or recycle waste into stock
    /// when stock is empty.
    DrawFromStock,
    /// Top waste card onto the named suit's foundation.
    WasteToFoundation { suit: Suit },
    /// Top waste card onto a tableau column.
    WasteToTableau { column: usize },
    /// Exposed top card of a column onto its matching foundation.
    TableauToFoundation { column: usize },
    /// Contiguous face-up run starting at `card_index` onto another column.
    TableauToTableau {
        src: usize,
        card_index: usize,
        dst: usize,
    },
    /// First legal foundation move, scanning columns left to right then waste.
    AutoMove,
    /// Restore the previous snapshot from session history.
    Undo,
}
