//! The fixed catalog of winning lines.

use crate::position::Position::{self, *};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Direction of a winning line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// A row.
    Horizontal,
    /// A column.
    Vertical,
    /// Corner to corner through the center.
    Diagonal,
}

/// Three positions whose joint occupation by one player ends the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine {
    /// Direction of the line.
    pub orientation: Orientation,
    /// Index within its orientation (rows and columns top/left first;
    /// diagonal 0 runs from top-left, diagonal 1 from top-right).
    pub index: usize,
    /// The three positions, in ascending index order.
    pub cells: [Position; 3],
}

impl WinLine {
    const fn new(orientation: Orientation, index: usize, cells: [Position; 3]) -> Self {
        Self {
            orientation,
            index,
            cells,
        }
    }

    /// Returns the player holding all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some(player)
            }
            _ => None,
        }
    }

    /// Looks up a line by its identity.
    pub fn find(orientation: Orientation, index: usize) -> Option<&'static WinLine> {
        WIN_LINES
            .iter()
            .find(|line| line.orientation == orientation && line.index == index)
    }

    /// Checks if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} line {}", self.orientation, self.index)
    }
}

/// All eight lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine::new(Orientation::Horizontal, 0, [TopLeft, TopCenter, TopRight]),
    WinLine::new(Orientation::Horizontal, 1, [MiddleLeft, Center, MiddleRight]),
    WinLine::new(Orientation::Horizontal, 2, [BottomLeft, BottomCenter, BottomRight]),
    WinLine::new(Orientation::Vertical, 0, [TopLeft, MiddleLeft, BottomLeft]),
    WinLine::new(Orientation::Vertical, 1, [TopCenter, Center, BottomCenter]),
    WinLine::new(Orientation::Vertical, 2, [TopRight, MiddleRight, BottomRight]),
    WinLine::new(Orientation::Diagonal, 0, [TopLeft, Center, BottomRight]),
    WinLine::new(Orientation::Diagonal, 1, [TopRight, Center, BottomLeft]),
];

/// Who won the round and along which line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinnerRecord {
    /// The winning player.
    pub player: Player,
    /// Direction of the completed line.
    pub orientation: Orientation,
    /// Index of the line within its orientation.
    pub index: usize,
}

impl WinnerRecord {
    /// Creates a record for `player` completing `line`.
    pub fn new(player: Player, line: &WinLine) -> Self {
        Self {
            player,
            orientation: line.orientation,
            index: line.index,
        }
    }

    /// The catalog line this record refers to.
    pub fn line(&self) -> Option<&'static WinLine> {
        WinLine::find(self.orientation, self.index)
    }
}
