use crate::catalog::PlayerPositionType;
use serde::{Deserialize, Serialize};

/// One of the 15 squad positions. The position binding is fixed at squad
/// creation; only the assignment and the bench flag ever change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadSlot {
    pub id: u8,
    pub position: PlayerPositionType,
    pub assigned: Option<String>,
    pub is_bench: bool,
}

impl SquadSlot {
    pub fn new(id: u8, position: PlayerPositionType, is_bench: bool) -> Self {
        SquadSlot {
            id,
            position,
            assigned: None,
            is_bench,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.assigned.is_some()
    }
}
