use crate::catalog::{Catalog, Player, PlayerPositionType};
use crate::squad::slot::SquadSlot;
use serde::{Deserialize, Serialize};

pub const SQUAD_SIZE: usize = 15;
pub const STARTING_COUNT: usize = 11;
pub const BENCH_COUNT: usize = 4;

pub const BUDGET_CEILING: f32 = 100.0;
pub const CLUB_CAP: usize = 3;

const INITIAL_LAYOUT: [(PlayerPositionType, bool); SQUAD_SIZE] = [
    (PlayerPositionType::Goalkeeper, false),
    (PlayerPositionType::Defender, false),
    (PlayerPositionType::Defender, false),
    (PlayerPositionType::Defender, false),
    (PlayerPositionType::Defender, false),
    (PlayerPositionType::Midfielder, false),
    (PlayerPositionType::Midfielder, false),
    (PlayerPositionType::Midfielder, false),
    (PlayerPositionType::Midfielder, false),
    (PlayerPositionType::Forward, false),
    (PlayerPositionType::Forward, false),
    // Bench, one slot per position
    (PlayerPositionType::Goalkeeper, true),
    (PlayerPositionType::Defender, true),
    (PlayerPositionType::Midfielder, true),
    (PlayerPositionType::Forward, true),
];

/// The 15-slot squad: 11 starters and a 4-man bench. Owned by the caller and
/// passed by value/reference; there is no ambient squad state anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    slots: Vec<SquadSlot>,
}

impl Squad {
    pub fn new() -> Self {
        let slots = INITIAL_LAYOUT
            .iter()
            .enumerate()
            .map(|(id, &(position, is_bench))| SquadSlot::new(id as u8, position, is_bench))
            .collect();

        Squad { slots }
    }

    pub fn slots(&self) -> &[SquadSlot] {
        &self.slots
    }

    pub fn slot(&self, id: u8) -> Option<&SquadSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Raw assignment, no validation. Gate through `RosterValidator` or
    /// `apply_mutation` before calling.
    pub fn assign(&mut self, slot_id: u8, player_name: &str) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_id) {
            slot.assigned = Some(String::from(player_name));
        }
    }

    pub fn clear(&mut self, slot_id: u8) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_id) {
            slot.assigned = None;
        }
    }

    /// Raw starter/bench flag exchange between two slots. Players do not
    /// move between slots, the bench designation does.
    pub fn swap_bench_flags(&mut self, slot_a: u8, slot_b: u8) {
        let flag_a = self.slot(slot_a).map(|s| s.is_bench);
        let flag_b = self.slot(slot_b).map(|s| s.is_bench);

        if let (Some(flag_a), Some(flag_b)) = (flag_a, flag_b) {
            if let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_a) {
                slot.is_bench = flag_b;
            }
            if let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_b) {
                slot.is_bench = flag_a;
            }
        }
    }

    pub fn starters(&self) -> impl Iterator<Item = &SquadSlot> {
        self.slots.iter().filter(|s| !s.is_bench)
    }

    pub fn bench(&self) -> impl Iterator<Item = &SquadSlot> {
        self.slots.iter().filter(|s| s.is_bench)
    }

    pub fn contains_player(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s.assigned.as_deref() == Some(name))
    }

    pub fn slot_of_player(&self, name: &str) -> Option<&SquadSlot> {
        self.slots
            .iter()
            .find(|s| s.assigned.as_deref() == Some(name))
    }

    /// Starters whose assignment resolves in the catalog, in slot order.
    /// A name the catalog no longer knows counts as an empty slot.
    pub fn resolved_starters<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Player> {
        self.starters()
            .filter_map(|s| s.assigned.as_deref())
            .filter_map(|name| catalog.get(name))
            .collect()
    }

    /// Filled slots (starters and bench) referencing the given club,
    /// optionally ignoring one slot. Stale names resolve to no club.
    pub fn club_count(&self, catalog: &Catalog, club: &str, exclude_slot: Option<u8>) -> usize {
        self.slots
            .iter()
            .filter(|s| exclude_slot != Some(s.id))
            .filter_map(|s| s.assigned.as_deref())
            .filter_map(|name| catalog.get(name))
            .filter(|p| p.club == club)
            .count()
    }

    pub fn starter_position_count(&self, position: PlayerPositionType) -> usize {
        self.starters().filter(|s| s.position == position).count()
    }

    pub fn formation_description(&self) -> String {
        format!(
            "{}-{}-{}",
            self.starter_position_count(PlayerPositionType::Defender),
            self.starter_position_count(PlayerPositionType::Midfielder),
            self.starter_position_count(PlayerPositionType::Forward)
        )
    }
}

impl Default for Squad {
    fn default() -> Self {
        Squad::new()
    }
}
