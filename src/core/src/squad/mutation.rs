use crate::catalog::{Catalog, PlayerPositionType};
use crate::squad::squad::Squad;
use crate::squad::validator::RosterValidator;
use std::fmt::{Display, Formatter, Result};

/// A user action against the squad, decoupled from whatever surface
/// produced it (selection change, swap click, auto-fill).
#[derive(Debug, Clone, PartialEq)]
pub enum SquadMutation {
    AssignPlayer { slot_id: u8, player_name: String },
    SwapSlots { slot_a: u8, slot_b: u8 },
}

/// Why a mutation was turned down. Carries enough to name the violated
/// rule to the user; none of these are fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    UnknownSlot(u8),
    UnknownPlayer(String),
    PositionMismatch {
        slot_id: u8,
        expected: PlayerPositionType,
        found: PlayerPositionType,
    },
    ClubLimitExceeded(String),
    FormationViolation,
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RejectionReason::UnknownSlot(id) => {
                write!(f, "squad has no slot {}", id)
            }
            RejectionReason::UnknownPlayer(name) => {
                write!(f, "player {} is not in the catalog", name)
            }
            RejectionReason::PositionMismatch {
                slot_id,
                expected,
                found,
            } => {
                write!(
                    f,
                    "slot {} requires a {}, got a {}",
                    slot_id, expected, found
                )
            }
            RejectionReason::ClubLimitExceeded(club) => {
                write!(f, "a fourth player from {} is not allowed", club)
            }
            RejectionReason::FormationViolation => {
                write!(
                    f,
                    "formation must keep 1 GKP, 3-5 DEF, 2-5 MID and 1-3 FWD"
                )
            }
        }
    }
}

/// Applies a mutation to a copy of the squad. The input squad is never
/// touched: on rejection the caller still holds the unchanged original.
///
/// Swap requests that cannot change anything (same slot twice, or two slots
/// on the same side of the bench line) succeed with an unchanged squad.
pub fn apply_mutation(
    squad: &Squad,
    catalog: &Catalog,
    mutation: SquadMutation,
) -> std::result::Result<Squad, RejectionReason> {
    match mutation {
        SquadMutation::AssignPlayer { slot_id, player_name } => {
            let slot = squad
                .slot(slot_id)
                .ok_or(RejectionReason::UnknownSlot(slot_id))?;
            let player = catalog
                .get(&player_name)
                .ok_or_else(|| RejectionReason::UnknownPlayer(player_name.clone()))?;

            if slot.position != player.position {
                return Err(RejectionReason::PositionMismatch {
                    slot_id,
                    expected: slot.position,
                    found: player.position,
                });
            }

            if !RosterValidator::can_assign_player(squad, catalog, slot_id, player) {
                return Err(RejectionReason::ClubLimitExceeded(player.club.clone()));
            }

            let mut next = squad.clone();
            next.assign(slot_id, &player_name);
            Ok(next)
        }
        SquadMutation::SwapSlots { slot_a, slot_b } => {
            let a = squad
                .slot(slot_a)
                .ok_or(RejectionReason::UnknownSlot(slot_a))?;
            let b = squad
                .slot(slot_b)
                .ok_or(RejectionReason::UnknownSlot(slot_b))?;

            if slot_a == slot_b || a.is_bench == b.is_bench {
                return Ok(squad.clone());
            }

            if !RosterValidator::can_swap(squad, slot_a, slot_b) {
                return Err(RejectionReason::FormationViolation);
            }

            let mut next = squad.clone();
            next.swap_bench_flags(slot_a, slot_b);
            Ok(next)
        }
    }
}
