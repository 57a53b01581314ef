use crate::catalog::{Catalog, Player, PlayerPositionType};
use crate::squad::squad::{CLUB_CAP, Squad};
use log::debug;

/// Formation bounds over the 11 starters: exactly one goalkeeper,
/// 3-5 defenders, 2-5 midfielders, 1-3 forwards.
const DEFENDER_RANGE: (usize, usize) = (3, 5);
const MIDFIELDER_RANGE: (usize, usize) = (2, 5);
const FORWARD_RANGE: (usize, usize) = (1, 3);

/// Gates squad mutations. Never mutates anything itself; callers apply the
/// mutation only after the check passes, so a `false` always leaves the
/// squad untouched.
pub struct RosterValidator;

impl RosterValidator {
    /// Whether exchanging the starter/bench designation of two slots keeps
    /// the formation legal.
    ///
    /// A self-swap is trivially legal. Two slots on the same side of the
    /// bench line cannot change the formation, so the request is gated off
    /// as a no-op rather than applied.
    pub fn can_swap(squad: &Squad, slot_a: u8, slot_b: u8) -> bool {
        if slot_a == slot_b {
            return true;
        }

        let (Some(a), Some(b)) = (squad.slot(slot_a), squad.slot(slot_b)) else {
            return false;
        };

        if a.is_bench == b.is_bench {
            return false;
        }

        let mut goalkeepers = 0;
        let mut defenders = 0;
        let mut midfielders = 0;
        let mut forwards = 0;

        // Starter set after the flag exchange: the swapped pair flips sides,
        // everyone else stays put.
        let starters_after = squad.slots().iter().filter(|s| {
            if s.id == slot_a || s.id == slot_b {
                s.is_bench
            } else {
                !s.is_bench
            }
        });

        for slot in starters_after {
            match slot.position {
                PlayerPositionType::Goalkeeper => goalkeepers += 1,
                PlayerPositionType::Defender => defenders += 1,
                PlayerPositionType::Midfielder => midfielders += 1,
                PlayerPositionType::Forward => forwards += 1,
            }
        }

        let legal = goalkeepers == 1
            && (DEFENDER_RANGE.0..=DEFENDER_RANGE.1).contains(&defenders)
            && (MIDFIELDER_RANGE.0..=MIDFIELDER_RANGE.1).contains(&midfielders)
            && (FORWARD_RANGE.0..=FORWARD_RANGE.1).contains(&forwards);

        if !legal {
            debug!(
                "swap {}<->{} rejected: {}-{}-{} with {} GKP",
                slot_a, slot_b, defenders, midfielders, forwards, goalkeepers
            );
        }

        legal
    }

    /// Whether assigning `candidate` to `slot_id` respects the slot's fixed
    /// position and the club cap.
    ///
    /// The position is re-checked even though callers pre-filter by it: the
    /// presentation layer can bypass its own filter. Re-assigning the player
    /// already in the slot is always legal.
    pub fn can_assign_player(
        squad: &Squad,
        catalog: &Catalog,
        slot_id: u8,
        candidate: &Player,
    ) -> bool {
        let Some(slot) = squad.slot(slot_id) else {
            return false;
        };

        if slot.position != candidate.position {
            return false;
        }

        if slot.assigned.as_deref() == Some(candidate.name.as_str()) {
            return true;
        }

        // Every other filled slot sharing the candidate's club; the slot
        // being replaced does not count against its incoming player.
        squad.club_count(catalog, &candidate.club, Some(slot_id)) < CLUB_CAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlayerProjection;

    fn player(name: &str, position: PlayerPositionType, club: &str) -> Player {
        Player::new(name, position, club, 5.0, PlayerProjection::default())
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            player("Raya", PlayerPositionType::Goalkeeper, "Arsenal"),
            player("Saliba", PlayerPositionType::Defender, "Arsenal"),
            player("Gabriel", PlayerPositionType::Defender, "Arsenal"),
            player("Saka", PlayerPositionType::Midfielder, "Arsenal"),
            player("Rice", PlayerPositionType::Midfielder, "Arsenal"),
            player("Haaland", PlayerPositionType::Forward, "Man City"),
            player("Salah", PlayerPositionType::Midfielder, "Liverpool"),
        ])
    }

    #[test]
    fn test_self_swap_always_legal() {
        let squad = Squad::new();
        assert!(RosterValidator::can_swap(&squad, 3, 3));
        assert!(RosterValidator::can_swap(&squad, 12, 12));
    }

    #[test]
    fn test_same_side_swap_gated_off() {
        let squad = Squad::new();
        // Two starters
        assert!(!RosterValidator::can_swap(&squad, 1, 2));
        // Two bench slots
        assert!(!RosterValidator::can_swap(&squad, 11, 12));
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let squad = Squad::new();
        assert!(!RosterValidator::can_swap(&squad, 0, 99));
    }

    #[test]
    fn test_goalkeeper_swap_rejected_gk_for_outfielder() {
        let squad = Squad::new();
        // Starting GKP (0) for bench DEF (12) would leave zero goalkeepers
        assert!(!RosterValidator::can_swap(&squad, 0, 12));
        // GKP for backup GKP is fine
        assert!(RosterValidator::can_swap(&squad, 0, 11));
    }

    #[test]
    fn test_formation_bounds_enforced() {
        let squad = Squad::new(); // 4-4-2

        // DEF out, MID in: 3-5-2, legal
        assert!(RosterValidator::can_swap(&squad, 1, 13));
        // FWD out, DEF in: 5-4-1, legal
        assert!(RosterValidator::can_swap(&squad, 9, 12));

        let mut thin_defence = Squad::new();
        thin_defence.swap_bench_flags(1, 13); // 3-5-2
        // Another DEF out would make it 2-6-2
        assert!(!RosterValidator::can_swap(&thin_defence, 2, 13));
    }

    #[test]
    fn test_accepted_swaps_leave_legal_formations() {
        let mut squad = Squad::new();
        squad.swap_bench_flags(9, 12); // 5-4-1, still legal

        for a in 0..15u8 {
            for b in 0..15u8 {
                if !RosterValidator::can_swap(&squad, a, b) {
                    continue;
                }

                let mut next = squad.clone();
                next.swap_bench_flags(a, b);

                assert_eq!(next.starters().count(), 11);
                assert_eq!(next.bench().count(), 4);
                assert_eq!(
                    next.starter_position_count(PlayerPositionType::Goalkeeper),
                    1
                );
                assert!((3..=5)
                    .contains(&next.starter_position_count(PlayerPositionType::Defender)));
                assert!((2..=5)
                    .contains(&next.starter_position_count(PlayerPositionType::Midfielder)));
                assert!((1..=3)
                    .contains(&next.starter_position_count(PlayerPositionType::Forward)));
            }
        }
    }

    #[test]
    fn test_swap_is_symmetric() {
        let squad = Squad::new();
        for (a, b) in [(0u8, 11u8), (0, 12), (1, 13), (9, 12), (5, 14)] {
            assert_eq!(
                RosterValidator::can_swap(&squad, a, b),
                RosterValidator::can_swap(&squad, b, a)
            );
        }
    }

    #[test]
    fn test_assign_position_mismatch_rejected() {
        let catalog = catalog();
        let squad = Squad::new();
        let haaland = catalog.get("Haaland").unwrap();

        // Slot 5 is a midfielder slot
        assert!(!RosterValidator::can_assign_player(
            &squad, &catalog, 5, haaland
        ));
        assert!(RosterValidator::can_assign_player(
            &squad, &catalog, 9, haaland
        ));
    }

    #[test]
    fn test_club_cap_blocks_fourth_player() {
        let catalog = catalog();
        let mut squad = Squad::new();
        squad.assign(0, "Raya");
        squad.assign(1, "Saliba");
        squad.assign(2, "Gabriel");

        let saka = catalog.get("Saka").unwrap();
        assert!(!RosterValidator::can_assign_player(&squad, &catalog, 5, saka));

        // A non-Arsenal midfielder is fine
        let salah = catalog.get("Salah").unwrap();
        assert!(RosterValidator::can_assign_player(&squad, &catalog, 5, salah));
    }

    #[test]
    fn test_replacing_own_club_member_allowed() {
        let catalog = catalog();
        let mut squad = Squad::new();
        squad.assign(0, "Raya");
        squad.assign(1, "Saliba");
        squad.assign(5, "Rice");

        // Three Arsenal players is the cap, but slot 5 already holds one of
        // them, so swapping Rice for Saka stays at 3.
        let saka = catalog.get("Saka").unwrap();
        assert!(RosterValidator::can_assign_player(&squad, &catalog, 5, saka));

        // With a third Arsenal player elsewhere the swap would make four.
        squad.assign(2, "Gabriel");
        assert!(!RosterValidator::can_assign_player(&squad, &catalog, 5, saka));
    }

    #[test]
    fn test_reassigning_same_player_is_noop_legal() {
        let catalog = catalog();
        let mut squad = Squad::new();
        squad.assign(0, "Raya");
        squad.assign(1, "Saliba");
        squad.assign(2, "Gabriel");

        let gabriel = catalog.get("Gabriel").unwrap();
        assert!(RosterValidator::can_assign_player(
            &squad, &catalog, 2, gabriel
        ));
    }
}
