use crate::analysis::result::{BudgetSummary, CaptainReport};
use crate::catalog::{Catalog, Player, ProjectionHorizon};
use crate::squad::{CLUB_CAP, SQUAD_SIZE, STARTING_COUNT, Squad};
use log::debug;
use std::cmp::Ordering;

pub const DEFAULT_BUDGET_SLACK: f32 = 0.5;

/// Read-only summary statistics and ranked suggestions over a squad
/// snapshot. Recomputed by the presentation layer after every mutation;
/// everything here is best-effort, stale names simply drop out.
pub struct SquadAggregator;

impl SquadAggregator {
    pub fn compute_budget(squad: &Squad, catalog: &Catalog) -> BudgetSummary {
        let total_spent = squad
            .slots()
            .iter()
            .filter_map(|s| s.assigned.as_deref())
            .filter_map(|name| catalog.get(name))
            .map(|p| p.price)
            .sum();

        BudgetSummary::new(total_spent)
    }

    /// Projected points over the starting XI for the chosen horizon.
    /// Bench players and unfilled or stale slots contribute nothing.
    pub fn projected_points(
        squad: &Squad,
        catalog: &Catalog,
        horizon: ProjectionHorizon,
    ) -> f32 {
        squad
            .resolved_starters(catalog)
            .iter()
            .map(|p| p.projection_for(horizon))
            .sum()
    }

    /// Ranks the resolved starters descending by projection. `None` means
    /// the squad is incomplete (fewer than 11 starters resolve) and no
    /// analysis is available; partial answers are never produced.
    ///
    /// The sort is stable, so ties keep slot order: the captain is the
    /// first of the tied best, the weakest the last of the tied worst.
    pub fn identify_captain_and_weakest(
        squad: &Squad,
        catalog: &Catalog,
        horizon: ProjectionHorizon,
    ) -> Option<CaptainReport> {
        let mut starters = squad.resolved_starters(catalog);

        if starters.len() < STARTING_COUNT {
            debug!(
                "analysis unavailable: {} of {} starters resolved",
                starters.len(),
                STARTING_COUNT
            );
            return None;
        }

        starters.sort_by(|a, b| {
            b.projection_for(horizon)
                .partial_cmp(&a.projection_for(horizon))
                .unwrap_or(Ordering::Equal)
        });

        Some(CaptainReport {
            captain: (*starters.first()?).clone(),
            weakest: (*starters.last()?).clone(),
        })
    }

    /// First catalog player that beats `weakest` at the same position within
    /// the price window, is not already in the squad and stays under the
    /// club cap. The catalog is projection-sorted, so the first match is the
    /// highest-projection legal upgrade. `None` means the slot is already
    /// optimal for this budget window.
    pub fn suggest_upgrade(
        weakest: &Player,
        catalog: &Catalog,
        squad: &Squad,
        horizon: ProjectionHorizon,
        budget_slack: f32,
    ) -> Option<Player> {
        // The outgoing player's slot no longer counts toward his club
        // once the upgrade replaces him.
        let vacated_slot = squad.slot_of_player(&weakest.name).map(|s| s.id);

        catalog
            .players()
            .iter()
            .find(|p| {
                p.position == weakest.position
                    && p.projection_for(horizon) > weakest.projection_for(horizon)
                    && p.price <= weakest.price + budget_slack
                    && !squad.contains_player(&p.name)
                    && squad.club_count(catalog, &p.club, vacated_slot) < CLUB_CAP
            })
            .cloned()
    }

    /// Greedy single-pass fill: for each unfilled slot in id order, take the
    /// first eligible catalog player for the slot's position. No
    /// backtracking; slots may stay unfilled when the pool runs dry.
    pub fn auto_fill(squad: &Squad, catalog: &Catalog) -> Squad {
        let mut filled = squad.clone();

        for slot_id in 0..SQUAD_SIZE as u8 {
            let position = match filled.slot(slot_id) {
                Some(slot) if !slot.is_filled() => slot.position,
                _ => continue,
            };

            let choice = catalog
                .players()
                .iter()
                .find(|p| {
                    p.position == position
                        && !filled.contains_player(&p.name)
                        && filled.club_count(catalog, &p.club, Some(slot_id)) < CLUB_CAP
                })
                .map(|p| p.name.clone());

            match choice {
                Some(name) => filled.assign(slot_id, &name),
                None => debug!("no eligible {} left for slot {}", position, slot_id),
            }
        }

        filled
    }
}
