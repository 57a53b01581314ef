//! Ranked market-movement lists over the catalog. All sorts are stable, so
//! catalog order (projection descending) breaks ties.

use crate::catalog::{Catalog, Player};
use itertools::Itertools;
use std::cmp::{Ordering, Reverse};

/// Players whose price moved this gameweek, biggest rise first.
pub fn price_risers(catalog: &Catalog, limit: usize) -> Vec<&Player> {
    catalog
        .players()
        .iter()
        .filter(|p| p.market.price_change_event != 0.0)
        .sorted_by(|a, b| {
            b.market
                .price_change_event
                .partial_cmp(&a.market.price_change_event)
                .unwrap_or(Ordering::Equal)
        })
        .take(limit)
        .collect()
}

pub fn most_transferred_in(catalog: &Catalog, limit: usize) -> Vec<&Player> {
    catalog
        .players()
        .iter()
        .sorted_by_key(|p| Reverse(p.market.transfers_in_event))
        .take(limit)
        .collect()
}

pub fn most_transferred_out(catalog: &Catalog, limit: usize) -> Vec<&Player> {
    catalog
        .players()
        .iter()
        .sorted_by_key(|p| Reverse(p.market.transfers_out_event))
        .take(limit)
        .collect()
}

/// Ownership percentage, highest first. The upstream source has no direct
/// "most captained" figure; ownership is the customary proxy.
pub fn most_selected(catalog: &Catalog, limit: usize) -> Vec<&Player> {
    catalog
        .players()
        .iter()
        .sorted_by(|a, b| {
            b.market
                .selected_by_percent
                .partial_cmp(&a.market.selected_by_percent)
                .unwrap_or(Ordering::Equal)
        })
        .take(limit)
        .collect()
}

/// Players carrying an injury/availability note, in catalog order.
pub fn flagged_players(catalog: &Catalog, limit: usize) -> Vec<&Player> {
    catalog
        .players()
        .iter()
        .filter(|p| p.market.news.is_some())
        .take(limit)
        .collect()
}
