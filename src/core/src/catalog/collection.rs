use crate::catalog::player::{Player, PlayerPositionType};
use std::cmp::Ordering;

/// Snapshot of the upstream player pool.
///
/// Records are sorted descending by next-gameweek projection at construction
/// and never reordered afterwards: upgrade scanning and auto-fill rely on
/// "first match" meaning "highest-projection candidate".
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    players: Vec<Player>,
}

impl Catalog {
    pub fn new(mut players: Vec<Player>) -> Self {
        players.sort_by(|a, b| {
            b.projection
                .next_gameweek
                .partial_cmp(&a.projection.next_gameweek)
                .unwrap_or(Ordering::Equal)
        });

        Catalog { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn by_position(
        &self,
        position: PlayerPositionType,
    ) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.position == position)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::player::PlayerProjection;

    fn player(name: &str, position: PlayerPositionType, next_gameweek: f32) -> Player {
        Player::new(
            name,
            position,
            "Test FC",
            5.0,
            PlayerProjection {
                next_gameweek,
                three_gameweeks: next_gameweek * 3.0,
                form: 0.0,
            },
        )
    }

    #[test]
    fn test_catalog_sorted_descending_by_projection() {
        let catalog = Catalog::new(vec![
            player("Saka", PlayerPositionType::Midfielder, 7.1),
            player("Haaland", PlayerPositionType::Forward, 9.2),
            player("Salah", PlayerPositionType::Midfielder, 8.5),
        ]);

        let names: Vec<&str> = catalog.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Haaland", "Salah", "Saka"]);
    }

    #[test]
    fn test_catalog_lookup_by_name() {
        let catalog = Catalog::new(vec![player("Salah", PlayerPositionType::Midfielder, 8.5)]);

        assert!(catalog.get("Salah").is_some());
        assert!(catalog.get("Unknown").is_none());
    }

    #[test]
    fn test_catalog_position_filter() {
        let catalog = Catalog::new(vec![
            player("Haaland", PlayerPositionType::Forward, 9.2),
            player("Salah", PlayerPositionType::Midfielder, 8.5),
            player("Watkins", PlayerPositionType::Forward, 6.0),
        ]);

        let forwards: Vec<&str> = catalog
            .by_position(PlayerPositionType::Forward)
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(forwards, vec!["Haaland", "Watkins"]);
    }
}
