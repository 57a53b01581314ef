use serde::{Deserialize, Serialize};

/// One standings line as delivered by the upstream competition feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub position: u8,
    pub team: String,
    pub played: u8,
    pub won: u8,
    pub draw: u8,
    pub lost: u8,
    pub goal_difference: i16,
    pub points: u16,
}

#[derive(Debug, Clone, Default)]
pub struct LeagueTable {
    rows: Vec<TableRow>,
}

impl LeagueTable {
    /// Orders rows by upstream position; when the feed ships unpositioned or
    /// tied rows, points and goal difference decide.
    pub fn sorted(mut rows: Vec<TableRow>) -> Self {
        rows.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then(b.points.cmp(&a.points))
                .then(b.goal_difference.cmp(&a.goal_difference))
        });

        LeagueTable { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn leader(&self) -> Option<&TableRow> {
        self.rows.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(position: u8, team: &str, points: u16, goal_difference: i16) -> TableRow {
        TableRow {
            position,
            team: String::from(team),
            played: 10,
            won: 5,
            draw: 2,
            lost: 3,
            goal_difference,
            points,
        }
    }

    #[test]
    fn test_sorted_by_upstream_position() {
        let table = LeagueTable::sorted(vec![
            row(3, "Juventus", 18, 5),
            row(1, "Inter", 24, 12),
            row(2, "Napoli", 22, 9),
        ]);

        let teams: Vec<&str> = table.rows().iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, vec!["Inter", "Napoli", "Juventus"]);
        assert_eq!(table.leader().unwrap().team, "Inter");
    }

    #[test]
    fn test_tied_positions_fall_back_to_points_and_goal_difference() {
        let table = LeagueTable::sorted(vec![
            row(1, "Milan", 20, 4),
            row(1, "Roma", 23, 7),
            row(1, "Lazio", 23, 10),
        ]);

        let teams: Vec<&str> = table.rows().iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, vec!["Lazio", "Roma", "Milan"]);
    }
}
