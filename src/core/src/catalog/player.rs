use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GKP",
            PlayerPositionType::Defender => "DEF",
            PlayerPositionType::Midfielder => "MID",
            PlayerPositionType::Forward => "FWD",
        }
    }

    pub fn from_short_name(value: &str) -> Option<PlayerPositionType> {
        match value {
            "GKP" => Some(PlayerPositionType::Goalkeeper),
            "DEF" => Some(PlayerPositionType::Defender),
            "MID" => Some(PlayerPositionType::Midfielder),
            "FWD" => Some(PlayerPositionType::Forward),
            _ => None,
        }
    }

    pub fn all() -> [PlayerPositionType; 4] {
        [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::Defender,
            PlayerPositionType::Midfielder,
            PlayerPositionType::Forward,
        ]
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}

/// Horizon for the expected-points figure used in ranking and analysis.
/// Always passed explicitly so callers cannot silently mix horizons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionHorizon {
    NextGameweek,
    ThreeGameweeks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProjection {
    pub next_gameweek: f32,
    pub three_gameweeks: f32,
    pub form: f32,
}

impl PlayerProjection {
    pub fn for_horizon(&self, horizon: ProjectionHorizon) -> f32 {
        match horizon {
            ProjectionHorizon::NextGameweek => self.next_gameweek,
            ProjectionHorizon::ThreeGameweeks => self.three_gameweeks,
        }
    }
}

/// Per-gameweek market movement attached to a catalog record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerMarketStats {
    pub price_change_event: f32,
    pub transfers_in_event: u32,
    pub transfers_out_event: u32,
    pub selected_by_percent: f32,
    pub news: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: PlayerPositionType,
    pub club: String,
    pub price: f32,
    pub projection: PlayerProjection,
    pub market: PlayerMarketStats,
}

impl Player {
    pub fn new(
        name: &str,
        position: PlayerPositionType,
        club: &str,
        price: f32,
        projection: PlayerProjection,
    ) -> Self {
        Player {
            name: String::from(name),
            position,
            club: String::from(club),
            price,
            projection,
            market: PlayerMarketStats::default(),
        }
    }

    pub fn with_market(mut self, market: PlayerMarketStats) -> Self {
        self.market = market;
        self
    }

    pub fn projection_for(&self, horizon: ProjectionHorizon) -> f32 {
        self.projection.for_horizon(horizon)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.club)
    }
}
