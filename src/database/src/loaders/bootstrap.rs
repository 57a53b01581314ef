use core::{Catalog, Player, PlayerMarketStats, PlayerPositionType, PlayerProjection};
use log::warn;
use serde::Deserialize;

const STATIC_BOOTSTRAP_JSON: &str = include_str!("../data/bootstrap.json");

/// The upstream bootstrap-static payload, as delivered. Only the fields the
/// catalog needs are modelled; everything else is ignored on deserialize.
#[derive(Deserialize)]
pub struct BootstrapEntity {
    pub elements: Vec<ElementEntity>,
    pub teams: Vec<TeamEntity>,
    pub events: Vec<EventEntity>,
}

#[derive(Deserialize)]
pub struct ElementEntity {
    pub id: u32,
    pub web_name: String,
    pub element_type: u8,
    pub team: u32,
    pub now_cost: u32,
    pub ep_next: Option<String>,
    pub form: String,
    pub cost_change_event: i32,
    pub transfers_in_event: u32,
    pub transfers_out_event: u32,
    pub selected_by_percent: String,
    pub news: String,
}

#[derive(Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub position: u8,
    pub played: u8,
    pub points: u16,
}

#[derive(Deserialize)]
pub struct EventEntity {
    pub id: u32,
    pub name: String,
    pub average_entry_score: u16,
    pub highest_score: Option<u16>,
    pub top_element: Option<u32>,
    pub is_current: bool,
    pub finished: bool,
}

/// Headline figures of the latest completed gameweek.
#[derive(Debug, Clone, PartialEq)]
pub struct GameweekSummary {
    pub gameweek: u32,
    pub average_score: u16,
    pub highest_score: u16,
    pub top_player: Option<String>,
}

pub struct BootstrapLoader;

impl BootstrapLoader {
    /// The bundled snapshot, used when the live feed is unreachable.
    pub fn load() -> BootstrapEntity {
        serde_json::from_str(STATIC_BOOTSTRAP_JSON).unwrap()
    }

    /// Parses a live payload.
    pub fn from_json(payload: &str) -> Result<BootstrapEntity, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

impl BootstrapEntity {
    /// Normalizes the raw payload into the catalog model.
    ///
    /// Upstream quirks handled here: prices arrive in integer tenths,
    /// projections and ownership arrive as decimal strings (unparsable or
    /// missing values degrade to 0.0), positions arrive as a 1-based index
    /// (anything outside 1-4 is dropped), and `news` is an empty string
    /// rather than absent when there is nothing to report.
    ///
    /// The upstream only publishes a single-gameweek expected-points figure;
    /// the three-gameweek horizon is synthesized from it and current form.
    pub fn to_catalog(&self) -> Catalog {
        let players = self
            .elements
            .iter()
            .filter_map(|element| {
                let position = match element.element_type {
                    1 => PlayerPositionType::Goalkeeper,
                    2 => PlayerPositionType::Defender,
                    3 => PlayerPositionType::Midfielder,
                    4 => PlayerPositionType::Forward,
                    other => {
                        warn!(
                            "skipping {}: unknown element_type {}",
                            element.web_name, other
                        );
                        return None;
                    }
                };

                let next_gameweek = parse_decimal(element.ep_next.as_deref());
                let form = parse_decimal(Some(&element.form));

                let projection = PlayerProjection {
                    next_gameweek,
                    three_gameweeks: next_gameweek + 2.0 * form,
                    form,
                };

                let market = PlayerMarketStats {
                    price_change_event: element.cost_change_event as f32 / 10.0,
                    transfers_in_event: element.transfers_in_event,
                    transfers_out_event: element.transfers_out_event,
                    selected_by_percent: parse_decimal(Some(&element.selected_by_percent)),
                    news: if element.news.is_empty() {
                        None
                    } else {
                        Some(element.news.clone())
                    },
                };

                Some(
                    Player::new(
                        &element.web_name,
                        position,
                        self.club_name(element.team),
                        element.now_cost as f32 / 10.0,
                        projection,
                    )
                    .with_market(market),
                )
            })
            .collect();

        Catalog::new(players)
    }

    /// Summary of the most recent finished gameweek, `None` before the
    /// first one completes.
    pub fn completed_gameweek_summary(&self) -> Option<GameweekSummary> {
        let event = self.events.iter().filter(|e| e.finished).next_back()?;

        let top_player = event.top_element.and_then(|id| {
            self.elements
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.web_name.clone())
        });

        Some(GameweekSummary {
            gameweek: event.id,
            average_score: event.average_entry_score,
            highest_score: event.highest_score.unwrap_or(0),
            top_player,
        })
    }

    fn club_name(&self, team_id: u32) -> &str {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .map(|t| t.name.as_str())
            .unwrap_or("")
    }
}

fn parse_decimal(value: Option<&str>) -> f32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0.0)
}
