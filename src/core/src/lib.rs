pub mod analysis;
pub mod catalog;
pub mod fixtures;
pub mod league;
pub mod squad;
pub mod trends;

// Re-export catalog items
pub use catalog::{
    Catalog, Player, PlayerMarketStats, PlayerPositionType, PlayerProjection, ProjectionHorizon,
};

// Re-export squad items
pub use squad::{
    BENCH_COUNT, BUDGET_CEILING, CLUB_CAP, RejectionReason, RosterValidator, SQUAD_SIZE,
    STARTING_COUNT, Squad, SquadMutation, SquadSlot, apply_mutation,
};

// Re-export analysis items
pub use analysis::{BudgetSummary, CaptainReport, DEFAULT_BUDGET_SLACK, SquadAggregator};

// Re-export league & fixtures items
pub use fixtures::Fixture;
pub use league::{LeagueTable, ScorerRow, TableRow};
