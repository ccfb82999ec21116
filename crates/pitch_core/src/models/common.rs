//! Match-level vocabulary shared by events and tracking frames.

use serde::{Deserialize, Serialize};

use crate::geometry::{CoordinateSystem, Provider};
use crate::transform::Orientation;

/// Which side of the match sheet a team is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ground {
    Home,
    Away,
}

impl Ground {
    pub fn opponent(&self) -> Ground {
        match self {
            Ground::Home => Ground::Away,
            Ground::Away => Ground::Home,
        }
    }
}

/// Whether the ball is in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallState {
    Alive,
    Dead,
}

/// Team shape on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formation {
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-4-1-1")]
    F4411,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "4-1-4-1")]
    F4141,
    #[serde(rename = "4-5-1")]
    F451,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "3-4-3")]
    F343,
    #[serde(rename = "5-3-2")]
    F532,
    #[serde(rename = "5-4-1")]
    F541,
}

impl Formation {
    pub fn label(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F4411 => "4-4-1-1",
            Formation::F4231 => "4-2-3-1",
            Formation::F4141 => "4-1-4-1",
            Formation::F451 => "4-5-1",
            Formation::F352 => "3-5-2",
            Formation::F343 => "3-4-3",
            Formation::F532 => "5-3-2",
            Formation::F541 => "5-4-1",
        }
    }
}

impl std::fmt::Display for Formation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jersey_no: Option<u8>,
    /// Whether the player is in the starting lineup.
    #[serde(default)]
    pub starting: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: String,
    pub name: String,
    pub ground: Ground,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_formation: Option<Formation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<Player>,
}

impl Team {
    pub fn starting_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.starting)
    }
}

/// One period of play. Timestamps on records are relative to their period's
/// start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub id: u8,
    pub start_timestamp_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp_ms: Option<u64>,
}

impl Period {
    pub fn duration_ms(&self) -> Option<u64> {
        self.end_timestamp_ms
            .map(|end| end.saturating_sub(self.start_timestamp_ms))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn add_goal(&mut self, ground: Ground) {
        match ground {
            Ground::Home => self.home += 1,
            Ground::Away => self.away += 1,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

/// Dataset-level metadata. Parsers populate the coordinate system and
/// orientation; [`Dataset::transform`](crate::models::Dataset::transform)
/// re-establishes them on every derived dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub home_team: Team,
    pub away_team: Team,
    pub periods: Vec<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    pub coordinate_system: CoordinateSystem,
    pub orientation: Orientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

impl Metadata {
    pub fn team(&self, ground: Ground) -> &Team {
        match ground {
            Ground::Home => &self.home_team,
            Ground::Away => &self.away_team,
        }
    }

    pub fn period(&self, id: u8) -> Option<&Period> {
        self.periods.iter().find(|p| p.id == id)
    }
}
