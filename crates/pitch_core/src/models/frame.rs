//! Tracking frames
//!
//! A frame is one periodic sample of everyone on the pitch. Player points
//! are keyed by player id in a `BTreeMap` so serialization order is stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::state::StateMap;

use super::common::{BallState, Ground};
use super::dataset::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub frame_id: u64,
    pub period_id: u8,
    /// Milliseconds since the start of the period.
    pub timestamp_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_owning_team: Option<Ground>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_state: Option<BallState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_coordinates: Option<Point>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub players_coordinates: BTreeMap<String, Point>,
    #[serde(default, skip_serializing_if = "StateMap::is_empty")]
    pub state: StateMap,
}

impl Frame {
    pub fn new(frame_id: u64, period_id: u8, timestamp_ms: u64) -> Self {
        Self {
            frame_id,
            period_id,
            timestamp_ms,
            ball_owning_team: None,
            ball_state: None,
            ball_coordinates: None,
            players_coordinates: BTreeMap::new(),
            state: StateMap::new(),
        }
    }

    pub fn with_ball(mut self, point: Point) -> Self {
        self.ball_coordinates = Some(point);
        self
    }

    pub fn with_ball_owning_team(mut self, team: Ground) -> Self {
        self.ball_owning_team = Some(team);
        self
    }

    pub fn with_player(mut self, player_id: impl Into<String>, point: Point) -> Self {
        self.players_coordinates.insert(player_id.into(), point);
        self
    }
}

impl Record for Frame {
    fn record_id(&self) -> String {
        self.frame_id.to_string()
    }

    fn period_id(&self) -> u8 {
        self.period_id
    }

    fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    // Frames have no acting team; action-executing orientations cannot be
    // resolved against tracking data.
    fn team(&self) -> Option<Ground> {
        None
    }

    fn ball_owning_team(&self) -> Option<Ground> {
        self.ball_owning_team
    }

    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        let mut frame = self.clone();
        frame.ball_coordinates = frame.ball_coordinates.map(f);
        for point in frame.players_coordinates.values_mut() {
            *point = f(*point);
        }
        frame
    }

    fn state(&self) -> &StateMap {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StateMap {
        &mut self.state
    }
}
