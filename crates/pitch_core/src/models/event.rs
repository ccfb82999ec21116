//! Event records
//!
//! One [`Event`] struct carries the attributes every provider agrees on;
//! [`EventBody`] is the tagged union of kind-specific payloads. Matching on
//! the body is exhaustive, so adding an event kind breaks every dispatch
//! site that needs to care about it.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::state::StateMap;

use super::common::{BallState, Formation, Ground};
use super::dataset::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotResult {
    Goal,
    OffTarget,
    Post,
    Blocked,
    Saved,
    OwnGoal,
}

impl ShotResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ShotResult::Goal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassResult {
    Complete,
    Incomplete,
    Out,
    Offside,
}

impl PassResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PassResult::Complete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TakeOnResult {
    Complete,
    Incomplete,
    Out,
}

impl TakeOnResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TakeOnResult::Complete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarryResult {
    Complete,
    Incomplete,
}

impl CarryResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CarryResult::Complete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    FirstYellow,
    SecondYellow,
    Red,
}

impl CardType {
    /// Whether the card removes the player from the pitch.
    pub fn is_dismissal(&self) -> bool {
        matches!(self, CardType::SecondYellow | CardType::Red)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetPieceType {
    GoalKick,
    FreeKick,
    ThrowIn,
    CornerKick,
    Penalty,
    KickOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    RightFoot,
    LeftFoot,
    Head,
    BothHands,
    Chest,
    LeftHand,
    RightHand,
    DropKick,
    KeeperArm,
    Other,
    NoTouch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassType {
    Cross,
    HandPass,
    HeadPass,
    HighPass,
    Launch,
    SimplePass,
    SmartPass,
    LongBall,
    ThroughBall,
    ChippedPass,
    FlickOn,
    Assist,
    SecondAssist,
    SwitchOfPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalkeeperAction {
    Reflex,
    SaveAttempt,
}

/// Provider annotation on an event, as a closed set of tagged variants with
/// an explicit kind name instead of a naming-by-type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    SetPiece(SetPieceType),
    BodyPart(BodyPart),
    Pass(PassType),
    Card(CardType),
    GoalkeeperAction(GoalkeeperAction),
    CounterAttack(bool),
}

impl Qualifier {
    pub fn kind(&self) -> &'static str {
        match self {
            Qualifier::SetPiece(_) => "set_piece",
            Qualifier::BodyPart(_) => "body_part",
            Qualifier::Pass(_) => "pass",
            Qualifier::Card(_) => "card",
            Qualifier::GoalkeeperAction(_) => "goalkeeper_action",
            Qualifier::CounterAttack(_) => "counter_attack",
        }
    }
}

/// Discriminant of [`EventBody`], for filtering and relation lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Generic,
    Pass,
    Shot,
    TakeOn,
    Carry,
    Recovery,
    BallOut,
    FoulCommitted,
    Card,
    Substitution,
    PlayerOn,
    PlayerOff,
    FormationChange,
}

/// Kind-specific payload. Secondary coordinates here (receiver, shot end,
/// carry end) describe the same physical action as the event's primary
/// coordinates and are transformed with the same mirror decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventBody {
    /// Unrecognised provider event, kept under its provider name.
    Generic { name: String },
    Pass {
        #[serde(skip_serializing_if = "Option::is_none")]
        receive_timestamp_ms: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        receiver_player_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        receiver_coordinates: Option<Point>,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<PassResult>,
    },
    Shot {
        #[serde(skip_serializing_if = "Option::is_none")]
        result_coordinates: Option<Point>,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<ShotResult>,
    },
    TakeOn {
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<TakeOnResult>,
    },
    Carry {
        #[serde(skip_serializing_if = "Option::is_none")]
        end_timestamp_ms: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        end_coordinates: Option<Point>,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<CarryResult>,
    },
    Recovery,
    BallOut,
    FoulCommitted,
    Card { card_type: CardType },
    Substitution { replacement_player_id: String },
    PlayerOn,
    PlayerOff,
    FormationChange { formation: Formation },
}

impl EventBody {
    pub fn event_type(&self) -> EventType {
        match self {
            EventBody::Generic { .. } => EventType::Generic,
            EventBody::Pass { .. } => EventType::Pass,
            EventBody::Shot { .. } => EventType::Shot,
            EventBody::TakeOn { .. } => EventType::TakeOn,
            EventBody::Carry { .. } => EventType::Carry,
            EventBody::Recovery => EventType::Recovery,
            EventBody::BallOut => EventType::BallOut,
            EventBody::FoulCommitted => EventType::FoulCommitted,
            EventBody::Card { .. } => EventType::Card,
            EventBody::Substitution { .. } => EventType::Substitution,
            EventBody::PlayerOn => EventType::PlayerOn,
            EventBody::PlayerOff => EventType::PlayerOff,
            EventBody::FormationChange { .. } => EventType::FormationChange,
        }
    }
}

/// A single match event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identifier given by the provider.
    pub event_id: String,
    pub period_id: u8,
    /// Milliseconds since the start of the period.
    pub timestamp_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Ground>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_owning_team: Option<Ground>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_state: Option<BallState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Point>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_event_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<Qualifier>,
    /// Per-builder snapshots attached by `add_state`; empty until then.
    #[serde(default, skip_serializing_if = "StateMap::is_empty")]
    pub state: StateMap,
    #[serde(flatten)]
    pub body: EventBody,
}

impl Event {
    pub fn new(
        event_id: impl Into<String>,
        period_id: u8,
        timestamp_ms: u64,
        body: EventBody,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            period_id,
            timestamp_ms,
            team: None,
            player_id: None,
            ball_owning_team: None,
            ball_state: None,
            coordinates: None,
            related_event_ids: Vec::new(),
            qualifiers: Vec::new(),
            state: StateMap::new(),
            body,
        }
    }

    pub fn with_team(mut self, team: Ground) -> Self {
        self.team = Some(team);
        self
    }

    pub fn with_player(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = Some(player_id.into());
        self
    }

    pub fn with_ball_owning_team(mut self, team: Ground) -> Self {
        self.ball_owning_team = Some(team);
        self
    }

    pub fn with_ball_state(mut self, state: BallState) -> Self {
        self.ball_state = Some(state);
        self
    }

    pub fn with_coordinates(mut self, point: Point) -> Self {
        self.coordinates = Some(point);
        self
    }

    pub fn with_related(mut self, ids: Vec<String>) -> Self {
        self.related_event_ids = ids;
        self
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    pub fn event_type(&self) -> EventType {
        self.body.event_type()
    }

    pub fn set_piece(&self) -> Option<SetPieceType> {
        self.qualifiers.iter().find_map(|q| match q {
            Qualifier::SetPiece(t) => Some(*t),
            _ => None,
        })
    }

    pub fn body_part(&self) -> Option<BodyPart> {
        self.qualifiers.iter().find_map(|q| match q {
            Qualifier::BodyPart(p) => Some(*p),
            _ => None,
        })
    }

    pub fn pass_type(&self) -> Option<PassType> {
        self.qualifiers.iter().find_map(|q| match q {
            Qualifier::Pass(t) => Some(*t),
            _ => None,
        })
    }

    pub fn is_counter_attack(&self) -> bool {
        self.qualifiers
            .iter()
            .any(|q| matches!(q, Qualifier::CounterAttack(true)))
    }

    /// The team credited with a goal by this event, if it is one. Own goals
    /// are credited to the opponent of the shooting team.
    pub fn scoring_team(&self) -> Option<Ground> {
        match (&self.body, self.team) {
            (EventBody::Shot { result: Some(ShotResult::Goal), .. }, Some(team)) => Some(team),
            (EventBody::Shot { result: Some(ShotResult::OwnGoal), .. }, Some(team)) => {
                Some(team.opponent())
            }
            _ => None,
        }
    }
}

impl Record for Event {
    fn record_id(&self) -> String {
        self.event_id.clone()
    }

    fn period_id(&self) -> u8 {
        self.period_id
    }

    fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    fn team(&self) -> Option<Ground> {
        self.team
    }

    fn ball_owning_team(&self) -> Option<Ground> {
        self.ball_owning_team
    }

    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        let mut event = self.clone();
        event.coordinates = event.coordinates.map(f);
        event.body = match event.body {
            EventBody::Pass {
                receive_timestamp_ms,
                receiver_player_id,
                receiver_coordinates,
                result,
            } => EventBody::Pass {
                receive_timestamp_ms,
                receiver_player_id,
                receiver_coordinates: receiver_coordinates.map(f),
                result,
            },
            EventBody::Shot { result_coordinates, result } => EventBody::Shot {
                result_coordinates: result_coordinates.map(f),
                result,
            },
            EventBody::Carry {
                end_timestamp_ms,
                end_coordinates,
                result,
            } => EventBody::Carry {
                end_timestamp_ms,
                end_coordinates: end_coordinates.map(f),
                result,
            },
            other => other,
        };
        event
    }

    fn state(&self) -> &StateMap {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StateMap {
        &mut self.state
    }
}
