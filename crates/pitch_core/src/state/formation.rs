//! Current formation per team.

use serde::{Deserialize, Serialize};

use crate::models::{Event, EventBody, Formation, Ground, Metadata};

use super::{StateBuilder, StateValue};

pub(super) const KEY: &str = "formation";

/// Formations both teams are playing as of a record, seeded from the
/// starting formations and updated by formation-change events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<Formation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away: Option<Formation>,
}

impl FormationState {
    pub fn side(&self, ground: Ground) -> Option<Formation> {
        match ground {
            Ground::Home => self.home,
            Ground::Away => self.away,
        }
    }
}

#[derive(Debug, Default)]
pub struct FormationStateBuilder {
    current: FormationState,
}

impl StateBuilder<Event> for FormationStateBuilder {
    fn key(&self) -> &'static str {
        KEY
    }

    fn start(&mut self, metadata: &Metadata) {
        self.current = FormationState {
            home: metadata.home_team.starting_formation,
            away: metadata.away_team.starting_formation,
        };
    }

    fn advance(&mut self, event: &Event) {
        if let (EventBody::FormationChange { formation }, Some(ground)) = (&event.body, event.team)
        {
            match ground {
                Ground::Home => self.current.home = Some(*formation),
                Ground::Away => self.current.away = Some(*formation),
            }
        }
    }

    fn snapshot(&self) -> StateValue {
        StateValue::Formation(self.current)
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::CoordinateSystem;
    use crate::models::{Period, Team};
    use crate::transform::Orientation;

    use super::*;

    fn metadata() -> Metadata {
        Metadata {
            home_team: Team {
                team_id: "h".into(),
                name: "Home FC".into(),
                ground: Ground::Home,
                starting_formation: Some(Formation::F442),
                players: Vec::new(),
            },
            away_team: Team {
                team_id: "a".into(),
                name: "Away FC".into(),
                ground: Ground::Away,
                starting_formation: Some(Formation::F433),
                players: Vec::new(),
            },
            periods: vec![Period { id: 1, start_timestamp_ms: 0, end_timestamp_ms: None }],
            provider: None,
            coordinate_system: CoordinateSystem::normalized(),
            orientation: Orientation::FixedHomeAway,
            frame_rate: None,
            score: None,
        }
    }

    #[test]
    fn test_seeded_from_starting_formations() {
        let mut builder = FormationStateBuilder::default();
        builder.start(&metadata());
        assert_eq!(
            builder.snapshot(),
            StateValue::Formation(FormationState {
                home: Some(Formation::F442),
                away: Some(Formation::F433),
            })
        );
    }

    #[test]
    fn test_formation_change_updates_one_side() {
        let mut builder = FormationStateBuilder::default();
        builder.start(&metadata());
        builder.advance(
            &Event::new(
                "e1",
                2,
                0,
                EventBody::FormationChange { formation: Formation::F352 },
            )
            .with_team(Ground::Away),
        );
        assert_eq!(
            builder.snapshot(),
            StateValue::Formation(FormationState {
                home: Some(Formation::F442),
                away: Some(Formation::F352),
            })
        );
    }

    #[test]
    fn test_unseeded_formations_stay_unknown() {
        let builder = FormationStateBuilder::default();
        assert_eq!(
            builder.snapshot(),
            StateValue::Formation(FormationState::default())
        );
    }
}
