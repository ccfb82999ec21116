//! Players on the pitch.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Event, EventBody, Ground, Metadata};

use super::{StateBuilder, StateValue};

pub(super) const KEY: &str = "lineup";

/// Player ids currently on the pitch per team, seeded from the starting
/// lineups and maintained through substitutions, player on/off records and
/// dismissals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineupState {
    pub home: BTreeSet<String>,
    pub away: BTreeSet<String>,
}

impl LineupState {
    fn side_mut(&mut self, ground: Ground) -> &mut BTreeSet<String> {
        match ground {
            Ground::Home => &mut self.home,
            Ground::Away => &mut self.away,
        }
    }

    pub fn side(&self, ground: Ground) -> &BTreeSet<String> {
        match ground {
            Ground::Home => &self.home,
            Ground::Away => &self.away,
        }
    }
}

#[derive(Debug, Default)]
pub struct LineupStateBuilder {
    lineup: LineupState,
}

impl StateBuilder<Event> for LineupStateBuilder {
    fn key(&self) -> &'static str {
        KEY
    }

    fn start(&mut self, metadata: &Metadata) {
        for team in [&metadata.home_team, &metadata.away_team] {
            let side = self.lineup.side_mut(team.ground);
            side.clear();
            side.extend(team.starting_players().map(|p| p.player_id.clone()));
        }
    }

    fn advance(&mut self, event: &Event) {
        let (Some(ground), Some(player_id)) = (event.team, event.player_id.as_deref()) else {
            return;
        };
        let side = self.lineup.side_mut(ground);
        match &event.body {
            EventBody::Substitution { replacement_player_id } => {
                side.remove(player_id);
                side.insert(replacement_player_id.clone());
            }
            EventBody::PlayerOff => {
                side.remove(player_id);
            }
            EventBody::PlayerOn => {
                side.insert(player_id.to_string());
            }
            EventBody::Card { card_type } if card_type.is_dismissal() => {
                side.remove(player_id);
            }
            _ => {}
        }
    }

    fn snapshot(&self) -> StateValue {
        StateValue::Lineup(self.lineup.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::CoordinateSystem;
    use crate::models::{CardType, Period, Player, Team};
    use crate::transform::Orientation;

    use super::*;

    fn player(id: &str, starting: bool) -> Player {
        Player {
            player_id: id.into(),
            name: id.to_uppercase(),
            jersey_no: None,
            starting,
        }
    }

    fn metadata() -> Metadata {
        Metadata {
            home_team: Team {
                team_id: "h".into(),
                name: "Home FC".into(),
                ground: Ground::Home,
                starting_formation: None,
                players: vec![player("h1", true), player("h2", true), player("h12", false)],
            },
            away_team: Team {
                team_id: "a".into(),
                name: "Away FC".into(),
                ground: Ground::Away,
                starting_formation: None,
                players: vec![player("a1", true)],
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
    fn test_seeded_from_starting_lineups() {
        let mut builder = LineupStateBuilder::default();
        builder.start(&metadata());
        match builder.snapshot() {
            StateValue::Lineup(lineup) => {
                assert_eq!(lineup.home.len(), 2);
                assert!(lineup.home.contains("h1"));
                assert!(!lineup.home.contains("h12"));
                assert_eq!(lineup.away.len(), 1);
            }
            other => panic!("unexpected state value {other:?}"),
        }
    }

    #[test]
    fn test_substitution_swaps_players() {
        let mut builder = LineupStateBuilder::default();
        builder.start(&metadata());
        builder.advance(
            &Event::new(
                "e1",
                2,
                0,
                EventBody::Substitution { replacement_player_id: "h12".into() },
            )
            .with_team(Ground::Home)
            .with_player("h2"),
        );

        match builder.snapshot() {
            StateValue::Lineup(lineup) => {
                assert!(!lineup.home.contains("h2"));
                assert!(lineup.home.contains("h12"));
                assert_eq!(lineup.home.len(), 2);
            }
            other => panic!("unexpected state value {other:?}"),
        }
    }

    #[test]
    fn test_red_card_removes_without_replacement() {
        let mut builder = LineupStateBuilder::default();
        builder.start(&metadata());
        builder.advance(
            &Event::new("e1", 1, 0, EventBody::Card { card_type: CardType::Red })
                .with_team(Ground::Home)
                .with_player("h1"),
        );
        builder.advance(
            &Event::new("e2", 1, 0, EventBody::Card { card_type: CardType::FirstYellow })
                .with_team(Ground::Home)
                .with_player("h2"),
        );

        match builder.snapshot() {
            StateValue::Lineup(lineup) => {
                assert!(!lineup.home.contains("h1"));
                assert!(lineup.home.contains("h2"));
            }
            other => panic!("unexpected state value {other:?}"),
        }
    }
}
