//! Running score.

use crate::models::{Event, Score};

use super::{StateBuilder, StateValue};

pub(super) const KEY: &str = "score";

/// Counts goals as they happen. The snapshot on a goal record already
/// includes that goal; own goals are credited to the opponent.
#[derive(Debug, Default)]
pub struct ScoreStateBuilder {
    score: Score,
}

impl StateBuilder<Event> for ScoreStateBuilder {
    fn key(&self) -> &'static str {
        KEY
    }

    fn advance(&mut self, event: &Event) {
        if let Some(team) = event.scoring_team() {
            self.score.add_goal(team);
        }
    }

    fn snapshot(&self) -> StateValue {
        StateValue::Score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{EventBody, Ground, ShotResult};

    use super::*;

    fn shot(id: &str, team: Ground, result: ShotResult) -> Event {
        Event::new(
            id,
            1,
            0,
            EventBody::Shot { result_coordinates: None, result: Some(result) },
        )
        .with_team(team)
    }

    #[test]
    fn test_goals_accumulate_per_team() {
        let mut builder = ScoreStateBuilder::default();
        builder.advance(&shot("e1", Ground::Home, ShotResult::Goal));
        builder.advance(&shot("e2", Ground::Away, ShotResult::Saved));
        builder.advance(&shot("e3", Ground::Away, ShotResult::Goal));
        builder.advance(&shot("e4", Ground::Home, ShotResult::Goal));

        assert_eq!(
            builder.snapshot(),
            StateValue::Score(Score { home: 2, away: 1 })
        );
    }

    #[test]
    fn test_own_goal_counts_for_the_opponent() {
        let mut builder = ScoreStateBuilder::default();
        builder.advance(&shot("e1", Ground::Home, ShotResult::OwnGoal));
        assert_eq!(
            builder.snapshot(),
            StateValue::Score(Score { home: 0, away: 1 })
        );
    }

    #[test]
    fn test_non_shot_events_are_ignored() {
        let mut builder = ScoreStateBuilder::default();
        builder.advance(&Event::new("e1", 1, 0, EventBody::Recovery));
        assert_eq!(builder.snapshot(), StateValue::Score(Score::default()));
    }
}
