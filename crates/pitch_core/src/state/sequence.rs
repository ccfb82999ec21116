//! Possession sequences.

use serde::{Deserialize, Serialize};

use crate::models::{Event, Ground};

use super::{StateBuilder, StateValue};

pub(super) const KEY: &str = "sequence";

/// The possession sequence a record belongs to. The counter starts at zero
/// and increments every time the ball-owning team changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceState {
    pub sequence_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_owning_team: Option<Ground>,
}

#[derive(Debug, Default)]
pub struct SequenceStateBuilder {
    current: SequenceState,
    seen_possession: bool,
}

impl StateBuilder<Event> for SequenceStateBuilder {
    fn key(&self) -> &'static str {
        KEY
    }

    fn advance(&mut self, event: &Event) {
        // Records without possession info stay in the current sequence.
        let Some(owner) = event.ball_owning_team else {
            return;
        };
        if self.seen_possession && self.current.ball_owning_team != Some(owner) {
            self.current.sequence_id += 1;
        }
        self.current.ball_owning_team = Some(owner);
        self.seen_possession = true;
    }

    fn snapshot(&self) -> StateValue {
        StateValue::Sequence(self.current)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::EventBody;

    use super::*;

    fn touch(id: &str, owner: Option<Ground>) -> Event {
        let event = Event::new(id, 1, 0, EventBody::Recovery);
        match owner {
            Some(team) => event.with_ball_owning_team(team),
            None => event,
        }
    }

    #[test]
    fn test_sequence_increments_on_possession_change() {
        let mut builder = SequenceStateBuilder::default();

        builder.advance(&touch("e1", Some(Ground::Home)));
        assert_eq!(
            builder.snapshot(),
            StateValue::Sequence(SequenceState {
                sequence_id: 0,
                ball_owning_team: Some(Ground::Home),
            })
        );

        builder.advance(&touch("e2", Some(Ground::Home)));
        builder.advance(&touch("e3", Some(Ground::Away)));
        assert_eq!(
            builder.snapshot(),
            StateValue::Sequence(SequenceState {
                sequence_id: 1,
                ball_owning_team: Some(Ground::Away),
            })
        );

        builder.advance(&touch("e4", Some(Ground::Home)));
        assert_eq!(
            builder.snapshot(),
            StateValue::Sequence(SequenceState {
                sequence_id: 2,
                ball_owning_team: Some(Ground::Home),
            })
        );
    }

    #[test]
    fn test_unknown_possession_keeps_current_sequence() {
        let mut builder = SequenceStateBuilder::default();
        builder.advance(&touch("e1", Some(Ground::Home)));
        builder.advance(&touch("e2", None));
        assert_eq!(
            builder.snapshot(),
            StateValue::Sequence(SequenceState {
                sequence_id: 0,
                ball_owning_team: Some(Ground::Home),
            })
        );
    }
}
