//! Orientation resolution
//!
//! An [`Orientation`] fixes which team attacks toward the high end of the
//! x-axis. The fixed variants are static for a whole dataset; the dynamic
//! variants depend on who owns the ball (or executes the action) at each
//! record, so the flip decision is made per record against that record's
//! context. A record missing the context a dynamic variant needs aborts the
//! transform: guessing a direction would silently corrupt every downstream
//! spatial computation.

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};
use crate::models::{Ground, Record};

/// Attacking-direction convention of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// The home team attacks toward max x in both periods.
    FixedHomeAway,
    /// The away team attacks toward max x in both periods.
    FixedAwayHome,
    /// Whichever team owns the ball attacks toward max x.
    BallOwningTeam,
    /// Whichever team executes the action attacks toward max x.
    ActionExecutingTeam,
    /// No attacking-direction convention is known.
    NotSet,
}

impl Orientation {
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::FixedHomeAway => "fixed_home_away",
            Orientation::FixedAwayHome => "fixed_away_home",
            Orientation::BallOwningTeam => "ball_owning_team",
            Orientation::ActionExecutingTeam => "action_executing_team",
            Orientation::NotSet => "not_set",
        }
    }

    /// Whether resolving this orientation reads per-record context.
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            Orientation::BallOwningTeam | Orientation::ActionExecutingTeam
        )
    }
}

/// The slice of a record the resolver looks at.
#[derive(Debug, Clone)]
pub struct OrientationContext {
    pub record_id: String,
    pub period_id: u8,
    pub team: Option<Ground>,
    pub ball_owning_team: Option<Ground>,
}

impl OrientationContext {
    pub fn of<R: Record>(record: &R) -> Self {
        Self {
            record_id: record.record_id(),
            period_id: record.period_id(),
            team: record.team(),
            ball_owning_team: record.ball_owning_team(),
        }
    }
}

/// Sign of the attack direction the data is expressed in under
/// `orientation` at this record: +1 when the reference team attacks toward
/// max x, -1 when it attacks toward min x.
fn attack_sign(orientation: Orientation, ctx: &OrientationContext) -> Result<i8> {
    match orientation {
        Orientation::FixedHomeAway => Ok(1),
        Orientation::FixedAwayHome => Ok(-1),
        Orientation::BallOwningTeam => match ctx.ball_owning_team {
            Some(Ground::Home) => Ok(1),
            Some(Ground::Away) => Ok(-1),
            None => Err(DatasetError::MissingOrientationContext {
                record_id: ctx.record_id.clone(),
                orientation: Orientation::BallOwningTeam.name(),
                missing: "ball-owning team",
            }),
        },
        Orientation::ActionExecutingTeam => match ctx.team {
            Some(Ground::Home) => Ok(1),
            Some(Ground::Away) => Ok(-1),
            None => Err(DatasetError::MissingOrientationContext {
                record_id: ctx.record_id.clone(),
                orientation: Orientation::ActionExecutingTeam.name(),
                missing: "acting team",
            }),
        },
        Orientation::NotSet => Err(DatasetError::OrientationNotSet { side: "requested" }),
    }
}

/// Decide whether this record must be mirrored to re-express data recorded
/// under `from` in the `to` convention.
///
/// Equal orientations never mirror, so resolving an already-conforming
/// dataset is a no-op.
pub fn needs_flip(from: Orientation, to: Orientation, ctx: &OrientationContext) -> Result<bool> {
    if from == to {
        return Ok(false);
    }
    let flip = attack_sign(from, ctx)? != attack_sign(to, ctx)?;
    if flip {
        log::debug!(
            "record {} flips: {} -> {}",
            ctx.record_id,
            from.name(),
            to.name()
        );
    }
    Ok(flip)
}
