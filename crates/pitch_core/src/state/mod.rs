//! Derived match state
//!
//! State builders fold over a dataset's records in order and attach an
//! immutable snapshot of evolving match context to every record, so
//! consumers never replay history themselves. The pass is strictly
//! sequential: each builder's context has a read-after-write dependency on
//! itself, and a record's snapshot must reflect exactly the records up to
//! and including that record.

mod formation;
mod lineup;
mod score;
mod sequence;

pub use formation::{FormationState, FormationStateBuilder};
pub use lineup::{LineupState, LineupStateBuilder};
pub use score::ScoreStateBuilder;
pub use sequence::{SequenceState, SequenceStateBuilder};

use std::collections::BTreeMap;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};
use crate::models::{Dataset, Event, Metadata, Record, Score};

/// Snapshot attached to a record under a builder's key.
///
/// Builders shipped with the crate use the typed variants; caller-supplied
/// builders attach whatever JSON payload they need via `Custom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateValue {
    Score(Score),
    Sequence(SequenceState),
    Lineup(LineupState),
    Formation(FormationState),
    Custom(serde_json::Value),
}

/// Per-record state slot: builder key -> snapshot. A `BTreeMap` keeps
/// serialization order stable.
pub type StateMap = BTreeMap<String, StateValue>;

/// A named, stateful accumulator advanced exactly once per record, in
/// record order.
pub trait StateBuilder<R: Record>: Send {
    /// Key the snapshots are attached under.
    fn key(&self) -> &'static str;

    /// Seed the internal context from dataset metadata before the pass.
    fn start(&mut self, metadata: &Metadata) {
        let _ = metadata;
    }

    /// Fold one record into the internal context. Builders ignore records
    /// irrelevant to them.
    fn advance(&mut self, record: &R);

    /// The context's value as of having processed the current record.
    fn snapshot(&self) -> StateValue;
}

type BuilderFactory<R> = fn() -> Box<dyn StateBuilder<R>>;

/// Explicit mapping from builder key to builder factory.
///
/// Registries are plain values constructed by the caller (or taken from
/// [`StateBuilderRegistry::standard`]); there is no global mutable table to
/// register into.
pub struct StateBuilderRegistry<R: Record> {
    factories: FxHashMap<&'static str, BuilderFactory<R>>,
}

impl<R: Record> StateBuilderRegistry<R> {
    pub fn empty() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Register a builder factory under `key`. Registering a key twice is a
    /// configuration error.
    pub fn register(&mut self, key: &'static str, factory: BuilderFactory<R>) -> Result<()> {
        if self.factories.insert(key, factory).is_some() {
            return Err(DatasetError::StateBuilderCollision { key: key.to_string() });
        }
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// Instantiate fresh builders for `keys`. Unknown keys and duplicate
    /// requests fail here, before any record is touched.
    fn resolve(&self, keys: &[&str]) -> Result<Vec<Box<dyn StateBuilder<R>>>> {
        let mut builders: Vec<Box<dyn StateBuilder<R>>> = Vec::with_capacity(keys.len());
        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                return Err(DatasetError::StateBuilderCollision { key: key.to_string() });
            }
            let factory = self
                .factories
                .get(key)
                .ok_or_else(|| DatasetError::UnknownStateBuilder { key: key.to_string() })?;
            builders.push(factory());
        }
        Ok(builders)
    }
}

impl StateBuilderRegistry<Event> {
    /// The builders shipped with the crate: `score`, `sequence`, `lineup`
    /// and `formation`.
    pub fn standard() -> Self {
        let entries: [(&'static str, BuilderFactory<Event>); 4] = [
            (score::KEY, || Box::<ScoreStateBuilder>::default()),
            (sequence::KEY, || Box::<SequenceStateBuilder>::default()),
            (lineup::KEY, || Box::<LineupStateBuilder>::default()),
            (formation::KEY, || Box::<FormationStateBuilder>::default()),
        ];
        Self {
            factories: entries.into_iter().collect(),
        }
    }
}

/// Run a single left-to-right pass over `dataset`, attaching one snapshot
/// per requested builder to every record. Returns a new dataset; the input
/// is never partially annotated.
pub fn add_state<R: Record>(
    dataset: &Dataset<R>,
    registry: &StateBuilderRegistry<R>,
    builder_keys: &[&str],
) -> Result<Dataset<R>> {
    let mut builders = registry.resolve(builder_keys)?;

    // Keys already attached by an earlier pass collide at setup, not
    // mid-pass.
    for record in dataset.iter() {
        for key in record.state().keys() {
            if builder_keys.contains(&key.as_str()) {
                return Err(DatasetError::StateBuilderCollision { key: key.clone() });
            }
        }
    }

    for builder in builders.iter_mut() {
        builder.start(&dataset.metadata);
    }

    log::debug!(
        "state pass over {} records with builders {:?}",
        dataset.len(),
        builder_keys
    );

    let mut records = dataset.records().to_vec();
    for record in records.iter_mut() {
        for builder in builders.iter_mut() {
            builder.advance(record);
            let snapshot = builder.snapshot();
            record.state_mut().insert(builder.key().to_string(), snapshot);
        }
    }

    Ok(Dataset::new(dataset.metadata.clone(), records))
}
