//! Dataset container and the record contract
//!
//! A [`Dataset`] owns an ordered sequence of records plus [`Metadata`]
//! describing how to read them (coordinate system, orientation, teams,
//! periods). All records of a dataset share that coordinate system and
//! orientation; `transform` and `add_state` re-establish the invariant on a
//! new dataset instead of mutating in place.

use fxhash::FxHashMap;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};
use crate::geometry::Point;
use crate::state::{add_state, StateBuilderRegistry, StateMap};
use crate::transform::TransformRequest;

use super::common::{Ground, Metadata};
use super::event::{Event, EventType};
use super::frame::Frame;

/// Contract every dataset record satisfies: identity, ordering context,
/// orientation context, spatial-attribute rewriting and the state slot.
pub trait Record: Clone + Send + Sync {
    fn record_id(&self) -> String;

    fn period_id(&self) -> u8;

    /// Milliseconds since the start of the record's period.
    fn timestamp_ms(&self) -> u64;

    /// Team executing the action, when the record has one.
    fn team(&self) -> Option<Ground>;

    /// Team in possession at the record's moment, when known.
    fn ball_owning_team(&self) -> Option<Ground>;

    /// A copy of the record with every spatial attribute rewritten by `f`.
    /// Absent points stay absent; non-spatial attributes are untouched.
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self;

    fn state(&self) -> &StateMap;

    fn state_mut(&mut self) -> &mut StateMap;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset<R: Record> {
    pub metadata: Metadata,
    records: Vec<R>,
    #[serde(skip)]
    id_index: OnceCell<FxHashMap<String, usize>>,
}

pub type EventDataset = Dataset<Event>;
pub type TrackingDataset = Dataset<Frame>;

impl<R: Record> Dataset<R> {
    pub fn new(metadata: Metadata, records: Vec<R>) -> Self {
        Self {
            metadata,
            records,
            id_index: OnceCell::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    fn index(&self) -> &FxHashMap<String, usize> {
        self.id_index.get_or_init(|| {
            self.records
                .iter()
                .enumerate()
                .map(|(i, r)| (r.record_id(), i))
                .collect()
        })
    }

    pub fn record_by_id(&self, record_id: &str) -> Option<&R> {
        self.index().get(record_id).map(|&i| &self.records[i])
    }

    /// Records passing `predicate`, as a new dataset under the same
    /// metadata. Relative order is preserved.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Self {
        let records = self.records.iter().filter(|r| predicate(r)).cloned().collect();
        Self::new(self.metadata.clone(), records)
    }

    /// Re-express the dataset in the requested coordinate system,
    /// orientation and/or pitch dimensions. See
    /// [`TransformRequest`](crate::transform::TransformRequest) for target
    /// semantics; an empty request is a configuration error.
    pub fn transform(&self, request: &TransformRequest) -> Result<Self> {
        let transformer = crate::transform::DatasetTransformer::new(
            self.metadata.coordinate_system.clone(),
            self.metadata.orientation,
            request,
        )?;
        transformer.transform_dataset(self)
    }

    /// Attach per-record state snapshots for builders resolved from
    /// `registry`. Unknown and colliding keys fail before any record is
    /// touched.
    pub fn add_state_with(
        &self,
        registry: &StateBuilderRegistry<R>,
        builder_keys: &[&str],
    ) -> Result<Self> {
        add_state(self, registry, builder_keys)
    }
}

impl<R: Record> std::ops::Index<usize> for Dataset<R> {
    type Output = R;

    fn index(&self, index: usize) -> &R {
        &self.records[index]
    }
}

impl EventDataset {
    /// Attach state snapshots using the standard builder registry
    /// (`score`, `sequence`, `lineup`, `formation`).
    pub fn add_state(&self, builder_keys: &[&str]) -> Result<Self> {
        self.add_state_with(&StateBuilderRegistry::standard(), builder_keys)
    }

    /// Resolve `event`'s related-event identifiers against this dataset.
    ///
    /// Relations are non-owning: only identifiers are stored, and they are
    /// resolved through the dataset index at call time. An event that is
    /// not part of this dataset is rejected as orphaned rather than
    /// resolved on faith.
    pub fn related_events(&self, event: &Event) -> Result<Vec<&Event>> {
        if self.record_by_id(&event.event_id).is_none() {
            return Err(DatasetError::OrphanedRecord {
                record_id: event.event_id.clone(),
            });
        }
        event
            .related_event_ids
            .iter()
            .map(|id| {
                self.record_by_id(id).ok_or_else(|| DatasetError::RecordNotFound {
                    record_id: id.clone(),
                })
            })
            .collect()
    }

    /// First related event of the given type, if any.
    pub fn related_event_of_type(
        &self,
        event: &Event,
        event_type: EventType,
    ) -> Result<Option<&Event>> {
        Ok(self
            .related_events(event)?
            .into_iter()
            .find(|e| e.event_type() == event_type))
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::CoordinateSystem;
    use crate::models::{EventBody, PassResult, Period, Team};
    use crate::transform::Orientation;

    use super::*;

    fn metadata() -> Metadata {
        Metadata {
            home_team: Team {
                team_id: "h".into(),
                name: "Home FC".into(),
                ground: Ground::Home,
                starting_formation: None,
                players: Vec::new(),
            },
            away_team: Team {
                team_id: "a".into(),
                name: "Away FC".into(),
                ground: Ground::Away,
                starting_formation: None,
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

    fn pass(id: &str, related: &[&str]) -> Event {
        Event::new(
            id,
            1,
            0,
            EventBody::Pass {
                receive_timestamp_ms: None,
                receiver_player_id: None,
                receiver_coordinates: None,
                result: Some(PassResult::Complete),
            },
        )
        .with_team(Ground::Home)
        .with_related(related.iter().map(|s| s.to_string()).collect())
    }

    fn dataset() -> EventDataset {
        Dataset::new(
            metadata(),
            vec![
                pass("e1", &[]),
                pass("e2", &["e1"]),
                Event::new("e3", 1, 10, EventBody::Recovery).with_team(Ground::Away),
            ],
        )
    }

    #[test]
    fn test_record_by_id() {
        let dataset = dataset();
        assert_eq!(dataset.record_by_id("e2").unwrap().event_id, "e2");
        assert!(dataset.record_by_id("missing").is_none());
    }

    #[test]
    fn test_indexable_ordered_sequence() {
        let dataset = dataset();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset[0].event_id, "e1");
        assert_eq!(dataset[2].event_id, "e3");
    }

    #[test]
    fn test_related_events_resolution() {
        let dataset = dataset();
        let e2 = dataset.record_by_id("e2").unwrap().clone();
        let related = dataset.related_events(&e2).unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].event_id, "e1");

        let by_type = dataset
            .related_event_of_type(&e2, EventType::Pass)
            .unwrap()
            .unwrap();
        assert_eq!(by_type.event_id, "e1");
        assert!(dataset
            .related_event_of_type(&e2, EventType::Shot)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_detached_record_is_orphaned() {
        let dataset = dataset();
        let detached = pass("e99", &["e1"]);
        let err = dataset.related_events(&detached).unwrap_err();
        assert!(matches!(err, DatasetError::OrphanedRecord { .. }));
    }

    #[test]
    fn test_unknown_related_id_fails_cleanly() {
        let dataset = Dataset::new(metadata(), vec![pass("e1", &["ghost"])]);
        let e1 = dataset.record_by_id("e1").unwrap().clone();
        let err = dataset.related_events(&e1).unwrap_err();
        assert!(matches!(err, DatasetError::RecordNotFound { .. }));
    }

    #[test]
    fn test_filter_keeps_metadata_and_order() {
        let dataset = dataset();
        let passes = dataset.filter(|e| e.event_type() == EventType::Pass);
        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].event_id, "e1");
        assert_eq!(passes.metadata, dataset.metadata);
        // the source dataset is untouched
        assert_eq!(dataset.len(), 3);
    }
}
