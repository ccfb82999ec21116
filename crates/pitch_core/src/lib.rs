//! # pitch_core - Provider-Independent Match Data Core
//!
//! Match data providers each ship events and tracking frames in their own
//! pitch coordinate convention, dimension scale and attacking-direction
//! convention. This library normalizes such data into one representation
//! and re-expresses it on demand:
//!
//! - `Dataset::transform` rewrites every spatial attribute into a target
//!   coordinate system, orientation and/or pitch dimensions
//! - `Dataset::add_state` attaches evolving match state (running score,
//!   lineup, possession sequence, formation) to every record
//!
//! Both return new datasets; a dataset's records always share one
//! coordinate system and orientation. Parsers that produce datasets and
//! exporters that consume them live outside this crate.

pub mod error;
pub mod geometry;
pub mod models;
pub mod state;
pub mod transform;

// Re-export the dataset surface
pub use error::{DatasetError, ErrorKind, Result};
pub use geometry::{
    CoordinateSystem, Dimension, Origin, PitchDimensions, Point, Provider, VerticalOrientation,
};
pub use models::{
    BallState, Dataset, Event, EventBody, EventDataset, EventType, Formation, Frame, Ground,
    Metadata, Period, Player, Qualifier, Record, Score, Team, TrackingDataset,
};
pub use state::{StateBuilder, StateBuilderRegistry, StateMap, StateValue};
pub use transform::{DatasetTransformer, Orientation, OrientationContext, TransformRequest};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
