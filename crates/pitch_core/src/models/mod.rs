pub mod common;
pub mod dataset;
pub mod event;
pub mod frame;

pub use common::{BallState, Formation, Ground, Metadata, Period, Player, Score, Team};
pub use dataset::{Dataset, EventDataset, Record, TrackingDataset};
pub use event::{
    BodyPart, CardType, CarryResult, Event, EventBody, EventType, GoalkeeperAction, PassResult,
    PassType, Qualifier, SetPieceType, ShotResult, TakeOnResult,
};
pub use frame::Frame;
