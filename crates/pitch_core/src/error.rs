use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("invalid pitch dimensions: {0}")]
    InvalidDimensions(String),

    #[error("unknown coordinate system provider: {0}")]
    UnknownProvider(String),

    #[error("transform request is empty: set a coordinate system, orientation or pitch dimensions")]
    EmptyTransformRequest,

    #[error("unknown state builder key: {key}")]
    UnknownStateBuilder { key: String },

    #[error("state builder key already in use: {key}")]
    StateBuilderCollision { key: String },

    #[error("cannot orient record {record_id}: {orientation} orientation requires the {missing}")]
    MissingOrientationContext {
        record_id: String,
        orientation: &'static str,
        missing: &'static str,
    },

    #[error("cannot reconcile orientations: the {side} orientation is not set")]
    OrientationNotSet { side: &'static str },

    #[error("record {record_id} is not attached to this dataset")]
    OrphanedRecord { record_id: String },

    #[error("no record with id {record_id}")]
    RecordNotFound { record_id: String },
}

/// The three failure classes surfaced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid setup: degenerate dimensions, unknown provider or builder key.
    /// Raised before any record is touched.
    Configuration,
    /// A dynamic orientation target needed context a record does not carry.
    UnresolvableOrientation,
    /// A relation lookup on a detached record or an unknown identifier.
    OrphanedReference,
}

impl DatasetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DatasetError::InvalidDimensions(_)
            | DatasetError::UnknownProvider(_)
            | DatasetError::EmptyTransformRequest
            | DatasetError::UnknownStateBuilder { .. }
            | DatasetError::StateBuilderCollision { .. }
            | DatasetError::OrientationNotSet { .. } => ErrorKind::Configuration,
            DatasetError::MissingOrientationContext { .. } => ErrorKind::UnresolvableOrientation,
            DatasetError::OrphanedRecord { .. } | DatasetError::RecordNotFound { .. } => {
                ErrorKind::OrphanedReference
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
