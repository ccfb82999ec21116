//! Coordinate and orientation transformation engine
//!
//! Composes the per-record mirror decision with dimension rescaling into one
//! affine mapping per axis and applies it to every spatial attribute of
//! every record. The mirror reflects about the *source* pitch bounds before
//! any rescaling happens; reflecting after the rescale would use the wrong
//! midpoint and shift every coordinate. The vertical-convention reflection
//! happens last, about the target bounds.
//!
//! Each record's mapping depends only on that record, so records are
//! transformed in parallel; the result is identical to a sequential pass.

mod orientation;


pub use orientation::{needs_flip, Orientation, OrientationContext};

use rayon::prelude::*;

use crate::error::{DatasetError, Result};
use crate::geometry::{CoordinateSystem, PitchDimensions, Point};
use crate::models::{Dataset, Record};

/// Targets of a dataset transformation. At least one must be set.
///
/// A pitch-dimensions override without a coordinate system means "keep the
/// source conventions, rescale the rectangle".
#[derive(Debug, Clone, Default)]
pub struct TransformRequest {
    pub to_coordinate_system: Option<CoordinateSystem>,
    pub to_orientation: Option<Orientation>,
    pub to_pitch_dimensions: Option<PitchDimensions>,
}

impl TransformRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coordinate_system(mut self, coordinate_system: CoordinateSystem) -> Self {
        self.to_coordinate_system = Some(coordinate_system);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.to_orientation = Some(orientation);
        self
    }

    pub fn pitch_dimensions(mut self, pitch_dimensions: PitchDimensions) -> Self {
        self.to_pitch_dimensions = Some(pitch_dimensions);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_coordinate_system.is_none()
            && self.to_orientation.is_none()
            && self.to_pitch_dimensions.is_none()
    }
}

/// Stateless per-record mapper between two fully specified conventions.
#[derive(Debug)]
pub struct DatasetTransformer {
    from_coordinate_system: CoordinateSystem,
    from_orientation: Orientation,
    to_coordinate_system: CoordinateSystem,
    to_orientation: Orientation,
}

impl DatasetTransformer {
    /// Resolve a request against the source conventions. Fails before any
    /// record is touched: empty requests and irreconcilable orientations
    /// are configuration errors.
    pub fn new(
        from_coordinate_system: CoordinateSystem,
        from_orientation: Orientation,
        request: &TransformRequest,
    ) -> Result<Self> {
        if request.is_empty() {
            return Err(DatasetError::EmptyTransformRequest);
        }

        let mut to_coordinate_system = request
            .to_coordinate_system
            .clone()
            .unwrap_or_else(|| from_coordinate_system.clone());
        if let Some(dims) = request.to_pitch_dimensions {
            to_coordinate_system = to_coordinate_system.with_pitch_dimensions(dims);
        }

        let to_orientation = request.to_orientation.unwrap_or(from_orientation);
        if to_orientation != from_orientation {
            if from_orientation == Orientation::NotSet {
                return Err(DatasetError::OrientationNotSet { side: "source" });
            }
            if to_orientation == Orientation::NotSet {
                return Err(DatasetError::OrientationNotSet { side: "requested" });
            }
        }

        Ok(Self {
            from_coordinate_system,
            from_orientation,
            to_coordinate_system,
            to_orientation,
        })
    }

    pub fn to_coordinate_system(&self) -> &CoordinateSystem {
        &self.to_coordinate_system
    }

    pub fn to_orientation(&self) -> Orientation {
        self.to_orientation
    }

    fn flips_vertical(&self) -> bool {
        self.from_coordinate_system.vertical_orientation
            != self.to_coordinate_system.vertical_orientation
    }

    /// Attacking-direction mirror: a 180° rotation of the pitch, reflecting
    /// both axes about the source bounds.
    fn flip_point(&self, point: Point) -> Point {
        let dims = &self.from_coordinate_system.pitch_dimensions;
        Point {
            x: dims.x_dim.reflect(point.x),
            y: dims.y_dim.reflect(point.y),
        }
    }

    /// Rescale source interval -> target interval per axis, then reconcile
    /// the vertical convention about the target bounds.
    fn change_dimensions(&self, point: Point) -> Point {
        let from = &self.from_coordinate_system.pitch_dimensions;
        let to = &self.to_coordinate_system.pitch_dimensions;
        let x = to.x_dim.from_base(from.x_dim.to_base(point.x));
        let mut y = to.y_dim.from_base(from.y_dim.to_base(point.y));
        if self.flips_vertical() {
            y = to.y_dim.reflect(y);
        }
        Point { x, y }
    }

    /// The full per-point mapping under an already-resolved mirror
    /// decision.
    pub fn transform_point(&self, point: Point, flip: bool) -> Point {
        let point = if flip { self.flip_point(point) } else { point };
        self.change_dimensions(point)
    }

    /// Transform one record. The mirror decision is resolved once from the
    /// record's context and applied to all of its spatial attributes, so a
    /// pass's start and end point mirror together.
    pub fn transform_record<R: Record>(&self, record: &R) -> Result<R> {
        let ctx = OrientationContext::of(record);
        let flip = needs_flip(self.from_orientation, self.to_orientation, &ctx)?;
        Ok(record.map_points(&|p| self.transform_point(p, flip)))
    }

    /// Transform every record and re-establish the dataset invariant under
    /// the target conventions. The source dataset is left untouched.
    pub fn transform_dataset<R: Record>(&self, dataset: &Dataset<R>) -> Result<Dataset<R>> {
        log::debug!(
            "transforming {} records: {:?} -> {:?}, orientation {} -> {}",
            dataset.len(),
            self.from_coordinate_system.pitch_dimensions,
            self.to_coordinate_system.pitch_dimensions,
            self.from_orientation.name(),
            self.to_orientation.name(),
        );

        let records = dataset
            .records()
            .par_iter()
            .map(|record| self.transform_record(record))
            .collect::<Result<Vec<R>>>()?;

        let mut metadata = dataset.metadata.clone();
        metadata.coordinate_system = self.to_coordinate_system.clone();
        metadata.orientation = self.to_orientation;
        Ok(Dataset::new(metadata, records))
    }
}
