//! Zone sampling policies.
//!
//! A sampler partitions the detector area (and frame range) into zones and
//! maps detector coordinates to zone indices and back. Samplers are pure
//! layout policy: they hold nothing but the parameters fixed at construction
//! and are immutable afterwards, so the locator can swap layouts without any
//! change to storage or scoring.

use crate::util::ProfLocResult;

mod grid;
mod xds;

pub use grid::GridSampler;
pub use xds::XdsCircleSampler;

/// Detector coordinate: x and y in pixels, z as frame number.
pub type Coord = [f64; 3];

/// Capability set shared by all zone layouts.
pub trait ImageSampler {
    /// Returns the total number of zones. At least 1, fixed for the
    /// sampler's lifetime.
    fn zone_count(&self) -> usize;

    /// Resolves a detector coordinate to its zone index.
    ///
    /// Fails with `OutOfDomain` when the coordinate lies outside the
    /// sampler's supported domain.
    fn index(&self, coord: Coord) -> ProfLocResult<usize>;

    /// Returns every zone a coordinate maps to.
    ///
    /// Layouts with overlapping support regions may return more than one
    /// index; the plain layouts here return the singleton `{index(coord)}`.
    fn indices(&self, coord: Coord) -> ProfLocResult<Vec<usize>> {
        Ok(vec![self.index(coord)?])
    }

    /// Returns the canonical center coordinate of a zone.
    ///
    /// Fails with `IndexOutOfRange` when `index >= zone_count()`.
    fn zone_center(&self, index: usize) -> ProfLocResult<Coord>;
}
