//! XDS-style circular zone layout.

use std::f64::consts::FRAC_PI_4;

use super::{Coord, ImageSampler};
use crate::util::{ProfLocError, ProfLocResult};

/// Zones per frame block: one central zone plus 8 angular ring zones.
const ZONES_PER_BLOCK: usize = 9;

/// Sampler following the XDS reference-region convention.
///
/// Each frame block holds 9 zones: a central disc of radius `r1` around the
/// detector centre and 8 zones spaced 45 degrees apart on the surrounding
/// ring. With `r0` the distance from the centre to the nearest detector edge,
/// `r1 = r0 / 3` splits the disc of radius `r0` into 9 equal areas and
/// `r2 = r1 * sqrt(5)` is the equal-area mid radius of the ring, where the
/// ring-zone centers sit.
///
/// Any finite in-plane coordinate resolves: the ring conceptually extends to
/// infinity, and frame numbers outside the scan range clamp to the nearest
/// block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XdsCircleSampler {
    image_size: [f64; 2],
    scan_range: [f64; 2],
    num_blocks: usize,
    centre: [f64; 2],
    r0: f64,
    r1: f64,
    r2: f64,
}

impl XdsCircleSampler {
    /// Creates a layout with `num_blocks` frame blocks over a
    /// `width x height` detector and a `[z0, z1]` frame range.
    pub fn new(
        image_size: [f64; 2],
        scan_range: [f64; 2],
        num_blocks: usize,
    ) -> ProfLocResult<Self> {
        let [width, height] = image_size;
        let [z0, z1] = scan_range;
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ProfLocError::InvalidInput("detector extents must be positive"));
        }
        if !(z1 > z0) || !z0.is_finite() || !z1.is_finite() {
            return Err(ProfLocError::InvalidInput("frame range must be non-empty"));
        }
        if num_blocks == 0 {
            return Err(ProfLocError::InvalidInput("frame block count must be nonzero"));
        }
        let centre = [width / 2.0, height / 2.0];
        let r0 = centre[0].min(centre[1]);
        let r1 = r0 / 3.0;
        let r2 = r1 * 5.0_f64.sqrt();
        Ok(Self {
            image_size,
            scan_range,
            num_blocks,
            centre,
            r0,
            r1,
            r2,
        })
    }

    /// Returns the detector size in pixels.
    pub fn image_size(&self) -> [f64; 2] {
        self.image_size
    }

    /// Returns the frame range covered by the blocks.
    pub fn scan_range(&self) -> [f64; 2] {
        self.scan_range
    }

    /// Returns the number of frame blocks.
    pub fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    /// Returns the detector centre.
    pub fn centre(&self) -> [f64; 2] {
        self.centre
    }

    /// Returns the layout radii `(r0, r1, r2)`.
    pub fn radii(&self) -> (f64, f64, f64) {
        (self.r0, self.r1, self.r2)
    }

    fn block_step(&self) -> f64 {
        (self.scan_range[1] - self.scan_range[0]) / self.num_blocks as f64
    }

    fn block_of(&self, z: f64) -> usize {
        let t = (z - self.scan_range[0]) / self.block_step();
        (t.floor().max(0.0) as usize).min(self.num_blocks - 1)
    }

    fn in_block_zone(&self, x: f64, y: f64) -> usize {
        let dx = x - self.centre[0];
        let dy = y - self.centre[1];
        if dx.hypot(dy) < self.r1 {
            return 0;
        }
        1 + angle_bucket(dy.atan2(dx))
    }
}

/// Buckets an angle in radians into one of 8 cells 45 degrees wide, centered
/// on the cell directions.
fn angle_bucket(angle: f64) -> usize {
    ((angle / FRAC_PI_4).round() as i64).rem_euclid(8) as usize
}

impl ImageSampler for XdsCircleSampler {
    fn zone_count(&self) -> usize {
        ZONES_PER_BLOCK * self.num_blocks
    }

    fn index(&self, coord: Coord) -> ProfLocResult<usize> {
        let [x, y, z] = coord;
        if !x.is_finite() || !y.is_finite() || !z.is_finite() {
            return Err(ProfLocError::OutOfDomain { coord });
        }
        Ok(self.block_of(z) * ZONES_PER_BLOCK + self.in_block_zone(x, y))
    }

    fn zone_center(&self, index: usize) -> ProfLocResult<Coord> {
        let zones = self.zone_count();
        if index >= zones {
            return Err(ProfLocError::IndexOutOfRange { index, zones });
        }
        let block = index / ZONES_PER_BLOCK;
        let slot = index % ZONES_PER_BLOCK;
        let zc = self.scan_range[0] + (block as f64 + 0.5) * self.block_step();
        if slot == 0 {
            return Ok([self.centre[0], self.centre[1], zc]);
        }
        let angle = (slot - 1) as f64 * FRAC_PI_4;
        Ok([
            self.centre[0] + self.r2 * angle.cos(),
            self.centre[1] + self.r2 * angle.sin(),
            zc,
        ])
    }
}
