//! Regular rectangular zone lattice.

use super::{Coord, ImageSampler};
use crate::util::{ProfLocError, ProfLocResult};

/// Sampler laying zones on an `nx x ny x nz` lattice over the detector area
/// and frame range.
///
/// Resolution is direct bucket arithmetic. Coordinates on the detector
/// boundary clamp to the nearest in-bounds cell; coordinates outside the
/// detector area or frame range are out of domain.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSampler {
    image_size: [f64; 2],
    scan_range: [f64; 2],
    grid_size: [usize; 3],
    step: [f64; 3],
}

impl GridSampler {
    /// Creates a lattice over a `width x height` detector and a `[z0, z1]`
    /// frame range.
    pub fn new(
        image_size: [f64; 2],
        scan_range: [f64; 2],
        grid_size: [usize; 3],
    ) -> ProfLocResult<Self> {
        let [width, height] = image_size;
        let [z0, z1] = scan_range;
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ProfLocError::InvalidInput("detector extents must be positive"));
        }
        if !(z1 > z0) || !z0.is_finite() || !z1.is_finite() {
            return Err(ProfLocError::InvalidInput("frame range must be non-empty"));
        }
        if grid_size.contains(&0) {
            return Err(ProfLocError::InvalidInput("grid counts must be nonzero"));
        }
        let [nx, ny, nz] = grid_size;
        let step = [
            width / nx as f64,
            height / ny as f64,
            (z1 - z0) / nz as f64,
        ];
        Ok(Self {
            image_size,
            scan_range,
            grid_size,
            step,
        })
    }

    /// Returns the detector size in pixels.
    pub fn image_size(&self) -> [f64; 2] {
        self.image_size
    }

    /// Returns the frame range covered by the lattice.
    pub fn scan_range(&self) -> [f64; 2] {
        self.scan_range
    }

    /// Returns the lattice dimensions `[nx, ny, nz]`.
    pub fn grid_size(&self) -> [usize; 3] {
        self.grid_size
    }

    fn bucket(value: f64, step: f64, count: usize) -> usize {
        // Boundary values land exactly on `count`; clamp inward.
        ((value / step) as usize).min(count - 1)
    }
}

impl ImageSampler for GridSampler {
    fn zone_count(&self) -> usize {
        self.grid_size[0] * self.grid_size[1] * self.grid_size[2]
    }

    fn index(&self, coord: Coord) -> ProfLocResult<usize> {
        let [x, y, z] = coord;
        let [width, height] = self.image_size;
        let [z0, z1] = self.scan_range;
        let in_bounds =
            x >= 0.0 && x <= width && y >= 0.0 && y <= height && z >= z0 && z <= z1;
        if !in_bounds {
            return Err(ProfLocError::OutOfDomain { coord });
        }
        let [nx, ny, nz] = self.grid_size;
        let i = Self::bucket(x, self.step[0], nx);
        let j = Self::bucket(y, self.step[1], ny);
        let k = Self::bucket(z - z0, self.step[2], nz);
        Ok((k * ny + j) * nx + i)
    }

    fn zone_center(&self, index: usize) -> ProfLocResult<Coord> {
        let zones = self.zone_count();
        if index >= zones {
            return Err(ProfLocError::IndexOutOfRange { index, zones });
        }
        let [nx, ny, _] = self.grid_size;
        let i = index % nx;
        let j = (index / nx) % ny;
        let k = index / (nx * ny);
        Ok([
            (i as f64 + 0.5) * self.step[0],
            (j as f64 + 0.5) * self.step[1],
            self.scan_range[0] + (k as f64 + 0.5) * self.step[2],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_coordinates_clamp_inward() {
        let s = GridSampler::new([200.0, 200.0], [0.0, 10.0], [2, 2, 1]).unwrap();
        assert_eq!(s.index([200.0, 200.0, 10.0]).unwrap(), 3);
        assert_eq!(s.index([0.0, 0.0, 0.0]).unwrap(), 0);
    }

    #[test]
    fn nan_coordinates_are_out_of_domain() {
        let s = GridSampler::new([200.0, 200.0], [0.0, 10.0], [2, 2, 1]).unwrap();
        let coord = [f64::NAN, 50.0, 0.0];
        assert!(matches!(
            s.index(coord),
            Err(ProfLocError::OutOfDomain { .. })
        ));
    }
}
