//! Dense zone-indexed volume storage.
//!
//! `Volume4` owns a flat buffer reinterpreted as a 4D array of shape
//! `[zones, depth, height, width]`; each zone's `depth * height * width`
//! block is contiguous, so slicing by zone index is a zero-copy
//! [`VolumeView`] into the same buffer. Views borrow from the owner and
//! cannot outlive it.

use crate::util::{ProfLocError, ProfLocResult};

/// Owned 4D array: one 3D volume per zone, stored contiguously.
///
/// Deserialization goes through [`Volume4::from_vec`], so a payload whose
/// buffer disagrees with its declared shape is rejected instead of producing
/// an array that fails on first use.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawVolume4<T>"))]
pub struct Volume4<T> {
    data: Vec<T>,
    shape: [usize; 4],
}

/// Unvalidated wire form of [`Volume4`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVolume4<T> {
    data: Vec<T>,
    shape: [usize; 4],
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawVolume4<T>> for Volume4<T> {
    type Error = ProfLocError;

    fn try_from(raw: RawVolume4<T>) -> ProfLocResult<Self> {
        Self::from_vec(raw.data, raw.shape)
    }
}

impl<T> Volume4<T> {
    /// Creates a volume from a flat buffer in zone-major, then
    /// depth/height/width order.
    pub fn from_vec(data: Vec<T>, shape: [usize; 4]) -> ProfLocResult<Self> {
        let needed = checked_len(&shape)?;
        if data.len() != needed {
            return Err(ProfLocError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Returns the full `[zones, depth, height, width]` shape.
    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    /// Returns the number of zones (first axis extent).
    pub fn zones(&self) -> usize {
        self.shape[0]
    }

    /// Returns the per-zone `[depth, height, width]` shape.
    pub fn zone_shape(&self) -> [usize; 3] {
        [self.shape[1], self.shape[2], self.shape[3]]
    }

    /// Returns the number of voxels in one zone block.
    pub fn zone_len(&self) -> usize {
        self.shape[1] * self.shape[2] * self.shape[3]
    }

    /// Returns the backing slice in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a zero-copy 3D view of zone `z`.
    pub fn zone(&self, z: usize) -> ProfLocResult<VolumeView<'_, T>> {
        if z >= self.shape[0] {
            return Err(ProfLocError::IndexOutOfRange {
                index: z,
                zones: self.shape[0],
            });
        }
        let len = self.zone_len();
        let start = z * len;
        Ok(VolumeView {
            data: &self.data[start..start + len],
            shape: self.zone_shape(),
        })
    }
}

/// Borrowed contiguous 3D view with shape `[depth, height, width]`.
#[derive(Copy, Clone, Debug)]
pub struct VolumeView<'a, T> {
    data: &'a [T],
    shape: [usize; 3],
}

impl<'a, T> VolumeView<'a, T> {
    /// Creates a view over a contiguous buffer.
    pub fn from_slice(data: &'a [T], shape: [usize; 3]) -> ProfLocResult<Self> {
        let needed = checked_len(&shape)?;
        if data.len() != needed {
            return Err(ProfLocError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Returns the `[depth, height, width]` shape.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Returns the total number of voxels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the view holds no voxels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the backing slice in depth-major order.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the voxel at `(d, h, w)` if it is within bounds.
    pub fn get(&self, d: usize, h: usize, w: usize) -> Option<&'a T> {
        let [nd, nh, nw] = self.shape;
        if d >= nd || h >= nh || w >= nw {
            return None;
        }
        self.data.get((d * nh + h) * nw + w)
    }
}

fn checked_len(shape: &[usize]) -> ProfLocResult<usize> {
    let mut needed = 1usize;
    for &extent in shape {
        if extent == 0 {
            return Err(ProfLocError::InvalidInput("zero-length array axis"));
        }
        needed = needed
            .checked_mul(extent)
            .ok_or(ProfLocError::InvalidInput("array shape overflows usize"))?;
    }
    Ok(needed)
}
