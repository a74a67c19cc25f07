//! Profloc serves pre-computed reference intensity profiles for
//! diffraction-spot integration.
//!
//! A detector frame is partitioned into zones by a pluggable sampler; each
//! zone owns a canonical 3D reference profile and a parallel validity mask,
//! stored contiguously in a 4D array. [`ReferenceLocator`] retrieves the
//! profile/mask pair for a zone index or detector coordinate and scores how
//! well an observed profile correlates with a stored reference. Everything
//! is immutable after construction; optional serde support (the `serde`
//! feature) covers the save-state/reconstruct contract.

pub mod array;
pub mod corr;
pub mod locator;
pub mod sampler;
pub mod util;

pub(crate) mod trace;

pub use array::{Volume4, VolumeView};
pub use corr::masked_pearson;
pub use locator::{LocatorParts, ReferenceLocator};
pub use sampler::{Coord, GridSampler, ImageSampler, XdsCircleSampler};
pub use util::{ProfLocError, ProfLocResult};
