//! Reference profile lookup.
//!
//! `ReferenceLocator` composes the dense profile/mask store with a zone
//! sampler. Shape and zone-count consistency is validated once at
//! construction; every later query assumes it holds. The locator is
//! immutable after construction, so all queries are safe under concurrent
//! readers without locking.

use crate::array::{Volume4, VolumeView};
use crate::corr::masked_pearson;
use crate::sampler::{Coord, ImageSampler};
use crate::trace::trace_event;
use crate::util::{ProfLocError, ProfLocResult};

/// The exact state needed to reconstruct a locator: the profile array, the
/// mask array and the sampler configuration.
///
/// Reconstruction goes through [`ReferenceLocator::try_from`], which
/// re-validates the construction invariants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatorParts<S> {
    /// 4D reference profile array, shape `[zones, depth, height, width]`.
    pub profiles: Volume4<f64>,
    /// Validity mask array of the same shape.
    pub masks: Volume4<bool>,
    /// Zone layout the profiles were accumulated under.
    pub sampler: S,
}

/// Locates reference profiles by zone index or detector coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLocator<S> {
    profiles: Volume4<f64>,
    masks: Volume4<bool>,
    sampler: S,
}

impl<S: ImageSampler> ReferenceLocator<S> {
    /// Builds a locator from a profile array, a mask array of the same shape
    /// and a sampler declaring exactly `profiles.zones()` zones.
    ///
    /// Fails with `ConstructionMismatch` when any of the three disagree; the
    /// locator is never created in an inconsistent state.
    pub fn new(profiles: Volume4<f64>, masks: Volume4<bool>, sampler: S) -> ProfLocResult<Self> {
        let zones = sampler.zone_count();
        if profiles.shape() != masks.shape() || profiles.zones() != zones {
            return Err(ProfLocError::ConstructionMismatch {
                profiles: profiles.shape(),
                masks: masks.shape(),
                zones,
            });
        }
        trace_event!(
            "reference_locator_new",
            zones = zones,
            zone_len = profiles.zone_len()
        );
        Ok(Self {
            profiles,
            masks,
            sampler,
        })
    }

    /// Returns the number of reference zones.
    pub fn size(&self) -> usize {
        self.sampler.zone_count()
    }

    /// Returns the embedded sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Resolves a detector coordinate to its zone index.
    pub fn index(&self, coord: Coord) -> ProfLocResult<usize> {
        self.sampler.index(coord)
    }

    /// Returns every zone a detector coordinate maps to.
    pub fn indices(&self, coord: Coord) -> ProfLocResult<Vec<usize>> {
        self.sampler.indices(coord)
    }

    /// Returns the full 4D profile array.
    pub fn profiles(&self) -> &Volume4<f64> {
        &self.profiles
    }

    /// Returns the full 4D mask array.
    pub fn masks(&self) -> &Volume4<bool> {
        &self.masks
    }

    /// Returns the reference profile for a zone.
    pub fn profile(&self, zone: usize) -> ProfLocResult<VolumeView<'_, f64>> {
        self.profiles.zone(zone)
    }

    /// Returns the reference profile for the zone a coordinate resolves to.
    pub fn profile_at(&self, coord: Coord) -> ProfLocResult<VolumeView<'_, f64>> {
        self.profile(self.index(coord)?)
    }

    /// Returns the validity mask for a zone.
    pub fn mask(&self, zone: usize) -> ProfLocResult<VolumeView<'_, bool>> {
        self.masks.zone(zone)
    }

    /// Returns the validity mask for the zone a coordinate resolves to.
    pub fn mask_at(&self, coord: Coord) -> ProfLocResult<VolumeView<'_, bool>> {
        self.mask(self.index(coord)?)
    }

    /// Returns the canonical center coordinate of a zone.
    pub fn coord(&self, zone: usize) -> ProfLocResult<Coord> {
        self.sampler.zone_center(zone)
    }

    /// Snaps an arbitrary coordinate to the center of the zone it resolves
    /// to.
    pub fn coord_at(&self, coord: Coord) -> ProfLocResult<Coord> {
        self.coord(self.index(coord)?)
    }

    /// Correlates an observed profile/mask pair against the stored reference
    /// for a zone.
    ///
    /// The supplied shapes must equal the stored zone shape; see
    /// [`masked_pearson`] for the scoring and degeneracy rules.
    pub fn correlation(
        &self,
        profile: VolumeView<'_, f64>,
        mask: VolumeView<'_, bool>,
        zone: usize,
    ) -> ProfLocResult<f64> {
        let expected = self.profiles.zone_shape();
        for got in [profile.shape(), mask.shape()] {
            if got != expected {
                return Err(ProfLocError::ShapeMismatch { expected, got });
            }
        }
        trace_event!("reference_locator_correlation", zone = zone);
        masked_pearson(profile, mask, self.profile(zone)?, self.mask(zone)?)
    }

    /// Correlates an observed profile/mask pair against the reference for
    /// the zone a coordinate resolves to.
    pub fn correlation_at(
        &self,
        profile: VolumeView<'_, f64>,
        mask: VolumeView<'_, bool>,
        coord: Coord,
    ) -> ProfLocResult<f64> {
        self.correlation(profile, mask, self.index(coord)?)
    }

    /// Exports the state triple, cloning the arrays and sampler.
    pub fn to_parts(&self) -> LocatorParts<S>
    where
        S: Clone,
    {
        LocatorParts {
            profiles: self.profiles.clone(),
            masks: self.masks.clone(),
            sampler: self.sampler.clone(),
        }
    }

    /// Consumes the locator, returning the state triple.
    pub fn into_parts(self) -> LocatorParts<S> {
        LocatorParts {
            profiles: self.profiles,
            masks: self.masks,
            sampler: self.sampler,
        }
    }
}

impl<S: ImageSampler> TryFrom<LocatorParts<S>> for ReferenceLocator<S> {
    type Error = ProfLocError;

    fn try_from(parts: LocatorParts<S>) -> ProfLocResult<Self> {
        Self::new(parts.profiles, parts.masks, parts.sampler)
    }
}

impl<S: ImageSampler> From<ReferenceLocator<S>> for LocatorParts<S> {
    fn from(locator: ReferenceLocator<S>) -> Self {
        locator.into_parts()
    }
}
