//! One rotator per page slot.

use crate::ads::{AdPosition, Advertisement, StoreWeight, WeightedAdRotator};
use crate::error::CommerceError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Rotators for every slot that has ads booked.
#[derive(Debug, Clone, Default)]
pub struct AdSlots {
    rotators: BTreeMap<AdPosition, WeightedAdRotator<StdRng>>,
}

impl AdSlots {
    /// Split ads by position, shuffling each slot from OS entropy.
    pub fn new(ads: Vec<Advertisement>, weights: &[StoreWeight]) -> Self {
        Self::with_rng(ads, weights, &mut StdRng::from_entropy())
    }

    /// Split ads by position, seeding each slot's shuffle from `rng`.
    pub fn with_rng<R: Rng>(ads: Vec<Advertisement>, weights: &[StoreWeight], rng: &mut R) -> Self {
        let mut by_position: BTreeMap<AdPosition, Vec<Advertisement>> = BTreeMap::new();
        for ad in ads {
            by_position.entry(ad.position).or_default().push(ad);
        }

        let rotators = by_position
            .into_iter()
            .map(|(position, ads)| {
                let seed: u64 = rng.gen();
                (position, WeightedAdRotator::with_seed(ads, weights, seed))
            })
            .collect();
        Self { rotators }
    }

    /// Next ad for a slot. Slots with nothing booked report an empty pool.
    pub fn next_for(&mut self, position: AdPosition) -> Result<Advertisement, CommerceError> {
        self.rotators
            .get_mut(&position)
            .ok_or(CommerceError::EmptyRotationPool)?
            .next_ad()
    }

    /// Slots that have at least one ad.
    pub fn positions(&self) -> impl Iterator<Item = AdPosition> + '_ {
        self.rotators.keys().copied()
    }

    /// Number of ads booked for a slot.
    pub fn len_for(&self, position: AdPosition) -> usize {
        self.rotators.get(&position).map_or(0, |r| r.len())
    }
}
