//! Weighted ad rotation.
//!
//! Smoothed weighted round robin: every entry carries an accumulator that
//! starts at its store weight. Each pick takes the entry with the highest
//! accumulator, resets it to its base weight and raises every other entry
//! by that entry's own base weight. Heavier stores come up proportionally
//! more often, and a light store's accumulator keeps climbing until it wins,
//! so nobody starves.

use crate::ads::{Advertisement, StoreWeight};
use crate::error::CommerceError;
use crate::ids::StoreId;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Weight for stores missing from the weight table.
pub const DEFAULT_STORE_WEIGHT: u64 = 1;

#[derive(Debug, Clone)]
struct RotatorEntry {
    ad: Advertisement,
    base_weight: u64,
    current_weight: u64,
}

/// Picks the next ad to show in a rotating slot.
///
/// `next_ad` takes `&mut self`; share a rotator across threads only behind
/// a lock.
#[derive(Debug, Clone)]
pub struct WeightedAdRotator<R = StdRng> {
    entries: Vec<RotatorEntry>,
    weights: HashMap<StoreId, u64>,
    rng: R,
}

impl WeightedAdRotator<StdRng> {
    /// Create a rotator shuffled from OS entropy.
    pub fn new(ads: Vec<Advertisement>, weights: &[StoreWeight]) -> Self {
        Self::with_rng(ads, weights, StdRng::from_entropy())
    }

    /// Create a rotator with a fixed shuffle seed.
    pub fn with_seed(ads: Vec<Advertisement>, weights: &[StoreWeight], seed: u64) -> Self {
        Self::with_rng(ads, weights, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WeightedAdRotator<R> {
    /// Create a rotator using the given random source for shuffling.
    ///
    /// An empty ad list is accepted here; the error surfaces from
    /// [`next_ad`](Self::next_ad). When a store appears twice in `weights`
    /// the last entry wins.
    pub fn with_rng(ads: Vec<Advertisement>, weights: &[StoreWeight], rng: R) -> Self {
        let mut table = HashMap::with_capacity(weights.len());
        for w in weights {
            if w.weight <= 0 {
                tracing::warn!(
                    store_id = %w.store_id,
                    weight = w.weight,
                    "non-positive store weight, using default"
                );
            }
            table.insert(w.store_id, w.effective());
        }

        let mut rotator = Self {
            entries: Vec::new(),
            weights: table,
            rng,
        };
        rotator.replace_ads(ads);
        rotator
    }

    /// Swap in a fresh ad list, reshuffling and resetting accumulators.
    pub fn replace_ads(&mut self, mut ads: Vec<Advertisement>) {
        ads.shuffle(&mut self.rng);
        self.entries = ads
            .into_iter()
            .map(|ad| {
                let base_weight = self.store_weight(ad.store_id);
                RotatorEntry {
                    ad,
                    base_weight,
                    current_weight: base_weight,
                }
            })
            .collect();
    }

    /// Pick the ad that is most due.
    ///
    /// Ties on the accumulator go to the heavier store, then to the earlier
    /// entry in shuffled order.
    pub fn next_ad(&mut self) -> Result<Advertisement, CommerceError> {
        let mut winner: Option<usize> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            let better = match winner {
                None => true,
                Some(w) => {
                    let best = &self.entries[w];
                    (entry.current_weight, entry.base_weight)
                        > (best.current_weight, best.base_weight)
                }
            };
            if better {
                winner = Some(i);
            }
        }
        let winner = winner.ok_or(CommerceError::EmptyRotationPool)?;

        for (i, entry) in self.entries.iter_mut().enumerate() {
            if i == winner {
                entry.current_weight = entry.base_weight;
            } else {
                entry.current_weight = entry.current_weight.saturating_add(entry.base_weight);
            }
        }

        let ad = self.entries[winner].ad.clone();
        tracing::debug!(
            ad_id = %ad.id,
            store_id = %ad.store_id,
            position = %ad.position,
            "rotated ad"
        );
        Ok(ad)
    }

    /// Base weight used for a store's ads.
    pub fn store_weight(&self, store_id: StoreId) -> u64 {
        self.weights
            .get(&store_id)
            .copied()
            .unwrap_or(DEFAULT_STORE_WEIGHT)
    }

    /// Number of ads in rotation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ads in current (shuffled) order.
    pub fn ads(&self) -> impl Iterator<Item = &Advertisement> {
        self.entries.iter().map(|e| &e.ad)
    }
}
