use itertools::Itertools;
use multimap::MultiMap;
use tracing::debug;

use crate::{combination::Combination, weight_range::WeightRange};

/// Combinations grouped by side weight in grams, keeping only those whose
/// doubled weight is a whole kilogram inside the target range.
#[derive(Debug)]
pub struct SideWeightBuckets {
    buckets: MultiMap<u64, Combination>,
}

impl SideWeightBuckets {
    #[must_use]
    pub fn group(combinations: Vec<Combination>, range: &WeightRange) -> Self {
        let buckets = combinations
            .into_iter()
            .filter(|combination| {
                let total = combination.side_weight() * 2;
                total % 1000 == 0 && range.contains_grams(total)
            })
            .map(|combination| (combination.side_weight(), combination))
            .collect::<MultiMap<_, _>>();

        debug!(side_weights = buckets.len(), %range, "grouped combinations by side weight");

        SideWeightBuckets { buckets }
    }

    /// Buckets ordered by ascending side weight; each keeps enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &[Combination])> {
        self.buckets
            .iter_all()
            .map(|(side_weight, combinations)| (*side_weight, combinations.as_slice()))
            .sorted_by_key(|(side_weight, _)| *side_weight)
    }

    #[must_use]
    pub fn get(&self, side_weight: u64) -> &[Combination] {
        self.buckets
            .get_vec(&side_weight)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Ordered pairs the pair search would examine, saturating at `u128::MAX`.
    #[must_use]
    pub fn pair_checks(&self) -> u128 {
        self.buckets
            .iter_all()
            .map(|(_, combinations)| {
                let len = combinations.len() as u128;
                len.saturating_mul(len)
            })
            .fold(0, u128::saturating_add)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
