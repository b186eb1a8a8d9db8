use tracing::debug;

use crate::{
    enumerator::enumerate,
    loadout_error::{Bound, LoadoutError, LoadoutResult},
    plate::Plate,
    selector::{select_pairs, select_singles},
    side_weight_buckets::SideWeightBuckets,
    table::Tables,
    weight_range::WeightRange,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Largest enumeration a single run may attempt.
    pub max_combinations: u128,
    /// Most ordered pairs the pair search may examine across all side weights.
    pub max_pair_checks: u128,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_combinations: 5_000_000,
            max_pair_checks: 50_000_000,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    /// Computes both loadout tables for `plates`, which must be validated and
    /// ordered heaviest first. Empty tables are a normal outcome.
    ///
    /// # Errors
    /// If the inventory has more combinations, or the range more pairs to
    /// check, than the configured maximums. Nothing is selected in that case.
    ///
    pub fn generate(&self, plates: &[Plate], range: &WeightRange) -> LoadoutResult<Tables> {
        let combinations = enumerate(plates, self.config.max_combinations)?;
        debug!(combinations = combinations.len(), "enumerated");

        let buckets = SideWeightBuckets::group(combinations, range);
        let pair_checks = buckets.pair_checks();
        if pair_checks > self.config.max_pair_checks {
            return Err(LoadoutError::ResourceBoundExceeded {
                bound: Bound::PairChecks,
                size: pair_checks,
                limit: self.config.max_pair_checks,
            });
        }
        debug!(pair_checks, "within pair search bound");

        let singles = select_singles(&buckets);
        let pairs = select_pairs(&buckets, plates);

        Ok(Tables::new(plates, singles, pairs))
    }
}
