use itertools::Itertools;
use tracing::debug;

use crate::{
    combination::best_by_rank,
    plate::Plate,
    side_weight_buckets::SideWeightBuckets,
    table::{PairRow, SingleRow},
};

fn total_kg(side_weight: u64) -> u32 {
    // Bounded by WeightRange::max, which is a u32.
    #[allow(clippy::cast_possible_truncation)]
    let total = (side_weight * 2 / 1000) as u32;
    total
}

/// Best single loadout for every side weight, lightest total first.
#[must_use]
pub fn select_singles(buckets: &SideWeightBuckets) -> Vec<SingleRow> {
    let rows = buckets
        .iter()
        .filter_map(|(side_weight, combinations)| {
            let (best, rank) = best_by_rank(combinations, |combination| combination.rank())?;
            Some(SingleRow {
                total_kg: total_kg(side_weight),
                counts: best.counts().to_vec(),
                plates_used: rank.plates(),
            })
        })
        .collect::<Vec<_>>();

    debug!(rows = rows.len(), "selected single loadouts");
    rows
}

/// Best pair of independent loadouts for every side weight, where both
/// loadouts together stay within the inventory. Side weights without a
/// feasible pair are left out.
#[must_use]
pub fn select_pairs(buckets: &SideWeightBuckets, plates: &[Plate]) -> Vec<PairRow> {
    let rows = buckets
        .iter()
        .filter_map(|(side_weight, combinations)| {
            let feasible = combinations
                .iter()
                .cartesian_product(combinations)
                .filter(|(a, b)| a.fits_with(b, plates));
            let ((a, b), rank) = best_by_rank(feasible, |(a, b)| a.pair_rank(b))?;
            Some(PairRow {
                total_kg: total_kg(side_weight),
                counts_a: a.counts().to_vec(),
                counts_b: b.counts().to_vec(),
                plates_used: rank.plates(),
            })
        })
        .collect::<Vec<_>>();

    debug!(rows = rows.len(), "selected loadout pairs");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{enumerator::enumerate, weight_range::WeightRange};

    fn buckets(plates: &[Plate], min: u32, max: u32) -> SideWeightBuckets {
        SideWeightBuckets::group(
            enumerate(plates, 1_000_000).unwrap(),
            &WeightRange::new(min, max).unwrap(),
        )
    }

    #[test]
    fn singles_prefer_fewer_plates() {
        let plates = [Plate::new(10_000, 2), Plate::new(5000, 4)];
        let singles = select_singles(&buckets(&plates, 20, 20));

        assert_eq!(
            singles,
            vec![SingleRow {
                total_kg: 20,
                counts: vec![1, 0],
                plates_used: 2,
            }]
        );
    }

    #[test]
    fn singles_break_ties_toward_heavier_plates() {
        let plates = [Plate::new(10_000, 2), Plate::new(7500, 4), Plate::new(5000, 2)];
        let singles = select_singles(&buckets(&plates, 30, 30));

        assert_eq!(singles.len(), 1);
        assert_eq!(singles[0].counts, vec![1, 0, 1]);
        assert_eq!(singles[0].plates_used, 4);
    }

    #[test]
    fn singles_are_ordered_by_total() {
        let plates = [Plate::new(10_000, 4), Plate::new(5000, 2)];
        let totals = select_singles(&buckets(&plates, 0, 100))
            .into_iter()
            .map(|row| row.total_kg)
            .collect::<Vec<_>>();

        assert_eq!(totals, vec![0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn pairs_may_reuse_a_combination_when_stock_allows() {
        let plates = [Plate::new(10_000, 4)];
        let pairs = select_pairs(&buckets(&plates, 20, 20), &plates);

        assert_eq!(
            pairs,
            vec![PairRow {
                total_kg: 20,
                counts_a: vec![1],
                counts_b: vec![1],
                plates_used: 4,
            }]
        );
    }

    #[test]
    fn pairs_skip_totals_without_enough_plates() {
        let plates = [Plate::new(10_000, 2)];

        assert!(select_pairs(&buckets(&plates, 20, 20), &plates).is_empty());
    }

    #[test]
    fn pairs_break_ties_toward_heavier_plates() {
        let plates = [Plate::new(10_000, 2), Plate::new(7500, 8), Plate::new(5000, 2)];
        let pairs = select_pairs(&buckets(&plates, 30, 30), &plates);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].counts_a, vec![0, 2, 0]);
        assert_eq!(pairs[0].counts_b, vec![1, 0, 1]);
        assert_eq!(pairs[0].plates_used, 8);
    }

    #[test]
    fn pairs_keep_the_first_of_mirrored_ties() {
        let plates = [Plate::new(10_000, 2), Plate::new(5000, 4)];
        let pairs = select_pairs(&buckets(&plates, 20, 20), &plates);

        assert_eq!(
            pairs,
            vec![PairRow {
                total_kg: 20,
                counts_a: vec![0, 2],
                counts_b: vec![1, 0],
                plates_used: 6,
            }]
        );
    }
}
