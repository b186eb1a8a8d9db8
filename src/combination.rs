use std::cmp::Ordering;

use itertools::Itertools;

use crate::plate::Plate;

/// Per-side plate counts, aligned with the inventory's heaviest-first order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Combination {
    counts: Vec<u32>,
    side_weight: u64,
    plates_per_side: u32,
}

impl Combination {
    #[must_use]
    pub fn new(counts: Vec<u32>, plates: &[Plate]) -> Self {
        debug_assert_eq!(counts.len(), plates.len());

        let side_weight = counts
            .iter()
            .zip(plates)
            .map(|(&count, plate)| u64::from(count) * u64::from(plate.weight()))
            .sum();
        let plates_per_side = counts.iter().sum();

        Combination {
            counts,
            side_weight,
            plates_per_side,
        }
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Weight on one side, in grams.
    #[must_use]
    pub fn side_weight(&self) -> u64 {
        self.side_weight
    }

    #[must_use]
    pub fn plates_per_side(&self) -> u32 {
        self.plates_per_side
    }

    /// Rank of a single loadout using this combination on both sides.
    #[must_use]
    pub fn rank(&self) -> Rank {
        Rank {
            plates: self.plates_per_side * 2,
            counts: self.counts.clone(),
        }
    }

    /// Rank of two independent loadouts, each using its combination on both sides.
    #[must_use]
    pub fn pair_rank(&self, other: &Combination) -> Rank {
        Rank {
            plates: 2 * (self.plates_per_side + other.plates_per_side),
            counts: self
                .counts
                .iter()
                .zip_eq(&other.counts)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    /// Whether two loadouts of `self` and `other` fit in the inventory together.
    #[must_use]
    pub fn fits_with(&self, other: &Combination, plates: &[Plate]) -> bool {
        self.counts
            .iter()
            .zip_eq(&other.counts)
            .zip_eq(plates)
            .all(|((a, b), plate)| 2 * (u64::from(*a) + u64::from(*b)) <= u64::from(plate.quantity()))
    }
}

/// Ordering key where greater is better: fewer plates first, then more of the
/// heavier plates, compared index by index from the heaviest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rank {
    plates: u32,
    counts: Vec<u32>,
}

impl Rank {
    #[must_use]
    pub fn plates(&self) -> u32 {
        self.plates
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .plates
            .cmp(&self.plates)
            .then_with(|| self.counts.cmp(&other.counts))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the first of equally ranked items so ties resolve in enumeration order.
pub(crate) fn best_by_rank<T, I, F>(items: I, rank: F) -> Option<(T, Rank)>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Rank,
{
    items
        .into_iter()
        .map(|item| {
            let rank = rank(&item);
            (item, rank)
        })
        .reduce(|best, current| if current.1 > best.1 { current } else { best })
}
