use itertools::Itertools;
use tracing::debug;

use crate::{
    combination::Combination,
    loadout_error::{Bound, LoadoutError, LoadoutResult},
    plate::Plate,
};

/// Number of combinations [`enumerate`] would produce, saturating at `u128::MAX`.
#[must_use]
pub fn product_size(plates: &[Plate]) -> u128 {
    plates
        .iter()
        .map(|plate| u128::from(plate.per_side_cap()) + 1)
        .fold(1, u128::saturating_mul)
}

/// Every per-side count vector with each count between zero and the plate's cap.
///
/// The first plate varies slowest. Growth is exponential in the number of
/// distinct plates, so the product is checked against `limit` up front.
///
/// # Errors
/// If the product of `cap + 1` over all plates exceeds `limit`.
///
pub fn enumerate(plates: &[Plate], limit: u128) -> LoadoutResult<Vec<Combination>> {
    let combinations = product_size(plates);
    if combinations > limit {
        return Err(LoadoutError::ResourceBoundExceeded {
            bound: Bound::Combinations,
            size: combinations,
            limit,
        });
    }
    debug!(plates = plates.len(), combinations, "enumerating per-side combinations");

    if plates.is_empty() {
        return Ok(vec![Combination::new(vec![], plates)]);
    }

    Ok(plates
        .iter()
        .map(|plate| 0..=plate.per_side_cap())
        .multi_cartesian_product()
        .map(|counts| Combination::new(counts, plates))
        .collect())
}
