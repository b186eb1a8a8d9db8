use std::fmt::Display;

use crate::loadout_error::{LoadoutError, LoadoutResult};

/// Inclusive range of total weights, in whole kilograms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightRange {
    min: u32,
    max: u32,
}

impl WeightRange {
    ///
    /// # Errors
    /// If `min` is greater than `max`.
    ///
    pub fn new(min: u32, max: u32) -> LoadoutResult<Self> {
        if min > max {
            return Err(LoadoutError::InvalidRange { min, max });
        }
        Ok(WeightRange { min, max })
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether a total given in grams falls inside the range.
    #[must_use]
    pub fn contains_grams(&self, total: u64) -> bool {
        (u64::from(self.min) * 1000..=u64::from(self.max) * 1000).contains(&total)
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        WeightRange { min: 10, max: 24 }
    }
}

impl Display for WeightRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}kg", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            WeightRange::new(24, 10),
            Err(LoadoutError::InvalidRange { min: 24, max: 10 })
        ));
        assert!(WeightRange::new(12, 12).is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = WeightRange::new(10, 24).unwrap();

        assert!(range.contains_grams(10_000));
        assert!(range.contains_grams(24_000));
        assert!(!range.contains_grams(9_999));
        assert!(!range.contains_grams(24_001));
    }
}
