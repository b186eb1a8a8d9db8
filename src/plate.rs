use std::{fmt::Display, str::FromStr};

/// Smallest plate increment, in grams.
pub const STEP: u32 = 250;

const TOLERANCE_KG: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Plate {
    weight: u32,
    quantity: u32,
}

impl Plate {
    /// `weight` is in grams.
    #[must_use]
    pub fn new(weight: u32, quantity: u32) -> Self {
        Plate { weight, quantity }
    }

    /// Snaps `kg` to the nearest [`STEP`], returning `None` when it is further
    /// than the tolerance away from one or is not a positive finite weight.
    #[must_use]
    pub fn from_kg(kg: f64, quantity: u32) -> Option<Self> {
        if !kg.is_finite() || kg <= 0.0 {
            return None;
        }

        let step_kg = f64::from(STEP) / 1000.0;
        let steps = (kg / step_kg).round();
        if (steps * step_kg - kg).abs() > TOLERANCE_KG
            || steps < 1.0
            || steps > f64::from(u32::MAX / STEP)
        {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = steps as u32;
        Some(Plate::new(steps * STEP, quantity))
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Plates of this weight usable on one side when both sides are loaded.
    #[must_use]
    pub fn per_side_cap(&self) -> u32 {
        self.quantity / 2
    }
}

pub(crate) fn kg(grams: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let grams = grams as f64;
    grams / 1000.0
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kg × {}", kg(u64::from(self.weight)), self.quantity)
    }
}

impl FromStr for Plate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weight, quantity) = s
            .split_once(':')
            .ok_or_else(|| "Expected WEIGHT:QUANTITY, e.g. 20:2".to_string())?;
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| "Invalid weight".to_string())?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| "Quantities must be whole numbers ≥ 0.".to_string())?;
        Plate::from_kg(weight, quantity)
            .ok_or_else(|| format!("Plate weights must be positive multiples of {} kg.", kg(u64::from(STEP))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_kg_snaps_within_tolerance() {
        assert_eq!(Plate::from_kg(5.000_000_15, 2), Some(Plate::new(5000, 2)));
        assert_eq!(Plate::from_kg(1.25, 4), Some(Plate::new(1250, 4)));
        assert_eq!(Plate::from_kg(5.005, 2), None);
        assert_eq!(Plate::from_kg(0.0, 2), None);
        assert_eq!(Plate::from_kg(-2.5, 2), None);
        assert_eq!(Plate::from_kg(f64::NAN, 2), None);
    }

    #[test]
    fn per_side_cap_halves_quantity() {
        assert_eq!(Plate::new(10_000, 5).per_side_cap(), 2);
        assert_eq!(Plate::new(10_000, 1).per_side_cap(), 0);
    }

    #[test]
    fn parses_weight_and_quantity() {
        assert_eq!("20:2".parse::<Plate>(), Ok(Plate::new(20_000, 2)));
        assert_eq!(" 0.25 : 8".parse::<Plate>(), Ok(Plate::new(250, 8)));
        assert!("20".parse::<Plate>().is_err());
        assert!("20:x".parse::<Plate>().is_err());
        assert!("0.1:2".parse::<Plate>().is_err());
    }

    #[test]
    fn displays_in_kg() {
        assert_eq!(Plate::new(1250, 4).to_string(), "1.25kg × 4");
        assert_eq!(Plate::new(20_000, 2).to_string(), "20kg × 2");
    }
}
