use std::io::Read;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    loadout_error::{LoadoutError, LoadoutResult},
    plate::{Plate, STEP, kg},
};

/// An unvalidated inventory row, as stored or typed by a user.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateRow {
    pub weight_kg: f64,
    pub quantity: f64,
}

/// Validated plates, heaviest first, none with a zero quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    plates: Vec<Plate>,
}

impl Inventory {
    ///
    /// # Errors
    /// If a weight is not a positive multiple of the step, a quantity is not a
    /// whole number ≥ 0, or no plate is left once zero quantities are dropped.
    ///
    pub fn validate(rows: &[PlateRow]) -> LoadoutResult<Self> {
        let plates = rows
            .iter()
            .map(|row| {
                if !row.weight_kg.is_finite() || row.weight_kg <= 0.0 {
                    return Err(LoadoutError::InvalidInventory("Plate weights must be positive.".to_string()));
                }
                if !row.quantity.is_finite()
                    || row.quantity.fract() != 0.0
                    || !(0.0..=f64::from(u32::MAX)).contains(&row.quantity)
                {
                    return Err(LoadoutError::InvalidInventory(
                        "Quantities must be whole numbers ≥ 0.".to_string(),
                    ));
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let quantity = row.quantity as u32;
                Plate::from_kg(row.weight_kg, quantity).ok_or_else(|| {
                    LoadoutError::InvalidInventory(format!(
                        "Plate weights must be multiples of {} kg.",
                        kg(u64::from(STEP))
                    ))
                })
            })
            .collect::<LoadoutResult<Vec<_>>>()?;

        Self::from_plates(plates)
    }

    ///
    /// # Errors
    /// If no plate has a non-zero quantity.
    ///
    pub fn from_plates(plates: Vec<Plate>) -> LoadoutResult<Self> {
        let plates = plates
            .into_iter()
            .filter(|plate| plate.quantity() > 0)
            .sorted_by(|a, b| b.weight().cmp(&a.weight()))
            .collect::<Vec<_>>();

        if plates.is_empty() {
            return Err(LoadoutError::InvalidInventory("Add at least one plate.".to_string()));
        }

        Ok(Inventory { plates })
    }

    ///
    /// # Errors
    /// If the reader fails, the JSON is not an array of rows, or the rows are invalid.
    ///
    pub fn from_json<R: Read>(reader: R) -> LoadoutResult<Self> {
        let rows: Vec<PlateRow> = serde_json::from_reader(reader)?;
        Self::validate(&rows)
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory {
            plates: vec![Plate::new(1000, 2)],
        }
    }
}
