use itertools::Itertools;
use serde::Serialize;

use crate::plate::{Plate, kg};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleRow {
    pub total_kg: u32,
    pub counts: Vec<u32>,
    pub plates_used: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRow {
    pub total_kg: u32,
    pub counts_a: Vec<u32>,
    pub counts_b: Vec<u32>,
    pub plates_used: u32,
}

/// Result of one generation run. Row counts line up with `weights_kg`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tables {
    pub weights_kg: Vec<f64>,
    pub singles: Vec<SingleRow>,
    pub pairs: Vec<PairRow>,
}

impl Tables {
    #[must_use]
    pub fn new(plates: &[Plate], singles: Vec<SingleRow>, pairs: Vec<PairRow>) -> Self {
        Tables {
            weights_kg: plates.iter().map(|p| kg(u64::from(p.weight()))).collect(),
            singles,
            pairs,
        }
    }

    #[must_use]
    pub fn stack(&self, counts: &[u32]) -> String {
        format_stack(counts, &self.weights_kg)
    }
}

/// Human-readable plates for one side, e.g. `2×10kg, 1.25kg`.
#[must_use]
pub fn format_stack(counts: &[u32], weights_kg: &[f64]) -> String {
    let parts = counts
        .iter()
        .zip(weights_kg)
        .filter(|(count, _)| **count > 0)
        .map(|(count, weight)| match *count {
            1 => format!("{weight}kg"),
            _ => format!("{count}×{weight}kg"),
        })
        .join(", ");

    if parts.is_empty() { "—".to_string() } else { parts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_non_zero_counts() {
        let weights = [20.0, 10.0, 1.25];

        assert_eq!(format_stack(&[0, 2, 1], &weights), "2×10kg, 1.25kg");
        assert_eq!(format_stack(&[1, 0, 0], &weights), "20kg");
        assert_eq!(format_stack(&[0, 0, 0], &weights), "—");
    }

    #[test]
    fn serializes_with_boundary_names() {
        let tables = Tables::new(
            &[Plate::new(10_000, 4)],
            vec![SingleRow {
                total_kg: 20,
                counts: vec![1],
                plates_used: 2,
            }],
            vec![PairRow {
                total_kg: 20,
                counts_a: vec![1],
                counts_b: vec![1],
                plates_used: 4,
            }],
        );

        let json = serde_json::to_value(&tables).unwrap();

        assert_eq!(json["weightsKg"][0], 10.0);
        assert_eq!(json["singles"][0]["totalKg"], 20);
        assert_eq!(json["singles"][0]["platesUsed"], 2);
        assert_eq!(json["pairs"][0]["countsA"][0], 1);
        assert_eq!(json["pairs"][0]["countsB"][0], 1);
    }
}
