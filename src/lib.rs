#![warn(clippy::pedantic)]

pub mod combination;
pub mod enumerator;
pub mod generator;
pub mod inventory;
pub mod loadout_error;
pub mod plate;
pub mod selector;
pub mod side_weight_buckets;
pub mod table;
pub mod weight_range;
