use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use donebell::{
    generator::{Generator, GeneratorConfig},
    inventory::Inventory,
    plate::Plate,
    table::Tables,
    weight_range::WeightRange,
};
use tracing::{Level, info};

/// Lists every symmetric loadout your plates can make, and the best pair of
/// independent dumbbells for each total.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Plate as WEIGHT:QUANTITY in kg, e.g. 2.5:4. Repeatable.
    #[arg(short, long, value_parser = clap::value_parser!(Plate))]
    plate: Vec<Plate>,

    /// JSON file of [{"weightKg": .., "quantity": ..}] rows.
    #[arg(short, long, conflicts_with = "plate")]
    inventory: Option<PathBuf>,

    /// Lightest total to list, in kg.
    #[arg(long, default_value_t = WeightRange::default().min())]
    min: u32,

    /// Heaviest total to list, in kg.
    #[arg(long, default_value_t = WeightRange::default().max())]
    max: u32,

    #[arg(long, default_value_t = GeneratorConfig::default().max_combinations)]
    max_combinations: u128,

    #[arg(long, default_value_t = GeneratorConfig::default().max_pair_checks)]
    max_pair_checks: u128,

    /// Print the tables as JSON.
    #[arg(long)]
    json: bool,

    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let inventory = match (&args.inventory, args.plate.is_empty()) {
        (Some(path), _) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Inventory::from_json(BufReader::new(file))
                .with_context(|| format!("reading inventory from {}", path.display()))?
        }
        (None, false) => Inventory::from_plates(args.plate.clone())?,
        (None, true) => Inventory::default(),
    };
    let range = WeightRange::new(args.min, args.max)?;

    info!(plates = inventory.plates().len(), %range, "generating");

    let generator = Generator::new(GeneratorConfig {
        max_combinations: args.max_combinations,
        max_pair_checks: args.max_pair_checks,
    });
    let tables = generator.generate(inventory.plates(), &range)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
    } else {
        print_tables(&inventory, &tables);
    }

    Ok(())
}

fn print_tables(inventory: &Inventory, tables: &Tables) {
    println!("Inventory:");
    for plate in inventory.plates() {
        println!("  {plate}");
    }

    println!("\nSingle loadouts (per side):");
    if tables.singles.is_empty() {
        println!("  No achievable weights in range.");
    }
    for row in &tables.singles {
        println!(
            "  {:>4}kg  {:<32} {} plates",
            row.total_kg,
            tables.stack(&row.counts),
            row.plates_used
        );
    }

    println!("\nPairs (per side, A | B):");
    if tables.pairs.is_empty() {
        println!("  No valid pairs in range.");
    }
    for row in &tables.pairs {
        println!(
            "  {:>4}kg  {:<32} | {:<32} {} plates",
            row.total_kg,
            tables.stack(&row.counts_a),
            tables.stack(&row.counts_b),
            row.plates_used
        );
    }
}
