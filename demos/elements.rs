//! Inserts chemical elements into a table and removes them again, printing
//! each snapshot with its load factor.

use clap::Parser;
use cow_hash_table::{Error, SumHash, Table};

const ELEMENTS: [&str; 20] = [
    "hydrogen",
    "helium",
    "lithium",
    "beryllium",
    "boron",
    "carbon",
    "nitrogen",
    "oxygen",
    "fluorine",
    "neon",
    "sodium",
    "magnesium",
    "aluminium",
    "silicon",
    "phosphorus",
    "sulfur",
    "chlorine",
    "argon",
    "potassium",
    "calcium",
];

#[derive(Parser, Debug)]
struct Args {
    /// Initial bucket count.
    #[arg(short = 'b', long = "buckets", default_value_t = 1)]
    buckets: usize,
    /// Key to look up after insertion and after removal.
    #[arg(short = 'k', long = "key", default_value = "oxygen")]
    key: String,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let mut table = Table::new(args.buckets, SumHash)?;

    println!("{table:?}");

    for element in ELEMENTS {
        table = table.try_insert(element.to_string(), element.len())?;
        println!("{table:?}");
    }

    println!("{:?}", table.get(&args.key));

    let keys = table.keys().cloned().collect::<Vec<_>>();

    for key in &keys {
        table = table.try_remove(key)?;
        println!("{table:?}");
    }

    println!("{:?}", table.get(&args.key));

    let mut snapshots = vec![Table::new(1, SumHash)?];

    for (name, value) in [("tom", 1), ("dick", 2), ("harry", 3), ("harry", 4)] {
        let table = snapshots[snapshots.len() - 1].try_insert(name, value)?;
        snapshots.push(table);
    }

    for name in ["harry", "dick", "tom"] {
        let table = snapshots[snapshots.len() - 1].try_remove(&name)?;
        snapshots.push(table);
    }

    for snapshot in &snapshots {
        println!("{snapshot:?}");
    }

    Ok(())
}
