//! repool CLI: ladder inspection and pool self-checks.

use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use repool_arrays::registry::{self, ObjSlot};
use repool_arrays::{ArrayRecycler, StatsSnapshot};
use repool_core::error::{Error, Result};
use repool_core::ladder::{self, CLASS_COUNT, LARGEST_CLASS, SMALLEST_CLASS};
use repool_core::PoolConfig;

#[derive(Parser)]
#[command(name = "repool")]
#[command(version)]
#[command(about = "Size-classed recycling array pools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the size-class ladder, optionally mapping given capacities
    Ladder {
        /// Capacities to map onto the ladder
        #[arg(short, long)]
        capacity: Vec<usize>,
    },

    /// Exercise every element kind and verify pool behavior
    Selfcheck {
        /// Arrays preallocated per class before the check (overrides env)
        #[arg(long)]
        warmup: Option<usize>,

        /// Emit per-kind counters as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => print_version(),
        Some(Commands::Ladder { capacity }) => print_ladder(&capacity),
        Some(Commands::Selfcheck { warmup, json }) => {
            if let Err(e) = run_selfcheck(warmup, json) {
                eprintln!("Self-check failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_version() {
    println!("repool {}", env!("CARGO_PKG_VERSION"));
    println!(
        "{} size classes, {}..={} elements; larger requests bypass the pools",
        CLASS_COUNT, SMALLEST_CLASS, LARGEST_CLASS
    );
}

fn print_ladder(capacities: &[usize]) {
    println!("Size-Class Ladder");
    println!("=================");
    for class in ladder::classes() {
        println!("  class {:>2}: {:>6} elements", class.index, class.capacity);
    }
    if !capacities.is_empty() {
        println!();
        println!("Capacity Mapping:");
        for &capacity in capacities {
            match ladder::class_for_capacity(capacity) {
                Some(index) => println!(
                    "  {:>8} -> class {} ({} elements)",
                    capacity,
                    index,
                    ladder::LADDER[index]
                ),
                None => println!("  {:>8} -> bypass (exact, unpooled)", capacity),
            }
        }
    }
}

fn run_selfcheck(warmup: Option<usize>, json: bool) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut config = PoolConfig::from_env();
    if let Some(per_class) = warmup {
        config.warmup_per_class = per_class;
    }

    let mut results = BTreeMap::new();
    results.insert("bool", check_kind::<bool>("bool", &config)?);
    results.insert("u8", check_kind::<u8>("u8", &config)?);
    results.insert("char", check_kind::<char>("char", &config)?);
    results.insert("i16", check_kind::<i16>("i16", &config)?);
    results.insert("i32", check_kind::<i32>("i32", &config)?);
    results.insert("i64", check_kind::<i64>("i64", &config)?);
    results.insert("f32", check_kind::<f32>("f32", &config)?);
    results.insert("f64", check_kind::<f64>("f64", &config)?);
    results.insert("object", check_kind::<ObjSlot>("object", &config)?);

    check_registry()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for (kind, stats) in &results {
            println!(
                "  {:>6}: created {}, reused {}, recycled {}, dropped {}, bypassed {}",
                kind, stats.created, stats.reused, stats.recycled, stats.dropped, stats.bypassed
            );
        }
        println!("✓ Self-check passed");
    }

    Ok(())
}

/// Runs one element kind through the core allocate/recycle contract.
fn check_kind<T: Default>(name: &'static str, config: &PoolConfig) -> Result<StatsSnapshot> {
    let recycler = ArrayRecycler::<T>::new();
    recycler.warm_up(config.warmup_per_class, config.warmup_ceiling)?;

    let buf = recycler.allocate(1000)?;
    ensure(name, "allocate(1000) rounds to 1024", buf.backing_len() == 1024)?;
    let ptr = buf.as_ptr();
    recycler.recycle(buf);

    let again = recycler.allocate(1024)?;
    ensure(name, "recycled storage is reused", again.as_ptr() == ptr)?;
    recycler.recycle(again);

    let before = recycler.bag_sizes();
    let big = recycler.allocate(LARGEST_CLASS + 1)?;
    ensure(
        name,
        "bypass length is exact",
        big.backing_len() == LARGEST_CLASS + 1,
    )?;
    recycler.recycle(big);
    ensure(
        name,
        "bypass recycle leaves pools untouched",
        recycler.bag_sizes() == before,
    )?;

    Ok(recycler.stats())
}

/// A quick round trip through this thread's registry entries.
fn check_registry() -> Result<()> {
    let buf = registry::INTS.with(|r| r.allocate(100))?;
    ensure("registry", "allocate(100) rounds to 128", buf.backing_len() == 128)?;
    registry::INTS.with(|r| r.recycle(buf));

    let objs = registry::OBJECTS.with(|r| r.allocate(8))?;
    ensure("registry", "object slots start empty", objs.iter().all(|s| s.is_none()))?;
    registry::OBJECTS.with(|r| r.recycle(objs));
    Ok(())
}

fn ensure(kind: &str, what: &str, ok: bool) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::Invariant(format!("{kind}: {what}")))
    }
}
