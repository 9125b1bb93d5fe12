//! Chaintable demo driver

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use chaintable::infrastructure::logger::initialize_logger;
use chaintable::{HashKind, Table, TableConfig, TableResult};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum HashArg {
    Positional,
    Fnv1a,
    Xxh64,
    Crc32,
}

impl From<HashArg> for HashKind {
    fn from(arg: HashArg) -> Self {
        match arg {
            HashArg::Positional => HashKind::Positional,
            HashArg::Fnv1a => HashKind::Fnv1a,
            HashArg::Xxh64 => HashKind::Xxh64,
            HashArg::Crc32 => HashKind::Crc32,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "chaintable")]
#[command(about = "Insert, look up and delete a few keys in a chained hash table")]
struct Args {
    /// Initial bucket count
    #[arg(short = 'c', long, default_value = "10")]
    capacity: usize,

    /// JSON table configuration; overrides --capacity and --hash
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hash function used to pick buckets
    #[arg(long, value_enum, default_value = "positional")]
    hash: HashArg,
}

fn display(value: Option<&str>) -> &str {
    value.unwrap_or("<not found>")
}

fn run(args: Args) -> TableResult<()> {
    let config = match args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::with_capacity(args.capacity).hash(args.hash.into()),
    };
    let mut table = Table::with_config(config)?;

    table.insert("name", "John")?;
    table.insert("age", "20")?;
    table.insert("location", "New York")?;

    println!("Name: {}", display(table.fetch("name")));
    println!("Age: {}", display(table.fetch("age")));
    println!("Location: {}", display(table.fetch("location")));

    table.remove("name");
    println!("Name: {}", display(table.fetch("name")));

    table.destroy();
    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("chaintable: {}", err);
            ExitCode::FAILURE
        }
    }
}
