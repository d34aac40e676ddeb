//! Stowage Demo Binary
//!
//! Replays a short inventory session against an in-memory registry.

use clap::Parser;
use stowage::{Command, Config, Outcome, Record, Registry, TieBreak};
use tracing_subscriber::{fmt, EnvFilter};

/// Stowage demo session
#[derive(Parser, Debug)]
#[command(name = "stowage-demo")]
#[command(about = "Run a sample session against the in-memory inventory registry")]
#[command(version)]
struct Args {
    /// Ordering among items sharing a description (id | insertion)
    #[arg(short, long, default_value = "id")]
    tie_break: TieBreak,

    /// Log filter, used when RUST_LOG is not set
    #[arg(short, long, default_value = "info,stowage=debug")]
    log: String,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    tracing::info!("Stowage demo v{}", stowage::VERSION);
    tracing::info!("Tie-break: {}", args.tie_break);

    let config = Config::builder().tie_break(args.tie_break).build();
    let registry = Registry::with_config(config);

    let session = [
        Command::Add(Record::new("ITEM001", "LED Light", "Aisle 3, Shelf 1")),
        Command::Add(Record::new("ITEM002", "Fan Motor", "Aisle 2, Shelf 5")),
        Command::Add(Record::new("ITEM001", "LED Light", "Aisle 3, Shelf 1")),
        Command::Find { id: "ITEM002".to_string() },
        Command::Remove { id: "ITEM003".to_string() },
        Command::List,
    ];

    for command in session {
        let label = describe(&command);
        println!("{}", label);

        match registry.execute(command) {
            Ok(outcome) => print_outcome(&outcome),
            // Expected for the duplicate add and the missing removal
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn describe(command: &Command) -> String {
    match command {
        Command::Add(record) => format!("Adding {} - {}...", record.id(), record.description()),
        Command::Find { id } => format!("Retrieving {}...", id),
        Command::Remove { id } => format!("Removing {}...", id),
        Command::List => "Items in Description Order:".to_string(),
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Added => println!("Added"),
        Outcome::Found(record) => {
            println!("Found: {} at {}", record.description(), record.location())
        }
        Outcome::Removed(record) => println!("Removed item with ID {}", record.id()),
        Outcome::Listed(records) => {
            for record in records {
                println!("- {}", record);
            }
        }
    }
}
