//! Command-line interface for the Lanka Medical Center analytics engine.
//!
//! ```bash
//! # Generate two years of synthetic hospital data (reproducible with --seed)
//! lanka-analytics generate --db hospital_data.db --seed 42
//!
//! # Emit one dashboard module's reports as JSON
//! lanka-analytics report revenue --db hospital_data.db
//!
//! # Print the overview KPIs
//! lanka-analytics summary --db hospital_data.db
//! ```

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lanka_analytics::{analytics, charts, config, db, generator, init_tracing};

#[derive(Parser)]
#[command(
    name = "lanka-analytics",
    version,
    about = "Healthcare analytics engine for Lanka Medical Center"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a synthetic dataset and upsert it into the database
    Generate {
        /// SQLite database file
        #[arg(long, default_value = config::DEFAULT_DB_FILE)]
        db: PathBuf,

        /// RNG seed for reproducible runs (entropy-seeded when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Appointment window length in days, ending today
        #[arg(long, default_value_t = config::GENERATION_WINDOW_DAYS)]
        days: i64,
    },
    /// Emit a dashboard module's reports (data + chart directives) as JSON
    Report {
        /// Analysis module to run
        module: Module,

        #[arg(long, default_value = config::DEFAULT_DB_FILE)]
        db: PathBuf,
    },
    /// Print the overview KPIs as JSON
    Summary {
        #[arg(long, default_value = config::DEFAULT_DB_FILE)]
        db: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum Module {
    Overview,
    Services,
    Doctors,
    PatientTrends,
    PatientBehavior,
    Revenue,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate { db, seed, days } => {
            let mut conn = db::open_database(&db)?;
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let today = Local::now().date_naive();

            tracing::info!(days, seed, "Generating dataset");
            let dataset = generator::Dataset::generate(&mut rng, today, days);
            let summary = generator::persist(&mut conn, &dataset)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Report { module, db } => {
            let conn = db::open_database(&db)?;
            let reports = match module {
                Module::Overview => charts::overview_reports(&conn)?,
                Module::Services => charts::service_reports(&conn)?,
                Module::Doctors => charts::doctor_reports(&conn)?,
                Module::PatientTrends => charts::patient_trend_reports(&conn)?,
                Module::PatientBehavior => charts::patient_behavior_reports(&conn)?,
                Module::Revenue => charts::revenue_reports(&conn)?,
            };
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        Command::Summary { db } => {
            let conn = db::open_database(&db)?;
            let kpis = analytics::overview::overview_kpis(&conn)?;
            println!("{}", serde_json::to_string_pretty(&kpis)?);
        }
    }

    Ok(())
}
