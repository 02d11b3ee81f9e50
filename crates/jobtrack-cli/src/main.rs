use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jobtrack_core::impls::FileSlot;
use jobtrack_core::ports::{SystemClock, UlidGenerator};
use jobtrack_core::{JobId, JobStore, NewJob, StatusFilter, TrackerConfig};

mod render;

#[derive(Parser)]
#[command(name = "jobtrack", about = "track job applications from the terminal")]
struct Cli {
    /// Config file (default: <config dir>/jobtrack/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the job data
    #[arg(long, global = true, env = "JOBTRACK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a new application (status starts as Applied)
    Add {
        company: String,
        role: String,
        /// Follow-up date, YYYY-MM-DD
        #[arg(long)]
        follow_up: Option<NaiveDate>,
    },
    /// Show applications
    List {
        /// All, Applied, Interview, Offer or Rejected
        #[arg(long, default_value = "All")]
        status: StatusFilter,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change the status of an application
    SetStatus { id: JobId, status: String },
    /// Remove an application
    Delete { id: JobId },
    /// Applications whose follow-up date is today (or --on)
    Due {
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Totals per status
    Stats,
}

type Store = JobStore<FileSlot, UlidGenerator<SystemClock>>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = TrackerConfig::load(cli.config.as_deref()).context("loading config")?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    tracing::debug!(data_dir = %config.data_dir.display(), key = %config.slot_key, "opening store");

    let mut store: Store = JobStore::load(
        FileSlot::new(&config.data_dir),
        UlidGenerator::new(SystemClock),
        config.slot_key.clone(),
    );
    store.subscribe(render::change);

    run(&mut store, cli.command)
}

fn run(store: &mut Store, command: Command) -> Result<()> {
    match command {
        Command::Add {
            company,
            role,
            follow_up,
        } => {
            let job = NewJob {
                company,
                role,
                follow_up,
            };
            match store.add(job) {
                Ok(_) => render::table(store.visible()),
                Err(e) => render::rejected(&e),
            }
        }
        Command::List { status, json } => {
            store.set_filter(status);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&store.visible()).context("encoding view")?
                );
            } else {
                render::total(store.len());
                render::table(store.visible());
            }
        }
        Command::SetStatus { id, status } => match store.update_status_str(id, &status) {
            Ok(true) => render::table(store.visible()),
            Ok(false) => render::missing(id),
            Err(e) => render::rejected(&e),
        },
        Command::Delete { id } => {
            if store.delete(id) {
                render::table(store.visible());
            } else {
                render::missing(id);
            }
        }
        Command::Due { on } => {
            let due = match on {
                Some(date) => store.follow_ups_due(date),
                None => store.follow_ups_due_today(&SystemClock),
            };
            render::due(&due);
        }
        Command::Stats => render::counts(&store.counts()),
    }
    Ok(())
}
