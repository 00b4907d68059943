use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use obra_core::{
    analysis::ProjectFilter,
    journal::read_journal,
    session::{builder::SessionBuilder, engine::SessionEngine},
};
use obra_schemas::project::{ClientCategory, ProjectStatus};
use std::{collections::BTreeMap, fs, path::PathBuf};
use tracing::info;

mod config;
mod views;
mod workflow;

#[derive(Parser)]
#[command(name = "obra")]
#[command(about = "Construction project inventory and approval workflow")]
struct Cli {
    /// Seed file with projects, inventory, approvals and catalog (defaults to the built-in demo data)
    #[arg(long, value_name = "FILE", global = true)]
    seed: Option<PathBuf>,

    /// Settings file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a YAML action script and print the resulting screens
    Run {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Write one CSV row per dispatched action (a directory gets a timestamped file)
        #[arg(long, value_name = "FILE")]
        journal: Option<PathBuf>,

        /// Dump the final session state as JSON
        #[arg(long, value_name = "FILE")]
        state_out: Option<PathBuf>,

        /// Skip rejected actions instead of stopping
        #[arg(long)]
        keep_going: bool,
    },
    /// Print one view of the starting state
    Show {
        #[arg(value_enum)]
        view: View,

        /// Project id for the inventory view
        #[arg(long, default_value = "1")]
        project: String,

        /// Substring filter (project name/client or material name)
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Summarize a journal written by `run --journal`
    Audit {
        #[arg(value_name = "JOURNAL")]
        journal: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    Projects,
    Inventory,
    Approvals,
    Catalog,
    Dashboard,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    InProgress,
    Pending,
    Finished,
}

impl From<StatusArg> for ProjectStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::InProgress => ProjectStatus::InProgress,
            StatusArg::Pending => ProjectStatus::Pending,
            StatusArg::Finished => ProjectStatus::Finished,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Corporate,
    Public,
    Residential,
}

impl From<CategoryArg> for ClientCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Corporate => ClientCategory::Corporate,
            CategoryArg::Public => ClientCategory::Public,
            CategoryArg::Residential => ClientCategory::Residential,
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    match args.command {
        Command::Run {
            script,
            journal,
            state_out,
            keep_going,
        } => {
            let config = config::SessionConfig::load(args.config.as_deref(), args.seed.as_deref())?;
            let mut builder = SessionBuilder::new()
                .with_settings(config.settings)
                .with_seed(config.seed);
            if let Some(path) = journal.map(journal_file) {
                let path = path
                    .to_str()
                    .with_context(|| format!("Journal path {:?} is not valid UTF-8", path))?;
                info!("Journaling actions to '{}'", path);
                builder = builder.with_journal_to_file(path);
            }
            let mut engine = builder.build()?;

            let script = workflow::load_script(&script)?;
            let summary = workflow::replay(&mut engine, script, keep_going)?;

            print_session(&engine)?;
            println!(
                "\n{} actions applied, {} rejected, {} events",
                summary.applied, summary.rejected, summary.events
            );

            if let Some(path) = state_out {
                let json = serde_json::to_string_pretty(engine.state())?;
                fs::write(&path, json)
                    .with_context(|| format!("Failed to write state to {:?}", path))?;
                info!("Final state written to '{}'", path.display());
            }
        }
        Command::Show {
            view,
            project,
            search,
            status,
            category,
        } => {
            let config = config::SessionConfig::load(args.config.as_deref(), args.seed.as_deref())?;
            let engine = SessionBuilder::new()
                .with_settings(config.settings)
                .with_seed(config.seed)
                .build()?;
            let state = engine.state();
            let text = match view {
                View::Projects => views::projects(
                    state,
                    &ProjectFilter {
                        search,
                        status: status.map(Into::into),
                        category: category.map(Into::into),
                    },
                ),
                View::Inventory => views::inventory(state, &project, &search)?,
                View::Approvals => views::approvals(state),
                View::Catalog => views::catalog(state),
                View::Dashboard => views::dashboard(state),
            };
            print!("{}", text);
        }
        Command::Audit { journal } => {
            let path = journal
                .to_str()
                .with_context(|| format!("Journal path {:?} is not valid UTF-8", journal))?;
            let entries = read_journal(path)?;
            let mut per_action: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
            for entry in &entries {
                let counts = per_action.entry(entry.action.as_str()).or_default();
                if entry.accepted() {
                    counts.0 += 1;
                } else {
                    counts.1 += 1;
                }
            }
            println!("=== Journal: {} actions ===", entries.len());
            for (action, (ok, rejected)) in per_action {
                println!("  {:<20} ok {:>4}  rejected {:>4}", action, ok, rejected);
            }
        }
    }

    Ok(())
}

/// A directory argument gets a fresh `journal_<timestamp>.csv` inside it.
fn journal_file(path: PathBuf) -> PathBuf {
    if path.is_dir() {
        path.join(format!("journal_{}.csv", chrono::Local::now().format("%Y%m%d_%H%M%S")))
    } else {
        path
    }
}

fn print_session(engine: &SessionEngine) -> Result<()> {
    let state = engine.state();
    println!("Pantalla: {}", state.screen);
    match &state.user {
        Some(user) => println!("Usuario: {} <{}>", user.name, user.email),
        None => println!("Usuario: {} (sin sesión)", engine.settings().anonymous_name),
    }
    println!("{}", views::projects(state, &ProjectFilter::default()));
    if let Some(project_id) = &state.selected_project {
        println!("{}", views::inventory(state, project_id, "")?);
    }
    println!("{}", views::draft(state));
    println!("{}", views::approvals(state));
    println!("{}", views::catalog(state));
    Ok(())
}
