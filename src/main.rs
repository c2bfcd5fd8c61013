//! RehabTrack - ACL Rehabilitation Tracker
//!
//! Main entry point for the command-line application.

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::Parser;
use rehabtrack::catalog::{Catalog, InjuryType};
use rehabtrack::records::{Difficulty, ExerciseLogEntry, RomPainEntry};
use rehabtrack::storage::config::{self, AppConfig, Backend};
use rehabtrack::storage::{CsvStore, RecordStore, SqliteStore, UserDirectory};
use rehabtrack::RehabTracker;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cli::{Cli, Command, DeleteCommand, LogCommand, ProfileCommand, UserCommand};

/// Record store picked at startup.
enum OpenedStore {
    Sqlite(SqliteStore),
    /// CSV files, either configured or as the fallback when SQLite is down
    Csv(CsvStore),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting RehabTrack v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("Failed to load configuration")?;
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }

    let today = Local::now().date_naive();

    match cli.command {
        Command::Catalog { category, search } => {
            let catalog = Catalog::load()?;
            cli::print_catalog(catalog, category, search.as_deref());
            Ok(())
        }
        Command::User { action } => match open_store(&config)? {
            OpenedStore::Sqlite(store) => run_user_command(store, action),
            OpenedStore::Csv(_) => bail!("User accounts need the SQLite backend"),
        },
        command => {
            let username = cli.user.unwrap_or_else(|| config.default_user.clone());
            let password = cli
                .password
                .context("A password is required (--password)")?;

            match open_store(&config)? {
                OpenedStore::Sqlite(store) => {
                    store
                        .authenticate(&username, &password)
                        .with_context(|| format!("Could not sign in as {}", username))?;
                    let tracker = RehabTracker::open(store, username)?;
                    run_record_command(tracker, command, today)
                }
                OpenedStore::Csv(store) => {
                    if !config.check_app_password(&password) {
                        bail!("Incorrect app password");
                    }
                    let tracker = RehabTracker::open(store, username)?;
                    run_record_command(tracker, command, today)
                }
            }
        }
    }
}

/// Open the configured store, falling back to CSV files when the database
/// cannot be reached.
fn open_store(config: &AppConfig) -> anyhow::Result<OpenedStore> {
    match config.backend {
        Backend::Csv => Ok(OpenedStore::Csv(CsvStore::new(&config.data_dir)?)),
        Backend::Sqlite => match SqliteStore::open(&config.database_path()) {
            Ok(store) => Ok(OpenedStore::Sqlite(store)),
            Err(e) if e.is_unavailable() => {
                tracing::warn!(
                    "Database unavailable ({}), using CSV files in {}",
                    e,
                    config.data_dir.display()
                );
                Ok(OpenedStore::Csv(CsvStore::new(&config.data_dir)?))
            }
            Err(e) => Err(e.into()),
        },
    }
}

fn run_user_command(mut store: SqliteStore, action: UserCommand) -> anyhow::Result<()> {
    match action {
        UserCommand::Create {
            username,
            password,
            email,
        } => {
            let user = store.create_user(&username, &password, email.as_deref())?;
            println!("Created user {}", user.username);
        }
        UserCommand::Login { username, password } => {
            let user = store.authenticate(&username, &password)?;
            println!(
                "Signed in as {} (member since {})",
                user.username,
                user.created_at.date_naive()
            );
        }
        UserCommand::List => {
            for user in store.list_users()? {
                println!("{}\t{}", user.username, user.name);
            }
        }
    }
    Ok(())
}

fn run_record_command<S: RecordStore>(
    mut tracker: RehabTracker<S>,
    command: Command,
    today: NaiveDate,
) -> anyhow::Result<()> {
    match command {
        Command::Profile { action } => match action {
            ProfileCommand::Show => cli::print_profile(tracker.profile(), today),
            ProfileCommand::Set {
                name,
                age,
                weight,
                height,
                surgery_date,
                clear_surgery_date,
                injury,
            } => {
                let mut profile = tracker.profile().clone();
                if let Some(name) = name {
                    profile.name = name;
                }
                if let Some(age) = age {
                    profile.age = age;
                }
                if let Some(weight) = weight {
                    profile.weight_kg = weight;
                }
                if let Some(height) = height {
                    profile.height_cm = height;
                }
                if surgery_date.is_some() || clear_surgery_date {
                    profile.surgery_date = surgery_date;
                }
                if let Some(injury) = injury {
                    profile.injury_type = InjuryType::from_label(&injury);
                }
                tracker.save_profile(profile)?;
                println!("Profile saved");
            }
        },
        Command::Log { action } => match action {
            LogCommand::Exercise {
                category,
                exercise,
                sets,
                reps,
                weight,
                difficulty,
                date,
                notes,
            } => {
                let entry = ExerciseLogEntry::new(
                    date.unwrap_or(today),
                    category,
                    exercise,
                    sets,
                    reps,
                    weight,
                )?
                .with_notes(notes);
                let score = tracker.log_exercise(entry, Difficulty::new(difficulty)?)?;
                print_power_up(score, &tracker);
            }
            LogCommand::Rom {
                extension,
                flexion,
                pain,
                swelling,
                date,
                notes,
            } => {
                let entry =
                    RomPainEntry::new(date.unwrap_or(today), extension, flexion, pain, swelling)?
                        .with_notes(notes);
                let score = tracker.log_rom_pain(entry)?;
                print_power_up(score, &tracker);
            }
        },
        Command::Delete { action } => match action {
            DeleteCommand::Exercise { date, exercise } => {
                tracker.delete_exercise(date, &exercise)?;
                println!("Deleted {} on {}", exercise, date);
            }
            DeleteCommand::Rom { date } => {
                tracker.delete_rom_pain(date)?;
                println!("Deleted ROM/pain reading on {}", date);
            }
        },
        Command::Dashboard { json, today: as_of } => {
            let summary = tracker.dashboard(as_of.unwrap_or(today));
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                cli::print_dashboard(&summary);
            }
        }
        Command::User { .. } | Command::Catalog { .. } => {
            bail!("This command does not operate on user records")
        }
    }
    Ok(())
}

fn print_power_up<S: RecordStore>(score: u64, tracker: &RehabTracker<S>) {
    let power = tracker.power_level();
    println!("Power up! +{} (power level {})", score, power);
    println!("{}", power.tier().title());
}
