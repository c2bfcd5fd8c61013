//! Command-line interface definitions and text output.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rehabtrack::catalog::{Catalog, ExerciseCategory, InjuryType};
use rehabtrack::metrics::{days_since, RehabPhase, TimelineStage};
use rehabtrack::records::{parse_date, Profile, Swelling};
use rehabtrack::storage::Backend;
use rehabtrack::DashboardSummary;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rehabtrack",
    version,
    about = "ACL rehabilitation tracker",
    long_about = "Log rehab exercises and range-of-motion readings, and follow recovery progress after ACL surgery."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Record store backend override
    #[arg(long, global = true)]
    pub backend: Option<Backend>,

    /// User to act as (defaults to `default_user` from the config)
    #[arg(long, short = 'u', global = true)]
    pub user: Option<String>,

    /// Account password, or the app password for the CSV backend
    #[arg(long, short = 'p', global = true)]
    pub password: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// User account commands (SQLite backend only)
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Show or edit the rehab profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Log an exercise or a ROM/pain reading
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Delete a logged entry
    Delete {
        #[command(subcommand)]
        action: DeleteCommand,
    },

    /// Show the progress dashboard
    Dashboard {
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,

        /// Evaluate as of this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Browse the exercise catalog
    Catalog {
        /// Only list this category
        #[arg(long, short = 'c')]
        category: Option<ExerciseCategory>,

        /// Case-insensitive name filter
        #[arg(long, short = 's')]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Create a user account
    Create {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        email: Option<String>,
    },

    /// Check a username and password
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// List stored users
    List,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the profile and surgery timeline
    Show,

    /// Update profile fields; omitted fields keep their value
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Height in cm
        #[arg(long)]
        height: Option<f64>,

        /// Surgery date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, conflicts_with = "clear_surgery_date")]
        surgery_date: Option<NaiveDate>,

        /// Remove the surgery date
        #[arg(long)]
        clear_surgery_date: bool,

        /// Injury type, e.g. "ACL + Meniscus"
        #[arg(long)]
        injury: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum LogCommand {
    /// Log a completed exercise
    Exercise {
        #[arg(long, short = 'c')]
        category: ExerciseCategory,

        /// Exercise name as listed in the catalog
        #[arg(long, short = 'e')]
        exercise: String,

        #[arg(long, default_value = "3")]
        sets: u32,

        #[arg(long, default_value = "10")]
        reps: u32,

        /// Load in kg, 0 for bodyweight
        #[arg(long, default_value = "0")]
        weight: f64,

        /// Perceived difficulty, 1-10
        #[arg(long, default_value = "5")]
        difficulty: u8,

        /// Entry date (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Log a range-of-motion and pain reading
    Rom {
        /// Extension in degrees, negative for hyperextension
        #[arg(long, allow_hyphen_values = true)]
        extension: f64,

        /// Flexion in degrees
        #[arg(long)]
        flexion: f64,

        /// Pain level, 0-10
        #[arg(long)]
        pain: u8,

        /// Swelling, 0-3 or None/Minimal/Moderate/Severe
        #[arg(long, default_value = "0")]
        swelling: Swelling,

        /// Entry date (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand)]
pub enum DeleteCommand {
    /// Delete the first exercise with this name on this date
    Exercise {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,

        #[arg(long, short = 'e')]
        exercise: String,
    },

    /// Delete the first ROM/pain reading on this date
    Rom {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },
}

pub fn print_catalog(catalog: &Catalog, category: Option<ExerciseCategory>, search: Option<&str>) {
    let categories = match category {
        Some(category) => vec![category],
        None => ExerciseCategory::ALL.to_vec(),
    };

    for category in categories {
        let exercises = catalog.search(category, search.unwrap_or(""));
        if exercises.is_empty() {
            continue;
        }
        println!("{}", category.label());
        for exercise in exercises {
            println!("  {:<32} {}", exercise.name, exercise.description);
        }
    }
}

pub fn print_profile(profile: &Profile, today: NaiveDate) {
    let name = if profile.name.is_empty() {
        "(no name)"
    } else {
        profile.name.as_str()
    };
    println!("{}", name);
    println!("  Age:     {}", profile.age);
    println!("  Weight:  {:.1} kg", profile.weight_kg);
    println!("  Height:  {:.1} cm", profile.height_cm);
    println!(
        "  BMI:     {:.1} ({})",
        profile.bmi(),
        profile.bmi_category().label()
    );
    print_injury(profile.injury_type);

    match profile.surgery_date {
        Some(surgery) => {
            let days = days_since(surgery, today);
            let stage = TimelineStage::from_days(days);
            println!("  Surgery: {}", surgery);
            println!("  Phase:   {}", RehabPhase::from_days(days).label());
            println!("  Stage:   {} - {}", stage.label(), stage.guidance());
        }
        None => println!("  Surgery: not set"),
    }
}

fn print_injury(injury: InjuryType) {
    println!("  Injury:  {}", injury.label());
    println!("           {}", injury.description());
    for consideration in injury.considerations() {
        println!("           - {}", consideration);
    }
}

pub fn print_dashboard(summary: &DashboardSummary) {
    if !summary.name.is_empty() {
        println!("Rehab dashboard for {}", summary.name);
    }

    match &summary.timeline {
        Some(timeline) => {
            println!(
                "{} days {}",
                timeline.countdown.days(),
                timeline.countdown.label().to_lowercase()
            );
            match timeline.phase_progress {
                Some(progress) => {
                    println!("Phase: {} ({:.0}% through)", timeline.phase_label, progress)
                }
                None => println!("Phase: {}", timeline.phase_label),
            }
            println!("Recovery: {}% of 6 months", timeline.recovery_percent);
        }
        None => println!("Set a surgery date to see your recovery timeline"),
    }

    println!(
        "Power level: {} ({}, bar {:.0}%)",
        summary.power_level,
        summary.power_tier.title(),
        summary.power_bar_percent
    );

    if summary.is_empty() {
        println!("No entries logged yet");
        return;
    }

    let exercises = &summary.exercises;
    println!(
        "Exercises: {} entries, {} sets, {:.1} kg volume",
        exercises.total_entries, exercises.total_sets, exercises.total_volume
    );
    for (category, count) in &exercises.by_category {
        println!("  {:<28} {}", category.label(), count);
    }
    for entry in &exercises.recent {
        println!(
            "  {}  {} {}x{} @ {} kg",
            entry.date, entry.exercise, entry.sets, entry.reps, entry.weight_kg
        );
    }

    if let Some(rom) = &summary.rom {
        println!(
            "Latest ROM ({}): extension {:.1}°, flexion {:.1}°, pain {}/10",
            rom.date, rom.extension_deg, rom.flexion_deg, rom.pain_level
        );
        println!("  {:.0}% of target range", rom.achievement_percent);
        println!("  {}", rom.rom_status.message());
        println!("  {}", rom.pain_status.message());
        if let Some(trend) = &rom.trend {
            println!(
                "  Since first reading: extension {:+.1}°, flexion {:+.1}°, pain {:+.0}",
                trend.extension_delta, trend.flexion_delta, trend.pain_delta
            );
        }
    }
}
