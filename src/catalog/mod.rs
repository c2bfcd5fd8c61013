//! Static exercise and injury catalogs.
//!
//! Categories are an enum so every lookup is exhaustive at compile time; the
//! exercise tables themselves are checked once by [`Catalog::load`].

mod exercises;
pub mod injury;

pub use injury::InjuryType;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Exercise category offered when logging a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExerciseCategory {
    /// Range of motion work
    Rom,
    /// Strength exercises
    Strength,
    /// Resistance band exercises
    ResistanceBand,
    /// Balance & neuromuscular control
    Balance,
    /// Plyometrics
    Plyometrics,
    /// Martial arts training
    MartialArts,
    /// Recovery modalities
    Recovery,
}

impl ExerciseCategory {
    /// All categories in display order.
    pub const ALL: [ExerciseCategory; 7] = [
        ExerciseCategory::Rom,
        ExerciseCategory::Strength,
        ExerciseCategory::ResistanceBand,
        ExerciseCategory::Balance,
        ExerciseCategory::Plyometrics,
        ExerciseCategory::MartialArts,
        ExerciseCategory::Recovery,
    ];

    /// Display label, also the stored form.
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseCategory::Rom => "ROM Exercises",
            ExerciseCategory::Strength => "Strength Exercises",
            ExerciseCategory::ResistanceBand => "Resistance Band Exercises",
            ExerciseCategory::Balance => "Balance & Neuromuscular",
            ExerciseCategory::Plyometrics => "Plyometrics",
            ExerciseCategory::MartialArts => "Martial Arts Training",
            ExerciseCategory::Recovery => "Recovery",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ExerciseCategory::Rom => exercises::ROM_EXERCISES,
            ExerciseCategory::Strength => exercises::STRENGTH_EXERCISES,
            ExerciseCategory::ResistanceBand => exercises::BAND_EXERCISES,
            ExerciseCategory::Balance => exercises::BALANCE_EXERCISES,
            ExerciseCategory::Plyometrics => exercises::PLYOMETRIC_EXERCISES,
            ExerciseCategory::MartialArts => exercises::MARTIAL_ARTS_EXERCISES,
            ExerciseCategory::Recovery => exercises::RECOVERY_EXERCISES,
        }
    }
}

impl std::fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExerciseCategory {
    type Err = CatalogError;

    /// Accepts the plain label, ignoring case and any leading decoration such
    /// as the emoji older front-ends prefixed categories with.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start_matches(|c: char| !c.is_ascii_alphanumeric()).trim();
        ExerciseCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// A single catalog exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub category: ExerciseCategory,
    pub name: &'static str,
    pub description: &'static str,
}

/// Catalog consistency errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown exercise category: {0}")]
    UnknownCategory(String),

    #[error("No category given and {0:?} is not in the catalog")]
    UncategorizedExercise(String),

    #[error("Category {0} has no exercises")]
    EmptyCategory(ExerciseCategory),

    #[error("Exercise {0:?} is listed more than once")]
    DuplicateExercise(&'static str),

    #[error("Exercise {0:?} has no description")]
    MissingDescription(&'static str),
}

/// Validated view over the static exercise tables.
#[derive(Debug)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

static CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

impl Catalog {
    /// Load and validate the catalog. Validation runs once per process.
    pub fn load() -> Result<&'static Catalog, CatalogError> {
        CATALOG.get_or_init(Self::build).as_ref().map_err(|e| e.clone())
    }

    fn build() -> Result<Catalog, CatalogError> {
        let mut seen = HashSet::new();
        let mut exercises = Vec::new();

        for category in ExerciseCategory::ALL {
            let table = category.table();
            if table.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }

            for &(name, description) in table {
                if !seen.insert(name) {
                    return Err(CatalogError::DuplicateExercise(name));
                }
                if description.trim().is_empty() {
                    return Err(CatalogError::MissingDescription(name));
                }
                exercises.push(Exercise {
                    category,
                    name,
                    description,
                });
            }
        }

        tracing::debug!("Exercise catalog loaded with {} entries", exercises.len());
        Ok(Catalog { exercises })
    }

    /// Exercises of one category, in display order.
    pub fn exercises(&self, category: ExerciseCategory) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter().filter(move |e| e.category == category)
    }

    /// Look up an exercise by exact name.
    pub fn find(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    /// Whether `name` is listed under `category`.
    pub fn contains(&self, category: ExerciseCategory, name: &str) -> bool {
        self.find(name).is_some_and(|e| e.category == category)
    }

    /// Case-insensitive substring search within a category.
    pub fn search(&self, category: ExerciseCategory, term: &str) -> Vec<&Exercise> {
        let term = term.to_lowercase();
        self.exercises(category)
            .filter(|e| e.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Category from a stored label. An empty label, as in logs written
    /// before categories were recorded, is filled in from the exercise name.
    pub fn resolve_category(
        &self,
        label: &str,
        exercise: &str,
    ) -> Result<ExerciseCategory, CatalogError> {
        if !label.trim().is_empty() {
            return label.parse();
        }
        self.find(exercise.trim())
            .map(|e| e.category)
            .ok_or_else(|| CatalogError::UncategorizedExercise(exercise.to_string()))
    }

    /// Total number of exercises.
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog has no exercises.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
