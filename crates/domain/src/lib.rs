#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod exercise;
pub mod fuzzy;
pub mod matching;
pub mod name;
pub mod search;
pub mod service;
pub mod settings;

pub use error::{ReadError, StorageError};
pub use exercise::{
    Difficulty, DifficultyError, Exercise, ExerciseID, ExerciseRepository, Property,
    SearchFilters,
};
pub use matching::{find_exercise_by_name, match_exercise_names, normalize_name};
pub use name::{Name, NameError};
pub use search::{
    FilterOptions, MatchType, SearchResult, filter_options, search_exercises,
    search_exercises_with_settings,
};
pub use service::{ExerciseService, Service};
pub use settings::Settings;
