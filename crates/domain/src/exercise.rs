use std::{collections::HashSet, slice::Iter};

use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{Name, ReadError};

/// Provides the exercise catalog.
///
/// The catalog is read in full for every search or match. Nothing is written back.
#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: String,
    pub equipment: String,
    pub difficulty: Difficulty,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub search_aliases: Option<String>,
    pub popularity_rank: Option<u32>,
}

impl Exercise {
    pub fn muscles(&self) -> impl Iterator<Item = &String> {
        self.primary_muscles
            .iter()
            .chain(self.secondary_muscles.iter())
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(
    strum::EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Difficulty {
    pub fn parse_label(label: &str) -> Result<Self, DifficultyError> {
        label
            .trim()
            .parse::<Difficulty>()
            .map_err(|_| DifficultyError::Unknown(label.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Unknown difficulty \"{0}\"")]
    Unknown(String),
}

/// Structured constraints applied on top of a search.
///
/// Every non-empty set must be satisfied. Filters decide inclusion only and
/// never influence the score of a result.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SearchFilters {
    /// All listed muscles must be trained, either as primary or secondary muscle.
    pub muscle_groups: HashSet<String>,
    /// At least one listed label must be contained in the equipment of the exercise.
    pub equipment: HashSet<String>,
    pub difficulty: HashSet<Difficulty>,
    pub category: HashSet<String>,
}

impl SearchFilters {
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let equipment = exercise.equipment.to_lowercase();

        (self.muscle_groups.is_empty()
            || self.muscle_groups.iter().all(|muscle_group| {
                exercise
                    .muscles()
                    .any(|m| m.to_lowercase() == muscle_group.to_lowercase())
            }))
            && (self.equipment.is_empty()
                || self
                    .equipment
                    .iter()
                    .any(|e| equipment.contains(&e.to_lowercase())))
            && (self.difficulty.is_empty() || self.difficulty.contains(&exercise.difficulty))
            && (self.category.is_empty()
                || self
                    .category
                    .iter()
                    .any(|c| c.to_lowercase() == exercise.category.to_lowercase()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.muscle_groups.is_empty()
            && self.equipment.is_empty()
            && self.difficulty.is_empty()
            && self.category.is_empty()
    }

    #[must_use]
    pub fn difficulty_list(&self) -> Vec<(Difficulty, bool)> {
        Difficulty::iter()
            .map(|d| (*d, self.difficulty.contains(d)))
            .collect::<Vec<_>>()
    }

    pub fn toggle_muscle_group(&mut self, muscle_group: &str) {
        toggle(&mut self.muscle_groups, muscle_group);
    }

    pub fn toggle_equipment(&mut self, equipment: &str) {
        toggle(&mut self.equipment, equipment);
    }

    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty.contains(&difficulty) {
            self.difficulty.remove(&difficulty);
        } else {
            self.difficulty.insert(difficulty);
        }
    }

    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.category, category);
    }
}

fn toggle(set: &mut HashSet<String>, value: &str) {
    if set.contains(value) {
        set.remove(value);
    } else {
        set.insert(value.to_string());
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(equipment: &str, difficulty: Difficulty) -> Exercise {
        Exercise {
            id: 1.into(),
            name: Name::new("Bench Press").unwrap(),
            category: "Chest".into(),
            equipment: equipment.into(),
            difficulty,
            primary_muscles: vec!["Chest".into()],
            secondary_muscles: vec!["Triceps".into(), "Shoulders".into()],
            search_aliases: None,
            popularity_rank: Some(95),
        }
    }

    #[test]
    fn test_exercise_muscles() {
        assert_eq!(
            exercise("Barbell", Difficulty::Beginner)
                .muscles()
                .collect::<Vec<_>>(),
            vec!["Chest", "Triceps", "Shoulders"]
        );
    }

    #[test]
    fn test_exercise_id_from_u128() {
        assert!(ExerciseID::from(0).is_nil());
        assert!(!ExerciseID::from(1).is_nil());
        assert_eq!(ExerciseID::nil(), ExerciseID::default());
    }

    #[rstest]
    #[case("Beginner", Ok(Difficulty::Beginner))]
    #[case("intermediate", Ok(Difficulty::Intermediate))]
    #[case(" ADVANCED ", Ok(Difficulty::Advanced))]
    #[case("Expert", Err(DifficultyError::Unknown("Expert".into())))]
    fn test_difficulty_parse_label(
        #[case] value: &str,
        #[case] expected: Result<Difficulty, DifficultyError>,
    ) {
        assert_eq!(Difficulty::parse_label(value), expected);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert!(Difficulty::try_from("Expert").is_err());
    }

    #[test]
    fn test_difficulty_name() {
        let mut names = HashSet::new();

        for difficulty in Difficulty::iter() {
            let name = difficulty.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));
            assert_eq!(difficulty.to_string(), name);
            assert_eq!(Difficulty::parse_label(name), Ok(*difficulty));

            names.insert(name);
        }
    }

    #[rstest]
    #[case::empty(SearchFilters::default(), true)]
    #[case::all_muscles(
        SearchFilters { muscle_groups: ["chest".to_string(), "TRICEPS".to_string()].into(), ..SearchFilters::default() },
        true
    )]
    #[case::missing_muscle(
        SearchFilters { muscle_groups: ["Chest".to_string(), "Biceps".to_string()].into(), ..SearchFilters::default() },
        false
    )]
    #[case::equipment_substring(
        SearchFilters { equipment: ["bar".to_string()].into(), ..SearchFilters::default() },
        true
    )]
    #[case::any_equipment(
        SearchFilters { equipment: ["Cable".to_string(), "Barbell".to_string()].into(), ..SearchFilters::default() },
        true
    )]
    #[case::other_equipment(
        SearchFilters { equipment: ["Dumbbell".to_string()].into(), ..SearchFilters::default() },
        false
    )]
    #[case::difficulty(
        SearchFilters { difficulty: [Difficulty::Beginner, Difficulty::Advanced].into(), ..SearchFilters::default() },
        true
    )]
    #[case::other_difficulty(
        SearchFilters { difficulty: [Difficulty::Intermediate].into(), ..SearchFilters::default() },
        false
    )]
    #[case::category(
        SearchFilters { category: ["chest".to_string()].into(), ..SearchFilters::default() },
        true
    )]
    #[case::category_is_not_substring(
        SearchFilters { category: ["Ches".to_string()].into(), ..SearchFilters::default() },
        false
    )]
    #[case::combined(
        SearchFilters {
            muscle_groups: ["Shoulders".to_string()].into(),
            equipment: ["Barbell".to_string()].into(),
            difficulty: [Difficulty::Advanced].into(),
            ..SearchFilters::default()
        },
        false
    )]
    fn test_search_filters_matches(#[case] filters: SearchFilters, #[case] expected: bool) {
        assert_eq!(
            filters.matches(&exercise("Barbell", Difficulty::Beginner)),
            expected
        );
    }

    #[test]
    fn test_search_filters_is_empty() {
        assert!(SearchFilters::default().is_empty());
        assert!(
            !SearchFilters {
                category: ["Legs".to_string()].into(),
                ..SearchFilters::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_search_filters_toggle_difficulty() {
        let mut filters = SearchFilters::default();

        assert!(filters.difficulty_list().iter().map(|(_, b)| b).all(|b| !b));

        filters.toggle_difficulty(Difficulty::Beginner);

        assert!(
            filters
                .difficulty_list()
                .contains(&(Difficulty::Beginner, true))
        );
        assert!(
            filters
                .difficulty_list()
                .into_iter()
                .filter(|(d, _)| *d != Difficulty::Beginner)
                .map(|(_, b)| b)
                .all(|b| !b)
        );

        filters.toggle_difficulty(Difficulty::Beginner);

        assert!(filters.difficulty_list().iter().map(|(_, b)| b).all(|b| !b));
    }

    #[test]
    fn test_search_filters_toggle_labels() {
        let mut filters = SearchFilters::default();

        filters.toggle_muscle_group("Chest");
        filters.toggle_equipment("Cable");
        filters.toggle_category("Back");

        assert_eq!(filters.muscle_groups, HashSet::from(["Chest".to_string()]));
        assert_eq!(filters.equipment, HashSet::from(["Cable".to_string()]));
        assert_eq!(filters.category, HashSet::from(["Back".to_string()]));

        filters.toggle_muscle_group("Chest");
        filters.toggle_equipment("Cable");
        filters.toggle_category("Back");

        assert!(filters.is_empty());
    }
}
