use std::{borrow::Cow, collections::HashSet, path::PathBuf};

use forma_domain as domain;
use log::debug;
use uuid::Uuid;

/// Exercise catalog stored as JSON array of exercises.
pub struct JsonCatalog {
    source: Source,
}

enum Source {
    File(PathBuf),
    Text(String),
}

impl JsonCatalog {
    /// Reads the catalog from `path` on every access.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
        }
    }

    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            source: Source::Text(json.into()),
        }
    }
}

impl domain::ExerciseRepository for JsonCatalog {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let json = match &self.source {
            Source::File(path) => Cow::Owned(
                std::fs::read_to_string(path).map_err(domain::StorageError::from)?,
            ),
            Source::Text(text) => Cow::Borrowed(text.as_str()),
        };
        let exercises = parse(&json).map_err(|err| domain::ReadError::Other(err.into()))?;
        debug!("read {} exercises from catalog", exercises.len());
        Ok(exercises)
    }
}

pub fn parse(json: &str) -> Result<Vec<domain::Exercise>, CatalogError> {
    let exercises = serde_json::from_str::<Vec<Exercise>>(json)?;
    let mut ids = HashSet::new();

    for exercise in &exercises {
        if !ids.insert(exercise.id) {
            return Err(CatalogError::DuplicateID(exercise.id));
        }
    }

    exercises
        .into_iter()
        .map(|e| domain::Exercise::try_from(e).map_err(From::from))
        .collect()
}

pub fn to_json(exercises: &[domain::Exercise]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&exercises.iter().map(Exercise::from).collect::<Vec<_>>())
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidJson(#[from] serde_json::Error),
    #[error("duplicate exercise id {0}")]
    DuplicateID(Uuid),
    #[error(transparent)]
    InvalidExercise(#[from] ExerciseError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub equipment: String,
    pub difficulty: String,
    #[serde(default)]
    pub primary_muscles: Vec<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_aliases: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity_rank: Option<u32>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            category: value.category.clone(),
            equipment: value.equipment.clone(),
            difficulty: value.difficulty.to_string(),
            primary_muscles: value.primary_muscles.clone(),
            secondary_muscles: value.secondary_muscles.clone(),
            search_aliases: value.search_aliases.clone(),
            popularity_rank: value.popularity_rank,
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ExerciseError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            category: value.category,
            equipment: value.equipment,
            difficulty: domain::Difficulty::parse_label(&value.difficulty)?,
            primary_muscles: value.primary_muscles,
            secondary_muscles: value.secondary_muscles,
            search_aliases: value.search_aliases.filter(|aliases| !aliases.trim().is_empty()),
            popularity_rank: value.popularity_rank,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidDifficulty(#[from] domain::DifficultyError),
}
