use std::collections::HashMap;

use log::{debug, error};

use crate::{
    Exercise, ExerciseID, ExerciseRepository, ReadError, SearchFilters, Settings,
    matching::{find_exercise_by_name, match_exercise_names},
    search::{FilterOptions, SearchResult, filter_options, search_exercises_with_settings},
};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn search_exercises(
        &self,
        query: &str,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<SearchResult>, ReadError>;
    async fn get_filter_options(&self) -> Result<FilterOptions, ReadError>;
    async fn find_exercise_by_name(&self, name: &str) -> Result<Option<Exercise>, ReadError>;
    async fn match_exercise_names(
        &self,
        names: &[String],
    ) -> Result<HashMap<String, ExerciseID>, ReadError>;
}

pub struct Service<R> {
    repository: R,
    settings: Settings,
}

impl<R: ExerciseRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_settings(repository, Settings::default())
    }

    pub fn with_settings(repository: R, settings: Settings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(self.repository.read_exercises(), "get", "exercises")
    }

    async fn search_exercises(
        &self,
        query: &str,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<SearchResult>, ReadError> {
        let catalog = self.get_exercises().await?;
        Ok(search_exercises_with_settings(
            &catalog,
            query,
            filters,
            &self.settings,
        ))
    }

    async fn get_filter_options(&self) -> Result<FilterOptions, ReadError> {
        Ok(filter_options(&self.get_exercises().await?))
    }

    async fn find_exercise_by_name(&self, name: &str) -> Result<Option<Exercise>, ReadError> {
        let catalog = self.get_exercises().await?;
        Ok(find_exercise_by_name(name, &catalog).cloned())
    }

    async fn match_exercise_names(
        &self,
        names: &[String],
    ) -> Result<HashMap<String, ExerciseID>, ReadError> {
        Ok(match_exercise_names(names, &self.get_exercises().await?))
    }
}
