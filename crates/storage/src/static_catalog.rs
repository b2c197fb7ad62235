use forma_domain as domain;

/// The built-in exercise catalog.
pub struct StaticCatalog;

impl domain::ExerciseRepository for StaticCatalog {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(domain::catalog::EXERCISES.clone())
    }
}

#[cfg(test)]
mod tests {
    use domain::{ExerciseRepository, ExerciseService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_read_exercises() {
        assert_eq!(
            StaticCatalog.read_exercises().await.unwrap(),
            *domain::catalog::EXERCISES
        );
    }

    #[tokio::test]
    async fn test_match_exercise_names() {
        let service = domain::Service::new(StaticCatalog);
        let names = ["Bench Press", "Pullups", "Glorbnaxx"]
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        let matches = service.match_exercise_names(&names).await.unwrap();

        assert_eq!(matches.len(), 2);
        assert!(matches.contains_key("Bench Press"));
        assert!(matches.contains_key("Pullups"));
    }
}
