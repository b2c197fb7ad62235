use crate::{Difficulty, Exercise, ExerciseID, Name, NameError};

struct CatalogExercise {
    pub name: &'static str,
    pub category: &'static str,
    pub equipment: &'static str,
    pub difficulty: Difficulty,
    pub primary_muscles: &'static [&'static str],
    pub secondary_muscles: &'static [&'static str],
    pub search_aliases: Option<&'static str>,
    pub popularity_rank: u32,
}

impl CatalogExercise {
    fn to_exercise(&self, id: ExerciseID) -> Result<Exercise, NameError> {
        Ok(Exercise {
            id,
            name: Name::new(self.name)?,
            category: self.category.to_string(),
            equipment: self.equipment.to_string(),
            difficulty: self.difficulty,
            primary_muscles: self.primary_muscles.iter().map(ToString::to_string).collect(),
            secondary_muscles: self
                .secondary_muscles
                .iter()
                .map(ToString::to_string)
                .collect(),
            search_aliases: self.search_aliases.map(ToString::to_string),
            popularity_rank: Some(self.popularity_rank),
        })
    }
}

/// Built-in exercise catalog in catalog order.
///
/// IDs are derived from the position in the catalog and are therefore stable
/// as long as entries are only appended.
pub static EXERCISES: std::sync::LazyLock<Vec<Exercise>> = std::sync::LazyLock::new(|| {
    CATALOG_EXERCISES
        .iter()
        .zip(1u128..)
        .filter_map(|(e, id)| e.to_exercise(id.into()).ok())
        .collect()
});

const CATALOG_EXERCISES: [CatalogExercise; 40] = [
    CatalogExercise {
        name: "Bench Press",
        category: "Chest",
        equipment: "Barbell",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Chest"],
        secondary_muscles: &["Triceps", "Shoulders"],
        search_aliases: Some("flat bench chest press"),
        popularity_rank: 100,
    },
    CatalogExercise {
        name: "Incline Bench Press",
        category: "Chest",
        equipment: "Barbell",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Chest"],
        secondary_muscles: &["Shoulders", "Triceps"],
        search_aliases: Some("incline press upper chest"),
        popularity_rank: 80,
    },
    CatalogExercise {
        name: "Dumbbell Bench Press",
        category: "Chest",
        equipment: "Dumbbell",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Chest"],
        secondary_muscles: &["Triceps", "Shoulders"],
        search_aliases: Some("db bench"),
        popularity_rank: 85,
    },
    CatalogExercise {
        name: "Dumbbell Flies",
        category: "Chest",
        equipment: "Dumbbell",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Chest"],
        secondary_muscles: &["Shoulders"],
        search_aliases: Some("chest fly pec fly"),
        popularity_rank: 60,
    },
    CatalogExercise {
        name: "Cable Crossover",
        category: "Chest",
        equipment: "Cable",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Chest"],
        secondary_muscles: &["Shoulders"],
        search_aliases: Some("cable fly"),
        popularity_rank: 55,
    },
    CatalogExercise {
        name: "Push Up",
        category: "Chest",
        equipment: "Bodyweight",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Chest"],
        secondary_muscles: &["Triceps", "Shoulders", "Abs"],
        search_aliases: Some("pushup press up"),
        popularity_rank: 90,
    },
    CatalogExercise {
        name: "Chest Dip",
        category: "Chest",
        equipment: "Bodyweight",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Chest", "Triceps"],
        secondary_muscles: &["Shoulders"],
        search_aliases: Some("parallel bar dip"),
        popularity_rank: 50,
    },
    CatalogExercise {
        name: "Deadlift",
        category: "Back",
        equipment: "Barbell",
        difficulty: Difficulty::Advanced,
        primary_muscles: &["Lower Back", "Glutes", "Hamstrings"],
        secondary_muscles: &["Traps", "Forearms", "Quads"],
        search_aliases: Some("conventional deadlift"),
        popularity_rank: 98,
    },
    CatalogExercise {
        name: "Sumo Deadlift",
        category: "Back",
        equipment: "Barbell",
        difficulty: Difficulty::Advanced,
        primary_muscles: &["Glutes", "Quads", "Lower Back"],
        secondary_muscles: &["Hamstrings", "Adductors"],
        search_aliases: None,
        popularity_rank: 45,
    },
    CatalogExercise {
        name: "Romanian Deadlift",
        category: "Legs",
        equipment: "Barbell",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Hamstrings", "Glutes"],
        secondary_muscles: &["Lower Back"],
        search_aliases: Some("rdl stiff leg"),
        popularity_rank: 75,
    },
    CatalogExercise {
        name: "Barbell Row",
        category: "Back",
        equipment: "Barbell",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Lats", "Upper Back"],
        secondary_muscles: &["Biceps", "Lower Back"],
        search_aliases: Some("bent over row pendlay"),
        popularity_rank: 78,
    },
    CatalogExercise {
        name: "Dumbbell Row",
        category: "Back",
        equipment: "Dumbbell",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Lats", "Upper Back"],
        secondary_muscles: &["Biceps"],
        search_aliases: Some("one arm row"),
        popularity_rank: 70,
    },
    CatalogExercise {
        name: "Seated Cable Row",
        category: "Back",
        equipment: "Cable",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Upper Back", "Lats"],
        secondary_muscles: &["Biceps"],
        search_aliases: Some("low row"),
        popularity_rank: 65,
    },
    CatalogExercise {
        name: "Lat Pulldown",
        category: "Back",
        equipment: "Cable",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Lats"],
        secondary_muscles: &["Biceps", "Upper Back"],
        search_aliases: Some("pull down"),
        popularity_rank: 82,
    },
    CatalogExercise {
        name: "Pull Up",
        category: "Back",
        equipment: "Bodyweight",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Lats"],
        secondary_muscles: &["Biceps", "Upper Back"],
        search_aliases: Some("pullup chin up"),
        popularity_rank: 88,
    },
    CatalogExercise {
        name: "Squat",
        category: "Legs",
        equipment: "Barbell",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Quads", "Glutes"],
        secondary_muscles: &["Hamstrings", "Lower Back"],
        search_aliases: Some("back squat"),
        popularity_rank: 99,
    },
    CatalogExercise {
        name: "Front Squat",
        category: "Legs",
        equipment: "Barbell",
        difficulty: Difficulty::Advanced,
        primary_muscles: &["Quads"],
        secondary_muscles: &["Glutes", "Abs"],
        search_aliases: None,
        popularity_rank: 52,
    },
    CatalogExercise {
        name: "Goblet Squat",
        category: "Legs",
        equipment: "Kettlebell",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Quads", "Glutes"],
        secondary_muscles: &["Abs"],
        search_aliases: None,
        popularity_rank: 58,
    },
    CatalogExercise {
        name: "Leg Press",
        category: "Legs",
        equipment: "Machine",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Quads", "Glutes"],
        secondary_muscles: &["Hamstrings"],
        search_aliases: None,
        popularity_rank: 77,
    },
    CatalogExercise {
        name: "Leg Extension",
        category: "Legs",
        equipment: "Machine",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Quads"],
        secondary_muscles: &[],
        search_aliases: None,
        popularity_rank: 62,
    },
    CatalogExercise {
        name: "Lying Leg Curl",
        category: "Legs",
        equipment: "Machine",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Hamstrings"],
        secondary_muscles: &["Calves"],
        search_aliases: Some("hamstring curl"),
        popularity_rank: 61,
    },
    CatalogExercise {
        name: "Walking Lunges",
        category: "Legs",
        equipment: "Dumbbell",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Quads", "Glutes"],
        secondary_muscles: &["Hamstrings", "Calves"],
        search_aliases: None,
        popularity_rank: 57,
    },
    CatalogExercise {
        name: "Bulgarian Split Squat",
        category: "Legs",
        equipment: "Dumbbell",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Quads", "Glutes"],
        secondary_muscles: &["Hamstrings"],
        search_aliases: Some("rear foot elevated split squat"),
        popularity_rank: 56,
    },
    CatalogExercise {
        name: "Standing Calf Raise",
        category: "Legs",
        equipment: "Machine",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Calves"],
        secondary_muscles: &[],
        search_aliases: None,
        popularity_rank: 48,
    },
    CatalogExercise {
        name: "Hip Thrust",
        category: "Legs",
        equipment: "Barbell",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Glutes"],
        secondary_muscles: &["Hamstrings"],
        search_aliases: Some("glute bridge"),
        popularity_rank: 66,
    },
    CatalogExercise {
        name: "Overhead Press",
        category: "Shoulders",
        equipment: "Barbell",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Shoulders"],
        secondary_muscles: &["Triceps", "Upper Back"],
        search_aliases: Some("ohp military press shoulder press"),
        popularity_rank: 86,
    },
    CatalogExercise {
        name: "Dumbbell Shoulder Press",
        category: "Shoulders",
        equipment: "Dumbbell",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Shoulders"],
        secondary_muscles: &["Triceps"],
        search_aliases: Some("seated press"),
        popularity_rank: 72,
    },
    CatalogExercise {
        name: "Lateral Raise",
        category: "Shoulders",
        equipment: "Dumbbell",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Shoulders"],
        secondary_muscles: &[],
        search_aliases: Some("side raise"),
        popularity_rank: 74,
    },
    CatalogExercise {
        name: "Face Pull",
        category: "Shoulders",
        equipment: "Cable",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Shoulders", "Upper Back"],
        secondary_muscles: &["Biceps"],
        search_aliases: Some("rear delt pull"),
        popularity_rank: 54,
    },
    CatalogExercise {
        name: "Band Pull Apart",
        category: "Shoulders",
        equipment: "Band",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Shoulders", "Upper Back"],
        secondary_muscles: &[],
        search_aliases: None,
        popularity_rank: 35,
    },
    CatalogExercise {
        name: "Barbell Curl",
        category: "Arms",
        equipment: "Barbell",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Biceps"],
        secondary_muscles: &["Forearms"],
        search_aliases: Some("bicep curl"),
        popularity_rank: 76,
    },
    CatalogExercise {
        name: "Hammer Curl",
        category: "Arms",
        equipment: "Dumbbell",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Biceps", "Forearms"],
        secondary_muscles: &[],
        search_aliases: None,
        popularity_rank: 64,
    },
    CatalogExercise {
        name: "EZ-Bar Preacher Curl",
        category: "Arms",
        equipment: "EZ-Bar",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Biceps"],
        secondary_muscles: &[],
        search_aliases: Some("scott curl"),
        popularity_rank: 40,
    },
    CatalogExercise {
        name: "Tricep Pushdown",
        category: "Arms",
        equipment: "Cable",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Triceps"],
        secondary_muscles: &[],
        search_aliases: Some("rope pushdown tricep extension"),
        popularity_rank: 73,
    },
    CatalogExercise {
        name: "Skull Crusher",
        category: "Arms",
        equipment: "EZ-Bar",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Triceps"],
        secondary_muscles: &[],
        search_aliases: Some("lying tricep extension"),
        popularity_rank: 53,
    },
    CatalogExercise {
        name: "Kettlebell Swing",
        category: "Legs",
        equipment: "Kettlebell",
        difficulty: Difficulty::Intermediate,
        primary_muscles: &["Glutes", "Hamstrings"],
        secondary_muscles: &["Lower Back", "Shoulders"],
        search_aliases: None,
        popularity_rank: 59,
    },
    CatalogExercise {
        name: "Plank",
        category: "Core",
        equipment: "Bodyweight",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Abs"],
        secondary_muscles: &["Shoulders"],
        search_aliases: Some("front hold"),
        popularity_rank: 79,
    },
    CatalogExercise {
        name: "Hanging Leg Raise",
        category: "Core",
        equipment: "Bodyweight",
        difficulty: Difficulty::Advanced,
        primary_muscles: &["Abs"],
        secondary_muscles: &["Forearms"],
        search_aliases: None,
        popularity_rank: 47,
    },
    CatalogExercise {
        name: "Cable Crunch",
        category: "Core",
        equipment: "Cable",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Abs"],
        secondary_muscles: &[],
        search_aliases: Some("kneeling crunch"),
        popularity_rank: 44,
    },
    CatalogExercise {
        name: "Russian Twist",
        category: "Core",
        equipment: "Bodyweight",
        difficulty: Difficulty::Beginner,
        primary_muscles: &["Abs"],
        secondary_muscles: &[],
        search_aliases: Some("oblique twist"),
        popularity_rank: 42,
    },
];
