use std::collections::HashMap;

use log::{debug, warn};

use crate::{Exercise, ExerciseID, fuzzy::levenshtein};

// Multi-word prefixes must precede their single-word suffixes.
pub const EQUIPMENT_PREFIXES: [&str; 12] = [
    "barbell",
    "dumbbell",
    "cable",
    "machine",
    "smith machine",
    "smith",
    "kettlebell",
    "resistance band",
    "band",
    "ez-bar",
    "ez bar",
    "trap bar",
];

const PARTIAL_MATCH_SCORE: f64 = 80.0;
const MAX_FUZZY_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Exact,
    Normalized,
    Partial,
    Fuzzy,
}

#[must_use]
pub fn normalize_name(name: &str) -> String {
    let name = name.trim().to_lowercase();
    let name = EQUIPMENT_PREFIXES
        .iter()
        .find_map(|prefix| {
            name.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix(' '))
        })
        .unwrap_or(name.as_str());
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tries the tiers exact, normalized, partial and fuzzy in this order.
#[must_use]
pub fn find_exercise_by_name<'a>(name: &str, catalog: &'a [Exercise]) -> Option<&'a Exercise> {
    if name.trim().is_empty() {
        return None;
    }

    let candidate = Candidate::new(name);

    let (tier, exercise) = exact(&candidate, catalog)
        .map(|e| (Tier::Exact, e))
        .or_else(|| normalized(&candidate, catalog).map(|e| (Tier::Normalized, e)))
        .or_else(|| partial(&candidate, catalog).map(|e| (Tier::Partial, e)))
        .or_else(|| fuzzy(&candidate, catalog).map(|e| (Tier::Fuzzy, e)))?;

    debug!(
        "resolved \"{name}\" to \"{}\" ({tier:?})",
        exercise.name
    );

    Some(exercise)
}

#[must_use]
pub fn match_exercise_names<S: AsRef<str>>(
    names: &[S],
    catalog: &[Exercise],
) -> HashMap<String, ExerciseID> {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            if let Some(exercise) = find_exercise_by_name(name, catalog) {
                Some((name.to_string(), exercise.id))
            } else {
                warn!("no exercise found for \"{name}\"");
                None
            }
        })
        .collect()
}

struct Candidate {
    lowercase: String,
    normalized: String,
    len: usize,
}

impl Candidate {
    fn new(name: &str) -> Self {
        Self {
            lowercase: name.to_lowercase(),
            normalized: normalize_name(name),
            len: name.chars().count(),
        }
    }
}

fn exact<'a>(candidate: &Candidate, catalog: &'a [Exercise]) -> Option<&'a Exercise> {
    catalog
        .iter()
        .find(|e| e.name.to_lowercase() == candidate.lowercase)
}

fn normalized<'a>(candidate: &Candidate, catalog: &'a [Exercise]) -> Option<&'a Exercise> {
    catalog
        .iter()
        .find(|e| normalize_name(e.name.as_ref()) == candidate.normalized)
}

fn partial<'a>(candidate: &Candidate, catalog: &'a [Exercise]) -> Option<&'a Exercise> {
    let mut best: Option<(f64, &Exercise)> = None;

    for exercise in catalog {
        if !(exercise.name.to_lowercase().contains(&candidate.lowercase)
            || normalize_name(exercise.name.as_ref()).contains(&candidate.normalized))
        {
            continue;
        }

        let score = partial_score(exercise.name.len(), candidate.len);

        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, exercise));
        }
    }

    best.map(|(_, exercise)| exercise)
}

#[allow(clippy::cast_precision_loss)]
fn partial_score(name_len: usize, input_len: usize) -> f64 {
    PARTIAL_MATCH_SCORE / (name_len.abs_diff(input_len) + 1) as f64
}

fn fuzzy<'a>(candidate: &Candidate, catalog: &'a [Exercise]) -> Option<&'a Exercise> {
    let mut best: Option<(usize, &Exercise)> = None;

    for exercise in catalog {
        let distance = levenshtein(&candidate.lowercase, &exercise.name.to_lowercase()).min(
            levenshtein(&candidate.normalized, &normalize_name(exercise.name.as_ref())),
        );

        if distance == 0 || distance > MAX_FUZZY_DISTANCE {
            continue;
        }

        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, exercise));
        }
    }

    best.map(|(_, exercise)| exercise)
}
