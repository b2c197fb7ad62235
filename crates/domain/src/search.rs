use std::collections::BTreeMap;

use log::debug;

use crate::{
    Difficulty, Exercise, SearchFilters, Settings,
    fuzzy::{fuzzy_match, stem, terms},
};

pub const EQUIPMENT_KEYWORDS: [&str; 8] = [
    "machine",
    "cable",
    "barbell",
    "dumbbell",
    "kettlebell",
    "band",
    "bodyweight",
    "ez-bar",
];

const NAME_MATCH: f64 = 30.0;
const NAME_PREFIX_MATCH: f64 = 15.0;
const ALIAS_MATCH: f64 = 25.0;
const NAME_WORD_SIMILARITY: f64 = 20.0;
const NAME_WORD_SIMILARITY_THRESHOLD: f64 = 0.6;
const PRIMARY_MUSCLE_MATCH: f64 = 20.0;
const CATEGORY_MATCH: f64 = 15.0;
const REQUESTED_EQUIPMENT_MATCH: f64 = 30.0;
const EQUIPMENT_MATCH: f64 = 10.0;
const EQUIPMENT_SIMILARITY_THRESHOLD: f64 = 0.7;
const SECONDARY_MUSCLE_MATCH: f64 = 5.0;
const EQUIPMENT_MISMATCH_FACTOR: f64 = 0.5;
const MULTI_TERM_BONUS: f64 = 20.0;
const POPULARITY_WEIGHT: f64 = 0.003;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Exact,
    Fuzzy,
    Alias,
    Idle,
}

impl MatchType {
    // alias > fuzzy > exact
    fn promote(self, other: MatchType) -> MatchType {
        if other.precedence() > self.precedence() {
            other
        } else {
            self
        }
    }

    fn precedence(self) -> u8 {
        match self {
            MatchType::Exact | MatchType::Idle => 0,
            MatchType::Fuzzy => 1,
            MatchType::Alias => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub exercise: Exercise,
    pub score: f64,
    pub match_type: MatchType,
}

impl SearchResult {
    #[must_use]
    pub fn is_suggestion(&self) -> bool {
        self.match_type == MatchType::Fuzzy
    }
}

/// An empty query lists the whole catalog by popularity.
#[must_use]
pub fn search_exercises(
    catalog: &[Exercise],
    query: &str,
    filters: Option<&SearchFilters>,
) -> Vec<SearchResult> {
    search_exercises_with_settings(catalog, query, filters, &Settings::default())
}

#[must_use]
pub fn search_exercises_with_settings(
    catalog: &[Exercise],
    query: &str,
    filters: Option<&SearchFilters>,
    settings: &Settings,
) -> Vec<SearchResult> {
    let terms = terms(query);

    let mut results = if terms.is_empty() {
        catalog
            .iter()
            .map(|exercise| SearchResult {
                exercise: exercise.clone(),
                score: exercise.popularity_rank.map(f64::from).unwrap_or_default(),
                match_type: MatchType::Idle,
            })
            .collect::<Vec<_>>()
    } else {
        let query = Query::new(terms, settings.fuzzy_max_distance);
        catalog
            .iter()
            .filter_map(|exercise| query.score(exercise))
            .collect::<Vec<_>>()
    };

    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(filters) = filters {
        results.retain(|result| filters.matches(&result.exercise));
    }

    if let Some(limit) = settings.result_limit {
        results.truncate(limit);
    }

    debug!("search for \"{query}\" yielded {} results", results.len());

    results
}

struct Query {
    terms: Vec<String>,
    max_distance: usize,
    has_equipment: bool,
}

impl Query {
    fn new(terms: Vec<String>, max_distance: usize) -> Self {
        let has_equipment = terms.iter().any(|term| {
            EQUIPMENT_KEYWORDS.iter().any(|keyword| {
                term.contains(keyword)
                    || keyword.contains(term.as_str())
                    || fuzzy_match(term, keyword, max_distance) >= EQUIPMENT_SIMILARITY_THRESHOLD
            })
        });
        Self {
            terms,
            max_distance,
            has_equipment,
        }
    }

    fn score(&self, exercise: &Exercise) -> Option<SearchResult> {
        let fields = Fields::new(exercise);
        let relevance = self
            .terms
            .iter()
            .map(|term| self.score_term(term, &fields))
            .fold(Relevance::default(), Relevance::combine);

        let mut score = relevance.score;

        if self.has_equipment && !relevance.equipment_matched {
            score *= EQUIPMENT_MISMATCH_FACTOR;
        }

        if score <= 0.0 {
            return None;
        }

        if self.terms.len() > 1 {
            score += MULTI_TERM_BONUS;
        }

        score += exercise
            .popularity_rank
            .map(|rank| f64::from(rank) * POPULARITY_WEIGHT)
            .unwrap_or_default();

        Some(SearchResult {
            exercise: exercise.clone(),
            score,
            match_type: relevance.match_type,
        })
    }

    fn score_term(&self, term: &str, fields: &Fields) -> Relevance {
        let mut relevance = Relevance::default();

        if fields.name.contains(term) {
            relevance.score += NAME_MATCH;
            if fields.name.starts_with(term) {
                relevance.score += NAME_PREFIX_MATCH;
            }
        }

        if fields
            .aliases
            .as_ref()
            .is_some_and(|aliases| aliases.contains(term))
        {
            relevance.score += ALIAS_MATCH;
            relevance.match_type = MatchType::Alias;
        }

        let similarity = fields
            .name_words
            .iter()
            .map(|word| fuzzy_match(term, word, self.max_distance))
            .fold(0.0, f64::max);
        if similarity > NAME_WORD_SIMILARITY_THRESHOLD {
            relevance.score += similarity * NAME_WORD_SIMILARITY;
            if similarity < 1.0 {
                relevance.match_type = relevance.match_type.promote(MatchType::Fuzzy);
            }
        }

        relevance.score += count_containing(&fields.primary_muscles, term) * PRIMARY_MUSCLE_MATCH;

        if fields.category.contains(term) {
            relevance.score += CATEGORY_MATCH;
        }

        if fields.equipment.contains(term) {
            relevance.score += if self.has_equipment {
                REQUESTED_EQUIPMENT_MATCH
            } else {
                EQUIPMENT_MATCH
            };
            relevance.equipment_matched = true;
        } else if let Some(similarity) = fields
            .equipment_words
            .iter()
            .map(|word| fuzzy_match(term, word, self.max_distance))
            .find(|similarity| *similarity >= EQUIPMENT_SIMILARITY_THRESHOLD)
        {
            relevance.score += if self.has_equipment {
                similarity * REQUESTED_EQUIPMENT_MATCH
            } else {
                EQUIPMENT_MATCH
            };
            relevance.equipment_matched = true;
        }

        relevance.score +=
            count_containing(&fields.secondary_muscles, term) * SECONDARY_MUSCLE_MATCH;

        relevance
    }
}

struct Fields {
    name: String,
    name_words: Vec<String>,
    aliases: Option<String>,
    primary_muscles: Vec<String>,
    category: String,
    equipment: String,
    equipment_words: Vec<String>,
    secondary_muscles: Vec<String>,
}

impl Fields {
    fn new(exercise: &Exercise) -> Self {
        let name = exercise.name.to_lowercase();
        let equipment = exercise.equipment.to_lowercase();
        Self {
            name_words: name.split_whitespace().map(stem).collect(),
            name,
            aliases: exercise
                .search_aliases
                .as_ref()
                .map(|aliases| aliases.to_lowercase()),
            primary_muscles: exercise
                .primary_muscles
                .iter()
                .map(|m| m.to_lowercase())
                .collect(),
            category: exercise.category.to_lowercase(),
            equipment_words: equipment
                .split(|c: char| c.is_whitespace() || c == '-')
                .filter(|word| !word.is_empty())
                .map(ToString::to_string)
                .collect(),
            equipment,
            secondary_muscles: exercise
                .secondary_muscles
                .iter()
                .map(|m| m.to_lowercase())
                .collect(),
        }
    }
}

struct Relevance {
    score: f64,
    equipment_matched: bool,
    match_type: MatchType,
}

impl Default for Relevance {
    fn default() -> Self {
        Self {
            score: 0.0,
            equipment_matched: false,
            match_type: MatchType::Exact,
        }
    }
}

impl Relevance {
    fn combine(self, other: Relevance) -> Relevance {
        Relevance {
            score: self.score + other.score,
            equipment_matched: self.equipment_matched || other.equipment_matched,
            match_type: self.match_type.promote(other.match_type),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn count_containing(labels: &[String], term: &str) -> f64 {
    labels.iter().filter(|label| label.contains(term)).count() as f64
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Primary and secondary muscles combined.
    pub muscles: BTreeMap<String, usize>,
    pub equipment: BTreeMap<String, usize>,
    pub difficulty: BTreeMap<Difficulty, usize>,
    pub category: BTreeMap<String, usize>,
}

#[must_use]
pub fn filter_options(catalog: &[Exercise]) -> FilterOptions {
    let mut options = FilterOptions::default();

    for exercise in catalog {
        for muscle in exercise.muscles() {
            count(&mut options.muscles, muscle);
        }
        count(&mut options.equipment, &exercise.equipment);
        *options.difficulty.entry(exercise.difficulty).or_default() += 1;
        count(&mut options.category, &exercise.category);
    }

    options
}

fn count(counts: &mut BTreeMap<String, usize>, label: &str) {
    if !label.is_empty() {
        *counts.entry(label.to_string()).or_default() += 1;
    }
}
