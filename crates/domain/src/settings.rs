use crate::fuzzy::DEFAULT_MAX_DISTANCE;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of search results returned by the service.
    pub result_limit: Option<usize>,
    /// Number of edits a query term may differ from a word and still count as similar.
    pub fuzzy_max_distance: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            result_limit: None,
            fuzzy_max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}
