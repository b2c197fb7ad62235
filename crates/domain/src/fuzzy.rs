pub const DEFAULT_MAX_DISTANCE: usize = 2;

const STEM_RULES: [(usize, &str, &str); 4] = [
    (4, "ies", "y"),
    (3, "es", ""),
    (2, "s", ""),
    (4, "ing", ""),
];

/// Edit distance between `a` and `b`, counted in characters.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();

    let mut matrix = vec![vec![0; a.len() + 1]; b.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            matrix[i][j] = if b[i - 1] == a[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + matrix[i - 1][j - 1]
                    .min(matrix[i][j - 1])
                    .min(matrix[i - 1][j])
            };
        }
    }

    matrix[b.len()][a.len()]
}

#[must_use]
pub fn fuzzy_match(query: &str, target: &str, max_distance: usize) -> f64 {
    let distance = levenshtein(query, target);

    if distance == 0 {
        return 1.0;
    }

    if distance > max_distance {
        return 0.0;
    }

    match distance {
        1 => 0.9,
        2 => 0.7,
        _ => 0.0,
    }
}

/// Only the first applicable suffix rule is applied.
#[must_use]
pub fn stem(word: &str) -> String {
    let len = word.chars().count();

    STEM_RULES
        .iter()
        .find_map(|(min_len, suffix, replacement)| {
            if len > *min_len {
                word.strip_suffix(*suffix)
                    .map(|base| format!("{base}{replacement}"))
            } else {
                None
            }
        })
        .unwrap_or_else(|| word.to_string())
}

#[must_use]
pub fn terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|word| stem(&word.to_lowercase()))
        .filter(|term| !term.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("kitten", "sitting", 3)]
    #[case("", "", 0)]
    #[case("", "squat", 5)]
    #[case("squat", "", 5)]
    #[case("bench", "bench", 0)]
    #[case("bensh", "bench", 1)]
    #[case("deadlift", "deadlitf", 2)]
    #[case("flys", "flies", 2)]
    #[case("überzug", "uberzug", 1)]
    fn test_levenshtein(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(levenshtein(a, b), expected);
        assert_eq!(levenshtein(b, a), expected);
    }

    #[test]
    fn test_levenshtein_agrees_with_strsim() {
        let words = [
            "row", "rows", "curl", "curls", "press", "pres", "bench", "pull up", "pullup",
            "lunge", "lunges", "kettlebell", "ketlebell", "",
        ];

        for a in words {
            for b in words {
                assert_eq!(levenshtein(a, b), strsim::levenshtein(a, b), "{a:?} {b:?}");
            }
        }
    }

    #[rstest]
    #[case("bench", "bench", 1.0)]
    #[case("bensh", "bench", 0.9)]
    #[case("bnsh", "bench", 0.7)]
    #[case("bxnsx", "bench", 0.0)]
    #[case("squat", "bench", 0.0)]
    fn test_fuzzy_match(#[case] query: &str, #[case] target: &str, #[case] expected: f64) {
        assert_approx_eq!(fuzzy_match(query, target, DEFAULT_MAX_DISTANCE), expected);
    }

    #[test]
    fn test_fuzzy_match_respects_max_distance() {
        assert_approx_eq!(fuzzy_match("bnsh", "bench", 1), 0.0);
        assert_approx_eq!(fuzzy_match("bensh", "bench", 1), 0.9);
        assert_approx_eq!(fuzzy_match("bench", "bench", 0), 1.0);
        assert_approx_eq!(fuzzy_match("bxnsx", "bench", 5), 0.0);
    }

    #[rstest]
    #[case("flies", "fly")]
    #[case("presses", "press")]
    #[case("curls", "curl")]
    #[case("press", "pres")]
    #[case("rowing", "row")]
    #[case("lifting", "lift")]
    #[case("ties", "ti")]
    #[case("yes", "ye")]
    #[case("es", "es")]
    #[case("abs", "ab")]
    #[case("as", "as")]
    #[case("ring", "ring")]
    #[case("squat", "squat")]
    #[case("és", "és")]
    #[case("ñes", "ñe")]
    #[case("cafés", "café")]
    #[case("añes", "añ")]
    fn test_stem(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(stem(word), expected);
    }

    #[test]
    fn test_terms() {
        assert_eq!(terms("  Dumbbell   Curls "), vec!["dumbbell", "curl"]);
        assert_eq!(terms("FLIES"), vec!["fly"]);
        assert!(terms(" \t ").is_empty());
    }
}
