//! Static importance scores derived from document paths.

/// Rules checked top-down; the first rule with a matching substring decides the score.
const PRIORITY_RULES: &[(i32, &[&str])] = &[
    (
        10,
        &[
            "index.md",
            "getting-started",
            "installation",
            "configuration",
        ],
    ),
    (
        8,
        &[
            "1_index.md",
            "2_installation",
            "modules",
            "routing",
            "controllers",
            "models",
        ],
    ),
    (5, &["forms", "database", "authentication", "components"]),
];

/// Score for paths matching no rule.
pub const DEFAULT_PRIORITY: i32 = 2;

/// Importance of a document from its logical path: one of 10, 8, 5 or 2.
///
/// Overview pages (index, getting started, installation, configuration) rank highest,
/// core concept pages next, common feature areas after that.
pub fn path_priority(logical_path: &str) -> i32 {
    let path = logical_path.to_lowercase();
    PRIORITY_RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| path.contains(needle)))
        .map_or(DEFAULT_PRIORITY, |(score, _)| *score)
}
