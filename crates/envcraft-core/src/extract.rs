//! Primitive extractors shared by every field parser.
//!
//! Common contract: given a tree and a root path, a missing root yields
//! `None` (absence, not an error); a present value is validated and
//! transformed. Malformed values are dropped at the smallest granularity --
//! a list that violates its bounds is discarded wholesale rather than
//! truncated, so a malformed document never silently degrades.

use crate::tree::{Node, get};

// ---------------------------------------------------------------------------
// Numeric normalization
// ---------------------------------------------------------------------------

/// Documented range and precision of one numeric knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSpec {
    pub min: f64,
    pub max: f64,
    pub decimals: u32,
}

impl NumericSpec {
    pub const fn new(min: f64, max: f64, decimals: u32) -> Self {
        Self { min, max, decimals }
    }

    /// Clamp into `[min, max]`. Idempotent; NaN collapses to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Clamp, then round to the documented precision. Emitters format at
    /// the same precision, so normalize-emit-normalize is a fixed point.
    pub fn normalize(&self, value: f64) -> f64 {
        round_to(self.clamp(value), self.decimals)
    }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

// ---------------------------------------------------------------------------
// Scalar extractors
// ---------------------------------------------------------------------------

/// Numeric value at `path`, untransformed.
pub fn numeric_raw(tree: &Node, path: &str) -> Option<f64> {
    get(tree, path)?.as_number()
}

/// Numeric value at `path` through an injectable transform.
pub fn numeric_with<F>(tree: &Node, path: &str, transform: F) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    numeric_raw(tree, path).map(transform)
}

/// Numeric value at `path`, normalized against `spec`.
pub fn numeric(tree: &Node, path: &str, spec: &NumericSpec) -> Option<f64> {
    numeric_with(tree, path, |v| spec.normalize(v))
}

/// Boolean value at `path`. Anything other than a genuine boolean scalar is
/// treated as absent.
pub fn boolean(tree: &Node, path: &str) -> Option<bool> {
    get(tree, path)?.as_bool()
}

// ---------------------------------------------------------------------------
// List extractors
// ---------------------------------------------------------------------------

/// Item-count bounds and delimiter of one list-shaped knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListSpec {
    pub delimiter: char,
    pub min_items: usize,
    pub max_items: usize,
}

impl ListSpec {
    pub const fn items(min_items: usize, max_items: usize) -> Self {
        Self {
            delimiter: ' ',
            min_items,
            max_items,
        }
    }
}

/// Delimited identifier list at `path`: split, trim, keep only tokens the
/// injectable predicate accepts, de-duplicate preserving order, then enforce
/// the item bounds. All-or-nothing: a surviving list outside
/// `min_items..=max_items` (or empty) is absent, never truncated.
pub fn string_list<F>(tree: &Node, path: &str, spec: &ListSpec, keep: F) -> Option<Vec<String>>
where
    F: Fn(&str) -> bool,
{
    let raw = get(tree, path)?.as_text()?;
    let items = dedupe(
        raw.split(spec.delimiter)
            .map(str::trim)
            .filter(|t| !t.is_empty() && keep(t))
            .map(String::from)
            .collect(),
    );
    bounded(items, spec)
}

/// Delimited numeric list at `path`, each token normalized against
/// `numeric_spec`. Unparseable tokens are filtered out before the bounds
/// check, so a corrupt token fails the whole list.
pub fn split_numeric_list(
    tree: &Node,
    path: &str,
    spec: &ListSpec,
    numeric_spec: &NumericSpec,
) -> Option<Vec<f64>> {
    let raw = get(tree, path)?.as_text()?;
    let items = raw
        .split(spec.delimiter)
        .map(str::trim)
        .filter_map(|t| t.parse::<f64>().ok())
        .map(|v| numeric_spec.normalize(v))
        .collect();
    bounded(items, spec)
}

/// Numeric list from repeated element cells (`<cell value="…"/>` nodes) at
/// `path`, with the same bounds policy.
pub fn numeric_list(
    tree: &Node,
    path: &str,
    spec: &ListSpec,
    numeric_spec: &NumericSpec,
) -> Option<Vec<f64>> {
    let root = get(tree, path)?;
    let items = root
        .entries()
        .into_iter()
        .filter_map(|cell| get(cell, "value")?.as_number())
        .map(|v| numeric_spec.normalize(v))
        .collect();
    bounded(items, spec)
}

fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

fn bounded<T>(items: Vec<T>, spec: &ListSpec) -> Option<Vec<T>> {
    if items.is_empty() || items.len() < spec.min_items || items.len() > spec.max_items {
        return None;
    }
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTOR: NumericSpec = NumericSpec::new(0.1, 10.0, 2);

    fn env(key: &str, node: Node) -> Node {
        Node::attrs([(key, Node::attrs([("value", node)]))])
    }

    // -----------------------------------------------------------------------
    // Numeric
    // -----------------------------------------------------------------------

    #[test]
    fn numeric_clamps_and_rounds() {
        let tree = env("resource_factor", Node::number(12.347));
        assert_eq!(numeric(&tree, "resource_factor.value", &FACTOR), Some(10.0));

        let tree = env("resource_factor", Node::number(1.348));
        assert_eq!(numeric(&tree, "resource_factor.value", &FACTOR), Some(1.35));
    }

    #[test]
    fn numeric_absent_root_is_none() {
        let tree = env("resource_factor", Node::number(1.0));
        assert_eq!(numeric(&tree, "other_factor.value", &FACTOR), None);
    }

    #[test]
    fn numeric_raw_is_untransformed() {
        let tree = env("resource_factor", Node::number(99.123));
        assert_eq!(numeric_raw(&tree, "resource_factor.value"), Some(99.123));
    }

    #[test]
    fn numeric_nan_collapses_to_min() {
        assert_eq!(FACTOR.normalize(f64::NAN), 0.1);
    }

    #[test]
    fn clamp_is_idempotent() {
        for v in [-5.0, 0.1, 3.3, 10.0, 99.0] {
            assert_eq!(FACTOR.clamp(FACTOR.clamp(v)), FACTOR.clamp(v));
        }
    }

    // -----------------------------------------------------------------------
    // Boolean
    // -----------------------------------------------------------------------

    #[test]
    fn boolean_passes_through_genuine_bools_only() {
        let tree = env("trees_everywhere", Node::boolean(true));
        assert_eq!(boolean(&tree, "trees_everywhere.value"), Some(true));

        let tree = env("trees_everywhere", Node::text("yes"));
        assert_eq!(boolean(&tree, "trees_everywhere.value"), None);

        let tree = env("trees_everywhere", Node::number(1.0));
        assert_eq!(boolean(&tree, "trees_everywhere.value"), None);
    }

    // -----------------------------------------------------------------------
    // String list
    // -----------------------------------------------------------------------

    const FOUR: ListSpec = ListSpec::items(1, 4);
    const ALLOWED: [&str; 5] = ["Flint", "Tin", "Copper", "Iron", "Gold"];

    fn deposits(raw: &str) -> Option<Vec<String>> {
        let tree = Node::attrs([("deposits", Node::attrs([("values", Node::text(raw))]))]);
        string_list(&tree, "deposits.values", &FOUR, |id| ALLOWED.contains(&id))
    }

    #[test]
    fn string_list_splits_trims_and_filters() {
        assert_eq!(
            deposits("  Flint   Slate Tin "),
            Some(vec!["Flint".to_string(), "Tin".to_string()])
        );
    }

    #[test]
    fn string_list_over_max_is_absent_not_truncated() {
        assert_eq!(deposits("Flint Tin Copper Iron Gold"), None);
    }

    #[test]
    fn string_list_all_filtered_is_absent() {
        assert_eq!(deposits("Slate Granite"), None);
    }

    #[test]
    fn string_list_dedupes_preserving_order() {
        assert_eq!(
            deposits("Tin Flint Tin"),
            Some(vec!["Tin".to_string(), "Flint".to_string()])
        );
    }

    #[test]
    fn string_list_under_min_is_absent() {
        let tree = Node::attrs([("trees", Node::attrs([("values", Node::text("Oak"))]))]);
        let spec = ListSpec::items(2, 4);
        assert_eq!(string_list(&tree, "trees.values", &spec, |_| true), None);
    }

    // -----------------------------------------------------------------------
    // Numeric lists
    // -----------------------------------------------------------------------

    const UNIT: NumericSpec = NumericSpec::new(0.0, 1.0, 2);

    #[test]
    fn split_numeric_list_normalizes_each_token() {
        let tree = Node::attrs([(
            "noise_amplitudes",
            Node::attrs([("values", Node::text("0.1 1.7 0.333"))]),
        )]);
        let spec = ListSpec::items(3, 3);
        assert_eq!(
            split_numeric_list(&tree, "noise_amplitudes.values", &spec, &UNIT),
            Some(vec![0.1, 1.0, 0.33])
        );
    }

    #[test]
    fn split_numeric_list_corrupt_token_fails_whole_list() {
        let tree = Node::attrs([(
            "backdrop_scale",
            Node::attrs([("value", Node::text("1 x 1"))]),
        )]);
        let spec = ListSpec::items(3, 3);
        assert_eq!(
            split_numeric_list(&tree, "backdrop_scale.value", &spec, &UNIT),
            None
        );
    }

    #[test]
    fn numeric_list_reads_value_cells() {
        let tree = Node::attrs([(
            "noise_amplitudes",
            Node::attrs([(
                "noise_amplitude",
                Node::list(vec![
                    Node::attrs([("value", Node::number(0.25))]),
                    Node::attrs([("value", Node::number(2.0))]),
                ]),
            )]),
        )]);
        let spec = ListSpec::items(2, 2);
        assert_eq!(
            numeric_list(&tree, "noise_amplitudes.noise_amplitude", &spec, &UNIT),
            Some(vec![0.25, 1.0])
        );
    }

    #[test]
    fn numeric_list_cell_missing_value_fails_bounds() {
        let tree = Node::attrs([(
            "noise_amplitudes",
            Node::attrs([(
                "noise_amplitude",
                Node::list(vec![
                    Node::attrs([("value", Node::number(0.25))]),
                    Node::attrs([("other", Node::number(0.5))]),
                ]),
            )]),
        )]);
        let spec = ListSpec::items(2, 2);
        assert_eq!(
            numeric_list(&tree, "noise_amplitudes.noise_amplitude", &spec, &UNIT),
            None
        );
    }
}
