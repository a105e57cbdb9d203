//! Override-prototype extraction.
//!
//! An override prototype carries per-identifier placement constraints for
//! one object kind (tree, detail, prop, deposit). The document shape is a
//! list of entries (or a single bare entry), each keyed by an `id`
//! attribute; the normalized shape is a map from validated id to
//! [`OverridePrototype`]. Entries whose id is missing or not on the kind's
//! whitelist are skipped silently -- documents routinely carry legacy or
//! unrelated entries and a bad one must not poison its neighbors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract::NumericSpec;
use crate::registry;
use crate::tree::{Node, get};

/// Placement constraints for one whitelisted object id. Pair fields hold
/// `(min, max)` with `min <= max` guaranteed after normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverridePrototype {
    pub density: Option<f64>,
    pub altitude: Option<(i32, i32)>,
    pub humidity: Option<(f64, f64)>,
    pub angle: Option<(i32, i32)>,
}

impl OverridePrototype {
    /// True when no constraint survived extraction. Such a record still
    /// counts as an override for its id (the entry was present and valid).
    pub fn is_unconstrained(&self) -> bool {
        self.density.is_none()
            && self.altitude.is_none()
            && self.humidity.is_none()
            && self.angle.is_none()
    }
}

/// Root path and id whitelist for one override kind.
#[derive(Debug, Clone, Copy)]
pub struct OverrideSpec<'a> {
    pub root: &'a str,
    pub allow: &'a [&'a str],
}

/// Extract the id-keyed override map for one kind. Absent root yields
/// `None`; a present root whose entries all fail validation yields
/// `Some(empty)` -- a vacuous but valid result.
pub fn override_map(
    tree: &Node,
    spec: &OverrideSpec<'_>,
) -> Option<BTreeMap<String, OverridePrototype>> {
    let root = get(tree, spec.root)?;
    let mut map = BTreeMap::new();
    for entry in root.entries() {
        let Some(id) = get(entry, "id").and_then(Node::as_text) else {
            continue;
        };
        if !spec.allow.contains(&id) {
            continue;
        }
        // The id becomes the map key, not a payload field.
        map.insert(
            id.to_string(),
            OverridePrototype {
                density: attr_number(entry, "density").map(|v| registry::DENSITY.normalize(v)),
                altitude: int_pair(entry, "min_altitude", "max_altitude", &registry::ALTITUDE),
                humidity: repair_pair(
                    attr_number(entry, "min_humidity"),
                    attr_number(entry, "max_humidity"),
                    &registry::HUMIDITY,
                ),
                angle: int_pair(entry, "min_angle", "max_angle", &registry::ANGLE),
            },
        );
    }
    Some(map)
}

/// Repair one `(min, max)` group. A missing side is synthesized from the
/// group's documented default bound; an inverted pair is swapped so
/// `min <= max` holds (swap, not clamp-to-min: both raw values survive).
pub fn repair_pair(
    min: Option<f64>,
    max: Option<f64>,
    spec: &NumericSpec,
) -> Option<(f64, f64)> {
    let (raw_min, raw_max) = match (min, max) {
        (None, None) => return None,
        (Some(lo), None) => (lo, spec.max),
        (None, Some(hi)) => (spec.min, hi),
        (Some(lo), Some(hi)) => (lo, hi),
    };
    let mut lo = spec.normalize(raw_min);
    let mut hi = spec.normalize(raw_max);
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    Some((lo, hi))
}

fn attr_number(entry: &Node, key: &str) -> Option<f64> {
    get(entry, key)?.as_number()
}

fn int_pair(entry: &Node, min_key: &str, max_key: &str, spec: &NumericSpec) -> Option<(i32, i32)> {
    repair_pair(attr_number(entry, min_key), attr_number(entry, max_key), spec)
        .map(|(lo, hi)| (lo as i32, hi as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREES: OverrideSpec<'static> = OverrideSpec {
        root: "tree_override_prototypes.tree_override_prototype",
        allow: &registry::TREES,
    };

    fn wrap(entries: Node) -> Node {
        Node::attrs([(
            "tree_override_prototypes",
            Node::attrs([("tree_override_prototype", entries)]),
        )])
    }

    #[test]
    fn whitelisted_entries_survive_invalid_ones_are_skipped() {
        let tree = wrap(Node::list(vec![
            Node::attrs([("id", Node::text("Oak")), ("density", Node::number(0.5))]),
            Node::attrs([("id", Node::text("NotATree")), ("density", Node::number(0.9))]),
        ]));
        let map = override_map(&tree, &TREES).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["Oak"].density, Some(0.5));
    }

    #[test]
    fn entry_missing_id_contributes_nothing() {
        let tree = wrap(Node::list(vec![Node::attrs([(
            "density",
            Node::number(0.5),
        )])]));
        let map = override_map(&tree, &TREES).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn single_bare_entry_is_treated_as_one_element_list() {
        let tree = wrap(Node::attrs([
            ("id", Node::text("Pine")),
            ("min_altitude", Node::number(40.0)),
        ]));
        let map = override_map(&tree, &TREES).unwrap();
        assert_eq!(map["Pine"].altitude, Some((40, 250)));
    }

    #[test]
    fn absent_root_is_none_empty_map_is_some() {
        let absent = Node::attrs([("environment", Node::attrs([]))]);
        assert_eq!(override_map(&absent, &TREES), None);

        let empty = wrap(Node::list(vec![]));
        assert_eq!(override_map(&empty, &TREES), Some(BTreeMap::new()));
    }

    #[test]
    fn inverted_pair_is_swapped() {
        let tree = wrap(Node::attrs([
            ("id", Node::text("Oak")),
            ("min_angle", Node::number(50.0)),
            ("max_angle", Node::number(10.0)),
        ]));
        let map = override_map(&tree, &TREES).unwrap();
        assert_eq!(map["Oak"].angle, Some((10, 50)));
    }

    #[test]
    fn missing_pair_side_is_filled_from_group_default() {
        let tree = wrap(Node::attrs([
            ("id", Node::text("Oak")),
            ("max_humidity", Node::number(0.6)),
            ("min_angle", Node::number(20.0)),
        ]));
        let map = override_map(&tree, &TREES).unwrap();
        assert_eq!(map["Oak"].humidity, Some((0.0, 0.6)));
        assert_eq!(map["Oak"].angle, Some((20, 90)));
    }

    #[test]
    fn pair_values_are_clamped_into_group_range() {
        let tree = wrap(Node::attrs([
            ("id", Node::text("Oak")),
            ("min_altitude", Node::number(-30.0)),
            ("max_altitude", Node::number(999.0)),
        ]));
        let map = override_map(&tree, &TREES).unwrap();
        assert_eq!(map["Oak"].altitude, Some((0, 250)));
    }

    #[test]
    fn entry_with_only_id_is_unconstrained_but_present() {
        let tree = wrap(Node::attrs([("id", Node::text("Willow"))]));
        let map = override_map(&tree, &TREES).unwrap();
        assert!(map["Willow"].is_unconstrained());
    }

    #[test]
    fn repair_pair_none_sides_stay_absent() {
        assert_eq!(repair_pair(None, None, &registry::ANGLE), None);
    }

    #[test]
    fn deposit_kind_uses_its_own_whitelist() {
        let spec = OverrideSpec {
            root: "deposit_override_prototypes.deposit_override_prototype",
            allow: &registry::DEPOSITS,
        };
        let tree = Node::attrs([(
            "deposit_override_prototypes",
            Node::attrs([(
                "deposit_override_prototype",
                Node::list(vec![
                    Node::attrs([("id", Node::text("Iron")), ("density", Node::number(1.4))]),
                    Node::attrs([("id", Node::text("Oak"))]),
                ]),
            )]),
        )]);
        let map = override_map(&tree, &spec).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["Iron"].density, Some(1.0));
    }
}
