//! Field parsers: one small function per configuration knob.
//!
//! Each parser binds a primitive extractor (or the override extractor) to
//! its knob-specific path, bounds, and whitelist from [`crate::registry`].
//! Paths are relative to the environment element, so a parser works on both
//! a full document subtree and a single emitted fragment.

use std::collections::BTreeMap;

use crate::extract;
use crate::overrides::{OverridePrototype, OverrideSpec, override_map};
use crate::registry;
use crate::tree::Node;

// ---------------------------------------------------------------------------
// Scalar knobs
// ---------------------------------------------------------------------------

pub fn resource_factor(tree: &Node) -> Option<f64> {
    extract::numeric(tree, "resource_factor.value", &registry::RESOURCE_FACTOR)
}

pub fn ford_distance_factor(tree: &Node) -> Option<f64> {
    extract::numeric(tree, "ford_distance_factor.value", &registry::FORD_DISTANCE_FACTOR)
}

pub fn sun_angle_factor(tree: &Node) -> Option<f64> {
    extract::numeric(tree, "sun_angle_factor.value", &registry::SUN_ANGLE_FACTOR)
}

pub fn distance_height_offset(tree: &Node) -> Option<f64> {
    extract::numeric(tree, "distance_height_offset.value", &registry::DISTANCE_HEIGHT_OFFSET)
}

pub fn global_tree_density(tree: &Node) -> Option<f64> {
    extract::numeric(tree, "global_tree_density.value", &registry::GLOBAL_TREE_DENSITY)
}

/// Backdrop scale is one attribute carrying three axis factors.
pub fn backdrop_scale(tree: &Node) -> Option<[f64; 3]> {
    let axes = extract::split_numeric_list(
        tree,
        "backdrop_scale.value",
        &registry::BACKDROP_LIST,
        &registry::BACKDROP_SCALE_AXIS,
    )?;
    Some([axes[0], axes[1], axes[2]])
}

pub fn trees_everywhere(tree: &Node) -> Option<bool> {
    extract::boolean(tree, "trees_everywhere.value")
}

// ---------------------------------------------------------------------------
// Identifier lists
// ---------------------------------------------------------------------------

pub fn deposits(tree: &Node) -> Option<Vec<String>> {
    extract::string_list(tree, "deposits.values", &registry::DEPOSIT_LIST, |id| {
        registry::DEPOSITS.contains(&id)
    })
}

pub fn trees(tree: &Node) -> Option<Vec<String>> {
    extract::string_list(tree, "trees.values", &registry::TREE_LIST, |id| {
        registry::TREES.contains(&id)
    })
}

// ---------------------------------------------------------------------------
// Noise amplitudes
// ---------------------------------------------------------------------------

/// Always eight slots. Three source shapes are accepted: a single scalar
/// (broadcast to every slot), a space-delimited list of exactly eight, or
/// eight repeated `<noise_amplitude value="…"/>` cells.
pub fn noise_amplitudes(tree: &Node) -> Option<[f64; 8]> {
    let spec = &registry::NOISE_AMPLITUDE;

    if let Some(scalar) = extract::numeric_raw(tree, "noise_amplitudes.values") {
        return Some([spec.normalize(scalar); registry::NOISE_AMPLITUDE_SLOTS]);
    }

    let values = extract::split_numeric_list(tree, "noise_amplitudes.values", &registry::NOISE_LIST, spec)
        .or_else(|| {
            extract::numeric_list(
                tree,
                "noise_amplitudes.noise_amplitude",
                &registry::NOISE_LIST,
                spec,
            )
        })?;

    let mut slots = [0.0; registry::NOISE_AMPLITUDE_SLOTS];
    slots.copy_from_slice(&values);
    Some(slots)
}

// ---------------------------------------------------------------------------
// Override prototypes
// ---------------------------------------------------------------------------

pub fn deposit_overrides(tree: &Node) -> Option<BTreeMap<String, OverridePrototype>> {
    override_map(
        tree,
        &OverrideSpec {
            root: "deposit_override_prototypes.deposit_override_prototype",
            allow: &registry::DEPOSITS,
        },
    )
}

pub fn detail_overrides(tree: &Node) -> Option<BTreeMap<String, OverridePrototype>> {
    override_map(
        tree,
        &OverrideSpec {
            root: "detail_override_prototypes.detail_override_prototype",
            allow: &registry::DETAILS,
        },
    )
}

pub fn prop_overrides(tree: &Node) -> Option<BTreeMap<String, OverridePrototype>> {
    override_map(
        tree,
        &OverrideSpec {
            root: "prop_override_prototypes.prop_override_prototype",
            allow: &registry::PROPS,
        },
    )
}

pub fn tree_overrides(tree: &Node) -> Option<BTreeMap<String, OverridePrototype>> {
    override_map(
        tree,
        &OverrideSpec {
            root: "tree_override_prototypes.tree_override_prototype",
            allow: &registry::TREES,
        },
    )
}
