//! Composer and import boundary.
//!
//! [`compose`] runs every field parser against the environment subtree and
//! merges the disjoint partial results into one [`Environment`]. The
//! parsers are independent pure functions; running them in any order yields
//! the same model. [`import_document`] is the only surface that fails:
//! absence and malformed values are absorbed below it, and the single
//! propagated error is "this is not an environment document at all".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields;
use crate::overrides::OverridePrototype;
use crate::seasons::{self, Seasons};
use crate::tree::{Node, get};
use crate::xml::{self, XmlError};

/// Root element of a configuration document.
pub const ROOT: &str = "environment";

/// The normalized model. Every field is optional: absent means "not
/// overriding the game default", never an error. Created fresh on each
/// import and never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub resource_factor: Option<f64>,
    pub ford_distance_factor: Option<f64>,
    pub sun_angle_factor: Option<f64>,
    pub distance_height_offset: Option<f64>,
    pub global_tree_density: Option<f64>,
    pub backdrop_scale: Option<[f64; 3]>,
    pub trees_everywhere: Option<bool>,
    pub deposits: Option<Vec<String>>,
    pub trees: Option<Vec<String>>,
    pub noise_amplitudes: Option<[f64; 8]>,
    pub deposit_overrides: Option<BTreeMap<String, OverridePrototype>>,
    pub detail_overrides: Option<BTreeMap<String, OverridePrototype>>,
    pub prop_overrides: Option<BTreeMap<String, OverridePrototype>>,
    pub tree_overrides: Option<BTreeMap<String, OverridePrototype>>,
    pub seasons: Option<Seasons>,
}

impl Environment {
    /// True when no field parser recognized anything -- the typed rendition
    /// of "every extractor returned its absence placeholder".
    pub fn is_vacuous(&self) -> bool {
        self.resource_factor.is_none()
            && self.ford_distance_factor.is_none()
            && self.sun_angle_factor.is_none()
            && self.distance_height_offset.is_none()
            && self.global_tree_density.is_none()
            && self.backdrop_scale.is_none()
            && self.trees_everywhere.is_none()
            && self.deposits.is_none()
            && self.trees.is_none()
            && self.noise_amplitudes.is_none()
            && self.deposit_overrides.is_none()
            && self.detail_overrides.is_none()
            && self.prop_overrides.is_none()
            && self.tree_overrides.is_none()
            && self.seasons.is_none()
    }
}

/// Errors surfaced at the import boundary.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("XML parse error: {0}")]
    Xml(#[from] XmlError),
    #[error("not a valid environment configuration document")]
    UnrecognizedDocument,
}

/// Run every field parser and merge the results. Infallible by design:
/// an unrecognizable tree composes to a vacuous model.
pub fn compose(tree: &Node) -> Environment {
    // Parsers take environment-relative paths; a bare fragment tree (no
    // wrapper element) is scoped as-is so emitted fragments re-import.
    let scope = get(tree, ROOT).unwrap_or(tree);
    Environment {
        resource_factor: fields::resource_factor(scope),
        ford_distance_factor: fields::ford_distance_factor(scope),
        sun_angle_factor: fields::sun_angle_factor(scope),
        distance_height_offset: fields::distance_height_offset(scope),
        global_tree_density: fields::global_tree_density(scope),
        backdrop_scale: fields::backdrop_scale(scope),
        trees_everywhere: fields::trees_everywhere(scope),
        deposits: fields::deposits(scope),
        trees: fields::trees(scope),
        noise_amplitudes: fields::noise_amplitudes(scope),
        deposit_overrides: fields::deposit_overrides(scope),
        detail_overrides: fields::detail_overrides(scope),
        prop_overrides: fields::prop_overrides(scope),
        tree_overrides: fields::tree_overrides(scope),
        seasons: seasons::seasons(scope),
    }
}

/// Compose, rejecting a tree in which nothing meaningful was extracted.
pub fn parse_environment(tree: &Node) -> Result<Environment, ImportError> {
    let env = compose(tree);
    if env.is_vacuous() {
        return Err(ImportError::UnrecognizedDocument);
    }
    Ok(env)
}

/// Import configuration document text into the normalized model.
pub fn import_document(text: &str) -> Result<Environment, ImportError> {
    let tree = xml::parse_document(text)?;
    parse_environment(&tree)
}
