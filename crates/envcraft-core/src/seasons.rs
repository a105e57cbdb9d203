//! Season normalization.
//!
//! The emitted document always carries exactly four seasons, so unlike the
//! other list-shaped fields a missing or malformed season entry is not
//! "absent": it is replaced wholesale by the built-in default record. Only
//! a missing `seasons` root makes the whole group absent. The four
//! durations are expected to sum to 1 on the producer side; each season is
//! normalized independently and the sum is not enforced here.

use serde::{Deserialize, Serialize};

use crate::extract::NumericSpec;
use crate::registry;
use crate::tree::{Node, get};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub duration: f64,
    pub precipitation_chance: f64,
    pub windy_chance: f64,
    pub very_windy_chance: f64,
    pub temperature: (f64, f64),
    pub fish_boost: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            duration: 0.25,
            precipitation_chance: 0.3,
            windy_chance: 0.25,
            very_windy_chance: 0.1,
            temperature: (2.0, 18.0),
            fish_boost: 1.0,
        }
    }
}

/// Summer has no very-windy chance; it carries a wind velocity range
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summer {
    pub duration: f64,
    pub precipitation_chance: f64,
    pub windy_chance: f64,
    pub temperature: (f64, f64),
    pub wind: (f64, f64),
}

impl Default for Summer {
    fn default() -> Self {
        Self {
            duration: 0.25,
            precipitation_chance: 0.15,
            windy_chance: 0.2,
            temperature: (15.0, 32.0),
            wind: (4.0, 12.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fall {
    pub duration: f64,
    pub precipitation_chance: f64,
    pub windy_chance: f64,
    pub very_windy_chance: f64,
    pub temperature: (f64, f64),
}

impl Default for Fall {
    fn default() -> Self {
        Self {
            duration: 0.25,
            precipitation_chance: 0.35,
            windy_chance: 0.3,
            very_windy_chance: 0.15,
            temperature: (4.0, 20.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Winter {
    pub duration: f64,
    pub precipitation_chance: f64,
    pub windy_chance: f64,
    pub very_windy_chance: f64,
    pub temperature: (f64, f64),
    pub reduced_fauna: bool,
}

impl Default for Winter {
    fn default() -> Self {
        Self {
            duration: 0.25,
            precipitation_chance: 0.3,
            windy_chance: 0.25,
            very_windy_chance: 0.15,
            temperature: (-12.0, 4.0),
            reduced_fauna: true,
        }
    }
}

/// All four seasons, in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seasons {
    pub spring: Spring,
    pub summer: Summer,
    pub fall: Fall,
    pub winter: Winter,
}

// ---------------------------------------------------------------------------
// Normalizers
// ---------------------------------------------------------------------------

/// The whole season group: `None` only when the `seasons` root is absent.
pub fn seasons(tree: &Node) -> Option<Seasons> {
    get(tree, "seasons.season")?;
    Some(Seasons {
        spring: spring(tree),
        summer: summer(tree),
        fall: fall(tree),
        winter: winter(tree),
    })
}

pub fn spring(tree: &Node) -> Spring {
    let d = Spring::default();
    let Some(e) = season_entry(tree, "Spring") else {
        return d;
    };
    Spring {
        duration: field(e, "duration", &registry::DURATION, d.duration),
        precipitation_chance: field(e, "precipitation_chance", &registry::CHANCE, d.precipitation_chance),
        windy_chance: field(e, "windy_chance", &registry::CHANCE, d.windy_chance),
        very_windy_chance: field(e, "very_windy_chance", &registry::CHANCE, d.very_windy_chance),
        temperature: pair(e, "min_temperature", "max_temperature", &registry::TEMPERATURE, d.temperature),
        fish_boost: field(e, "fish_boost", &registry::FISH_BOOST, d.fish_boost),
    }
}

pub fn summer(tree: &Node) -> Summer {
    let d = Summer::default();
    let Some(e) = season_entry(tree, "Summer") else {
        return d;
    };
    Summer {
        duration: field(e, "duration", &registry::DURATION, d.duration),
        precipitation_chance: field(e, "precipitation_chance", &registry::CHANCE, d.precipitation_chance),
        windy_chance: field(e, "windy_chance", &registry::CHANCE, d.windy_chance),
        temperature: pair(e, "min_temperature", "max_temperature", &registry::TEMPERATURE, d.temperature),
        wind: pair(e, "min_wind", "max_wind", &registry::WIND, d.wind),
    }
}

pub fn fall(tree: &Node) -> Fall {
    let d = Fall::default();
    let Some(e) = season_entry(tree, "Fall") else {
        return d;
    };
    Fall {
        duration: field(e, "duration", &registry::DURATION, d.duration),
        precipitation_chance: field(e, "precipitation_chance", &registry::CHANCE, d.precipitation_chance),
        windy_chance: field(e, "windy_chance", &registry::CHANCE, d.windy_chance),
        very_windy_chance: field(e, "very_windy_chance", &registry::CHANCE, d.very_windy_chance),
        temperature: pair(e, "min_temperature", "max_temperature", &registry::TEMPERATURE, d.temperature),
    }
}

pub fn winter(tree: &Node) -> Winter {
    let d = Winter::default();
    let Some(e) = season_entry(tree, "Winter") else {
        return d;
    };
    Winter {
        duration: field(e, "duration", &registry::DURATION, d.duration),
        precipitation_chance: field(e, "precipitation_chance", &registry::CHANCE, d.precipitation_chance),
        windy_chance: field(e, "windy_chance", &registry::CHANCE, d.windy_chance),
        very_windy_chance: field(e, "very_windy_chance", &registry::CHANCE, d.very_windy_chance),
        temperature: pair(e, "min_temperature", "max_temperature", &registry::TEMPERATURE, d.temperature),
        reduced_fauna: get(e, "reduced_fauna")
            .and_then(Node::as_bool)
            .unwrap_or(d.reduced_fauna),
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn season_entry<'a>(tree: &'a Node, id: &str) -> Option<&'a Node> {
    let list = get(tree, "seasons.season")?;
    list.entries()
        .into_iter()
        .find(|e| get(e, "id").and_then(Node::as_text) == Some(id))
}

fn field(entry: &Node, key: &str, spec: &NumericSpec, default: f64) -> f64 {
    get(entry, key)
        .and_then(Node::as_number)
        .map(|v| spec.normalize(v))
        .unwrap_or(default)
}

/// Bounded pair with the ordering repair: a missing side falls back to the
/// default record's side, an inverted pair is swapped.
fn pair(
    entry: &Node,
    min_key: &str,
    max_key: &str,
    spec: &NumericSpec,
    default: (f64, f64),
) -> (f64, f64) {
    let mut lo = field(entry, min_key, spec, default.0);
    let mut hi = field(entry, max_key, spec, default.1);
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    (lo, hi)
}
