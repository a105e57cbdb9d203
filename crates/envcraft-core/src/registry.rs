//! Static registry of valid identifiers and documented numeric bounds.
//!
//! Every field parser and emitter reads its whitelist and range from here,
//! so a balance change lands in exactly one place. Identifiers are matched
//! case-sensitively against the names the game ships.

use crate::extract::{ListSpec, NumericSpec};

// ---------------------------------------------------------------------------
// Identifier whitelists
// ---------------------------------------------------------------------------

pub const TREES: [&str; 23] = [
    "Alder",
    "Ash",
    "Aspen",
    "Beech",
    "Birch",
    "Cedar",
    "Chestnut",
    "Cottonwood",
    "Cypress",
    "Dogwood",
    "Elm",
    "Fir",
    "Hemlock",
    "Hickory",
    "Juniper",
    "Maple",
    "Oak",
    "Pine",
    "Poplar",
    "Spruce",
    "Sycamore",
    "Walnut",
    "Willow",
];

pub const DEPOSITS: [&str; 5] = ["Flint", "Tin", "Copper", "Iron", "Gold"];

pub const DETAILS: [&str; 8] = [
    "Clover",
    "Fern",
    "Grass",
    "Heather",
    "Moss",
    "Nettle",
    "Thistle",
    "Wildflower",
];

pub const PROPS: [&str; 6] = [
    "BoulderLarge",
    "BoulderSmall",
    "DeadTree",
    "FallenLog",
    "RockOutcrop",
    "Stump",
];

// ---------------------------------------------------------------------------
// Scalar knob bounds
// ---------------------------------------------------------------------------

pub const RESOURCE_FACTOR: NumericSpec = NumericSpec::new(0.1, 10.0, 2);
pub const FORD_DISTANCE_FACTOR: NumericSpec = NumericSpec::new(0.0, 10.0, 2);
pub const SUN_ANGLE_FACTOR: NumericSpec = NumericSpec::new(0.0, 2.0, 2);
pub const DISTANCE_HEIGHT_OFFSET: NumericSpec = NumericSpec::new(-10.0, 10.0, 2);
pub const GLOBAL_TREE_DENSITY: NumericSpec = NumericSpec::new(0.01, 2.0, 2);
pub const BACKDROP_SCALE_AXIS: NumericSpec = NumericSpec::new(0.1, 5.0, 2);
pub const NOISE_AMPLITUDE: NumericSpec = NumericSpec::new(0.0, 1.0, 2);

/// The noise amplitude field always carries exactly this many slots; a
/// scalar source value is broadcast to all of them.
pub const NOISE_AMPLITUDE_SLOTS: usize = 8;

// ---------------------------------------------------------------------------
// List bounds
// ---------------------------------------------------------------------------

pub const DEPOSIT_LIST: ListSpec = ListSpec::items(1, 4);
pub const TREE_LIST: ListSpec = ListSpec::items(1, TREES.len());
pub const BACKDROP_LIST: ListSpec = ListSpec::items(3, 3);
pub const NOISE_LIST: ListSpec = ListSpec::items(NOISE_AMPLITUDE_SLOTS, NOISE_AMPLITUDE_SLOTS);

// ---------------------------------------------------------------------------
// Override prototype bounds
// ---------------------------------------------------------------------------

pub const DENSITY: NumericSpec = NumericSpec::new(0.0, 1.0, 2);
pub const ALTITUDE: NumericSpec = NumericSpec::new(0.0, 250.0, 0);
pub const HUMIDITY: NumericSpec = NumericSpec::new(0.0, 1.0, 2);
pub const ANGLE: NumericSpec = NumericSpec::new(0.0, 90.0, 0);

// ---------------------------------------------------------------------------
// Season field bounds
// ---------------------------------------------------------------------------

pub const DURATION: NumericSpec = NumericSpec::new(0.0, 1.0, 2);
pub const CHANCE: NumericSpec = NumericSpec::new(0.0, 1.0, 2);
pub const TEMPERATURE: NumericSpec = NumericSpec::new(-50.0, 50.0, 1);
pub const WIND: NumericSpec = NumericSpec::new(0.0, 50.0, 1);
pub const FISH_BOOST: NumericSpec = NumericSpec::new(0.0, 10.0, 2);
