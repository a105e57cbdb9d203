//! Template emitters: normalized (or UI-shaped) state back to document text.
//!
//! The reverse direction is not a mirror pipeline -- each field owns its own
//! emitter, and [`document`] concatenates the fragments. A disabled field
//! emits the empty string, the inverse of "absent" on the parse side.
//! Numeric attributes are re-normalized and formatted at the same precision
//! the corresponding extractor enforces, so an emitted fragment re-imports
//! to the value it was emitted from.

use std::collections::BTreeMap;

use crate::compose::Environment;
use crate::extract::NumericSpec;
use crate::overrides::OverridePrototype;
use crate::registry;
use crate::seasons::{Fall, Seasons, Spring, Summer, Winter};

// ---------------------------------------------------------------------------
// Scalar knobs
// ---------------------------------------------------------------------------

pub fn resource_factor(enabled: bool, value: f64) -> String {
    scalar(enabled, "resource_factor", value, &registry::RESOURCE_FACTOR)
}

pub fn ford_distance_factor(enabled: bool, value: f64) -> String {
    scalar(enabled, "ford_distance_factor", value, &registry::FORD_DISTANCE_FACTOR)
}

pub fn sun_angle_factor(enabled: bool, value: f64) -> String {
    scalar(enabled, "sun_angle_factor", value, &registry::SUN_ANGLE_FACTOR)
}

pub fn distance_height_offset(enabled: bool, value: f64) -> String {
    scalar(enabled, "distance_height_offset", value, &registry::DISTANCE_HEIGHT_OFFSET)
}

pub fn global_tree_density(enabled: bool, value: f64) -> String {
    scalar(enabled, "global_tree_density", value, &registry::GLOBAL_TREE_DENSITY)
}

pub fn backdrop_scale(enabled: bool, axes: [f64; 3]) -> String {
    if !enabled {
        return String::new();
    }
    let spec = &registry::BACKDROP_SCALE_AXIS;
    format!(
        r#"<backdrop_scale value="{} {} {}" />"#,
        number(axes[0], spec),
        number(axes[1], spec),
        number(axes[2], spec)
    )
}

pub fn trees_everywhere(enabled: bool, value: bool) -> String {
    if !enabled {
        return String::new();
    }
    format!(r#"<trees_everywhere value="{value}" />"#)
}

// ---------------------------------------------------------------------------
// Identifier lists
// ---------------------------------------------------------------------------

pub fn deposits(enabled: bool, ids: &[String]) -> String {
    id_list(enabled, "deposits", ids)
}

pub fn trees(enabled: bool, ids: &[String]) -> String {
    id_list(enabled, "trees", ids)
}

pub fn noise_amplitudes(enabled: bool, slots: &[f64; 8]) -> String {
    if !enabled {
        return String::new();
    }
    let values: Vec<String> = slots
        .iter()
        .map(|&v| number(v, &registry::NOISE_AMPLITUDE))
        .collect();
    format!(r#"<noise_amplitudes values="{}" />"#, values.join(" "))
}

// ---------------------------------------------------------------------------
// Override prototypes
// ---------------------------------------------------------------------------

pub fn deposit_overrides(enabled: bool, map: &BTreeMap<String, OverridePrototype>) -> String {
    override_block(enabled, "deposit_override_prototypes", "deposit_override_prototype", map)
}

pub fn detail_overrides(enabled: bool, map: &BTreeMap<String, OverridePrototype>) -> String {
    override_block(enabled, "detail_override_prototypes", "detail_override_prototype", map)
}

pub fn prop_overrides(enabled: bool, map: &BTreeMap<String, OverridePrototype>) -> String {
    override_block(enabled, "prop_override_prototypes", "prop_override_prototype", map)
}

pub fn tree_overrides(enabled: bool, map: &BTreeMap<String, OverridePrototype>) -> String {
    override_block(enabled, "tree_override_prototypes", "tree_override_prototype", map)
}

fn override_block(
    enabled: bool,
    wrapper: &str,
    element: &str,
    map: &BTreeMap<String, OverridePrototype>,
) -> String {
    if !enabled || map.is_empty() {
        return String::new();
    }
    let mut lines = vec![format!("<{wrapper}>")];
    for (id, proto) in map {
        lines.push(format!("  {}", override_entry(element, id, proto)));
    }
    lines.push(format!("</{wrapper}>"));
    lines.join("\n")
}

fn override_entry(element: &str, id: &str, proto: &OverridePrototype) -> String {
    let mut attrs = format!(r#"id="{id}""#);
    if let Some(density) = proto.density {
        attrs.push_str(&format!(
            r#" density="{}""#,
            number(density, &registry::DENSITY)
        ));
    }
    if let Some((lo, hi)) = proto.altitude.map(ordered_int) {
        attrs.push_str(&format!(r#" min_altitude="{lo}" max_altitude="{hi}""#));
    }
    if let Some((lo, hi)) = proto.humidity.map(ordered) {
        let spec = &registry::HUMIDITY;
        attrs.push_str(&format!(
            r#" min_humidity="{}" max_humidity="{}""#,
            number(lo, spec),
            number(hi, spec)
        ));
    }
    if let Some((lo, hi)) = proto.angle.map(ordered_int) {
        attrs.push_str(&format!(r#" min_angle="{lo}" max_angle="{hi}""#));
    }
    format!("<{element} {attrs} />")
}

// ---------------------------------------------------------------------------
// Seasons
// ---------------------------------------------------------------------------

pub fn spring(enabled: bool, season: &Spring) -> String {
    if !enabled {
        return String::new();
    }
    let (t_lo, t_hi) = ordered(season.temperature);
    format!(
        r#"<season id="Spring" duration="{}" precipitation_chance="{}" windy_chance="{}" very_windy_chance="{}" min_temperature="{}" max_temperature="{}" fish_boost="{}" />"#,
        number(season.duration, &registry::DURATION),
        number(season.precipitation_chance, &registry::CHANCE),
        number(season.windy_chance, &registry::CHANCE),
        number(season.very_windy_chance, &registry::CHANCE),
        number(t_lo, &registry::TEMPERATURE),
        number(t_hi, &registry::TEMPERATURE),
        number(season.fish_boost, &registry::FISH_BOOST),
    )
}

pub fn summer(enabled: bool, season: &Summer) -> String {
    if !enabled {
        return String::new();
    }
    let (t_lo, t_hi) = ordered(season.temperature);
    let (w_lo, w_hi) = ordered(season.wind);
    format!(
        r#"<season id="Summer" duration="{}" precipitation_chance="{}" windy_chance="{}" min_temperature="{}" max_temperature="{}" min_wind="{}" max_wind="{}" />"#,
        number(season.duration, &registry::DURATION),
        number(season.precipitation_chance, &registry::CHANCE),
        number(season.windy_chance, &registry::CHANCE),
        number(t_lo, &registry::TEMPERATURE),
        number(t_hi, &registry::TEMPERATURE),
        number(w_lo, &registry::WIND),
        number(w_hi, &registry::WIND),
    )
}

pub fn fall(enabled: bool, season: &Fall) -> String {
    if !enabled {
        return String::new();
    }
    let (t_lo, t_hi) = ordered(season.temperature);
    format!(
        r#"<season id="Fall" duration="{}" precipitation_chance="{}" windy_chance="{}" very_windy_chance="{}" min_temperature="{}" max_temperature="{}" />"#,
        number(season.duration, &registry::DURATION),
        number(season.precipitation_chance, &registry::CHANCE),
        number(season.windy_chance, &registry::CHANCE),
        number(season.very_windy_chance, &registry::CHANCE),
        number(t_lo, &registry::TEMPERATURE),
        number(t_hi, &registry::TEMPERATURE),
    )
}

pub fn winter(enabled: bool, season: &Winter) -> String {
    if !enabled {
        return String::new();
    }
    let (t_lo, t_hi) = ordered(season.temperature);
    format!(
        r#"<season id="Winter" duration="{}" precipitation_chance="{}" windy_chance="{}" very_windy_chance="{}" min_temperature="{}" max_temperature="{}" reduced_fauna="{}" />"#,
        number(season.duration, &registry::DURATION),
        number(season.precipitation_chance, &registry::CHANCE),
        number(season.windy_chance, &registry::CHANCE),
        number(season.very_windy_chance, &registry::CHANCE),
        number(t_lo, &registry::TEMPERATURE),
        number(t_hi, &registry::TEMPERATURE),
        season.reduced_fauna,
    )
}

/// The four-season structure is mandatory in the emitted document, so an
/// enabled group always carries all four entries.
pub fn seasons(enabled: bool, group: &Seasons) -> String {
    if !enabled {
        return String::new();
    }
    [
        "<seasons>".to_string(),
        format!("  {}", spring(true, &group.spring)),
        format!("  {}", summer(true, &group.summer)),
        format!("  {}", fall(true, &group.fall)),
        format!("  {}", winter(true, &group.winter)),
        "</seasons>".to_string(),
    ]
    .join("\n")
}

// ---------------------------------------------------------------------------
// Whole document
// ---------------------------------------------------------------------------

/// Emit the full document from a normalized model. An absent field plays
/// the role of a disabled control and contributes nothing.
pub fn document(env: &Environment) -> String {
    let fragments = [
        env.resource_factor.map(|v| resource_factor(true, v)),
        env.ford_distance_factor.map(|v| ford_distance_factor(true, v)),
        env.sun_angle_factor.map(|v| sun_angle_factor(true, v)),
        env.distance_height_offset.map(|v| distance_height_offset(true, v)),
        env.global_tree_density.map(|v| global_tree_density(true, v)),
        env.backdrop_scale.map(|v| backdrop_scale(true, v)),
        env.trees_everywhere.map(|v| trees_everywhere(true, v)),
        env.deposits.as_ref().map(|v| deposits(true, v)),
        env.trees.as_ref().map(|v| trees(true, v)),
        env.noise_amplitudes.as_ref().map(|v| noise_amplitudes(true, v)),
        env.deposit_overrides.as_ref().map(|m| deposit_overrides(true, m)),
        env.detail_overrides.as_ref().map(|m| detail_overrides(true, m)),
        env.prop_overrides.as_ref().map(|m| prop_overrides(true, m)),
        env.tree_overrides.as_ref().map(|m| tree_overrides(true, m)),
        env.seasons.as_ref().map(|s| seasons(true, s)),
    ];

    let mut out = String::from("<environment>\n");
    for fragment in fragments.into_iter().flatten() {
        if fragment.is_empty() {
            continue;
        }
        for line in fragment.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("</environment>\n");
    out
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

fn scalar(enabled: bool, element: &str, value: f64, spec: &NumericSpec) -> String {
    if !enabled {
        return String::new();
    }
    format!(r#"<{element} value="{}" />"#, number(value, spec))
}

fn id_list(enabled: bool, element: &str, ids: &[String]) -> String {
    if !enabled || ids.is_empty() {
        return String::new();
    }
    format!(r#"<{element} values="{}" />"#, ids.join(" "))
}

/// Normalize against the field's spec, then format at its precision with
/// trailing zeros trimmed, so re-importing parses to the identical value.
fn number(value: f64, spec: &NumericSpec) -> String {
    let v = spec.normalize(value);
    let s = format!("{:.*}", spec.decimals as usize, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Live UI state may hold an inverted pair mid-edit; emission restores the
/// ordering invariant.
fn ordered(pair: (f64, f64)) -> (f64, f64) {
    let (lo, hi) = pair;
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}

fn ordered_int(pair: (i32, i32)) -> (i32, i32) {
    let (lo, hi) = pair;
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}
