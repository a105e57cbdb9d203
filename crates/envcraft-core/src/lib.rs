//! Envcraft Core -- the bidirectional environment-configuration pipeline.
//!
//! This crate converts a game-mod environment configuration document
//! (terrain knobs, seasons, vegetation, deposits, placement override
//! prototypes) into a validated normalized model, and emits document
//! fragments back from that model.
//!
//! # Import Pipeline
//!
//! [`compose::import_document`] drives the forward direction:
//!
//! 1. **Boundary** -- [`xml::parse_document`] turns document text into the
//!    tagged [`tree::Node`] shape.
//! 2. **Field parsers** -- each knob in [`fields`] reads its own path
//!    through a primitive in [`extract`] or the higher-order extractor in
//!    [`overrides`], with bounds and whitelists from [`registry`].
//! 3. **Composer** -- [`compose::compose`] merges the disjoint partial
//!    results into one [`compose::Environment`] and rejects a document in
//!    which nothing was recognized.
//!
//! Absence (a missing root path) is `None`, never an error; malformed
//! values are dropped at the smallest granularity; out-of-range numerics
//! are clamped and rounded, never rejected. The only propagated failure is
//! [`compose::ImportError`] at the import boundary.
//!
//! # Emit Direction
//!
//! The reverse path is not a mirror pipeline: each field owns an emitter in
//! [`emit`], and [`emit::document`] concatenates the fragments. Emitters
//! format numerics at the same precision the extractors enforce, so
//! emitted text re-imports to the value it was emitted from.
//!
//! Everything here is pure and synchronous: same tree in, same model out.

pub mod compose;
pub mod emit;
pub mod extract;
pub mod fields;
pub mod overrides;
pub mod registry;
pub mod seasons;
pub mod tree;
pub mod xml;
