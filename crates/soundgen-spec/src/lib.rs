//! soundgen recipe library
//!
//! This crate provides the serde types for soundgen render recipes. A recipe is
//! a JSON document describing one render: a source shape, an optional ADSR
//! envelope and an optional cross-fade into a second source.
//!
//! # Example
//!
//! ```
//! use soundgen_spec::{Recipe, Source};
//!
//! let recipe = Recipe::from_json(r#"{
//!     "duration_seconds": 0.5,
//!     "source": { "type": "triangle", "frequency": 220.0 }
//! }"#).unwrap();
//!
//! assert_eq!(recipe.source.kind(), "triangle");
//! assert!(matches!(recipe.source, Source::Triangle(_)));
//! ```

pub mod error;
pub mod recipe;

pub use error::{BackendError, RecipeError};
pub use recipe::{
    Blend, Crossfade, Envelope, Recipe, Source, SweepCurve, Tone, DEFAULT_AMPLITUDE,
    DEFAULT_DURATION_SECONDS, DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE,
};
