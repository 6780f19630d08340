//! # yamlcompat - Ruby-style YAML load/dump with switchable engines
//!
//! yamlcompat exposes the familiar `load`/`dump` YAML surface over one of
//! two interchangeable engine backends: the primary **psych** engine
//! (backed by `yaml-rust2`) and the legacy **syck** engine (backed by
//! `yaml-rust`). Selection walks an ordered candidate list once at
//! initialization and short-circuits on the first engine this build
//! carries; exhausting the list is a fatal startup error.
//!
//! ## Core Concepts
//!
//! - **Yaml**: the facade handle; initialize once, then load and dump
//! - **Value**: the loaded data model, symbols and timestamps included
//! - **EngineManager**: compatibility introspection of the active engine
//!
//! ## Usage
//!
//! ```
//! use yamlcompat::{ToYaml, Value, Yaml};
//!
//! let yaml = Yaml::init()?;
//!
//! // Parse a YAML string
//! assert_eq!(yaml.load("--- foo")?, Value::from("foo"));
//! assert_eq!(yaml.load("47")?, Value::Int(47));
//!
//! // Emit some YAML
//! assert_eq!(yaml.dump(&Value::from("foo")), "--- foo\n");
//! assert_eq!("foo".to_yaml(), "--- foo\n");
//!
//! // Introspect the engine
//! assert!(!yaml.manager().is_legacy());
//! # Ok::<(), yamlcompat::YamlError>(())
//! ```
//!
//! ## Security
//!
//! Loaded documents are plain data; no tag ever instantiates arbitrary
//! types. Still, treat YAML from untrusted sources with the usual care.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod error;
pub mod value;

mod emit;
mod scalar;
mod shim;

// Re-export primary types at crate root for convenience
pub use engine::{Engine, EngineKind, EngineManager};
pub use error::{EngineAttempt, ParseError, YamlError, YamlResult};
pub use shim::Yaml;
pub use value::{Mapping, ToYaml, Value};
