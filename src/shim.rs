//! The YAML facade handle.
//!
//! [`Yaml`] replaces the ambient process-wide alias of the original
//! interface with an explicit handle: initialize once, pass it to
//! whoever loads or dumps. Engine selection is single-shot; a failed
//! initialization leaves no partial state behind.

use std::io::{Read, Write};

use crate::emit;
use crate::engine::{self, Engine, EngineKind, EngineManager};
use crate::error::YamlResult;
use crate::value::Value;

/// A YAML facade bound to one selected engine.
///
/// # Examples
///
/// ```
/// use yamlcompat::{Value, Yaml};
///
/// let yaml = Yaml::init()?;
/// assert_eq!(yaml.load("--- foo")?, Value::from("foo"));
/// assert_eq!(yaml.dump(&Value::from("foo")), "--- foo\n");
/// # Ok::<(), yamlcompat::YamlError>(())
/// ```
pub struct Yaml {
    engine: Box<dyn Engine>,
    manager: EngineManager,
}

impl Yaml {
    /// Initializes the facade with the default candidate order: the
    /// primary engine first, the legacy engine as fallback.
    ///
    /// # Errors
    ///
    /// Returns [`crate::YamlError::EngineUnavailable`] when no engine is
    /// compiled into this build, after writing the startup warnings to
    /// stderr.
    pub fn init() -> YamlResult<Self> {
        Self::init_with(engine::default_candidates())
    }

    /// Initializes the facade with an explicit candidate order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::YamlError::EngineUnavailable`] when no candidate
    /// is available.
    pub fn init_with(candidates: &[EngineKind]) -> YamlResult<Self> {
        let engine = engine::select(candidates)?;
        let manager = EngineManager::new(engine.kind());
        Ok(Self { engine, manager })
    }

    /// Parses the first YAML document in `source`.
    ///
    /// An empty stream loads as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns a parse error when the input is not well-formed YAML;
    /// never a partial value.
    pub fn load(&self, source: &str) -> YamlResult<Value> {
        let mut documents = self.engine.load_str(source)?;
        if documents.is_empty() {
            Ok(Value::Null)
        } else {
            Ok(documents.swap_remove(0))
        }
    }

    /// Parses every document in a multi-document stream.
    ///
    /// # Errors
    ///
    /// Returns a parse error when the input is not well-formed YAML.
    pub fn load_documents(&self, source: &str) -> YamlResult<Vec<Value>> {
        Ok(self.engine.load_str(source)?)
    }

    /// Parses the first YAML document from a readable stream.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading fails, or a parse error when the
    /// stream's contents are not well-formed YAML.
    pub fn load_from_reader<R: Read>(&self, mut reader: R) -> YamlResult<Value> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        self.load(&source)
    }

    /// Serializes a value to a YAML document string.
    ///
    /// Output is identical whichever engine is active, and loads back to
    /// an equal value.
    #[must_use]
    pub fn dump(&self, value: &Value) -> String {
        emit::dump(value)
    }

    /// Serializes a value to a writable stream.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn dump_to_writer<W: Write>(&self, value: &Value, mut writer: W) -> YamlResult<()> {
        writer.write_all(emit::dump(value).as_bytes())?;
        Ok(())
    }

    /// The engine backing this facade.
    #[must_use]
    pub fn engine_kind(&self) -> EngineKind {
        self.engine.kind()
    }

    /// The compatibility manager reporting the active engine.
    #[must_use]
    pub const fn manager(&self) -> &EngineManager {
        &self.manager
    }

    /// Mutable access to the manager, for the deprecated setter.
    pub fn manager_mut(&mut self) -> &mut EngineManager {
        &mut self.manager
    }
}

impl std::fmt::Debug for Yaml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Yaml")
            .field("engine", &self.engine.kind())
            .field("manager", &self.manager)
            .finish()
    }
}
