//! Sagoma test utilities.
//!
//! Registrar doubles and label fixtures for exercising builder
//! registration paths without a live host platform.

use anyhow::{Result, bail};
use serde_json::Value;

use sagoma_sdk::{Labels, Registrar};

/// Create labels with name, singular name, and description filled in.
pub fn test_labels(name: &str, description: &str) -> Labels {
    Labels::new()
        .name(name)
        .singular_name(name)
        .menu_name(name)
        .description(description)
}

/// A single registration call captured by [`RecordingRegistrar`].
#[derive(Debug, Clone)]
pub enum Registration {
    ContentType {
        slug: String,
        args: Value,
    },
    Taxonomy {
        slug: String,
        object_types: Vec<String>,
        args: Value,
    },
}

impl Registration {
    /// The slug the entity was registered under.
    pub fn slug(&self) -> &str {
        match self {
            Registration::ContentType { slug, .. } | Registration::Taxonomy { slug, .. } => slug,
        }
    }

    /// The record handed to the host.
    pub fn args(&self) -> &Value {
        match self {
            Registration::ContentType { args, .. } | Registration::Taxonomy { args, .. } => args,
        }
    }
}

/// Registrar that records every call and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    pub calls: Vec<Registration>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single recorded call, for tests expecting exactly one.
    ///
    /// # Panics
    ///
    /// Panics when zero or more than one call was recorded.
    pub fn single(&self) -> &Registration {
        match self.calls.as_slice() {
            [only] => only,
            calls => panic!("expected exactly one registration, got {}", calls.len()),
        }
    }
}

impl Registrar for RecordingRegistrar {
    fn register_content_type(&mut self, slug: &str, args: Value) -> Result<()> {
        self.calls.push(Registration::ContentType {
            slug: slug.to_string(),
            args,
        });
        Ok(())
    }

    fn register_taxonomy(&mut self, slug: &str, object_types: &[String], args: Value) -> Result<()> {
        self.calls.push(Registration::Taxonomy {
            slug: slug.to_string(),
            object_types: object_types.to_vec(),
            args,
        });
        Ok(())
    }
}

/// Registrar that rejects every call, for error-propagation tests.
#[derive(Debug, Default)]
pub struct FailingRegistrar;

impl Registrar for FailingRegistrar {
    fn register_content_type(&mut self, slug: &str, _args: Value) -> Result<()> {
        bail!("host rejected content type '{slug}'")
    }

    fn register_taxonomy(&mut self, slug: &str, _object_types: &[String], _args: Value) -> Result<()> {
        bail!("host rejected taxonomy '{slug}'")
    }
}
