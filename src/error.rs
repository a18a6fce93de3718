//! Error handling for the FlowCanvas application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.
//!
//! The canvas core itself has no error taxonomy: graph and canvas
//! operations are total functions that treat unknown ids as silent
//! no-ops. Errors exist only at the edges — configuration I/O, seed
//! graph construction, and run-script validation.

use thiserror::Error;

/// Main error type for FlowCanvas operations
#[derive(Error, Debug)]
pub enum FlowCanvasError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to run-script validation
    #[error("Run script error: {0}")]
    Script(String),

    /// Errors related to graph construction (seed data)
    #[error("Graph error: {0}")]
    Graph(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<FlowCanvasError>,
    },
}

impl FlowCanvasError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        FlowCanvasError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for FlowCanvas operations
pub type Result<T> = std::result::Result<T, FlowCanvasError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
