//! Inlay inlines the content of referenced files between paired comment
//! markers (pack), or clears it again (unpack), across a directory tree.
//! Which files are touched and what the markers look like comes from a
//! small set of rules in a configuration file.

/// Referenced file resolution and the per-run content cache
pub mod cache;

/// Command-line interface module for the Inlay application
pub mod cli;

/// Configuration loading (TOML, JSON, YAML) and validation
pub mod config;

/// Common constants
pub mod constants;

/// Structured per-block events: unclosed markers and missing references
pub mod diagnostic;

/// Error types and handling for the Inlay application
pub mod error;

/// Ignore patterns for the directory walk
pub mod ignore;

/// Marker block location within a line sequence
pub mod locator;

/// Logger initialisation
pub mod logger;

/// Per-file orchestration: candidate selection, transformation and output placement
pub mod processor;

/// Line sequence rewriting from a list of block edits
pub mod rewriter;

/// Rule compilation from path patterns and marker templates
pub mod rule;

/// The per-file pack/unpack transformation
pub mod transform;
