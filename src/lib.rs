//! yedit: in-place YAML field editing
//!
//! Applies a list of dotted-path edits (`image.tag = "v1.0"`) to a
//! mapping-rooted YAML document and writes it back, creating intermediate
//! mappings as needed. Built for CI/CD jobs that patch a few values between
//! checkout and deploy, optionally confined to a workspace root.

pub mod cli;
pub mod config;
pub mod document;
pub mod edit;
pub mod editor;
pub mod error;
pub mod logging;
pub mod workspace;
