//! Configuration sources, in increasing precedence: file, environment.

pub mod environment;
pub mod file;
