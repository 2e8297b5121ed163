//! Property-based tests for the nested setter and edit pipeline
