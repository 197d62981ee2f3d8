//! Workspace-level test package.
//!
//! The golden-vector tests live in `tests/`; their data is in
//! `tests/testdata/vectors.json`.
