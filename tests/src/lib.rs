//! Cross-crate integration tests live under `tests/`. Nothing to
//! export from here.
