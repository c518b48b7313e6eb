//! Workspace-level integration tests for bigchunk live in `tests/`.
