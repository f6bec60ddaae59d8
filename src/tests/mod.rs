//! Internal test modules - whitebox tests with crate access
//!
//! These drive the whole session or the terminal app through a
//! [`ratatui::backend::TestBackend`] and observe what ends up on screen.
