/// State management module
///
/// This module holds the application state the controller owns:
/// - Shared data structures (data.rs)
/// - The ordered list of selected files (store.rs)
/// - The lazily filled image preview cache (preview.rs)

pub mod data;
pub mod preview;
pub mod store;
