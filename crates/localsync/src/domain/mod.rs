//! Editor-screen state that has no UI or runtime dependencies beyond plain
//! data types.

pub mod file_tree;
pub mod input;
pub mod language;
pub mod open_files;
pub mod presence;
pub mod terminal;
