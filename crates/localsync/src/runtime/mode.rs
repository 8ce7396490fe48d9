//! `AppMode`-specific key handling modules.

pub(crate) mod create_item;
pub(crate) mod editor;
pub(crate) mod explorer;
pub(crate) mod help;
pub(crate) mod notice;
pub(crate) mod search;
pub(crate) mod terminal;
pub(crate) mod text_input;
