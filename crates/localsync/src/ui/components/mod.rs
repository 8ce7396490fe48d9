pub mod create_item_overlay;
pub mod editor_view;
pub mod file_tree;
pub mod footer_bar;
pub mod help_overlay;
pub mod notice_overlay;
pub mod status_bar;
pub mod tabs;
pub mod terminal_panel;
