pub mod config_panel;
pub mod footer;
pub mod header;
pub mod logs;
pub mod overview;
pub mod sentiment;
pub mod strategy;
pub mod tabs;
