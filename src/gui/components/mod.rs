// src/gui/components/mod.rs
pub mod alert;
pub mod content;
pub mod data_table;
pub mod empty_state;
pub mod export_bar;
pub mod header;
pub mod pager_bar;
pub mod source_picker;
