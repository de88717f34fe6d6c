// src/gui/components/mod.rs
pub mod tabs;
pub mod search_bar;
pub mod data_table;
