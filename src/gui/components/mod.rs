// src/gui/components/mod.rs
pub mod alert;
pub mod export_bar;
pub mod filter_bar;
pub mod header;
pub mod job_table;
pub mod stats_bar;
