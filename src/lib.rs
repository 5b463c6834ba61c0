// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod log;

pub mod job;
pub mod time;

pub mod data;
pub mod export;
pub mod facets;
pub mod file;
pub mod filter;
pub mod stats;

pub mod net;
pub mod poller;
pub mod progress;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;
