//! Bar chart of the rehash rounds triggered per insertion size in the cuckoo
//! hash table benchmarks.
//!
//! The benchmark writes one CSV row per run; [data::read_rehash_sizes] loads
//! it, [chart::BarChart] renders it and [entrypoints::run] ties the pipeline
//! together with settings and logging.

pub mod chart;
pub mod data;
pub mod entrypoints;
pub mod error;
pub mod routines {
    pub mod logger;
    pub mod output;
    pub mod settings;
    pub mod viewer;
}

pub mod prelude {
    pub use crate::chart::{Bar, BarChart, RenderedChart};
    pub use crate::data::{read_rehash_sizes, read_rehash_sizes_from_reader};
    pub use crate::data::{RehashData, RehashSample};
    pub use crate::entrypoints::{run, run_with};
    pub use crate::error::ChartError;
    pub use crate::routines::output::OutputFile;
    pub use crate::routines::settings::{read_settings, read_settings_from, Settings};
    pub use crate::routines::*;
}
