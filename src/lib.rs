//! CORD-19 Explorer - paper metadata cleaning, counts and charts
//!
//! Pipeline, run once per invocation:
//! ```text
//!  metadata.csv ──► data::DataLoader ──► data::DataCleaner ──► stats::Aggregator
//!                                                                  │
//!                                  charts::StaticChartRenderer ◄───┤ (analyze)
//!                                  gui::ExplorerApp            ◄───┘ (dashboard)
//! ```
//! `sample` is independent of the pipeline.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod sample;
pub mod stats;
