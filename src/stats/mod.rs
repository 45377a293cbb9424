//! Stats module - aggregate counts over cleaned records

mod aggregator;
mod exploration;

pub use aggregator::{
    AbstractStats, Aggregates, Aggregator, CategoryCount, CategoryField, WordCount, YearCount,
};
pub use exploration::Exploration;
