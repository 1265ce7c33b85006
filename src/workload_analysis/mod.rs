//! Domain layer: workload records, sizing metadata, and the pure
//! filtering/aggregation services the dashboard is built on.

pub mod domain;
pub mod services;
