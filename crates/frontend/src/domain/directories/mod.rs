//! Reference directories (sources, products, storages, ...) edited through one
//! generic page driven by each directory's static field schema.

pub mod api;
pub mod ui;
