//! Application services.

pub mod materialize_service;

pub use materialize_service::MaterializeService;
