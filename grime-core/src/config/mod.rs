//! Configuration for the Grime engine.

pub mod engine_config;

pub use engine_config::EngineConfig;
