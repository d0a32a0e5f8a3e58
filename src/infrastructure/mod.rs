// Infrastructure layer - Configuration and data-source adapters
pub mod config;
pub mod sample_repository;
pub mod upstream_repository;
