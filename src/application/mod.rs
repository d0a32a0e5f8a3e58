// Application layer - Use cases and data-access traits
pub mod assistant_service;
pub mod diagnostic_engine;
pub mod fault_detector;
pub mod fleet_repository;
pub mod intent_router;
