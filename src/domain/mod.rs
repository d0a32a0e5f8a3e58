// Domain layer - Core data models
pub mod diagnosis;
pub mod fault;
pub mod intent;
pub mod rca;
pub mod scheduling;
pub mod telemetry;
pub mod vehicle;
