// Mission identity
pub mod mission;

// Model evaluation entities
pub mod performance;

// Exoplanet catalog entities
pub mod exoplanet;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
