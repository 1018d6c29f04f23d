// Model-performance request lifecycle
pub mod performance_controller;
