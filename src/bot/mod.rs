pub mod decision;
pub mod orchestrator;
