pub mod exposed;
pub mod fetch;
pub mod orchestrator;
pub mod scoring;
pub mod secrets;
