// Application layer - Use cases wiring the dashboard state to its collaborators
pub mod data_sources;
pub mod live_poller;
pub mod poll_scheduler;
pub mod prediction_requester;
pub mod session;
