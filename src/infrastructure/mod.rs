// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod prediction_client;
pub mod query_client;
pub mod view_mapper;
