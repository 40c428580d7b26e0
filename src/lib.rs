pub mod article_store;
pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod lifecycle;
pub mod notify_subscribers;
pub mod routes;
pub mod startup;
pub mod telemetry;
