pub mod alerts;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod events;
pub mod ids;
pub mod listing;
pub mod manager;
pub mod models;
pub mod openapi;
pub mod panel;
pub mod repo;
pub mod routes;
pub mod seed;
pub mod settings;
pub mod transfer;
pub mod validation;

// Re-export commonly used items for tests / external users
pub use alerts::AlertManager;
pub use events::{EventBus, EventKind, Subscription};
pub use manager::DataManager;
pub use panel::AdminPanel;
pub use routes::config;
