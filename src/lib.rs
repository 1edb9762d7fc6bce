pub mod api_models;
pub mod app;
pub mod handler;
pub mod routes;
pub mod services;
pub mod utils;
