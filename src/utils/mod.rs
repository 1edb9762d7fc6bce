pub mod business_day;
pub mod config;
pub mod http_client;
pub mod logging;
pub mod middleware;
pub mod round;
