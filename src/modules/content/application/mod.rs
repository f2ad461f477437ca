pub mod fetch;
pub mod format;
pub mod ports;
pub mod queries;
pub mod service;
pub mod views;
