pub mod cli;
pub mod config;
pub mod confirm;
pub mod context;
pub mod error;
pub mod invoke;
pub mod paginate;
pub mod select;
pub mod services;
pub mod ui;
