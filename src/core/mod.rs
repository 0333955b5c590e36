//! Core module - user-level configuration

pub mod config;

pub use config::Config;
