//! Core library modules for the tudo application.
//!
//! - **Core Infrastructure**: Configuration, data storage paths, messaging
//! - **Data Management**: The task record and its display filters
//! - **User Interface**: Console rendering and data export

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod task;
pub mod view;
