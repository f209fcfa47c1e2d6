//! # Shopgen - Bedrock Shop Command Generator
//!
//! A terminal user interface for generating Minecraft Bedrock shop NPC
//! commands. Built with ratatui.
//!
//! ## Architecture
//!
//! The application follows a clean architecture pattern:
//!
//! - **App**: Core application state and lifecycle management
//! - **Commands**: The purchase/sale command generators
//! - **UI**: Layout and rendering logic
//! - **State**: Centralized state management
//! - **Events**: Input handling and event processing
//! - **Clipboard**: System clipboard integration
//! - **Config**: Configuration management

pub mod app;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;

pub use app::App;
pub use commands::{
    CommandSet, TransactionSpec, generate_purchase_commands, generate_sale_commands,
};
pub use config::Config;
pub use error::{Error, Result};
