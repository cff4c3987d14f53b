//! Newsfile Core - Core library for news file assembly
//!
//! This crate provides the error taxonomy and configuration shared by the
//! changelog assembler, the git collaborator and the CLI.

pub mod config;
pub mod error;

pub use config::{Category, NewsConfig};
pub use error::{NewsfileError, Result};
