//! Newsfile Git - Git operations for news file assembly
//!
//! This crate provides the version-control collaborator used by the
//! assembler: reading files at a revision, listing commit authors and
//! removing consumed files from the index.

mod history;
mod index;
mod repository;
mod traits;

pub use repository::{GitRepo, Result};
pub use traits::VersionControl;
