//! Newsfile Changelog - News file assembly for release management
//!
//! This crate turns the fragment files of the news directory into the
//! release's news document: version header, highlights placeholder,
//! category blocks and contributor credits.

pub mod assembler;
pub mod credits;
pub mod formatter;
pub mod fragments;
pub mod types;
pub mod version;

pub use assembler::NewsAssembler;
pub use formatter::{MarkdownFormatter, NewsFormatter};
pub use types::{CategoryBlock, Fragment, NewsDocument};
