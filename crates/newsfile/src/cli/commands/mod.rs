//! CLI commands

mod assemble;

pub use assemble::AssembleCommand;
