//! `glosslink` keeps a documentation tree cross-referenced with its glossary.
//! It reads term definitions from a canonical glossary file, finds whole-word
//! mentions of those terms in markdown prose, and rewrites them into links
//! pointing at the term's glossary anchor. Code blocks, inline code, existing
//! links, and images are never touched, so running the linker repeatedly is a
//! no-op after the first pass.

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use matcher::*;
pub use project::*;
pub use rewrite::*;
pub use segment::*;

pub mod catalog;
pub mod config;
mod error;
mod matcher;
pub mod project;
mod rewrite;
mod segment;

#[cfg(test)]
mod __fixtures;
