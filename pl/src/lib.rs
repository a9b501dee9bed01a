//! PromptLibrary - reusable prompt templates for AI agents
//!
//! Keeps a personal library of parameterized prompt templates in a single
//! JSON document and renders them by substituting `{{name}}` placeholders.
//!
//! # Architecture
//!
//! ```text
//! ~/.prompt-library/
//! ├── prompts.json     # the whole library, pretty-printed array
//! └── prompts.lock     # advisory lock held while a command mutates the library
//! ```
//!
//! # Example
//!
//! ```ignore
//! use promptlibrary::{TemplateStore, render};
//!
//! let store = TemplateStore::open("/tmp/prompts.json");
//! let library = store.load()?;
//! let review = library.find("code-review").unwrap();
//! let vars = vec![("code".to_string(), "x = 1".to_string())];
//! let rendered = render(&review.template, &vars);
//! assert!(rendered.unresolved.is_empty());
//! ```

pub mod builtin;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
mod format;
mod library;
mod render;
mod store;

pub use error::LibraryError;
pub use library::{ImportReport, Library, Template};
pub use render::{Rendered, placeholders, render};
pub use store::{StoreLock, TemplateStore};

/// Crate version, shown by `--version` and in the list header
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "other";
