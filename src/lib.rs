//! threadbook - thread and threading-insert selection
//!
//! Looks up thread geometry, classifies designations into series and keeps a
//! family / series / size / insert selection consistent against an insert
//! catalog.

pub mod black_book;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod selection;
pub mod tool_library;

pub use black_book::{ThreadDatabase, ThreadSpec, ThreadType};
pub use config::{Config, ReferenceData};
pub use error::ConfigError;
pub use parser::{classify, Designation, Series};
pub use resolver::{resolve_designation, resolve_geometry, Resolution, ThreadGeometry};
pub use selection::{SelectionFilter, SelectionState};
pub use tool_library::{Family, ToolCatalog, ToolInsert};

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise this crate logs at `level` and
/// everything else at `warn`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(level: tracing::Level) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,threadbook={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
