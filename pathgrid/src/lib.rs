//! pathgrid: an interactive grid route planner built on `pathgrid-core`
//! and `pathgrid-paths`.

pub mod config;
pub mod error;
pub mod logger;
pub mod session;

pub use config::{GridConfig, LoggingConfig, SearchConfig, SessionConfig};
pub use error::SessionError;
pub use session::{CellView, Session};
