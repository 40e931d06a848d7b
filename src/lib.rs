//! Element palette and orbit workspace served to the browser.
//!
//! The catalog is read once at startup; every browser session owns an ordered
//! selection of elements, each drawn as a nucleus with a ring of electrons.

pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod page;
pub mod selection;
pub mod server;
pub mod session;
pub mod shells;
pub mod workspace;

pub use catalog::{Catalog, ElementRecord};
pub use error::{ConfigError, DataLoadError, SelectionError};
pub use geometry::{render_geometry, PointCloud};
pub use selection::SelectionState;
pub use shells::{render_shells, ShellModel};
pub use workspace::WorkspaceView;
