//! tms-core: directory discovery and session selection for tms
//!
//! The pipeline runs discovery ([`discovery::find_all`]), hands the
//! candidates to an [`picker::InteractivePicker`], resolves the pick
//! ([`selection::resolve`]) and applies it through a
//! [`registry::SessionRegistry`]. [`session::Sessionizer`] bundles the
//! pipeline with the other commands.

pub mod config;
pub mod discovery;
pub mod naming;
pub mod picker;
pub mod preflight;
pub mod registry;
pub mod repo;
pub mod selection;
pub mod session;
pub mod vcs;

pub use config::{Config, ConfigLoader, SearchRoot};
pub use discovery::Candidate;
pub use picker::{FzfPicker, InteractivePicker};
pub use registry::{SessionRegistry, TmuxRegistry};
pub use selection::Action;
pub use session::Sessionizer;
pub use vcs::{GitClient, VersionControlClient};
