//! Ocean client core.
//!
//! Everything the document authoring UI does that is not markup: talking to
//! the backend, holding the session, and the project/section state machine.
//! Browser specifics plug in through [`gateway::Transport`],
//! [`session::SessionStorage`] and [`store::StateStore`].

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod gateway;
pub mod markdown;
pub mod session;
pub mod state;
pub mod store;

pub use api::AuthMode;
pub use config::ClientConfig;
pub use controller::Controller;
pub use error::{ClientError, ClientResult};
pub use export::{export_filename, ExportArtifact};
pub use gateway::{Gateway, HttpRequest, HttpResponse, Method, Reply, SessionHandle, Transport};
pub use markdown::{render_styled, StyledDocument, StyledLine, StyledRun};
pub use session::{MemorySessionStorage, Session, SessionStorage, StoredSession};
pub use state::{AppState, OperationKey, OperationStatus, Screen, SectionPhase, StateEvent, View};
pub use store::{LocalStore, StateStore};

pub use shared_types::{DocType, Feedback, Project, Section};
