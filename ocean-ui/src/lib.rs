pub mod app;
pub mod components;
pub mod interop;
pub mod storage;
pub mod store;
pub mod transport;

pub use app::{App, AppController};
pub use storage::LocalSessionStorage;
pub use store::SignalStore;
pub use transport::GlooTransport;
