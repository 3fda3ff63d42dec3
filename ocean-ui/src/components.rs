//! Screen components.

pub mod auth;
pub mod dashboard;
pub mod editor;
pub mod markdown;
pub mod styles;
pub mod wizard;

pub use auth::AuthPanel;
pub use dashboard::Dashboard;
pub use editor::Editor;
pub use markdown::MarkdownView;
pub use styles::APP_STYLES;
pub use wizard::Wizard;
