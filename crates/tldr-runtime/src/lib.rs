//! # TLDR Runtime
//!
//! The user-facing surfaces of TLDR and the plumbing between them:
//!
//! - [`Extension`] - one-time initialization and access to every surface
//! - [`Popup`] - summarize the active page on demand
//! - [`OptionsPage`] - edit, save and test settings
//! - [`Background`] - context-menu summaries delivered as notifications
//! - [`MessageRouter`] - request/response messages between surfaces
//!
//! Browser facilities are traits: [`TabSource`] for the active page and
//! [`Notifier`] for notifications.

mod background;
mod error;
mod lifecycle;
mod message;
mod notify;
mod options;
mod popup;
mod router;
mod summarizer;
mod tabs;

pub use background::{Background, MenuClick};
pub use error::SurfaceError;
pub use lifecycle::{
    ContextMenuItem, Extension, ExtensionContext, InstallReason, MenuContext, SUMMARIZE_MENU_ID,
};
pub use message::{SurfaceRequest, SurfaceResponse};
pub use notify::{LogNotifier, Notification, Notifier};
pub use options::{ConnectionStatus, OptionsPage, SaveStatus};
pub use popup::{Popup, PopupState, PopupStatus};
pub use router::MessageRouter;
pub use summarizer::{ClientOptions, Summarizer, truncate_chars};
pub use tabs::{StaticTab, TabSource};
