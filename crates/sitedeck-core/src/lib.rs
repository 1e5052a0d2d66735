//! Client-side data synchronization for the sitedeck console.
//!
//! The crate mirrors server state in a single immutable snapshot tree
//! and keeps it consistent through a dispatch loop:
//!
//! UI event → [`sync::SyncService`] thunk → [`sitedeck_api::ApiClient`]
//! → dispatched [`store::Action`] → pure reducers fold the action into
//! the snapshot → [`store::selectors`] project it for rendering. The
//! [`store::Notifier`] observes the action stream for side-effect-only
//! toasts.

pub mod error;
pub mod store;
pub mod sync;

pub use error::CoreError;
pub use store::{Action, ActionKind, AppState, Notifier, Store};
pub use sync::{ErrorReporting, SyncService};
