//! Client side of the game catalog: HTTP adapter, observable stores and
//! terminal views over them.

pub mod api;
pub mod error;
pub mod notify;
pub mod store;
pub mod views;

pub use api::ApiClient;
pub use error::{ClientError, Result};
pub use notify::{AlwaysConfirm, Confirm, Notification, NotificationLevel, Notifier, TracingNotifier};
pub use store::{GameInput, GameState, GameStore, GenreRef, GenreStore, Stores};
