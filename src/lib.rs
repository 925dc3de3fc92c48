//! Membership-management core for a campus chapter app.
//!
//! The crate is the client-side state store behind the app's screens: the
//! entity model, the store's mutation operations (RSVP, issue submission,
//! task toggling, payment status), derived analytics, and the hydrate/persist
//! lifecycle against a single-key local cache. Screens, navigation and the
//! OTP login flow live elsewhere and only consume the interfaces exposed here.

pub mod analytics;
pub mod config;
pub mod model;
pub mod seed;
pub mod storage;
pub mod store;

pub use store::{persist_queue, AppStore, CacheSnapshot, PersistWorker, CACHE_KEY};
