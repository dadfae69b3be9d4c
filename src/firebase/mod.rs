//! Firebase Realtime Database REST client.
//!
//! The dashboard reads live query snapshots and the cleanup job deletes old
//! children through the same thin client. Authentication uses the database's
//! legacy token, sent as an `auth` query parameter.

mod client;

pub use client::{FirebaseClient, FirebaseError, FirebaseResult};
