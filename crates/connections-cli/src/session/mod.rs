//! Session persistence between CLI runs.

pub mod storage;

pub use storage::StoredSession;
