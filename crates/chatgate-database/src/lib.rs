//! # chatgate-database
//!
//! The credential store. [`AccountStore`] is the seam the services depend
//! on; [`PgAccountStore`] backs it with PostgreSQL and
//! [`MemoryAccountStore`] keeps everything in process for tests and
//! local runs.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod open;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryAccountStore;
pub use open::{OpenedStore, open_store};
pub use repositories::PgAccountStore;
pub use store::AccountStore;
