//! # sharedrop-database
//!
//! PostgreSQL connection management, migrations, and the durable share
//! store. The [`ShareStore`] trait is the seam the service layer depends
//! on; [`ShareRepository`] backs it with PostgreSQL and
//! [`MemoryShareRepository`] with process memory.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::{MemoryShareRepository, ShareRepository};
pub use store::ShareStore;
