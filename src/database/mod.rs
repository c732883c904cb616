pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

pub use manager::{connect, DatabaseError};
pub use memory::MemoryStoreRepository;
pub use models::{Store, StoreId, UserId};
pub use postgres::PgStoreRepository;
pub use repository::{RepositoryError, StoreRepository};
