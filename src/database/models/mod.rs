pub mod store;

pub use store::{Store, StoreId, StoreRow, UserId};
