pub mod ownership;

pub use ownership::{authorize, AuthzError};
