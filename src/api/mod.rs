pub mod decode;

pub use decode::{decode_json, DecodeError, JsonBody};
