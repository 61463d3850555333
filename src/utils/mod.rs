pub mod datetime;

pub use datetime::{ParseError, WireTime};
