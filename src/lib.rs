#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod checksum;
mod data;
mod error;
mod field;
mod layout;
mod password;
mod savedata;
mod serialized;

pub use self::checksum::*;
pub use self::data::*;
pub use self::error::*;
pub use self::field::*;
pub use self::layout::*;
pub use self::password::*;
pub use self::savedata::*;
pub use self::serialized::*;
