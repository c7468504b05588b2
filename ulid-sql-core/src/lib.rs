mod as_value;
mod column;
mod conversion;
mod dialect;
mod driver;
mod error;
mod nullable;
mod table_ref;
mod util;
mod value;
mod writer;

pub use as_value::*;
pub use column::*;
pub use conversion::*;
pub use dialect::*;
pub use driver::*;
pub use error::*;
pub use nullable::*;
pub use table_ref::*;
pub use util::*;
pub use value::*;
pub use writer::*;

pub use ::ulid::Ulid;
pub use ::uuid::Uuid;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
