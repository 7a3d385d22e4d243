#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Column, ColumnType, Inflections, Model, Name};

pub mod route;
pub use route::{ActionReq, Link, Requirements, Route};

/// A Result type alias that uses the schema builder's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
