mod column;
pub use column::{Column, ColumnType};

mod inflections;
pub use inflections::Inflections;

mod model;
pub use model::Model;

mod name;
pub use name::Name;
