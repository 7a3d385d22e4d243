mod config;
pub use config::{Config, ProjectFile, PROJECT_FILE_NAME};

pub mod emit;
pub use emit::{FileAction, ModelDocuments, Plan, PlannedFile, Report};

pub mod models;
pub use models::{ModelGlob, ModelSource};

pub mod routes;
pub use routes::{RouteIndex, RouteTable};

pub mod synth;
pub use synth::{Property, SchemaDocument, UiField, UiSchemaDocument};

mod writer;
pub use writer::Writer;

pub use schema_builder_core::{
    ActionReq, Column, ColumnType, Error, Inflections, Link, Model, Name, Requirements, Result,
    Route,
};
