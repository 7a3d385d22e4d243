use serde::{Deserialize, Serialize};

/// A JSON Schema `links` entry describing an action available on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub method: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, method: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            method: method.into(),
            href: href.into(),
        }
    }
}
