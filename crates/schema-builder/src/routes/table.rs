use regex::Regex;
use schema_builder_core::{err, ActionReq, Error, Requirements, Result, Route};
use serde::Deserialize;
use std::path::Path;

/// The application's route table, in declaration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RouteTable {
    pub routes: Vec<Route>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoutesFile {
    #[serde(default)]
    routes: Vec<RouteDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteDef {
    #[serde(default)]
    verb: String,
    path: String,
    #[serde(default)]
    requirements: RequirementsDef,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequirementsDef {
    controller: Option<String>,
    action: Option<ActionDef>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ActionDef {
    Literal(String),
    Set(Vec<String>),
    Pattern { pattern: String },
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Load a route table from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        contents
            .parse()
            .map_err(|e: Error| e.context(err!("failed to load routes from {}", path.display())))
    }

    /// Loads the route table, or returns an empty one if the file does not
    /// exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if std::fs::exists(path)? {
            return Self::load(path);
        }
        tracing::warn!(path = %path.display(), "route table not found; no links will be generated");
        Ok(Self::default())
    }
}

impl std::str::FromStr for RouteTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let file: RoutesFile = toml::from_str(s)?;

        let routes = file
            .routes
            .into_iter()
            .map(RouteDef::into_route)
            .collect::<Result<_>>()?;

        Ok(RouteTable { routes })
    }
}

impl RouteDef {
    fn into_route(self) -> Result<Route> {
        let action = match self.requirements.action {
            None => ActionReq::None,
            Some(ActionDef::Literal(action)) => ActionReq::Literal(action),
            Some(ActionDef::Set(actions)) => ActionReq::LiteralSet(actions),
            Some(ActionDef::Pattern { pattern }) => match Regex::new(&pattern) {
                Ok(re) => ActionReq::Pattern(re),
                Err(e) => {
                    return Err(Error::invalid_route(
                        format!("{} {}", self.verb, self.path),
                        e.to_string(),
                    ))
                }
            },
        };

        Ok(Route {
            verb: self.verb,
            path: self.path,
            requirements: Requirements {
                controller: self.requirements.controller,
                action,
            },
        })
    }
}
