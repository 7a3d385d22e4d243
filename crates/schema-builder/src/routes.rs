mod table;
pub use table::RouteTable;

use indexmap::IndexMap;
use regex::{NoExpand, Regex};
use schema_builder_core::{Link, Route};
use std::sync::LazyLock;

/// Controllers that never publish links.
const SKIP_CONTROLLERS: [&str; 4] = ["passwords", "sessions", "users", "admin"];

/// Actions that only render forms and never publish links.
const SKIP_ACTIONS: [&str; 2] = ["edit", "new"];

const FORMAT_SUFFIX: &str = "(.:format)";

static ID_PARAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":id\b").unwrap());

/// Links grouped by controller name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RouteIndex {
    links: IndexMap<String, Vec<Link>>,
}

impl RouteIndex {
    /// Indexes `routes` in order.
    ///
    /// Routes with empty requirements, an excluded controller or an excluded
    /// action are dropped. Within a controller only the first route for each
    /// relation is kept.
    pub fn build(routes: &[Route]) -> RouteIndex {
        let mut links: IndexMap<String, Vec<Link>> = IndexMap::new();

        for route in routes {
            let Some((controller, link)) = link_for(route) else {
                continue;
            };

            let entry = links.entry(controller.to_string()).or_default();
            if entry.iter().any(|existing| existing.rel == link.rel) {
                tracing::debug!(route = %route.describe(), rel = %link.rel, "duplicate relation");
                continue;
            }
            entry.push(link);
        }

        RouteIndex { links }
    }

    /// Links for `controller`; empty if it has none.
    pub fn links(&self, controller: &str) -> &[Link] {
        self.links
            .get(controller)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Indexed controllers, in the order they were first seen.
    pub fn controllers(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

fn link_for(route: &Route) -> Option<(&str, Link)> {
    let reqs = &route.requirements;
    if reqs.is_empty() {
        return None;
    }

    let Some(controller) = reqs.controller.as_deref() else {
        tracing::debug!(route = %route.describe(), "skipping route without controller");
        return None;
    };

    if SKIP_CONTROLLERS.iter().any(|skip| controller.contains(skip)) {
        return None;
    }

    if SKIP_ACTIONS.iter().any(|skip| reqs.action.matches(skip)) {
        return None;
    }

    let Some(rel) = reqs.action.identifier() else {
        tracing::debug!(route = %route.describe(), "skipping route without action");
        return None;
    };

    Some((
        controller,
        Link {
            rel,
            method: method(&route.verb),
            href: href(&route.path),
        },
    ))
}

/// `^GET$` -> `GET`
fn method(verb: &str) -> String {
    verb.replace(['^', '$'], "")
}

/// `/articles/:id(.:format)` -> `/articles/{id}`
fn href(path: &str) -> String {
    let path = path.replace(FORMAT_SUFFIX, "");
    ID_PARAM.replace_all(&path, NoExpand("{id}")).into_owned()
}
