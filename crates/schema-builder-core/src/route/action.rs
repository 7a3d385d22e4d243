use regex::Regex;

/// How a route constrains its action.
#[derive(Debug, Clone, Default)]
pub enum ActionReq {
    /// No action constraint
    #[default]
    None,

    /// A single fixed action
    Literal(String),

    /// Any of a fixed set of actions
    LiteralSet(Vec<String>),

    /// Actions matching a regular expression
    Pattern(Regex),
}

impl ActionReq {
    pub fn is_none(&self) -> bool {
        matches!(self, ActionReq::None)
    }

    /// Returns `true` if `candidate` is an action this requirement admits.
    ///
    /// Patterns are searched, not anchored, so `edit|update` matches `edit`.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            ActionReq::None => false,
            ActionReq::Literal(action) => action == candidate,
            ActionReq::LiteralSet(actions) => actions.iter().any(|action| action == candidate),
            ActionReq::Pattern(pattern) => pattern.is_match(candidate),
        }
    }

    /// The relation name a link to this action is published under.
    pub fn identifier(&self) -> Option<String> {
        match self {
            ActionReq::None => None,
            ActionReq::Literal(action) => Some(action.clone()),
            ActionReq::LiteralSet(actions) if actions.is_empty() => None,
            ActionReq::LiteralSet(actions) => Some(actions.join("|")),
            ActionReq::Pattern(pattern) => Some(pattern.as_str().to_string()),
        }
    }
}

impl PartialEq for ActionReq {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ActionReq::None, ActionReq::None) => true,
            (ActionReq::Literal(a), ActionReq::Literal(b)) => a == b,
            (ActionReq::LiteralSet(a), ActionReq::LiteralSet(b)) => a == b,
            (ActionReq::Pattern(a), ActionReq::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for ActionReq {
    fn from(action: &str) -> Self {
        ActionReq::Literal(action.to_string())
    }
}

impl From<String> for ActionReq {
    fn from(action: String) -> Self {
        ActionReq::Literal(action)
    }
}

impl From<Vec<String>> for ActionReq {
    fn from(actions: Vec<String>) -> Self {
        ActionReq::LiteralSet(actions)
    }
}

impl From<Regex> for ActionReq {
    fn from(pattern: Regex) -> Self {
        ActionReq::Pattern(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_matches_nothing() {
        assert!(!ActionReq::None.matches("edit"));
        assert_eq!(ActionReq::None.identifier(), None);
    }

    #[test]
    fn literal_matches_exactly() {
        let action = ActionReq::from("edit");
        assert!(action.matches("edit"));
        assert!(!action.matches("edit_all"));
    }

    #[test]
    fn literal_set_matches_members() {
        let action = ActionReq::from(vec!["show".to_string(), "new".to_string()]);
        assert!(action.matches("new"));
        assert!(!action.matches("edit"));
        assert_eq!(action.identifier().as_deref(), Some("show|new"));
    }

    #[test]
    fn pattern_searches() {
        let action = ActionReq::from(Regex::new("ed|upd").unwrap());
        assert!(action.matches("edit"));
        assert!(!action.matches("new"));
        assert_eq!(action.identifier().as_deref(), Some("ed|upd"));
    }
}
