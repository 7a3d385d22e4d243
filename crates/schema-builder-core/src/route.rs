mod action;
pub use action::ActionReq;

mod link;
pub use link::Link;

/// One entry of the application's route table.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// HTTP verb, possibly anchored (`^GET$`)
    pub verb: String,

    /// Path pattern, e.g. `/articles/:id(.:format)`
    pub path: String,

    pub requirements: Requirements,
}

/// The controller/action constraints a route dispatches to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requirements {
    pub controller: Option<String>,
    pub action: ActionReq,
}

impl Route {
    pub fn new(verb: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            path: path.into(),
            requirements: Requirements::default(),
        }
    }

    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.requirements.controller = Some(controller.into());
        self
    }

    pub fn action(mut self, action: impl Into<ActionReq>) -> Self {
        self.requirements.action = action.into();
        self
    }

    /// `VERB path`, used to identify the route in logs and errors.
    pub fn describe(&self) -> String {
        format!("{} {}", self.verb, self.path)
    }
}

impl Requirements {
    pub fn is_empty(&self) -> bool {
        self.controller.is_none() && self.action.is_none()
    }
}
