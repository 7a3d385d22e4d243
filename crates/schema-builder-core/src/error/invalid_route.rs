use super::Error;

/// Error when a route table entry cannot be interpreted, e.g. an action
/// pattern that is not a valid regular expression.
#[derive(Debug)]
pub(super) struct InvalidRouteError {
    route: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidRouteError {}

impl core::fmt::Display for InvalidRouteError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid route `{}`: {}", self.route, self.message)
    }
}

impl Error {
    /// Creates an invalid route error. `route` identifies the entry, usually
    /// as `VERB path`.
    pub fn invalid_route(route: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRoute(InvalidRouteError {
            route: route.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid route error.
    pub fn is_invalid_route(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRoute(_))
    }
}
