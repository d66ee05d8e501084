use std::fmt;

/// Registration error.
///
/// Returned by [`Router::add_route`](crate::Router::add_route),
/// [`Router::add_websocket_route`](crate::Router::add_websocket_route) and
/// [`Router::mount`](crate::Router::mount) when a registration would violate
/// a tree invariant. Registration happens once at startup, so these are
/// configuration mistakes to fix, not runtime conditions to recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A leaf route with the same full path is already registered
    ///
    /// Checked against the freshly flattened path list of the whole tree,
    /// so the collision may come from a route nested under a mount.
    DuplicateRoute {
        /// The canonical path that collided
        path: String,
    },
    /// The mount prefix is already a direct child key of this router
    ///
    /// Unlike route registration this check is not recursive; only the
    /// immediate table keys of the target router are consulted.
    DuplicateMount {
        /// The canonical prefix that collided
        prefix: String,
    },
    /// A method token could not be parsed as an HTTP method
    InvalidMethod {
        /// The offending token, after upper-casing
        method: String,
    },
    /// A path template failed to compile
    InvalidTemplate {
        /// The template that failed
        pattern: String,
        /// Compiler diagnostic
        message: String,
    },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::DuplicateRoute { path } => {
                write!(
                    f,
                    "route registration error: a route for '{}' already exists in the tree",
                    path
                )
            }
            RouterError::DuplicateMount { prefix } => {
                write!(
                    f,
                    "mount registration error: '{}' is already a direct child of this router",
                    prefix
                )
            }
            RouterError::InvalidMethod { method } => {
                write!(
                    f,
                    "route registration error: '{}' is not a valid HTTP method token",
                    method
                )
            }
            RouterError::InvalidTemplate { pattern, message } => {
                write!(
                    f,
                    "route registration error: path template '{}' failed to compile: {}",
                    pattern, message
                )
            }
        }
    }
}

impl std::error::Error for RouterError {}
