//! Route entity: one registered endpoint.
//!
//! A [`Route`] binds a canonical path template and an HTTP method set to an
//! opaque handler value. The engine never invokes the handler; it only hands
//! a reference back to the caller on a successful match. Routes are immutable
//! after construction.

use http::Method;

use crate::error::RouterError;
use crate::template::PathTemplate;

/// The full standard HTTP method set, used when a route is registered
/// without an explicit method list.
pub const DEFAULT_METHODS: [Method; 9] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::CONNECT,
    Method::OPTIONS,
    Method::TRACE,
    Method::PATCH,
];

/// The kind of endpoint a route represents.
///
/// Closed set; every use site matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// A dynamic HTTP route matched against its path template
    Http,
    /// A static-file mount; matches unconditionally once reached
    Static,
    /// A websocket route; only registration is handled here
    WebSocket,
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RouteKind::Http => "Http",
            RouteKind::Static => "Static",
            RouteKind::WebSocket => "WebSocket",
        };
        write!(f, "{}", s)
    }
}

/// One registered endpoint.
///
/// `H` is the caller's handler type; the engine treats it as opaque.
#[derive(Debug, Clone)]
pub struct Route<H> {
    kind: RouteKind,
    path: String,
    template: PathTemplate,
    handler: H,
    methods: Vec<Method>,
}

impl<H> Route<H> {
    /// Construct a route from a canonical path template.
    ///
    /// Method tokens are upper-cased before parsing, so `["get", "Post"]`
    /// stores `[GET, POST]`. An empty or absent list substitutes
    /// [`DEFAULT_METHODS`]; the stored set is never empty.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidMethod`] for an unparseable method token,
    /// [`RouterError::InvalidTemplate`] if the template fails to compile.
    pub fn new(
        kind: RouteKind,
        path: &str,
        handler: H,
        methods: Option<&[&str]>,
    ) -> Result<Self, RouterError> {
        let template = PathTemplate::compile(path)?;
        let methods = normalize_methods(methods)?;
        Ok(Self {
            kind,
            path: path.to_string(),
            template,
            handler,
            methods,
        })
    }

    /// The kind of this route.
    #[must_use]
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// The canonical path template this route was registered under.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The compiled path template.
    #[must_use]
    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// The handler this route was registered with.
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The allowed method set. Never empty, always upper-case.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Case-insensitive membership test against the allowed method set.
    ///
    /// Exposed for the transport layer to reject disallowed methods after a
    /// path match; resolution itself never consults it.
    #[must_use]
    pub fn is_valid_method(&self, method: &str) -> bool {
        let upper = method.to_ascii_uppercase();
        self.methods.iter().any(|m| m.as_str() == upper)
    }
}

/// Upper-case and parse method tokens, falling back to the default set.
fn normalize_methods(methods: Option<&[&str]>) -> Result<Vec<Method>, RouterError> {
    match methods {
        None | Some([]) => Ok(DEFAULT_METHODS.to_vec()),
        Some(tokens) => tokens
            .iter()
            .map(|token| {
                let upper = token.to_ascii_uppercase();
                Method::from_bytes(upper.as_bytes())
                    .map_err(|_| RouterError::InvalidMethod { method: upper })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_are_upper_cased() {
        let route = Route::new(RouteKind::Http, "/users", (), Some(&["get", "Post"])).unwrap();
        let methods: Vec<&str> = route.methods().iter().map(Method::as_str).collect();
        assert_eq!(methods, ["GET", "POST"]);
    }

    #[test]
    fn absent_methods_fall_back_to_default_set() {
        let route = Route::new(RouteKind::Http, "/users", (), None).unwrap();
        assert_eq!(route.methods(), DEFAULT_METHODS.as_slice());
    }

    #[test]
    fn empty_method_list_falls_back_to_default_set() {
        let route = Route::new(RouteKind::Http, "/users", (), Some(&[])).unwrap();
        assert_eq!(route.methods(), DEFAULT_METHODS.as_slice());
        assert!(!route.methods().is_empty());
    }

    #[test]
    fn is_valid_method_is_case_insensitive() {
        let route = Route::new(RouteKind::Http, "/users", (), Some(&["GET"])).unwrap();
        assert!(route.is_valid_method("get"));
        assert!(route.is_valid_method("GET"));
        assert!(route.is_valid_method("GeT"));
        assert!(!route.is_valid_method("POST"));
    }

    #[test]
    fn invalid_method_token_is_rejected() {
        let err = Route::new(RouteKind::Http, "/users", (), Some(&["G E T"])).unwrap_err();
        assert_eq!(
            err,
            RouterError::InvalidMethod {
                method: "G E T".to_string()
            }
        );
    }

    #[test]
    fn websocket_route_gets_default_methods() {
        let route = Route::new(RouteKind::WebSocket, "/ws", (), None).unwrap();
        assert_eq!(route.kind(), RouteKind::WebSocket);
        assert_eq!(route.methods(), DEFAULT_METHODS.as_slice());
    }
}
