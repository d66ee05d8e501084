//! # trellis
//!
//! A hierarchical, mountable route registration and resolution engine.
//!
//! ## Overview
//!
//! trellis resolves an incoming request path to a registered handler and
//! extracts named path parameters, across a tree of mountable sub-routers.
//! It is deliberately transport-agnostic: the handler type is a generic
//! parameter the engine never invokes, websocket routes are registered but
//! not spoken, and method enforcement is exposed as a primitive
//! ([`Route::is_valid_method`]) for the transport layer to apply after a
//! path match.
//!
//! ## Architecture
//!
//! The library is organized leaf-first:
//!
//! - **[`path`]** - canonical path form and directory-token conversion
//! - **[`template`]** - `{name}` path templates compiled to matchers at
//!   registration time
//! - **[`route`]** - the immutable route entity: kind, template, handler,
//!   method set
//! - **[`router`]** - the ordered route table, mounting, uniqueness checks,
//!   and the recursive resolution walk
//! - **[`error`]** - typed registration failures
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::Router;
//!
//! # fn main() -> Result<(), trellis::RouterError> {
//! let mut widgets: Router<&str> = Router::new();
//! widgets.add_route("/widgets", "list_widgets", Some(&["GET"]), false)?;
//! widgets.add_route("/widgets/{id}", "get_widget", Some(&["GET"]), false)?;
//!
//! let mut app = Router::new();
//! app.add_route("/health", "health_check", Some(&["GET"]), false)?;
//! app.mount(widgets, "/api")?;
//!
//! if let Some(found) = app.get_route("/api/widgets/42") {
//!     assert_eq!(*found.route().handler(), "get_widget");
//!     assert_eq!(found.get_param("id"), Some("42"));
//!     assert!(found.route().is_valid_method("get"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Lifecycle
//!
//! The tree is built once during startup and is read-only while serving.
//! Registration takes `&mut self` and resolution takes `&self`, so the
//! build-then-serve phase split is enforced by the borrow checker: once the
//! tree is frozen, any number of threads may resolve concurrently without
//! locking. Nothing is ever removed from the tree.

pub mod error;
pub mod path;
pub mod route;
pub mod router;
pub mod template;

pub use error::RouterError;
pub use route::{Route, RouteKind, DEFAULT_METHODS};
pub use router::{RouteMatch, RouteTable, Router, TableEntry, ROUTER_PATH_PARAM};
pub use template::{ParamVec, PathTemplate, MAX_INLINE_PARAMS};
