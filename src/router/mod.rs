//! # Router Module
//!
//! Route registration and resolution across a hierarchy of mountable
//! sub-routers.
//!
//! ## Overview
//!
//! A [`Router`] owns an ordered [`RouteTable`] whose entries are either leaf
//! [`Route`](crate::Route)s or further routers mounted under a path prefix.
//! The router is responsible for:
//!
//! - Registering HTTP, static, and websocket routes
//! - Enforcing full-path uniqueness at registration time
//! - Mounting sub-routers to form a tree
//! - Resolving a request path to a route and its extracted parameters
//!
//! ## Architecture
//!
//! Registration and resolution are split into two phases:
//!
//! 1. **Build**: at startup, `add_route` / `add_websocket_route` / `mount`
//!    grow the tree through `&mut self`. Path templates are compiled once
//!    here, and every leaf registration re-flattens the tree to detect
//!    duplicate full paths.
//!
//! 2. **Serve**: per request, [`Router::get_route`] walks the tree top-down
//!    through `&self`, consuming one directory segment per router level and
//!    trying entries in registration order. The first structural match wins.
//!
//! ## Example
//!
//! ```rust
//! use trellis::Router;
//!
//! # fn main() -> Result<(), trellis::RouterError> {
//! let mut api: Router<&str> = Router::new();
//! api.add_route("/widgets/{id}", "get_widget", Some(&["GET"]), false)?;
//!
//! let mut root = Router::new();
//! root.mount(api, "/api")?;
//!
//! let found = root.get_route("/api/widgets/7").expect("route match");
//! assert_eq!(*found.route().handler(), "get_widget");
//! assert_eq!(found.get_param("id"), Some("7"));
//! # Ok(())
//! # }
//! ```

mod core;

pub use core::{RouteMatch, RouteTable, Router, TableEntry, ROUTER_PATH_PARAM};
