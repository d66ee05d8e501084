//! Router core: the route table, registration, and the resolution walk.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::RouterError;
use crate::path;
use crate::route::{Route, RouteKind};
use crate::template::ParamVec;

/// Parameter key carrying the consumed prefix of a matched static route.
pub const ROUTER_PATH_PARAM: &str = "router_path";

/// One entry in a router's table: a leaf route or a mounted sub-router.
#[derive(Debug, Clone)]
pub enum TableEntry<H> {
    /// A leaf endpoint
    Route(Route<H>),
    /// A sub-router mounted under this entry's key
    Router(Router<H>),
}

/// Ordered mapping from one normalized path segment to a [`TableEntry`].
///
/// Keys are single directory segments (`/users`, not `/users/1`) or the root
/// segment `/`. Insertion order is preserved and is semantically significant:
/// resolution tries entries in registration order and the first structural
/// match wins.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    entries: Vec<(String, TableEntry<H>)>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTable<H> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether `key` is a direct key of this table.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableEntry<H>)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Number of direct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, entry: TableEntry<H>) {
        self.entries.push((key, entry));
    }
}

/// Result of successfully resolving a request path to a route.
///
/// Borrows the matched route from the tree and carries the extracted path
/// parameters. For static routes the parameters hold a single
/// [`ROUTER_PATH_PARAM`] entry with the prefix consumed on the way down.
#[derive(Debug, Clone)]
pub struct RouteMatch<'r, H> {
    route: &'r Route<H>,
    params: ParamVec,
}

impl<'r, H> RouteMatch<'r, H> {
    /// The matched route.
    #[must_use]
    pub fn route(&self) -> &'r Route<H> {
        self.route
    }

    /// The extracted `(name, value)` parameter pairs, in template order.
    #[must_use]
    pub fn params(&self) -> &ParamVec {
        &self.params
    }

    /// Look up a parameter by name.
    ///
    /// Last write wins when a name repeats at different path depths.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Copy the parameters into a map. Allocates; prefer
    /// [`get_param`](Self::get_param) on hot paths.
    #[must_use]
    pub fn params_map(&self) -> HashMap<String, String> {
        self.params.iter().cloned().collect()
    }
}

/// A node in the routing tree.
///
/// A router owns an ordered [`RouteTable`] whose entries are leaf routes or
/// further routers (mounts). The tree is built once during startup via the
/// `&mut self` registration methods and is read-only afterwards: resolution
/// takes `&self`, so once registration ends any number of concurrent
/// resolutions may proceed without locking.
///
/// `H` is the caller's handler type; the router stores it and hands back a
/// reference on a match, nothing more.
#[derive(Debug, Clone)]
pub struct Router<H> {
    table: RouteTable<H>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RouteTable::new(),
        }
    }

    /// This router's table of direct entries.
    #[must_use]
    pub fn table(&self) -> &RouteTable<H> {
        &self.table
    }

    /// Register an HTTP route (or a static-file mount when `is_static`).
    ///
    /// The path is normalized to canonical form and checked against the
    /// freshly flattened path list of the whole tree, so a collision with a
    /// route nested under a mount is also rejected.
    ///
    /// # Errors
    ///
    /// [`RouterError::DuplicateRoute`] when the canonical path is already
    /// registered anywhere in the tree; [`RouterError::InvalidMethod`] /
    /// [`RouterError::InvalidTemplate`] from route construction.
    pub fn add_route(
        &mut self,
        path: &str,
        handler: H,
        methods: Option<&[&str]>,
        is_static: bool,
    ) -> Result<(), RouterError> {
        let kind = if is_static {
            RouteKind::Static
        } else {
            RouteKind::Http
        };
        self.register(path, handler, methods, kind)
    }

    /// Register a websocket route.
    ///
    /// Same normalization and duplicate check as [`add_route`](Self::add_route);
    /// the route carries the default method set. Websocket protocol handling
    /// itself is the transport layer's concern.
    ///
    /// # Errors
    ///
    /// [`RouterError::DuplicateRoute`] when the canonical path is already
    /// registered anywhere in the tree.
    pub fn add_websocket_route(&mut self, path: &str, handler: H) -> Result<(), RouterError> {
        self.register(path, handler, None, RouteKind::WebSocket)
    }

    fn register(
        &mut self,
        path: &str,
        handler: H,
        methods: Option<&[&str]>,
        kind: RouteKind,
    ) -> Result<(), RouterError> {
        let canonical = path::clean(path);
        if self.paths().contains(&canonical) {
            return Err(RouterError::DuplicateRoute { path: canonical });
        }
        let route = Route::new(kind, &canonical, handler, methods)?;
        info!(
            path = %canonical,
            kind = %route.kind(),
            methods = route.methods().len(),
            "Route registered"
        );
        self.table.insert(canonical, TableEntry::Route(route));
        Ok(())
    }

    /// Mount a sub-router under a path prefix.
    ///
    /// The prefix must be a single directory segment. Uniqueness here is
    /// deliberately weaker than for leaf routes: only the direct child keys
    /// of this router are checked, not the flattened path set of the whole
    /// tree. A mount may therefore shadow a deeply nested full path.
    ///
    /// # Errors
    ///
    /// [`RouterError::DuplicateMount`] when the prefix is already a direct
    /// child key of this router.
    pub fn mount(&mut self, router: Router<H>, prefix: &str) -> Result<(), RouterError> {
        let canonical = path::clean(prefix);
        if self.table.contains_key(&canonical) {
            return Err(RouterError::DuplicateMount { prefix: canonical });
        }
        info!(
            prefix = %canonical,
            entries = router.table.len(),
            "Sub-router mounted"
        );
        self.table.insert(canonical, TableEntry::Router(router));
        Ok(())
    }

    /// Flatten the tree into the full list of leaf-route paths.
    ///
    /// Recomputed on every call by a pure depth-first traversal; nothing is
    /// cached, since the tree only mutates during startup and duplicate
    /// detection wants the current truth. A route under a mount contributes
    /// its nearest mount key as prefix.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        Self::collect_paths(&self.table, None)
    }

    fn collect_paths(table: &RouteTable<H>, prefix: Option<&str>) -> Vec<String> {
        let mut paths = Vec::new();
        for (key, entry) in table.iter() {
            match entry {
                TableEntry::Route(route) => match prefix {
                    Some(prefix) => paths.push(format!("{}{}", prefix, route.path())),
                    None => paths.push(route.path().to_string()),
                },
                TableEntry::Router(sub) => {
                    paths.extend(Self::collect_paths(&sub.table, Some(key)));
                }
            }
        }
        paths
    }

    /// Resolve a request path to a route and its extracted parameters.
    ///
    /// Walks the tree depth-first in registration order, consuming one
    /// directory segment per router level. The first structural match wins;
    /// once a sub-router is entered, no alternative decomposition of the
    /// path is re-attempted within that mount. `None` is the expected
    /// no-match outcome, to be turned into "not found" by the transport.
    #[must_use]
    pub fn get_route(&self, request_path: &str) -> Option<RouteMatch<'_, H>> {
        debug!(path = %request_path, "Route match attempt");
        let result = Self::resolve(&self.table, request_path, None);
        match &result {
            Some(found) => debug!(
                path = %request_path,
                route = %found.route.path(),
                kind = %found.route.kind(),
                "Route matched"
            ),
            None => debug!(path = %request_path, "No route matched"),
        }
        result
    }

    fn resolve<'r>(
        table: &'r RouteTable<H>,
        request_path: &str,
        prev_path: Option<&str>,
    ) -> Option<RouteMatch<'r, H>> {
        for (key, entry) in table.iter() {
            match entry {
                TableEntry::Route(route) => match route.kind() {
                    // Static mounts defer fine-grained path resolution to the
                    // external static-file handler; all the match needs to
                    // say is which mount won and what prefix got consumed.
                    RouteKind::Static => {
                        let consumed = prev_path.unwrap_or("/").to_string();
                        let mut params = ParamVec::new();
                        params.push((ROUTER_PATH_PARAM.to_string(), consumed));
                        return Some(RouteMatch { route, params });
                    }
                    RouteKind::Http | RouteKind::WebSocket => {
                        if let Some(params) = route.template().extract(request_path) {
                            return Some(RouteMatch { route, params });
                        }
                    }
                },
                TableEntry::Router(sub) => {
                    let directories = path::to_directories(request_path);
                    let first = match directories.first() {
                        Some(first) => first.as_str(),
                        None => continue,
                    };

                    // More than one segment left and the first is not this
                    // mount's key: the request is not for this sub-router.
                    if directories.len() != 1 && first != key {
                        continue;
                    }

                    let descended = match prev_path {
                        Some(prev) if first != "/" => format!("{prev}{first}"),
                        None if directories.len() == 1 => "/".to_string(),
                        _ => first.to_string(),
                    };

                    // The sub-router sees everything below the consumed
                    // segment; an exhausted path reduces to the root.
                    let remainder = path::to_path(&directories[1..]);

                    if let Some(found) = Self::resolve(&sub.table, &remainder, Some(&descended)) {
                        return Some(found);
                    }
                }
            }
        }
        None
    }
}
