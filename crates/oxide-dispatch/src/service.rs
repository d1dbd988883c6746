//! Declarative web services.
//!
//! A [`ServiceTable`] describes dispatchers and their routes as data, so a
//! registry can be loaded from JSON:
//!
//! ```json
//! {
//!   "services": [
//!     {
//!       "root_path": "/users",
//!       "routes": [
//!         { "path": "/{id}", "method": "GET", "operation": "get_user" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::select::{Dispatcher, Route};

/// A route declared by a [`WebService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Template relative to the service root.
    pub path: String,
    /// HTTP method, left to the caller to interpret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Identifier of the handler this route maps to.
    pub operation: String,
}

impl RouteEntry {
    /// Creates a route with no method.
    pub fn new(path: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: None,
            operation: operation.into(),
        }
    }

    /// Creates a GET route.
    pub fn get(path: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(path, operation).method("GET")
    }

    /// Creates a POST route.
    pub fn post(path: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(path, operation).method("POST")
    }

    /// Sets the method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

impl Route for RouteEntry {
    fn relative_path(&self) -> &str {
        &self.path
    }
}

/// A root template with the routes nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebService {
    /// Template matched against the start of the request path.
    pub root_path: String,
    /// Routes matched against what the root leaves over.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl WebService {
    /// Creates a service with no routes.
    pub fn new(root_path: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            routes: Vec::new(),
        }
    }

    /// Adds a route.
    #[must_use]
    pub fn route(mut self, route: RouteEntry) -> Self {
        self.routes.push(route);
        self
    }
}

impl Dispatcher for WebService {
    type Route = RouteEntry;

    fn root_path(&self) -> &str {
        &self.root_path
    }

    fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }
}

/// A set of services loaded as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTable {
    #[serde(default)]
    pub services: Vec<WebService>,
}

impl ServiceTable {
    /// Parses a table from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a table from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the table to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the services as dispatchers.
    pub fn services(&self) -> &[WebService] {
        &self.services
    }
}
