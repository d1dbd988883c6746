//! # oxide-dispatch
//!
//! URI template route selection following the resource matching rules of
//! JSR311.
//!
//! This crate provides:
//! - Template compilation into anchored matching patterns
//! - Ranking of competing templates by specificity
//! - Dispatcher selection for a full request path
//! - Route selection beneath the chosen dispatcher
//! - An optional cache of compiled templates
//! - JSON-loadable service tables
//!
//! ## Quick Start
//!
//! ```
//! use oxide_dispatch::{resolve, RouteEntry, WebService};
//!
//! let services = vec![
//!     WebService::new("/users")
//!         .route(RouteEntry::get("/", "list_users"))
//!         .route(RouteEntry::get("/{id}", "get_user"))
//!         .route(RouteEntry::get("/{id}/posts", "list_user_posts")),
//!     WebService::new("/posts").route(RouteEntry::get("/{id}", "get_post")),
//! ];
//!
//! let found = resolve("/users/42/posts", &services).unwrap();
//! assert_eq!(found.dispatcher.root_path, "/users");
//! assert_eq!(found.remainder, "/42/posts");
//! assert_eq!(found.routes[0].operation, "list_user_posts");
//! ```
//!
//! ## Templates
//!
//! A template is a list of `/`-separated segments. Segments starting with
//! `{` are variables and match any single non-empty segment; everything
//! else matches literally.
//!
//! ```ignore
//! "/users/{id}/posts"
//! ```
//!
//! ## Ranking
//!
//! When several templates match, the winner has, in order of priority:
//!
//! 1. the most capture groups (the most segments consumed)
//! 2. the most literal characters
//! 3. the fewest variables
//!
//! Routes whose compiled patterns are identical are returned together so a
//! method dispatch layer can choose between them.
//!
//! ## Custom Registries
//!
//! Any registry can be resolved by implementing [`Dispatcher`] and
//! [`Route`]:
//!
//! ```ignore
//! impl Dispatcher for MyService {
//!     type Route = MyRoute;
//!
//!     fn root_path(&self) -> &str { &self.prefix }
//!     fn routes(&self) -> &[MyRoute] { &self.routes }
//! }
//! ```

mod cache;
mod candidate;
mod error;
mod resolver;
mod select;
mod service;
mod template;

pub use cache::TemplateCache;
pub use candidate::{Candidate, rank_candidates};
pub use error::{DispatchError, Result};
pub use resolver::{Resolution, Resolver, resolve};
pub use select::{Dispatcher, Route, select_dispatcher, select_routes};
pub use service::{RouteEntry, ServiceTable, WebService};
pub use template::{CompiledTemplate, TemplateMatch, template_to_expression};
