//! Top-level request path resolution.

use std::sync::Arc;

use tracing::debug;

use crate::cache::TemplateCache;
use crate::error::Result;
use crate::select::Dispatcher;
use crate::template::CompiledTemplate;

/// The dispatcher and routes selected for a request path.
#[derive(Debug)]
pub struct Resolution<'a, D: Dispatcher> {
    /// The dispatcher owning the request.
    pub dispatcher: &'a D,
    /// The part of the path left over after the dispatcher's root.
    pub remainder: String,
    /// The best matching routes, tied on an identical pattern.
    pub routes: Vec<&'a D::Route>,
}

/// Resolves request paths against dispatchers and their routes.
///
/// By default every template is recompiled on each call. A resolver built
/// with [`Resolver::with_cache`] keeps compiled templates around instead.
///
/// # Example
///
/// ```
/// use oxide_dispatch::{Resolver, RouteEntry, WebService};
///
/// let users = WebService::new("/users")
///     .route(RouteEntry::get("/{id}", "get_user"))
///     .route(RouteEntry::get("/me", "current_user"));
///
/// let resolver = Resolver::with_cache();
/// let services = [users];
/// let found = resolver.resolve("/users/me", &services).unwrap();
/// assert_eq!(found.remainder, "/me");
/// assert_eq!(found.routes[0].operation, "current_user");
/// ```
#[derive(Debug, Default)]
pub struct Resolver {
    cache: Option<TemplateCache>,
    size_limit: Option<usize>,
}

impl Resolver {
    /// Creates a resolver that compiles templates on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver that caches compiled templates.
    pub fn with_cache() -> Self {
        Self {
            cache: Some(TemplateCache::new()),
            size_limit: None,
        }
    }

    /// Sets the regex size limit applied to compiled templates.
    ///
    /// Templates exceeding it are treated as malformed and skipped.
    #[must_use]
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        if self.cache.is_some() {
            self.cache = Some(TemplateCache::with_size_limit(bytes));
        }
        self
    }

    /// Returns the template cache, if this resolver has one.
    pub fn cache(&self) -> Option<&TemplateCache> {
        self.cache.as_ref()
    }

    pub(crate) fn compile(&self, template: &str) -> Result<Arc<CompiledTemplate>> {
        match (&self.cache, self.size_limit) {
            (Some(cache), _) => cache.get_or_compile(template),
            (None, Some(limit)) => {
                CompiledTemplate::compile_with_size_limit(template, limit).map(Arc::new)
            }
            (None, None) => CompiledTemplate::compile(template).map(Arc::new),
        }
    }

    /// Selects the dispatcher owning `path`, then the routes matching the
    /// rest of the path beneath it.
    pub fn resolve<'a, D: Dispatcher>(
        &self,
        path: &str,
        dispatchers: &'a [D],
    ) -> Result<Resolution<'a, D>> {
        let (dispatcher, remainder) = self.select_dispatcher(path, dispatchers)?;
        let routes = self.select_routes(dispatcher, &remainder)?;

        debug!(
            path,
            root = dispatcher.root_path(),
            remainder = remainder.as_str(),
            routes = routes.len(),
            "resolved request path"
        );

        Ok(Resolution {
            dispatcher,
            remainder,
            routes,
        })
    }
}

/// Resolves `path` with a resolver that does not cache templates.
pub fn resolve<'a, D: Dispatcher>(path: &str, dispatchers: &'a [D]) -> Result<Resolution<'a, D>> {
    Resolver::new().resolve(path, dispatchers)
}
