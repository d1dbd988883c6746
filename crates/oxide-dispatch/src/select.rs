//! Route and dispatcher selection.
//!
//! Both selectors compile each candidate's template, keep the ones that
//! match, rank them with [`Candidate::rank`] and pick the best. A
//! dispatcher may leave part of the path for its routes; a route must
//! consume everything that is left.

use tracing::{debug, trace, warn};

use crate::candidate::{Candidate, rank_candidates};
use crate::error::{DispatchError, Result};
use crate::resolver::Resolver;

/// A template mapped to a request handler.
pub trait Route {
    /// The route's template, relative to its dispatcher's root.
    fn relative_path(&self) -> &str;
}

/// An owner of a root template and the routes beneath it.
pub trait Dispatcher {
    /// The route type this dispatcher holds.
    type Route: Route;

    /// The template every route of this dispatcher is nested under.
    fn root_path(&self) -> &str;

    /// All routes of this dispatcher.
    fn routes(&self) -> &[Self::Route];
}

impl Resolver {
    /// Selects the routes of `dispatcher` matching `remainder`.
    ///
    /// An empty remainder, or a lone `/`, selects every route. Otherwise
    /// only routes consuming the whole remainder qualify, and all routes
    /// sharing the best ranked pattern are returned.
    pub fn select_routes<'a, D: Dispatcher>(
        &self,
        dispatcher: &'a D,
        remainder: &str,
    ) -> Result<Vec<&'a D::Route>> {
        let routes = dispatcher.routes();
        if remainder.is_empty() || remainder == "/" {
            return Ok(routes.iter().collect());
        }

        let mut candidates: Vec<_> = self
            .candidates(routes.iter().map(|r| (r, r.relative_path())), remainder)
            .into_iter()
            .filter(|c| c.remainder.is_empty() || c.remainder == "/")
            .collect();

        if candidates.is_empty() {
            debug!(remainder, "no route matched");
            return Err(DispatchError::not_found(remainder));
        }

        rank_candidates(&mut candidates);
        let best = candidates[0].expression.clone();
        let selected: Vec<_> = candidates
            .into_iter()
            .filter(|c| c.expression == best)
            .map(|c| c.owner)
            .collect();

        debug!(
            remainder,
            expression = best.as_str(),
            routes = selected.len(),
            "selected routes"
        );
        Ok(selected)
    }

    /// Selects the dispatcher owning `path` along with the part of the path
    /// its root template did not consume.
    pub fn select_dispatcher<'a, D: Dispatcher>(
        &self,
        path: &str,
        dispatchers: &'a [D],
    ) -> Result<(&'a D, String)> {
        let mut candidates =
            self.candidates(dispatchers.iter().map(|d| (d, d.root_path())), path);

        if candidates.is_empty() {
            debug!(path, "no dispatcher matched");
            return Err(DispatchError::not_found(path));
        }

        rank_candidates(&mut candidates);
        let best = candidates.swap_remove(0);

        debug!(
            path,
            root = best.owner.root_path(),
            remainder = best.remainder.as_str(),
            "selected dispatcher"
        );
        Ok((best.owner, best.remainder))
    }

    /// Compiles and matches every template, skipping malformed ones.
    fn candidates<'t, T>(
        &self,
        owners: impl Iterator<Item = (T, &'t str)>,
        path: &str,
    ) -> Vec<Candidate<T>> {
        let mut candidates = Vec::new();

        for (owner, template) in owners {
            let compiled = match self.compile(template) {
                Ok(compiled) => compiled,
                Err(error) => {
                    warn!(template, %error, "ignoring invalid template");
                    continue;
                }
            };

            if let Some(matched) = compiled.match_path(path) {
                trace!(
                    template,
                    matches = matched.matches_count,
                    literals = compiled.literal_count(),
                    vars = compiled.var_count(),
                    remainder = matched.remainder.as_str(),
                    "template matched"
                );
                candidates.push(Candidate::new(owner, &compiled, matched));
            }
        }

        candidates
    }
}

/// Selects the routes of `dispatcher` matching `remainder`, compiling every
/// template afresh.
///
/// See [`Resolver::select_routes`].
pub fn select_routes<'a, D: Dispatcher>(
    dispatcher: &'a D,
    remainder: &str,
) -> Result<Vec<&'a D::Route>> {
    Resolver::new().select_routes(dispatcher, remainder)
}

/// Selects the dispatcher owning `path`, compiling every template afresh.
///
/// See [`Resolver::select_dispatcher`].
pub fn select_dispatcher<'a, D: Dispatcher>(
    path: &str,
    dispatchers: &'a [D],
) -> Result<(&'a D, String)> {
    Resolver::new().select_dispatcher(path, dispatchers)
}
