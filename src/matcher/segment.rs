use crate::branch::{RouteBranch, flatten_routes, rank_route_branches};
use crate::errors::BreadcrumbResult;
use crate::pattern::{CompiledPattern, PathMatch, PathPattern, PatternResult, compile_path};
use crate::route::{BreadcrumbLabel, Route};
use hashbrown::HashMap as FastHashMap;
use std::sync::Arc;

/// The first ranked branch that matched a pathname.
#[derive(Debug, Clone)]
pub struct SegmentMatch<'r> {
    pub path_match: PathMatch,
    pub route: &'r Route,
    pub parent: Option<&'r Route>,
    pub score: i32,
}

impl<'r> SegmentMatch<'r> {
    /// The label to show for this match. An index route without a label of
    /// its own borrows its parent's.
    pub fn label(&self) -> Option<&'r BreadcrumbLabel> {
        match self.route.breadcrumb.as_ref().filter(|label| !label.is_blank()) {
            Some(label) => Some(label),
            None if self.route.index => self
                .parent
                .and_then(|parent| parent.breadcrumb.as_ref())
                .filter(|label| label.is_renderable()),
            None => None,
        }
    }
}

#[derive(Debug)]
struct Candidate<'r> {
    branch: RouteBranch<'r>,
    pattern: Arc<CompiledPattern>,
}

/// Ranked branches with their patterns compiled, ready to be tested against
/// every section of one pathname.
#[derive(Debug)]
pub struct SegmentMatcher<'r> {
    candidates: Vec<Candidate<'r>>,
}

impl<'r> SegmentMatcher<'r> {
    pub fn from_routes(routes: &'r [Route]) -> BreadcrumbResult<Self> {
        let branches = rank_route_branches(flatten_routes(routes)?);
        Ok(Self::new(branches)?)
    }

    /// `branches` must already be ranked.
    pub fn new(branches: Vec<RouteBranch<'r>>) -> PatternResult<Self> {
        let mut compiled: FastHashMap<PathPattern, Arc<CompiledPattern>> = FastHashMap::new();
        let mut candidates = Vec::with_capacity(branches.len());

        for branch in branches {
            let key = PathPattern::new(branch.path.as_str())
                .case_sensitive(branch.route().case_sensitive);
            let pattern = match compiled.get(&key) {
                Some(existing) => existing.clone(),
                None => {
                    let pattern = Arc::new(compile_path(&key)?);
                    compiled.insert(key, pattern.clone());
                    pattern
                }
            };
            candidates.push(Candidate { branch, pattern });
        }

        Ok(Self { candidates })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn branches(&self) -> impl Iterator<Item = &RouteBranch<'r>> {
        self.candidates.iter().map(|candidate| &candidate.branch)
    }

    #[tracing::instrument(level = "trace", skip(self), fields(candidates = self.candidates.len()))]
    pub fn find(&self, pathname: &str) -> Option<SegmentMatch<'r>> {
        self.candidates.iter().find_map(|candidate| {
            let path_match = candidate.pattern.match_pathname(pathname)?;
            Some(SegmentMatch {
                path_match,
                route: candidate.branch.route(),
                parent: candidate.branch.parent(),
                score: candidate.branch.score,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found_path(matcher: &SegmentMatcher<'_>, pathname: &str) -> Option<String> {
        matcher
            .find(pathname)
            .map(|found| found.path_match.pattern.path)
    }

    #[test]
    fn picks_highest_ranked_match() {
        let routes = vec![
            Route::new("/user/:id"),
            Route::new("/user/create"),
            Route::new("*"),
        ];
        let matcher = SegmentMatcher::from_routes(&routes).unwrap();

        assert_eq!(found_path(&matcher, "/user/create").as_deref(), Some("/user/create"));
        assert_eq!(found_path(&matcher, "/user/42").as_deref(), Some("/user/:id"));
        assert_eq!(found_path(&matcher, "/other/place").as_deref(), Some("/*"));
    }

    #[test]
    fn no_match_is_none() {
        let routes = vec![Route::new("/one")];
        let matcher = SegmentMatcher::from_routes(&routes).unwrap();

        assert!(matcher.find("/two").is_none());
        assert_eq!(matcher.len(), 1);
    }

    #[test]
    fn honours_route_case_sensitivity() {
        let routes = vec![
            Route::new("/one").case_sensitive(true),
            Route::new("/two"),
        ];
        let matcher = SegmentMatcher::from_routes(&routes).unwrap();

        assert!(matcher.find("/OnE").is_none());
        assert!(matcher.find("/one").is_some());
        assert!(matcher.find("/TWO").is_some());
    }

    #[test]
    fn index_route_inherits_parent_label() {
        let routes = vec![Route::new("one").breadcrumb("Parent").children([Route::index()])];
        let matcher = SegmentMatcher::from_routes(&routes).unwrap();

        let found = matcher.find("/one").unwrap();
        assert!(found.route.index);
        assert!(matches!(found.label(), Some(BreadcrumbLabel::Text(text)) if text == "Parent"));
    }

    #[test]
    fn index_route_does_not_inherit_hidden_parent() {
        let routes = vec![Route::new("one").hidden().children([Route::index()])];
        let matcher = SegmentMatcher::from_routes(&routes).unwrap();

        assert!(matcher.find("/one").unwrap().label().is_none());
    }

    #[test]
    fn duplicate_patterns_share_compiled_matcher() {
        let routes = vec![Route::new("a"), Route::new("/a")];
        let matcher = SegmentMatcher::from_routes(&routes).unwrap();

        let patterns: Vec<_> = matcher.candidates.iter().map(|c| c.pattern.clone()).collect();
        assert!(Arc::ptr_eq(&patterns[0], &patterns[1]));
        assert_eq!(matcher.branches().count(), 2);
    }
}
