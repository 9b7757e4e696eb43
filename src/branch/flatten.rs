use super::{StructureError, StructureResult};
use crate::path::join_paths;
use crate::pattern::compute_score;
use crate::route::Route;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy)]
pub struct RouteMeta<'a> {
    pub relative_path: &'a str,
    pub children_index: usize,
    pub route: &'a Route,
}

pub type RouteMetaChain<'a> = SmallVec<[RouteMeta<'a>; 4]>;

/// One matchable candidate: a fully joined path plus every route from the
/// root down to the node that produced it.
#[derive(Debug, Clone)]
pub struct RouteBranch<'a> {
    pub path: String,
    pub score: i32,
    pub routes_meta: RouteMetaChain<'a>,
}

impl<'a> RouteBranch<'a> {
    pub fn route(&self) -> &'a Route {
        // chains always hold at least the originating route
        self.routes_meta[self.routes_meta.len() - 1].route
    }

    pub fn parent(&self) -> Option<&'a Route> {
        let len = self.routes_meta.len();
        if len < 2 {
            return None;
        }
        Some(self.routes_meta[len - 2].route)
    }

    pub fn children_indexes(&self) -> SmallVec<[usize; 4]> {
        self.routes_meta
            .iter()
            .map(|meta| meta.children_index)
            .collect()
    }
}

/// Flattens the route tree into branches. Children are emitted before their
/// parent and siblings in declaration order.
#[tracing::instrument(level = "trace", skip_all, fields(routes = routes.len()))]
pub fn flatten_routes(routes: &[Route]) -> StructureResult<Vec<RouteBranch<'_>>> {
    flatten_level(routes, &[], "")
}

fn flatten_level<'a>(
    routes: &'a [Route],
    parents_meta: &[RouteMeta<'a>],
    parent_path: &str,
) -> StructureResult<Vec<RouteBranch<'a>>> {
    let mut branches = Vec::with_capacity(routes.len());

    for (children_index, route) in routes.iter().enumerate() {
        validate_route(route, children_index, parent_path)?;

        let mut relative_path: &'a str = route.path.as_deref().unwrap_or("");
        if relative_path.starts_with('/') {
            relative_path = relative_path.strip_prefix(parent_path).ok_or_else(|| {
                StructureError::AbsolutePathOutsideParent {
                    path: relative_path.to_string(),
                    parent: parent_path.to_string(),
                }
            })?;
        }

        let path = join_paths([parent_path, relative_path]);
        let mut routes_meta: RouteMetaChain<'a> = parents_meta.iter().copied().collect();
        routes_meta.push(RouteMeta {
            relative_path,
            children_index,
            route,
        });

        if route.has_children() {
            if route.index {
                return Err(StructureError::IndexWithChildren {
                    parent: parent_path.to_string(),
                });
            }
            branches.extend(flatten_level(&route.children, &routes_meta, &path)?);
        }

        let score = compute_score(&path, route.index);
        tracing::trace!(path = %path, score, depth = routes_meta.len(), "flattened route branch");
        branches.push(RouteBranch {
            path,
            score,
            routes_meta,
        });
    }

    Ok(branches)
}

fn validate_route(route: &Route, index: usize, parent_path: &str) -> StructureResult<()> {
    if route.path.is_none() && !route.index && !route.has_children() {
        return Err(StructureError::MissingPathOrIndex {
            parent: parent_path.to_string(),
            index,
        });
    }

    if let Some(path) = route.path.as_deref()
        && !path.is_empty()
        && route.index
    {
        return Err(StructureError::PathAndIndexConflict {
            path: path.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(branches: &[RouteBranch<'_>]) -> Vec<String> {
        branches.iter().map(|branch| branch.path.clone()).collect()
    }

    #[test]
    fn emits_children_before_parent() {
        let routes = vec![
            Route::new("one").children([
                Route::new("two").children([Route::new("three")]),
                Route::index(),
            ]),
            Route::new("/four"),
        ];

        let branches = flatten_routes(&routes).unwrap();
        assert_eq!(
            paths(&branches),
            vec!["/one/two/three", "/one/two", "/one/", "/one", "/four"]
        );
        assert_eq!(branches[0].children_indexes().as_slice(), &[0, 0, 0]);
        assert_eq!(branches[2].children_indexes().as_slice(), &[0, 1]);
    }

    #[test]
    fn strips_parent_prefix_from_absolute_children() {
        let routes = vec![Route::new("/one").children([Route::new("/one/two")])];

        let branches = flatten_routes(&routes).unwrap();
        assert_eq!(paths(&branches), vec!["/one/two", "/one"]);
        assert_eq!(branches[0].routes_meta[1].relative_path, "/two");
    }

    #[test]
    fn layout_route_without_path_is_allowed() {
        let routes = vec![Route::layout().children([Route::new("about")])];

        let branches = flatten_routes(&routes).unwrap();
        assert_eq!(paths(&branches), vec!["/about", "/"]);
    }

    #[test]
    fn exposes_terminal_route_and_parent() {
        let routes = vec![Route::new("one").breadcrumb("Parent").children([Route::index()])];

        let branches = flatten_routes(&routes).unwrap();
        let index_branch = &branches[0];
        assert!(index_branch.route().index);
        assert_eq!(index_branch.parent().and_then(|p| p.path.as_deref()), Some("one"));
        assert!(branches[1].parent().is_none());
    }

    #[test]
    fn scores_are_computed_from_joined_paths() {
        let routes = vec![Route::new("/"), Route::index()];

        let branches = flatten_routes(&routes).unwrap();
        assert_eq!(branches[0].score, 4);
        assert_eq!(branches[1].score, 6);
    }

    #[test]
    fn empty_path_with_index_is_tolerated() {
        let mut route = Route::index();
        route.path = Some(String::new());

        assert!(flatten_routes(std::slice::from_ref(&route)).is_ok());
    }
}
