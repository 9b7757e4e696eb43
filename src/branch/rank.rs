use super::RouteBranch;
use std::cmp::Ordering;

/// Orders branches by descending score.
///
/// The sort is stable over flatten order, which lists true siblings by
/// ascending `children_index`; equal-score siblings therefore already honour
/// [`compare_indexes`] and unrelated equal-score branches keep flatten order.
#[tracing::instrument(level = "trace", skip_all, fields(branches = branches.len()))]
pub fn rank_route_branches(mut branches: Vec<RouteBranch<'_>>) -> Vec<RouteBranch<'_>> {
    branches.sort_by(|a, b| b.score.cmp(&a.score));
    debug_assert!(siblings_in_order(&branches));
    branches
}

/// Tie-break between two equal-score branches. Only true siblings (same
/// depth, same ancestors) are ordered, by declaration index; anything else is
/// `Equal`.
pub fn compare_indexes(a: &[usize], b: &[usize]) -> Ordering {
    match (a.split_last(), b.split_last()) {
        (Some((last_a, parents_a)), Some((last_b, parents_b)))
            if a.len() == b.len() && parents_a == parents_b =>
        {
            last_a.cmp(last_b)
        }
        _ => Ordering::Equal,
    }
}

fn siblings_in_order(branches: &[RouteBranch<'_>]) -> bool {
    branches.iter().enumerate().all(|(i, a)| {
        branches[i + 1..]
            .iter()
            .take_while(|b| b.score == a.score)
            .all(|b| {
                compare_indexes(&a.children_indexes(), &b.children_indexes()) != Ordering::Greater
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::flatten_routes;
    use crate::route::Route;

    fn ranked_paths(routes: &[Route]) -> Vec<String> {
        let branches = flatten_routes(routes).unwrap();
        rank_route_branches(branches)
            .into_iter()
            .map(|branch| branch.path)
            .collect()
    }

    #[test]
    fn compare_indexes_orders_only_siblings() {
        assert_eq!(compare_indexes(&[0, 1], &[0, 2]), Ordering::Less);
        assert_eq!(compare_indexes(&[3], &[2]), Ordering::Greater);
        assert_eq!(compare_indexes(&[0, 1], &[1, 0]), Ordering::Equal);
        assert_eq!(compare_indexes(&[0], &[0, 0]), Ordering::Equal);
        assert_eq!(compare_indexes(&[], &[]), Ordering::Equal);
    }

    #[test]
    fn static_branches_rank_above_dynamic_ones() {
        let routes = vec![
            Route::new("/"),
            Route::new("/user/:id"),
            Route::new("/user/create"),
        ];

        assert_eq!(
            ranked_paths(&routes),
            vec!["/user/create", "/user/:id", "/"]
        );
    }

    #[test]
    fn index_outranks_root_path() {
        let routes = vec![Route::new("/"), Route::index()];

        let ranked = rank_route_branches(flatten_routes(&routes).unwrap());
        assert!(ranked[0].route().index);
    }

    #[test]
    fn equal_score_siblings_keep_declaration_order() {
        let routes = vec![
            Route::new("user/create").breadcrumb("First"),
            Route::new("user/create").breadcrumb("Last"),
        ];

        let ranked = rank_route_branches(flatten_routes(&routes).unwrap());
        assert_eq!(ranked[0].children_indexes().as_slice(), &[0]);
        assert_eq!(ranked[1].children_indexes().as_slice(), &[1]);
    }

    #[test]
    fn equal_score_non_siblings_keep_flatten_order() {
        let routes = vec![
            Route::new("user/*").children([Route::index()]),
            Route::new("user/:pid").children([Route::new("*")]),
        ];

        let ranked = rank_route_branches(flatten_routes(&routes).unwrap());
        let order: Vec<(String, i32)> = ranked
            .iter()
            .map(|branch| (branch.path.clone(), branch.score))
            .collect();
        assert_eq!(
            order,
            vec![
                ("/user/:pid".to_string(), 17),
                ("/user/*/".to_string(), 16),
                ("/user/:pid/*".to_string(), 16),
                ("/user/*".to_string(), 12),
            ]
        );
        assert!(siblings_in_order(&ranked));
    }
}
