use crate::path::{SEPARATOR, SegmentKind};

const DYNAMIC_SEGMENT_VALUE: i32 = 3;
const INDEX_ROUTE_VALUE: i32 = 2;
const EMPTY_SEGMENT_VALUE: i32 = 1;
const STATIC_SEGMENT_VALUE: i32 = 10;
const SPLAT_PENALTY: i32 = -2;

/// Specificity of a joined branch path. Longer and more static paths score
/// higher, splats are pushed down and index routes are lifted.
pub fn compute_score(path: &str, index: bool) -> i32 {
    let kinds: Vec<SegmentKind> = path.split(SEPARATOR).map(SegmentKind::classify).collect();

    let mut score = kinds.len() as i32;
    if kinds.contains(&SegmentKind::Splat) {
        score += SPLAT_PENALTY;
    }
    if index {
        score += INDEX_ROUTE_VALUE;
    }

    for kind in kinds {
        score += match kind {
            SegmentKind::Static => STATIC_SEGMENT_VALUE,
            SegmentKind::Dynamic => DYNAMIC_SEGMENT_VALUE,
            SegmentKind::Empty => EMPTY_SEGMENT_VALUE,
            SegmentKind::Splat => 0,
        };
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_root_and_index() {
        assert_eq!(compute_score("/", false), 4);
        assert_eq!(compute_score("/", true), 6);
    }

    #[test]
    fn static_outranks_dynamic() {
        let create = compute_score("/user/create", false);
        let by_id = compute_score("/user/:id", false);
        assert_eq!(create, 24);
        assert_eq!(by_id, 17);
        assert!(create > by_id);
    }

    #[test]
    fn splat_is_penalized() {
        assert_eq!(compute_score("/*", false), 1);
        assert_eq!(compute_score("/user/*", false), 12);
        assert!(compute_score("/user/*", false) < compute_score("/user", false));
    }

    #[test]
    fn trailing_empty_segment_counts() {
        assert_eq!(compute_score("/user/*/", true), 16);
        assert_eq!(compute_score("/user/:pid/*", false), 16);
    }
}
