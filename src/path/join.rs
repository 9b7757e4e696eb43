use super::SEPARATOR;

/// Joins path pieces with a single separator, collapsing any run of
/// consecutive separators into one.
pub fn join_paths<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::new();
    let mut prev_was_slash = false;

    for (idx, piece) in paths.into_iter().enumerate() {
        if idx > 0 && !prev_was_slash {
            output.push(SEPARATOR);
            prev_was_slash = true;
        }

        for ch in piece.as_ref().chars() {
            if ch == SEPARATOR {
                if prev_was_slash {
                    continue;
                }
                prev_was_slash = true;
            } else {
                prev_was_slash = false;
            }
            output.push(ch);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_root_with_relative_child() {
        assert_eq!(join_paths(["", "one"]), "/one");
        assert_eq!(join_paths(["/", "users/*"]), "/users/*");
    }

    #[test]
    fn empty_pieces_collapse_to_root() {
        assert_eq!(join_paths(["", ""]), "/");
        assert_eq!(join_paths(["", "/"]), "/");
    }

    #[test]
    fn collapses_duplicate_separators_inside_pieces() {
        assert_eq!(join_paths(["/one", "/two"]), "/one/two");
        assert_eq!(join_paths(["//a//", "b///c"]), "/a/b/c");
    }

    #[test]
    fn keeps_trailing_separator_from_empty_child() {
        assert_eq!(join_paths(["/user/*", ""]), "/user/*/");
    }

    #[test]
    fn single_piece_is_returned_as_is() {
        assert_eq!(join_paths(["one"]), "one");
        assert_eq!(join_paths(Vec::<String>::new()), "");
    }
}
