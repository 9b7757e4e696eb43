use super::{ROOT, SEPARATOR};
use memchr::memchr;

/// One cumulative prefix of a location pathname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSection<'a> {
    /// Raw segment text as it appears in the URL (empty for the root).
    pub segment: &'a str,
    /// Accumulated pathname up to and including `segment`.
    pub pathname: String,
}

impl PathSection<'_> {
    pub fn is_root(&self) -> bool {
        self.pathname == ROOT
    }
}

#[inline]
pub fn strip_query(pathname: &str) -> &str {
    match memchr(b'?', pathname.as_bytes()) {
        Some(pos) => &pathname[..pos],
        None => pathname,
    }
}

/// Splits a pathname into cumulative sections, root first.
///
/// `/one/two` yields `/`, `/one`, `/one/two`. The query suffix is ignored and
/// repeated or trailing separators never produce a section of their own.
#[tracing::instrument(level = "trace", skip_all, fields(pathname = %pathname))]
pub fn path_sections(pathname: &str) -> Vec<PathSection<'_>> {
    let path = strip_query(pathname);
    let mut sections = Vec::new();
    let mut prefix = String::with_capacity(path.len());

    for (idx, segment) in path.split(SEPARATOR).enumerate() {
        if segment.is_empty() {
            if idx == 0 {
                sections.push(PathSection {
                    segment,
                    pathname: ROOT.to_string(),
                });
            }
            continue;
        }

        prefix.push(SEPARATOR);
        prefix.push_str(segment);
        sections.push(PathSection {
            segment,
            pathname: prefix.clone(),
        });
    }

    sections
}
