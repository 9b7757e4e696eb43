use super::{PatternError, PatternResult};
use crate::path::{SEPARATOR, is_splat, param_name_len};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const SPLAT_PARAM: &str = "*";

const PARAM_CAPTURE: &str = "([^/]+)";
const SPLAT_ONLY_TAIL: &str = "(.*)$";
const SPLAT_TAIL: &str = "(?:/(.+)|/*)$";
const END_TAIL: &str = "/*$";

/// A path pattern as handed to the matcher: `:name` segments capture one
/// segment, a trailing `*` captures the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathPattern {
    pub path: String,
    pub case_sensitive: bool,
    pub end: bool,
}

impl PathPattern {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            case_sensitive: false,
            end: true,
        }
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub fn end(mut self, value: bool) -> Self {
        self.end = value;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub(crate) pattern: PathPattern,
    pub(crate) matcher: Regex,
    pub(crate) param_names: SmallVec<[String; 4]>,
    pub(crate) requires_boundary: bool,
}

impl CompiledPattern {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn source(&self) -> &str {
        self.matcher.as_str()
    }
}

#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(path = %pattern.path, case_sensitive = pattern.case_sensitive, end = pattern.end)
)]
pub fn compile_path(pattern: &PathPattern) -> PatternResult<CompiledPattern> {
    let path = pattern.path.as_str();
    let has_splat = path.ends_with('*');

    // trailing `/` and `/*` are re-added below as the tail
    let trimmed = path
        .strip_suffix('*')
        .unwrap_or(path)
        .trim_end_matches(SEPARATOR);
    let body = trimmed.trim_start_matches(SEPARATOR);

    let mut param_names: SmallVec<[String; 4]> = SmallVec::new();
    let mut source = String::with_capacity(path.len() * 2 + 8);
    source.push('^');

    for segment in body.split(SEPARATOR) {
        source.push(SEPARATOR);

        if let Some(rest) = segment.strip_prefix(':') {
            let name_len = param_name_len(rest);
            if name_len > 0 {
                param_names.push(rest[..name_len].to_string());
                source.push_str(PARAM_CAPTURE);
                source.push_str(&regex::escape(&rest[name_len..]));
                continue;
            }
        }

        source.push_str(&regex::escape(segment));
    }

    let mut requires_boundary = false;
    if has_splat {
        param_names.push(SPLAT_PARAM.to_string());
        if is_splat(path) || path == "/*" {
            // the leading `/` is already consumed
            source.push_str(SPLAT_ONLY_TAIL);
        } else {
            source.push_str(SPLAT_TAIL);
        }
    } else if pattern.end {
        source.push_str(END_TAIL);
    } else if !path.is_empty() && path != "/" {
        requires_boundary = true;
    }

    let matcher = RegexBuilder::new(&source)
        .case_insensitive(!pattern.case_sensitive)
        .build()
        .map_err(|source| PatternError::Compile {
            pattern: path.to_string(),
            source,
        })?;

    Ok(CompiledPattern {
        pattern: pattern.clone(),
        matcher,
        param_names,
        requires_boundary,
    })
}
