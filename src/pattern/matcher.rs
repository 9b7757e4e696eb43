use super::{CompiledPattern, PathPattern, PatternResult, SPLAT_PARAM, compile_path};
use crate::types::RouteParams;

/// The outcome of testing one pattern against a concrete pathname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    pub params: RouteParams,
    /// The portion of the pathname that was matched.
    pub pathname: String,
    /// The matched portion before any splat, without trailing slashes.
    pub pathname_base: String,
    pub pattern: PathPattern,
}

impl CompiledPattern {
    #[tracing::instrument(level = "trace", skip(self), fields(pattern = %self.pattern.path))]
    pub fn match_pathname(&self, pathname: &str) -> Option<PathMatch> {
        let captures = self.matcher.captures(pathname)?;
        let whole = captures.get(0)?;

        if self.requires_boundary {
            let rest = &pathname[whole.end()..];
            if !(rest.is_empty() || rest.starts_with('/')) {
                return None;
            }
        }

        let matched = whole.as_str();
        let mut pathname_base = trim_trailing_slashes(matched).to_string();
        let mut params = RouteParams::with_capacity(self.param_names.len());

        for (idx, name) in self.param_names.iter().enumerate() {
            let value = captures.get(idx + 1).map_or("", |m| m.as_str());
            if name == SPLAT_PARAM {
                let head = &matched[..matched.len() - value.len()];
                pathname_base = trim_trailing_slashes(head).to_string();
            }
            params.insert(name.clone(), decode_param(value, name));
        }

        Some(PathMatch {
            params,
            pathname: matched.to_string(),
            pathname_base,
            pattern: self.pattern.clone(),
        })
    }
}

/// Compiles `pattern` and tests it against `pathname` in one go.
pub fn match_path(pattern: &PathPattern, pathname: &str) -> PatternResult<Option<PathMatch>> {
    let compiled = compile_path(pattern)?;
    Ok(compiled.match_pathname(pathname))
}

fn trim_trailing_slashes(value: &str) -> &str {
    let trimmed = value.trim_end_matches('/');
    if trimmed.is_empty() {
        &value[..value.len().min(1)]
    } else {
        trimmed
    }
}

fn decode_param(value: &str, name: &str) -> String {
    match decode_percent(value) {
        Some(decoded) => decoded,
        None => {
            tracing::warn!(
                param = name,
                value,
                "parameter value is not a valid percent-encoded string; keeping raw value"
            );
            value.to_string()
        }
    }
}

fn decode_percent(input: &str) -> Option<String> {
    if !input.contains('%') {
        return Some(input.to_string());
    }

    let bytes = input.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len() {
                    return None;
                }
                output.push(decode_hex_pair(bytes[i + 1], bytes[i + 2])?);
                i += 3;
            }
            byte => {
                output.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8(output).ok()
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    fn val(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    Some(val(hi)? << 4 | val(lo)?)
}
