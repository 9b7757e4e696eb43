#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Static,
    Dynamic,
    Splat,
    Empty,
}

impl SegmentKind {
    pub fn classify(segment: &str) -> Self {
        if is_splat(segment) {
            SegmentKind::Splat
        } else if segment.is_empty() {
            SegmentKind::Empty
        } else if is_dynamic_segment(segment) {
            SegmentKind::Dynamic
        } else {
            SegmentKind::Static
        }
    }
}

#[inline]
pub fn is_splat(segment: &str) -> bool {
    segment == "*"
}

/// `:` followed by one or more word characters, nothing else.
pub fn is_dynamic_segment(segment: &str) -> bool {
    match segment.strip_prefix(':') {
        Some(name) => !name.is_empty() && name.chars().all(is_word_char),
        None => false,
    }
}

/// Byte length of the leading parameter name in `rest` (the text after `:`).
pub fn param_name_len(rest: &str) -> usize {
    rest.bytes()
        .take_while(|byte| is_word_char(*byte as char))
        .count()
}

#[inline]
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
