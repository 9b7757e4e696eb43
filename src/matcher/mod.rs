mod segment;

pub use segment::{SegmentMatch, SegmentMatcher};
