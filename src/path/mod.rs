mod join;
mod normalize;
mod segment;

pub use join::join_paths;
pub use normalize::{PathSection, path_sections, strip_query};
pub use segment::{SegmentKind, is_dynamic_segment, is_splat, param_name_len};

pub const SEPARATOR: char = '/';
pub const ROOT: &str = "/";
