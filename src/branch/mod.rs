mod error;
mod flatten;
mod rank;

pub use error::{StructureError, StructureResult};
pub use flatten::{RouteBranch, RouteMeta, RouteMetaChain, flatten_routes};
pub use rank::{compare_indexes, rank_route_branches};
