mod element;
mod label;
mod node;

pub use element::{RouteElement, RouteProps, create_routes_from_children};
pub use label::{BreadcrumbComponent, BreadcrumbLabel};
pub use node::Route;
