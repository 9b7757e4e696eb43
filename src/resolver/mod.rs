mod crumb;
mod default_label;
mod location;
mod options;
mod resolve;

pub use crumb::{Breadcrumb, BreadcrumbData, BreadcrumbMatch, BreadcrumbProps};
pub use default_label::{HOME_LABEL, humanize};
pub use location::Location;
pub use options::{BreadcrumbOptions, BreadcrumbOptionsBuilder, Formatter, OptionsError};
pub use resolve::get_breadcrumbs;
