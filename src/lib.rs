pub mod branch;
pub mod errors;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod resolver;
pub mod route;
pub mod types;

pub use errors::{BreadcrumbError, BreadcrumbResult};
pub use resolver::{
    Breadcrumb, BreadcrumbData, BreadcrumbMatch, BreadcrumbOptions, BreadcrumbOptionsBuilder,
    BreadcrumbProps, Location, OptionsError, get_breadcrumbs, humanize,
};
pub use route::{BreadcrumbComponent, BreadcrumbLabel, Route, RouteElement, RouteProps};
pub use types::{ExtraProps, RouteParams};

use branch::flatten_routes;

/// A validated route tree plus options, resolved on demand for each location.
#[derive(Debug, Clone)]
pub struct Breadcrumbs {
    routes: Vec<Route>,
    options: BreadcrumbOptions,
}

impl Breadcrumbs {
    /// Checks the route tree and the exclude patterns up front so that
    /// [`Breadcrumbs::resolve`] only fails on problems it cannot see here.
    pub fn new(routes: Vec<Route>, options: Option<BreadcrumbOptions>) -> BreadcrumbResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;
        flatten_routes(&routes)?;

        Ok(Self { routes, options })
    }

    pub fn from_elements(
        elements: &[RouteElement],
        options: Option<BreadcrumbOptions>,
    ) -> BreadcrumbResult<Self> {
        let routes = route::create_routes_from_children(elements)?;
        Self::new(routes, options)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn options(&self) -> &BreadcrumbOptions {
        &self.options
    }

    pub fn resolve<'a>(&'a self, location: &'a Location) -> BreadcrumbResult<Vec<BreadcrumbData<'a>>> {
        get_breadcrumbs(&self.routes, location, &self.options)
    }
}
