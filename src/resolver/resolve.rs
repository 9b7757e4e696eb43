use super::{
    Breadcrumb, BreadcrumbData, BreadcrumbMatch, BreadcrumbOptions, HOME_LABEL, Location,
};
use crate::errors::BreadcrumbResult;
use crate::matcher::{SegmentMatch, SegmentMatcher};
use crate::path::{PathSection, path_sections};
use crate::pattern::{CompiledPattern, PathMatch, PathPattern, PatternResult, compile_path};
use crate::route::{BreadcrumbLabel, Route};

/// Outcome for one path section.
enum Resolution<'a> {
    Crumb(BreadcrumbData<'a>),
    Hidden,
    Unmatched,
}

struct ResolveContext<'a, 'o> {
    matcher: SegmentMatcher<'a>,
    excluded: Vec<CompiledPattern>,
    location: &'a Location,
    options: &'o BreadcrumbOptions,
}

/// Resolves the breadcrumb trail for `location` against `routes`.
///
/// Every cumulative prefix of the pathname is matched against the ranked
/// route branches; the first match supplies the label, unmatched prefixes get
/// a generated one unless defaults are disabled. Structural problems in the
/// route tree abort the whole resolution.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(pathname = %location.pathname, routes = routes.len())
)]
pub fn get_breadcrumbs<'a>(
    routes: &'a [Route],
    location: &'a Location,
    options: &BreadcrumbOptions,
) -> BreadcrumbResult<Vec<BreadcrumbData<'a>>> {
    let context = ResolveContext {
        matcher: SegmentMatcher::from_routes(routes)?,
        excluded: compile_excluded(&options.exclude_paths)?,
        location,
        options,
    };

    let mut breadcrumbs = Vec::new();
    for section in path_sections(&location.pathname) {
        match context.resolve_section(&section) {
            Resolution::Crumb(crumb) => breadcrumbs.push(crumb),
            Resolution::Hidden => {
                tracing::debug!(section = %section.pathname, "breadcrumb suppressed");
            }
            Resolution::Unmatched => {
                if options.disable_defaults {
                    tracing::debug!(section = %section.pathname, "no route matched; defaults disabled");
                    continue;
                }
                breadcrumbs.push(context.default_crumb(&section)?);
            }
        }
    }

    Ok(breadcrumbs)
}

fn compile_excluded(paths: &[String]) -> PatternResult<Vec<CompiledPattern>> {
    paths
        .iter()
        .map(|path| compile_path(&PathPattern::new(path.as_str())))
        .collect()
}

impl<'a> ResolveContext<'a, '_> {
    fn resolve_section(&self, section: &PathSection<'_>) -> Resolution<'a> {
        if self.is_excluded(&section.pathname) {
            tracing::trace!(section = %section.pathname, "section excluded");
            return Resolution::Hidden;
        }

        let Some(found) = self.matcher.find(&section.pathname) else {
            return Resolution::Unmatched;
        };

        tracing::debug!(
            section = %section.pathname,
            pattern = %found.path_match.pattern.path,
            score = found.score,
            "route matched"
        );

        let breadcrumb = match found.label() {
            Some(BreadcrumbLabel::Hidden) => return Resolution::Hidden,
            Some(BreadcrumbLabel::Text(text)) => Breadcrumb::Text(text.clone()),
            Some(BreadcrumbLabel::Component(component)) => Breadcrumb::Component(&**component),
            None if self.options.disable_defaults => return Resolution::Hidden,
            None => Breadcrumb::Text(self.default_label(section)),
        };

        Resolution::Crumb(self.matched_crumb(found, breadcrumb))
    }

    fn is_excluded(&self, pathname: &str) -> bool {
        self.excluded
            .iter()
            .any(|pattern| pattern.match_pathname(pathname).is_some())
    }

    fn matched_crumb(&self, found: SegmentMatch<'a>, breadcrumb: Breadcrumb<'a>) -> BreadcrumbData<'a> {
        let route = found.route;
        let route_match = BreadcrumbMatch::new(found.path_match, Some(route));

        BreadcrumbData {
            key: route_match.pathname.clone(),
            breadcrumb,
            route_match,
            location: self.location,
            props: Some(&route.props),
        }
    }

    fn default_crumb(&self, section: &PathSection<'_>) -> PatternResult<BreadcrumbData<'a>> {
        let pattern = PathPattern::new(section.pathname.as_str());
        let path_match = compile_path(&pattern)?
            .match_pathname(&section.pathname)
            .unwrap_or_else(|| PathMatch {
                params: Default::default(),
                pathname: section.pathname.clone(),
                pathname_base: section.pathname.clone(),
                pattern,
            });
        let route_match = BreadcrumbMatch::new(path_match, None);

        Ok(BreadcrumbData {
            key: route_match.pathname.clone(),
            breadcrumb: Breadcrumb::Text(self.default_label(section)),
            route_match,
            location: self.location,
            props: None,
        })
    }

    fn default_label(&self, section: &PathSection<'_>) -> String {
        let text = if section.is_root() {
            HOME_LABEL
        } else {
            section.segment
        };
        self.options.format_label(text)
    }
}
