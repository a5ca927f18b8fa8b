//! Page ⇄ URL mapping.
//!
//! Only list and standalone pages have a path of their own. Detail pages
//! ride on their list path plus a `?detail=<id>` query so a reload can
//! reopen them; forms collapse onto the list path.

use super::page::Page;
use contracts::domain::common::RecordId;
use contracts::enums::EntityKind;
use serde::{Deserialize, Serialize};

const ROUTES: [(&str, Page); 21] = [
    ("", Page::Landing),
    ("login", Page::Login),
    ("signup", Page::Signup),
    ("dashboard", Page::Dashboard),
    ("customers", Page::List(EntityKind::Customer)),
    ("hotels", Page::List(EntityKind::Hotel)),
    ("agencies", Page::List(EntityKind::Agency)),
    ("instructors", Page::List(EntityKind::Instructor)),
    ("staff", Page::List(EntityKind::Staff)),
    ("company-accounts", Page::List(EntityKind::CompanyAccount)),
    ("third-parties", Page::List(EntityKind::ThirdParty)),
    ("transactions", Page::List(EntityKind::Transaction)),
    ("orders", Page::List(EntityKind::Order)),
    ("products", Page::List(EntityKind::Product)),
    ("services", Page::List(EntityKind::Service)),
    ("service-packages", Page::List(EntityKind::ServicePackage)),
    ("appointments", Page::List(EntityKind::Appointment)),
    ("calendar", Page::Calendar),
    ("settings", Page::Settings),
    ("roadmap", Page::Roadmap),
    ("monthly-report", Page::MonthlyReport),
];

const PATHS: [&str; 21] = [
    "/",
    "/login",
    "/signup",
    "/dashboard",
    "/customers",
    "/hotels",
    "/agencies",
    "/instructors",
    "/staff",
    "/company-accounts",
    "/third-parties",
    "/transactions",
    "/orders",
    "/products",
    "/services",
    "/service-packages",
    "/appointments",
    "/calendar",
    "/settings",
    "/roadmap",
    "/monthly-report",
];

/// Resolve a pathname to a page. Unknown or empty paths land on `landing`.
pub fn path_to_page(pathname: &str) -> Page {
    let segment = pathname.trim_matches('/');
    ROUTES
        .iter()
        .find(|(path, _)| *path == segment)
        .map(|(_, page)| *page)
        .unwrap_or(Page::Landing)
}

/// Path of the page's base page; `/` for anything without an address.
pub fn page_to_path(page: Page) -> &'static str {
    let base = page.base();
    ROUTES
        .iter()
        .position(|(_, p)| *p == base)
        .map(|index| PATHS[index])
        .unwrap_or("/")
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct LocationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<RecordId>,
}

/// Full URL (path plus query) for a page and the detail record it shows.
pub fn location_for(page: Page, detail_id: Option<RecordId>) -> String {
    let path = page_to_path(page);
    match (page, detail_id) {
        (Page::Detail(_), Some(id)) if deep_linkable(page) => {
            let query = serde_qs::to_string(&LocationQuery { detail: Some(id) })
                .unwrap_or_default();
            format!("{}?{}", path, query)
        }
        _ => path.to_string(),
    }
}

/// Page and detail id encoded in a location, used at mount.
pub fn page_from_location(pathname: &str, search: &str) -> (Page, Option<RecordId>) {
    let page = path_to_page(pathname);
    let query: LocationQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    match (page, query.detail) {
        (Page::List(kind), Some(id)) if deep_linkable(Page::Detail(kind)) => {
            (Page::Detail(kind), Some(id))
        }
        _ => (page, None),
    }
}

fn deep_linkable(page: Page) -> bool {
    matches!(page.base(), Page::List(_))
}
