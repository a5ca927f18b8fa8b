//! Page identity - which screen of the application is visible.
//!
//! Every screen belongs to one of three families per entity (list, detail,
//! form) or is a standalone page. Pages serialize as camelCase tags
//! (`"customers"`, `"customerDetail"`, `"orderForm"`, `"monthlyReport"`) and
//! those tags are what ends up in browser history entries.

use contracts::enums::EntityKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    Signup,
    Dashboard,
    Calendar,
    Settings,
    Roadmap,
    MonthlyReport,
    List(EntityKind),
    Detail(EntityKind),
    Form(EntityKind),
}

const STANDALONE: [(Page, &str); 8] = [
    (Page::Landing, "landing"),
    (Page::Login, "login"),
    (Page::Signup, "signup"),
    (Page::Dashboard, "dashboard"),
    (Page::Calendar, "calendar"),
    (Page::Settings, "settings"),
    (Page::Roadmap, "roadmap"),
    (Page::MonthlyReport, "monthlyReport"),
];

impl Page {
    /// All page variants: standalone pages, then list/detail/form per entity.
    pub fn all() -> Vec<Page> {
        let mut pages: Vec<Page> = STANDALONE.iter().map(|(page, _)| *page).collect();
        for kind in EntityKind::ALL {
            pages.push(Page::List(kind));
            pages.push(Page::Detail(kind));
            pages.push(Page::Form(kind));
        }
        pages
    }

    pub fn tag(&self) -> String {
        match self {
            Page::List(kind) => kind.list_code().to_string(),
            Page::Detail(kind) => format!("{}Detail", kind.code()),
            Page::Form(kind) => format!("{}Form", kind.code()),
            standalone => STANDALONE
                .iter()
                .find(|(page, _)| page == standalone)
                .map(|(_, tag)| tag.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        if let Some((page, _)) = STANDALONE.iter().find(|(_, t)| *t == tag) {
            return Some(*page);
        }
        if let Some(kind) = tag.strip_suffix("Detail").and_then(EntityKind::from_code) {
            return Some(Page::Detail(kind));
        }
        if let Some(kind) = tag.strip_suffix("Form").and_then(EntityKind::from_code) {
            return Some(Page::Form(kind));
        }
        EntityKind::from_list_code(tag).map(Page::List)
    }

    /// Entity whose list/detail/form family this page belongs to.
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Page::List(kind) | Page::Detail(kind) | Page::Form(kind) => Some(*kind),
            _ => None,
        }
    }

    /// The page a URL can address: detail and form pages collapse onto the
    /// entity's list page. Users are managed from settings and have no
    /// address of their own.
    pub fn base(&self) -> Page {
        match self {
            Page::List(EntityKind::User)
            | Page::Detail(EntityKind::User)
            | Page::Form(EntityKind::User) => Page::Settings,
            Page::Detail(kind) | Page::Form(kind) => Page::List(*kind),
            other => *other,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Landing | Page::Login | Page::Signup)
    }

    /// Where the auth gate sends the user instead of this page, if anywhere.
    pub fn guard_redirect(&self, is_authenticated: bool) -> Option<Page> {
        if !is_authenticated && self.requires_auth() {
            Some(Page::Login)
        } else if is_authenticated && matches!(self, Page::Login | Page::Signup) {
            Some(Page::Dashboard)
        } else {
            None
        }
    }

    pub fn title(&self) -> String {
        match self {
            Page::Landing => "KSManager".to_string(),
            Page::Login => "Sign in".to_string(),
            Page::Signup => "Create account".to_string(),
            Page::Dashboard => "Dashboard".to_string(),
            Page::Calendar => "Calendar".to_string(),
            Page::Settings => "Settings".to_string(),
            Page::Roadmap => "Roadmap".to_string(),
            Page::MonthlyReport => "Monthly report".to_string(),
            Page::List(kind) => kind.list_name().to_string(),
            Page::Detail(kind) => kind.display_name().to_string(),
            Page::Form(kind) => format!("{} form", kind.display_name()),
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag())
    }
}

impl<'de> Deserialize<'de> for Page {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Page::from_tag(&tag)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown page tag: {}", tag)))
    }
}
