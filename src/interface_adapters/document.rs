use std::collections::{BTreeMap, BTreeSet, HashMap};

// Element ids shared with the page markup.
pub mod ids {
    pub const SIGNUP_FORM: &str = "signup-form";
    pub const LOGIN_FORM: &str = "login-form";
    pub const WISHLIST_FORM: &str = "wishlist-form";
    pub const CELEBRATION_FORM: &str = "celebration-form";

    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const LOGIN_USERNAME: &str = "login-username";
    pub const LOGIN_PASSWORD: &str = "login-password";
    pub const WISHLIST_NAME: &str = "wishlist-name";
    pub const CELEBRATION_TITLE: &str = "celebration-title";
    pub const CELEBRATION_DATE: &str = "celebration-date";

    pub const WISHLIST_CONTAINER: &str = "wishlist-container";
    pub const CELEBRATION_CONTAINER: &str = "celebration-container";

    pub const DROPDOWN_MENU: &str = ".dropdown-menu";
}

// Class toggled on the dropdown menu.
pub const MENU_OPEN_CLASS: &str = "open";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Index,
    SignIn,
    Dashboard,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::SignIn => "sign_in.html",
            Page::Dashboard => "dashboard.html",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

// Headless page model: inputs and containers addressed by element id, the
// menu's class list, alerts shown so far and the current page.
#[derive(Debug, Default)]
pub struct Document {
    page: Page,
    inputs: HashMap<String, String>,
    containers: BTreeMap<String, Vec<String>>,
    menu_classes: BTreeSet<String>,
    alerts: Vec<Alert>,
}

impl Document {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = self.page.path(), to = page.path(), "navigating.");
        self.page = page;
    }

    pub fn set_input(&mut self, id: &str, value: impl Into<String>) {
        self.inputs.insert(id.to_string(), value.into());
    }

    // Inputs missing from the page read as empty.
    pub fn input_value(&self, id: &str) -> &str {
        self.inputs.get(id).map(String::as_str).unwrap_or_default()
    }

    // Drops the container's previous children before adding the new ones.
    pub fn replace_children(&mut self, id: &str, children: Vec<String>) {
        self.containers.insert(id.to_string(), children);
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.containers.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn containers(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.containers
            .iter()
            .map(|(id, children)| (id.as_str(), children.as_slice()))
    }

    pub fn toggle_menu(&mut self) {
        if !self.menu_classes.remove(MENU_OPEN_CLASS) {
            self.menu_classes.insert(MENU_OPEN_CLASS.to_string());
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_classes.contains(MENU_OPEN_CLASS)
    }

    pub fn alert_info(&mut self, message: impl Into<String>) {
        self.push_alert(AlertKind::Info, message.into());
    }

    pub fn alert_error(&mut self, message: impl Into<String>) {
        self.push_alert(AlertKind::Error, message.into());
    }

    fn push_alert(&mut self, kind: AlertKind, message: String) {
        self.alerts.push(Alert { kind, message });
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn has_errors(&self) -> bool {
        self.alerts
            .iter()
            .any(|alert| alert.kind == AlertKind::Error)
    }
}
