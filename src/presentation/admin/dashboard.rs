use super::article::ARTICLE_ROUTE_SEGMENT;
use super::page::{DashboardPage, LayoutView, MenuItemView};
use super::url::AdminUrlGenerator;
use std::str::FromStr;

pub const DEFAULT_DASHBOARD_TITLE: &str = "Admin Panel Skeleton";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    Dashboard,
    /// Index page of the CRUD controller mounted at this route segment.
    Crud(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: MenuTarget,
}

impl MenuItem {
    pub fn link_to_dashboard(label: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            icon,
            target: MenuTarget::Dashboard,
        }
    }

    pub fn link_to_crud(label: &'static str, icon: &'static str, controller: &'static str) -> Self {
        Self {
            label,
            icon,
            target: MenuTarget::Crud(controller),
        }
    }

    pub fn resolve(&self, urls: &AdminUrlGenerator) -> MenuItemView {
        let url = match self.target {
            MenuTarget::Dashboard => urls.dashboard_url(),
            MenuTarget::Crud(controller) => urls.set_controller(controller).generate_url(),
        };
        MenuItemView {
            label: self.label.to_string(),
            icon: self.icon.to_string(),
            url,
        }
    }
}

/// What the dashboard root answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardLanding {
    #[default]
    RedirectToArticles,
    Dashboard,
}

impl FromStr for DashboardLanding {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redirect" => Ok(Self::RedirectToArticles),
            "dashboard" => Ok(Self::Dashboard),
            other => Err(format!(
                "unknown dashboard landing '{other}', expected 'redirect' or 'dashboard'"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardResponse {
    Redirect(String),
    Render(DashboardPage),
}

pub trait DashboardController: Send + Sync {
    fn configure_dashboard(&self) -> Dashboard;

    fn configure_menu_items(&self) -> Vec<MenuItem>;

    fn index(&self, urls: &AdminUrlGenerator) -> DashboardResponse;

    /// Title and resolved menu shared by every admin page.
    fn layout(&self, urls: &AdminUrlGenerator) -> LayoutView {
        LayoutView {
            dashboard_title: self.configure_dashboard().title,
            menu: self
                .configure_menu_items()
                .iter()
                .map(|item| item.resolve(urls))
                .collect(),
        }
    }

    fn render(&self, urls: &AdminUrlGenerator) -> DashboardPage {
        let layout = self.layout(urls);
        DashboardPage {
            title: layout.dashboard_title.clone(),
            layout,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminDashboard {
    title: String,
    landing: DashboardLanding,
}

impl AdminDashboard {
    pub fn new(title: impl Into<String>, landing: DashboardLanding) -> Self {
        Self {
            title: title.into(),
            landing,
        }
    }
}

impl Default for AdminDashboard {
    fn default() -> Self {
        Self::new(DEFAULT_DASHBOARD_TITLE, DashboardLanding::default())
    }
}

impl DashboardController for AdminDashboard {
    fn configure_dashboard(&self) -> Dashboard {
        Dashboard {
            title: self.title.clone(),
        }
    }

    fn configure_menu_items(&self) -> Vec<MenuItem> {
        vec![
            MenuItem::link_to_dashboard("Dashboard", "fa fa-home"),
            MenuItem::link_to_crud("Articles", "fa fa-file-text", ARTICLE_ROUTE_SEGMENT),
        ]
    }

    fn index(&self, urls: &AdminUrlGenerator) -> DashboardResponse {
        match self.landing {
            DashboardLanding::RedirectToArticles => {
                let target = urls.set_controller(ARTICLE_ROUTE_SEGMENT).generate_url();
                tracing::debug!(target_url = %target, "redirecting dashboard root");
                DashboardResponse::Redirect(target)
            }
            DashboardLanding::Dashboard => DashboardResponse::Render(self.render(urls)),
        }
    }
}
