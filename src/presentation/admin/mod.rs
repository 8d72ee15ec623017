// src/presentation/admin/mod.rs
pub mod article;
pub mod crud;
pub mod dashboard;
pub mod field;
pub mod page;
pub mod url;

use crate::config::AdminSettings;
use article::ArticleCrudController;
use crud::CrudController;
use dashboard::{AdminDashboard, DashboardController};
use page::PageRenderer;
use std::sync::Arc;
use url::AdminUrlGenerator;

/// Everything the admin routes need besides application services.
pub struct AdminContext {
    urls: AdminUrlGenerator,
    dashboard: Arc<dyn DashboardController>,
    articles: ArticleCrudController,
    page_size: u32,
    datetime_format: String,
}

impl AdminContext {
    pub fn new(settings: &AdminSettings) -> Self {
        Self {
            urls: AdminUrlGenerator::new(settings.route_path.clone()),
            dashboard: Arc::new(AdminDashboard::new(settings.title.clone(), settings.landing)),
            articles: ArticleCrudController,
            page_size: settings.page_size,
            datetime_format: settings.datetime_format.clone(),
        }
    }

    pub fn urls(&self) -> &AdminUrlGenerator {
        &self.urls
    }

    pub fn dashboard(&self) -> &dyn DashboardController {
        self.dashboard.as_ref()
    }

    pub fn articles(&self) -> &ArticleCrudController {
        &self.articles
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn renderer<'a>(&'a self, controller: &'a dyn CrudController) -> PageRenderer<'a> {
        PageRenderer {
            urls: &self.urls,
            dashboard: self.dashboard.as_ref(),
            controller,
            datetime_format: &self.datetime_format,
        }
    }
}

impl Default for AdminContext {
    fn default() -> Self {
        Self::new(&AdminSettings::default())
    }
}
