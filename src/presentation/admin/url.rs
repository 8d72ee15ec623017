//! URL generation for admin pages.

/// A CRUD page, together with the entity it targets when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudAction {
    Index,
    New,
    Detail(i64),
    Edit(i64),
    Delete(i64),
}

#[derive(Debug, Clone)]
pub struct AdminUrlGenerator {
    prefix: String,
}

impl AdminUrlGenerator {
    /// `prefix` is the dashboard route, e.g. `/admin`.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let prefix = prefix.trim_end_matches('/').to_string();
        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn dashboard_url(&self) -> String {
        if self.prefix.is_empty() {
            "/".to_string()
        } else {
            self.prefix.clone()
        }
    }

    /// Start a URL for the CRUD controller mounted at `controller`.
    pub fn set_controller(&self, controller: &str) -> CrudUrl<'_> {
        CrudUrl {
            generator: self,
            controller: controller.to_string(),
            action: CrudAction::Index,
            query: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrudUrl<'a> {
    generator: &'a AdminUrlGenerator,
    controller: String,
    action: CrudAction,
    query: Vec<(String, String)>,
}

impl CrudUrl<'_> {
    pub fn set_action(mut self, action: CrudAction) -> Self {
        self.action = action;
        self
    }

    /// Add a query parameter. Setting the same key twice keeps the last value.
    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.query.retain(|(k, _)| k != key);
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn generate_url(&self) -> String {
        let base = format!("{}/{}", self.generator.prefix, self.controller);
        let path = match self.action {
            CrudAction::Index => base,
            CrudAction::New => format!("{base}/new"),
            CrudAction::Detail(id) => format!("{base}/{id}"),
            CrudAction::Edit(id) => format!("{base}/{id}/edit"),
            CrudAction::Delete(id) => format!("{base}/{id}/delete"),
        };

        if self.query.is_empty() {
            return path;
        }
        // A list of string pairs always encodes.
        let query = serde_urlencoded::to_string(&self.query).unwrap_or_default();
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_crud_paths() {
        let urls = AdminUrlGenerator::new("/admin");
        let article = || urls.set_controller("article");

        assert_eq!(article().generate_url(), "/admin/article");
        assert_eq!(
            article().set_action(CrudAction::New).generate_url(),
            "/admin/article/new"
        );
        assert_eq!(
            article().set_action(CrudAction::Detail(7)).generate_url(),
            "/admin/article/7"
        );
        assert_eq!(
            article().set_action(CrudAction::Edit(7)).generate_url(),
            "/admin/article/7/edit"
        );
        assert_eq!(
            article().set_action(CrudAction::Delete(7)).generate_url(),
            "/admin/article/7/delete"
        );
    }

    #[test]
    fn query_parameters_are_encoded() {
        let urls = AdminUrlGenerator::new("/admin/");
        let url = urls
            .set_controller("article")
            .set("query", "rust & tokio")
            .set("page", 2)
            .generate_url();
        assert_eq!(url, "/admin/article?query=rust+%26+tokio&page=2");
    }

    #[test]
    fn repeated_keys_keep_last_value() {
        let urls = AdminUrlGenerator::new("/admin");
        let url = urls
            .set_controller("article")
            .set("page", 1)
            .set("page", 3)
            .generate_url();
        assert_eq!(url, "/admin/article?page=3");
    }

    #[test]
    fn dashboard_url_is_the_prefix() {
        assert_eq!(AdminUrlGenerator::new("/backoffice").dashboard_url(), "/backoffice");
        assert_eq!(AdminUrlGenerator::new("").dashboard_url(), "/");
    }
}
