use super::field::{FieldDescriptor, FieldValue, PageName};

/// Singular and plural display names of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityLabels {
    pub singular: &'static str,
    pub plural: &'static str,
}

/// Admin configuration for one entity type.
///
/// Implementors only declare things; listing, forms and URLs are produced by
/// the page engine from these declarations.
pub trait CrudController: Send + Sync {
    /// Path segment the controller is mounted at, below the dashboard route.
    fn route_segment(&self) -> &'static str;

    fn entity_labels(&self) -> EntityLabels;

    /// Every declared field, in display order. Visibility is applied by
    /// [`CrudController::fields_for_page`].
    fn configure_fields(&self, page: PageName) -> Vec<FieldDescriptor>;

    fn fields_for_page(&self, page: PageName) -> Vec<FieldDescriptor> {
        self.configure_fields(page)
            .into_iter()
            .filter(|field| field.is_displayed_on(page))
            .collect()
    }

    fn page_title(&self, page: PageName) -> String {
        let labels = self.entity_labels();
        match page {
            PageName::Index => labels.plural.to_string(),
            PageName::Detail => labels.singular.to_string(),
            PageName::New => format!("Create {}", labels.singular),
            PageName::Edit => format!("Edit {}", labels.singular),
        }
    }
}

/// Read access to an entity's attributes by admin property name.
pub trait AdminEntity {
    fn admin_id(&self) -> i64;

    fn field_value(&self, property: &str) -> Option<FieldValue>;

    /// Properties a form submission must provide when creating the entity.
    fn required_properties() -> &'static [&'static str]
    where
        Self: Sized;
}
