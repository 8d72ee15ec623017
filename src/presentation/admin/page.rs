//! Page documents produced from field declarations.
//!
//! The admin is headless: every page is a JSON document listing the fields
//! to show (with their widget), the values, and the URLs of the actions
//! available from it. Navigation is carried in [`LayoutView`].

use super::crud::{AdminEntity, CrudController};
use super::dashboard::DashboardController;
use super::field::{FieldDescriptor, FieldKind, PageName};
use super::url::{AdminUrlGenerator, CrudAction};
use crate::application::{
    dto::PaginatedResult,
    error::{ApplicationError, ApplicationResult},
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuItemView {
    pub label: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LayoutView {
    pub dashboard_title: String,
    pub menu: Vec<MenuItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardPage {
    pub title: String,
    pub layout: LayoutView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldView {
    pub property: String,
    pub label: String,
    pub widget: FieldKind,
}

impl From<&FieldDescriptor> for FieldView {
    fn from(field: &FieldDescriptor) -> Self {
        Self {
            property: field.property().to_string(),
            label: field.label().to_string(),
            widget: field.kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CellView {
    pub property: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EntityActionsView {
    pub detail: String,
    pub edit: String,
    pub delete: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RowView {
    pub id: i64,
    pub cells: Vec<CellView>,
    pub actions: EntityActionsView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationView {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
    pub next_url: Option<String>,
    pub previous_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct IndexPage {
    pub layout: LayoutView,
    pub title: String,
    pub page_name: PageName,
    pub columns: Vec<FieldView>,
    pub rows: Vec<RowView>,
    pub pagination: PaginationView,
    pub new_url: String,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DetailFieldView {
    #[serde(flatten)]
    pub field: FieldView,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DetailPage {
    pub layout: LayoutView,
    pub title: String,
    pub page_name: PageName,
    pub id: i64,
    pub fields: Vec<DetailFieldView>,
    pub index_url: String,
    pub edit_url: String,
    pub delete_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormFieldView {
    #[serde(flatten)]
    pub field: FieldView,
    pub value: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormPage {
    pub layout: LayoutView,
    pub title: String,
    pub page_name: PageName,
    pub fields: Vec<FormFieldView>,
    pub submit_url: String,
    pub cancel_url: String,
}

/// Listing options echoed into pagination links.
#[derive(Debug, Clone, Default)]
pub struct IndexParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

/// Form values accepted for a page, keyed by property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn take(&mut self, property: &str) -> Option<String> {
        self.0.remove(property)
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct PageRenderer<'a> {
    pub(super) urls: &'a AdminUrlGenerator,
    pub(super) dashboard: &'a dyn DashboardController,
    pub(super) controller: &'a dyn CrudController,
    pub(super) datetime_format: &'a str,
}

impl PageRenderer<'_> {
    fn action_url(&self, action: CrudAction) -> String {
        self.urls
            .set_controller(self.controller.route_segment())
            .set_action(action)
            .generate_url()
    }

    fn index_url(&self, params: &IndexParams, page: u32) -> String {
        let mut url = self
            .urls
            .set_controller(self.controller.route_segment())
            .set("page", page);
        if let Some(search) = params.search.as_deref().filter(|s| !s.trim().is_empty()) {
            url = url.set("query", search);
        }
        if let Some(sort) = &params.sort {
            url = url.set("sort", sort);
        }
        if let Some(direction) = &params.direction {
            url = url.set("direction", direction);
        }
        url.generate_url()
    }

    fn value_for<E: AdminEntity>(&self, entity: &E, field: &FieldDescriptor, page: PageName) -> Option<String> {
        entity
            .field_value(field.property())
            .map(|value| field.format_value(&value, page, self.datetime_format))
    }

    /// Sorting is only offered on columns shown on the index page.
    pub fn ensure_sortable(&self, property: &str) -> ApplicationResult<()> {
        let sortable = self
            .controller
            .fields_for_page(PageName::Index)
            .iter()
            .any(|field| field.property() == property);
        if sortable {
            Ok(())
        } else {
            Err(ApplicationError::validation(format!(
                "cannot sort by '{property}'"
            )))
        }
    }

    pub fn index<E: AdminEntity>(&self, result: PaginatedResult<E>, params: &IndexParams) -> IndexPage {
        let fields = self.controller.fields_for_page(PageName::Index);

        let rows = result
            .items
            .iter()
            .map(|entity| {
                let id = entity.admin_id();
                RowView {
                    id,
                    cells: fields
                        .iter()
                        .map(|field| CellView {
                            property: field.property().to_string(),
                            value: self.value_for(entity, field, PageName::Index),
                        })
                        .collect(),
                    actions: EntityActionsView {
                        detail: self.action_url(CrudAction::Detail(id)),
                        edit: self.action_url(CrudAction::Edit(id)),
                        delete: self.action_url(CrudAction::Delete(id)),
                    },
                }
            })
            .collect();

        let pagination = PaginationView {
            page: result.page,
            page_size: result.page_size,
            total: result.total,
            total_pages: result.total_pages,
            next_url: result
                .has_next()
                .then(|| self.index_url(params, result.page + 1)),
            previous_url: result
                .has_previous()
                .then(|| self.index_url(params, result.page - 1)),
        };

        IndexPage {
            layout: self.dashboard.layout(self.urls),
            title: self.controller.page_title(PageName::Index),
            page_name: PageName::Index,
            columns: fields.iter().map(FieldView::from).collect(),
            rows,
            pagination,
            new_url: self.action_url(CrudAction::New),
            search: params.search.clone(),
            sort: params.sort.clone(),
            direction: params.direction.clone(),
        }
    }

    pub fn detail<E: AdminEntity>(&self, entity: &E) -> DetailPage {
        let id = entity.admin_id();
        let fields = self
            .controller
            .fields_for_page(PageName::Detail)
            .iter()
            .map(|field| DetailFieldView {
                field: FieldView::from(field),
                value: self.value_for(entity, field, PageName::Detail),
            })
            .collect();

        DetailPage {
            layout: self.dashboard.layout(self.urls),
            title: self.controller.page_title(PageName::Detail),
            page_name: PageName::Detail,
            id,
            fields,
            index_url: self.action_url(CrudAction::Index),
            edit_url: self.action_url(CrudAction::Edit(id)),
            delete_url: self.action_url(CrudAction::Delete(id)),
        }
    }

    pub fn new_form<E: AdminEntity>(&self) -> FormPage {
        self.form::<E>(PageName::New, None)
    }

    pub fn edit_form<E: AdminEntity>(&self, entity: &E) -> FormPage {
        self.form(PageName::Edit, Some(entity))
    }

    fn form<E: AdminEntity>(&self, page: PageName, entity: Option<&E>) -> FormPage {
        let required = E::required_properties();
        let fields = self
            .controller
            .fields_for_page(page)
            .iter()
            .map(|field| FormFieldView {
                field: FieldView::from(field),
                value: entity.and_then(|e| self.value_for(e, field, page)),
                required: required.contains(&field.property()),
            })
            .collect();

        let submit_url = match entity {
            Some(entity) => self.action_url(CrudAction::Edit(entity.admin_id())),
            None => self.action_url(CrudAction::New),
        };

        FormPage {
            layout: self.dashboard.layout(self.urls),
            title: self.controller.page_title(page),
            page_name: page,
            fields,
            submit_url,
            cancel_url: self.action_url(CrudAction::Index),
        }
    }

    /// Accept a submitted JSON object for a form page. Keys must be fields
    /// displayed on that page and values must be strings.
    pub fn bind_form(&self, page: PageName, payload: Value) -> ApplicationResult<FormData> {
        let Value::Object(object) = payload else {
            return Err(ApplicationError::validation("form payload must be a JSON object"));
        };

        let fields = self.controller.fields_for_page(page);
        let extra: Vec<&str> = object
            .keys()
            .filter(|key| !fields.iter().any(|field| field.property() == key.as_str()))
            .map(String::as_str)
            .collect();
        if !extra.is_empty() {
            return Err(ApplicationError::validation(format!(
                "this form should not contain extra fields: {}",
                extra.join(", ")
            )));
        }

        let mut data = BTreeMap::new();
        for (key, value) in object {
            match value {
                Value::String(text) => {
                    data.insert(key, text);
                }
                _ => {
                    return Err(ApplicationError::validation(format!(
                        "field '{key}' must be a string"
                    )));
                }
            }
        }
        Ok(FormData(data))
    }
}
