use super::crud::{AdminEntity, CrudController, EntityLabels};
use super::field::{FieldDescriptor, FieldValue, PageName};
use super::page::FormData;
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub const ARTICLE_ROUTE_SEGMENT: &str = "article";

#[derive(Debug, Default, Clone, Copy)]
pub struct ArticleCrudController;

impl CrudController for ArticleCrudController {
    fn route_segment(&self) -> &'static str {
        ARTICLE_ROUTE_SEGMENT
    }

    fn entity_labels(&self) -> EntityLabels {
        EntityLabels {
            singular: "Article",
            plural: "Articles",
        }
    }

    fn configure_fields(&self, _page: PageName) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("title", "Title"),
            FieldDescriptor::textarea("content", "Content"),
            FieldDescriptor::date_time("createdAt", "Created At").only_on_index(),
            FieldDescriptor::date_time("updatedAt", "Updated At").hide_on_form(),
        ]
    }
}

impl ArticleCrudController {
    pub fn create_command(&self, mut form: FormData) -> ApplicationResult<CreateArticleCommand> {
        let mut builder = CreateArticleCommand::builder();
        if let Some(title) = form.take("title") {
            builder = builder.title(title);
        }
        if let Some(content) = form.take("content") {
            builder = builder.content(content);
        }
        builder.build().map_err(ApplicationError::validation)
    }

    pub fn update_command(&self, id: i64, mut form: FormData) -> UpdateArticleCommand {
        UpdateArticleCommand {
            id,
            title: form.take("title"),
            content: form.take("content"),
        }
    }
}

impl AdminEntity for ArticleDto {
    fn admin_id(&self) -> i64 {
        self.id
    }

    fn field_value(&self, property: &str) -> Option<FieldValue> {
        match property {
            "title" => Some(FieldValue::Text(self.title.clone())),
            "content" => Some(FieldValue::Text(self.content.clone())),
            "createdAt" => Some(FieldValue::DateTime(self.created_at)),
            "updatedAt" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }

    fn required_properties() -> &'static [&'static str] {
        &["title"]
    }
}
