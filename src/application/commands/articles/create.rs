// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// `title` is required; a missing `content` becomes an empty text.
    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.unwrap_or_default(),
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content);
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewArticle::new(title, content, now))
            .await?;

        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_title() {
        let err = CreateArticleCommand::builder().content("body").build().err();
        assert_eq!(err, Some("title is required"));
    }

    #[test]
    fn builder_defaults_content_to_empty() {
        let command = CreateArticleCommand::builder().title("Hello").build().unwrap();
        assert_eq!(command.title, "Hello");
        assert!(command.content.is_empty());
    }
}
