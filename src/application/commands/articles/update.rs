use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleTitle, ArticleUpdate},
};

/// Fields left as `None` keep their stored value.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let UpdateArticleCommand {
            id: _,
            title,
            content,
        } = command;

        let title = match title {
            Some(value) => ArticleTitle::new(value)?,
            None => article.title.clone(),
        };
        let content = content
            .map(ArticleContent::new)
            .unwrap_or_else(|| article.content.clone());

        let original_updated_at = article.updated_at;
        article.set_content(title, content, self.clock.now());

        let updated = self
            .write_repo
            .update(ArticleUpdate::from_edited(&article, original_updated_at))
            .await?;

        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
