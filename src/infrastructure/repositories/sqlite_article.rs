use super::error::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleListRequest, ArticleReadRepository, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, content, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            original_updated_at,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = ?, content = ?, updated_at = ? WHERE id = ? AND updated_at = ? RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .bind(original_updated_at)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Article::try_from(row),
            None => {
                let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM articles WHERE id = ?")
                    .bind(i64::from(id))
                    .fetch_optional(&*self.pool)
                    .await
                    .map_err(map_sqlx)?;
                if exists.is_some() {
                    Err(DomainError::Conflict(
                        "article was modified by another request".into(),
                    ))
                } else {
                    Err(DomainError::NotFound("article not found".into()))
                }
            }
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(&self, request: &ArticleListRequest) -> DomainResult<(Vec<Article>, u64)> {
        let search_pattern = request
            .search_term()
            .map(|s| format!("%{}%", escape_like(s)));

        fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Sqlite>, search_pattern: Option<&'a str>) {
            if let Some(pattern) = search_pattern {
                builder.push(" WHERE (title LIKE ");
                builder.push_bind(pattern);
                builder.push(r" ESCAPE '\' OR content LIKE ");
                builder.push_bind(pattern);
                builder.push(r" ESCAPE '\')");
            }
        }

        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        apply_conditions(&mut list_builder, search_pattern.as_deref());
        // Column and direction come from closed enums, never from raw input.
        list_builder.push(format!(
            " ORDER BY {} {}, id {} LIMIT ",
            request.sort.column(),
            request.direction.as_sql(),
            request.direction.as_sql()
        ));
        list_builder.push_bind(i64::from(request.page_size));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(request.offset() as i64);

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) as count FROM articles");
        apply_conditions(&mut count_builder, search_pattern.as_deref());

        let total: i64 = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total as u64))
    }
}

/// Escape LIKE wildcards so the term matches literally under `ESCAPE '\'`.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), r"100\%");
        assert_eq!(escape_like("snake_case"), r"snake\_case");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
        assert_eq!(escape_like("plain"), "plain");
    }
}
