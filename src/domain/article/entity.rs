// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Replace the editable content. `updated_at` never moves backwards, even
    /// if `now` is earlier than the last recorded mutation.
    pub fn set_content(&mut self, title: ArticleTitle, content: ArticleContent, now: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.touch(now);
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at).max(self.created_at);
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(title: ArticleTitle, content: ArticleContent, now: DateTime<Utc>) -> Self {
        Self {
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    /// `updated_at` as read before the edit; the write is rejected if the
    /// stored row no longer carries this value.
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn from_edited(article: &Article, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            content: article.content.clone(),
            original_updated_at,
            updated_at: article.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            content: ArticleContent::new("content"),
            created_at: created(),
            updated_at: created(),
        }
    }

    #[test]
    fn set_content_updates_fields_and_timestamp() {
        let mut article = sample_article();
        let now = created() + Duration::minutes(5);
        article.set_content(
            ArticleTitle::new("new title").unwrap(),
            ArticleContent::new("new content"),
            now,
        );
        assert_eq!(article.title.as_str(), "new title");
        assert_eq!(article.content.as_str(), "new content");
        assert_eq!(article.updated_at, now);
        assert_eq!(article.created_at, created());
    }

    #[test]
    fn updated_at_never_moves_backwards() {
        let mut article = sample_article();
        let later = created() + Duration::hours(1);
        article.set_content(article.title.clone(), article.content.clone(), later);

        let earlier = created() - Duration::hours(3);
        article.set_content(article.title.clone(), article.content.clone(), earlier);

        assert_eq!(article.updated_at, later);
        assert!(article.updated_at >= article.created_at);
    }

    #[test]
    fn new_article_starts_with_equal_timestamps() {
        let article = NewArticle::new(
            ArticleTitle::new("t").unwrap(),
            ArticleContent::default(),
            created(),
        );
        assert_eq!(article.created_at, article.updated_at);
    }

    #[test]
    fn update_carries_the_original_timestamp() {
        let mut article = sample_article();
        let original = article.updated_at;
        let now = created() + Duration::seconds(30);
        article.set_content(article.title.clone(), ArticleContent::new("x"), now);

        let update = ArticleUpdate::from_edited(&article, original);
        assert_eq!(update.original_updated_at, original);
        assert_eq!(update.updated_at, now);
        assert_eq!(update.content.as_str(), "x");
    }
}
