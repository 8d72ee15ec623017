// tests/support/mocks/article_repo.rs
use admin_panel::domain::article::{
    Article, ArticleId, ArticleListRequest, ArticleReadRepository, ArticleSortField,
    ArticleUpdate, ArticleWriteRepository, NewArticle, SortDirection,
};
use admin_panel::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::Mutex;

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// 読み書き両方のトレイトを実装するメモリ上の記事リポジトリ
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    articles: Vec<Article>,
}

impl InMemoryArticleRepo {
    /// 保存済み記事のスナップショット
    pub fn snapshot(&self) -> Vec<Article> {
        self.inner.lock().unwrap().articles.clone()
    }
}

fn compare(a: &Article, b: &Article, sort: ArticleSortField) -> Ordering {
    let primary = match sort {
        ArticleSortField::Id => Ordering::Equal,
        ArticleSortField::Title => a.title.as_str().cmp(b.title.as_str()),
        ArticleSortField::Content => a.content.as_str().cmp(b.content.as_str()),
        ArticleSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        ArticleSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    primary.then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        state.next_id += 1;
        let stored = Article {
            id: ArticleId::new(state.next_id)?,
            title: article.title,
            content: article.content,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        let existing = state
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if existing.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article was modified by another request".into(),
            ));
        }
        existing.title = update.title;
        existing.content = update.content;
        existing.updated_at = update.updated_at;
        Ok(existing.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.inner.lock().unwrap();
        Ok(state.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn list_page(&self, request: &ArticleListRequest) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.inner.lock().unwrap();
        let term = request.search_term().map(str::to_lowercase);
        let mut matching: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| match &term {
                Some(term) => {
                    a.title.as_str().to_lowercase().contains(term)
                        || a.content.as_str().to_lowercase().contains(term)
                }
                None => true,
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = compare(a, b, request.sort);
            match request.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.page_size as usize)
            .collect();
        Ok((page, total))
    }
}
