use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::Conflict` when the stored `updated_at` differs
    /// from `update.original_updated_at`, and `NotFound` when the row is gone.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Returns one page of articles together with the total number of rows
    /// matching the request's search filter.
    async fn list_page(&self, request: &ArticleListRequest) -> DomainResult<(Vec<Article>, u64)>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSortField {
    Id,
    Title,
    Content,
    CreatedAt,
    UpdatedAt,
}

impl ArticleSortField {
    /// Resolve an admin property name (`createdAt`, ...) to a sortable field.
    pub fn from_property(property: &str) -> Option<Self> {
        match property {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "content" => Some(Self::Content),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Content => "content",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleListRequest {
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    pub sort: ArticleSortField,
    pub direction: SortDirection,
}

impl ArticleListRequest {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.page_size)
    }

    /// Trimmed search term, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
