use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleListRequest, ArticleSortField, SortDirection},
};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    /// Admin property name, e.g. `createdAt`.
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        let request = normalize_listing(query)?;

        let (records, total) = self.read_repo.list_page(&request).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(PaginatedResult::new(
            items,
            total,
            request.page,
            request.page_size,
        ))
    }
}

fn normalize_listing(query: ListArticlesQuery) -> ApplicationResult<ArticleListRequest> {
    let page = query.page.max(1);
    let page_size = if query.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        query.page_size.min(MAX_PAGE_SIZE)
    };

    let sort = match query.sort.as_deref() {
        Some(property) => ArticleSortField::from_property(property).ok_or_else(|| {
            ApplicationError::validation(format!("cannot sort by unknown field '{property}'"))
        })?,
        None => ArticleSortField::Id,
    };

    let direction = match query.direction.as_deref() {
        Some(raw) => SortDirection::parse(raw).ok_or_else(|| {
            ApplicationError::validation(format!("invalid sort direction '{raw}'"))
        })?,
        None => SortDirection::default(),
    };

    Ok(ArticleListRequest {
        page,
        page_size,
        search: query.search,
        sort,
        direction,
    })
}
