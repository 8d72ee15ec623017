mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::{DEFAULT_PAGE_SIZE, ListArticlesQuery, MAX_PAGE_SIZE};
pub use service::ArticleQueryService;
