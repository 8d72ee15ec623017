pub mod articles;
pub mod pagination;
pub mod serde_time;

pub use articles::ArticleDto;
pub use pagination::PaginatedResult;
