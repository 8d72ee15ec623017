pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{
    ArticleListRequest, ArticleReadRepository, ArticleSortField, ArticleWriteRepository,
    SortDirection,
};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
