// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repo;
pub mod time;

// 時刻関連
pub use time::{SteppingClock, fixed_now};

// 記事リポジトリ
pub use article_repo::InMemoryArticleRepo;
