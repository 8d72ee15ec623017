// src/presentation/http/controllers/mod.rs
pub mod admin_articles;
pub mod admin_dashboard;
