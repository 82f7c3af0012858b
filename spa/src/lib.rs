pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod pages;
pub mod router;
pub mod session;
pub mod shell;
pub mod storage;
