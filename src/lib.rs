// src/lib.rs

pub mod builder;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;

pub use routes::create_router;
