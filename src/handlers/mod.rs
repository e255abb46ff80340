// src/handlers/mod.rs

pub mod api;
pub mod form;
