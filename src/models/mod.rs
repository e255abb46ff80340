// src/models/mod.rs

pub mod choices;
pub mod form;
pub mod survey;
