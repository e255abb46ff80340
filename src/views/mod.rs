// src/views/mod.rs

pub mod chart;
pub mod html;
pub mod schema;
pub mod summary;

pub use summary::SummaryView;

use crate::models::survey::RawSurveyFields;

/// Result of one render pass.
#[derive(Debug, Clone)]
pub enum Page {
    Form(FormView),
    Summary(SummaryView),
}

/// The form as the respondent should currently see it.
#[derive(Debug, Clone)]
pub struct FormView {
    pub values: RawSurveyFields,
    /// Inline message from the last failed submit.
    pub error: Option<String>,
}

impl FormView {
    pub fn new(values: RawSurveyFields, error: Option<String>) -> Self {
        Self { values, error }
    }
}
