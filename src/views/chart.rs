// src/views/chart.rs

use serde::Serialize;

use crate::models::survey::{MAX_RATING, Ratings};

/// Bar chart comparing the five ratings of one response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub max: u32,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u32,
}

impl BarChart {
    pub fn from_ratings(ratings: &Ratings) -> Self {
        Self {
            title: "Ratings Breakdown",
            max: MAX_RATING,
            bars: ratings
                .labelled()
                .into_iter()
                .map(|(key, label, value)| Bar { key, label, value })
                .collect(),
        }
    }

    /// Width of `bar` as a percentage of the scale, capped at 100.
    pub fn percent(&self, bar: &Bar) -> u32 {
        if self.max == 0 {
            return 0;
        }
        (bar.value.min(self.max) * 100) / self.max
    }
}
