// src/views/summary.rs

use std::fmt;

use serde::Serialize;

use crate::{
    models::{choices::Choice, survey::SurveyRecord},
    views::chart::BarChart,
};

/// Read-only presentation of a stored response.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub sections: Vec<SummarySection>,
    pub chart: BarChart,
    /// Where the response was saved, shown as confirmation.
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummarySection {
    pub title: &'static str,
    pub lines: Vec<SummaryLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

fn line(label: &'static str, value: impl Into<String>) -> SummaryLine {
    SummaryLine {
        label,
        value: value.into(),
    }
}

/// Adds the line only when the respondent actually answered.
fn push_answered(lines: &mut Vec<SummaryLine>, label: &'static str, value: &str) {
    if !value.is_empty() {
        lines.push(line(label, value));
    }
}

fn join<T: Choice>(choices: &[T]) -> String {
    choices
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SummaryView {
    pub fn new(record: &SurveyRecord, location: &str) -> Self {
        let info = &record.personal_info;
        let mut personal = vec![
            line("Name", info.name.as_str()),
            line("Age", info.age.to_string()),
            line("Occupation", info.occupation.label()),
        ];
        push_answered(&mut personal, "Email", &info.email);

        let prefs = &record.preferences;
        let preferences = vec![
            line("Favorite Genres", join(&prefs.favorite_genres)),
            line("Watch Frequency", prefs.watch_frequency.label()),
            line("Preferred Platform", prefs.preferred_platform.label()),
        ];

        let mut movies = Vec::new();
        push_answered(&mut movies, "Recent Movies", &record.movies.recent_movies);
        push_answered(&mut movies, "Best Movie", &record.movies.best_movie);
        push_answered(&mut movies, "Worst Movie", &record.movies.worst_movie);

        let opinions = vec![
            line("Remake Opinion", record.opinions.remake_opinion.label()),
            line("Streaming Impact", join(&record.opinions.streaming_impact)),
        ];

        let mut sections = vec![
            SummarySection {
                title: "Personal Information",
                lines: personal,
            },
            SummarySection {
                title: "Preferences",
                lines: preferences,
            },
            SummarySection {
                title: "Movie Information",
                lines: movies,
            },
            SummarySection {
                title: "Opinions",
                lines: opinions,
            },
        ];

        if !record.additional_comments.is_empty() {
            sections.push(SummarySection {
                title: "Additional Comments",
                lines: vec![line("Comments", record.additional_comments.as_str())],
            });
        }

        Self {
            sections,
            chart: BarChart::from_ratings(&record.ratings),
            location: location.to_string(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &SummaryLine> {
        self.sections.iter().flat_map(|s| s.lines.iter())
    }

    /// True if some line renders exactly as `text`, e.g. `"Name: Alex"`.
    pub fn has_line(&self, text: &str) -> bool {
        self.lines().any(|l| l.to_string() == text)
    }
}
