// src/models/survey.rs

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::choices::{
    Genre, Occupation, Platform, RemakeOpinion, StreamingImpact, WatchFrequency,
};

pub const MIN_AGE: u32 = 13;
pub const MAX_AGE: u32 = 100;
pub const DEFAULT_AGE: u32 = 25;

pub const MIN_RATING: u32 = 1;
pub const MAX_RATING: u32 = 10;
pub const DEFAULT_RATING: u32 = 5;

/// One finalized survey submission.
/// Built once by `builder::build` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    /// Build instant, serialized as RFC 3339 with the local offset.
    pub timestamp: DateTime<Local>,
    pub personal_info: PersonalInfo,
    pub preferences: Preferences,
    pub ratings: Ratings,
    pub movies: Movies,
    pub opinions: Opinions,
    pub additional_comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub age: u32,
    /// Collected as typed; empty when the respondent skipped it.
    pub email: String,
    pub occupation: Occupation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub favorite_genres: Vec<Genre>,
    pub watch_frequency: WatchFrequency,
    pub preferred_platform: Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    pub story_quality: u32,
    pub acting_performance: u32,
    pub visual_effects: u32,
    pub music_soundtrack: u32,
    pub overall_experience: u32,
}

impl Ratings {
    /// Rating keys paired with their human labels, in form order.
    pub fn labelled(&self) -> [(&'static str, &'static str, u32); 5] {
        [
            ("story_quality", "Story Quality", self.story_quality),
            ("acting_performance", "Acting Performance", self.acting_performance),
            ("visual_effects", "Visual Effects", self.visual_effects),
            ("music_soundtrack", "Music/Soundtrack", self.music_soundtrack),
            ("overall_experience", "Overall Experience", self.overall_experience),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movies {
    pub recent_movies: String,
    pub best_movie: String,
    pub worst_movie: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opinions {
    pub remake_opinion: RemakeOpinion,
    pub streaming_impact: Vec<StreamingImpact>,
}

/// Values currently held by the form widgets, one per field.
///
/// Missing keys fall back to the widget defaults. Numeric bounds belong to
/// the widgets and are checked with `validate()` when input is parsed; the
/// record builder only enforces the required fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RawSurveyFields {
    pub name: String,
    #[validate(range(min = 13, max = 100))]
    pub age: u32,
    pub email: String,
    pub occupation: Occupation,

    pub favorite_genres: Vec<Genre>,
    pub watch_frequency: WatchFrequency,
    pub preferred_platform: Platform,

    #[validate(range(min = 1, max = 10))]
    pub story_quality: u32,
    #[validate(range(min = 1, max = 10))]
    pub acting_performance: u32,
    #[validate(range(min = 1, max = 10))]
    pub visual_effects: u32,
    #[validate(range(min = 1, max = 10))]
    pub music_soundtrack: u32,
    #[validate(range(min = 1, max = 10))]
    pub overall_experience: u32,

    pub recent_movies: String,
    pub best_movie: String,
    pub worst_movie: String,

    pub remake_opinion: RemakeOpinion,
    pub streaming_impact: Vec<StreamingImpact>,

    pub additional_comments: String,
}

impl Default for RawSurveyFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: DEFAULT_AGE,
            email: String::new(),
            occupation: Occupation::default(),
            favorite_genres: Vec::new(),
            watch_frequency: WatchFrequency::default(),
            preferred_platform: Platform::default(),
            story_quality: DEFAULT_RATING,
            acting_performance: DEFAULT_RATING,
            visual_effects: DEFAULT_RATING,
            music_soundtrack: DEFAULT_RATING,
            overall_experience: DEFAULT_RATING,
            recent_movies: String::new(),
            best_movie: String::new(),
            worst_movie: String::new(),
            remake_opinion: RemakeOpinion::default(),
            streaming_impact: Vec::new(),
            additional_comments: String::new(),
        }
    }
}
