// src/models/form.rs

//! Decoding of the HTML form post into [`RawSurveyFields`].
//!
//! Browsers send multi-select widgets as repeated keys
//! (`favorite_genres=Action&favorite_genres=Drama`), which is why the body is
//! walked pair by pair instead of going through a struct deserializer.

use thiserror::Error;

use crate::models::{
    choices::{Choice, Genre, Occupation, Platform, RemakeOpinion, StreamingImpact, WatchFrequency},
    survey::RawSurveyFields,
};

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("field '{field}' expects a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("'{value}' is not an option for field '{field}'")]
    UnknownChoice { field: &'static str, value: String },
}

impl RawSurveyFields {
    /// Decodes an `application/x-www-form-urlencoded` body.
    /// Unknown keys are ignored; absent keys keep their widget default.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, FormError> {
        let mut raw = Self::default();

        for (key, value) in url::form_urlencoded::parse(body) {
            let value = value.into_owned();
            match &*key {
                "name" => raw.name = value,
                "age" => raw.age = parse_number("age", value)?,
                "email" => raw.email = value,
                "occupation" => raw.occupation = parse_choice::<Occupation>("occupation", value)?,
                "favorite_genres" => raw
                    .favorite_genres
                    .push(parse_choice::<Genre>("favorite_genres", value)?),
                "watch_frequency" => {
                    raw.watch_frequency = parse_choice::<WatchFrequency>("watch_frequency", value)?
                }
                "preferred_platform" => {
                    raw.preferred_platform = parse_choice::<Platform>("preferred_platform", value)?
                }
                "story_quality" => raw.story_quality = parse_number("story_quality", value)?,
                "acting_performance" => {
                    raw.acting_performance = parse_number("acting_performance", value)?
                }
                "visual_effects" => raw.visual_effects = parse_number("visual_effects", value)?,
                "music_soundtrack" => {
                    raw.music_soundtrack = parse_number("music_soundtrack", value)?
                }
                "overall_experience" => {
                    raw.overall_experience = parse_number("overall_experience", value)?
                }
                "recent_movies" => raw.recent_movies = value,
                "best_movie" => raw.best_movie = value,
                "worst_movie" => raw.worst_movie = value,
                "remake_opinion" => {
                    raw.remake_opinion = parse_choice::<RemakeOpinion>("remake_opinion", value)?
                }
                "streaming_impact" => raw
                    .streaming_impact
                    .push(parse_choice::<StreamingImpact>("streaming_impact", value)?),
                "additional_comments" => raw.additional_comments = value,
                other => tracing::debug!("Ignoring unknown form field: {}", other),
            }
        }

        Ok(raw)
    }
}

fn parse_number(field: &'static str, value: String) -> Result<u32, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidNumber { field, value })
}

fn parse_choice<T: Choice>(field: &'static str, value: String) -> Result<T, FormError> {
    T::from_label(&value).ok_or(FormError::UnknownChoice { field, value })
}
