// src/builder.rs

//! Required-field checks and assembly of the nested [`SurveyRecord`].

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::models::survey::{
    Movies, Opinions, PersonalInfo, Preferences, Ratings, RawSurveyFields, SurveyRecord,
};

/// A user-correctable problem with the submitted answers.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("at least one genre required")]
    GenreRequired,
}

/// Builds a record stamped with the current local time.
pub fn build(raw: RawSurveyFields) -> Result<SurveyRecord, ValidationError> {
    build_at(raw, Local::now())
}

/// Builds a record stamped with `now`.
///
/// The name is checked before the genres and the first failure is returned.
/// Everything else is copied as given.
pub fn build_at(
    raw: RawSurveyFields,
    now: DateTime<Local>,
) -> Result<SurveyRecord, ValidationError> {
    if raw.name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    if raw.favorite_genres.is_empty() {
        return Err(ValidationError::GenreRequired);
    }

    let mut favorite_genres = Vec::with_capacity(raw.favorite_genres.len());
    for genre in raw.favorite_genres {
        if !favorite_genres.contains(&genre) {
            favorite_genres.push(genre);
        }
    }

    let mut streaming_impact = Vec::with_capacity(raw.streaming_impact.len());
    for impact in raw.streaming_impact {
        if !streaming_impact.contains(&impact) {
            streaming_impact.push(impact);
        }
    }

    Ok(SurveyRecord {
        timestamp: now,
        personal_info: PersonalInfo {
            name: raw.name,
            age: raw.age,
            email: raw.email,
            occupation: raw.occupation,
        },
        preferences: Preferences {
            favorite_genres,
            watch_frequency: raw.watch_frequency,
            preferred_platform: raw.preferred_platform,
        },
        ratings: Ratings {
            story_quality: raw.story_quality,
            acting_performance: raw.acting_performance,
            visual_effects: raw.visual_effects,
            music_soundtrack: raw.music_soundtrack,
            overall_experience: raw.overall_experience,
        },
        movies: Movies {
            recent_movies: raw.recent_movies,
            best_movie: raw.best_movie,
            worst_movie: raw.worst_movie,
        },
        opinions: Opinions {
            remake_opinion: raw.remake_opinion,
            streaming_impact,
        },
        additional_comments: raw.additional_comments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::choices::{
        Genre, Occupation, Platform, RemakeOpinion, StreamingImpact, WatchFrequency,
    };

    fn filled_in() -> RawSurveyFields {
        RawSurveyFields {
            name: "Jordan Lee".to_string(),
            age: 41,
            email: "jordan@example.com".to_string(),
            occupation: Occupation::Professional,
            favorite_genres: vec![Genre::Thriller, Genre::Documentary],
            watch_frequency: WatchFrequency::Weekly,
            preferred_platform: Platform::Theaters,
            story_quality: 9,
            acting_performance: 8,
            visual_effects: 3,
            music_soundtrack: 10,
            overall_experience: 7,
            recent_movies: "Inception, The Dark Knight".to_string(),
            best_movie: "Heat".to_string(),
            worst_movie: "".to_string(),
            remake_opinion: RemakeOpinion::Dislike,
            streaming_impact: vec![StreamingImpact::MobileViewing],
            additional_comments: "More westerns please.".to_string(),
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let raw = RawSurveyFields {
            name: String::new(),
            favorite_genres: vec![Genre::Action],
            ..RawSurveyFields::default()
        };
        assert_eq!(build(raw), Err(ValidationError::NameRequired));
    }

    #[test]
    fn whitespace_name_is_kept_verbatim() {
        let raw = RawSurveyFields {
            name: "  ".to_string(),
            favorite_genres: vec![Genre::Action],
            ..RawSurveyFields::default()
        };
        let record = build(raw).unwrap();
        assert_eq!(record.personal_info.name, "  ");
    }

    #[test]
    fn name_is_checked_before_genres() {
        let raw = RawSurveyFields::default();
        assert_eq!(build(raw), Err(ValidationError::NameRequired));
    }

    #[test]
    fn empty_genres_are_rejected() {
        let raw = RawSurveyFields {
            name: "Alex".to_string(),
            ..RawSurveyFields::default()
        };
        let err = build(raw).unwrap_err();
        assert_eq!(err, ValidationError::GenreRequired);
        assert_eq!(err.to_string(), "at least one genre required");
    }

    #[test]
    fn record_copies_every_field() {
        let raw = filled_in();
        let now = Local::now();
        let record = build_at(raw.clone(), now).unwrap();

        assert_eq!(record.timestamp, now);
        assert_eq!(record.personal_info.name, raw.name);
        assert_eq!(record.personal_info.age, raw.age);
        assert_eq!(record.personal_info.email, raw.email);
        assert_eq!(record.personal_info.occupation, raw.occupation);
        assert_eq!(record.preferences.favorite_genres, raw.favorite_genres);
        assert_eq!(record.preferences.watch_frequency, raw.watch_frequency);
        assert_eq!(record.preferences.preferred_platform, raw.preferred_platform);
        assert_eq!(record.ratings.story_quality, 9);
        assert_eq!(record.ratings.acting_performance, 8);
        assert_eq!(record.ratings.visual_effects, 3);
        assert_eq!(record.ratings.music_soundtrack, 10);
        assert_eq!(record.ratings.overall_experience, 7);
        assert_eq!(record.movies.recent_movies, raw.recent_movies);
        assert_eq!(record.movies.best_movie, raw.best_movie);
        assert_eq!(record.movies.worst_movie, "");
        assert_eq!(record.opinions.remake_opinion, raw.remake_opinion);
        assert_eq!(record.opinions.streaming_impact, raw.streaming_impact);
        assert_eq!(record.additional_comments, raw.additional_comments);
    }

    #[test]
    fn timestamp_is_not_before_build_start() {
        let start = Local::now();
        let record = build(filled_in()).unwrap();
        assert!(record.timestamp >= start);

        let json = serde_json::to_value(&record).unwrap();
        let stamp = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn duplicate_selections_collapse() {
        let raw = RawSurveyFields {
            name: "Alex".to_string(),
            favorite_genres: vec![Genre::Comedy, Genre::Horror, Genre::Comedy],
            ..RawSurveyFields::default()
        };
        let record = build(raw).unwrap();
        assert_eq!(
            record.preferences.favorite_genres,
            vec![Genre::Comedy, Genre::Horror]
        );
    }
}
