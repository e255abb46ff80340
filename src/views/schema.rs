// src/views/schema.rs

//! Declarative description of the survey form.
//!
//! The HTML renderer lays the form out from this, and `/api/survey/schema`
//! hands the same description to any other front end.

use serde::Serialize;

use crate::models::{
    choices::{Choice, Genre, Occupation, Platform, RemakeOpinion, StreamingImpact, WatchFrequency},
    survey::{
        DEFAULT_AGE, DEFAULT_RATING, MAX_AGE, MAX_RATING, MIN_AGE, MIN_RATING, RawSurveyFields,
    },
};

#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: Vec<SectionSchema>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionSchema {
    pub title: &'static str,
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    /// Form key, identical to the `RawSurveyFields` member name.
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(flatten)]
    pub widget: Widget,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    Text,
    TextArea,
    Number {
        min: u32,
        max: u32,
        default: u32,
    },
    Slider {
        min: u32,
        max: u32,
        default: u32,
    },
    Select {
        choices: Vec<&'static str>,
        default: &'static str,
    },
    Radio {
        choices: Vec<&'static str>,
        default: &'static str,
    },
    MultiSelect {
        choices: Vec<&'static str>,
    },
}

/// What a widget currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u32),
    Choice(&'static str),
    Choices(Vec<&'static str>),
}

impl FieldSchema {
    fn new(key: &'static str, label: &'static str, widget: Widget) -> Self {
        Self {
            key,
            label,
            required: false,
            placeholder: None,
            widget,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

fn select<T: Choice + Default>() -> Widget {
    Widget::Select {
        choices: T::labels(),
        default: T::default().label(),
    }
}

fn radio<T: Choice + Default>() -> Widget {
    Widget::Radio {
        choices: T::labels(),
        default: T::default().label(),
    }
}

fn rating() -> Widget {
    Widget::Slider {
        min: MIN_RATING,
        max: MAX_RATING,
        default: DEFAULT_RATING,
    }
}

impl FormSchema {
    pub fn movie_survey() -> Self {
        Self {
            title: "Movie Survey",
            intro: "Please fill out this movie survey to help us understand your preferences!",
            sections: vec![
                SectionSchema {
                    title: "Personal Information",
                    fields: vec![
                        FieldSchema::new("name", "Full Name", Widget::Text)
                            .required()
                            .placeholder("Enter your full name"),
                        FieldSchema::new(
                            "age",
                            "Age",
                            Widget::Number {
                                min: MIN_AGE,
                                max: MAX_AGE,
                                default: DEFAULT_AGE,
                            },
                        ),
                        FieldSchema::new("email", "Email (optional)", Widget::Text)
                            .placeholder("Enter your email"),
                        FieldSchema::new("occupation", "Occupation", select::<Occupation>()),
                    ],
                },
                SectionSchema {
                    title: "Movie Preferences",
                    fields: vec![
                        FieldSchema::new(
                            "favorite_genres",
                            "What are your favorite movie genres? (Select all that apply)",
                            Widget::MultiSelect {
                                choices: Genre::labels(),
                            },
                        )
                        .required(),
                        FieldSchema::new(
                            "watch_frequency",
                            "How often do you watch movies?",
                            radio::<WatchFrequency>(),
                        ),
                        FieldSchema::new(
                            "preferred_platform",
                            "What's your preferred way to watch movies?",
                            select::<Platform>(),
                        ),
                    ],
                },
                SectionSchema {
                    title: "Movie Ratings",
                    fields: vec![
                        FieldSchema::new("story_quality", "Story Quality", rating()),
                        FieldSchema::new("acting_performance", "Acting Performance", rating()),
                        FieldSchema::new("visual_effects", "Visual Effects", rating()),
                        FieldSchema::new("music_soundtrack", "Music/Soundtrack", rating()),
                        FieldSchema::new("overall_experience", "Overall Experience", rating()),
                    ],
                },
                SectionSchema {
                    title: "Recent Movies",
                    fields: vec![
                        FieldSchema::new(
                            "recent_movies",
                            "What movies have you watched recently? (List them separated by commas)",
                            Widget::TextArea,
                        )
                        .placeholder("e.g., Inception, The Dark Knight, La La Land"),
                        FieldSchema::new(
                            "best_movie",
                            "What's the best movie you've ever watched?",
                            Widget::Text,
                        )
                        .placeholder("Enter movie title"),
                        FieldSchema::new(
                            "worst_movie",
                            "What's the worst movie you've ever watched?",
                            Widget::Text,
                        )
                        .placeholder("Enter movie title"),
                    ],
                },
                SectionSchema {
                    title: "Industry Opinions",
                    fields: vec![
                        FieldSchema::new(
                            "remake_opinion",
                            "What's your opinion on movie remakes?",
                            radio::<RemakeOpinion>(),
                        ),
                        FieldSchema::new(
                            "streaming_impact",
                            "How has streaming changed your movie-watching habits? (Select all that apply)",
                            Widget::MultiSelect {
                                choices: StreamingImpact::labels(),
                            },
                        ),
                    ],
                },
                SectionSchema {
                    title: "Additional Comments",
                    fields: vec![
                        FieldSchema::new(
                            "additional_comments",
                            "Any additional comments or suggestions about movies?",
                            Widget::TextArea,
                        )
                        .placeholder(
                            "Share your thoughts, recommendations, or any other feedback...",
                        ),
                    ],
                },
            ],
        }
    }
}

/// Looks up the current value of the widget named `key`.
pub fn field_value<'a>(values: &'a RawSurveyFields, key: &str) -> Option<FieldValue<'a>> {
    let value = match key {
        "name" => FieldValue::Text(&values.name),
        "age" => FieldValue::Number(values.age),
        "email" => FieldValue::Text(&values.email),
        "occupation" => FieldValue::Choice(values.occupation.label()),
        "favorite_genres" => {
            FieldValue::Choices(values.favorite_genres.iter().map(|g| g.label()).collect())
        }
        "watch_frequency" => FieldValue::Choice(values.watch_frequency.label()),
        "preferred_platform" => FieldValue::Choice(values.preferred_platform.label()),
        "story_quality" => FieldValue::Number(values.story_quality),
        "acting_performance" => FieldValue::Number(values.acting_performance),
        "visual_effects" => FieldValue::Number(values.visual_effects),
        "music_soundtrack" => FieldValue::Number(values.music_soundtrack),
        "overall_experience" => FieldValue::Number(values.overall_experience),
        "recent_movies" => FieldValue::Text(&values.recent_movies),
        "best_movie" => FieldValue::Text(&values.best_movie),
        "worst_movie" => FieldValue::Text(&values.worst_movie),
        "remake_opinion" => FieldValue::Choice(values.remake_opinion.label()),
        "streaming_impact" => {
            FieldValue::Choices(values.streaming_impact.iter().map(|s| s.label()).collect())
        }
        "additional_comments" => FieldValue::Text(&values.additional_comments),
        _ => return None,
    };
    Some(value)
}
