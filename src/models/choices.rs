// src/models/choices.rs

//! Fixed option lists offered by the survey's selection widgets.
//!
//! Every enumerated answer serializes as its display label, so a stored
//! response reads the same way the form presented it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of labelled options.
pub trait Choice: Copy + Eq + 'static {
    /// All options in presentation order. The first one is the widget default.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.label() == label)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.label()).collect()
    }
}

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum! {
    Occupation {
        Student => "Student",
        Professional => "Professional",
        Retired => "Retired",
        Other => "Other",
    }
}

choice_enum! {
    Genre {
        Action => "Action",
        Comedy => "Comedy",
        Drama => "Drama",
        Horror => "Horror",
        Romance => "Romance",
        SciFi => "Sci-Fi",
        Thriller => "Thriller",
        Documentary => "Documentary",
        Animation => "Animation",
        Fantasy => "Fantasy",
        Mystery => "Mystery",
        Western => "Western",
    }
}

choice_enum! {
    WatchFrequency {
        Daily => "Daily",
        Weekly => "Weekly",
        Monthly => "Monthly",
        Rarely => "Rarely",
        Never => "Never",
    }
}

choice_enum! {
    /// How the respondent usually watches movies.
    Platform {
        Streaming => "Streaming Services (Netflix, Prime, etc.)",
        Theaters => "Movie Theaters",
        DiscMedia => "DVD/Blu-ray",
        TvChannels => "TV Channels",
        Other => "Other",
    }
}

choice_enum! {
    RemakeOpinion {
        Love => "Love them - they often improve on the original",
        Like => "Like them - some are good, some are bad",
        Neutral => "Neutral - depends on the movie",
        Dislike => "Dislike them - originals are usually better",
        Hate => "Hate them - they're unnecessary",
    }
}

choice_enum! {
    StreamingImpact {
        MoreMovies => "Watch more movies overall",
        FewerTheaterVisits => "Watch fewer movies in theaters",
        MoreIndieForeign => "Discover more indie/foreign films",
        BingeSeries => "Binge-watch series instead",
        NoChange => "No significant change",
        MobileViewing => "Watch movies on mobile devices",
    }
}
