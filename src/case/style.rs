use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CaseError;

// ─── Style ─────────────────────────────────────────────────────────────────

/// The closed set of identifier styles the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    /// `user_name`
    #[serde(rename = "snake_case")]
    Snake,
    /// `user-name`
    #[serde(rename = "kebab-case")]
    Kebab,
    /// `userName`
    #[serde(rename = "camelCase")]
    Camel,
    /// `UserName`
    #[serde(rename = "PascalCase")]
    Pascal,
    /// `User-Name`
    #[serde(rename = "Train-Case")]
    Train,
    /// `USER_NAME`
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnake,
    /// `user.name`
    #[serde(rename = "dot.case")]
    Dot,
    /// `user/name`
    #[serde(rename = "path/case")]
    Path,
}

impl Style {
    pub const ALL: [Style; 8] = [
        Style::Snake,
        Style::Kebab,
        Style::Camel,
        Style::Pascal,
        Style::Train,
        Style::ScreamingSnake,
        Style::Dot,
        Style::Path,
    ];

    /// Canonical label, written in the style it names.
    pub fn label(self) -> &'static str {
        match self {
            Style::Snake => "snake_case",
            Style::Kebab => "kebab-case",
            Style::Camel => "camelCase",
            Style::Pascal => "PascalCase",
            Style::Train => "Train-Case",
            Style::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Style::Dot => "dot.case",
            Style::Path => "path/case",
        }
    }

    pub fn separator(self) -> Option<char> {
        self.profile().separator
    }

    /// Row of the style table. Profiles are pairwise distinct, so a
    /// fingerprint matches at most one style.
    pub const fn profile(self) -> Profile {
        match self {
            Style::Camel => Profile::new(None, false, false, false, false),
            Style::Pascal => Profile::new(None, false, false, true, false),
            Style::Snake => Profile::new(Some('_'), false, true, false, false),
            Style::Kebab => Profile::new(Some('-'), false, true, false, false),
            Style::ScreamingSnake => Profile::new(Some('_'), true, false, true, true),
            Style::Dot => Profile::new(Some('.'), false, true, false, false),
            Style::Path => Profile::new(Some('/'), false, true, false, false),
            Style::Train => Profile::new(Some('-'), false, false, true, true),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Style {
    type Err = CaseError;

    /// Case-sensitive match against the eight labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.label() == s)
            .ok_or(CaseError::UnrecognizedStyle)
    }
}

// ─── Profile ───────────────────────────────────────────────────────────────

/// Structural attributes of a style. A [`Fingerprint`](super::fingerprint::Fingerprint)
/// computed from an input has the same shape and is compared against these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub separator: Option<char>,
    pub all_upper: bool,
    pub all_lower: bool,
    pub first_capitalized: bool,
    pub capitalized_after_separator: bool,
}

impl Profile {
    const fn new(
        separator: Option<char>,
        all_upper: bool,
        all_lower: bool,
        first_capitalized: bool,
        capitalized_after_separator: bool,
    ) -> Self {
        Self {
            separator,
            all_upper,
            all_lower,
            first_capitalized,
            capitalized_after_separator,
        }
    }
}
