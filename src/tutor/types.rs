use crate::{config::RequestDefaults, error::ValidationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Question payload as it arrives over HTTP. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[serde(default, alias = "class_level")]
    pub class_level: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

/// A fully populated question, ready for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorRequest {
    pub class_level: String,
    pub subject: String,
    pub chapter: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorResponse {
    pub answer: String,
    pub meta: IndexMap<String, String>,
}

impl AskRequest {
    /// Fills absent fields from `defaults`.
    ///
    /// A missing question becomes the empty string so that it is rejected as
    /// an empty question, after the class, subject and chapter checks.
    pub fn resolve(self, defaults: &RequestDefaults) -> Result<TutorRequest, ValidationError> {
        let class_level = self
            .class_level
            .or_else(|| defaults.class_level.clone())
            .ok_or(ValidationError::MissingField("classLevel"))?;
        let subject = self
            .subject
            .or_else(|| defaults.subject.clone())
            .ok_or(ValidationError::MissingField("subject"))?;
        let chapter = self
            .chapter
            .or_else(|| defaults.chapter.clone())
            .ok_or(ValidationError::MissingField("chapter"))?;

        Ok(TutorRequest {
            class_level,
            subject,
            chapter,
            question: self.question.unwrap_or_default(),
        })
    }
}

impl TutorRequest {
    pub fn new(
        class_level: impl Into<String>,
        subject: impl Into<String>,
        chapter: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            class_level: class_level.into(),
            subject: subject.into(),
            chapter: chapter.into(),
            question: question.into(),
        }
    }
}
