//! Static allow-lists of class levels, subjects and chapters.

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const ICSE_CLASS_LEVELS: &[&str] = &["10"];

const ICSE_SUBJECTS: &[(&str, &[&str])] = &[
    (
        "Maths",
        &[
            "Commercial Mathematics",
            "Algebra",
            "Geometry",
            "Mensuration",
            "Trigonometry",
        ],
    ),
    (
        "Physics",
        &[
            "Force, Work, Power and Energy",
            "Light",
            "Sound",
            "Electricity and Magnetism",
            "Heat",
            "Modern Physics",
        ],
    ),
];

/// Permitted class levels plus subject -> chapter lists, in configured order.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusConfig {
    #[serde(default = "default_class_levels")]
    class_levels: Vec<String>,
    #[serde(default = "default_subjects")]
    subjects: IndexMap<String, Vec<String>>,
}

impl SyllabusConfig {
    pub fn new(class_levels: Vec<String>, subjects: IndexMap<String, Vec<String>>) -> Self {
        Self {
            class_levels,
            subjects,
        }
    }

    /// ICSE Class 10 Maths and Physics.
    pub fn icse_class_10() -> Self {
        Self::new(default_class_levels(), default_subjects())
    }

    pub fn class_levels(&self) -> &[String] {
        &self.class_levels
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    pub fn chapters(&self, subject: &str) -> Option<&[String]> {
        self.subjects.get(subject).map(Vec::as_slice)
    }

    pub fn permits_class(&self, class_level: &str) -> bool {
        self.class_levels.iter().any(|c| c == class_level)
    }

    pub fn permits_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    pub fn permits_chapter(&self, subject: &str, chapter: &str) -> bool {
        self.chapters(subject)
            .is_some_and(|chapters| chapters.iter().any(|c| c == chapter))
    }

    pub fn validate(&self) -> Result<()> {
        if self.class_levels.is_empty() {
            return Err(Error::config("syllabus.class_levels must not be empty"));
        }
        if self.class_levels.iter().any(|c| c.trim().is_empty()) {
            return Err(Error::config("syllabus.class_levels contains a blank entry"));
        }
        if self.subjects.is_empty() {
            return Err(Error::config("syllabus.subjects must not be empty"));
        }

        for (subject, chapters) in &self.subjects {
            if subject.trim().is_empty() {
                return Err(Error::config("syllabus.subjects contains a blank subject"));
            }
            if chapters.is_empty() {
                return Err(Error::config(format!(
                    "subject '{}' has no chapters",
                    subject
                )));
            }
            if chapters.iter().any(|c| c.trim().is_empty()) {
                return Err(Error::config(format!(
                    "subject '{}' has a blank chapter",
                    subject
                )));
            }
        }

        Ok(())
    }
}

impl Default for SyllabusConfig {
    fn default() -> Self {
        Self::icse_class_10()
    }
}

fn default_class_levels() -> Vec<String> {
    ICSE_CLASS_LEVELS.iter().map(|c| c.to_string()).collect()
}

fn default_subjects() -> IndexMap<String, Vec<String>> {
    ICSE_SUBJECTS
        .iter()
        .map(|(subject, chapters)| {
            (
                subject.to_string(),
                chapters.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}
