use super::types::TutorRequest;
use crate::{error::ValidationError, syllabus::SyllabusConfig};

/// Checks `request` against the allow-lists. The first failing check wins:
/// class, then subject, then chapter, then question.
pub fn validate(request: &TutorRequest, syllabus: &SyllabusConfig) -> Result<(), ValidationError> {
    if !syllabus.permits_class(&request.class_level) {
        return Err(ValidationError::UnsupportedClass(request.class_level.clone()));
    }

    if !syllabus.permits_subject(&request.subject) {
        return Err(ValidationError::UnsupportedSubject(request.subject.clone()));
    }

    if !syllabus.permits_chapter(&request.subject, &request.chapter) {
        return Err(ValidationError::UnsupportedChapter {
            subject: request.subject.clone(),
            chapter: request.chapter.clone(),
        });
    }

    if request.question.trim().is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }

    Ok(())
}
