use super::types::{TutorRequest, TutorResponse};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Trims the model output and wraps it with an echo of the request fields.
pub fn shape(raw: &str, request: &TutorRequest) -> Result<TutorResponse> {
    let answer = raw.trim();
    if answer.is_empty() {
        return Err(Error::generation("empty response from model"));
    }

    let mut meta = IndexMap::with_capacity(3);
    meta.insert("classLevel".to_string(), request.class_level.clone());
    meta.insert("subject".to_string(), request.subject.clone());
    meta.insert("chapter".to_string(), request.chapter.clone());

    Ok(TutorResponse {
        answer: answer.to_string(),
        meta,
    })
}
