use super::types::TutorRequest;

const PREAMBLE: &str = "\
You are an expert ICSE tutor for Classes 9 and 10.
Board: ICSE.
Subjects: Mathematics, Physics, Chemistry, Biology.

Rules:
1. Stay within ICSE syllabus for the given class, subject and chapter.
2. Explain like a Class 11 topper, simple and step-by-step.
3. For numericals, always show working and final answer.
4. For theory, keep 4–8 exam-focused lines unless student asks for more.
5. If question is outside ICSE 9–10, say so politely and redirect.";

/// Renders the single prompt sent to the model: the tutor preamble followed
/// by the request fields. The question is copied verbatim.
pub fn compose(request: &TutorRequest) -> String {
    format!(
        "{PREAMBLE}\n\nClass: {}\nSubject: {}\nChapter: {}\n\nStudent's question:\n{}",
        request.class_level, request.subject, request.chapter, request.question
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_request() -> TutorRequest {
        TutorRequest::new("10", "Maths", "Algebra", "Solve x^2-5x+6=0")
    }

    #[test]
    fn test_compose_is_deterministic() {
        assert_eq!(compose(&sample_request()), compose(&sample_request()));
    }

    #[test]
    fn test_compose_contains_fields_verbatim() {
        let prompt = compose(&sample_request());

        assert!(prompt.starts_with("You are an expert ICSE tutor for Classes 9 and 10."));
        assert!(prompt.contains("\n\nClass: 10\nSubject: Maths\nChapter: Algebra\n"));
        assert!(prompt.ends_with("Student's question:\nSolve x^2-5x+6=0"));
    }

    #[test]
    fn test_compose_keeps_question_whitespace() {
        let request = TutorRequest::new("10", "Physics", "Light", "  Why is the sky blue?\n");
        let prompt = compose(&request);

        assert!(prompt.ends_with("Student's question:\n  Why is the sky blue?\n"));
    }

    #[test]
    fn test_preamble_lists_numbered_rules() {
        let prompt = compose(&sample_request());
        for rule in 1..=5 {
            assert!(prompt.contains(&format!("\n{rule}. ")));
        }
    }
}
