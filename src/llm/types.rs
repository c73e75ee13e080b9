/// One generation call: the composed prompt, sent as a single user message.
#[derive(Debug, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// The first choice's text. Empty when the model returned no choice or no
/// content.
#[derive(Debug, Clone)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub content: String,
}

impl ChatCompletionRequest {
    pub fn single_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
        }
    }
}
