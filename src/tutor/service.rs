use super::{
    prompt::compose,
    response::shape,
    types::{AskRequest, TutorResponse},
    validator::validate,
};
use crate::{
    Error, Result,
    config::{Config, RequestDefaults},
    llm::{ChatCompletionRequest, LlmClient, OpenAiClient},
    syllabus::SyllabusConfig,
};
use std::{sync::Arc, time::Duration};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

/// Validate -> compose -> generate -> shape, once per question.
pub struct TutorService {
    syllabus: SyllabusConfig,
    defaults: RequestDefaults,
    llm_client: Arc<dyn LlmClient>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    timeout: Duration,
}

impl TutorService {
    pub fn new(config: &Config, llm_client: Arc<dyn LlmClient>) -> Self {
        Self {
            syllabus: config.syllabus.clone(),
            defaults: config.request_defaults.clone(),
            llm_client,
            model: config.llm.model.clone(),
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
            timeout: Duration::from_secs(config.llm.timeout_secs),
        }
    }

    /// Builds the service around an [`OpenAiClient`] for `config.llm`.
    pub fn from_config(config: &Config) -> Self {
        let llm_client = Arc::new(OpenAiClient::new(&config.llm));
        Self::new(config, llm_client)
    }

    pub fn syllabus(&self) -> &SyllabusConfig {
        &self.syllabus
    }

    pub async fn ask(&self, request: AskRequest) -> Result<TutorResponse> {
        let span = info_span!("ask", request_id = %Uuid::new_v4());
        self.ask_inner(request).instrument(span).await
    }

    async fn ask_inner(&self, request: AskRequest) -> Result<TutorResponse> {
        let request = request.resolve(&self.defaults)?;

        if let Err(e) = validate(&request, &self.syllabus) {
            info!("Rejected question: {}", e);
            return Err(e.into());
        }

        info!(
            class_level = %request.class_level,
            subject = %request.subject,
            chapter = %request.chapter,
            question_len = request.question.len(),
            "Accepted question"
        );

        let prompt = compose(&request);
        debug!("Composed prompt of {} bytes", prompt.len());

        let mut completion = ChatCompletionRequest::single_prompt(&self.model, prompt);
        completion.temperature = self.temperature;
        completion.max_tokens = self.max_tokens;

        let response =
            match tokio::time::timeout(self.timeout, self.llm_client.create_chat_completion(completion))
                .await
            {
                Ok(Ok(response)) => response,
                Ok(Err(e)) => {
                    warn!("Generation call failed: {}", e);
                    return Err(Error::generation(e.to_string()));
                }
                Err(_) => {
                    warn!("Generation call timed out after {:?}", self.timeout);
                    return Err(Error::generation(format!(
                        "model did not respond within {}s",
                        self.timeout.as_secs()
                    )));
                }
            };

        debug!("Model responded with completion {}", response.id);

        let shaped = shape(&response.content, &request);
        match shaped {
            Ok(ref answer) => info!("Answered with {} bytes", answer.answer.len()),
            Err(ref e) => warn!("Discarding model output: {}", e),
        }
        shaped
    }
}
