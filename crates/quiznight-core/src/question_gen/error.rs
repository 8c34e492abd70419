use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionGenError {
    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("the model returned no choices")]
    EmptyResponse,

    #[error("unexpected response format from the model")]
    UnexpectedResponseFormat,

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("question generation timed out")]
    Timeout,
}
