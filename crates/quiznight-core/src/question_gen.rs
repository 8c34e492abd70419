//! LLM-backed drafting of trivia questions.
//!
//! The model is forced into a single tool call whose JSON-schema parameters
//! describe the question list, so the response parses without any free-text
//! scraping. Drafts are returned to the caller; persistence stays with the
//! route layer.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionNamedToolChoice, ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, ChatCompletionTool, ChatCompletionToolChoiceOption,
    ChatCompletionToolType, CreateChatCompletionRequestArgs, FunctionName, FunctionObject,
};
use quiznight_model::question::{QuestionOption, QuestionType};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

pub mod error;

use error::QuestionGenError;

const TOOL_NAME: &str = "submit_questions";
const TOTAL_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub api_base: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub topic: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub count: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDraft {
    pub question: String,
    pub r#type: QuestionType,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    pub correct_answer: String,
    #[serde(default = "default_points")]
    pub points: i32,
}

fn default_points() -> i32 {
    10
}

#[derive(Debug, Deserialize)]
struct QuestionBatch {
    questions: Vec<QuestionDraft>,
}

fn tool_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "questions": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "properties": {
                        "question": {
                            "type": "string",
                            "description": "The question as read out by the host. Self-contained, no references to other questions."
                        },
                        "type": {
                            "type": "string",
                            "enum": ["multiple_choice", "true_false", "fill_blank"]
                        },
                        "options": {
                            "type": "array",
                            "description": "2-5 answer options for multiple_choice, exactly 'true' and 'false' for true_false, empty for fill_blank.",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "option": { "type": "string" },
                                    "correct": { "type": "boolean" }
                                },
                                "required": ["option", "correct"]
                            }
                        },
                        "correct_answer": {
                            "type": "string",
                            "description": "The canonical correct answer, matching one of the options where options exist."
                        },
                        "points": { "type": "integer" }
                    },
                    "required": ["question", "type", "correct_answer"]
                }
            }
        },
        "required": ["questions"]
    })
}

fn build_messages(request: &GenerationRequest) -> Vec<ChatCompletionRequestMessage> {
    let mut constraints = String::new();
    if let Some(category) = &request.category {
        constraints.push_str(&format!("\n- Category: {category}"));
    }
    if let Some(difficulty) = &request.difficulty {
        constraints.push_str(&format!("\n- Difficulty: {difficulty}"));
    }

    vec![
        ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
            content: ChatCompletionRequestSystemMessageContent::Text(
                "You write questions for live pub trivia events. Every question must be \
                 factually correct, unambiguous, and answerable without external context. \
                 Never include the answer in the question text. Mix question types unless \
                 the topic clearly favours one. For multiple_choice provide 2-5 options \
                 with exactly one marked correct; for true_false the correct_answer is \
                 'true' or 'false'."
                    .to_string(),
            ),
            name: None,
        }),
        ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(format!(
                "Write {count} trivia questions about: {topic}{constraints}",
                count = request.count,
                topic = request.topic,
            )),
            name: None,
        }),
    ]
}

pub async fn generate_questions(
    settings: &OpenAiSettings,
    request: &GenerationRequest,
) -> Result<Vec<QuestionDraft>, QuestionGenError> {
    let mut config = OpenAIConfig::new().with_api_key(settings.api_key.clone());
    if let Some(api_base) = &settings.api_base {
        config = config.with_api_base(api_base.clone());
    }
    let client = Client::with_config(config);

    let chat_request = CreateChatCompletionRequestArgs::default()
        .model(settings.model.clone())
        .messages(build_messages(request))
        .tools(vec![ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: TOOL_NAME.to_string(),
                description: Some("Submit the drafted trivia questions.".to_string()),
                parameters: Some(tool_parameters()),
                strict: None,
            },
        }])
        .tool_choice(ChatCompletionToolChoiceOption::Named(ChatCompletionNamedToolChoice {
            r#type: ChatCompletionToolType::Function,
            function: FunctionName {
                name: TOOL_NAME.to_string(),
            },
        }))
        .build()?;

    let response = tokio::time::timeout(TOTAL_TIMEOUT, client.chat().create(chat_request))
        .await
        .map_err(|_| QuestionGenError::Timeout)??;

    if let Some(usage) = &response.usage {
        tracing::debug!(total_tokens = usage.total_tokens, "question generation usage");
    }

    let first = response
        .choices
        .into_iter()
        .next()
        .ok_or(QuestionGenError::EmptyResponse)?;

    let tool_call = first
        .message
        .tool_calls
        .and_then(|calls| calls.into_iter().next())
        .ok_or(QuestionGenError::UnexpectedResponseFormat)?;

    if tool_call.function.name != TOOL_NAME {
        return Err(QuestionGenError::UnexpectedResponseFormat);
    }

    let batch: QuestionBatch = serde_json::from_str(&tool_call.function.arguments)?;
    tracing::info!(drafted = batch.questions.len(), topic = %request.topic, "drafted questions");
    Ok(batch.questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_parameters_are_valid_schema() {
        let params = tool_parameters();
        assert_eq!(params["type"], "object");
        assert_eq!(params["required"][0], "questions");
    }

    #[test]
    fn test_parse_tool_arguments() {
        let arguments = r#"{
            "questions": [
                {
                    "question": "Which planet has the most moons?",
                    "type": "multiple_choice",
                    "options": [
                        {"option": "Saturn", "correct": true},
                        {"option": "Jupiter", "correct": false}
                    ],
                    "correct_answer": "Saturn",
                    "points": 15
                },
                {
                    "question": "The Sahara is the largest desert on Earth.",
                    "type": "true_false",
                    "correct_answer": "false"
                }
            ]
        }"#;
        let batch: QuestionBatch = serde_json::from_str(arguments).unwrap();
        assert_eq!(batch.questions.len(), 2);
        assert_eq!(batch.questions[0].points, 15);
        // Missing points falls back to the default.
        assert_eq!(batch.questions[1].points, 10);
        assert!(batch.questions[1].options.is_empty());
    }
}
