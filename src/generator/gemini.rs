use base64::{
    engine::general_purpose::STANDARD,
    Engine as _,
};
use futures::future::BoxFuture;
use reqwest::Client;
use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};

use super::{
    prompt::build_prompt,
    GenerationRequest,
    PracticeGenerator,
    ReadingPassage,
    VisualQuiz,
    WritingChallengeSet,
};
use crate::core::ManabiError;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const TEXT_MODEL: &str = "gemini-2.0-flash";
const IMAGE_MODEL: &str = "imagen-3.0-generate-002";

/// Client for the hosted Gemini text and image endpoints. Cheap to clone;
/// the underlying reqwest client is shared.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

#[derive(Serialize)]
struct PredictBody {
    instances: Vec<ImageInstance>,
    parameters: ImageParameters,
}

#[derive(Serialize)]
struct ImageInstance {
    prompt: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageParameters {
    sample_count: u32,
}

#[derive(Deserialize)]
struct PredictResponse {
    predictions: Option<Vec<Prediction>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self { http: Client::new(), api_key }
    }

    /// Sends one JSON-mode generation request and deserializes the first
    /// candidate's text into `T`. A missing candidate or a payload that does
    /// not match the expected shape is a generation failure.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: String,
    ) -> Result<T, ManabiError> {
        let body = GenerateContentBody {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let url = format!("{}/{}:generateContent", API_BASE, TEXT_MODEL);
        let response: GenerateContentResponse = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .candidates
            .and_then(|mut c| c.pop())
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| ManabiError::Generation("empty generator response".to_string()))?;

        serde_json::from_str(&text)
            .map_err(|e| ManabiError::Generation(format!("malformed generator payload: {}", e)))
    }

    /// Second step of the visual mode: turn the item's image description
    /// into raw image bytes.
    pub async fn generate_image(&self, description: String) -> Result<Vec<u8>, ManabiError> {
        let body = PredictBody {
            instances: vec![ImageInstance { prompt: description }],
            parameters: ImageParameters { sample_count: 1 },
        };

        let url = format!("{}/{}:predict", API_BASE, IMAGE_MODEL);
        let response: PredictResponse = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let encoded = response
            .predictions
            .and_then(|mut p| p.pop())
            .map(|p| p.bytes_base64_encoded)
            .ok_or_else(|| ManabiError::Generation("empty image response".to_string()))?;

        STANDARD
            .decode(encoded)
            .map_err(|e| ManabiError::Generation(format!("undecodable image payload: {}", e)))
    }
}

impl PracticeGenerator<ReadingPassage> for GeminiClient {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> BoxFuture<'static, Result<ReadingPassage, ManabiError>> {
        let client = self.clone();
        Box::pin(async move { client.generate_json(build_prompt(&request)).await })
    }
}

impl PracticeGenerator<WritingChallengeSet> for GeminiClient {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> BoxFuture<'static, Result<WritingChallengeSet, ManabiError>> {
        let client = self.clone();
        Box::pin(async move { client.generate_json(build_prompt(&request)).await })
    }
}

impl PracticeGenerator<VisualQuiz> for GeminiClient {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> BoxFuture<'static, Result<VisualQuiz, ManabiError>> {
        let client = self.clone();
        // Either step failing surfaces as a single generation failure
        Box::pin(async move {
            let mut quiz: VisualQuiz = client.generate_json(build_prompt(&request)).await?;
            quiz.image = client.generate_image(quiz.image_description.clone()).await?;
            Ok(quiz)
        })
    }
}
