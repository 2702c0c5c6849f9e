use crate::config::{Config, GenerationParams};
use anyhow::{anyhow, ensure};
use domain::providers::{EmbeddingProvider, Generator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::types::Result;

const API_VERSION: &str = "2024-05-01";
const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

#[derive(Deserialize)]
struct IamTokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model_id: &'a str,
    project_id: &'a str,
    inputs: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    results: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model_id: &'a str,
    project_id: &'a str,
    input: &'a str,
    parameters: &'a GenerationParams,
}

#[derive(Deserialize)]
struct GenerationResponse {
    results: Vec<GenerationData>,
}

#[derive(Deserialize)]
struct GenerationData {
    generated_text: String,
}

/// HTTP client for the watsonx.ai embeddings and text-generation endpoints.
/// The API key is exchanged for an IAM bearer token once, at construction.
#[derive(Clone, Debug)]
pub struct WatsonxClient {
    client: Client,
    base_url: String,
    project_id: String,
    embedding_model: String,
    generation_model: String,
    params: GenerationParams,
    access_token: String,
}

impl WatsonxClient {
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::new();
        let access_token = fetch_iam_token(&client, &config.iam_url, &config.api_key).await?;
        Ok(Self {
            client,
            base_url: config.watsonx_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            embedding_model: config.embedding_model.clone(),
            generation_model: config.generation_model.clone(),
            params: config.generation.clone(),
            access_token,
        })
    }

    /// Embeds a batch of texts in one request; the service returns one
    /// vector per input, in input order.
    pub async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>> {
        let url = format!("{}/ml/v1/text/embeddings?version={}", self.base_url, API_VERSION);
        let request = EmbeddingRequest {
            model_id: &self.embedding_model,
            project_id: &self.project_id,
            inputs,
        };
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(anyhow!("watsonx embeddings request failed ({status}): {text}"));
        }
        let parsed: EmbeddingResponse = serde_json::from_str(&text)?;
        ensure!(
            parsed.results.len() == inputs.len(),
            "embedding service returned {} vectors for {} inputs",
            parsed.results.len(),
            inputs.len()
        );
        Ok(parsed.results.into_iter().map(|r| r.embedding).collect())
    }

    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/ml/v1/text/generation?version={}", self.base_url, API_VERSION);
        let request = GenerationRequest {
            model_id: &self.generation_model,
            project_id: &self.project_id,
            input: prompt,
            parameters: &self.params,
        };
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(anyhow!("watsonx generation request failed ({status}): {text}"));
        }
        let parsed: GenerationResponse = serde_json::from_str(&text)?;
        parsed
            .results
            .into_iter()
            .next()
            .map(|r| r.generated_text)
            .ok_or_else(|| anyhow!("generation service returned no results"))
    }
}

async fn fetch_iam_token(client: &Client, iam_url: &str, api_key: &str) -> Result<String> {
    let response = client
        .post(iam_url)
        .form(&[("grant_type", IAM_GRANT_TYPE), ("apikey", api_key)])
        .send()
        .await?;
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(anyhow!("IAM token exchange failed ({status}): {text}"));
    }
    let parsed: IamTokenResponse = serde_json::from_str(&text)?;
    Ok(parsed.access_token)
}

impl EmbeddingProvider for WatsonxClient {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.embed_batch(texts).await
    }
}

impl Generator for WatsonxClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_text(prompt).await
    }
}
