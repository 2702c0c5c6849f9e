use anyhow::{anyhow, ensure, Context};
use domain::clauses::{default_clauses, Clause};
use domain::models::ProjectInfo;
use dotenvy::dotenv;
use serde::Serialize;
use shared::types::Result;
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParams {
    pub decoding_method: String,
    pub min_new_tokens: u32,
    pub max_new_tokens: u32,
    pub stop_sequences: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub watsonx_url: String,
    pub iam_url: String,
    pub api_key: String,
    pub project_id: String,
    pub embedding_model: String,
    pub generation_model: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub top_k: usize,
    pub generation: GenerationParams,
}

impl Config {
    /// Loads service configuration from the environment (with `.env` support).
    /// Credentials have no defaults; a missing key fails here, before any
    /// network call is attempted.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        let api_key = env::var("WATSONX_API_KEY")
            .map_err(|_| anyhow!("WATSONX_API_KEY is not set; supply a watsonx.ai API key"))?;
        let project_id = env::var("WATSONX_PROJECT_ID")
            .map_err(|_| anyhow!("WATSONX_PROJECT_ID is not set; supply a watsonx.ai project id"))?;

        Ok(Self {
            watsonx_url: env_or("WATSONX_URL", "https://us-south.ml.cloud.ibm.com"),
            iam_url: env_or("WATSONX_IAM_URL", "https://iam.cloud.ibm.com/identity/token"),
            api_key,
            project_id,
            embedding_model: env_or("WATSONX_EMBEDDING_MODEL", "ibm/slate-30m-english-rtrvr"),
            generation_model: env_or("WATSONX_GENERATION_MODEL", "ibm/granite-13b-instruct-v2"),
            chunk_size: parse_env("CHUNK_SIZE", 1000)?,
            chunk_overlap: parse_env("CHUNK_OVERLAP", 0)?,
            top_k: parse_env("TOP_K", 4)?,
            generation: GenerationParams {
                decoding_method: env_or("DECODING_METHOD", "greedy"),
                min_new_tokens: parse_env("MIN_NEW_TOKENS", 1)?,
                max_new_tokens: parse_env("MAX_NEW_TOKENS", 100)?,
                stop_sequences: stop_sequences_from_env(),
            },
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

fn stop_sequences_from_env() -> Vec<String> {
    match env::var("STOP_SEQUENCES") {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        Err(_) => vec!["<|endoftext|>".to_string()],
    }
}

/// Clause list for this run: a JSON file of `{label, question}` pairs, or
/// the built-in DVC technical criteria when no file is given.
pub fn load_clauses(path: Option<&Path>) -> Result<Vec<Clause>> {
    let Some(path) = path else {
        return Ok(default_clauses());
    };
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read clause file {}", path.display()))?;
    let clauses: Vec<Clause> = serde_json::from_str(&data)
        .with_context(|| format!("clause file {} is not a JSON list of clauses", path.display()))?;
    ensure!(
        !clauses.is_empty(),
        "clause file {} contains no clauses",
        path.display()
    );
    Ok(clauses)
}

/// Project metadata for this run, falling back to the built-in sample.
pub fn load_project(path: Option<&Path>) -> Result<ProjectInfo> {
    let Some(path) = path else {
        return Ok(ProjectInfo::sample());
    };
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read project file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("project file {} is not valid project metadata", path.display()))
}
