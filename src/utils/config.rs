use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub research: ResearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchConfig {
    /// Directory the research workers write their report artifacts into.
    pub research_dir: PathBuf,
    /// Worker invocation, whitespace-split into program and leading
    /// arguments. The question text is appended as one final argument.
    pub worker_command: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5001".to_string())
                    .parse()?,
            },
            research: ResearchConfig {
                research_dir: env::var("RESEARCH_DIR")
                    .unwrap_or_else(|_| "data/research".to_string())
                    .into(),
                worker_command: env::var("RESEARCH_WORKER")
                    .unwrap_or_else(|_| "research-worker".to_string()),
            },
        })
    }
}
