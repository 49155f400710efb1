use anyhow::{bail, Result};
use std::env;

const DEFAULT_GROQ_MODEL: &str = "llama3-70b-8192";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub groq_api_key: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub discussion_category_id: String,
    pub groq_model: String,
    pub dry_run: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = require_env("GITHUB_TOKEN")?;
        let groq_api_key = require_env("GROQ_API_KEY")?;

        let repo_name_raw = require_env("REPO_NAME")?;
        let (repo_owner, repo_name) =
            resolve_repo_identity(env::var("REPO_OWNER").ok(), &repo_name_raw)?;

        let discussion_category_id = require_env("DISCUSSION_CATEGORY_ID")?;

        let groq_model = env::var("GROQ_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string());

        let dry_run = dry_run_enabled(env::var("DRY_RUN").ok().as_deref());

        Ok(Config {
            github_token,
            groq_api_key,
            repo_owner,
            repo_name,
            discussion_category_id,
            groq_model,
            dry_run,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("{} must be set", name),
    }
}

/// `REPO_NAME` may carry the owner as an "owner/name" slug; otherwise
/// `REPO_OWNER` has to be supplied separately.
fn resolve_repo_identity(owner: Option<String>, name_raw: &str) -> Result<(String, String)> {
    if let Some((slug_owner, slug_name)) = name_raw.split_once('/') {
        return Ok((slug_owner.to_string(), slug_name.to_string()));
    }

    match owner.filter(|v| !v.trim().is_empty()) {
        Some(owner) => Ok((owner, name_raw.to_string())),
        None => bail!("REPO_OWNER must be set when REPO_NAME does not include the owner"),
    }
}

fn dry_run_enabled(raw: Option<&str>) -> bool {
    raw.map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false)
}
