pub mod models;

use common::{Config, PostError, PostResult};
use models::{CreateDiscussionData, GraphQlResponse, RepositoryData};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;

const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = "daily-programming-insight";

const REPOSITORY_ID_QUERY: &str = r#"
    query($owner: String!, $name: String!) {
      repository(owner: $owner, name: $name) {
        id
      }
    }
"#;

const CREATE_DISCUSSION_MUTATION: &str = r#"
    mutation($input: CreateDiscussionInput!) {
      createDiscussion(input: $input) {
        discussion {
          url
        }
      }
    }
"#;

pub struct DiscussionPublisher {
    http_client: Client,
    token: String,
    owner: String,
    repo: String,
    category_id: String,
}

impl DiscussionPublisher {
    pub fn new(config: &Config) -> PostResult<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PostError::HttpRequest)?;

        Ok(Self {
            http_client,
            token: config.github_token.clone(),
            owner: config.repo_owner.clone(),
            repo: config.repo_name.clone(),
            category_id: config.discussion_category_id.clone(),
        })
    }

    async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> PostResult<T> {
        let payload = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .http_client
            .post(GITHUB_GRAPHQL_ENDPOINT)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(PostError::GraphQl(format!(
                "request failed: {} - {}",
                status, text
            )));
        }

        let envelope: GraphQlResponse<T> = response.json().await?;
        unwrap_graphql_data(envelope)
    }

    /// Retrieve the repository node ID required for creating a discussion.
    pub async fn fetch_repository_id(&self) -> PostResult<String> {
        info!("Resolving repository ID for {}/{}", self.owner, self.repo);

        let data: RepositoryData = self
            .graphql(
                REPOSITORY_ID_QUERY,
                serde_json::json!({ "owner": self.owner, "name": self.repo }),
            )
            .await?;

        repository_id_from(data)
    }

    /// Create the discussion under the configured category and return its URL.
    pub async fn create_discussion(
        &self,
        repository_id: &str,
        title: &str,
        body: &str,
    ) -> PostResult<String> {
        info!("Creating discussion \"{}\"", title);

        let variables = serde_json::json!({
            "input": {
                "repositoryId": repository_id,
                "categoryId": self.category_id,
                "title": title,
                "body": body,
            }
        });

        let data: CreateDiscussionData = self
            .graphql(CREATE_DISCUSSION_MUTATION, variables)
            .await?;

        discussion_url_from(data)
    }
}

/// Reject GraphQL-level errors, then hand back the `data` object.
pub fn unwrap_graphql_data<T>(envelope: GraphQlResponse<T>) -> PostResult<T> {
    if !envelope.errors.is_empty() {
        let detail = envelope
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(PostError::GraphQl(detail));
    }

    envelope.data.ok_or(PostError::MissingField("data"))
}

pub fn repository_id_from(data: RepositoryData) -> PostResult<String> {
    let repository = data
        .repository
        .ok_or(PostError::MissingField("repository"))?;

    match repository.id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(PostError::MissingField("repository.id")),
    }
}

pub fn discussion_url_from(data: CreateDiscussionData) -> PostResult<String> {
    let discussion = data
        .create_discussion
        .ok_or(PostError::MissingField("createDiscussion"))?
        .discussion
        .ok_or(PostError::MissingField("createDiscussion.discussion"))?;

    match discussion.url {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(PostError::MissingField("createDiscussion.discussion.url")),
    }
}
