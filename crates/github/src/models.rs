use serde::Deserialize;

/// Top-level GraphQL envelope; `errors` is checked before `data` is touched.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryData {
    pub repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryNode {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDiscussionData {
    #[serde(rename = "createDiscussion")]
    pub create_discussion: Option<CreateDiscussionNode>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDiscussionNode {
    pub discussion: Option<DiscussionNode>,
}

#[derive(Debug, Deserialize)]
pub struct DiscussionNode {
    #[serde(default)]
    pub url: Option<String>,
}
