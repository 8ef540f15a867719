use log::debug;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::types::{Branch, MergeRequest, Pipeline, User};
use crate::config::BranchSpec;
use crate::error::{GlbarError, Result};

/// How many recent pipelines to fetch per ref by default.
pub const DEFAULT_PIPELINE_COUNT: usize = 3;

/// Minimal authenticated client for the GitLab REST API v4.
///
/// Only GETs, one request at a time. Connection-level failures map to
/// `GlbarError::Transport` and HTTP 404 to `GlbarError::NotFound` so the
/// renderer can recover from them; any other non-2xx status is fatal.
pub struct GitLabClient {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl GitLabClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("glbar/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GlbarError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| GlbarError::Config(format!("Invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            token: token.to_string(),
        })
    }

    /// GET an API v4 resource and deserialize the JSON body.
    ///
    /// Every element of `path` becomes exactly one URL segment, so a
    /// project reference like `group/project` is percent-encoded into a
    /// single `group%2Fproject` segment.
    async fn get_json<T>(&self, path: &[&str], query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                GlbarError::Config(format!("Base URL '{}' cannot have segments", self.base_url))
            })?
            .pop_if_empty()
            .extend(["api", "v4"].iter().chain(path));

        debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header("PRIVATE-TOKEN", &self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GlbarError::Transport(e)
                } else {
                    GlbarError::Network(e)
                }
            })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GlbarError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(GlbarError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// The most recent pipeline that already ran to completion, if any.
    pub async fn latest_finished_pipeline(
        &self,
        project: &str,
        branch: &str,
    ) -> Result<Option<Pipeline>> {
        let query = [
            ("ref", branch.to_string()),
            ("scope", "finished".to_string()),
            ("per_page", "1".to_string()),
        ];
        let pipelines: Vec<Pipeline> = self
            .get_json(&["projects", project, "pipelines"], &query)
            .await?;
        Ok(pipelines.into_iter().next())
    }

    /// The most recent pipelines for a branch spec.
    ///
    /// `!<iid>` specs resolve through the merge-request refs; everything
    /// else is treated as a literal ref.
    pub async fn latest_pipelines(
        &self,
        project: &str,
        spec: &BranchSpec,
        count: usize,
    ) -> Result<Vec<Pipeline>> {
        match spec {
            BranchSpec::Ref(name) => self.latest_ref_pipelines(project, name, count).await,
            BranchSpec::MergeRequest(iid) => {
                self.latest_merge_request_pipelines(project, *iid, count)
                    .await
            }
        }
    }

    /// The most recent pipelines for a literal ref, server-ordered
    /// most-recent-first.
    pub async fn latest_ref_pipelines(
        &self,
        project: &str,
        ref_: &str,
        count: usize,
    ) -> Result<Vec<Pipeline>> {
        let query = [("ref", ref_.to_string()), ("per_page", count.to_string())];
        self.get_json(&["projects", project, "pipelines"], &query)
            .await
    }

    /// The most recent pipelines of a merge request.
    ///
    /// Merge-train pipelines live under a `.../train` ref and are not
    /// returned by a head-ref query, so both refs are fetched and the
    /// union re-sorted newest first. The sort is stable: on equal
    /// timestamps, head-ref pipelines come before train-ref ones.
    pub async fn latest_merge_request_pipelines(
        &self,
        project: &str,
        iid: u64,
        count: usize,
    ) -> Result<Vec<Pipeline>> {
        let head_ref = format!("refs/merge-requests/{iid}/head");
        let train_ref = format!("refs/merge-requests/{iid}/train");

        let mut pipelines = self.latest_ref_pipelines(project, &head_ref, count).await?;
        pipelines.extend(self.latest_ref_pipelines(project, &train_ref, count).await?);
        pipelines.sort_by_key(|p| std::cmp::Reverse(p.created_at));

        Ok(pipelines)
    }

    /// A single pipeline by its id.
    pub async fn pipeline(&self, project: &str, pipeline_id: u64) -> Result<Pipeline> {
        let id = pipeline_id.to_string();
        self.get_json(&["projects", project, "pipelines", &id], &[])
            .await
    }

    /// Open merge requests whose source branch is `branch`.
    pub async fn merge_requests_for_branch(
        &self,
        project: &str,
        branch: &str,
    ) -> Result<Vec<MergeRequest>> {
        let query = [
            ("state", "opened".to_string()),
            ("source_branch", branch.to_string()),
        ];
        self.get_json(&["projects", project, "merge_requests"], &query)
            .await
    }

    /// Open merge requests assigned to `username`.
    pub async fn my_open_merge_requests(
        &self,
        project: &str,
        username: &str,
    ) -> Result<Vec<MergeRequest>> {
        let query = [
            ("state", "opened".to_string()),
            ("assignee_username", username.to_string()),
        ];
        self.get_json(&["projects", project, "merge_requests"], &query)
            .await
    }

    /// Username of the token's owner.
    pub async fn current_username(&self) -> Result<String> {
        let user: User = self.get_json(&["user"], &[]).await?;
        Ok(user.username)
    }

    /// Repository branches that have not been merged yet.
    pub async fn non_merged_branches(&self, project: &str) -> Result<Vec<Branch>> {
        let branches: Vec<Branch> = self
            .get_json(&["projects", project, "repository", "branches"], &[])
            .await?;
        Ok(branches.into_iter().filter(|b| !b.merged).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::types::PipelineStatus;
    use mockito::{Matcher, Server, ServerGuard};

    fn client_for(server: &ServerGuard) -> GitLabClient {
        GitLabClient::new(&server.url(), "test-token").unwrap()
    }

    fn pipeline_json(id: u64, status: &str, ref_: &str, created_at: &str) -> String {
        format!(
            r#"{{"id": {id}, "status": "{status}", "ref": "{ref_}",
                "web_url": "https://gitlab.example.com/g/p/-/pipelines/{id}",
                "created_at": "{created_at}"}}"#
        )
    }

    #[tokio::test]
    async fn fetches_latest_finished_pipeline() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v4/projects/group%2Fproject/pipelines")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ref".into(), "main".into()),
                Matcher::UrlEncoded("scope".into(), "finished".into()),
                Matcher::UrlEncoded("per_page".into(), "1".into()),
            ]))
            .match_header("accept", "application/json")
            .match_header("private-token", "test-token")
            .with_body(format!(
                "[{}]",
                pipeline_json(100, "success", "main", "2024-01-01T00:00:00.000Z")
            ))
            .create_async()
            .await;

        let client = client_for(&server);
        let pipeline = client
            .latest_finished_pipeline("group/project", "main")
            .await
            .unwrap()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(pipeline.id, 100);
        assert_eq!(pipeline.status, PipelineStatus::Success);
    }

    #[tokio::test]
    async fn latest_finished_pipeline_is_none_when_branch_has_no_runs() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v4/projects/g%2Fp/pipelines")
            .match_query(Matcher::Any)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let pipeline = client.latest_finished_pipeline("g/p", "main").await.unwrap();
        assert!(pipeline.is_none());
    }

    #[tokio::test]
    async fn branch_spec_dispatch_routes_literal_refs() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v4/projects/g%2Fp/pipelines")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ref".into(), "develop".into()),
                Matcher::UrlEncoded("per_page".into(), "3".into()),
            ]))
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let spec = BranchSpec::Ref("develop".to_string());
        client.latest_pipelines("g/p", &spec, 3).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn branch_spec_dispatch_routes_merge_requests() {
        let mut server = Server::new_async().await;
        let head = server
            .mock("GET", "/api/v4/projects/g%2Fp/pipelines")
            .match_query(Matcher::UrlEncoded(
                "ref".into(),
                "refs/merge-requests/42/head".into(),
            ))
            .with_body("[]")
            .create_async()
            .await;
        let train = server
            .mock("GET", "/api/v4/projects/g%2Fp/pipelines")
            .match_query(Matcher::UrlEncoded(
                "ref".into(),
                "refs/merge-requests/42/train".into(),
            ))
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let spec = BranchSpec::MergeRequest(42);
        client.latest_pipelines("g/p", &spec, 3).await.unwrap();

        head.assert_async().await;
        train.assert_async().await;
    }

    #[tokio::test]
    async fn merge_request_pipelines_are_merged_and_sorted_newest_first() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v4/projects/g%2Fp/pipelines")
            .match_query(Matcher::UrlEncoded(
                "ref".into(),
                "refs/merge-requests/7/head".into(),
            ))
            .with_body(format!(
                "[{}, {}]",
                pipeline_json(
                    10,
                    "success",
                    "refs/merge-requests/7/head",
                    "2024-03-01T10:00:00.000Z"
                ),
                pipeline_json(
                    8,
                    "failed",
                    "refs/merge-requests/7/head",
                    "2024-03-01T08:00:00.000Z"
                ),
            ))
            .create_async()
            .await;
        server
            .mock("GET", "/api/v4/projects/g%2Fp/pipelines")
            .match_query(Matcher::UrlEncoded(
                "ref".into(),
                "refs/merge-requests/7/train".into(),
            ))
            .with_body(format!(
                "[{}, {}]",
                pipeline_json(
                    11,
                    "running",
                    "refs/merge-requests/7/train",
                    "2024-03-01T10:00:00.000Z"
                ),
                pipeline_json(
                    9,
                    "success",
                    "refs/merge-requests/7/train",
                    "2024-03-01T09:00:00.000Z"
                ),
            ))
            .create_async()
            .await;

        let client = client_for(&server);
        let pipelines = client
            .latest_merge_request_pipelines("g/p", 7, 3)
            .await
            .unwrap();

        // 10 and 11 tie on timestamp; the head-ref pipeline stays first.
        let ids: Vec<u64> = pipelines.iter().map(|p| p.id).collect();
        assert_eq!(ids, [10, 11, 9, 8]);
    }

    #[tokio::test]
    async fn fetches_single_pipeline_by_id() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v4/projects/g%2Fp/pipelines/123")
            .with_body(pipeline_json(
                123,
                "canceled",
                "main",
                "2024-02-02T12:30:45.000Z",
            ))
            .create_async()
            .await;

        let client = client_for(&server);
        let pipeline = client.pipeline("g/p", 123).await.unwrap();
        assert_eq!(pipeline.id, 123);
        assert_eq!(pipeline.status, PipelineStatus::Canceled);
    }

    #[tokio::test]
    async fn lists_open_merge_requests_for_branch() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v4/projects/g%2Fp/merge_requests")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "opened".into()),
                Matcher::UrlEncoded("source_branch".into(), "feature-x".into()),
            ]))
            .with_body(
                r#"[{"iid": 5, "title": "Add feature X", "source_branch": "feature-x",
                     "web_url": "https://gitlab.example.com/g/p/-/merge_requests/5"}]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let mrs = client
            .merge_requests_for_branch("g/p", "feature-x")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(mrs.len(), 1);
        assert_eq!(mrs[0].iid, 5);
        assert_eq!(mrs[0].title, "Add feature X");
    }

    #[tokio::test]
    async fn lists_merge_requests_assigned_to_user() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v4/projects/g%2Fp/merge_requests")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "opened".into()),
                Matcher::UrlEncoded("assignee_username".into(), "yaniv".into()),
            ]))
            .with_body(
                r#"[{"iid": 9, "title": "Fix", "source_branch": "fix-things",
                     "web_url": "https://gitlab.example.com/g/p/-/merge_requests/9"}]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let mrs = client.my_open_merge_requests("g/p", "yaniv").await.unwrap();

        mock.assert_async().await;
        assert_eq!(mrs[0].source_branch, "fix-things");
    }

    #[tokio::test]
    async fn resolves_current_username() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v4/user")
            .with_body(r#"{"username": "yaniv"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        assert_eq!(client.current_username().await.unwrap(), "yaniv");
    }

    #[tokio::test]
    async fn filters_out_merged_branches() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v4/projects/g%2Fp/repository/branches")
            .with_body(
                r#"[{"name": "main", "merged": false},
                    {"name": "old-feature", "merged": true},
                    {"name": "wip", "merged": false}]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let branches = client.non_merged_branches("g/p").await.unwrap();

        let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["main", "wip"]);
    }

    #[tokio::test]
    async fn http_404_maps_to_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v4/projects/g%2Fp/pipelines")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.latest_ref_pipelines("g/p", "gone", 3).await;
        assert!(matches!(result, Err(GlbarError::NotFound(_))));
    }

    #[tokio::test]
    async fn other_http_errors_are_fatal() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v4/projects/g%2Fp/pipelines")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.latest_ref_pipelines("g/p", "main", 3).await;
        match result {
            Err(GlbarError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unresolvable_host_maps_to_transport() {
        // .invalid never resolves, so this fails at the connect stage.
        let client = GitLabClient::new("http://glbar.invalid", "test-token").unwrap();
        let result = client.latest_ref_pipelines("g/p", "main", 3).await;
        assert!(matches!(result, Err(GlbarError::Transport(_))));
    }
}
