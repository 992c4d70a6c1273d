//! Per-account listings: stored datasets and past analyses.

use async_trait::async_trait;

use super::types::{AnalysisReport, Dataset};
use crate::http::{HttpClient, HttpError};

/// Read access to the account's stored data. A trait so command handlers
/// can be tested without a server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserData: Send + Sync {
    async fn datasets(&self) -> Result<Vec<Dataset>, HttpError>;
    async fn datasets_page(&self, offset: u64, limit: u64) -> Result<Vec<Dataset>, HttpError>;
    async fn analyses(&self) -> Result<Vec<AnalysisReport>, HttpError>;
    async fn analyses_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<AnalysisReport>, HttpError>;
}

pub struct UserApi {
    http: HttpClient,
}

impl UserApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl UserData for UserApi {
    #[tracing::instrument(skip(self))]
    async fn datasets(&self) -> Result<Vec<Dataset>, HttpError> {
        self.http.get_json("/user/datasets").await
    }

    #[tracing::instrument(skip(self))]
    async fn datasets_page(&self, offset: u64, limit: u64) -> Result<Vec<Dataset>, HttpError> {
        self.http
            .get_json(&format!("/user/datasets?offset={}&limit={}", offset, limit))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn analyses(&self) -> Result<Vec<AnalysisReport>, HttpError> {
        self.http.get_json("/user/analysis").await
    }

    #[tracing::instrument(skip(self))]
    async fn analyses_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<AnalysisReport>, HttpError> {
        self.http
            .get_json(&format!("/user/analysis?offset={}&limit={}", offset, limit))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn user_api_for(server: &mockito::Server) -> UserApi {
        UserApi::new(HttpClient::new(ApiConfig::new(&server.url())).unwrap())
    }

    #[tokio::test]
    async fn test_datasets_empty_array_is_empty_vec() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/user/datasets")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let api = user_api_for(&server);
        let datasets = api.datasets().await.unwrap();

        mock.assert_async().await;
        assert!(datasets.is_empty());
    }

    #[tokio::test]
    async fn test_datasets_page_sends_offset_and_limit() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/user/datasets?offset=20&limit=10")
            .with_status(200)
            .with_body(r#"[{"id": "d21", "name": "page3"}]"#)
            .create_async()
            .await;

        let api = user_api_for(&server);
        let datasets = api.datasets_page(20, 10).await.unwrap();

        mock.assert_async().await;
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].id, "d21");
    }

    #[tokio::test]
    async fn test_analyses_listing() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/user/analysis")
            .with_status(200)
            .with_body(r#"[{"id": "an1", "file_name": "sales.csv"}]"#)
            .create_async()
            .await;

        let api = user_api_for(&server);
        let analyses = api.analyses().await.unwrap();

        mock.assert_async().await;
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].file_name, Some("sales.csv".to_string()));
    }
}
