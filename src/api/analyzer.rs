//! File analysis endpoint: multipart upload of a data file, answered with
//! an [`AnalysisReport`].

use super::types::AnalysisReport;
use crate::http::{FileUpload, HttpClient, HttpError, RequestOptions};

pub struct Analyzer {
    http: HttpClient,
}

impl Analyzer {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Uploads a file for analysis. Extra fields ride along as text parts
    /// of the same multipart form.
    #[tracing::instrument(skip(self, file, fields))]
    pub async fn upload(
        &self,
        file: FileUpload,
        fields: &[(&str, &str)],
    ) -> Result<AnalysisReport, HttpError> {
        self.http.upload("/analyzer/upload", file, fields).await
    }

    /// Same as [`Analyzer::upload`] with a per-call timeout or header
    /// override.
    pub async fn upload_with(
        &self,
        file: FileUpload,
        fields: &[(&str, &str)],
        opts: &RequestOptions,
    ) -> Result<AnalysisReport, HttpError> {
        self.http
            .upload_with("/analyzer/upload", file, fields, opts)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn analyzer_for(server: &mockito::Server) -> Analyzer {
        Analyzer::new(HttpClient::new(ApiConfig::new(&server.url())).unwrap())
    }

    #[tokio::test]
    async fn test_upload_returns_report() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/analyzer/upload")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::Regex(r#"name="file""#.to_string()),
                mockito::Matcher::Regex(r#"filename="sales.csv""#.to_string()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
                    "id": "an1",
                    "file_name": "sales.csv",
                    "columns": [
                        {"name": "price", "dtype": "float", "null_count": 0},
                        {"name": "region", "dtype": "str", "null_count": 3, "unique_count": 4}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let analyzer = analyzer_for(&server);
        let report = analyzer
            .upload(FileUpload::new("sales.csv", b"price,region\n1.0,eu\n".to_vec()), &[])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(report.id, "an1");
        assert_eq!(report.columns.len(), 2);
        assert_eq!(report.columns[1].unique_count, Some(4));
    }

    #[tokio::test]
    async fn test_upload_unsupported_format() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/analyzer/upload")
            .with_status(415)
            .with_body(r#"{"message":"Unsupported file type"}"#)
            .create_async()
            .await;

        let analyzer = analyzer_for(&server);
        let err = analyzer
            .upload(FileUpload::new("notes.docx", vec![1, 2, 3]), &[])
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.status, 415);
        assert_eq!(
            err.detail,
            Some(serde_json::json!({"message": "Unsupported file type"}))
        );
    }
}
