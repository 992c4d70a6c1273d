//! Dataset generation endpoints. All generation logic runs on the backend;
//! each method is one request mapping a spec to a [`Dataset`].

use super::types::{Dataset, FormSpec, PromptSpec, RuleSpec};
use crate::http::{HttpClient, HttpError};

pub struct Generator {
    http: HttpClient,
}

impl Generator {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(skip(self, spec))]
    pub async fn from_form(&self, spec: &FormSpec) -> Result<Dataset, HttpError> {
        self.http.post_json("/generator/form", spec).await
    }

    #[tracing::instrument(skip(self, spec))]
    pub async fn from_rules(&self, spec: &RuleSpec) -> Result<Dataset, HttpError> {
        self.http.post_json("/generator/rule", spec).await
    }

    #[tracing::instrument(skip(self, spec))]
    pub async fn from_prompt(&self, spec: &PromptSpec) -> Result<Dataset, HttpError> {
        self.http.post_json("/generator/prompt", spec).await
    }
}
