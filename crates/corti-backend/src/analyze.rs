//! The AI analysis upload: a REST endpoint, not GraphQL, because it takes a
//! multipart image body.

use reqwest::multipart::{Form, Part};
use tracing::info;

use corti_assessment::AnalyzedThresholds;

use crate::client::PortalClient;
use crate::error::ApiError;

impl PortalClient {
    /// Upload an audiogram image for AI reading. The response carries per-ear
    /// partial threshold maps; bands the model could not read come back null
    /// or absent.
    pub async fn analyze_audiogram(
        &self,
        image: Vec<u8>,
        filename: String,
    ) -> Result<AnalyzedThresholds, ApiError> {
        let token = self.bearer_token().await?;
        let form = Form::new().part("image", Part::bytes(image).file_name(filename));

        let resp = self
            .http
            .post(self.rest_url("/api/v1/analyze_audiogram"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        self.check_status(resp.status()).await?;

        let analyzed: AnalyzedThresholds = resp.json().await?;
        info!("audiogram image analyzed");
        Ok(analyzed)
    }
}
