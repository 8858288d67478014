//! Primary predictor: remote inference endpoint.
//!
//! Posts `{junctionId, lat, lng}` and expects
//! `{current_status, seconds_to_change}` back. When no endpoint is
//! configured the predictor reports [`PredictorError::NotProvisioned`]
//! without touching the network.

use serde::Serialize;

use super::types::{
    decode_prediction, BoxFuture, PredictionRequest, Predictor, PredictorError, SignalPrediction,
};
use crate::http::AsyncHttpClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrimaryRequestBody<'a> {
    junction_id: &'a str,
    lat: f64,
    lng: f64,
}

/// Remote inference endpoint predictor.
pub struct PrimaryPredictor<H: AsyncHttpClient> {
    http: H,
    endpoint: Option<String>,
}

impl<H: AsyncHttpClient> PrimaryPredictor<H> {
    /// Creates a primary predictor.
    ///
    /// `endpoint` of `None` (or an empty string) means the endpoint has not
    /// been provisioned.
    pub fn new(http: H, endpoint: Option<String>) -> Self {
        let endpoint = endpoint.filter(|url| !url.trim().is_empty());
        Self { http, endpoint }
    }

    /// Whether an endpoint is configured.
    pub fn is_provisioned(&self) -> bool {
        self.endpoint.is_some()
    }

    async fn invoke(&self, request: &PredictionRequest) -> Result<SignalPrediction, PredictorError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(PredictorError::NotProvisioned)?;

        let body = serde_json::to_string(&PrimaryRequestBody {
            junction_id: &request.junction_id,
            lat: request.position.lat,
            lng: request.position.lng,
        })
        .map_err(|e| PredictorError::InvalidResponse(e.to_string()))?;

        let bytes = self.http.post_json(endpoint, &body).await?;
        decode_prediction(&bytes)
    }
}

impl<H: AsyncHttpClient> Predictor for PrimaryPredictor<H> {
    fn predict<'a>(
        &'a self,
        request: &'a PredictionRequest,
    ) -> BoxFuture<'a, Result<SignalPrediction, PredictorError>> {
        Box::pin(self.invoke(request))
    }

    fn name(&self) -> &str {
        "remote-inference"
    }
}
