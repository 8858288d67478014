//! Secondary predictor: local/regional AI service.
//!
//! Posts `{junction_id, timestamp}` to `{base_url}/predict`.

use serde::Serialize;

use super::types::{
    decode_prediction, BoxFuture, PredictionRequest, Predictor, PredictorError, SignalPrediction,
};
use crate::http::AsyncHttpClient;

/// Default base URL of the local AI service.
pub const DEFAULT_SECONDARY_URL: &str = "http://localhost:8000";

#[derive(Serialize)]
struct SecondaryRequestBody<'a> {
    junction_id: &'a str,
    timestamp: f64,
}

/// Local AI service predictor.
pub struct SecondaryPredictor<H: AsyncHttpClient> {
    http: H,
    predict_url: String,
}

impl<H: AsyncHttpClient> SecondaryPredictor<H> {
    pub fn new(http: H, base_url: &str) -> Self {
        let predict_url = format!("{}/predict", base_url.trim_end_matches('/'));
        Self { http, predict_url }
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    async fn invoke(&self, request: &PredictionRequest) -> Result<SignalPrediction, PredictorError> {
        let body = serde_json::to_string(&SecondaryRequestBody {
            junction_id: &request.junction_id,
            timestamp: request.timestamp,
        })
        .map_err(|e| PredictorError::InvalidResponse(e.to_string()))?;

        let bytes = self.http.post_json(&self.predict_url, &body).await?;
        decode_prediction(&bytes)
    }
}

impl<H: AsyncHttpClient> Predictor for SecondaryPredictor<H> {
    fn predict<'a>(
        &'a self,
        request: &'a PredictionRequest,
    ) -> BoxFuture<'a, Result<SignalPrediction, PredictorError>> {
        Box::pin(self.invoke(request))
    }

    fn name(&self) -> &str {
        "local-ai-service"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::SignalPhase;
    use crate::geo::GeoPoint;
    use crate::http::tests::MockAsyncHttpClient;

    #[test]
    fn test_predict_url_trims_trailing_slash() {
        let predictor = SecondaryPredictor::new(MockAsyncHttpClient::ok("{}"), "http://ai:8000/");
        assert_eq!(predictor.predict_url(), "http://ai:8000/predict");
    }

    #[tokio::test]
    async fn test_secondary_sends_junction_and_timestamp() {
        let mock = MockAsyncHttpClient::ok(
            r#"{"junction_id": "J002", "current_status": "AMBER", "seconds_to_change": 3.5, "cycle_time": 60}"#,
        );
        let predictor = SecondaryPredictor::new(mock.clone(), DEFAULT_SECONDARY_URL);
        let request = PredictionRequest {
            junction_id: "J002".to_string(),
            position: GeoPoint::new(0.0, 0.0),
            timestamp: 1234.0,
        };

        let p = predictor.predict(&request).await.unwrap();
        assert_eq!(p.phase, SignalPhase::Amber);
        assert_eq!(p.seconds_to_change, 3.5);

        let recorded = mock.recorded();
        assert_eq!(recorded[0].0, "http://localhost:8000/predict");
        let body: serde_json::Value = serde_json::from_str(&recorded[0].1).unwrap();
        assert_eq!(body["junction_id"], "J002");
        assert_eq!(body["timestamp"], 1234.0);
    }
}
