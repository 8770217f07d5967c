use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::error::DeliveryError;
use crate::types::workout::WorkoutRecord;

/// One-shot JSON POST of workout records to a fixed endpoint. No retries.
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    client: Client,
    endpoint: Url,
}

impl DeliveryClient {
    pub fn new(endpoint: &str) -> Result<Self, DeliveryError> {
        let endpoint = Url::parse(endpoint).map_err(|err| DeliveryError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn deliver(&self, record: &WorkoutRecord) -> Result<(), DeliveryError> {
        let body = serde_json::to_vec(record)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status));
        }
        Ok(())
    }

    /// Delivers and logs the outcome. Failures stop here.
    pub async fn deliver_and_log(&self, record: &WorkoutRecord) -> bool {
        match self.deliver(record).await {
            Ok(()) => {
                tracing::info!(
                    workout_id = record.id(),
                    endpoint = %self.endpoint,
                    "Workout data sent successfully"
                );
                true
            }
            Err(err) => {
                tracing::error!(
                    workout_id = record.id(),
                    endpoint = %self.endpoint,
                    error = %err,
                    "Error sending workout data"
                );
                false
            }
        }
    }
}
