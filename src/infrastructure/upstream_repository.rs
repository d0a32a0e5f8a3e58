// Upstream repository - Mock fleet REST facade over HTTP
use crate::application::fleet_repository::FleetRepository;
use crate::domain::rca::{RcaReport, RcaSummary};
use crate::domain::scheduling::{BookingConfirmation, BookingRequest, ServiceSlot};
use crate::domain::vehicle::{FleetAlerts, Prediction};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to fleet API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("fleet API returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Adapter over the fleet REST facade (`/alerts`, `/predict`, `/slots`,
/// `/book`, `/rca`). Every call carries the configured bounded timeout;
/// callers above this layer treat failures as "no data".
#[derive(Debug, Clone)]
pub struct UpstreamRepository {
    base_url: String,
    client: reqwest::Client,
}

impl UpstreamRepository {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build fleet API client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, UpstreamError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl FleetRepository for UpstreamRepository {
    async fn fleet_alerts(&self) -> Result<Option<FleetAlerts>> {
        let alerts = self.get_json::<FleetAlerts>("/alerts", &[]).await?;
        Ok(Some(alerts))
    }

    async fn predict(&self, vehicle_id: &str) -> Result<Option<Prediction>> {
        let prediction = self
            .get_json::<Prediction>("/predict", &[("vehicleId", vehicle_id)])
            .await?;
        Ok(Some(prediction))
    }

    async fn available_slots(&self, date: Option<&str>) -> Result<Vec<ServiceSlot>> {
        let query: Vec<(&str, &str)> = date.map(|d| ("date", d)).into_iter().collect();
        Ok(self.get_json("/slots", &query).await?)
    }

    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<Option<BookingConfirmation>> {
        let confirmation = self.post_json("/book", request).await?;
        Ok(Some(confirmation))
    }

    async fn get_or_create_rca(&self, vehicle_id: &str) -> Result<Option<RcaReport>> {
        let report = self
            .post_json("/rca", &json!({ "vehicleId": vehicle_id }))
            .await?;
        Ok(Some(report))
    }

    async fn list_rca_reports(&self) -> Result<Vec<RcaSummary>> {
        Ok(self.get_json("/rca", &[]).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let repo = UpstreamRepository::new(
            "http://localhost:3000/api/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(repo.url("/predict"), "http://localhost:3000/api/predict");
    }
}
