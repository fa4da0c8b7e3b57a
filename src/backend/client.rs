//! Backend HTTP Client
//!
//! Talks to the service-management backend that owns deployments:
//! partial template updates, stop/start, and the service list.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::HangarError;
use crate::types::{Deployment, DeploymentLifecycle, UpdateServiceRequest};

/// HTTP implementation of [`DeploymentLifecycle`].
pub struct HttpBackend {
    pub base_url: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Internal helper: send a request and return the JSON body.
    async fn request(
        &self,
        method: &'static str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = match method {
            "GET" => self.http.get(&url),
            "POST" => self.http.post(&url),
            "PUT" => self.http.put(&url),
            _ => self.http.get(&url),
        };

        builder = builder.header("Content-Type", "application/json");
        if let Some(b) = body {
            builder = builder.json(&b);
        }

        let resp = builder
            .send()
            .await
            .with_context(|| format!("backend request failed: {method} {path}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HangarError::Backend {
                method,
                path: path.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        if resp.content_length() == Some(0) {
            return Ok(Value::Null);
        }
        let json = resp.json().await.unwrap_or(Value::Null);
        Ok(json)
    }
}

#[async_trait]
impl DeploymentLifecycle for HttpBackend {
    /// Submits a sparse template; env-variable entries always carry
    /// their full spec.
    async fn update_service(&self, request: &UpdateServiceRequest) -> Result<()> {
        let body = serde_json::to_value(request)?;
        self.request("PUT", "/api/services/update", Some(body))
            .await?;
        Ok(())
    }

    async fn stop_deployment(&self, service_config_id: &str) -> Result<()> {
        self.request(
            "POST",
            &format!("/api/services/{service_config_id}/stop"),
            None,
        )
        .await?;
        Ok(())
    }

    async fn start_service(&self, service_config_id: &str) -> Result<()> {
        self.request(
            "POST",
            &format!("/api/services/{service_config_id}/start"),
            None,
        )
        .await?;
        Ok(())
    }

    async fn refetch_services(&self) -> Result<Vec<Deployment>> {
        let json = self.request("GET", "/api/services", None).await?;
        let services: Vec<Deployment> =
            serde_json::from_value(json).context("failed to parse service list")?;
        Ok(services)
    }
}
