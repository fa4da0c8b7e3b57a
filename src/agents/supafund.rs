//! Supafund Config Adapter
//!
//! Auxiliary configuration for the Supafund agent (scoring weights,
//! edge threshold, risk tolerance) that the generic template does not
//! model. Persisted locally, projected into the service's env
//! variables on explicit save.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::HangarError;
use crate::types::{
    default_supafund_config, DeploymentLifecycle, EnvProvisionType, EnvVariableSpec, KvStore,
    PartialServiceTemplate, SupafundConfig, SupafundConfigPatch, UpdateServiceRequest,
};

/// Store key for the persisted config blob.
pub const SUPAFUND_CONFIG_KEY: &str = "supafund_config";

/// Categories every weights object must carry.
pub const WEIGHT_KEYS: [&str; 5] = [
    "founder_team",
    "market_opportunity",
    "technical_analysis",
    "social_sentiment",
    "tokenomics",
];

/// Settle time between stop and start during a restart. Fixed, not
/// backend-signaled.
const RESTART_SETTLE_DELAY: Duration = Duration::from_secs(5);

/// True iff `weights` has exactly the five required categories, all
/// numeric, summing to 100 within 0.01. Any other shape is invalid;
/// this never errors.
pub fn validate_weights(weights: &Value) -> bool {
    let Some(map) = weights.as_object() else {
        return false;
    };
    if map.len() != WEIGHT_KEYS.len() {
        return false;
    }
    let mut total = 0.0;
    for key in WEIGHT_KEYS {
        match map.get(key).and_then(Value::as_f64) {
            Some(value) => total += value,
            None => return false,
        }
    }
    (total - 100.0).abs() < 0.01
}

/// Holds the shared lifecycle capability and the local store by
/// reference; no subclassing of a service base.
pub struct SupafundAdapter {
    store: Arc<dyn KvStore>,
    backend: Arc<dyn DeploymentLifecycle>,
}

impl SupafundAdapter {
    pub fn new(store: Arc<dyn KvStore>, backend: Arc<dyn DeploymentLifecycle>) -> Self {
        Self { store, backend }
    }

    /// Last persisted config, or the defaults if none exists or the
    /// stored blob fails to parse. Parse failures are logged and
    /// swallowed, never surfaced to the caller.
    pub fn get_config(&self) -> SupafundConfig {
        let saved = match self.store.get(SUPAFUND_CONFIG_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to read supafund config: {err:#}");
                return default_supafund_config();
            }
        };
        let Some(raw) = saved else {
            return default_supafund_config();
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                warn!("failed to parse saved supafund config, using defaults: {err}");
                default_supafund_config()
            }
        }
    }

    /// Shallow-merges `patch` over the current config, persists the
    /// result, and projects the changed fields into the service's env
    /// variables when a deployment id is supplied. The merged config is
    /// returned regardless of the backend outcome; backend failures are
    /// logged, not retried.
    pub async fn update_config(
        &self,
        patch: SupafundConfigPatch,
        service_config_id: Option<&str>,
    ) -> Result<SupafundConfig> {
        let mut config = self.get_config();
        let projection = project_env_variables(&patch);

        if let Some(weights) = patch.weights {
            config.weights = weights;
        }
        if let Some(threshold) = patch.min_edge_threshold {
            config.min_edge_threshold = threshold;
        }
        if let Some(risk) = patch.risk_tolerance {
            config.risk_tolerance = risk;
        }
        if let Some(endpoint) = patch.api_endpoint {
            config.api_endpoint = Some(endpoint);
        }

        self.store
            .set(SUPAFUND_CONFIG_KEY, &serde_json::to_string(&config)?)?;

        if let Some(id) = service_config_id {
            if !projection.env_variables.is_empty() {
                let request = UpdateServiceRequest {
                    service_config_id: id.to_string(),
                    partial_service_template: projection,
                };
                if let Err(err) = self.backend.update_service(&request).await {
                    error!("failed to sync supafund config to service {id}: {err:#}");
                }
            }
        }

        Ok(config)
    }

    /// Stop, wait the fixed settle delay, start. Strictly ordered:
    /// start never fires before stop resolves. Failures are wrapped
    /// and re-thrown; the caller decides whether to retry.
    pub async fn restart(&self, service_config_id: &str) -> Result<(), HangarError> {
        info!(service = service_config_id, "stopping service");
        self.backend
            .stop_deployment(service_config_id)
            .await
            .map_err(|source| HangarError::Restart {
                stage: "stop",
                source,
            })?;

        tokio::time::sleep(RESTART_SETTLE_DELAY).await;

        info!(service = service_config_id, "starting service");
        self.backend
            .start_service(service_config_id)
            .await
            .map_err(|source| HangarError::Restart {
                stage: "start",
                source,
            })?;

        info!(service = service_config_id, "service restarted");
        Ok(())
    }
}

/// Full env-variable specs for the fields present in the patch. The
/// backend never receives a bare value.
fn project_env_variables(patch: &SupafundConfigPatch) -> PartialServiceTemplate {
    let mut partial = PartialServiceTemplate::default();
    let user = EnvProvisionType::User;

    if let Some(weights) = &patch.weights {
        partial.env_variables.insert(
            "SUPAFUND_WEIGHTS".to_string(),
            EnvVariableSpec {
                name: "Supafund agent weights configuration".to_string(),
                description: "JSON string with weights for: founder_team, market_opportunity, technical_analysis, social_sentiment, tokenomics".to_string(),
                value: serde_json::to_string(weights).unwrap_or_default(),
                provision_type: user,
            },
        );
    }
    if let Some(threshold) = patch.min_edge_threshold {
        partial.env_variables.insert(
            "MIN_EDGE_THRESHOLD".to_string(),
            EnvVariableSpec {
                name: "Minimum edge threshold".to_string(),
                description: "Minimum edge percentage required to place a bet".to_string(),
                value: threshold.to_string(),
                provision_type: user,
            },
        );
    }
    if let Some(risk) = patch.risk_tolerance {
        partial.env_variables.insert(
            "RISK_TOLERANCE".to_string(),
            EnvVariableSpec {
                name: "Risk tolerance".to_string(),
                description: "Risk tolerance level (1-10)".to_string(),
                value: risk.to_string(),
                provision_type: user,
            },
        );
    }
    if let Some(endpoint) = &patch.api_endpoint {
        partial.env_variables.insert(
            "SUPAFUND_API_ENDPOINT".to_string(),
            EnvVariableSpec {
                name: "Supafund API endpoint".to_string(),
                description: "API endpoint for Supafund backend services".to_string(),
                value: endpoint.clone(),
                provision_type: user,
            },
        );
    }

    partial
}
