//! Hangar - Type Definitions
//!
//! All shared types for the agent-deployment manager core:
//! chain configs, service templates, environment variables, and the
//! capability traits the adapters depend on.

use std::collections::BTreeMap;

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ─── Chains ──────────────────────────────────────────────────────

/// EVM chain ids for every chain the manager can deploy to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChainId {
    Gnosis = 100,
    Base = 8453,
    Mode = 34443,
    Celo = 42220,
    Optimism = 10,
}

impl ChainId {
    /// Numeric EVM chain id.
    pub fn id(self) -> u64 {
        self as u64
    }
}

/// Chain identifiers as the middleware names them.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MiddlewareChain {
    Gnosis,
    Base,
    Mode,
    Celo,
    Optimism,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NativeToken {
    pub symbol: String,
    pub decimals: u8,
}

/// Static per-chain configuration. One entry per supported chain,
/// constructed once at startup and never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    pub name: String,
    pub native_token: NativeToken,
    pub chain_id: ChainId,
    pub middleware_chain: MiddlewareChain,
    pub rpc: String,
    /// Least amount of native token required to create a Safe,
    /// in native-token units. Always > 0.
    pub safe_creation_threshold: f64,
}

// ─── Environment Variables ───────────────────────────────────────

/// How an environment variable's value is sourced.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnvProvisionType {
    /// Constant baked into the template; never changes at runtime.
    Fixed,
    /// Overwritten by the backend at deploy time; any stored value is
    /// a placeholder.
    Computed,
    /// Entered by the user; preserved byte-for-byte until edited.
    User,
}

/// A fully-specified environment variable. The backend never accepts a
/// bare value: every update must carry the whole spec.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EnvVariableSpec {
    pub name: String,
    pub description: String,
    pub value: String,
    pub provision_type: EnvProvisionType,
}

// ─── Service Templates ───────────────────────────────────────────

/// Discriminator selecting which deployment template and form schema
/// applies.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgentType {
    PredictTrader,
    AgentsFun,
    AgentsFunCelo,
    Modius,
    Optimus,
    Supafund,
}

/// Minimum token balances (wei) the agent EOA and the Safe must hold
/// for the deployment to operate.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FundRequirement {
    pub agent: u128,
    pub safe: u128,
}

/// Per-chain deployment parameters within a service template.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChainConfiguration {
    pub staking_program_id: String,
    pub nft: String,
    pub rpc: String,
    pub agent_id: u32,
    pub threshold: u32,
    pub use_staking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_mech_marketplace: Option<bool>,
    pub cost_of_bond: u128,
    pub monthly_gas_estimate: u128,
    /// Keyed by token address; the zero address is the native token.
    pub fund_requirements: BTreeMap<Address, FundRequirement>,
}

/// The full declarative deployment descriptor for one agent type.
///
/// Field names follow the middleware wire format (snake_case except the
/// legacy `agentType`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceTemplate {
    #[serde(rename = "agentType")]
    pub agent_type: AgentType,
    /// Unique across all services; never updated after registration.
    pub name: String,
    pub hash: String,
    pub description: String,
    pub image: String,
    pub service_version: String,
    pub home_chain: MiddlewareChain,
    pub configurations: BTreeMap<MiddlewareChain, ChainConfiguration>,
    pub env_variables: BTreeMap<String, EnvVariableSpec>,
}

/// Sparse template sent to the backend; only changed fields are present.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PartialServiceTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub env_variables: BTreeMap<String, EnvVariableSpec>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub service_config_id: String,
    pub partial_service_template: PartialServiceTemplate,
}

// ─── Deployments ─────────────────────────────────────────────────

/// A deployed service as reported by the backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_config_id: Option<String>,
    pub name: String,
}

// ─── Form Input ──────────────────────────────────────────────────

/// Structured input for agent types whose form shape is not a subset
/// of the service template (the Agents.Fun persona form).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsFunFormValues {
    pub persona_description: String,
    pub gemini_api_key: String,
    pub fireworks_api_enabled: bool,
    pub fireworks_api_key: String,
    pub x_username: String,
    pub x_consumer_api_key: String,
    pub x_consumer_api_secret: String,
    pub x_bearer_token: String,
    pub x_access_token: String,
    pub x_access_token_secret: String,
}

/// Raw values submitted by a configuration form.
///
/// Generic agent types fill `env_variables` (and optionally the
/// top-level fields) directly; derived-field agent types fill their
/// structured sub-form instead.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub env_variables: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents_fun: Option<AgentsFunFormValues>,
}

// ─── Supafund Aux Config ─────────────────────────────────────────

/// Scoring weights for the five Supafund evaluation categories.
/// Must sum to 100 within a 0.01 tolerance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SupafundWeights {
    pub founder_team: f64,
    pub market_opportunity: f64,
    pub technical_analysis: f64,
    pub social_sentiment: f64,
    pub tokenomics: f64,
}

/// Supafund-specific configuration that lives outside the generic
/// template; reconstructed from and projected into env variables.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupafundConfig {
    pub weights: SupafundWeights,
    pub min_edge_threshold: f64,
    pub risk_tolerance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
}

/// Partial Supafund config; unset fields keep their current values.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupafundConfigPatch {
    pub weights: Option<SupafundWeights>,
    pub min_edge_threshold: Option<f64>,
    pub risk_tolerance: Option<f64>,
    pub api_endpoint: Option<String>,
}

/// Default Supafund configuration: even weights, threshold 5, risk 5.
pub fn default_supafund_config() -> SupafundConfig {
    SupafundConfig {
        weights: SupafundWeights {
            founder_team: 20.0,
            market_opportunity: 20.0,
            technical_analysis: 20.0,
            social_sentiment: 20.0,
            tokenomics: 20.0,
        },
        min_edge_threshold: 5.0,
        risk_tolerance: 5.0,
        api_endpoint: None,
    }
}

// ─── Manager Configuration ───────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// The manager's own configuration, loaded from `~/.hangar/hangar.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerConfig {
    pub backend_url: String,
    pub store_path: String,
    pub log_level: LogLevel,
    pub version: String,
}

/// Returns the default `ManagerConfig`. Callers override per field.
pub fn default_manager_config() -> ManagerConfig {
    ManagerConfig {
        backend_url: "http://localhost:8765".to_string(),
        store_path: "~/.hangar/state.db".to_string(),
        log_level: LogLevel::Info,
        version: "0.1.0".to_string(),
    }
}

// ─── Capability Traits ───────────────────────────────────────────

/// Lifecycle operations the service-management backend exposes.
///
/// Implemented once by the HTTP client; agent-specific adapters hold a
/// reference to it instead of subclassing a shared base.
#[async_trait]
pub trait DeploymentLifecycle: Send + Sync {
    async fn update_service(&self, request: &UpdateServiceRequest) -> anyhow::Result<()>;
    async fn stop_deployment(&self, service_config_id: &str) -> anyhow::Result<()>;
    async fn start_service(&self, service_config_id: &str) -> anyhow::Result<()>;
    async fn refetch_services(&self) -> anyhow::Result<Vec<Deployment>>;
}

/// Generic key-value persistence for agent-specific aux configs.
/// Swappable between the SQLite store and an in-memory one.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}
