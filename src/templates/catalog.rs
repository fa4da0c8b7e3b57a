//! Service Template Catalog
//!
//! The static, versioned deployment templates, one per agent type, in
//! registration order. Changing this file is a data-only deployment;
//! no code path depends on the order except the first-match tie-break
//! in template resolution.

use std::collections::BTreeMap;
use std::env;

use alloy_primitives::{address, Address};

use crate::types::{
    AgentType, ChainConfiguration, EnvProvisionType, EnvVariableSpec, FundRequirement,
    MiddlewareChain, ServiceTemplate,
};

/// Prefix used to track services that belong to the manager's suite.
pub const KPI_DESC_PREFIX: &str = "[Pearl service]";

const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Wei from whole ether.
const fn eth(whole: u128) -> u128 {
    whole * WEI_PER_ETHER
}

/// Wei from micro-ether; every fractional amount in the catalog is an
/// exact multiple of 1e-6 ether.
const fn micro_eth(micro: u128) -> u128 {
    micro * (WEI_PER_ETHER / 1_000_000)
}

/// USDC base units (6 decimals).
const fn usdc(whole: u128) -> u128 {
    whole * 1_000_000
}

const MODE_USDC: Address = address!("0xd988097fb8612cc24eeC14542bC03424c656005f");
const OPTIMISM_USDC: Address = address!("0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85");

/// Default RPC used in templates; the backend overwrites it at deploy
/// time.
fn default_rpc() -> String {
    env::var("DEV_RPC")
        .or_else(|_| env::var("GNOSIS_RPC"))
        .unwrap_or_else(|_| "http://localhost:8545".to_string())
}

fn envvar(name: &str, value: &str, provision_type: EnvProvisionType) -> EnvVariableSpec {
    EnvVariableSpec {
        name: name.to_string(),
        description: String::new(),
        value: value.to_string(),
        provision_type,
    }
}

fn envvar_described(
    name: &str,
    description: &str,
    value: &str,
    provision_type: EnvProvisionType,
) -> EnvVariableSpec {
    EnvVariableSpec {
        name: name.to_string(),
        description: description.to_string(),
        value: value.to_string(),
        provision_type,
    }
}

fn native_only_funds(agent: u128, safe: u128) -> BTreeMap<Address, FundRequirement> {
    BTreeMap::from([(Address::ZERO, FundRequirement { agent, safe })])
}

// ─── Trader ──────────────────────────────────────────────────────

fn predict_trader_env_variables() -> BTreeMap<String, EnvVariableSpec> {
    use EnvProvisionType::{Computed, Fixed};
    BTreeMap::from([
        (
            "GNOSIS_LEDGER_RPC".to_string(),
            envvar("Gnosis ledger RPC", "", Computed),
        ),
        (
            "STAKING_CONTRACT_ADDRESS".to_string(),
            envvar("Staking contract address", "", Computed),
        ),
        (
            "MECH_MARKETPLACE_CONFIG".to_string(),
            envvar("Mech marketplace configuration", "", Computed),
        ),
        (
            "MECH_ACTIVITY_CHECKER_CONTRACT".to_string(),
            envvar("Mech activity checker contract", "", Computed),
        ),
        (
            "MECH_CONTRACT_ADDRESS".to_string(),
            envvar("Mech contract address", "", Computed),
        ),
        (
            "MECH_REQUEST_PRICE".to_string(),
            envvar("Mech request price", "", Computed),
        ),
        (
            "USE_MECH_MARKETPLACE".to_string(),
            envvar("Use Mech marketplace", "", Computed),
        ),
        (
            "TOOLS_ACCURACY_HASH".to_string(),
            envvar(
                "Tools accuracy hash",
                "QmbyrbZkQEUYHkXzwBqkmRSNqzcQLS7QpebB2xgjjBR1zP",
                Fixed,
            ),
        ),
        (
            "MECH_INTERACT_ROUND_TIMEOUT_SECONDS".to_string(),
            // 15 min
            envvar("Mech interact round timeout", "900", Fixed),
        ),
    ])
}

fn predict_trader_template() -> ServiceTemplate {
    ServiceTemplate {
        agent_type: AgentType::PredictTrader,
        name: "Trader Agent".to_string(),
        hash: "bafybeidatmzo4m65sjdfha2aurz4mvsdxeu7coom2zcnfbnwpeyfsn4mza".to_string(),
        description: format!("{KPI_DESC_PREFIX} Trader agent for omen prediction markets"),
        image: "https://operate.olas.network/_next/image?url=%2Fimages%2Fprediction-agent.png&w=3840&q=75".to_string(),
        service_version: "v0.25.11".to_string(),
        home_chain: MiddlewareChain::Gnosis,
        configurations: BTreeMap::from([(
            MiddlewareChain::Gnosis,
            ChainConfiguration {
                staking_program_id: "pearl_beta".to_string(),
                nft: "bafybeig64atqaladigoc3ds4arltdu63wkdrk3gesjfvnfdmz35amv7faq".to_string(),
                rpc: default_rpc(),
                agent_id: 14,
                threshold: 1,
                use_staking: true,
                use_mech_marketplace: Some(false),
                cost_of_bond: micro_eth(1_000),
                monthly_gas_estimate: eth(10),
                fund_requirements: native_only_funds(eth(2), eth(5)),
            },
        )]),
        env_variables: predict_trader_env_variables(),
    }
}

// ─── Agents.Fun ──────────────────────────────────────────────────

fn agents_fun_env_variables() -> BTreeMap<String, EnvVariableSpec> {
    use EnvProvisionType::{Computed, Fixed, User};
    BTreeMap::from([
        (
            "BASE_LEDGER_RPC".to_string(),
            envvar("Base ledger RPC", "", Computed),
        ),
        (
            "CELO_LEDGER_RPC".to_string(),
            envvar("Celo ledger RPC", "", Computed),
        ),
        (
            "TWEEPY_CONSUMER_API_KEY".to_string(),
            envvar("Twitter consumer API key", "", User),
        ),
        (
            "TWEEPY_CONSUMER_API_KEY_SECRET".to_string(),
            envvar("Twitter consumer API key secret", "", User),
        ),
        (
            "TWEEPY_BEARER_TOKEN".to_string(),
            envvar("Twitter bearer token", "", User),
        ),
        (
            "TWEEPY_ACCESS_TOKEN".to_string(),
            envvar("Twitter access token", "", User),
        ),
        (
            "TWEEPY_ACCESS_TOKEN_SECRET".to_string(),
            envvar("Twitter access token secret", "", User),
        ),
        (
            "GENAI_API_KEY".to_string(),
            envvar("Gemini api key", "", User),
        ),
        (
            "FIREWORKS_API_KEY".to_string(),
            envvar("Fireworks AI api key", "", User),
        ),
        (
            "PERSONA".to_string(),
            envvar("Persona description", "", User),
        ),
        // Fixed for now, may become user provided in the future.
        (
            "FEEDBACK_PERIOD_HOURS".to_string(),
            envvar("Feedback period", "1", Fixed),
        ),
        (
            "MIN_FEEDBACK_REPLIES".to_string(),
            envvar("Minimum feedback replies", "10", Fixed),
        ),
        (
            "RESET_PAUSE_DURATION".to_string(),
            envvar("Reset pause duration", "300", Fixed),
        ),
        (
            "STORE_PATH".to_string(),
            envvar("Store path", "persistent_data/", Computed),
        ),
        (
            "STAKING_TOKEN_CONTRACT_ADDRESS".to_string(),
            envvar("Staking token contract address", "", Computed),
        ),
        (
            "ACTIVITY_CHECKER_CONTRACT_ADDRESS".to_string(),
            envvar("Staking activity checker contract address", "", Computed),
        ),
    ])
}

const AGENTS_FUN_HASH: &str = "bafybeiardecju3sygh7hwuywka2bgjinbr7vrzob4mpdrookyfsbdmoq2m";
const AGENTS_FUN_IMAGE: &str =
    "https://gateway.autonolas.tech/ipfs/QmQYDGMg8m91QQkTWSSmANs5tZwKrmvUCawXZfXVVWQPcu";
const AGENTS_FUN_VERSION: &str = "v0.8.0-alpha3";

/// The `@twitter_handle` placeholder is replaced with the user's
/// handle when the persona form is reconciled.
fn agents_fun_description() -> String {
    format!("{KPI_DESC_PREFIX} Agents.Fun @twitter_handle")
}

fn agents_fun_base_template() -> ServiceTemplate {
    ServiceTemplate {
        agent_type: AgentType::AgentsFun,
        name: "Agents.Fun".to_string(),
        hash: AGENTS_FUN_HASH.to_string(),
        description: agents_fun_description(),
        image: AGENTS_FUN_IMAGE.to_string(),
        service_version: AGENTS_FUN_VERSION.to_string(),
        home_chain: MiddlewareChain::Base,
        configurations: BTreeMap::from([(
            MiddlewareChain::Base,
            ChainConfiguration {
                staking_program_id: "agents_fun_1".to_string(),
                nft: "bafybeiaakdeconw7j5z76fgghfdjmsr6tzejotxcwnvmp3nroaw3glgyve".to_string(),
                rpc: default_rpc(),
                agent_id: 43,
                threshold: 1,
                use_staking: true,
                use_mech_marketplace: None,
                cost_of_bond: eth(50),
                monthly_gas_estimate: micro_eth(30_000),
                fund_requirements: native_only_funds(micro_eth(6_250), micro_eth(12_500)),
            },
        )]),
        env_variables: agents_fun_env_variables(),
    }
}

fn agents_fun_celo_template() -> ServiceTemplate {
    ServiceTemplate {
        agent_type: AgentType::AgentsFunCelo,
        name: "Agents.Fun - Celo".to_string(),
        hash: AGENTS_FUN_HASH.to_string(),
        description: agents_fun_description(),
        image: AGENTS_FUN_IMAGE.to_string(),
        service_version: AGENTS_FUN_VERSION.to_string(),
        home_chain: MiddlewareChain::Celo,
        configurations: BTreeMap::from([(
            MiddlewareChain::Celo,
            ChainConfiguration {
                staking_program_id: "meme_celo_alpha_2".to_string(),
                nft: "bafybeiaakdeconw7j5z76fgghfdjmsr6tzejotxcwnvmp3nroaw3glgyve".to_string(),
                rpc: default_rpc(),
                agent_id: 43,
                threshold: 1,
                use_staking: true,
                use_mech_marketplace: None,
                cost_of_bond: eth(50),
                monthly_gas_estimate: micro_eth(30_000),
                fund_requirements: native_only_funds(micro_eth(6_250), micro_eth(12_500)),
            },
        )]),
        env_variables: agents_fun_env_variables(),
    }
}

// ─── Babydegen ───────────────────────────────────────────────────

const BABYDEGEN_HASH: &str = "bafybeih7ohx7j5vrrl4kvs5igreh5jlt6tc35o7qho4qdonco27krutxkq";
const BABYDEGEN_VERSION: &str = "v0.3.15";
const BABYDEGEN_IMAGE: &str =
    "https://gateway.autonolas.tech/ipfs/bafybeiaakdeconw7j5z76fgghfdjmsr6tzejotxcwnvmp3nroaw3glgyve";

fn modius_template() -> ServiceTemplate {
    use EnvProvisionType::{Computed, Fixed, User};
    ServiceTemplate {
        agent_type: AgentType::Modius,
        name: "Optimus".to_string(),
        hash: BABYDEGEN_HASH.to_string(),
        description: format!("{KPI_DESC_PREFIX} Optimus"),
        image: BABYDEGEN_IMAGE.to_string(),
        service_version: BABYDEGEN_VERSION.to_string(),
        home_chain: MiddlewareChain::Mode,
        configurations: BTreeMap::from([(
            MiddlewareChain::Mode,
            ChainConfiguration {
                staking_program_id: "modius_alpha".to_string(),
                nft: "bafybeiafjcy63arqkfqbtjqpzxyeia2tscpbyradb4zlpzhgc3xymwmmtu".to_string(),
                rpc: default_rpc(),
                agent_id: 40,
                threshold: 1,
                use_staking: true,
                use_mech_marketplace: None,
                cost_of_bond: eth(20),
                // TODO: should be 0.0055, temp value until the middleware
                // refund fix lands
                monthly_gas_estimate: micro_eth(11_000),
                fund_requirements: BTreeMap::from([
                    (
                        Address::ZERO,
                        FundRequirement {
                            agent: micro_eth(500),
                            safe: 0,
                        },
                    ),
                    (
                        MODE_USDC,
                        FundRequirement {
                            agent: 0,
                            safe: usdc(16),
                        },
                    ),
                ]),
            },
        )]),
        env_variables: BTreeMap::from([
            (
                "MODE_LEDGER_RPC".to_string(),
                envvar("Mode ledger RPC", "", Computed),
            ),
            (
                "SAFE_CONTRACT_ADDRESSES".to_string(),
                envvar("Safe contract address", "", Computed),
            ),
            (
                "TENDERLY_ACCESS_KEY".to_string(),
                envvar("Tenderly access key", "", User),
            ),
            (
                "TENDERLY_ACCOUNT_SLUG".to_string(),
                envvar("Tenderly account slug", "", User),
            ),
            (
                "TENDERLY_PROJECT_SLUG".to_string(),
                envvar("Tenderly project slug", "", User),
            ),
            (
                "STAKING_TOKEN_CONTRACT_ADDRESS".to_string(),
                envvar("Staking token contract address", "", Computed),
            ),
            (
                "COINGECKO_API_KEY".to_string(),
                envvar("Coingecko API key", "", User),
            ),
            (
                "GENAI_API_KEY".to_string(),
                envvar("Gemini api key", "", User),
            ),
            (
                "STAKING_CHAIN".to_string(),
                envvar("Staking chain", "mode", Fixed),
            ),
            (
                "ACTIVITY_CHECKER_CONTRACT_ADDRESS".to_string(),
                envvar("Staking activity checker contract address", "", Computed),
            ),
            (
                // Unused, refactored - remove
                "STAKING_ACTIVITY_CHECKER_CONTRACT_ADDRESS".to_string(),
                envvar("Staking activity checker contract address", "Unused", Fixed),
            ),
            (
                "MIN_SWAP_AMOUNT_THRESHOLD".to_string(),
                envvar("Minimum swap amount threshold", "15", Fixed),
            ),
            (
                "ALLOWED_CHAINS".to_string(),
                envvar("Allowed chains", "[\"mode\"]", Fixed),
            ),
            (
                "TARGET_INVESTMENT_CHAINS".to_string(),
                envvar("Target investment chains", "[\"mode\"]", Fixed),
            ),
            (
                "INITIAL_ASSETS".to_string(),
                envvar(
                    "Initial assets",
                    "{\"mode\":{\"0x0000000000000000000000000000000000000000\":\"ETH\",\"0xd988097fb8612cc24eeC14542bC03424c656005f\":\"USDC\"}}",
                    Fixed,
                ),
            ),
            (
                "SELECTED_STRATEGIES".to_string(),
                envvar(
                    "Selected strategies",
                    "[\"balancer_pools_search\", \"asset_lending\"]",
                    Fixed,
                ),
            ),
            (
                "INIT_FALLBACK_GAS".to_string(),
                envvar("Init fallback gas", "250000", Fixed),
            ),
            (
                "STORE_PATH".to_string(),
                envvar("Store path", "", Computed),
            ),
            (
                "RESET_PAUSE_DURATION".to_string(),
                envvar("Reset pause duration", "300", Fixed),
            ),
        ]),
    }
}

fn optimus_template() -> ServiceTemplate {
    use EnvProvisionType::{Computed, Fixed, User};
    ServiceTemplate {
        agent_type: AgentType::Optimus,
        name: "Optimus - Optimism".to_string(),
        hash: BABYDEGEN_HASH.to_string(),
        description: format!("{KPI_DESC_PREFIX} Optimus service deployment on Optimism network"),
        image: BABYDEGEN_IMAGE.to_string(),
        service_version: BABYDEGEN_VERSION.to_string(),
        home_chain: MiddlewareChain::Optimism,
        configurations: BTreeMap::from([(
            MiddlewareChain::Optimism,
            ChainConfiguration {
                staking_program_id: "optimus_alpha".to_string(),
                nft: "bafybeiafjcy63arqkfqbtjqpzxyeia2tscpbyradb4zlpzhgc3xymwmmtu".to_string(),
                rpc: default_rpc(),
                agent_id: 40,
                threshold: 1,
                use_staking: true,
                use_mech_marketplace: None,
                cost_of_bond: eth(20),
                monthly_gas_estimate: micro_eth(11_000),
                fund_requirements: BTreeMap::from([
                    (
                        Address::ZERO,
                        FundRequirement {
                            agent: micro_eth(700),
                            safe: 0,
                        },
                    ),
                    (
                        OPTIMISM_USDC,
                        FundRequirement {
                            agent: 0,
                            safe: usdc(16),
                        },
                    ),
                ]),
            },
        )]),
        env_variables: BTreeMap::from([
            (
                "OPTIMISM_LEDGER_RPC".to_string(),
                envvar("Optimism ledger RPC", "", Computed),
            ),
            (
                "SAFE_CONTRACT_ADDRESSES".to_string(),
                envvar("Safe contract address", "", Computed),
            ),
            (
                "TENDERLY_ACCESS_KEY".to_string(),
                envvar("Tenderly access key", "", User),
            ),
            (
                "TENDERLY_ACCOUNT_SLUG".to_string(),
                envvar("Tenderly account slug", "", User),
            ),
            (
                "TENDERLY_PROJECT_SLUG".to_string(),
                envvar("Tenderly project slug", "", User),
            ),
            (
                "STAKING_TOKEN_CONTRACT_ADDRESS".to_string(),
                envvar("Staking token contract address", "", Computed),
            ),
            (
                "COINGECKO_API_KEY".to_string(),
                envvar("Coingecko API key", "", User),
            ),
            (
                "GENAI_API_KEY".to_string(),
                envvar("Gemini API key", "", User),
            ),
            (
                "STAKING_CHAIN".to_string(),
                envvar("Staking chain", "optimism", Fixed),
            ),
            (
                "ACTIVITY_CHECKER_CONTRACT_ADDRESS".to_string(),
                envvar("Staking activity checker contract address", "", Computed),
            ),
            (
                "TARGET_INVESTMENT_CHAINS".to_string(),
                envvar("Target investment chains", "[\"optimism\"]", Fixed),
            ),
            (
                "INITIAL_ASSETS".to_string(),
                envvar(
                    "Initial assets",
                    "{\"optimism\":{\"0x0000000000000000000000000000000000000000\":\"ETH\",\"0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85\":\"USDC\"}}",
                    Fixed,
                ),
            ),
            (
                "INIT_FALLBACK_GAS".to_string(),
                envvar("Init fallback gas", "250000", Fixed),
            ),
            (
                "STORE_PATH".to_string(),
                envvar("Store path", "", Computed),
            ),
            (
                "RESET_PAUSE_DURATION".to_string(),
                envvar("Reset pause duration", "300", Fixed),
            ),
        ]),
    }
}

// ─── Supafund ────────────────────────────────────────────────────

/// Prediction market agent for evaluating startup and crypto project
/// milestones. Inherits the trader env variables and layers its own
/// scoring configuration on top.
fn supafund_template() -> ServiceTemplate {
    use EnvProvisionType::{Fixed, User};

    let mut env_variables = predict_trader_env_variables();
    env_variables.extend([
        (
            "SUPAFUND_WEIGHTS".to_string(),
            envvar_described(
                "Supafund agent weights configuration",
                "JSON string with weights for: founder_team, market_opportunity, technical_analysis, social_sentiment, tokenomics",
                "{\"founder_team\":20,\"market_opportunity\":20,\"technical_analysis\":20,\"social_sentiment\":20,\"tokenomics\":20}",
                User,
            ),
        ),
        (
            "SUPAFUND_API_ENDPOINT".to_string(),
            envvar_described(
                "Supafund API endpoint",
                "API endpoint for Supafund backend services",
                "",
                User,
            ),
        ),
        (
            "SUPAFUND_MARKET_CREATORS".to_string(),
            envvar_described(
                "Supafund market creator addresses",
                "List of addresses that create Supafund prediction markets",
                "[\"0x89c5cc945dd550BcFfb72Fe42BfF002429F46Fec\"]",
                Fixed,
            ),
        ),
        (
            "CREATOR_PER_SUBGRAPH".to_string(),
            envvar_described(
                "Market creators per subgraph",
                "JSON mapping of subgraph names to creator addresses",
                "{\"omen_subgraph\":[\"0x92F869018B5F954a4197a15feb951CF9260c54a8\"]}",
                Fixed,
            ),
        ),
        (
            "MIN_EDGE_THRESHOLD".to_string(),
            envvar_described(
                "Minimum edge threshold",
                "Minimum edge percentage required to place a bet",
                "5",
                User,
            ),
        ),
        (
            "RISK_TOLERANCE".to_string(),
            envvar_described("Risk tolerance", "Risk tolerance level (1-10)", "5", User),
        ),
    ]);

    ServiceTemplate {
        agent_type: AgentType::Supafund,
        name: "Supafund Agent".to_string(),
        hash: "bafybeidavcdl5mex7ykrf4fytngrpgejp3oqdllqrj2uvj6vm4qlkqrklu".to_string(),
        description: format!(
            "{KPI_DESC_PREFIX} Predicts whether emerging projects will achieve key milestones, providing detailed AI-powered analysis"
        ),
        image: "https://www.supafund.xyz/_next/image?url=%2F_next%2Fstatic%2Fmedia%2Flight.71a38e21.png&w=64&q=75".to_string(),
        service_version: "v0.1.0".to_string(),
        home_chain: MiddlewareChain::Gnosis,
        configurations: BTreeMap::from([(
            MiddlewareChain::Gnosis,
            ChainConfiguration {
                staking_program_id: "pearl_beta".to_string(),
                nft: "bafybeig64atqaladigoc3ds4arltdu63wkdrk3gesjfvnfdmz35amv7faq".to_string(),
                rpc: default_rpc(),
                agent_id: 14,
                threshold: 1,
                use_staking: true,
                use_mech_marketplace: Some(false),
                cost_of_bond: micro_eth(1_000),
                monthly_gas_estimate: eth(10),
                fund_requirements: native_only_funds(eth(2), eth(5)),
            },
        )]),
        env_variables,
    }
}

/// Builds the full catalog in registration order.
pub fn build_catalog() -> Vec<ServiceTemplate> {
    vec![
        predict_trader_template(),
        agents_fun_base_template(),
        modius_template(),
        agents_fun_celo_template(),
        optimus_template(),
        supafund_template(),
    ]
}
