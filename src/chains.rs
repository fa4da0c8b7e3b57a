//! Chain Config Registry
//!
//! Static mapping from chain id to RPC endpoint, native token, and
//! Safe-creation funding threshold. Add new chains to `build_chain_configs`.

use std::env;
use std::sync::OnceLock;

use crate::error::HangarError;
use crate::types::{ChainConfig, ChainId, MiddlewareChain, NativeToken};

fn native(symbol: &str) -> NativeToken {
    NativeToken {
        symbol: symbol.to_string(),
        decimals: 18,
    }
}

/// RPC endpoint for a chain, honoring the `<NAME>_RPC` env override.
fn rpc_url(env_key: &str, fallback: &str) -> String {
    env::var(env_key).unwrap_or_else(|_| fallback.to_string())
}

fn build_chain_configs() -> Vec<ChainConfig> {
    vec![
        ChainConfig {
            name: "Gnosis".to_string(),
            native_token: native("XDAI"),
            chain_id: ChainId::Gnosis,
            middleware_chain: MiddlewareChain::Gnosis,
            rpc: rpc_url("GNOSIS_RPC", "https://rpc.gnosischain.com"),
            safe_creation_threshold: 1.5,
        },
        ChainConfig {
            name: "Base".to_string(),
            native_token: native("ETH"),
            chain_id: ChainId::Base,
            middleware_chain: MiddlewareChain::Base,
            rpc: rpc_url("BASE_RPC", "https://mainnet.base.org"),
            safe_creation_threshold: 0.005,
        },
        ChainConfig {
            name: "Mode".to_string(),
            native_token: native("ETH"),
            chain_id: ChainId::Mode,
            middleware_chain: MiddlewareChain::Mode,
            rpc: rpc_url("MODE_RPC", "https://mainnet.mode.network"),
            safe_creation_threshold: 0.0005,
        },
        ChainConfig {
            name: "Celo".to_string(),
            native_token: native("CELO"),
            chain_id: ChainId::Celo,
            middleware_chain: MiddlewareChain::Celo,
            rpc: rpc_url("CELO_RPC", "https://forno.celo.org"),
            safe_creation_threshold: 0.005,
        },
        ChainConfig {
            name: "Optimism".to_string(),
            native_token: native("ETH"),
            chain_id: ChainId::Optimism,
            middleware_chain: MiddlewareChain::Optimism,
            rpc: rpc_url("OPTIMISM_RPC", "https://mainnet.optimism.io"),
            safe_creation_threshold: 0.005,
        },
    ]
}

/// All supported chains, built once on first access.
pub fn chain_configs() -> &'static [ChainConfig] {
    static CONFIGS: OnceLock<Vec<ChainConfig>> = OnceLock::new();
    CONFIGS.get_or_init(build_chain_configs)
}

/// Pure lookup by EVM chain id.
pub fn chain_config(chain_id: ChainId) -> Result<&'static ChainConfig, HangarError> {
    chain_configs()
        .iter()
        .find(|c| c.chain_id == chain_id)
        .ok_or_else(|| HangarError::ConfigNotFound(format!("chain {:?}", chain_id)))
}

/// Lookup by the middleware's chain name; templates key their
/// configurations this way.
pub fn chain_config_for(
    middleware_chain: MiddlewareChain,
) -> Result<&'static ChainConfig, HangarError> {
    chain_configs()
        .iter()
        .find(|c| c.middleware_chain == middleware_chain)
        .ok_or_else(|| HangarError::ConfigNotFound(format!("middleware chain {:?}", middleware_chain)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chain_resolves() {
        for chain_id in [
            ChainId::Gnosis,
            ChainId::Base,
            ChainId::Mode,
            ChainId::Celo,
            ChainId::Optimism,
        ] {
            let config = chain_config(chain_id).unwrap();
            assert_eq!(config.chain_id, chain_id);
        }
    }

    #[test]
    fn test_safe_creation_thresholds_positive() {
        for config in chain_configs() {
            assert!(config.safe_creation_threshold > 0.0, "{}", config.name);
        }
    }

    #[test]
    fn test_gnosis_threshold() {
        let gnosis = chain_config(ChainId::Gnosis).unwrap();
        assert_eq!(gnosis.native_token.symbol, "XDAI");
        assert_eq!(gnosis.safe_creation_threshold, 1.5);
    }

    #[test]
    fn test_middleware_chain_lookup() {
        let base = chain_config_for(MiddlewareChain::Base).unwrap();
        assert_eq!(base.chain_id, ChainId::Base);
        assert_eq!(base.chain_id.id(), 8453);
    }
}
