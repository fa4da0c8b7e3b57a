//! Service Template Registry
//!
//! Process-wide, read-only view over the catalog. Lookups are
//! deterministic and side-effect-free; callers clone entries before
//! modifying them.

use std::sync::OnceLock;

use crate::templates::catalog::build_catalog;
use crate::types::{AgentType, ServiceTemplate};

/// All registered templates, in registration order. Built once on
/// first access and never mutated afterwards.
pub fn templates() -> &'static [ServiceTemplate] {
    static CATALOG: OnceLock<Vec<ServiceTemplate>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Template for an agent type, or `None` if the type is unknown.
pub fn find_by_agent_type(agent_type: AgentType) -> Option<&'static ServiceTemplate> {
    templates().iter().find(|t| t.agent_type == agent_type)
}

/// Template by content hash. Chain variants of the same service share
/// a hash; the first-registered variant wins.
pub fn find_by_hash(hash: &str) -> Option<&'static ServiceTemplate> {
    templates().iter().find(|t| t.hash == hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MiddlewareChain;
    use alloy_primitives::Address;
    use std::collections::HashSet;

    const ETHER: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_catalog_order_is_stable() {
        let names: Vec<&str> = templates().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Trader Agent",
                "Agents.Fun",
                "Optimus",
                "Agents.Fun - Celo",
                "Optimus - Optimism",
                "Supafund Agent",
            ]
        );
    }

    #[test]
    fn test_agent_types_and_names_unique() {
        let types: HashSet<_> = templates().iter().map(|t| t.agent_type).collect();
        assert_eq!(types.len(), templates().len());
        let names: HashSet<_> = templates().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), templates().len());
    }

    #[test]
    fn test_find_by_agent_type() {
        let trader = find_by_agent_type(AgentType::PredictTrader).unwrap();
        assert_eq!(trader.name, "Trader Agent");
        assert_eq!(trader.home_chain, MiddlewareChain::Gnosis);
    }

    #[test]
    fn test_find_by_hash_first_match_wins() {
        // Base and Celo Agents.Fun share a hash; the Base variant is
        // registered first.
        let found = find_by_hash("bafybeiardecju3sygh7hwuywka2bgjinbr7vrzob4mpdrookyfsbdmoq2m").unwrap();
        assert_eq!(found.agent_type, AgentType::AgentsFun);
        assert!(find_by_hash("bafybei-unknown").is_none());
    }

    #[test]
    fn test_supafund_gnosis_fund_requirements() {
        let supafund = find_by_agent_type(AgentType::Supafund).unwrap();
        let gnosis = &supafund.configurations[&MiddlewareChain::Gnosis];
        let native = &gnosis.fund_requirements[&Address::ZERO];
        assert_eq!(native.agent, 2 * ETHER);
        assert_eq!(native.safe, 5 * ETHER);
    }

    #[test]
    fn test_every_configuration_has_native_fund_requirement() {
        for template in templates() {
            for (chain, config) in &template.configurations {
                assert!(
                    config.fund_requirements.contains_key(&Address::ZERO),
                    "{} on {:?} lacks a native fund requirement",
                    template.name,
                    chain
                );
            }
        }
    }

    #[test]
    fn test_supafund_inherits_trader_env_variables() {
        let trader = find_by_agent_type(AgentType::PredictTrader).unwrap();
        let supafund = find_by_agent_type(AgentType::Supafund).unwrap();
        for key in trader.env_variables.keys() {
            assert!(
                supafund.env_variables.contains_key(key),
                "missing inherited env variable {key}"
            );
        }
        assert!(supafund.env_variables.contains_key("SUPAFUND_WEIGHTS"));
        assert!(supafund.env_variables.contains_key("MIN_EDGE_THRESHOLD"));
    }

    #[test]
    fn test_wire_shape_round_trips() {
        let supafund = find_by_agent_type(AgentType::Supafund).unwrap();
        let json = serde_json::to_value(supafund).unwrap();
        assert_eq!(json["agentType"], "Supafund");
        assert_eq!(
            json["configurations"]["gnosis"]["fund_requirements"]
                ["0x0000000000000000000000000000000000000000"]["agent"],
            serde_json::json!(2_000_000_000_000_000_000_u64)
        );
        let back: ServiceTemplate = serde_json::from_value(json).unwrap();
        assert_eq!(&back, supafund);
    }
}
