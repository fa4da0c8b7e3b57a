//! Per-Agent-Type Form Strategies
//!
//! Agent types whose form shape is not a subset of the service
//! template register a transform here: a pure function from form
//! values to the env-variable map the template expects. Types without
//! an entry pass `env_variables` through unchanged.

use std::collections::BTreeMap;

use crate::types::{AgentType, FormValues};

/// Pure transform from form values to raw env-variable values.
pub type EnvTransform = fn(&FormValues) -> BTreeMap<String, String>;

/// Transform registered for `agent_type`, if any.
pub fn env_transform(agent_type: AgentType) -> Option<EnvTransform> {
    match agent_type {
        AgentType::AgentsFun | AgentType::AgentsFunCelo => Some(agents_fun_env),
        _ => None,
    }
}

/// Synthesized top-level description for derived-field agent types.
/// Keeps internal-only form fields (API keys, toggles) from leaking
/// into the template sent to the backend.
pub fn synthesized_description(agent_type: AgentType, form: &FormValues) -> Option<String> {
    match agent_type {
        AgentType::AgentsFun | AgentType::AgentsFunCelo => {
            let handle = form
                .agents_fun
                .as_ref()
                .map(|v| v.x_username.as_str())
                .unwrap_or_default();
            Some(format!("Agents.Fun @{handle}"))
        }
        _ => None,
    }
}

/// Maps the Agents.Fun persona form onto its env variables. The
/// Fireworks key is only forwarded when the toggle is on.
fn agents_fun_env(form: &FormValues) -> BTreeMap<String, String> {
    let values = form.agents_fun.clone().unwrap_or_default();
    let fireworks_key = if values.fireworks_api_enabled {
        values.fireworks_api_key
    } else {
        String::new()
    };
    BTreeMap::from([
        ("PERSONA".to_string(), values.persona_description),
        ("GENAI_API_KEY".to_string(), values.gemini_api_key),
        ("FIREWORKS_API_KEY".to_string(), fireworks_key),
        (
            "TWEEPY_CONSUMER_API_KEY".to_string(),
            values.x_consumer_api_key,
        ),
        (
            "TWEEPY_CONSUMER_API_KEY_SECRET".to_string(),
            values.x_consumer_api_secret,
        ),
        ("TWEEPY_BEARER_TOKEN".to_string(), values.x_bearer_token),
        ("TWEEPY_ACCESS_TOKEN".to_string(), values.x_access_token),
        (
            "TWEEPY_ACCESS_TOKEN_SECRET".to_string(),
            values.x_access_token_secret,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentsFunFormValues;

    fn persona_form(fireworks_enabled: bool) -> FormValues {
        FormValues {
            agents_fun: Some(AgentsFunFormValues {
                persona_description: "degen cat".to_string(),
                gemini_api_key: "gem-key".to_string(),
                fireworks_api_enabled: fireworks_enabled,
                fireworks_api_key: "fw-key".to_string(),
                x_username: "catbot".to_string(),
                x_consumer_api_key: "ck".to_string(),
                x_consumer_api_secret: "cs".to_string(),
                x_bearer_token: "bt".to_string(),
                x_access_token: "at".to_string(),
                x_access_token_secret: "ats".to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_generic_agent_types_have_no_transform() {
        assert!(env_transform(AgentType::PredictTrader).is_none());
        assert!(env_transform(AgentType::Supafund).is_none());
        assert!(env_transform(AgentType::Modius).is_none());
    }

    #[test]
    fn test_agents_fun_transform_produces_all_keys() {
        let transform = env_transform(AgentType::AgentsFun).unwrap();
        let env = transform(&persona_form(true));
        assert_eq!(env.len(), 8);
        assert_eq!(env["PERSONA"], "degen cat");
        assert_eq!(env["FIREWORKS_API_KEY"], "fw-key");
        assert_eq!(env["TWEEPY_BEARER_TOKEN"], "bt");
    }

    #[test]
    fn test_fireworks_key_blanked_when_disabled() {
        let transform = env_transform(AgentType::AgentsFun).unwrap();
        let env = transform(&persona_form(false));
        assert_eq!(env["FIREWORKS_API_KEY"], "");
    }

    #[test]
    fn test_synthesized_description_uses_handle() {
        let description = synthesized_description(AgentType::AgentsFun, &persona_form(true));
        assert_eq!(description.as_deref(), Some("Agents.Fun @catbot"));
        assert!(synthesized_description(AgentType::Supafund, &FormValues::default()).is_none());
    }
}
