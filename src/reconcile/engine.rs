//! Template Reconciliation Engine
//!
//! Turns raw form values for the selected deployment into a partial
//! update the backend accepts: resolves the matching service template,
//! applies the agent type's form strategy, and backfills every env
//! variable to a full spec before anything is sent.

use std::collections::BTreeMap;

use tracing::{error, info};

use crate::reconcile::session::EditSession;
use crate::reconcile::strategies::{env_transform, synthesized_description};
use crate::templates::registry::templates;
use crate::types::{
    AgentType, Deployment, DeploymentLifecycle, EnvProvisionType, EnvVariableSpec, FormValues,
    PartialServiceTemplate, ServiceTemplate, UpdateServiceRequest,
};

/// First template whose name matches the deployment or whose agent
/// type matches the selection. Ambiguity is not an error; the
/// first-registered template is authoritative.
pub fn resolve_template(
    deployment_name: &str,
    agent_type: AgentType,
) -> Option<&'static ServiceTemplate> {
    templates()
        .iter()
        .find(|t| t.name == deployment_name || t.agent_type == agent_type)
}

/// Completes each raw `(key, value)` pair into a full spec. Name,
/// description, and provision type come from the current template when
/// the variable already exists there; otherwise the value is treated
/// as user-provided with an empty name and description. A bare value
/// is never sent: the backend does not infer missing fields.
fn backfill_env_variables(
    template: Option<&ServiceTemplate>,
    raw: BTreeMap<String, String>,
) -> BTreeMap<String, EnvVariableSpec> {
    raw.into_iter()
        .map(|(key, value)| {
            let spec = match template.and_then(|t| t.env_variables.get(&key)) {
                Some(existing) => EnvVariableSpec {
                    value,
                    ..existing.clone()
                },
                None => EnvVariableSpec {
                    name: String::new(),
                    description: String::new(),
                    value,
                    provision_type: EnvProvisionType::User,
                },
            };
            (key, spec)
        })
        .collect()
}

/// Pure reconciliation step: form values + selected deployment ->
/// partial update request. Returns `None` when the deployment has no
/// `service_config_id` (nothing to address the update to).
pub fn build_partial_update(
    deployment: &Deployment,
    agent_type: AgentType,
    form: &FormValues,
) -> Option<UpdateServiceRequest> {
    let service_config_id = deployment.service_config_id.clone()?;
    let template = resolve_template(&deployment.name, agent_type);

    let raw_env = match env_transform(agent_type) {
        Some(transform) => transform(form),
        None => form.env_variables.clone(),
    };

    // Derived-field agent types forward only a synthesized description;
    // generic types forward the form's top-level fields as-is.
    let (name, description) = match synthesized_description(agent_type, form) {
        Some(synthesized) => (None, Some(synthesized)),
        None => (form.name.clone(), form.description.clone()),
    };

    Some(UpdateServiceRequest {
        service_config_id,
        partial_service_template: PartialServiceTemplate {
            name,
            description,
            env_variables: backfill_env_variables(template, raw_env),
        },
    })
}

/// Drives one save attempt: reconcile, submit, refresh the service
/// list. A no-op when nothing is selected. Failure is terminal for the
/// attempt (logged, never retried) and the session always lands back
/// in `Idle`.
pub async fn save(
    session: &mut EditSession,
    backend: &dyn DeploymentLifecycle,
    deployment: Option<&Deployment>,
    agent_type: AgentType,
    form: &FormValues,
) {
    let Some(deployment) = deployment else {
        return;
    };
    let Some(request) = build_partial_update(deployment, agent_type, form) else {
        return;
    };
    if !session.begin_save() {
        return;
    }

    match backend.update_service(&request).await {
        Ok(()) => {
            info!(service = %deployment.name, "service template updated");
            if let Err(err) = backend.refetch_services().await {
                error!("failed to refresh services after update: {err:#}");
            }
        }
        Err(err) => {
            error!(service = %deployment.name, "service update failed: {err:#}");
        }
    }

    session.finish();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentsFunFormValues;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        updates: Mutex<Vec<UpdateServiceRequest>>,
        refetches: Mutex<u32>,
        fail_update: bool,
    }

    #[async_trait]
    impl DeploymentLifecycle for RecordingBackend {
        async fn update_service(&self, request: &UpdateServiceRequest) -> anyhow::Result<()> {
            self.updates.lock().unwrap().push(request.clone());
            if self.fail_update {
                anyhow::bail!("backend unavailable");
            }
            Ok(())
        }

        async fn stop_deployment(&self, _id: &str) -> anyhow::Result<()> {
            Ok(())
        }

        async fn start_service(&self, _id: &str) -> anyhow::Result<()> {
            Ok(())
        }

        async fn refetch_services(&self) -> anyhow::Result<Vec<Deployment>> {
            *self.refetches.lock().unwrap() += 1;
            Ok(vec![])
        }
    }

    fn trader_deployment() -> Deployment {
        Deployment {
            service_config_id: Some("sc-1".to_string()),
            name: "Trader Agent".to_string(),
        }
    }

    #[test]
    fn test_passthrough_backfills_exactly_submitted_keys() {
        let form = FormValues {
            env_variables: BTreeMap::from([
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]),
            ..Default::default()
        };
        let request =
            build_partial_update(&trader_deployment(), AgentType::PredictTrader, &form).unwrap();

        let env = &request.partial_service_template.env_variables;
        assert_eq!(env.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(env["a"].value, "1");
        assert_eq!(env["a"].provision_type, EnvProvisionType::User);
        assert_eq!(env["a"].name, "");
    }

    #[test]
    fn test_backfill_takes_provision_type_from_template() {
        let form = FormValues {
            env_variables: BTreeMap::from([(
                "TOOLS_ACCURACY_HASH".to_string(),
                "QmNew".to_string(),
            )]),
            ..Default::default()
        };
        let request =
            build_partial_update(&trader_deployment(), AgentType::PredictTrader, &form).unwrap();

        let spec = &request.partial_service_template.env_variables["TOOLS_ACCURACY_HASH"];
        assert_eq!(spec.value, "QmNew");
        assert_eq!(spec.provision_type, EnvProvisionType::Fixed);
        assert_eq!(spec.name, "Tools accuracy hash");
    }

    #[test]
    fn test_template_resolution_falls_back_to_agent_type() {
        // Deployment renamed by the user; agent type still resolves.
        let deployment = Deployment {
            service_config_id: Some("sc-2".to_string()),
            name: "My Trader".to_string(),
        };
        let template = resolve_template(&deployment.name, AgentType::Supafund).unwrap();
        assert_eq!(template.agent_type, AgentType::Supafund);
    }

    #[test]
    fn test_missing_service_config_id_yields_none() {
        let deployment = Deployment {
            service_config_id: None,
            name: "Trader Agent".to_string(),
        };
        assert!(build_partial_update(&deployment, AgentType::PredictTrader, &Default::default())
            .is_none());
    }

    #[test]
    fn test_derived_form_replaces_description_and_env() {
        let form = FormValues {
            description: Some("raw form description".to_string()),
            agents_fun: Some(AgentsFunFormValues {
                persona_description: "persona".to_string(),
                x_username: "handle".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let deployment = Deployment {
            service_config_id: Some("sc-3".to_string()),
            name: "Agents.Fun".to_string(),
        };
        let request = build_partial_update(&deployment, AgentType::AgentsFun, &form).unwrap();

        let partial = &request.partial_service_template;
        assert_eq!(partial.description.as_deref(), Some("Agents.Fun @handle"));
        assert!(partial.name.is_none());
        assert_eq!(partial.env_variables["PERSONA"].value, "persona");
        // PERSONA exists in the template, so the spec is backfilled.
        assert_eq!(
            partial.env_variables["PERSONA"].provision_type,
            EnvProvisionType::User
        );
        assert_eq!(partial.env_variables["PERSONA"].name, "Persona description");
    }

    #[tokio::test]
    async fn test_save_without_deployment_is_noop() {
        let backend = RecordingBackend::default();
        let mut session = EditSession::new();
        session.mark_dirty();

        save(
            &mut session,
            &backend,
            None,
            AgentType::PredictTrader,
            &Default::default(),
        )
        .await;

        assert!(backend.updates.lock().unwrap().is_empty());
        assert_eq!(*backend.refetches.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_submits_then_refreshes() {
        let backend = RecordingBackend::default();
        let mut session = EditSession::new();
        session.mark_dirty();

        save(
            &mut session,
            &backend,
            Some(&trader_deployment()),
            AgentType::PredictTrader,
            &Default::default(),
        )
        .await;

        assert_eq!(backend.updates.lock().unwrap().len(), 1);
        assert_eq!(*backend.refetches.lock().unwrap(), 1);
        assert!(!session.is_saving());
    }

    #[tokio::test]
    async fn test_save_failure_still_clears_saving_state() {
        let backend = RecordingBackend {
            fail_update: true,
            ..Default::default()
        };
        let mut session = EditSession::new();
        session.mark_dirty();

        save(
            &mut session,
            &backend,
            Some(&trader_deployment()),
            AgentType::PredictTrader,
            &Default::default(),
        )
        .await;

        assert!(!session.is_saving());
        assert!(!session.is_dirty());
        assert_eq!(*backend.refetches.lock().unwrap(), 0);
    }
}
