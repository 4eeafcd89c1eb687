//! Process-backed planning collaborator.
//!
//! The configured program is started once per stage. It receives a JSON
//! request on stdin and must print a JSON object on stdout and exit with
//! status 0. Debug lines around the object are tolerated.

use std::{io::ErrorKind, process::Stdio, time::Duration};

use async_trait::async_trait;
use log::debug;
use serde_json::{json, Value};
use stride_core::{
    Collaborator, CollaboratorPlan, CollaboratorResultExt, CollaboratorStage, PlanRequest,
    Result, RunOutput, StrideError,
};
use tokio::{io::AsyncWriteExt, process::Command};

use crate::config::CollaboratorConfig;

/// Runs an external program for each collaborator stage.
#[derive(Debug, Clone)]
pub struct CommandCollaborator {
    program: String,
    args: Vec<String>,
}

impl CommandCollaborator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    async fn invoke(&self, stage: CollaboratorStage, request: &Value) -> Result<Value> {
        debug!("Starting collaborator '{}' for {stage}", self.program);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .stage_context(stage)?;

        let payload = serde_json::to_vec(request)?;
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&payload).await {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("Collaborator closed stdin early");
                }
                result => result.stage_context(stage)?,
            }
        }

        let output = child.wait_with_output().await.stage_context(stage)?;
        if !output.status.success() {
            return Err(StrideError::collaborator(stage)
                .with_message(format!("process exited with {}", output.status)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let document = extract_json_object(&stdout).ok_or_else(|| {
            StrideError::collaborator(stage).with_message("no JSON object in output")
        })?;

        serde_json::from_str(document).stage_context(stage)
    }
}

#[async_trait]
impl Collaborator for CommandCollaborator {
    async fn generate_plan(&self, request: &PlanRequest) -> Result<CollaboratorPlan> {
        let request = json!({
            "stage": "generate",
            "prompt": request.prompt,
            "end_user": request.attribution,
        });
        let document = self.invoke(CollaboratorStage::Generate, &request).await?;
        Ok(CollaboratorPlan::from_json(document))
    }

    async fn run_plan(&self, plan: &CollaboratorPlan) -> Result<RunOutput> {
        let request = json!({
            "stage": "run",
            "plan": plan.body,
        });
        let document = self.invoke(CollaboratorStage::Run, &request).await?;
        Ok(RunOutput::from_json(document))
    }
}

/// Applies a per-stage deadline to another collaborator.
pub struct TimeoutCollaborator<C> {
    inner: C,
    limit: Duration,
}

impl<C> TimeoutCollaborator<C> {
    pub fn new(inner: C, limit: Duration) -> Self {
        Self { inner, limit }
    }

    fn expired(&self, stage: CollaboratorStage) -> StrideError {
        StrideError::collaborator(stage)
            .with_message(format!("timed out after {}s", self.limit.as_secs()))
    }
}

#[async_trait]
impl<C: Collaborator> Collaborator for TimeoutCollaborator<C> {
    async fn generate_plan(&self, request: &PlanRequest) -> Result<CollaboratorPlan> {
        tokio::time::timeout(self.limit, self.inner.generate_plan(request))
            .await
            .map_err(|_| self.expired(CollaboratorStage::Generate))?
    }

    async fn run_plan(&self, plan: &CollaboratorPlan) -> Result<RunOutput> {
        tokio::time::timeout(self.limit, self.inner.run_plan(plan))
            .await
            .map_err(|_| self.expired(CollaboratorStage::Run))?
    }
}

/// Builds the configured collaborator with its timeout applied.
pub fn from_config(config: &CollaboratorConfig) -> TimeoutCollaborator<CommandCollaborator> {
    TimeoutCollaborator::new(
        CommandCollaborator::new(config.command.clone(), config.args.clone()),
        Duration::from_secs(config.timeout_secs),
    )
}

/// Returns the span from the first `{` to the last `}`, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_object() {
        assert_eq!(extract_json_object(r#"{"a":1}"#), Some(r#"{"a":1}"#));
        assert_eq!(
            extract_json_object("[DEBUG] starting\n{\"a\":{\"b\":2}}\n[DEBUG] done"),
            Some("{\"a\":{\"b\":2}}")
        );
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} {"), None);
    }

    struct Stalled;

    #[async_trait]
    impl Collaborator for Stalled {
        async fn generate_plan(&self, _request: &PlanRequest) -> Result<CollaboratorPlan> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(CollaboratorPlan::from_json(json!({})))
        }

        async fn run_plan(&self, _plan: &CollaboratorPlan) -> Result<RunOutput> {
            Ok(RunOutput::from_json(json!({})))
        }
    }

    #[tokio::test]
    async fn test_timeout_is_a_collaborator_error() {
        let collaborator = TimeoutCollaborator::new(Stalled, Duration::from_millis(10));
        let request = PlanRequest {
            prompt: "plan".to_string(),
            attribution: None,
        };

        let err = collaborator.generate_plan(&request).await.unwrap_err();
        assert!(matches!(
            err,
            StrideError::Collaborator {
                stage: CollaboratorStage::Generate,
                ..
            }
        ));
        assert!(collaborator.run_plan(&CollaboratorPlan::from_json(json!({}))).await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_collaborator_round_trip() {
        let collaborator = CommandCollaborator::new(
            "sh",
            vec![
                "-c".to_string(),
                r#"cat > /dev/null; echo '[debug] thinking'; echo '{"id":"plan-1","steps":[]}'"#
                    .to_string(),
            ],
        );
        let request = PlanRequest {
            prompt: "plan".to_string(),
            attribution: None,
        };

        let plan = collaborator.generate_plan(&request).await.unwrap();
        assert_eq!(plan.id.as_deref(), Some("plan-1"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_collaborator_failure_exit() {
        let collaborator = CommandCollaborator::new("false", Vec::new());
        let plan = CollaboratorPlan::from_json(json!({}));
        let err = collaborator.run_plan(&plan).await.unwrap_err();
        assert!(err.to_string().contains("plan execution"));
    }
}
