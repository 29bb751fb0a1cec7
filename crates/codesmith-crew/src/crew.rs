use crate::config::ModelConfig;
use crate::engine::{CrewEngine, EngineClient};
use crate::spec::{AgentSpec, TaskSpec};
use chrono::{DateTime, Utc};
use codesmith_core::schema::CodeResult;
use codesmith_core::{CodesmithError, CodesmithResult, CrewInputs};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// How the crew's tasks are ordered. Only one task exists today, so only
/// sequential execution is defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    /// Tasks execute one after another.
    #[default]
    Sequential,
}

/// The outcome of one completed crew run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewOutput {
    /// Request-scoped identifier, also used to key training records.
    pub request_id: Uuid,
    /// The engine's raw textual payload, before fence stripping.
    pub raw: String,
    /// The validated result record.
    pub result: CodeResult,
}

/// One line of the JSONL file written by [`Crew::train`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainRecord {
    /// Identifier of the recorded run; [`Crew::replay`] looks tasks up by it.
    pub task_id: Uuid,
    /// Zero-based iteration counter within the training session.
    pub iteration: u32,
    /// The inputs the run was kicked off with.
    pub inputs: CrewInputs,
    /// The validated result of the run.
    pub result: CodeResult,
    /// When the record was written.
    pub recorded_at: DateTime<Utc>,
}

/// Summary returned by [`Crew::test`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    /// Number of iterations attempted.
    pub iterations: u32,
    /// Runs that produced a valid [`CodeResult`].
    pub passed: u32,
    /// Runs that failed anywhere in the pipeline.
    pub failed: u32,
    /// Display text of the last failure, if any.
    pub last_error: Option<String>,
}

impl TestReport {
    /// True when every iteration passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// A crew of one coding agent and one coding task, bound to an engine.
///
/// The pipeline per request: interpolate the agent and task prompts, hand
/// them to the engine, strip any Markdown fences from the raw payload, parse
/// it as JSON, and validate it into a [`CodeResult`]. Either a complete,
/// valid record comes out or the request fails as a whole.
pub struct Crew {
    agent: AgentSpec,
    task: TaskSpec,
    process: Process,
    verbose: bool,
    engine: Box<dyn CrewEngine>,
}

impl Crew {
    /// Assembles the stock coding crew against the configured provider.
    pub fn coding(config: ModelConfig) -> Self {
        Self {
            agent: AgentSpec::coder(),
            task: TaskSpec::coding_task(),
            process: Process::Sequential,
            verbose: false,
            engine: Box::new(EngineClient::new(config)),
        }
    }

    /// Assembles a crew around a pre-built engine (for tests and custom backends).
    pub fn with_engine(agent: AgentSpec, task: TaskSpec, engine: Box<dyn CrewEngine>) -> Self {
        Self {
            agent,
            task,
            process: Process::Sequential,
            verbose: false,
            engine,
        }
    }

    /// Enables verbose payload logging.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The task ordering this crew uses.
    pub fn process(&self) -> Process {
        self.process
    }

    /// Runs one request to completion.
    pub async fn kickoff(&self, inputs: &CrewInputs) -> CodesmithResult<CrewOutput> {
        let request_id = Uuid::new_v4();
        info!(
            request_id = %request_id,
            language = %inputs.programming_language,
            "Crew kickoff"
        );

        let system_prompt = self.agent.system_prompt(inputs);
        let prompt = self.task.prompt(inputs);

        let raw = self.engine.kickoff(&system_prompt, &prompt).await?;
        if self.verbose {
            debug!(request_id = %request_id, raw = %raw, "Raw engine payload");
        }

        let payload = strip_code_fences(&raw);
        let value: serde_json::Value = serde_json::from_str(payload).map_err(|e| {
            CodesmithError::Crew(format!("engine returned an unparsable payload: {e}"))
        })?;
        let result = CodeResult::validate(&value)?;

        info!(request_id = %request_id, "Crew run validated");
        Ok(CrewOutput {
            request_id,
            raw,
            result,
        })
    }

    /// Runs `n_iterations` kickoffs and appends each validated run to
    /// `filename` as one JSON line. Records accumulate across sessions so
    /// [`Crew::replay`] can find earlier task ids; each line is written as
    /// its iteration completes, so a mid-session failure keeps the finished
    /// ones. Stops at the first failure.
    pub async fn train(
        &self,
        n_iterations: u32,
        filename: impl AsRef<Path>,
        inputs: &CrewInputs,
    ) -> CodesmithResult<Vec<TrainRecord>> {
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(filename.as_ref())
            .await?;

        let mut records = Vec::with_capacity(n_iterations as usize);

        for iteration in 0..n_iterations {
            info!(iteration, "Training iteration");
            let output = self.kickoff(inputs).await?;
            let record = TrainRecord {
                task_id: output.request_id,
                iteration,
                inputs: inputs.clone(),
                result: output.result,
                recorded_at: Utc::now(),
            };
            let mut line = serde_json::to_string(&record)?;
            line.push('\n');
            file.write_all(line.as_bytes()).await?;
            records.push(record);
        }

        file.flush().await?;
        info!(
            count = records.len(),
            file = %filename.as_ref().display(),
            "Training records appended"
        );
        Ok(records)
    }

    /// Re-runs the recorded task with the given id from a training file.
    pub async fn replay(
        &self,
        task_id: Uuid,
        filename: impl AsRef<Path>,
    ) -> CodesmithResult<CrewOutput> {
        let content = tokio::fs::read_to_string(filename.as_ref()).await?;

        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            let record: TrainRecord = serde_json::from_str(line)?;
            if record.task_id == task_id {
                info!(task_id = %task_id, "Replaying recorded task");
                return self.kickoff(&record.inputs).await;
            }
        }

        Err(CodesmithError::Crew(format!(
            "no recorded task with id {task_id} in {}",
            filename.as_ref().display()
        )))
    }

    /// Runs `n_iterations` kickoffs and reports how many produced a valid
    /// record. Failures are counted, not propagated.
    pub async fn test(&self, n_iterations: u32, inputs: &CrewInputs) -> TestReport {
        let mut passed = 0;
        let mut failed = 0;
        let mut last_error = None;

        for iteration in 0..n_iterations {
            match self.kickoff(inputs).await {
                Ok(_) => passed += 1,
                Err(e) => {
                    warn!(iteration, error = %e, "Test iteration failed");
                    failed += 1;
                    last_error = Some(e.to_string());
                }
            }
        }

        TestReport {
            iterations: n_iterations,
            passed,
            failed,
            last_error,
        }
    }
}

/// Strips a surrounding Markdown code fence (with optional info string,
/// e.g. ```` ```json ````) from the engine's payload.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(newline) = rest.find('\n') else {
        return trimmed;
    };
    let body = &rest[newline + 1..];
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_code_fences_handles_info_string() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn strip_code_fences_passes_bare_json_through() {
        let raw = "  {\"a\": 1}  ";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn strip_code_fences_without_closing_fence() {
        let raw = "```json\n{\"a\": 1}";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }
}
