use codesmith_core::CrewInputs;
use serde::{Deserialize, Serialize};

/// How the agent is allowed to execute generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeExecutionMode {
    /// Isolated execution; risky operations are blocked.
    Safe,
    /// Direct execution on the host. Not used by the stock coder agent.
    Unsafe,
}

/// Definition of one agent in the crew.
///
/// The textual fields may contain `{programming_language}` and `{question}`
/// placeholders, filled in from the request's [`CrewInputs`] at kickoff time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Short role label, e.g. "Senior {programming_language} developer".
    pub role: String,
    /// What the agent is trying to achieve.
    pub goal: String,
    /// Persona context handed to the model alongside role and goal.
    pub backstory: String,
    /// Whether the agent may run the code it generates.
    #[serde(default)]
    pub allow_code_execution: bool,
    /// Execution isolation mode.
    #[serde(default = "default_execution_mode")]
    pub code_execution_mode: CodeExecutionMode,
    /// Hard cap on a single execution, in seconds.
    #[serde(default = "default_max_execution_time")]
    pub max_execution_time_secs: u64,
    /// Retries the engine may attempt on transient failures.
    #[serde(default = "default_max_retry_limit")]
    pub max_retry_limit: u32,
}

fn default_execution_mode() -> CodeExecutionMode {
    CodeExecutionMode::Safe
}

fn default_max_execution_time() -> u64 {
    300
}

fn default_max_retry_limit() -> u32 {
    5
}

impl AgentSpec {
    /// The stock coding agent: generates code, runs it safely, reports output.
    pub fn coder() -> Self {
        Self {
            role: "Senior {programming_language} developer".to_string(),
            goal: "Write clean, working {programming_language} code for the given \
                   assignment, execute it, and report the exact output."
                .to_string(),
            backstory: "You are an experienced software engineer who writes idiomatic, \
                        well-tested {programming_language} code and always verifies it \
                        by running it before answering."
                .to_string(),
            allow_code_execution: true,
            code_execution_mode: CodeExecutionMode::Safe,
            max_execution_time_secs: 300,
            max_retry_limit: 5,
        }
    }

    /// Renders the agent's persona as a system prompt with placeholders filled.
    pub fn system_prompt(&self, inputs: &CrewInputs) -> String {
        let text = format!(
            "You are a {role}.\n\nGoal: {goal}\n\nBackstory: {backstory}",
            role = self.role,
            goal = self.goal,
            backstory = self.backstory,
        );
        interpolate(&text, inputs)
    }
}

/// Definition of one task in the crew.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    /// What needs to be done; supports the same placeholders as [`AgentSpec`].
    pub description: String,
    /// The contract for the answer, spelled out for the model.
    pub expected_output: String,
}

impl TaskSpec {
    /// The stock coding task: solve the assignment and answer with the
    /// four-field JSON contract.
    pub fn coding_task() -> Self {
        Self {
            description: "Write {programming_language} code that solves the following \
                          assignment, execute it, and capture the output.\n\n\
                          Assignment: {question}"
                .to_string(),
            expected_output: "A single JSON object with exactly these string fields: \
                              \"question\" (the assignment verbatim), \
                              \"programming_language\" (the language verbatim), \
                              \"code\" (the full source), and \
                              \"final_result\" (the output of executing the code, or an \
                              empty string if there was none). \
                              Answer with only the JSON object, no prose."
                .to_string(),
        }
    }

    /// Renders the task as the user prompt with placeholders filled.
    pub fn prompt(&self, inputs: &CrewInputs) -> String {
        let text = format!(
            "{description}\n\nExpected output: {expected}",
            description = self.description,
            expected = self.expected_output,
        );
        interpolate(&text, inputs)
    }
}

fn interpolate(template: &str, inputs: &CrewInputs) -> String {
    template
        .replace("{programming_language}", &inputs.programming_language)
        .replace("{question}", &inputs.question)
}
