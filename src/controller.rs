use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use serde::Serialize;

use crate::llm::TextGenerator;
use crate::prompt::build_prompt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Outcome of one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummaryResult {
    Summary(String),
    /// Carries the user-facing message, never the cause.
    Failed(&'static str),
}

impl SummaryResult {
    /// What the page shows for this outcome.
    pub fn text(&self) -> &str {
        match self {
            SummaryResult::Summary(text) => text,
            SummaryResult::Failed(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SummaryResult::Summary(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControllerSnapshot {
    pub input: String,
    /// Empty until a submit completes.
    pub summary: String,
    pub loading: bool,
    pub phase: Phase,
}

#[derive(Default)]
struct ControllerState {
    input: String,
    summary: String,
    loading: bool,
    phase: Phase,
}

fn lock_state(state: &Mutex<ControllerState>) -> MutexGuard<'_, ControllerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the loading flag if a submit is dropped before it finishes, e.g.
/// when the client disconnects and the handler future is cancelled.
struct InFlight<'a> {
    state: &'a Mutex<ControllerState>,
    finished: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut state = lock_state(self.state);
        state.loading = false;
        state.phase = Phase::Idle;
        tracing::warn!("Summary request dropped before completion");
    }
}

/// Owns the input, loading flag and result for the page.
pub struct SummarizeController {
    generator: Arc<dyn TextGenerator>,
    state: Mutex<ControllerState>,
}

impl SummarizeController {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            state: Mutex::new(ControllerState::default()),
        }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        lock_state(&self.state)
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        let state = self.lock();
        ControllerSnapshot {
            input: state.input.clone(),
            summary: state.summary.clone(),
            loading: state.loading,
            phase: state.phase,
        }
    }

    /// Sends `input` through the prompt template to the generator and stores
    /// the outcome. Failures never escape; they are logged and replaced by the
    /// fixed message.
    pub async fn submit(&self, input: &str) -> SummaryResult {
        {
            let mut state = self.lock();
            state.input = input.to_string();
            state.summary.clear();
            state.loading = true;
            state.phase = Phase::Loading;
        }
        let mut in_flight = InFlight {
            state: &self.state,
            finished: false,
        };

        let prompt = build_prompt(input);
        tracing::info!(
            input_len = input.len(),
            model = self.generator.model(),
            "Submitting summary request"
        );
        let started = Instant::now();

        let result = match self.generator.generate(&prompt).await {
            Ok(text) => {
                tracing::info!(elapsed = ?started.elapsed(), "Summary received");
                SummaryResult::Summary(text)
            }
            Err(err) => {
                tracing::error!(error = %err, elapsed = ?started.elapsed(), "Error calling generative API");
                SummaryResult::Failed(err.user_message())
            }
        };

        in_flight.finished = true;
        let mut state = self.lock();
        state.summary = result.text().to_string();
        state.loading = false;
        state.phase = if result.is_success() {
            Phase::Succeeded
        } else {
            Phase::Failed
        };
        result
    }
}
