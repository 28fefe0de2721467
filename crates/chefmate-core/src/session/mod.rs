//! Cooking session state machine.
//!
//! A [`CookingSession`] owns the current position within a loaded recipe and
//! is the only writer of that position. Movement is requested through
//! [`advance`](CookingSession::advance), [`retreat`](CookingSession::retreat),
//! and [`seek`](CookingSession::seek); each returns a [`NavOutcome`] value the
//! caller renders or persists. Nothing here performs I/O.


use crate::models::{CompletionRecord, CookingStep, Recipe, SubStep};

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Cooking, at the given step and sub-step indices (both 0-based)
    InProgress { step: usize, sub_step: usize },
    /// All steps finished; the session accepts no further movement
    Completed,
}

/// Result of a single navigation operation.
#[derive(Debug, Clone, PartialEq)]
pub enum NavOutcome {
    /// Moved within the current step
    Moved { step: usize, sub_step: usize },
    /// Crossed into a different step; name and subtitle feed the step toast
    EnteredStep {
        step: usize,
        sub_step: usize,
        name: String,
        subtitle: String,
    },
    /// The final sub-step was advanced past; carries the one completion record
    Finished(CompletionRecord),
    /// Out-of-range or post-completion request, silently ignored
    Ignored,
}

/// An in-flight walk through one recipe.
#[derive(Debug, Clone)]
pub struct CookingSession {
    recipe: Recipe,
    state: SessionState,
}

impl CookingSession {
    /// Start a session at the first sub-step of the first step.
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            state: SessionState::InProgress {
                step: 0,
                sub_step: 0,
            },
        }
    }

    /// The recipe being cooked.
    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current `(step, sub_step)` indices, `None` once completed.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.state {
            SessionState::InProgress { step, sub_step } => Some((step, sub_step)),
            SessionState::Completed => None,
        }
    }

    /// Whether the session has finished.
    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed)
    }

    /// The step at the current position, `None` once completed.
    pub fn current_step(&self) -> Option<&CookingStep> {
        let (step, _) = self.position()?;
        self.recipe.steps.get(step)
    }

    /// The sub-step at the current position, `None` once completed.
    pub fn current_sub_step(&self) -> Option<&SubStep> {
        let (step, sub_step) = self.position()?;
        self.recipe.steps.get(step)?.sub_steps.get(sub_step)
    }

    /// Move forward one sub-step.
    ///
    /// Moves within the current step when possible, otherwise enters the next
    /// step at its first sub-step. Advancing past the final sub-step of the
    /// final step completes the session and produces the completion record;
    /// this happens at most once per session.
    pub fn advance(&mut self) -> NavOutcome {
        let Some((step, sub_step)) = self.position() else {
            return NavOutcome::Ignored;
        };
        let in_current = self.recipe.sub_steps_in(step).unwrap_or(0);

        if sub_step + 1 < in_current {
            let next = sub_step + 1;
            self.state = SessionState::InProgress {
                step,
                sub_step: next,
            };
            NavOutcome::Moved {
                step,
                sub_step: next,
            }
        } else if step + 1 < self.recipe.total_steps() {
            self.enter_step(step + 1, 0)
        } else {
            self.state = SessionState::Completed;
            NavOutcome::Finished(CompletionRecord::now(
                self.recipe.id.clone(),
                self.recipe.name.clone(),
            ))
        }
    }

    /// Move back one sub-step.
    ///
    /// Moves within the current step when possible, otherwise enters the
    /// previous step at its last sub-step. At the very start this is a
    /// silent no-op.
    pub fn retreat(&mut self) -> NavOutcome {
        let Some((step, sub_step)) = self.position() else {
            return NavOutcome::Ignored;
        };

        if sub_step > 0 {
            let prev = sub_step - 1;
            self.state = SessionState::InProgress {
                step,
                sub_step: prev,
            };
            NavOutcome::Moved {
                step,
                sub_step: prev,
            }
        } else if step > 0 {
            let target = step - 1;
            let last = self.recipe.sub_steps_in(target).unwrap_or(1) - 1;
            self.enter_step(target, last)
        } else {
            NavOutcome::Ignored
        }
    }

    /// Jump to the first sub-step of the given step.
    ///
    /// Out-of-range targets are silently ignored; external triggers may carry
    /// malformed indices.
    pub fn seek(&mut self, target_step: usize) -> NavOutcome {
        if self.is_completed() || target_step >= self.recipe.total_steps() {
            return NavOutcome::Ignored;
        }
        self.enter_step(target_step, 0)
    }

    fn enter_step(&mut self, step: usize, sub_step: usize) -> NavOutcome {
        self.state = SessionState::InProgress { step, sub_step };
        let entered = &self.recipe.steps[step];
        NavOutcome::EnteredStep {
            step,
            sub_step,
            name: entered.name.clone(),
            subtitle: entered.subtitle.clone(),
        }
    }
}
