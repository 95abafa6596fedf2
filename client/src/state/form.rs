//! Submit lifecycle shared by the login and register forms.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Idle`, with the error slot set when a submission
//! fails. `begin` refuses a second submission while one is outstanding, which
//! is the only guard against double submits.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Phase plus the last failure of one form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState<E> {
    pub phase: SubmitPhase,
    pub error: Option<E>,
}

impl<E> Default for FormState<E> {
    fn default() -> Self {
        Self { phase: SubmitPhase::Idle, error: None }
    }
}

impl<E> FormState<E> {
    /// Start a submission. Clears the previous error. Returns `false`, leaving
    /// the state untouched, if a submission is already outstanding.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        self.error = None;
        true
    }

    pub fn succeed(&mut self) {
        self.phase = SubmitPhase::Idle;
    }

    pub fn fail(&mut self, error: E) {
        self.phase = SubmitPhase::Idle;
        self.error = Some(error);
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Submit button label for the current phase.
    pub fn submit_label(&self, idle: &'static str, busy: &'static str) -> &'static str {
        if self.is_submitting() { busy } else { idle }
    }
}
