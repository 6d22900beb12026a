//! Sign-in form aggregate state

use super::debounce::DebounceTimer;
use super::field::{FieldEvent, LoginField};
use std::time::{Duration, Instant};

/// Focusable elements of the sign-in card, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Email,
    Password,
    Submit,
}

/// What a submit attempt resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form is valid; forward these credentials
    Submit { email: String, password: String },
    /// Form is not valid; move focus to the first field needing correction
    RedirectFocus(FocusTarget),
}

/// The sign-in form: two fields, a focus cursor, and the debounced
/// aggregate validity flag.
///
/// Invariant: `form_valid` is only ever recomputed by the quiet timer
/// firing, as the AND of the two field validity flags (unevaluated counts
/// as invalid). Field events that change a validity flag rearm the timer.
#[derive(Debug)]
pub struct LoginForm {
    pub email: LoginField,
    pub password: LoginField,
    pub form_valid: bool,
    pub focus: FocusTarget,
    debounce: DebounceTimer,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::new_at(Instant::now())
    }

    /// Like `new`, with an explicit clock for tests
    pub fn new_at(now: Instant) -> Self {
        let mut debounce = DebounceTimer::new();
        // Arm once so the aggregate settles to its initial value after one
        // quiet period, keystrokes or not
        debounce.restart(now);
        Self {
            email: LoginField::email(),
            password: LoginField::password(),
            form_valid: false,
            focus: FocusTarget::default(),
            debounce,
        }
    }

    /// Route a field event to a field. Rearms the quiet timer when the
    /// event changed that field's validity flag.
    pub fn apply(&mut self, target: FocusTarget, event: FieldEvent, now: Instant) {
        let field = match target {
            FocusTarget::Email => &mut self.email,
            FocusTarget::Password => &mut self.password,
            FocusTarget::Submit => return,
        };
        let validity_before = field.is_valid;
        field.apply(event);
        if field.is_valid != validity_before {
            self.debounce.restart(now);
        }
    }

    /// Insert a typed character into the focused field
    pub fn input_char(&mut self, c: char, now: Instant) {
        if let Some(field) = self.focused_field() {
            let mut value = field.value.clone();
            value.push(c);
            self.apply(self.focus, FieldEvent::ValueChanged(value), now);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self, now: Instant) {
        if let Some(field) = self.focused_field() {
            if field.value.is_empty() {
                return;
            }
            let mut value = field.value.clone();
            value.pop();
            self.apply(self.focus, FieldEvent::ValueChanged(value), now);
        }
    }

    fn focused_field(&self) -> Option<&LoginField> {
        match self.focus {
            FocusTarget::Email => Some(&self.email),
            FocusTarget::Password => Some(&self.password),
            FocusTarget::Submit => None,
        }
    }

    /// Move focus to the next element in tab order
    pub fn focus_next(&mut self, now: Instant) {
        let next = match self.focus {
            FocusTarget::Email => FocusTarget::Password,
            FocusTarget::Password => FocusTarget::Submit,
            FocusTarget::Submit => FocusTarget::Email,
        };
        self.set_focus(next, now);
    }

    /// Move focus to the previous element in tab order
    pub fn focus_prev(&mut self, now: Instant) {
        let prev = match self.focus {
            FocusTarget::Email => FocusTarget::Submit,
            FocusTarget::Password => FocusTarget::Email,
            FocusTarget::Submit => FocusTarget::Password,
        };
        self.set_focus(prev, now);
    }

    /// Imperative focus move. The field losing focus gets a `FocusLost`
    /// event, so leaving a field always revalidates it.
    pub fn set_focus(&mut self, target: FocusTarget, now: Instant) {
        if target == self.focus {
            return;
        }
        let leaving = self.focus;
        self.focus = target;
        self.apply(leaving, FieldEvent::FocusLost, now);
    }

    /// Poll the quiet timer; recompute aggregate validity when it fires.
    /// Returns whether the recompute ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debounce.poll(now) {
            self.form_valid = self.email.is_known_valid() && self.password.is_known_valid();
            return true;
        }
        false
    }

    /// Time until the pending validity recompute; `None` when settled
    pub fn debounce_remaining(&self, now: Instant) -> Option<Duration> {
        self.debounce.time_remaining(now)
    }

    /// Drop any pending recompute; used on teardown
    pub fn cancel_pending(&mut self) {
        self.debounce.cancel();
    }

    /// Resolve a submit attempt against the current aggregate validity
    pub fn submit_outcome(&self) -> SubmitOutcome {
        if self.form_valid {
            SubmitOutcome::Submit {
                email: self.email.value.clone(),
                password: self.password.value.clone(),
            }
        } else if !self.email.is_known_valid() {
            SubmitOutcome::RedirectFocus(FocusTarget::Email)
        } else {
            SubmitOutcome::RedirectFocus(FocusTarget::Password)
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}
