//! Two-field input wizard: project name, then module path.
//!
//! [`Wizard`] is the pure state machine; [`run`] drives it from a line
//! reader. The generator never sees the wizard, only the resulting
//! [`WizardOutcome`].

use std::io::{self, BufRead, Write};

use goat_core::{ProjectConfig, Stack};

/// Where the wizard is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    CollectingProjectName,
    CollectingModuleName,
    Done,
    Cancelled,
}

impl WizardState {
    pub fn is_terminal(self) -> bool {
        matches!(self, WizardState::Done | WizardState::Cancelled)
    }
}

/// A single input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Accept `value` for the current field and move on.
    Confirm(String),
    /// Abort from any state.
    Cancel,
}

/// What the caller gets once the wizard stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed {
        project_name: String,
        module_name: String,
    },
    Cancelled,
}

impl WizardOutcome {
    /// Config for `stack`, or `None` when the user cancelled.
    pub fn into_config(self, stack: Stack) -> Option<ProjectConfig> {
        match self {
            WizardOutcome::Completed {
                project_name,
                module_name,
            } => Some(ProjectConfig::for_stack(project_name, module_name, stack)),
            WizardOutcome::Cancelled => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    project_name: String,
    module_name: String,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Wizard {
            state: WizardState::CollectingProjectName,
            project_name: String::new(),
            module_name: String::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Prompt for the field being collected; `None` once finished.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            WizardState::CollectingProjectName => Some("Project name:"),
            WizardState::CollectingModuleName => Some("Module path:"),
            WizardState::Done | WizardState::Cancelled => None,
        }
    }

    /// Apply one event. Terminal states ignore further input.
    pub fn handle(&mut self, event: WizardEvent) -> WizardState {
        self.state = match (self.state, event) {
            (state, _) if state.is_terminal() => state,
            (_, WizardEvent::Cancel) => WizardState::Cancelled,
            (WizardState::CollectingProjectName, WizardEvent::Confirm(value)) => {
                self.project_name = value;
                WizardState::CollectingModuleName
            }
            (WizardState::CollectingModuleName, WizardEvent::Confirm(value)) => {
                self.module_name = value;
                WizardState::Done
            }
            (state, WizardEvent::Confirm(_)) => state,
        };
        self.state
    }

    /// Final result, or `None` while still collecting.
    pub fn outcome(&self) -> Option<WizardOutcome> {
        match self.state {
            WizardState::Done => Some(WizardOutcome::Completed {
                project_name: self.project_name.clone(),
                module_name: self.module_name.clone(),
            }),
            WizardState::Cancelled => Some(WizardOutcome::Cancelled),
            _ => None,
        }
    }
}

/// Drive a [`Wizard`] from `input`, one line per field.
///
/// End of input cancels.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<WizardOutcome> {
    let mut wizard = Wizard::new();
    loop {
        if let Some(outcome) = wizard.outcome() {
            return Ok(outcome);
        }
        if let Some(prompt) = wizard.prompt() {
            writeln!(output, "{prompt}")?;
            output.flush()?;
        }

        let mut line = String::new();
        let event = if input.read_line(&mut line)? == 0 {
            WizardEvent::Cancel
        } else {
            WizardEvent::Confirm(line.trim().to_string())
        };
        wizard.handle(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm(v: &str) -> WizardEvent {
        WizardEvent::Confirm(v.to_string())
    }

    #[test]
    fn starts_collecting_project_name() {
        let wizard = Wizard::new();
        assert_eq!(wizard.state(), WizardState::CollectingProjectName);
        assert_eq!(wizard.prompt(), Some("Project name:"));
        assert!(wizard.outcome().is_none());
    }

    #[test]
    fn confirm_advances_through_both_fields() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.handle(confirm("demo")), WizardState::CollectingModuleName);
        assert_eq!(wizard.prompt(), Some("Module path:"));
        assert_eq!(wizard.handle(confirm("example.com/demo")), WizardState::Done);
        assert_eq!(
            wizard.outcome(),
            Some(WizardOutcome::Completed {
                project_name: "demo".to_string(),
                module_name: "example.com/demo".to_string(),
            })
        );
    }

    #[test]
    fn cancel_aborts_from_either_field() {
        let mut first = Wizard::new();
        assert_eq!(first.handle(WizardEvent::Cancel), WizardState::Cancelled);

        let mut second = Wizard::new();
        second.handle(confirm("demo"));
        assert_eq!(second.handle(WizardEvent::Cancel), WizardState::Cancelled);
        assert_eq!(second.outcome(), Some(WizardOutcome::Cancelled));
    }

    #[test]
    fn terminal_states_ignore_events() {
        let mut done = Wizard::new();
        done.handle(confirm("a"));
        done.handle(confirm("b"));
        assert_eq!(done.handle(WizardEvent::Cancel), WizardState::Done);

        let mut cancelled = Wizard::new();
        cancelled.handle(WizardEvent::Cancel);
        assert_eq!(cancelled.handle(confirm("x")), WizardState::Cancelled);
    }

    #[test]
    fn cancelled_outcome_yields_no_config() {
        assert!(WizardOutcome::Cancelled.into_config(Stack::Gin).is_none());
    }

    #[test]
    fn completed_outcome_uses_stack_templates() {
        let cfg = WizardOutcome::Completed {
            project_name: "demo".to_string(),
            module_name: "example.com/demo".to_string(),
        }
        .into_config(Stack::Gin)
        .expect("config");
        assert_eq!(cfg.templates, Stack::Gin.templates());
    }

    #[test]
    fn run_reads_one_line_per_field() {
        let mut out = Vec::new();
        let outcome = run(&b"demo\r\nexample.com/demo\n"[..], &mut out).unwrap();
        assert_eq!(
            outcome,
            WizardOutcome::Completed {
                project_name: "demo".to_string(),
                module_name: "example.com/demo".to_string(),
            }
        );
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Project name:"));
        assert!(shown.contains("Module path:"));
    }

    #[test]
    fn run_treats_end_of_input_as_cancel() {
        let outcome = run(&b"demo\n"[..], std::io::sink()).unwrap();
        assert_eq!(outcome, WizardOutcome::Cancelled);
    }

    #[test]
    fn run_passes_empty_values_through() {
        let outcome = run(&b"\n\n"[..], std::io::sink()).unwrap();
        assert_eq!(
            outcome,
            WizardOutcome::Completed {
                project_name: String::new(),
                module_name: String::new(),
            }
        );
    }
}
