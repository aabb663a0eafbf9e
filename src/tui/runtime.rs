//! TUI application state: the form, the loaded case, and the live result.

use crate::balance::{InputField, ProcessInputs};
use crate::config::CaseConfig;
use crate::report::CaseReport;

/// TUI application state.
///
/// Every edit recomputes [`App::report`] from the current inputs, so the
/// panels always show the balance of what is on the form.
pub struct App {
    /// Case the form was loaded from (kept for reset).
    case: CaseConfig,
    /// Current form values.
    pub inputs: ProcessInputs,
    /// Index into [`InputField::ALL`] of the highlighted row.
    pub selected: usize,
    /// Balance of the current inputs.
    pub report: CaseReport,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates a new app with the form filled from `case`.
    pub fn new(case: CaseConfig) -> Self {
        let inputs = case.inputs();
        let report = CaseReport::new(case.display_name(), inputs);
        Self {
            case,
            inputs,
            selected: 0,
            report,
            quit: false,
        }
    }

    /// Name of the loaded case.
    pub fn case_name(&self) -> &str {
        self.case.display_name()
    }

    pub fn selected_field(&self) -> InputField {
        InputField::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % InputField::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(InputField::ALL.len() - 1);
    }

    /// Adjusts the selected field by `steps` increments and recomputes.
    pub fn nudge(&mut self, steps: i32) {
        self.selected_field().nudge(&mut self.inputs, steps);
        self.recompute();
    }

    /// Returns `true` when `field` differs from the loaded case.
    pub fn is_edited(&self, field: InputField) -> bool {
        field.get(&self.inputs) != field.get(&self.case.inputs())
    }

    /// Loads a preset into the form, keeping the selected row.
    pub fn load_preset(&mut self, name: &str) {
        let Ok(case) = CaseConfig::from_preset(name) else {
            return;
        };
        self.case = case;
        self.reset();
    }

    /// Restores the form to the loaded case.
    pub fn reset(&mut self) {
        self.inputs = self.case.inputs();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.report = CaseReport::new(self.case.display_name(), self.inputs);
    }
}
