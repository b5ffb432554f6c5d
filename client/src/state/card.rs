//! Per-card display toggles.
//!
//! Each code card owns one of these in a local signal; nothing outside the
//! card reads it.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

/// Local toggles for a single code card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardState {
    /// Explanation block expanded.
    pub show_explanation: bool,
    /// Compilation (vs. interpretation) label selected on the mode switch.
    pub compilation_view: bool,
}

impl CardState {
    pub fn toggle_explanation(&mut self) {
        self.show_explanation = !self.show_explanation;
    }

    pub fn toggle_compilation_view(&mut self) {
        self.compilation_view = !self.compilation_view;
    }

    #[must_use]
    pub fn details_label(self) -> &'static str {
        if self.show_explanation { "Hide Details" } else { "Show Details" }
    }

    #[must_use]
    pub fn mode_label(self) -> &'static str {
        if self.compilation_view { "Compilation" } else { "Interpretation" }
    }
}
