//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, filter controls and code cards. Filter
//! state is read from the `Selection` signal in context; everything else is
//! passed in as props.

pub mod category_selector;
pub mod code_card;
pub mod example_tabs;
pub mod header;
pub mod language_selector;
pub mod site_footer;
