//! Active-tab resolution for an example's language tabs.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// Pick the tab to display.
///
/// The requested tab wins while it is still visible. Otherwise the first
/// visible tab is shown, and `None` means there is nothing to show.
#[must_use]
pub fn resolve_active_tab<'a>(requested: Option<&str>, visible: &[&'a str]) -> Option<&'a str> {
    requested
        .and_then(|wanted| visible.iter().copied().find(|tab| *tab == wanted))
        .or_else(|| visible.first().copied())
}
