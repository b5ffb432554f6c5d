//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Filter state (`catalog::Selection`) is shared through context. The modules
//! here hold state that is local to a single card or tab strip.

pub mod card;
pub mod tabs;
