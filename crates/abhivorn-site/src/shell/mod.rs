//! Persistent page frame: header navigation, scroll handling, and footer.

mod header;
mod layout;
mod nav;
pub mod render;
mod viewport;

pub use header::{HeaderNav, SCROLL_THRESHOLD_PX};
pub use layout::{LayoutShell, ScrollDirective, ScrollOutcome, ANCHOR_SCROLL_DELAY};
pub use nav::{mobile_entries, MobileEntry, NavLink, NAV_LINKS, PRIMARY_CTA};
pub use viewport::{ListenerId, Viewport};
