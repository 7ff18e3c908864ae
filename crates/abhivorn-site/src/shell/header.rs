use super::nav::NAV_LINKS;
use super::viewport::{ListenerId, Viewport};

/// Vertical offset past which the header switches to its opaque panel.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Menu and background state of the site header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderNav {
    active_dropdown: Option<&'static str>,
    mobile_open: bool,
    scrolled: bool,
    listener: Option<ListenerId>,
}

impl HeaderNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_dropdown(&self) -> Option<&'static str> {
        self.active_dropdown
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Opens the flyout of `label` if that link has one.
    pub fn pointer_enter(&mut self, label: &str) {
        if let Some(link) = NAV_LINKS
            .iter()
            .find(|link| link.label == label && link.has_dropdown())
        {
            self.active_dropdown = Some(link.label);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.active_dropdown = None;
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD_PX;
    }

    /// Closes every menu; runs on each route change regardless of what
    /// triggered it.
    pub fn reset_menus(&mut self) {
        self.active_dropdown = None;
        self.mobile_open = false;
    }

    /// Attaches the scroll listener once and syncs with the current offset.
    pub fn mount(&mut self, viewport: &mut dyn Viewport) {
        if self.listener.is_none() {
            self.listener = Some(viewport.add_scroll_listener());
        }
        self.on_scroll(viewport.scroll_offset());
    }

    pub fn unmount(&mut self, viewport: &mut dyn Viewport) {
        if let Some(id) = self.listener.take() {
            viewport.remove_scroll_listener(id);
        }
    }
}
