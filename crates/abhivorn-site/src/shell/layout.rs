use std::time::Duration;

use super::header::HeaderNav;
use super::viewport::Viewport;
use crate::routing::Location;

/// Wait before looking up an anchor target; targets may mount after the
/// navigation itself.
pub const ANCHOR_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// What the shell does with the document's scroll position after a
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollDirective {
    Top,
    Anchor { id: String, delay: Duration },
}

impl ScrollDirective {
    pub fn for_location(location: &Location) -> Self {
        match location.fragment() {
            Some(id) => ScrollDirective::Anchor {
                id: id.to_string(),
                delay: ANCHOR_SCROLL_DELAY,
            },
            None => ScrollDirective::Top,
        }
    }

    pub fn anchor(&self) -> Option<&str> {
        match self {
            ScrollDirective::Anchor { id, .. } => Some(id),
            ScrollDirective::Top => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollOutcome {
    Idle,
    ScrolledToTop,
    ScrolledToAnchor(String),
    /// The anchor target was still absent once the delay elapsed. There is
    /// no second attempt.
    AnchorMissing(String),
}

/// Frame wrapped around every page. Owns the header state and the scroll
/// listener for as long as it is mounted.
#[derive(Debug, Default)]
pub struct LayoutShell {
    header: HeaderNav,
    location: Option<Location>,
    pending: Option<ScrollDirective>,
}

impl LayoutShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &HeaderNav {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut HeaderNav {
        &mut self.header
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn mount(&mut self, viewport: &mut dyn Viewport) {
        self.header.mount(viewport);
    }

    pub fn unmount(&mut self, viewport: &mut dyn Viewport) {
        self.header.unmount(viewport);
        self.pending = None;
    }

    pub fn on_scroll(&mut self, viewport: &dyn Viewport) {
        self.header.on_scroll(viewport.scroll_offset());
    }

    /// Records a path change, closes all menus, and returns the scroll
    /// directive that [`LayoutShell::settle`] will carry out.
    pub fn navigate(&mut self, location: Location) -> ScrollDirective {
        self.header.reset_menus();
        let directive = ScrollDirective::for_location(&location);
        self.location = Some(location);
        self.pending = Some(directive.clone());
        directive
    }

    pub async fn settle<V>(&mut self, viewport: &mut V) -> ScrollOutcome
    where
        V: Viewport + ?Sized,
    {
        match self.pending.take() {
            None => ScrollOutcome::Idle,
            Some(ScrollDirective::Top) => {
                viewport.scroll_to_top();
                ScrollOutcome::ScrolledToTop
            }
            Some(ScrollDirective::Anchor { id, delay }) => {
                tokio::time::sleep(delay).await;
                if viewport.scroll_into_view(&id) {
                    ScrollOutcome::ScrolledToAnchor(id)
                } else {
                    tracing::warn!(anchor = %id, "anchor target not mounted after scroll delay");
                    ScrollOutcome::AnchorMissing(id)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::viewport::ListenerId;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeViewport {
        offset: f64,
        elements: Arc<Mutex<HashSet<String>>>,
        scrolled_into: Option<String>,
        listeners: HashSet<ListenerId>,
        next_listener: u64,
    }

    impl FakeViewport {
        fn with_elements(ids: &[&str]) -> Self {
            let viewport = Self::default();
            viewport
                .elements
                .lock()
                .expect("elements mutex")
                .extend(ids.iter().map(|id| id.to_string()));
            viewport
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn scroll_to_top(&mut self) {
            self.offset = 0.0;
            self.scrolled_into = None;
        }

        fn scroll_into_view(&mut self, id: &str) -> bool {
            let present = self.elements.lock().expect("elements mutex").contains(id);
            if present {
                self.scrolled_into = Some(id.to_string());
                self.offset = 1200.0;
            }
            present
        }

        fn add_scroll_listener(&mut self) -> ListenerId {
            self.next_listener += 1;
            let id = ListenerId(self.next_listener);
            self.listeners.insert(id);
            id
        }

        fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
            self.listeners.remove(&id)
        }
    }

    #[tokio::test]
    async fn navigation_without_fragment_returns_to_top() {
        let mut viewport = FakeViewport::default();
        viewport.offset = 840.0;
        let mut shell = LayoutShell::new();

        let directive = shell.navigate(Location::parse("/about"));
        assert_eq!(directive, ScrollDirective::Top);
        assert_eq!(shell.settle(&mut viewport).await, ScrollOutcome::ScrolledToTop);
        assert_eq!(viewport.scroll_offset(), 0.0);
        assert_eq!(shell.settle(&mut viewport).await, ScrollOutcome::Idle);
    }

    #[tokio::test]
    async fn every_navigation_closes_open_menus() {
        let mut shell = LayoutShell::new();
        for path in ["/", "/services#custom", "/careers", "/missing"] {
            shell.header_mut().toggle_mobile();
            shell.header_mut().pointer_enter("Products");
            shell.navigate(Location::parse(path));
            assert!(!shell.header().is_mobile_open(), "{path}");
            assert_eq!(shell.header().active_dropdown(), None, "{path}");
        }

        shell.navigate(Location::parse("/"));
        assert!(!shell.header().is_mobile_open());
    }

    #[tokio::test(start_paused = true)]
    async fn anchor_scroll_waits_for_the_delay() {
        let mut viewport = FakeViewport::with_elements(&[]);
        let elements = viewport.elements.clone();
        let mut shell = LayoutShell::new();

        shell.navigate(Location::parse("/careers#apply"));
        let late_mount = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(40)).await;
            elements.lock().expect("elements mutex").insert("apply".to_string());
        });

        let started = tokio::time::Instant::now();
        let outcome = shell.settle(&mut viewport).await;
        late_mount.await.expect("mount task");

        assert!(started.elapsed() >= ANCHOR_SCROLL_DELAY);
        assert_eq!(outcome, ScrollOutcome::ScrolledToAnchor("apply".to_string()));
        assert_eq!(viewport.scrolled_into.as_deref(), Some("apply"));
        assert_ne!(viewport.scroll_offset(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn anchor_mounted_after_the_delay_is_missed() {
        let mut viewport = FakeViewport::with_elements(&[]);
        let elements = viewport.elements.clone();
        let mut shell = LayoutShell::new();

        shell.navigate(Location::parse("/services#custom"));
        let slow_mount = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(250)).await;
            elements.lock().expect("elements mutex").insert("custom".to_string());
        });

        let outcome = shell.settle(&mut viewport).await;
        assert_eq!(outcome, ScrollOutcome::AnchorMissing("custom".to_string()));
        slow_mount.await.expect("mount task");
        assert_eq!(viewport.scrolled_into, None);
    }

    #[test]
    fn scroll_listener_lives_with_the_mount() {
        let mut viewport = FakeViewport::default();
        viewport.offset = 64.0;
        let mut shell = LayoutShell::new();

        shell.mount(&mut viewport);
        shell.mount(&mut viewport);
        assert_eq!(viewport.listeners.len(), 1, "listener attached once");
        assert!(shell.header().is_scrolled());

        viewport.offset = 4.0;
        shell.on_scroll(&viewport);
        assert!(!shell.header().is_scrolled());

        shell.unmount(&mut viewport);
        assert!(viewport.listeners.is_empty());
        assert!(!shell.header().is_mounted());
    }
}
