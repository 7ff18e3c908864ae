/// Handle returned when a scroll listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The document surface the shell drives.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;
    fn scroll_to_top(&mut self);
    /// Smooth-scrolls the element with `id` into view; `false` when no such
    /// element is mounted.
    fn scroll_into_view(&mut self, id: &str) -> bool;
    fn add_scroll_listener(&mut self) -> ListenerId;
    fn remove_scroll_listener(&mut self, id: ListenerId) -> bool;
}
