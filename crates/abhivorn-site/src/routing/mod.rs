//! Path-to-page resolution and on-demand page loading.

mod loader;
mod location;
mod page;
mod table;

pub use loader::{LoadError, LoadState, PageLoader, PageSource};
pub use location::Location;
pub use page::PageId;
pub use table::{RouteEntry, RouteMatch, RoutePattern, RouteTable, RouteTableError};
