//! Inventory list pipeline
//!
//! ```text
//! catalog ─► filter ─► projection ─► search ─► pagination ─► selection
//! ```
//!
//! Every stage is a pure function or a small value type; the
//! [`InventoryService`](crate::services::InventoryService) owns the state and
//! re-runs the stages after each mutation.

pub mod filter;
pub mod pagination;
pub mod projection;
pub mod search;
pub mod selection;

pub use pagination::{DEFAULT_ROWS_PER_PAGE, PageWindow, Paginator, ROWS_PER_PAGE_PRESETS};
pub use projection::DisplayProjection;
pub use selection::{SelectAllState, SelectionAction, SelectionTracker};
