//! Category management
//!
//! A [`CategoryBoard`] holds the two-level category tree. Each list on the
//! page is driven by a [`CategoryStrategy`] whose [`Scope`] is either the
//! top-level list or the child list of one parent.
//!
//! ```text
//! CategoryBoard ──top_level_strategy()──► CategoryStrategy(TopLevelScope)
//!               └─nested_strategy()─────► CategoryStrategy(NestedScope { parent })
//! ```

pub mod board;
pub mod confirm;
pub mod scope;
pub mod strategy;

pub use board::{BoardState, CategoryBoard};
pub use confirm::{ConfirmationSlot, DeleteConfirmer, StaticConfirmer};
pub use scope::{CategoryScope, NestedScope, Scope, ScopeKind, TopLevelScope};
pub use strategy::CategoryStrategy;
