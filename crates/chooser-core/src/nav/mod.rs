//! Navigation logic.
//!
//! Back/forward [`history`], directory listing ([`lister`]), the
//! [`selection`] state machine, persisted [`favorites`], the [`shortcuts`]
//! panel model and fuzzy type-to-find ([`filter`]).

pub mod favorites;
pub mod filter;
pub mod history;
pub mod lister;
pub mod selection;
pub mod shortcuts;
