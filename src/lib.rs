//! holdem-scenario: deck-state and selection engine for configuring
//! Texas Hold'em equity simulations.
//!
//! Goals:
//! - Two disjoint card groups (hole cards, table cards) over one 52-card deck
//! - Incremental card construction from separate rank/suit picks
//! - Random fills without replacement with flop/turn/river semantics
//! - URL-safe serialization of the configured scenario for the backend
//! - No panics for invalid input; best-effort UI inputs are signalled no-ops
//!
//! ## Quick start: configure and serialize a scenario
//! ```
//! use holdem_scenario::scenario::{build_request, Scenario};
//! use holdem_scenario::selection::{GroupId, SelectionStore};
//!
//! let mut store = SelectionStore::new();
//! store.set_pending_rank(GroupId::Player, "A");
//! store.set_pending_suit(GroupId::Player, "S");
//! store.set_pending_rank(GroupId::Player, "K");
//! store.set_pending_suit(GroupId::Player, "S");
//!
//! let scenario = Scenario::from_store(&store, 10_000, false);
//! assert_eq!(build_request(&scenario), "/simulate?players=5&yours=AS%2CKS&simcount=10000");
//! ```

pub mod cards;
pub mod deck;
pub mod potodds;
pub mod scenario;
pub mod selection;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
