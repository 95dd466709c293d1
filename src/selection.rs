use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::str::FromStr;

/// A full hand of hole cards.
pub const PLAYER_CARDS_MAX: usize = 2;
/// A full board (river).
pub const TABLE_CARDS_MAX: usize = 5;
/// A game needs at least two players.
pub const MIN_PLAYERS: u32 = 2;

/// Names one of the two selection groups sharing the 52-card universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupId {
    Player,
    Table,
}

impl GroupId {
    /// Target maximum size of the group.
    pub const fn capacity(self) -> usize {
        match self {
            GroupId::Player => PLAYER_CARDS_MAX,
            GroupId::Table => TABLE_CARDS_MAX,
        }
    }
}

/// Result of a pending-selection setter. Illegal input never errors; the
/// outcome tells the caller what (if anything) changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOutcome {
    /// Input was not a legal rank/suit; nothing changed.
    Ignored,
    /// Component stored; the card is not complete yet.
    Incomplete,
    /// Card complete but already taken somewhere; pending retained unchanged.
    Duplicate,
    /// Card committed to the group; pending state cleared.
    Committed(Card),
}

/// A half-built card: rank and suit picked independently, in either order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingCard {
    rank: Option<Rank>,
    suit: Option<Suit>,
}

impl PendingCard {
    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub fn is_empty(&self) -> bool {
        self.rank.is_none() && self.suit.is_none()
    }

    /// The completed card, once both components are set.
    pub fn card(&self) -> Option<Card> {
        match (self.rank, self.suit) {
            (Some(r), Some(s)) => Some(Card::new(r, s)),
            _ => None,
        }
    }

    fn clear(&mut self) {
        self.rank = None;
        self.suit = None;
    }
}

/// Inbound configuration consumed at session start, e.g. from a deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSetup {
    pub players: u32,
    pub your_cards: Vec<Card>,
    pub table_cards: Vec<Card>,
    pub simulation_count: u32,
}

impl Default for SessionSetup {
    fn default() -> Self {
        Self { players: 5, your_cards: Vec::new(), table_cards: Vec::new(), simulation_count: 10_000 }
    }
}

/// The session's deck and selection state: the player's hole cards, the
/// shared table cards, one pending pick per group, and the player count.
///
/// The two groups are disjoint subsets of the 52-card universe; every
/// mutation preserves that. All operations are total: illegal input maps to
/// a signalled no-op, never a panic.
///
/// ```
/// use holdem_scenario::selection::{GroupId, PendingOutcome, SelectionStore};
///
/// let mut store = SelectionStore::new();
/// store.set_pending_rank(GroupId::Player, "A");
/// let outcome = store.set_pending_suit(GroupId::Player, "S");
/// assert!(matches!(outcome, PendingOutcome::Committed(_)));
/// assert_eq!(store.cards(GroupId::Player).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    player_cards: Vec<Card>,
    table_cards: Vec<Card>,
    pending_player: PendingCard,
    pending_table: PendingCard,
    player_count: u32,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    /// Empty store with the default player count.
    pub fn new() -> Self {
        Self {
            player_cards: Vec::new(),
            table_cards: Vec::new(),
            pending_player: PendingCard::default(),
            pending_table: PendingCard::default(),
            player_count: SessionSetup::default().players,
        }
    }

    /// Build a store from externally supplied initial values.
    ///
    /// Deep-link input is best-effort: the player count is clamped to the
    /// two-player floor, and any initial card that would duplicate one
    /// already taken or overflow its group is skipped silently.
    pub fn from_setup(setup: &SessionSetup) -> Self {
        let mut store = Self::new();
        store.player_count = setup.players.max(MIN_PLAYERS);
        for &card in &setup.your_cards {
            store.try_push(GroupId::Player, card);
        }
        for &card in &setup.table_cards {
            store.try_push(GroupId::Table, card);
        }
        store
    }

    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    pub fn more_players(&mut self) {
        self.player_count += 1;
    }

    /// Decrement the player count, clamped at the two-player floor.
    pub fn fewer_players(&mut self) {
        self.player_count = self.player_count.saturating_sub(1).max(MIN_PLAYERS);
    }

    pub fn cards(&self, group: GroupId) -> &[Card] {
        match group {
            GroupId::Player => &self.player_cards,
            GroupId::Table => &self.table_cards,
        }
    }

    pub fn is_empty(&self, group: GroupId) -> bool {
        self.cards(group).is_empty()
    }

    /// True once the group has reached its target maximum size.
    pub fn is_full(&self, group: GroupId) -> bool {
        self.cards(group).len() >= group.capacity()
    }

    /// True if the card is assigned to either group.
    pub fn is_taken(&self, card: Card) -> bool {
        self.player_cards.contains(&card) || self.table_cards.contains(&card)
    }

    pub fn pending(&self, group: GroupId) -> &PendingCard {
        match group {
            GroupId::Player => &self.pending_player,
            GroupId::Table => &self.pending_table,
        }
    }

    /// Reset both components of the group's pending pick.
    pub fn clear_pending(&mut self, group: GroupId) {
        self.pending_mut(group).clear();
    }

    /// Set the rank component of the group's pending pick.
    ///
    /// Unparseable input is ignored with no state change. Once both
    /// components are set the card commits automatically, unless it is
    /// already taken, in which case the pending pick is retained unchanged
    /// so the user can correct it.
    pub fn set_pending_rank(&mut self, group: GroupId, rank: &str) -> PendingOutcome {
        let Ok(rank) = Rank::from_str(rank) else {
            return PendingOutcome::Ignored;
        };
        self.pending_mut(group).rank = Some(rank);
        self.try_commit(group)
    }

    /// Set the suit component of the group's pending pick. Same commit
    /// semantics as [`set_pending_rank`](Self::set_pending_rank).
    pub fn set_pending_suit(&mut self, group: GroupId, suit: &str) -> PendingOutcome {
        let Ok(suit) = Suit::from_str(suit) else {
            return PendingOutcome::Ignored;
        };
        self.pending_mut(group).suit = Some(suit);
        self.try_commit(group)
    }

    /// Remove the most recently added card from the group, if any.
    pub fn remove_last(&mut self, group: GroupId) -> Option<Card> {
        self.cards_mut(group).pop()
    }

    /// The universe minus both groups, in canonical deck order.
    pub fn remaining_pack(&self) -> Vec<Card> {
        Deck::standard()
            .cards()
            .iter()
            .copied()
            .filter(|&c| !self.is_taken(c))
            .collect()
    }

    /// Top the group up to `desired` cards with uniform draws, without
    /// replacement, from the remaining pack. Draws as many as the pack can
    /// supply; appends in draw order. Returns the cards added.
    pub fn fill_random_with<R: Rng + ?Sized>(
        &mut self,
        group: GroupId,
        desired: usize,
        rng: &mut R,
    ) -> Vec<Card> {
        let needed = desired.saturating_sub(self.cards(group).len());
        let mut pack = self.remaining_pack();
        let mut drawn = Vec::with_capacity(needed.min(pack.len()));
        while drawn.len() < needed && !pack.is_empty() {
            let idx = rng.random_range(0..pack.len());
            drawn.push(pack.remove(idx));
        }
        log::debug!("random fill: {:?} wanted {}, drew {}", group, needed, drawn.len());
        self.cards_mut(group).extend(drawn.iter().copied());
        drawn
    }

    /// Random fill using the process RNG.
    pub fn fill_random(&mut self, group: GroupId, desired: usize) -> Vec<Card> {
        self.fill_random_with(group, desired, &mut rand::rng())
    }

    /// Random fill with a seeded RNG for reproducibility.
    pub fn fill_random_seeded(&mut self, group: GroupId, desired: usize, seed: u64) -> Vec<Card> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.fill_random_with(group, desired, &mut rng)
    }

    /// Complete the player's hand with random cards.
    pub fn your_cards_random(&mut self) -> Vec<Card> {
        self.fill_random(GroupId::Player, PLAYER_CARDS_MAX)
    }

    /// Deal random table cards up to the flop.
    pub fn flop_random(&mut self) -> Vec<Card> {
        self.fill_random(GroupId::Table, 3)
    }

    /// Deal random table cards up to the turn.
    pub fn turn_random(&mut self) -> Vec<Card> {
        self.fill_random(GroupId::Table, 4)
    }

    /// Deal random table cards up to the river.
    pub fn river_random(&mut self) -> Vec<Card> {
        self.fill_random(GroupId::Table, TABLE_CARDS_MAX)
    }

    fn pending_mut(&mut self, group: GroupId) -> &mut PendingCard {
        match group {
            GroupId::Player => &mut self.pending_player,
            GroupId::Table => &mut self.pending_table,
        }
    }

    fn cards_mut(&mut self, group: GroupId) -> &mut Vec<Card> {
        match group {
            GroupId::Player => &mut self.player_cards,
            GroupId::Table => &mut self.table_cards,
        }
    }

    fn try_push(&mut self, group: GroupId, card: Card) -> bool {
        if self.is_taken(card) || self.cards(group).len() >= group.capacity() {
            return false;
        }
        self.cards_mut(group).push(card);
        true
    }

    fn try_commit(&mut self, group: GroupId) -> PendingOutcome {
        let Some(card) = self.pending(group).card() else {
            return PendingOutcome::Incomplete;
        };
        if self.is_taken(card) {
            log::debug!("pending {} rejected: already taken", card);
            return PendingOutcome::Duplicate;
        }
        self.cards_mut(group).push(card);
        self.pending_mut(group).clear();
        log::debug!("committed {} to {:?}", card, group);
        PendingOutcome::Committed(card)
    }
}
