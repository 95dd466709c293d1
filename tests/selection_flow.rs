use holdem_scenario::cards::Card;
use holdem_scenario::scenario::{build_request, cards_uri, Scenario};
use holdem_scenario::selection::{GroupId, PendingOutcome, SelectionStore, SessionSetup};

fn card(s: &str) -> Card {
    s.parse().expect("valid card")
}

#[test]
fn manual_picks_then_random_flop_serialize_in_order() {
    let mut store = SelectionStore::from_setup(&SessionSetup {
        players: 4,
        ..SessionSetup::default()
    });

    assert_eq!(store.set_pending_rank(GroupId::Player, "A"), PendingOutcome::Incomplete);
    assert_eq!(
        store.set_pending_suit(GroupId::Player, "S"),
        PendingOutcome::Committed(card("AS"))
    );
    assert!(store.pending(GroupId::Player).is_empty());

    store.set_pending_rank(GroupId::Player, "K");
    store.set_pending_suit(GroupId::Player, "S");
    assert_eq!(store.cards(GroupId::Player), &[card("AS"), card("KS")]);
    assert!(store.is_full(GroupId::Player));

    let flop = store.fill_random_seeded(GroupId::Table, 3, 1234);
    assert_eq!(flop.len(), 3);
    assert!(!flop.contains(&card("AS")));
    assert!(!flop.contains(&card("KS")));

    let scenario = Scenario::from_store(&store, 10_000, false);
    let request = build_request(&scenario);
    let expected = format!(
        "/simulate?players=4&yours=AS%2CKS&table={}&simcount=10000",
        cards_uri(store.cards(GroupId::Table))
    );
    assert_eq!(request, expected);
}

#[test]
fn duplicate_pick_across_groups_is_rejected_and_retained() {
    let mut store = SelectionStore::new();
    store.set_pending_rank(GroupId::Player, "A");
    store.set_pending_suit(GroupId::Player, "S");

    store.set_pending_rank(GroupId::Table, "A");
    let outcome = store.set_pending_suit(GroupId::Table, "S");
    assert_eq!(outcome, PendingOutcome::Duplicate);
    assert!(store.is_empty(GroupId::Table));
    assert!(!store.pending(GroupId::Table).is_empty());
    assert_eq!(store.pending(GroupId::Table).card(), Some(card("AS")));
}

#[test]
fn fewer_players_never_goes_below_two() {
    let mut store = SelectionStore::from_setup(&SessionSetup {
        players: 2,
        ..SessionSetup::default()
    });
    store.fewer_players();
    store.fewer_players();
    assert_eq!(store.player_count(), 2);
}

#[test]
fn run_intent_appends_runsim_flag() {
    let mut store = SelectionStore::new();
    store.set_pending_rank(GroupId::Player, "Q");
    store.set_pending_suit(GroupId::Player, "D");

    let scenario = Scenario::from_store(&store, 5_000, true);
    assert_eq!(build_request(&scenario), "/simulate?players=5&yours=QD&simcount=5000&runsim=true");
}

#[test]
fn streets_build_on_each_other_and_stay_disjoint() {
    let mut store = SelectionStore::new();
    store.your_cards_random();
    store.flop_random();
    let flop: Vec<Card> = store.cards(GroupId::Table).to_vec();
    store.turn_random();
    assert_eq!(&store.cards(GroupId::Table)[..3], flop.as_slice());
    store.river_random();
    assert_eq!(store.cards(GroupId::Table).len(), 5);

    for c in store.cards(GroupId::Player) {
        assert!(!store.cards(GroupId::Table).contains(c));
    }
    assert_eq!(store.remaining_pack().len(), 52 - 2 - 5);
}
