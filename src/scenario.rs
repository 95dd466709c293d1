use crate::cards::{Card, Rank, Suit};
use crate::selection::{GroupId, SelectionStore};
use std::str::FromStr;
use url::form_urlencoded;

/// Path the simulation backend serves.
pub const SIMULATE_PATH: &str = "/simulate";

/// Snapshot of a configured scenario, ready to serialize for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub player_count: u32,
    pub your_cards: Vec<Card>,
    pub table_cards: Vec<Card>,
    pub simulation_count: u32,
    pub run_simulation: bool,
}

impl Scenario {
    pub fn from_store(store: &SelectionStore, simulation_count: u32, run_simulation: bool) -> Self {
        Self {
            player_count: store.player_count(),
            your_cards: store.cards(GroupId::Player).to_vec(),
            table_cards: store.cards(GroupId::Table).to_vec(),
            simulation_count,
            run_simulation,
        }
    }
}

fn join_tokens(cards: &[Card]) -> String {
    cards.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// Human-readable, order-preserving rendering: `A♠, K♥`. Display data only;
/// never part of the wire format.
pub fn display_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{}{}", c.rank(), c.suit().glyph()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Tolerant rendering of an externally supplied card token (e.g. from a
/// deep link). Unrecognized rank or suit renders as `?`; never fails and
/// never reproduces raw input.
pub fn display_card_token(token: &str) -> String {
    let t = token.trim();
    let suit_ch = t.chars().last();
    let rank_part = match suit_ch {
        Some(c) => &t[..t.len() - c.len_utf8()],
        None => "",
    };
    let rank = Rank::from_str(rank_part).map(Rank::as_str).unwrap_or("?");
    let glyph = suit_ch
        .and_then(|c| Suit::try_from(c).ok())
        .map(Suit::glyph)
        .unwrap_or('?');
    format!("{rank}{glyph}")
}

/// Comma-joined canonical card tokens, percent-encoded as a single query
/// value. Decoding and splitting on `,` reproduces the ordered list.
///
/// ```
/// use holdem_scenario::cards::parse_cards;
/// use holdem_scenario::scenario::cards_uri;
///
/// let cards = parse_cards("AS KH").unwrap();
/// assert_eq!(cards_uri(&cards), "AS%2CKH");
/// ```
pub fn cards_uri(cards: &[Card]) -> String {
    form_urlencoded::byte_serialize(join_tokens(cards).as_bytes()).collect()
}

/// Serialize the scenario into the backend request: an ordered query string
/// on [`SIMULATE_PATH`]. `yours`/`table` appear only when non-empty and
/// `runsim=true` only on explicit run intent. Pure; dispatch is the
/// caller's concern.
pub fn build_request(scenario: &Scenario) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("players", &scenario.player_count.to_string());
    if !scenario.your_cards.is_empty() {
        query.append_pair("yours", &join_tokens(&scenario.your_cards));
    }
    if !scenario.table_cards.is_empty() {
        query.append_pair("table", &join_tokens(&scenario.table_cards));
    }
    query.append_pair("simcount", &scenario.simulation_count.to_string());
    if scenario.run_simulation {
        query.append_pair("runsim", "true");
    }
    format!("{}?{}", SIMULATE_PATH, query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn scenario(yours: &str, table: &str, run: bool) -> Scenario {
        Scenario {
            player_count: 4,
            your_cards: parse_cards(yours).unwrap(),
            table_cards: parse_cards(table).unwrap(),
            simulation_count: 10_000,
            run_simulation: run,
        }
    }

    #[test]
    fn display_is_comma_joined_glyphs() {
        let cards = parse_cards("AS, KH, 10D").unwrap();
        assert_eq!(display_cards(&cards), "A♠, K♥, 10♦");
        assert_eq!(display_cards(&[]), "");
    }

    #[test]
    fn malformed_tokens_render_placeholders() {
        assert_eq!(display_card_token("AS"), "A♠");
        assert_eq!(display_card_token("10h"), "10♥");
        assert_eq!(display_card_token("AX"), "A?");
        assert_eq!(display_card_token("1S"), "?♠");
        assert_eq!(display_card_token("<script>"), "??");
        assert_eq!(display_card_token(""), "??");
    }

    #[test]
    fn cards_uri_percent_encodes_commas() {
        let cards = parse_cards("AS KH 10D").unwrap();
        assert_eq!(cards_uri(&cards), "AS%2CKH%2C10D");
        assert_eq!(cards_uri(&[]), "");
    }

    #[test]
    fn cards_uri_round_trips() {
        let cards = parse_cards("AS, KH, 10D, 2C").unwrap();
        let uri = cards_uri(&cards);
        let decoded: String = form_urlencoded::parse(format!("v={uri}").as_bytes())
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        let back = parse_cards(&decoded).unwrap();
        assert_eq!(back, cards);
    }

    #[test]
    fn request_includes_card_params_only_when_non_empty() {
        assert_eq!(build_request(&scenario("", "", false)), "/simulate?players=4&simcount=10000");
        assert_eq!(
            build_request(&scenario("AS KS", "", false)),
            "/simulate?players=4&yours=AS%2CKS&simcount=10000"
        );
        assert_eq!(
            build_request(&scenario("AS KS", "2C 3D 4H", false)),
            "/simulate?players=4&yours=AS%2CKS&table=2C%2C3D%2C4H&simcount=10000"
        );
    }

    #[test]
    fn runsim_flag_appears_only_on_run_intent() {
        let req = build_request(&scenario("AS KS", "", true));
        assert_eq!(req, "/simulate?players=4&yours=AS%2CKS&simcount=10000&runsim=true");
        assert!(!build_request(&scenario("AS KS", "", false)).contains("runsim"));
    }
}
