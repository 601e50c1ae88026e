//! Deterministic keyword-matched fallback responder.
//!
//! The guaranteed last resort of the response pipeline: a pure, total
//! function from user text to canned event facts. Used when no rule fired
//! and the remote path failed or was rejected.

/// (trigger keywords, response) pairs, checked in order; first match wins.
const FALLBACK_TABLE: &[(&[&str], &str)] = &[
    (
        &["february", "deadline", "early bird", "registration close"],
        "Important February 2026 Deadlines:\n\
         - Registration closes: February 28, 2026\n\
         - Early bird discount ends: February 15, 2026\n\
         - VIP package sales close: February 20, 2026\n\
         - Safety guidelines posted: Early February\n\
         \n\
         Don't miss out - register early to secure your spot!",
    ),
    (
        &["location", "where", "city", "cities"],
        "The Raptor Roadshow visits 3 UK cities:\n\
         - London - March 12, 2026 at Southbank Undercroft\n\
         - Manchester - March 19, 2026 at Projekt MCR\n\
         - Glasgow - March 26, 2026 at Kelvingrove",
    ),
    (
        &["skateboard", "deck", "raptor", "collection"],
        "The Raptor Collection features 5 premium decks:\n\
         - The Eagle - Sky Dominator (aerial dominance)\n\
         - The Panther - Shadow Hunter (technical precision)\n\
         - The Bull - Ground Breaker (raw power)\n\
         - The Shark - Flow Machine (speed & momentum)\n\
         - The Snake - Flex Assassin (adaptive reflexes)",
    ),
    (
        &["prize", "money", "bounty", "reward"],
        "The Predatory Hunt features a \u{A3}310,000 total prize pool across all events!",
    ),
    (
        &["when", "date", "time"],
        "Event dates:\n\
         - London: March 12, 2026\n\
         - Manchester: March 19, 2026\n\
         - Glasgow: March 26, 2026\n\
         \n\
         IMPORTANT: Registration deadline is February 28, 2026",
    ),
    (
        &["activity", "activities", "what", "do"],
        "Roadshow activities include:\n\
         - Live skateboarding competitions\n\
         - Pro demonstrations by Lucien Clarke & Geoff Rowley\n\
         - Raptor collection product testing\n\
         - Meet & greet with pro skaters\n\
         - Prize competitions",
    ),
    (
        &["skater", "pro", "lucien", "geoff", "rowley", "clarke"],
        "Featured pro skaters: Lucien Clarke & Geoff Rowley will be demonstrating at all events!",
    ),
];

/// Generic default listing the supported topics.
pub const DEFAULT_FALLBACK: &str = "I'm The Butler, here to help with information about:\n\
     - The Raptor Roadshow 2026 (locations, dates, activities)\n\
     - The Raptor skateboard collection (features, models)\n\
     - February registration deadlines and policies\n\
     \n\
     What would you like to know?";

/// Map a user message to a canned response. Total: every input, including
/// the empty string, yields non-empty text.
pub fn fallback_response(user_message: &str) -> String {
    let msg = user_message.to_lowercase();

    for (keywords, response) in FALLBACK_TABLE {
        if keywords.iter().any(|kw| msg.contains(kw)) {
            return (*response).to_string();
        }
    }

    DEFAULT_FALLBACK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_queries_list_february_dates() {
        let response = fallback_response("when is the registration deadline?");
        // "deadline" outranks the date group
        assert!(response.contains("February 28, 2026"));
        assert!(response.contains("Early bird"));
    }

    #[test]
    fn location_queries_list_all_cities() {
        let response = fallback_response("where are the events?");
        assert!(response.contains("London"));
        assert!(response.contains("Manchester"));
        assert!(response.contains("Glasgow"));
    }

    #[test]
    fn deck_queries_list_the_collection() {
        let response = fallback_response("tell me about the raptor decks");
        assert!(response.contains("The Eagle"));
        assert!(response.contains("The Snake"));
    }

    #[test]
    fn unmatched_input_gets_generic_default() {
        assert_eq!(fallback_response("asdkjasd"), DEFAULT_FALLBACK);
    }

    #[test]
    fn always_returns_non_empty_text() {
        for input in ["", "   ", "asdkjasd", "where", "PRIZE MONEY", "\u{1F6F9}"] {
            assert!(!fallback_response(input).is_empty(), "empty for {:?}", input);
        }
    }
}
