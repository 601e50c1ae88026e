//! Ordered keyword-rule evaluation.

use super::responses;
use crate::sentiment::SentimentScore;

/// The fixed rule groups, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGroup {
    Location,
    Safety,
    Prize,
    TechSupport,
    Frustration,
}

impl RuleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleGroup::Location => "location",
            RuleGroup::Safety => "safety",
            RuleGroup::Prize => "prize",
            RuleGroup::TechSupport => "tech_support",
            RuleGroup::Frustration => "frustration",
        }
    }
}

impl std::fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fired rule: the group that matched and its canned response.
#[derive(Debug, Clone)]
pub struct RuleMatch {
    pub group: RuleGroup,
    pub response: String,
}

// -- Keyword tables ---------------------------------------------------------

const LOCATION_TRIGGERS: &[&str] = &["where", "location", "next event", "city", "cities", "venue"];
// Prize-zone phrasings are handled by the prize group instead.
const LOCATION_EXCLUSIONS: &[&str] = &["hunting zone", "hunting ground", "prize location"];

const SAFETY_TRIGGERS: &[&str] = &[
    "safe", "safety", "scared", "fear", "afraid", "dangerous", "injury", "hurt", "risk",
    "worried", "concern",
];

const PRIZE_TRIGGERS: &[&str] = &[
    "prize",
    "bounty",
    "reward",
    "money",
    "win",
    "winning",
    "hunting ground",
    "hunt",
    "hunting zone",
    "what do i get",
];

const TECH_TRIGGERS: &[&str] = &[
    "technical",
    "problem",
    "issue",
    "error",
    "bug",
    "broken",
    "not working",
    "cant register",
    "can't register",
    "website",
    "form",
    "submit",
    "loading",
    "doesnt work",
    "doesn't work",
    "help",
    "support",
];
// Safety concerns phrased as problems belong to the safety group.
const TECH_EXCLUSIONS: &[&str] = &["safe", "safety", "scared", "fear", "dangerous"];

const FRUSTRATION_TRIGGERS: &[&str] = &[
    "complicated",
    "confus",
    "difficult",
    "hard",
    "frustrat",
    "annoying",
    "annoyed",
    "ugh",
    "wtf",
];

const DONT_UNDERSTAND_PATTERNS: &[&str] =
    &["don't understand", "dont understand", "do not understand"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

// -- Dispatcher -------------------------------------------------------------

/// Evaluates the rule groups against a user message.
///
/// Stateless; the sentiment score accompanies the text so the dispatch
/// decision and its logging stay in one place even though the current
/// rules are keyword-driven.
#[derive(Debug, Default)]
pub struct RuleDispatcher;

impl RuleDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Return the first matching rule group's canned response, or `None`.
    ///
    /// Matching is substring-based over the lowercased message: a group
    /// fires when any trigger keyword is present and no exclusion keyword
    /// is. Groups are checked strictly in priority order, so an input
    /// matching several groups always gets the earlier group's response.
    pub fn dispatch(&self, user_message: &str, _score: &SentimentScore) -> Option<RuleMatch> {
        let msg = user_message.to_lowercase();

        if contains_any(&msg, LOCATION_TRIGGERS) && !contains_any(&msg, LOCATION_EXCLUSIONS) {
            return Some(RuleMatch {
                group: RuleGroup::Location,
                response: responses::location_briefing(),
            });
        }

        if contains_any(&msg, SAFETY_TRIGGERS) {
            return Some(RuleMatch {
                group: RuleGroup::Safety,
                response: responses::safety_briefing(),
            });
        }

        if contains_any(&msg, PRIZE_TRIGGERS) {
            return Some(RuleMatch {
                group: RuleGroup::Prize,
                response: responses::prize_briefing(),
            });
        }

        if contains_any(&msg, TECH_TRIGGERS) && !contains_any(&msg, TECH_EXCLUSIONS) {
            return Some(RuleMatch {
                group: RuleGroup::TechSupport,
                response: responses::tech_support_briefing(),
            });
        }

        let frustrated = contains_any(&msg, FRUSTRATION_TRIGGERS)
            || contains_any(&msg, DONT_UNDERSTAND_PATTERNS)
            || (msg.contains("why") && contains_any(&msg, &["hard", "difficult", "complicated"]));
        if frustrated {
            return Some(RuleMatch {
                group: RuleGroup::Frustration,
                response: responses::frustration_reassurance(),
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(msg: &str) -> Option<RuleMatch> {
        RuleDispatcher::new().dispatch(msg, &SentimentScore::neutral())
    }

    #[test]
    fn location_query_gets_mission_briefing_with_all_cities() {
        let m = dispatch("Where is the next event?").unwrap();
        assert_eq!(m.group, RuleGroup::Location);
        assert!(m.response.contains("MISSION BRIEFING"));
        for city in ["LONDON", "MANCHESTER", "GLASGOW"] {
            assert!(m.response.contains(city), "missing {}", city);
        }
    }

    #[test]
    fn prize_zone_query_is_excluded_from_location_rule() {
        // "where is the hunting zone" names a location but is a prize query
        let m = dispatch("where is the hunting zone?").unwrap();
        assert_eq!(m.group, RuleGroup::Prize);
    }

    #[test]
    fn safety_query_mentions_first_aid() {
        let m = dispatch("I'm scared to try this").unwrap();
        assert_eq!(m.group, RuleGroup::Safety);
        let lower = m.response.to_lowercase();
        assert!(lower.contains("safety"));
        assert!(lower.contains("first aid"));
        assert!(lower.contains("equipment"));
    }

    #[test]
    fn prize_query_encourages_registration() {
        let m = dispatch("what prizes can I win?").unwrap();
        assert_eq!(m.group, RuleGroup::Prize);
        assert!(m.response.contains("\u{A3}310,000"));
        assert!(m.response.to_lowercase().contains("register"));
    }

    #[test]
    fn tech_query_gets_troubleshooting_steps() {
        let m = dispatch("the registration form is not working").unwrap();
        assert_eq!(m.group, RuleGroup::TechSupport);
        assert!(m.response.contains("support@scaters.com"));
    }

    #[test]
    fn tech_query_about_safety_goes_to_safety_rule() {
        let m = dispatch("I have a problem, is this safe?").unwrap();
        assert_eq!(m.group, RuleGroup::Safety);
    }

    #[test]
    fn frustration_keywords_and_phrasings_fire_reassurance() {
        for msg in [
            "this is so complicated",
            "I don't understand any of this",
            "why is this so hard",
        ] {
            let m = dispatch(msg).unwrap();
            assert_eq!(m.group, RuleGroup::Frustration, "for {:?}", msg);
            assert!(m.response.contains("TACTICAL TIMEOUT"));
        }
    }

    #[test]
    fn priority_is_total_and_deterministic() {
        // Matches both location and safety - location is earlier in the order
        let m = dispatch("where is it held, and is it safe?").unwrap();
        assert_eq!(m.group, RuleGroup::Location);

        // Matches both safety and prize - safety wins
        let m = dispatch("is it dangerous to hunt for the prize?").unwrap();
        assert_eq!(m.group, RuleGroup::Safety);

        // Matches both prize and tech support - prize wins
        let m = dispatch("I have an issue claiming my reward").unwrap();
        assert_eq!(m.group, RuleGroup::Prize);
    }

    #[test]
    fn unmatched_input_returns_none() {
        assert!(dispatch("asdkjasd").is_none());
        assert!(dispatch("").is_none());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let m = dispatch("WHERE IS THE VENUE").unwrap();
        assert_eq!(m.group, RuleGroup::Location);
    }
}
