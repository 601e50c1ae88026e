//! Canned response texts for the rule groups.
//!
//! All texts keep The Butler's mission-briefing register and quote only
//! facts from [`crate::event`].

use crate::event::{REGISTRATION_URL, SUPPORT_EMAIL, TOUR_STOPS};

/// (mission objective, intelligence note) per tour stop, same order as
/// [`TOUR_STOPS`].
const STOP_BRIEFINGS: [(&str, &str); 3] = [
    (
        "Execute precision techniques in the capital's most iconic arena",
        "Limited spots available - secure your position early",
    ),
    (
        "Navigate the rugged industrial battlefield with power and control",
        "Supervised by professional operatives for optimal safety",
    ),
    (
        "Achieve maximum altitude in Scotland's premier territory",
        "Final opportunity to claim your victory",
    ),
];

pub fn location_briefing() -> String {
    let mut text = String::from(
        "\u{1F3AF} MISSION BRIEFING: Agent, your deployment coordinates are as follows.\n",
    );

    for ((city, date, venue, codename), (objective, note)) in TOUR_STOPS.iter().zip(STOP_BRIEFINGS)
    {
        text.push_str(&format!(
            "\n\u{1F4CD} {city} - {date}\n\
             \x20  Tactical Location: {venue} (\"{codename}\")\n\
             \x20  Mission Objective: {objective}\n\
             \x20  Intelligence Note: {note}\n"
        ));
    }

    text.push_str(&format!(
        "\n\u{1F525} Agent, we encourage you to register promptly at {REGISTRATION_URL} to secure \
         your mission slot. Your adventure awaits!"
    ));
    text
}

pub fn safety_briefing() -> String {
    "\u{1F6E1} SAFETY PROTOCOL BRIEFING: Agent, your wellbeing is our highest priority.\n\
     \n\
     Rest assured, every mission site operates under strict safety protocols with \
     experienced professionals supervising all activities. Our comprehensive safety \
     infrastructure includes:\n\
     \n\
     - Elite medical support teams with first aid stations at every location\n\
     - Pre-mission safety equipment verification and quality checks\n\
     - Certified professional supervision throughout all activities\n\
     - Age-appropriate challenge levels tailored to participant skill\n\
     - Clearly defined safety protocols and emergency procedures\n\
     - Controlled environment with supervised participation conditions\n\
     \n\
     We encourage you to join us with confidence, Agent. Your safety enables your \
     success. All participants will receive detailed safety guidance upon \
     registration. Welcome to The Predatory Hunt!"
        .to_string()
}

pub fn prize_briefing() -> String {
    format!(
        "\u{1F4B0} CLASSIFIED INTEL: The bounty intelligence is extraordinary, Agent.\n\
         \n\
         \u{1F3C6} Total Prize Pool: \u{A3}310,000 distributed across all mission sites\n\
         \u{1F381} Exclusive rewards await operatives who demonstrate exceptional skill\n\
         \u{26A1} Elite performance opportunities with special recognition for top agents\n\
         \u{1F3AF} Premium Raptor collection access for qualified participants\n\
         \u{1F3C5} Additional classified rewards to be revealed during mission briefings\n\
         \n\
         Agent, we encourage you to secure your registration promptly. Operational slots \
         are limited and allocated on a first-come, first-served basis. This is a unique \
         opportunity to prove your skills on Britain's premier skateboarding stage. \
         Don't delay - register today at {REGISTRATION_URL}! \u{1F525}"
    )
}

pub fn tech_support_briefing() -> String {
    format!(
        "\u{1F527} TECHNICAL SUPPORT DISPATCH: Agent, encountering obstacles is part of every mission!\n\
         \n\
         Let's troubleshoot this together with tactical precision:\n\
         \n\
         Quick Diagnostic Protocol:\n\
         1. Refresh your browser (Ctrl+F5 / Cmd+Shift+R) - sometimes systems need a clean slate\n\
         2. Clear your browser cache - old intel can interfere with new operations\n\
         3. Try a different browser (Chrome, Firefox, Safari) - diversify your approach\n\
         4. Check your internet connection - ensure stable comms\n\
         5. Disable browser extensions temporarily - they can be sneaky saboteurs\n\
         \n\
         Still facing resistance?\n\
         No worries, Agent! Contact our technical support team at {SUPPORT_EMAIL} and include:\n\
         - What you were attempting (registration, form submission, etc.)\n\
         - Any error messages you encountered\n\
         - Your browser and device type\n\
         \n\
         We'll have you back on mission in no time. Stay calm and skate on! \u{1F6F9}"
    )
}

pub fn frustration_reassurance() -> String {
    "\u{1F6F9} TACTICAL TIMEOUT: Agent, even the best operatives need a moment to recalibrate!\n\
     \n\
     No mission is too complex when we break it down together. Think of this as \
     your personal mission support hotline - I'm here to make everything crystal clear.\n\
     \n\
     What specific aspect can I clarify for you? Whether it's registration procedures, \
     event locations, safety protocols, or technical details - I've got your back. \
     Let's troubleshoot this together and get you mission-ready! \u{1F4AA}\n\
     \n\
     Remember: Every pro started as a beginner. You've got this, Agent!"
        .to_string()
}
