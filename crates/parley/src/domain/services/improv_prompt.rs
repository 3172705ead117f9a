//! Improv Prompt Builder
//!
//! Renders the per-turn instruction for the language model: persona,
//! improv ruleset, energy-matched tone, worked examples and the user's words.

use crate::domain::entities::EnergyReading;
use crate::domain::value_objects::EnergyLevel;

const GENERIC_PERSONA: &str = "You are a versatile improv partner. ";

const RULES: &str = concat!(
    "You're in a live voice improv battle. Here are your core rules:\n\n",
    "🎭 IMPROV FUNDAMENTALS:\n",
    "1) ALWAYS 'Yes, and' - Accept the user's reality and add something new\n",
    "2) Keep responses SHORT (1-3 sentences max) - leave room for them to respond\n",
    "3) Add SPECIFICS - names, colors, sounds, emotions make scenes vivid\n",
    "4) Include a playful ACTION or EMOTION to keep the scene moving\n",
    "5) Never block or negate - build on every offer they give you\n\n",
);

const SPECIAL_NOTES: &str = concat!(
    "💡 SPECIAL NOTES:\n",
    "- If they ask a real question, answer briefly then offer to continue playing\n",
    "- If they're stuck, give them an exciting choice or dilemma\n",
    "- Match their style: silly stays silly, serious stays serious\n",
    "- No stage directions in brackets - speak naturally as your character\n",
);

const EXAMPLES: &str = concat!(
    "\nExample exchanges:\n",
    "User: 'We're pirates looking for treasure!'\n",
    "You: 'Yes! And I just spotted a mysterious island with a glowing cave. Should we row there or swim?'\n\n",
    "User: 'I'm a nervous chef on a cooking show.'\n",
    "You: 'Yes, and the secret ingredient today is... dragon fruit! But wait, it's actually breathing fire!'\n\n",
);

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━";

const CLOSING: &str = "Your response (1-3 sentences, spoken naturally):";

/// Transcript substituted when the user said nothing
const EMPTY_TRANSCRIPT: &str = "hello";

/// Tone guidance for an energy level
pub fn energy_guidance(level: EnergyLevel) -> &'static str {
    match level {
        EnergyLevel::High => {
            "Match their high energy with excitement! Be punchy, enthusiastic, and use exclamation points. Keep it super snappy."
        }
        EnergyLevel::Medium => {
            "Keep a friendly, warm conversational tone with playful twists. Be engaging and supportive."
        }
        EnergyLevel::Low => {
            "Be gentle, supportive, and slightly dramatic. Use calmer pacing and evocative language."
        }
    }
}

/// Build the improv instruction for one user turn.
///
/// Output depends only on the arguments. The persona and transcript are
/// embedded verbatim; an empty persona counts as none.
pub fn build_improv_prompt(
    transcript: &str,
    energy: &EnergyReading,
    persona: Option<&str>,
) -> String {
    let transcript = if transcript.is_empty() {
        EMPTY_TRANSCRIPT
    } else {
        transcript
    };

    let mut prompt = String::with_capacity(2048);
    match persona.filter(|p| !p.is_empty()) {
        Some(persona) => {
            prompt.push_str("You are playing the role of: ");
            prompt.push_str(persona);
            prompt.push_str(". ");
        }
        None => prompt.push_str(GENERIC_PERSONA),
    }
    prompt.push_str(RULES);
    prompt.push_str("⚡ ENERGY LEVEL: ");
    prompt.push_str(energy_guidance(energy.level()));
    prompt.push_str("\n\n");
    prompt.push_str(SPECIAL_NOTES);
    prompt.push_str(EXAMPLES);
    prompt.push('\n');
    prompt.push_str(DIVIDER);
    prompt.push('\n');
    prompt.push_str(&format!("User just said: \"{}\"\n\n", transcript));
    prompt.push_str(CLOSING);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::classify_energy;

    const ALL_GUIDANCE: [EnergyLevel; 3] = [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High];

    #[test]
    fn test_empty_transcript_becomes_hello() {
        let prompt = build_improv_prompt("", &EnergyReading::NEUTRAL, None);
        assert!(prompt.contains("User just said: \"hello\""));
        assert!(prompt.starts_with("You are a versatile improv partner. You're in a live voice"));
    }

    #[test]
    fn test_is_deterministic() {
        let energy = classify_energy("We're pirates looking for treasure!");
        let a = build_improv_prompt("We're pirates!", &energy, Some("a pirate captain"));
        let b = build_improv_prompt("We're pirates!", &energy, Some("a pirate captain"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_contains_exactly_one_guidance_line() {
        for level in ALL_GUIDANCE {
            let energy = match level {
                EnergyLevel::Low => EnergyReading::from_score(0.1),
                EnergyLevel::Medium => EnergyReading::from_score(0.45),
                EnergyLevel::High => EnergyReading::from_score(0.9),
            };
            let prompt = build_improv_prompt("hi", &energy, None);
            for other in ALL_GUIDANCE {
                let expected = usize::from(other == level);
                assert_eq!(prompt.matches(energy_guidance(other)).count(), expected);
            }
            assert!(prompt.contains(&format!("⚡ ENERGY LEVEL: {}\n\n", energy_guidance(level))));
        }
    }

    #[test]
    fn test_persona_is_verbatim() {
        let persona = r#"Dr. "Quack" <Mallard> & Sons {50%}"#;
        let prompt = build_improv_prompt("hi", &EnergyReading::NEUTRAL, Some(persona));
        assert!(prompt.starts_with(&format!("You are playing the role of: {}. ", persona)));
    }

    #[test]
    fn test_empty_persona_uses_generic_line() {
        let prompt = build_improv_prompt("hi", &EnergyReading::NEUTRAL, Some(""));
        assert!(prompt.starts_with(GENERIC_PERSONA));
    }

    #[test]
    fn test_block_order_and_tail() {
        let prompt = build_improv_prompt("We're astronauts", &EnergyReading::NEUTRAL, None);
        let rules = prompt.find("🎭 IMPROV FUNDAMENTALS:").unwrap();
        let energy = prompt.find("⚡ ENERGY LEVEL:").unwrap();
        let notes = prompt.find("💡 SPECIAL NOTES:").unwrap();
        let examples = prompt.find("Example exchanges:").unwrap();
        let said = prompt.find("User just said:").unwrap();
        assert!(rules < energy && energy < notes && notes < examples && examples < said);

        assert!(prompt.contains("pirates looking for treasure"));
        assert!(prompt.contains("nervous chef on a cooking show"));
        assert!(prompt.ends_with(concat!(
            "User just said: \"We're astronauts\"\n\n",
            "Your response (1-3 sentences, spoken naturally):"
        )));
        assert!(prompt.contains("speak naturally as your character\n\nExample exchanges:"));
        assert!(prompt.contains(&format!("fire!'\n\n\n{}\nUser just said", DIVIDER)));
    }
}
