//! Tutor progress queries and turn instructions

use serde::Serialize;

use crate::domain::entities::{Concept, TutorProgress};
use crate::domain::value_objects::{AgentKind, TutorMode};

/// How far a learner has got with one concept
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptMastery {
    pub concept_id: String,
    pub attempts: usize,
    pub best_score: Option<u8>,
    pub average_score: Option<f64>,
    pub last_mode: TutorMode,
    pub last_practiced: String,
}

/// Records for one concept, oldest first
pub fn progress_for_concept<'a>(records: &'a [TutorProgress], concept_id: &str) -> Vec<&'a TutorProgress> {
    records
        .iter()
        .filter(|r| r.concept_id.eq_ignore_ascii_case(concept_id.trim()))
        .collect()
}

/// Per-concept summary in catalogue order. Concepts never practiced are omitted.
pub fn mastery(records: &[TutorProgress]) -> Vec<ConceptMastery> {
    Concept::catalogue()
        .iter()
        .filter_map(|concept| summarize(concept.id, &progress_for_concept(records, concept.id)))
        .collect()
}

fn summarize(concept_id: &str, records: &[&TutorProgress]) -> Option<ConceptMastery> {
    let last = records.last()?;
    let scores: Vec<u8> = records.iter().filter_map(|r| r.score).collect();
    let average_score = if scores.is_empty() {
        None
    } else {
        Some(scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64)
    };

    Some(ConceptMastery {
        concept_id: concept_id.to_string(),
        attempts: records.len(),
        best_score: scores.iter().copied().max(),
        average_score,
        last_mode: last.mode,
        last_practiced: last.stamp.date.clone(),
    })
}

/// Tutor instructions for a mode and concept
pub fn tutor_instructions(mode: TutorMode, concept: &Concept) -> String {
    let mut text = String::from(AgentKind::Tutor.instructions());
    text.push_str(&format!("\n\nCurrent mode: {}\n", mode));
    text.push_str(mode.guidance());
    text.push_str(&format!(
        "\n\nCurrent concept: {}\nKey idea: {}\n",
        concept.title, concept.summary
    ));
    if mode != TutorMode::Learn {
        text.push_str(&format!("Start with: {}\n", concept.sample_question));
    }
    text
}
