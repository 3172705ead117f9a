//! Wellness check-in queries and context rendering

use crate::domain::entities::WellnessCheckIn;
use crate::domain::value_objects::AgentKind;

/// The last `n` check-ins, oldest first
pub fn recent_checkins(entries: &[WellnessCheckIn], n: usize) -> &[WellnessCheckIn] {
    let start = entries.len().saturating_sub(n);
    &entries[start..]
}

/// Most recently appended check-in
pub fn latest_checkin(entries: &[WellnessCheckIn]) -> Option<&WellnessCheckIn> {
    entries.last()
}

/// Check-ins recorded on a `%Y-%m-%d` date
pub fn checkins_on<'a>(entries: &'a [WellnessCheckIn], date: &str) -> Vec<&'a WellnessCheckIn> {
    entries.iter().filter(|e| e.stamp.date == date).collect()
}

/// Reminder of the previous check-in for the companion
pub fn wellness_context(previous: Option<&WellnessCheckIn>) -> String {
    let Some(previous) = previous else {
        return "This is the first check-in. Introduce yourself briefly before asking how they feel."
            .to_string();
    };

    let mut context = format!(
        "Last check-in was on {} at {}: they felt {} with {} energy and wanted to: {}.",
        previous.stamp.date,
        previous.stamp.time,
        previous.mood,
        previous.energy_level,
        previous.objectives
    );
    if let Some(stress) = &previous.stress_factors {
        context.push_str(&format!(" They mentioned stress about: {}.", stress));
    }
    context.push_str(" Ask gently how those went before starting today's check-in.");
    context
}

/// Standing wellness instructions followed by the history reminder
pub fn wellness_instructions(history: &[WellnessCheckIn]) -> String {
    format!(
        "{}\n\n{}",
        AgentKind::Wellness.instructions(),
        wellness_context(latest_checkin(history))
    )
}
