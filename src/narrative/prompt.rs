//! Roast prompt and local fallback text.

use rand::seq::SliceRandom;

use crate::analysis::round_to;
use crate::models::{CompatibilityRow, PlayerPerformance};

/// Teammate lines included in the prompt.
pub const PROMPT_TEAMMATES: usize = 5;

const PERSONAS: &[&str] = &[
    "a furious Challenger analyst losing faith in humanity",
    "a washed-up ex-pro who regrets solo queue",
    "a Diamond one-trick filled with unfiltered rage",
    "a cold, venomously analytical shoutcaster",
];

/// Teammate chemistry block, or a placeholder line when there is none.
pub fn teammate_lines(rows: &[CompatibilityRow]) -> String {
    if rows.is_empty() {
        return "- No notable teammates.".to_string();
    }
    rows.iter()
        .take(PROMPT_TEAMMATES)
        .map(|r| format!("- {}: {}% over {} games", r.teammate, r.win_rate_pct, r.games))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the long-form roast prompt for one performance.
pub fn build_roast_prompt(perf: &PlayerPerformance, rows: &[CompatibilityRow]) -> String {
    let persona = PERSONAS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PERSONAS[0]);

    format!(
        "You are {persona}. Write a long, statistically detailed roast of this player's latest \
League of Legends match and of their chemistry with recent teammates. Be brutal, witty and \
sarcastic, but keep it about gameplay only.

PLAYER MATCH SNAPSHOT
- Champion: {champion}
- Role: {role}
- K/D/A: {kda_line}
- KDA Ratio: {kda}
- CS: {cs}
- Damage to Champions: {damage}
- Damage Taken: {taken}
- Gold: {gold}
- Vision Score: {vision} ({vpm}/min)
- Kill Participation: {kp}%
- DPM: {dpm}
- Result: {result}

TEAM CHEMISTRY (recent sample)
{teammates}

STRUCTURE:
1) Opening: a savage high-level verdict.
2) Objectives and macro: what these numbers say about map play.
3) Mechanics: deaths, fights taken, timings missed.
4) Damage and impact: damage and DPM against what the role demands.
5) Farming and gold: were they behind tempo?
6) Vision and awareness: vision score per minute.
7) Teamplay: tie in the win rates with the teammates above.
8) Closing: a final burn, three meme captions and a one-sentence verdict.

Use the exact numbers above.
",
        champion = perf.champion,
        role = perf.role,
        kda_line = perf.kda_line(),
        kda = round_to(perf.kda, 2),
        cs = perf.creep_score,
        damage = perf.damage_to_champions,
        taken = perf.damage_taken,
        gold = perf.gold,
        vision = perf.vision_score,
        vpm = perf.vision_per_minute,
        kp = perf.kill_participation_pct,
        dpm = perf.damage_per_minute,
        result = perf.result_label(),
        teammates = teammate_lines(rows),
    )
}

/// Deterministic roast built from the same literal numbers.
pub fn fallback_roast(perf: &PlayerPerformance) -> String {
    format!(
        "Local roast: You went {} on {} ({}). KDA {:.2}. This was a masterclass in boosting \
the enemy's confidence. Damage: {}, which is basically a love tap. Better luck next queue.",
        perf.kda_line(),
        perf.champion,
        perf.role,
        perf.kda,
        perf.damage_to_champions,
    )
}
