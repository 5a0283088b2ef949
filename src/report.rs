//! CLI report rendering

use crate::engine::Signal;
use crate::matchup::Matchup;

const RULE: &str = "══════════════════════════════════════════════════════════════════════";
const DIVIDER: &str = "──────────────────────────────────────────────────────────────────────";

/// Format ranked signals as a fixed-width table for CLI output.
pub fn format_table(matchup: &Matchup, signals: &[Signal]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "{:^70}\n",
        format!("SMART MONEY: {} vs {}", matchup.home, matchup.away)
    ));
    out.push_str(RULE);
    out.push('\n');
    out.push('\n');

    if signals.is_empty() {
        out.push_str("No market has enough quotes to analyze.\n");
        out.push_str(RULE);
        out.push('\n');
        return out;
    }

    out.push_str(&format!(
        "{:<13} {:<16} {:>5}  {:<7} {:>8}  SAFE BET\n",
        "MARKET", "SELECTION", "SCORE", "RISK", "FLOW"
    ));
    out.push_str(DIVIDER);
    out.push('\n');

    for signal in signals {
        // RiskLevel's Display ignores format width; pad a plain string.
        let risk = signal.risk.to_string();
        out.push_str(&format!(
            "{:<13} {:<16} {:>5}  {:<7} {:>+8.2}  {}\n",
            signal.market,
            signal.selection,
            signal.score,
            risk,
            signal.metrics.money_flow,
            signal.safe_bet_line,
        ));
    }

    out.push('\n');
    out.push_str("RISK LEGEND: LOW 7-10 | MEDIUM 5-6 | HIGH 1-4\n");
    out.push_str(RULE);
    out.push('\n');
    out
}
