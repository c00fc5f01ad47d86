//! UCI info and bestmove lines for a finished search.

use std::time::Duration;

use crate::core::board::Color;

use super::types::{SearchLimits, SearchResult, SearchStats, KING_VALUE};

/// Line value as a UCI score: pawns become centipawns, a won king becomes `mate`
pub fn format_score(value: f64) -> String {
    if value >= KING_VALUE {
        "mate 1".to_string()
    } else if value <= -KING_VALUE {
        "mate -1".to_string()
    } else {
        format!("cp {}", (value * 100.0).round() as i64)
    }
}

pub fn format_info(
    limits: &SearchLimits,
    stats: &SearchStats,
    elapsed: Duration,
    side: Color,
    result: &SearchResult,
) -> String {
    let millis = elapsed.as_millis();
    let nps = if millis > 0 {
        (stats.nodes as u128 * 1000) / millis
    } else {
        0
    };
    let mut line = format!(
        "info depth {} score {} nodes {} nps {} time {}",
        limits.max_ply + 1,
        format_score(result.value),
        stats.nodes,
        nps,
        millis
    );
    if let Some(mv) = result.best_move {
        line.push_str(" pv ");
        line.push_str(&mv.to_uci(side));
    }
    line
}

/// `bestmove` answer; `0000` when there is no move
pub fn format_bestmove(side: Color, result: &SearchResult) -> String {
    match result.best_move {
        Some(mv) => format!("bestmove {}", mv.to_uci(side)),
        None => "bestmove 0000".to_string(),
    }
}
