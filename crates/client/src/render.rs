//! Plain-text rendering of battle events for the terminal.
use game_core::{GameState, LogEntry, LogKind};
use runtime::{AutoPlayReport, StopReason};

pub fn log_line(entry: &LogEntry) -> String {
    let marker = match entry.kind {
        LogKind::Player => ">",
        LogKind::Enemy => "<",
        LogKind::System => "*",
    };
    format!("{marker} {}", entry.message)
}

pub fn status_line(state: &GameState) -> String {
    let player = &state.player;
    match &state.current_enemy {
        Some(enemy) => format!(
            "  [floor {}] you {}/{} hp | {} {}/{} hp",
            state.floor, player.hp, player.max_hp, enemy.name, enemy.hp, enemy.max_hp
        ),
        None => format!(
            "  [floor {}] you {}/{} hp | {} skills",
            state.floor,
            player.hp,
            player.max_hp,
            player.skills.len()
        ),
    }
}

pub fn summary(report: &AutoPlayReport) -> String {
    let reason = match report.reason {
        StopReason::Stopped => "stopped",
        StopReason::Defeated => "defeated",
        StopReason::MaxFloors => "floor limit reached",
        StopReason::AwaitingReward => "waiting for a reward choice",
        StopReason::Idle => "nothing to play",
    };
    format!(
        "Session over ({reason}): {} floors cleared, deepest floor {}, {} turns.",
        report.floors_cleared, report.highest_floor, report.ticks
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_follow_kind() {
        let entry = LogEntry {
            message: "Goblin attacks you for 8 damage!".into(),
            kind: LogKind::Enemy,
            timestamp: 0,
        };
        assert_eq!(log_line(&entry), "< Goblin attacks you for 8 damage!");
    }

    #[test]
    fn status_without_enemy() {
        let state = GameState::default();
        assert_eq!(status_line(&state), "  [floor 0] you 100/100 hp | 2 skills");
    }
}
