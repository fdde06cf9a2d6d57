use std::collections::VecDeque;

/// Who a log line is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogKind {
    Player,
    Enemy,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
    /// Milliseconds since the Unix epoch, from the clock oracle.
    pub timestamp: u64,
}

/// Append-only battle log bounded to a fixed number of entries.
///
/// When full, pushing drops the oldest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl BattleLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True if any retained entry contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|entry| entry.message.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> LogEntry {
        LogEntry {
            message: format!("line {n}"),
            kind: LogKind::System,
            timestamp: n as u64,
        }
    }

    #[test]
    fn drops_oldest_when_full() {
        let mut log = BattleLog::with_capacity(50);
        for n in 0..60 {
            log.push(entry(n));
        }
        assert_eq!(log.len(), 50);
        assert_eq!(log.iter().next().map(|e| e.message.as_str()), Some("line 10"));
        assert_eq!(log.latest().map(|e| e.message.as_str()), Some("line 59"));
    }

    #[test]
    fn kind_names() {
        assert_eq!(LogKind::System.to_string(), "system");
        assert_eq!(LogKind::Enemy.as_ref(), "enemy");
    }
}
