//! Board Configuration

/// Keys and timings shared by the components and the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Storage key for the source (right) table
    pub source_key: &'static str,
    /// Storage key for the target (left) table
    pub target_key: &'static str,
    /// Storage key for the move history
    pub moves_key: &'static str,
    /// Media type the drag payload is stored under
    pub payload_mime: &'static str,
    pub toast_duration_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            source_key: "rightTableData",
            target_key: "leftTableData",
            moves_key: "movedItems",
            payload_mime: "application/json",
            toast_duration_ms: 3000,
        }
    }
}

impl BoardConfig {
    pub fn storage_keys(&self) -> [&'static str; 3] {
        [self.source_key, self.target_key, self.moves_key]
    }
}
