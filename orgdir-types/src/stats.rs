use serde::{Deserialize, Serialize};

/// Directory statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    /// Number of stored activities
    pub activities: usize,
    /// Number of stored buildings
    pub buildings: usize,
    /// Number of stored organizations
    pub organizations: usize,
    /// Number of stored phone rows
    pub phones: usize,
    /// Total number of committed write operations
    pub operations_count: u64,
    /// Approximate size of stored keys and values in bytes
    pub size_bytes: usize,
}

impl DirectoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_operation(&mut self) {
        self.operations_count += 1;
    }

    pub fn set_size_bytes(&mut self, bytes: usize) {
        self.size_bytes = bytes;
    }
}
