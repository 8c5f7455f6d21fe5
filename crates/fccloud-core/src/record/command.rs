//! Command results returned by mutating operations.

use serde::{Deserialize, Serialize};

use super::{DataRecord, FlatRecord};

/// The outcome of a server-side command.
///
/// The server answers every mutating call with a `<command>` element carrying
/// `type`, `result` and `message` leaves. None of them are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    data: DataRecord,
}

impl CommandRecord {
    pub fn new(fields: FlatRecord) -> Self {
        Self {
            data: DataRecord::new(fields),
        }
    }

    /// The command name the server reports, e.g. `addmetadataset`.
    pub fn command_type(&self) -> Option<&str> {
        self.data.value_for_key("type")
    }

    /// Raw result code. `1` is success.
    pub fn result(&self) -> Option<&str> {
        self.data.value_for_key("result")
    }

    pub fn message(&self) -> Option<&str> {
        self.data.value_for_key("message")
    }

    pub fn is_success(&self) -> bool {
        self.result() == Some("1")
    }

    pub fn data(&self) -> &DataRecord {
        &self.data
    }
}
