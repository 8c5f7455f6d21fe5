//! Record materialization.
//!
//! Every element the server returns is first flattened into a [`FlatRecord`],
//! then built into a typed [`Record`] according to a [`RecordShape`].

mod command;
mod data;
mod flat;
mod shape;

pub use command::CommandRecord;
pub use data::DataRecord;
pub use flat::{FlatRecord, truthy};
pub use shape::{Record, RecordShape};
