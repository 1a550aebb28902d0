//! @ai:module:intent Measurement documents and their flattened per-run form
//! @ai:module:layer domain
//! @ai:module:public_api RawRecord, FlatRecord, RecordLoader, StageName, MetricKind, CircuitCounter, FileSizeCounter, Unit

pub mod flat;
pub mod loader;
pub mod raw;
pub mod schema;

pub use flat::{FlatRecord, APPROACH_COLUMN};
pub use loader::{directory_approach_name, file_approach_name, RecordLoader, RecordLoaderTrait};
pub use raw::RawRecord;
pub use schema::{CircuitCounter, FileSizeCounter, MetricKind, StageName, Unit};
