//! Statement aggregation (pure domain logic).
//!
//! Turns an invoice and a play catalog into an immutable `StatementResult`.
//! No IO, no formatting: renderers consume the result elsewhere.

pub mod invoice;
pub mod play;
pub mod statement;

pub use invoice::{Invoice, Performance};
pub use play::{Play, PlayCatalog, PlayDefinition};
pub use statement::{PerformanceResult, StatementAggregator, StatementResult, statement};
