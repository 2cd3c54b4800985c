//! `playbill-core` — shared building blocks for theatrical billing.
//!
//! This crate contains **pure domain** primitives (no IO, no formatting).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{BillingError, BillingResult};
pub use id::PlayId;
pub use value_object::ValueObject;
