//! Job application form: field values, declarative validation, conditional fields and the
//! HTTP surface that hosts the rendered form.

pub mod config;
pub mod error;
pub mod form;
pub mod telemetry;
