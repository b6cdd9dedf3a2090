//! `railcast-reference`: the reference-data capability.
//!
//! One trait, two selectable backends:
//! - [`StaticReferenceProvider`]: in-process table for development and tests.
//! - [`RemoteReferenceProvider`]: best-effort lookups against the dataset
//!   service, degrading to the documented defaults on failure.
//!
//! The backend is chosen once at process configuration time; the pipeline
//! only ever sees `dyn ReferenceDataProvider`.

pub mod client;
pub mod provider;
pub mod remote;
pub mod static_table;

pub use client::{DatasetClient, DatasetError};
pub use provider::{ReferenceDataProvider, ReferenceError, DEFAULT_AVAILABLE_WAGONS};
pub use remote::RemoteReferenceProvider;
pub use static_table::StaticReferenceProvider;
