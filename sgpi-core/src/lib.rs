//! Core types for the SGPI site catalogs.
//!
//! This crate provides everything the events and member-directory views need:
//! - `sync` for cache-aware loading of a remote catalog
//! - `search` for pending/committed filter criteria and matching
//! - `pagination` for page slicing and the page-number window
//! - `url_state` for keeping committed criteria in a linkable URL
//! - `view` which wires the above together for one mounted view

pub mod catalog;
pub mod config;
pub mod error;
pub mod pagination;
pub mod record;
pub mod remote;
pub mod resource;
pub mod search;
pub mod session;
pub mod sync;
pub mod upcoming;
pub mod url_state;
pub mod view;

pub use catalog::{Catalog, Freshness};
pub use error::{SgpiError, SgpiResult};
pub use record::Record;
pub use resource::Resource;
