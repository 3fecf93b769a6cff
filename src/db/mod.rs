// SPDX-License-Identifier: MIT

//! Database layer: write-through JSON document store.

pub mod seed;
pub mod store;

pub use store::{DatabaseSchema, Store};
