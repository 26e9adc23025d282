// src/lib.rs

//! Roster Tracker Library
//!
//! Snapshots the instructors assigned to every course in a term, compares
//! the snapshot against the previous run and records each instructor
//! addition or removal in a relational change log.

pub mod changelog;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
