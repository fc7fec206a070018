// Rust guideline compliant 2026-10-16

//! AFU-9 Core Library
//!
//! This crate provides the deterministic lifecycle core of the AFU-9 loop:
//! - Data models (Status, IssueData, DraftData, LoopStep)
//! - Blocker taxonomy with static descriptions
//! - Next-step resolution (pure, total, stateless)
//! - Transition validation over a fixed status graph
//! - Lifecycle graph queries (reachability, forward paths)
//! - JSONL snapshot reading and configuration
//! - Error types and result handling

pub mod blocker;
pub mod config;
pub mod error;
pub mod fsm;
pub mod graph;
pub mod models;
pub mod resolver;
pub mod storage;

pub use blocker::{get_blocker_description, BlockerCode};
pub use config::{Config, LogLevel, OutputFormat};
pub use error::{Error, Result};
pub use fsm::{is_valid_transition, TRANSITIONS};
pub use graph::LifecycleGraph;
pub use models::{DraftData, IssueData, LoopStep, Status, ValidationStatus};
pub use resolver::{resolve_next_step, StepResolution};
pub use storage::SnapshotStore;
