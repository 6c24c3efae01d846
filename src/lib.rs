//! SkillSwap: a terminal client for a peer skill-exchange marketplace.
//!
//! Students post offers to teach a skill, browse and search what others
//! offer, and book tutoring sessions against listed time slots. All state
//! lives in an in-memory [`store::DomainStore`]; nothing touches the
//! network or disk besides the optional log file.

pub mod app;
pub mod error;
pub mod models;
pub mod store;
pub mod ui;
