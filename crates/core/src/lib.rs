//! Domain logic for the foundry trial quality tracking platform.
//!
//! This crate has no internal dependencies and holds everything the DB and
//! API layers share: id/timestamp aliases, the domain error enum, role and
//! department constants, the department pipeline order, the inspection
//! transition dispatch table, audit action names, and the best-effort
//! master-list specification parser.

pub mod audit;
pub mod departments;
pub mod error;
pub mod roles;
pub mod specparse;
pub mod transition;
pub mod trial;
pub mod types;
