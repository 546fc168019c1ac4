//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod audit;
pub mod department;
pub mod dimensional;
pub mod machine_shop;
pub mod master_card;
pub mod material_correction;
pub mod metallurgical;
pub mod mould_correction;
pub mod otp;
pub mod progress;
pub mod sand_properties;
pub mod trial_card;
pub mod user;
pub mod visual;
