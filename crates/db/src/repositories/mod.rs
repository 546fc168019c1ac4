//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Plain reads take `&PgPool`; writes that participate in a workflow
//! transaction take `&mut PgConnection` so the API layer can bundle the
//! domain write, the audit entry, and the ledger/trial mutation into one
//! `pool.begin()` transaction.

pub mod audit_repo;
pub mod department_repo;
pub mod dimensional_repo;
pub mod machine_shop_repo;
pub mod master_card_repo;
pub mod material_correction_repo;
pub mod metallurgical_repo;
pub mod mould_correction_repo;
pub mod otp_repo;
pub mod progress_repo;
pub mod sand_properties_repo;
pub mod trial_card_repo;
pub mod user_repo;
pub mod visual_repo;

pub use audit_repo::AuditLogRepo;
pub use department_repo::DepartmentRepo;
pub use dimensional_repo::DimensionalInspectionRepo;
pub use machine_shop_repo::MachineShopRepo;
pub use master_card_repo::MasterCardRepo;
pub use material_correction_repo::MaterialCorrectionRepo;
pub use metallurgical_repo::MetallurgicalInspectionRepo;
pub use mould_correction_repo::MouldCorrectionRepo;
pub use otp_repo::OtpRepo;
pub use progress_repo::ProgressRepo;
pub use sand_properties_repo::SandPropertiesRepo;
pub use trial_card_repo::TrialCardRepo;
pub use user_repo::UserRepo;
pub use visual_repo::VisualInspectionRepo;
