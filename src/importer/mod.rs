// ==========================================
// 人力排班系统 - 导入层
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 6. 外部接口
// ==========================================
// 职责: CSV -> 领域实体;缺可选列补缺省值,缺必填列立即失败
// ==========================================

pub mod demand_importer;
pub mod employee_importer;
pub mod error;

// 重导出
pub use demand_importer::DemandImporter;
pub use employee_importer::EmployeeImporter;
pub use error::{ImportError, ImportResult};
