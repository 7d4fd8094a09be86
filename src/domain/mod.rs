// ==========================================
// 人力排班系统 - 领域模型层
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 数据模型
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含文件访问逻辑,不含引擎逻辑
// ==========================================

pub mod demand;
pub mod employee;
pub mod schedule;
pub mod types;

// 重导出核心类型
pub use demand::DemandSlot;
pub use employee::EmployeeProfile;
pub use schedule::{AssignmentRecord, CoverageRecord};
pub use types::ShiftPreference;
