// ==========================================
// 人力排班系统 - 核心库
// ==========================================
// 依据: Scheduler_Design_v0.1.md
// 技术栈: Rust + CSV
// 系统定位: 决策支持系统 (单遍贪心排班)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 排班约束
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::ShiftPreference;

// 领域实体
pub use domain::{AssignmentRecord, CoverageRecord, DemandSlot, EmployeeProfile};

// 引擎
pub use engine::{
    AssignmentCommitter, CandidateRanker, CoverageAggregator, DemandNormalizer, EligibilityMode,
    EmployeeLedger, ScheduleError, ScheduleOrchestrator, ScheduleRunResult,
};

// 导入
pub use importer::{DemandImporter, EmployeeImporter, ImportError};

// 配置
pub use config::SchedulingConstraints;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "人力排班系统";
