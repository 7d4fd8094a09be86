// ==========================================
// 人力排班系统 - 配置层
// ==========================================
// 职责: 排班约束对象的定义与文件加载
// ==========================================

pub mod constraints;

pub use constraints::{ConfigError, RoleRequirement, SchedulingConstraints, ShiftTemplate};
