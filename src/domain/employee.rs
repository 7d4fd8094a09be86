// ==========================================
// 人力排班系统 - 员工档案领域模型
// ==========================================
// 依据: Scheduler_Design_v0.1.md - Employee Roster
// ==========================================

use crate::domain::types::ShiftPreference;
use serde::{Deserialize, Serialize};

// 缺省值（可选列缺失时使用）
pub const DEFAULT_SKILL_LEVEL: i32 = 1;
pub const DEFAULT_MAX_WEEK_HOURS: f64 = 40.0;
pub const DEFAULT_BASE_PRODUCTIVITY: f64 = 1.0;

// ==========================================
// EmployeeProfile - 员工档案
// ==========================================
// 静态输入,排班过程中不变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub employee_id: String,             // 员工ID (唯一)
    pub skill_level: i32,                // 技能等级 (>=1)
    pub max_week_hours: f64,             // 周工时上限 (>0)
    pub preferred_shift: ShiftPreference, // 班次偏好
    pub base_productivity: f64,          // 基准产能 (>0)
}

impl EmployeeProfile {
    /// 以缺省属性构造员工档案
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            skill_level: DEFAULT_SKILL_LEVEL,
            max_week_hours: DEFAULT_MAX_WEEK_HOURS,
            preferred_shift: ShiftPreference::default(),
            base_productivity: DEFAULT_BASE_PRODUCTIVITY,
        }
    }

    pub fn with_skill_level(mut self, skill_level: i32) -> Self {
        self.skill_level = skill_level;
        self
    }

    pub fn with_max_week_hours(mut self, max_week_hours: f64) -> Self {
        self.max_week_hours = max_week_hours;
        self
    }

    pub fn with_preferred_shift(mut self, preferred_shift: ShiftPreference) -> Self {
        self.preferred_shift = preferred_shift;
        self
    }

    pub fn with_base_productivity(mut self, base_productivity: f64) -> Self {
        self.base_productivity = base_productivity;
        self
    }
}
