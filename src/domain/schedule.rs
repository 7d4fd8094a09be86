// ==========================================
// 人力排班系统 - 排班结果领域模型
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 输出表结构
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// AssignmentRecord - 单条排班记录
// ==========================================
// employee_id = None 表示该槽无人可排（哨兵行）,
// 下游覆盖率统计借此得知每槽实际排入工时,无需单独的缺口结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub employee_id: Option<String>,
    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
    pub hour: u32,
    pub assigned_hours: f64, // 1.0 正常 / 0.0 哨兵
    pub week: u32,
    pub preferred_shift_match: u8, // 0 或 1
    pub skill_level: i32,
    pub base_productivity: f64,
}

impl AssignmentRecord {
    /// 无人可排的哨兵记录
    pub fn unfilled(timestamp: NaiveDateTime, date: NaiveDate, hour: u32, week: u32) -> Self {
        Self {
            employee_id: None,
            timestamp,
            date,
            hour,
            assigned_hours: 0.0,
            week,
            preferred_shift_match: 0,
            skill_level: 0,
            base_productivity: 0.0,
        }
    }

    /// 是否哨兵行
    pub fn is_unfilled(&self) -> bool {
        self.employee_id.is_none()
    }
}

// ==========================================
// CoverageRecord - 单槽覆盖率记录
// ==========================================
// 原需求列 + 实排工时 + 欠员量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRecord {
    pub timestamp: NaiveDateTime,
    pub hour: u32,
    pub date: NaiveDate,
    pub demand: u32,
    pub total_assigned_hours: f64, // >= 0
    pub understaff: f64,           // >= 0 (超编截断为 0)
}
