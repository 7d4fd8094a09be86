// ==========================================
// 人力排班系统 - 需求时间线领域模型
// ==========================================
// 依据: Scheduler_Design_v0.1.md - Demand Timeline
// ==========================================

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

// ==========================================
// DemandSlot - 单小时需求槽
// ==========================================
// 不可变输入,每小时一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSlot {
    pub timestamp: NaiveDateTime, // 槽起始时刻 (必填)
    pub hour: u32,                // 小时 (0-23)
    pub date: NaiveDate,          // 日期
    pub demand: u32,              // 需求量 (非负)
}

impl DemandSlot {
    /// 由时间戳和需求量构造（hour/date 从时间戳推导）
    pub fn from_timestamp(timestamp: NaiveDateTime, demand: u32) -> Self {
        Self {
            timestamp,
            hour: timestamp.hour(),
            date: timestamp.date(),
            demand,
        }
    }

    /// 槽所属 ISO 周号（周状态以此为键）
    pub fn week(&self) -> u32 {
        self.timestamp.date().iso_week().week()
    }
}
