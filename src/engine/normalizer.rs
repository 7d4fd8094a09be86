// ==========================================
// 人力排班系统 - 需求规整引擎
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 4.1 Demand Normalizer
// ==========================================
// 职责: 时间线排序 + 全局平均产能 + 每槽所需人数
// 红线: 人数按全局平均产能折算,不按候选人逐个折算（刻意简化）
// ==========================================

use crate::domain::{DemandSlot, EmployeeProfile};
use crate::engine::error::{ScheduleError, ScheduleResult};

/// 平均产能的除法下限,避免产能接近零时人数爆炸
const MIN_CAPACITY_FLOOR: f64 = 0.1;

// ==========================================
// DemandNormalizer - 需求规整引擎
// ==========================================
pub struct DemandNormalizer;

impl DemandNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 校验并按时间升序排序需求时间线
    ///
    /// 处理顺序是契约的一部分:台账的休息间隔与周上限状态依赖历史,
    /// 槽 k 的资格计算读取槽 <k 处理时写入的状态
    pub fn normalize(&self, mut slots: Vec<DemandSlot>) -> ScheduleResult<Vec<DemandSlot>> {
        for slot in &slots {
            if slot.hour > 23 {
                return Err(ScheduleError::InvalidSlot {
                    timestamp: slot.timestamp.to_string(),
                    message: format!("hour {} 超出 0-23", slot.hour),
                });
            }
        }
        slots.sort_by_key(|s| s.timestamp);
        Ok(slots)
    }

    /// 全局平均产能: 名册 base_productivity 的均值,空名册回退 1.0
    pub fn average_capacity(&self, roster: &[EmployeeProfile]) -> f64 {
        if roster.is_empty() {
            return 1.0;
        }
        let sum: f64 = roster.iter().map(|e| e.base_productivity).sum();
        sum / roster.len() as f64
    }

    /// 单槽所需人数 = ceil(demand / max(0.1, avg_capacity))
    pub fn required_headcount(&self, demand: u32, avg_capacity: f64) -> usize {
        let capacity = avg_capacity.max(MIN_CAPACITY_FLOOR);
        (demand as f64 / capacity).ceil() as usize
    }
}

impl Default for DemandNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
