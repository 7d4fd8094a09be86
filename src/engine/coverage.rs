// ==========================================
// 人力排班系统 - 覆盖率汇总引擎
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 4.5 Coverage Aggregator
// 红线: 左连接保留每一行需求;欠员为负时截断为 0（超编不报告）
// ==========================================
// 职责: 全部槽处理完后跑一次,按时间戳汇总实排工时并计算欠员量
// 输入: 完整排班日志 + 原需求时间线 + 全局平均产能（规整引擎算出,不重算）
// ==========================================

use crate::domain::{AssignmentRecord, CoverageRecord, DemandSlot};
use chrono::NaiveDateTime;
use std::collections::HashMap;

// ==========================================
// CoverageAggregator - 覆盖率汇总引擎
// ==========================================
pub struct CoverageAggregator;

impl CoverageAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 汇总覆盖率
    ///
    /// # 参数
    /// - `demand`: 原需求时间线（输出与其逐行对应）
    /// - `assignments`: 完整排班日志（哨兵行 assigned_hours=0.0,自然计入）
    /// - `avg_capacity`: 全局平均产能
    pub fn aggregate(
        &self,
        demand: &[DemandSlot],
        assignments: &[AssignmentRecord],
        avg_capacity: f64,
    ) -> Vec<CoverageRecord> {
        // 按时间戳分组求和
        let mut hours_by_ts: HashMap<NaiveDateTime, f64> = HashMap::new();
        for record in assignments {
            *hours_by_ts.entry(record.timestamp).or_insert(0.0) += record.assigned_hours;
        }

        // 左连接回需求时间线,缺失补 0
        demand
            .iter()
            .map(|slot| {
                let total_assigned_hours =
                    hours_by_ts.get(&slot.timestamp).copied().unwrap_or(0.0);
                let shortfall = slot.demand as f64 - total_assigned_hours * avg_capacity;
                let understaff = ((shortfall * 100.0).round() / 100.0).max(0.0);
                CoverageRecord {
                    timestamp: slot.timestamp,
                    hour: slot.hour,
                    date: slot.date,
                    demand: slot.demand,
                    total_assigned_hours,
                    understaff,
                }
            })
            .collect()
    }
}

impl Default for CoverageAggregator {
    fn default() -> Self {
        Self::new()
    }
}
