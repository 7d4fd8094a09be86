// ==========================================
// 人力排班系统 - 排班提交引擎
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 4.4 Assignment Committer
// 红线: 只对选中的候选变更台账;选中时刻捕获的分数原样入账
// ==========================================
// 职责: 选中候选入账 + 生成排班记录;无人可排时生成哨兵行
// ==========================================

use crate::domain::{AssignmentRecord, DemandSlot};
use crate::engine::ledger::EmployeeLedger;
use crate::engine::ranker::ScoredCandidate;

// ==========================================
// AssignmentCommitter - 排班提交引擎
// ==========================================
pub struct AssignmentCommitter;

impl AssignmentCommitter {
    pub fn new() -> Self {
        Self
    }

    /// 提交单槽的选中候选
    ///
    /// # 参数
    /// - `ledger`: 员工台账（会被修改）
    /// - `slot`: 当前需求槽
    /// - `week`: 槽所属周号
    /// - `chosen`: 排序后取前 needed 的候选
    ///
    /// # 返回
    /// 本槽追加的排班记录;`chosen` 为空时返回一条哨兵记录
    pub fn commit_slot(
        &self,
        ledger: &mut EmployeeLedger,
        slot: &DemandSlot,
        week: u32,
        chosen: &[ScoredCandidate],
    ) -> Vec<AssignmentRecord> {
        if chosen.is_empty() {
            return vec![AssignmentRecord::unfilled(
                slot.timestamp,
                slot.date,
                slot.hour,
                week,
            )];
        }

        let mut records = Vec::with_capacity(chosen.len());
        for candidate in chosen {
            ledger.commit(&candidate.employee_id, slot.timestamp, week);
            records.push(AssignmentRecord {
                employee_id: Some(candidate.employee_id.clone()),
                timestamp: slot.timestamp,
                date: slot.date,
                hour: slot.hour,
                assigned_hours: 1.0,
                week,
                preferred_shift_match: candidate.preferred_shift_match,
                skill_level: candidate.skill_level,
                base_productivity: candidate.base_productivity,
            });
        }
        records
    }
}

impl Default for AssignmentCommitter {
    fn default() -> Self {
        Self::new()
    }
}
