// ==========================================
// 人力排班系统 - 候选排序引擎
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 4.3 Candidate Ranker
// 红线: 打分读取本槽提交前的台账状态;严格/宽松两种策略共用同一打分逻辑
// ==========================================
// 职责: 两级候选生成 + 四键确定性排序
// 输入: 名册 + 台账当前状态 + 单个需求槽
// 输出: 有序候选列表（不足 needed 不是错误,表示欠员）
// ==========================================

use crate::domain::{DemandSlot, EmployeeProfile};
use crate::engine::ledger::EmployeeLedger;
use std::cmp::Ordering;
use tracing::debug;

// ==========================================
// EligibilityMode - 资格判定策略
// ==========================================
// 严格: 周上限 + 8 小时休息间隔
// 宽松: 仅周上限（严格候选不足时整体重建,不做部分补齐）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityMode {
    Strict,
    Relaxed,
}

// ==========================================
// ScoredCandidate - 打分后的候选
// ==========================================
// 分数在选中时刻捕获,提交后原样写入排班记录
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub employee_id: String,
    pub preferred_shift_match: u8,
    pub skill_level: i32,
    pub assigned_this_week: f64,
    pub base_productivity: f64,
}

// ==========================================
// CandidateRanker - 候选排序引擎
// ==========================================
pub struct CandidateRanker;

impl CandidateRanker {
    pub fn new() -> Self {
        Self
    }

    /// 两级候选生成: 先严格,数量不足 needed 时丢弃重建为宽松
    ///
    /// # 返回
    /// (有序候选列表, 实际使用的策略)
    pub fn rank(
        &self,
        roster: &[EmployeeProfile],
        ledger: &EmployeeLedger,
        slot: &DemandSlot,
        week: u32,
        needed: usize,
    ) -> (Vec<ScoredCandidate>, EligibilityMode) {
        let mut candidates = self.build_candidates(roster, ledger, slot, week, EligibilityMode::Strict);
        let mut mode = EligibilityMode::Strict;

        if candidates.len() < needed {
            debug!(
                timestamp = %slot.timestamp,
                strict_count = candidates.len(),
                needed,
                "严格候选不足,整体重建为宽松策略"
            );
            candidates = self.build_candidates(roster, ledger, slot, week, EligibilityMode::Relaxed);
            mode = EligibilityMode::Relaxed;
        }

        Self::sort_candidates(&mut candidates);
        (candidates, mode)
    }

    /// 单策略候选生成,打分逻辑两种策略共用
    pub fn build_candidates(
        &self,
        roster: &[EmployeeProfile],
        ledger: &EmployeeLedger,
        slot: &DemandSlot,
        week: u32,
        mode: EligibilityMode,
    ) -> Vec<ScoredCandidate> {
        roster
            .iter()
            .filter(|emp| match mode {
                EligibilityMode::Strict => ledger.is_eligible_strict(emp, slot.timestamp, week),
                EligibilityMode::Relaxed => ledger.is_eligible_relaxed(emp, week),
            })
            .map(|emp| ScoredCandidate {
                employee_id: emp.employee_id.clone(),
                preferred_shift_match: emp.preferred_shift.match_score(slot.hour),
                skill_level: emp.skill_level,
                assigned_this_week: ledger.assigned_hours(&emp.employee_id, week),
                base_productivity: emp.base_productivity,
            })
            .collect()
    }

    /// 排序键: 偏好匹配降序 > 技能降序 > 本周工时升序 > 员工ID升序
    ///
    /// 第四键保证逐字节可复现（名册迭代顺序不得影响结果）
    fn sort_candidates(candidates: &mut [ScoredCandidate]) {
        candidates.sort_by(|a, b| {
            b.preferred_shift_match
                .cmp(&a.preferred_shift_match)
                .then_with(|| b.skill_level.cmp(&a.skill_level))
                .then_with(|| {
                    a.assigned_this_week
                        .partial_cmp(&b.assigned_this_week)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });
    }
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new()
    }
}
