// ==========================================
// 人力排班系统 - 引擎编排器
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 2. 控制流
// 用途: 协调规整/排序/提交/汇总四大引擎的执行顺序
// 红线: 槽按时间升序严格串行;槽循环内不做任何文件 I/O
// ==========================================

use crate::config::SchedulingConstraints;
use crate::domain::{AssignmentRecord, CoverageRecord, DemandSlot, EmployeeProfile};
use crate::engine::committer::AssignmentCommitter;
use crate::engine::coverage::CoverageAggregator;
use crate::engine::error::ScheduleResult;
use crate::engine::ledger::EmployeeLedger;
use crate::engine::normalizer::DemandNormalizer;
use crate::engine::ranker::{CandidateRanker, EligibilityMode};
use csv::Writer;
use std::path::Path;
use tracing::{debug, info, instrument};

// ==========================================
// ScheduleRunResult - 排班结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ScheduleRunResult {
    // 排班日志（含哨兵行）
    pub assignments: Vec<AssignmentRecord>,
    // 覆盖率报告（与需求时间线逐行对应）
    pub coverage: Vec<CoverageRecord>,
    // 全局平均产能（规整引擎算出,覆盖率复用）
    pub avg_capacity: f64,
}

// ==========================================
// ScheduleOrchestrator - 引擎编排器
// ==========================================
pub struct ScheduleOrchestrator {
    normalizer: DemandNormalizer,
    ranker: CandidateRanker,
    committer: AssignmentCommitter,
    aggregator: CoverageAggregator,
}

impl ScheduleOrchestrator {
    pub fn new() -> Self {
        Self {
            normalizer: DemandNormalizer::new(),
            ranker: CandidateRanker::new(),
            committer: AssignmentCommitter::new(),
            aggregator: CoverageAggregator::new(),
        }
    }

    /// 执行完整排班流程
    ///
    /// 除可选的结果文件写出外,本函数是 (需求表, 员工表, 可选配置) 的纯函数;
    /// 调用之间不残留任何状态
    ///
    /// # 参数
    /// - `demand`: 需求时间线
    /// - `employees`: 员工名册
    /// - `constraints`: 可选排班约束（向前兼容占位,当前不参与资格与打分）
    /// - `output_path`: 给定时将排班日志按 (timestamp, employee_id) 排序写出 CSV
    ///
    /// # 返回
    /// (排班日志, 覆盖率报告, 平均产能)
    #[instrument(skip(self, demand, employees, constraints, output_path), fields(
        slots = demand.len(),
        roster = employees.len()
    ))]
    pub fn generate_schedule(
        &self,
        demand: Vec<DemandSlot>,
        employees: Vec<EmployeeProfile>,
        constraints: Option<&SchedulingConstraints>,
        output_path: Option<&Path>,
    ) -> ScheduleResult<ScheduleRunResult> {
        info!(slots = demand.len(), roster = employees.len(), "开始执行排班流程");

        if let Some(c) = constraints {
            // 约束对象只记录,不参与计算
            debug!(constraints = ?c, "已接收排班约束（当前版本不生效）");
        }

        // ==========================================
        // 步骤1: Demand Normalizer - 时间线规整
        // ==========================================
        let demand = self.normalizer.normalize(demand)?;
        let avg_capacity = self.normalizer.average_capacity(&employees);
        debug!(avg_capacity, "全局平均产能");

        // ==========================================
        // 步骤2: 逐槽 排序 + 提交（严格串行）
        // ==========================================
        let mut ledger = EmployeeLedger::from_roster(&employees);
        let mut assignments: Vec<AssignmentRecord> = Vec::new();
        let mut relaxed_slots = 0usize;

        for slot in &demand {
            let week = slot.week();
            let needed = self.normalizer.required_headcount(slot.demand, avg_capacity);

            let (candidates, mode) = self.ranker.rank(&employees, &ledger, slot, week, needed);
            if mode == EligibilityMode::Relaxed {
                relaxed_slots += 1;
            }

            let chosen = &candidates[..needed.min(candidates.len())];
            let records = self.committer.commit_slot(&mut ledger, slot, week, chosen);
            assignments.extend(records);
        }

        // ==========================================
        // 步骤3: Coverage Aggregator - 覆盖率汇总
        // ==========================================
        let coverage = self.aggregator.aggregate(&demand, &assignments, avg_capacity);

        let unfilled = assignments.iter().filter(|r| r.is_unfilled()).count();
        info!(
            assignments = assignments.len(),
            unfilled_slots = unfilled,
            relaxed_slots,
            "排班流程完成"
        );

        // ==========================================
        // 步骤4: 可选结果写出（循环之外,一次性）
        // ==========================================
        if let Some(path) = output_path {
            let mut sorted = assignments.clone();
            Self::sort_for_export(&mut sorted);
            write_assignment_log(path, &sorted)?;
            info!(path = %path.display(), "排班日志已写出");
        }

        Ok(ScheduleRunResult {
            assignments,
            coverage,
            avg_capacity,
        })
    }

    /// 导出排序: (timestamp, employee_id) 升序;哨兵行 ID 记空串,
    /// 哨兵只在该槽无任何排班时出现,排序位置无歧义
    fn sort_for_export(records: &mut [AssignmentRecord]) {
        records.sort_by(|a, b| {
            a.timestamp.cmp(&b.timestamp).then_with(|| {
                a.employee_id
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.employee_id.as_deref().unwrap_or(""))
            })
        });
    }
}

impl Default for ScheduleOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// CSV 写出
// ==========================================

const ASSIGNMENT_HEADER: &[&str] = &[
    "employee_id",
    "timestamp",
    "date",
    "hour",
    "assigned_hours",
    "week",
    "preferred_shift_match",
    "skill_level",
    "base_productivity",
];

const COVERAGE_HEADER: &[&str] = &[
    "timestamp",
    "hour",
    "date",
    "demand",
    "total_assigned_hours",
    "understaff",
];

const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 排班日志写出为 CSV（列同 AssignmentRecord）
pub fn write_assignment_log(path: &Path, records: &[AssignmentRecord]) -> ScheduleResult<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(ASSIGNMENT_HEADER)?;
    for r in records {
        wtr.write_record(&[
            r.employee_id.clone().unwrap_or_default(),
            r.timestamp.format(TS_FORMAT).to_string(),
            r.date.to_string(),
            r.hour.to_string(),
            format!("{:.1}", r.assigned_hours),
            r.week.to_string(),
            r.preferred_shift_match.to_string(),
            r.skill_level.to_string(),
            format!("{}", r.base_productivity),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// 覆盖率报告写出为 CSV（原需求列 + total_assigned_hours + understaff）
pub fn write_coverage_report(path: &Path, records: &[CoverageRecord]) -> ScheduleResult<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(COVERAGE_HEADER)?;
    for r in records {
        wtr.write_record(&[
            r.timestamp.format(TS_FORMAT).to_string(),
            r.hour.to_string(),
            r.date.to_string(),
            r.demand.to_string(),
            format!("{:.1}", r.total_assigned_hours),
            format!("{:.2}", r.understaff),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
