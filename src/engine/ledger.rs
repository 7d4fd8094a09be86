// ==========================================
// 人力排班系统 - 员工台账
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 2. Employee Ledger
// 红线: 台账只能经 commit 变更,且只对实际选中的员工提交
// ==========================================
// 职责: 每员工的周工时与最近排班时刻记账
// 输入: 员工名册 (静态)
// 输出: 资格判定 + 记账变更
// ==========================================

use crate::domain::EmployeeProfile;
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// 两次排班之间的最小休息间隔（小时,软约束）
pub const MIN_REST_GAP_HOURS: f64 = 8.0;

// ==========================================
// LedgerEntry - 单员工台账项
// ==========================================
// 周状态以"周号 -> 工时"显式建键:首次使用插入新键,周切换即换键,
// 从不清空;运行结束后整个台账即丢弃
#[derive(Debug, Clone, Default)]
pub struct LedgerEntry {
    pub assigned_hours_by_week: HashMap<u32, f64>,
    pub last_assigned_ts: Option<NaiveDateTime>,
}

// ==========================================
// EmployeeLedger - 员工台账
// ==========================================
// 随流水线显式传递,不做全局状态,保证算法可重入、可单槽测试
#[derive(Debug, Clone)]
pub struct EmployeeLedger {
    entries: HashMap<String, LedgerEntry>,
}

impl EmployeeLedger {
    /// 由名册初始化台账（全部清零）
    pub fn from_roster(roster: &[EmployeeProfile]) -> Self {
        let entries = roster
            .iter()
            .map(|emp| (emp.employee_id.clone(), LedgerEntry::default()))
            .collect();
        Self { entries }
    }

    /// 指定员工在指定周已排工时（无记录返回 0.0）
    pub fn assigned_hours(&self, employee_id: &str, week: u32) -> f64 {
        self.entries
            .get(employee_id)
            .and_then(|e| e.assigned_hours_by_week.get(&week))
            .copied()
            .unwrap_or(0.0)
    }

    /// 指定员工最近一次排班时刻
    pub fn last_assigned_ts(&self, employee_id: &str) -> Option<NaiveDateTime> {
        self.entries.get(employee_id).and_then(|e| e.last_assigned_ts)
    }

    /// 严格资格判定: 周工时未达上限 且 (从未排班 或 距上次排班 >= 8 小时)
    pub fn is_eligible_strict(
        &self,
        employee: &EmployeeProfile,
        ts: NaiveDateTime,
        week: u32,
    ) -> bool {
        if !self.is_eligible_relaxed(employee, week) {
            return false;
        }
        match self.last_assigned_ts(&employee.employee_id) {
            None => true,
            Some(last) => {
                let delta_hours = (ts - last).num_seconds() as f64 / 3600.0;
                delta_hours >= MIN_REST_GAP_HOURS
            }
        }
    }

    /// 宽松资格判定: 仅检查周工时上限（忽略休息间隔）
    pub fn is_eligible_relaxed(&self, employee: &EmployeeProfile, week: u32) -> bool {
        self.assigned_hours(&employee.employee_id, week) < employee.max_week_hours
    }

    /// 提交一次 1 小时排班
    ///
    /// 台账状态变更的唯一入口;调用方必须只对该槽实际选中的员工提交
    pub fn commit(&mut self, employee_id: &str, ts: NaiveDateTime, week: u32) {
        let entry = self.entries.entry(employee_id.to_string()).or_default();
        *entry.assigned_hours_by_week.entry(week).or_insert(0.0) += 1.0;
        entry.last_assigned_ts = Some(ts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn roster() -> Vec<EmployeeProfile> {
        vec![
            EmployeeProfile::new("E001").with_max_week_hours(40.0),
            EmployeeProfile::new("E002").with_max_week_hours(2.0),
        ]
    }

    #[test]
    fn test_fresh_ledger_is_zeroed() {
        let ledger = EmployeeLedger::from_roster(&roster());
        assert_eq!(ledger.assigned_hours("E001", 27), 0.0);
        assert_eq!(ledger.last_assigned_ts("E001"), None);
    }

    #[test]
    fn test_commit_increments_week_hours_and_sets_ts() {
        let mut ledger = EmployeeLedger::from_roster(&roster());
        ledger.commit("E001", ts(1, 8), 27);
        assert_eq!(ledger.assigned_hours("E001", 27), 1.0);
        assert_eq!(ledger.last_assigned_ts("E001"), Some(ts(1, 8)));

        ledger.commit("E001", ts(1, 20), 27);
        assert_eq!(ledger.assigned_hours("E001", 27), 2.0);
        assert_eq!(ledger.last_assigned_ts("E001"), Some(ts(1, 20)));
    }

    #[test]
    fn test_week_rollover_is_a_new_key() {
        let mut ledger = EmployeeLedger::from_roster(&roster());
        ledger.commit("E001", ts(1, 8), 27);
        ledger.commit("E001", ts(8, 8), 28);
        // 第 27 周的工时不受第 28 周影响
        assert_eq!(ledger.assigned_hours("E001", 27), 1.0);
        assert_eq!(ledger.assigned_hours("E001", 28), 1.0);
    }

    #[test]
    fn test_strict_requires_rest_gap() {
        let emp = EmployeeProfile::new("E001");
        let mut ledger = EmployeeLedger::from_roster(&[emp.clone()]);

        // 从未排班: 合格
        assert!(ledger.is_eligible_strict(&emp, ts(1, 8), 27));

        ledger.commit("E001", ts(1, 8), 27);
        // 7 小时后: 不合格
        assert!(!ledger.is_eligible_strict(&emp, ts(1, 15), 27));
        // 恰好 8 小时: 合格（闭边界）
        assert!(ledger.is_eligible_strict(&emp, ts(1, 16), 27));
    }

    #[test]
    fn test_relaxed_ignores_rest_gap() {
        let emp = EmployeeProfile::new("E001");
        let mut ledger = EmployeeLedger::from_roster(&[emp.clone()]);
        ledger.commit("E001", ts(1, 8), 27);

        // 1 小时后: 严格不合格,宽松合格
        assert!(!ledger.is_eligible_strict(&emp, ts(1, 9), 27));
        assert!(ledger.is_eligible_relaxed(&emp, 27));
    }

    #[test]
    fn test_week_cap_blocks_both_modes() {
        let emp = EmployeeProfile::new("E002").with_max_week_hours(2.0);
        let mut ledger = EmployeeLedger::from_roster(&[emp.clone()]);
        ledger.commit("E002", ts(1, 0), 27);
        ledger.commit("E002", ts(1, 12), 27);

        assert_eq!(ledger.assigned_hours("E002", 27), 2.0);
        assert!(!ledger.is_eligible_relaxed(&emp, 27));
        assert!(!ledger.is_eligible_strict(&emp, ts(2, 12), 27));
        // 但新的一周重新开始
        assert!(ledger.is_eligible_relaxed(&emp, 28));
    }
}
