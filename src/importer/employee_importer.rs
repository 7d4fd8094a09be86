// ==========================================
// 人力排班系统 - 员工表导入器
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 6. 外部接口 (员工表)
// ==========================================
// 输入列: employee_id (必填,唯一) / skill_level / max_week_hours /
//        preferred_shift / base_productivity
// 可选列缺失或字段为空时补缺省值,不报错
// 重复 employee_id 保留后一行（与按键覆盖语义一致）,记警告日志
// ==========================================

use crate::domain::employee::{
    DEFAULT_BASE_PRODUCTIVITY, DEFAULT_MAX_WEEK_HOURS, DEFAULT_SKILL_LEVEL,
};
use crate::domain::{EmployeeProfile, ShiftPreference};
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

// ==========================================
// EmployeeImporter - 员工表导入器
// ==========================================
pub struct EmployeeImporter;

impl EmployeeImporter {
    pub fn new() -> Self {
        Self
    }

    /// 从 CSV 文件导入员工名册
    pub fn import<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<EmployeeProfile>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let col = |name: &str| headers.iter().position(|h| h == name);

        let id_idx = col("employee_id")
            .ok_or_else(|| ImportError::MissingColumn("employee_id".to_string()))?;
        let skill_idx = col("skill_level");
        let max_hours_idx = col("max_week_hours");
        let pref_idx = col("preferred_shift");
        let productivity_idx = col("base_productivity");

        let mut roster: Vec<EmployeeProfile> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row = row_idx + 2;

            let employee_id = record.get(id_idx).unwrap_or("").trim().to_string();
            if employee_id.is_empty() {
                return Err(ImportError::PrimaryKeyMissing(row));
            }

            let field = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
            };

            let skill_level = match field(skill_idx) {
                Some(raw) => raw
                    .parse()
                    .map_err(|e| ImportError::TypeConversionError {
                        row,
                        field: "skill_level".to_string(),
                        message: format!("{} ({})", e, raw),
                    })?,
                None => DEFAULT_SKILL_LEVEL,
            };

            let max_week_hours = match field(max_hours_idx) {
                Some(raw) => raw
                    .parse()
                    .map_err(|e| ImportError::TypeConversionError {
                        row,
                        field: "max_week_hours".to_string(),
                        message: format!("{} ({})", e, raw),
                    })?,
                None => DEFAULT_MAX_WEEK_HOURS,
            };

            let preferred_shift = field(pref_idx)
                .map(ShiftPreference::parse)
                .unwrap_or_default();

            let base_productivity = match field(productivity_idx) {
                Some(raw) => raw
                    .parse()
                    .map_err(|e| ImportError::TypeConversionError {
                        row,
                        field: "base_productivity".to_string(),
                        message: format!("{} ({})", e, raw),
                    })?,
                None => DEFAULT_BASE_PRODUCTIVITY,
            };

            let profile = EmployeeProfile {
                employee_id: employee_id.clone(),
                skill_level,
                max_week_hours,
                preferred_shift,
                base_productivity,
            };

            // 重复主键: 后行覆盖前行
            if let Some(&pos) = seen.get(&employee_id) {
                warn!(employee_id = %employee_id, row, "employee_id 重复,保留后一行");
                roster[pos] = profile;
            } else {
                seen.insert(employee_id, roster.len());
                roster.push(profile);
            }
        }

        info!(path = %path.display(), roster = roster.len(), "员工表导入完成");
        Ok(roster)
    }
}

impl Default for EmployeeImporter {
    fn default() -> Self {
        Self::new()
    }
}
