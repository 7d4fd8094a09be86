// ==========================================
// 人力排班系统 - 需求表导入器
// ==========================================
// 依据: Scheduler_Design_v0.1.md - 6. 外部接口 (需求表)
// 红线: timestamp 列缺失立即失败,不产出部分结果
// ==========================================
// 输入列: timestamp (必填) / hour / date / demand (必填,非负)
// hour 与 date 列缺失时由时间戳推导
// ==========================================

use crate::domain::DemandSlot;
use crate::importer::error::{ImportError, ImportResult};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::info;

// 常见日期时间布局（pandas 导出样例均可覆盖）
const TS_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// 按已知布局逐一尝试解析时间戳
pub(crate) fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    for fmt in TS_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(ts);
        }
    }
    None
}

// ==========================================
// DemandImporter - 需求表导入器
// ==========================================
pub struct DemandImporter;

impl DemandImporter {
    pub fn new() -> Self {
        Self
    }

    /// 从 CSV 文件导入需求时间线
    pub fn import<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<DemandSlot>> {
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

        // timestamp 是唯一的硬前提
        let ts_idx = col("timestamp")
            .ok_or_else(|| ImportError::MissingColumn("timestamp".to_string()))?;
        let demand_idx =
            col("demand").ok_or_else(|| ImportError::MissingColumn("demand".to_string()))?;
        let hour_idx = col("hour");
        let date_idx = col("date");

        let mut slots = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row = row_idx + 2; // 1 起始 + 表头行

            let ts_raw = record.get(ts_idx).unwrap_or("").trim();
            if ts_raw.is_empty() {
                return Err(ImportError::TimestampParseError {
                    row,
                    value: String::new(),
                });
            }
            let timestamp = parse_timestamp(ts_raw).ok_or_else(|| {
                ImportError::TimestampParseError {
                    row,
                    value: ts_raw.to_string(),
                }
            })?;

            let demand_raw = record.get(demand_idx).unwrap_or("").trim();
            let demand: u32 =
                demand_raw
                    .parse()
                    .map_err(|e| ImportError::TypeConversionError {
                        row,
                        field: "demand".to_string(),
                        message: format!("{} ({})", e, demand_raw),
                    })?;

            let hour = match hour_idx.map(|i| record.get(i).unwrap_or("").trim()) {
                Some(raw) if !raw.is_empty() => {
                    raw.parse()
                        .map_err(|e| ImportError::TypeConversionError {
                            row,
                            field: "hour".to_string(),
                            message: format!("{} ({})", e, raw),
                        })?
                }
                _ => timestamp.hour(),
            };

            let date = match date_idx.map(|i| record.get(i).unwrap_or("").trim()) {
                Some(raw) if !raw.is_empty() => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|e| ImportError::TypeConversionError {
                        row,
                        field: "date".to_string(),
                        message: format!("{} ({})", e, raw),
                    })?,
                _ => timestamp.date(),
            };

            slots.push(DemandSlot {
                timestamp,
                hour,
                date,
                demand,
            });
        }

        info!(path = %path.display(), slots = slots.len(), "需求表导入完成");
        Ok(slots)
    }
}

impl Default for DemandImporter {
    fn default() -> Self {
        Self::new()
    }
}
