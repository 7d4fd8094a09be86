// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成三个行业（医院/呼叫中心/零售）的需求、名册与约束数据集
// 输出: tests/fixtures/datasets/*.csv / *.json
// 说明: 固定种子,输出可复现
// ==========================================

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use csv::Writer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fs;
use workforce_aps::config::{RoleRequirement, SchedulingConstraints, ShiftTemplate};

const OUT_DIR: &str = "tests/fixtures/datasets";
const START_DATE: &str = "2025-07-01";
const END_DATE: &str = "2025-07-31";
const SEED: u64 = 42;

const DEMAND_HEADER: &[&str] = &["timestamp", "hour", "date", "demand"];
const EMPLOYEE_HEADER: &[&str] = &[
    "employee_id",
    "skill_level",
    "max_week_hours",
    "preferred_shift",
    "base_productivity",
];

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all(OUT_DIR)?;

    let mut rng = StdRng::seed_from_u64(SEED);

    for industry in ["hospital", "callcenter", "retail"] {
        generate_demand(industry, &mut rng)?;
        generate_employees(industry, &mut rng)?;
        generate_constraints(industry)?;
    }

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

// ==========================================
// 需求生成
// ==========================================

fn hour_range() -> Vec<NaiveDateTime> {
    let start = NaiveDate::parse_from_str(START_DATE, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let end = NaiveDate::parse_from_str(END_DATE, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(23, 0, 0)
        .unwrap();

    let mut hours = Vec::new();
    let mut ts = start;
    while ts <= end {
        hours.push(ts);
        ts += Duration::hours(1);
    }
    hours
}

/// 行业的小时基线需求
fn base_demand(industry: &str, hour: u32) -> f64 {
    match industry {
        // 医院: 夜间低谷,上午与傍晚双峰
        "hospital" => match hour {
            7..=10 => 60.0,
            11..=14 => 80.0,
            15..=18 => 70.0,
            19..=22 => 40.0,
            _ => 20.0,
        },
        // 呼叫中心: 工作时段高峰,夜间近零
        "callcenter" => match hour {
            0..=6 => 5.0,
            9..=11 => 60.0,
            12..=13 => 120.0,
            14..=16 => 100.0,
            17..=19 => 40.0,
            _ => 10.0,
        },
        // 零售: 午后与傍晚高峰,周末更旺
        _ => match hour {
            0..=8 => 5.0,
            10..=12 => 50.0,
            13..=15 => 80.0,
            16..=19 => 60.0,
            _ => 20.0,
        },
    }
}

fn day_factor(industry: &str, ts: &NaiveDateTime) -> f64 {
    let weekend = ts.weekday().num_days_from_monday() >= 5;
    match industry {
        "hospital" => {
            if weekend {
                1.25
            } else {
                1.1
            }
        }
        "callcenter" => {
            if weekend {
                0.7
            } else {
                1.0
            }
        }
        _ => {
            if weekend {
                1.5
            } else {
                1.0
            }
        }
    }
}

fn generate_demand(industry: &str, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let path = format!("{}/demand_{}.csv", OUT_DIR, industry);
    let mut wtr = Writer::from_path(&path)?;
    wtr.write_record(DEMAND_HEADER)?;

    let mut rows = 0usize;
    for ts in hour_range() {
        let mut lam = base_demand(industry, ts.hour()) * day_factor(industry, &ts);
        // 零售偶发促销尖峰
        if industry == "retail" && rng.random_bool(0.005) {
            lam *= 2.0;
        }
        // 乘性噪声近似泊松扰动
        let demand = (lam * rng.random_range(0.8..1.2)).round().max(0.0) as u32;

        wtr.write_record(&[
            ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            ts.hour().to_string(),
            ts.date().to_string(),
            demand.to_string(),
        ])?;
        rows += 1;
    }

    wtr.flush()?;
    println!("✓ 生成 demand_{}.csv ({}条)", industry, rows);
    Ok(())
}

// ==========================================
// 名册生成
// ==========================================

fn generate_employees(industry: &str, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let n_emp = match industry {
        "hospital" => 60,
        "callcenter" => 45,
        _ => 50,
    };

    let path = format!("{}/employees_{}.csv", OUT_DIR, industry);
    let mut wtr = Writer::from_path(&path)?;
    wtr.write_record(EMPLOYEE_HEADER)?;

    let prefix = industry[..3].to_uppercase();
    for i in 0..n_emp {
        let employee_id = format!("{}_E{}", prefix, 1000 + i);

        // 技能与周上限分布按行业区分（医院更多资深人员）
        let (skill, max_week_hours) = match industry {
            "hospital" => (
                if rng.random_bool(0.4) { 3 } else { 2 },
                [36, 40, 48][pick(rng, &[0.2, 0.6, 0.2])],
            ),
            "callcenter" => (
                if rng.random_bool(0.3) { 2 } else { 1 },
                [32, 36, 40][pick(rng, &[0.2, 0.6, 0.2])],
            ),
            _ => (
                if rng.random_bool(0.4) { 2 } else { 1 },
                [24, 32, 40][pick(rng, &[0.3, 0.5, 0.2])],
            ),
        };

        let preferred_shift =
            ["morning", "afternoon", "evening", "flex"][pick(rng, &[0.35, 0.35, 0.15, 0.15])];
        let base_productivity = (rng.random_range(0.85f64..1.15) * 100.0).round() / 100.0;

        wtr.write_record(&[
            employee_id,
            skill.to_string(),
            max_week_hours.to_string(),
            preferred_shift.to_string(),
            format!("{:.2}", base_productivity),
        ])?;
    }

    wtr.flush()?;
    println!("✓ 生成 employees_{}.csv ({}条)", industry, n_emp);
    Ok(())
}

/// 按权重抽取下标
fn pick(rng: &mut StdRng, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let mut roll = rng.random_range(0.0..total);
    for (i, w) in weights.iter().enumerate() {
        if roll < *w {
            return i;
        }
        roll -= w;
    }
    weights.len() - 1
}

// ==========================================
// 约束生成
// ==========================================

fn generate_constraints(industry: &str) -> Result<(), Box<dyn Error>> {
    let mut constraints = SchedulingConstraints::default();

    match industry {
        "hospital" => {
            constraints.max_shift_hours = Some(12);
            constraints.min_rest_hours_between_shifts = Some(12);
            constraints.max_week_hours = Some(48.0);
            constraints.shift_templates = vec![
                ShiftTemplate {
                    name: "day".to_string(),
                    start: 7,
                    end: 19,
                },
                ShiftTemplate {
                    name: "night".to_string(),
                    start: 19,
                    end: 7,
                },
            ];
            constraints.role_requirements.insert(
                "ICU".to_string(),
                RoleRequirement {
                    skill_min: 3,
                    min_on_shift: 2,
                },
            );
        }
        "callcenter" => {
            constraints.max_shift_hours = Some(8);
            constraints.min_rest_hours_between_shifts = Some(10);
            constraints.max_week_hours = Some(40.0);
            constraints.shift_templates = vec![
                ShiftTemplate {
                    name: "morning".to_string(),
                    start: 8,
                    end: 16,
                },
                ShiftTemplate {
                    name: "afternoon".to_string(),
                    start: 12,
                    end: 20,
                },
                ShiftTemplate {
                    name: "short".to_string(),
                    start: 9,
                    end: 13,
                },
            ];
        }
        _ => {
            constraints.max_shift_hours = Some(8);
            constraints.min_rest_hours_between_shifts = Some(10);
            constraints.max_week_hours = Some(40.0);
            constraints.shift_templates = vec![
                ShiftTemplate {
                    name: "morning".to_string(),
                    start: 8,
                    end: 14,
                },
                ShiftTemplate {
                    name: "afternoon".to_string(),
                    start: 13,
                    end: 19,
                },
                ShiftTemplate {
                    name: "evening".to_string(),
                    start: 16,
                    end: 22,
                },
            ];
            constraints.role_requirements.insert(
                "manager".to_string(),
                RoleRequirement {
                    skill_min: 2,
                    min_on_shift: 1,
                },
            );
        }
    }

    let path = format!("{}/constraints_{}.json", OUT_DIR, industry);
    fs::write(&path, serde_json::to_string_pretty(&constraints)?)?;
    println!("✓ 生成 constraints_{}.json", industry);
    Ok(())
}
