// ==========================================
// 生产批次WIP分析系统 - 计数/排名视图
// ==========================================
// 职责: 四个计数类视图
//   - 产线延误批次数（降序）
//   - 产线总量 vs 延误 vs 准时（按总量降序）
//   - 配方延误率 Top-N（降序，稳定并列，截断15）
//   - 月度延误率（时间升序）
// ==========================================

use std::collections::BTreeMap;

use crate::domain::WipEvent;
use crate::engine::classify::{classify, ClassifiedBatch};
use crate::engine::collapse::{collapse_batch_formula, collapse_batch_line, collapse_batches};
use crate::engine::error::{ensure_events, EngineResult};
use crate::engine::period::MonthBucket;
use crate::engine::rate::{ratio_pct, round2};

/// 产线延误批次数
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedCountByLineData {
    /// 产线号（按延误数降序）
    pub lines: Vec<String>,

    /// 对应延误批次数
    pub delayed_batches: Vec<u64>,
}

/// 产线工作量拆分
#[derive(Debug, Clone, PartialEq)]
pub struct TotalVsDelayedData {
    /// 产线号（按总量降序）
    pub lines: Vec<String>,

    /// 总批次数
    pub total_batches: Vec<u64>,

    /// 延误批次数
    pub delayed_batches: Vec<u64>,

    /// 准时批次数 (= total - delayed)
    pub on_time_batches: Vec<u64>,
}

/// 配方延误率排名
#[derive(Debug, Clone, PartialEq)]
pub struct TopDelayRateData {
    /// 配方 ID（按延误率降序，≤ top_n 条）
    pub formula_ids: Vec<String>,

    /// 延误率 (%)，保留2位小数，单调不增
    pub delay_rates: Vec<f64>,
}

/// 月度延误率
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyDelayRateData {
    /// 月份 "YYYY-MM"（升序）
    pub months: Vec<String>,

    /// 延误率 (%)，保留2位小数
    pub delay_rates: Vec<f64>,
}

/// (total, delayed) 计数对
#[derive(Debug, Clone, Copy, Default)]
struct DelayCount {
    total: u64,
    delayed: u64,
}

/// 按键统计 total/delayed
fn count_by<K: Ord + Copy, G>(
    batches: &[ClassifiedBatch<G>],
    key_of: impl Fn(&ClassifiedBatch<G>) -> K,
) -> BTreeMap<K, DelayCount> {
    let mut counts: BTreeMap<K, DelayCount> = BTreeMap::new();
    for batch in batches {
        let entry = counts.entry(key_of(batch)).or_default();
        entry.total += 1;
        if batch.is_delayed {
            entry.delayed += 1;
        }
    }
    counts
}

/// 产线延误批次数，按延误数降序
///
/// 无延误批次的产线不出现在结果中（先过滤再分组）。
pub fn delayed_count_by_line(
    events: &[WipEvent],
    threshold_days: i64,
) -> EngineResult<DelayedCountByLineData> {
    ensure_events(events)?;

    let batches = classify(collapse_batch_line(events), threshold_days)?;

    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for batch in batches.iter().filter(|b| b.is_delayed) {
        *counts.entry(batch.key.1).or_insert(0) += 1;
    }

    // 降序，计数相同按线号升序（稳定排序保持BTreeMap序）
    let mut rows: Vec<(u32, u64)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(DelayedCountByLineData {
        lines: rows.iter().map(|(line, _)| line.to_string()).collect(),
        delayed_batches: rows.iter().map(|&(_, n)| n).collect(),
    })
}

/// 产线总量/延误/准时拆分，按总量降序
pub fn total_vs_delayed_by_line(
    events: &[WipEvent],
    threshold_days: i64,
) -> EngineResult<TotalVsDelayedData> {
    ensure_events(events)?;

    let batches = classify(collapse_batch_line(events), threshold_days)?;
    let counts = count_by(&batches, |b| b.key.1);

    let mut rows: Vec<(u32, DelayCount)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    Ok(TotalVsDelayedData {
        lines: rows.iter().map(|(line, _)| line.to_string()).collect(),
        total_batches: rows.iter().map(|&(_, c)| c.total).collect(),
        delayed_batches: rows.iter().map(|&(_, c)| c.delayed).collect(),
        on_time_batches: rows.iter().map(|&(_, c)| c.total - c.delayed).collect(),
    })
}

/// 配方延误率 Top-N，降序截断
///
/// 并列时按配方 ID 升序（折叠输出序 + 稳定排序），
/// 输出延误率单调不增。
pub fn top_delay_rate_by_formula(
    events: &[WipEvent],
    threshold_days: i64,
    top_n: usize,
) -> EngineResult<TopDelayRateData> {
    ensure_events(events)?;

    let batches = classify(collapse_batch_formula(events), threshold_days)?;

    let mut counts: BTreeMap<String, DelayCount> = BTreeMap::new();
    for batch in &batches {
        let entry = counts.entry(batch.key.1.clone()).or_default();
        entry.total += 1;
        if batch.is_delayed {
            entry.delayed += 1;
        }
    }

    let mut rows: Vec<(String, f64)> = counts
        .into_iter()
        .map(|(formula_id, c)| (formula_id, ratio_pct(c.delayed, c.total)))
        .collect();
    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    rows.truncate(top_n);

    Ok(TopDelayRateData {
        formula_ids: rows.iter().map(|(id, _)| id.clone()).collect(),
        delay_rates: rows.iter().map(|&(_, rate)| round2(rate)).collect(),
    })
}

/// 月度延误率，时间升序
///
/// 比率不设上界: 源数据将多个子批算入同一逻辑批时可超过100%，
/// 属于数据质量契约，引擎不做钳制。
pub fn monthly_delay_rate(
    events: &[WipEvent],
    threshold_days: i64,
) -> EngineResult<MonthlyDelayRateData> {
    ensure_events(events)?;

    let batches = classify(collapse_batches(events), threshold_days)?;
    let counts = count_by(&batches, |b| MonthBucket::of(b.start));

    Ok(MonthlyDelayRateData {
        months: counts.keys().map(MonthBucket::label).collect(),
        delay_rates: counts
            .values()
            .map(|c| round2(ratio_pct(c.delayed, c.total)))
            .collect(),
    })
}
