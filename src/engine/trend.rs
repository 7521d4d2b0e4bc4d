// ==========================================
// 生产批次WIP分析系统 - 月度/产线趋势视图
// ==========================================
// 职责: 批次级加工天数按月份桶 / 按产线分组求均值
// 排序: 月份按时间升序，产线按线号升序（确定性输出）
// ==========================================

use std::collections::BTreeMap;

use crate::domain::WipEvent;
use crate::engine::classify::classify;
use crate::engine::collapse::{collapse_batch_line, collapse_batches};
use crate::engine::error::{ensure_events, EngineResult};
use crate::engine::period::MonthBucket;
use crate::engine::rate::mean;

/// 趋势序列（标签与均值按位置对齐）
#[derive(Debug, Clone, PartialEq)]
pub struct TrendData {
    /// 分组标签（月份 "YYYY-MM" 或产线号）
    pub labels: Vec<String>,

    /// 各组平均加工天数
    pub avg_processing_days: Vec<f64>,
}

/// 月度平均加工天数（按批次 start 所在月分组）
pub fn monthly_trend(events: &[WipEvent], threshold_days: i64) -> EngineResult<TrendData> {
    ensure_events(events)?;

    let batches = classify(collapse_batches(events), threshold_days)?;

    let mut groups: BTreeMap<MonthBucket, (f64, u64)> = BTreeMap::new();
    for batch in &batches {
        let entry = groups.entry(MonthBucket::of(batch.start)).or_insert((0.0, 0));
        entry.0 += batch.processing_days as f64;
        entry.1 += 1;
    }

    Ok(TrendData {
        labels: groups.keys().map(MonthBucket::label).collect(),
        avg_processing_days: groups.values().map(|&(sum, n)| mean(sum, n)).collect(),
    })
}

/// 产线平均加工天数（按批次×产线折叠后分组）
pub fn line_trend(events: &[WipEvent], threshold_days: i64) -> EngineResult<TrendData> {
    ensure_events(events)?;

    let batches = classify(collapse_batch_line(events), threshold_days)?;

    let mut groups: BTreeMap<u32, (f64, u64)> = BTreeMap::new();
    for batch in &batches {
        let (_, line_no) = batch.key;
        let entry = groups.entry(line_no).or_insert((0.0, 0));
        entry.0 += batch.processing_days as f64;
        entry.1 += 1;
    }

    Ok(TrendData {
        labels: groups.keys().map(|line| line.to_string()).collect(),
        avg_processing_days: groups.values().map(|&(sum, n)| mean(sum, n)).collect(),
    })
}
