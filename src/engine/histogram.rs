// ==========================================
// 生产批次WIP分析系统 - 加工天数直方图视图
// ==========================================
// 职责: 批次级加工天数的固定30桶直方图
// 输入: 仅按 batch_id 折叠的批次行
// 输出: 全部原始值（前端自由重分桶）+ counts + bin_edges
// ==========================================

use crate::domain::WipEvent;
use crate::engine::classify::classify;
use crate::engine::collapse::collapse_batches;
use crate::engine::error::{ensure_events, EngineResult};

/// 直方图数据
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramData {
    /// 每个批次的加工天数（未分桶）
    pub raw_processing_days: Vec<i64>,

    /// 各桶计数，len == bins
    pub counts: Vec<u64>,

    /// 桶边界，len == bins + 1，覆盖观测 min..max
    pub bin_edges: Vec<f64>,
}

/// 计算加工天数直方图
///
/// # 参数
/// - `events`: 原始事件
/// - `threshold_days`: 延误阈值（仅用于分类，响应层回显）
/// - `bins`: 桶数（默认30）
pub fn processing_histogram(
    events: &[WipEvent],
    threshold_days: i64,
    bins: usize,
) -> EngineResult<HistogramData> {
    ensure_events(events)?;

    let batches = classify(collapse_batches(events), threshold_days)?;
    let raw_processing_days: Vec<i64> = batches.iter().map(|b| b.processing_days).collect();

    let (counts, bin_edges) = bin_values(&raw_processing_days, bins);

    Ok(HistogramData {
        raw_processing_days,
        counts,
        bin_edges,
    })
}

/// 等宽分桶，区间左闭右开，末桶右闭
///
/// 全部观测值相同时退化为零宽桶（31个相同边界），
/// 计数全部落入末桶；属预期行为，不是错误。
fn bin_values(values: &[i64], bins: usize) -> (Vec<u64>, Vec<f64>) {
    let bins = bins.max(1);
    let min = values.iter().copied().min().unwrap_or(0) as f64;
    let max = values.iter().copied().max().unwrap_or(0) as f64;
    let span = max - min;

    let bin_edges: Vec<f64> = (0..=bins)
        .map(|i| min + span * i as f64 / bins as f64)
        .collect();

    let mut counts = vec![0u64; bins];
    for &v in values {
        let idx = if span == 0.0 {
            bins - 1
        } else {
            let pos = ((v as f64 - min) / span * bins as f64).floor() as usize;
            pos.min(bins - 1)
        };
        counts[idx] += 1;
    }

    (counts, bin_edges)
}
