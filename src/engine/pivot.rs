// ==========================================
// 生产批次WIP分析系统 - 产线×月度透视视图
// ==========================================
// 职责: (month, line) 均值重塑为稠密矩形矩阵
// 契约: 行 = 全部出现过的月份（升序），列 = 全部出现过的产线；
//       缺失格填0而非省略——消费方可假定矩形完整
// ==========================================

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::WipEvent;
use crate::engine::classify::classify;
use crate::engine::collapse::collapse_batch_line;
use crate::engine::error::{ensure_events, EngineResult};
use crate::engine::period::MonthBucket;
use crate::engine::rate::mean;

/// 产线×月度透视数据
#[derive(Debug, Clone, PartialEq)]
pub struct LineMonthlyPivotData {
    /// 月份轴 "YYYY-MM"（升序）
    pub months: Vec<String>,

    /// 产线号 → 与月份轴按位置对齐的均值序列
    pub lines: BTreeMap<String, Vec<f64>>,
}

/// 计算产线×月度平均加工天数透视
pub fn line_monthly_pivot(
    events: &[WipEvent],
    threshold_days: i64,
) -> EngineResult<LineMonthlyPivotData> {
    ensure_events(events)?;

    let batches = classify(collapse_batch_line(events), threshold_days)?;

    // (month, line) → (sum, count)
    let mut cells: BTreeMap<(MonthBucket, u32), (f64, u64)> = BTreeMap::new();
    let mut month_axis: BTreeSet<MonthBucket> = BTreeSet::new();
    let mut line_axis: BTreeSet<u32> = BTreeSet::new();

    for batch in &batches {
        let (_, line_no) = batch.key;
        let month = MonthBucket::of(batch.start);
        month_axis.insert(month);
        line_axis.insert(line_no);

        let entry = cells.entry((month, line_no)).or_insert((0.0, 0));
        entry.0 += batch.processing_days as f64;
        entry.1 += 1;
    }

    // 稠密化: 该月无批次的产线格填0
    let mut lines: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for &line_no in &line_axis {
        let series: Vec<f64> = month_axis
            .iter()
            .map(|&month| {
                cells
                    .get(&(month, line_no))
                    .map_or(0.0, |&(sum, n)| mean(sum, n))
            })
            .collect();
        lines.insert(line_no.to_string(), series);
    }

    Ok(LineMonthlyPivotData {
        months: month_axis.iter().map(MonthBucket::label).collect(),
        lines,
    })
}
