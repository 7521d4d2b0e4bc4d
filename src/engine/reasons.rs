// ==========================================
// 生产批次WIP分析系统 - 延误原因视图
// ==========================================
// 职责: 延误原因分解（按产线嵌套计数 + 全局Top-10占比）
// 注意: 原因是事件级属性，折叠后丢失——这两个视图直接
//       在逐事件表上过滤（事件自身时长 > 阈值），不经过批次折叠
// 契约: reason 为空的行直接剔除，不计入"未知"类
// ==========================================

use std::collections::BTreeMap;

use crate::domain::WipEvent;
use crate::engine::error::{ensure_events, EngineResult};
use crate::engine::rate::{ratio_pct, round2};

/// 原因占比行
#[derive(Debug, Clone, PartialEq)]
pub struct ReasonShare {
    /// 延误原因
    pub reason: String,

    /// 延误事件计数
    pub count: u64,

    /// 占比 (%)，保留2位小数
    pub share_percent: f64,
}

/// 延误事件过滤: 事件自身时长超过阈值且带非空原因
fn delayed_with_reason<'a>(
    events: &'a [WipEvent],
    threshold_days: i64,
) -> impl Iterator<Item = (&'a WipEvent, &'a str)> {
    events.iter().filter_map(move |event| {
        let days = event.processing_days()?;
        if days <= threshold_days {
            return None;
        }
        let reason = event.reason.as_deref()?.trim();
        if reason.is_empty() {
            return None;
        }
        Some((event, reason))
    })
}

/// 按产线的延误原因嵌套计数 {line: {reason: count}}
pub fn reasons_by_line(
    events: &[WipEvent],
    threshold_days: i64,
) -> EngineResult<BTreeMap<String, BTreeMap<String, u64>>> {
    ensure_events(events)?;

    let mut result: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
    for (event, reason) in delayed_with_reason(events, threshold_days) {
        *result
            .entry(event.line_no.to_string())
            .or_default()
            .entry(reason.to_string())
            .or_insert(0) += 1;
    }

    Ok(result)
}

/// 全局 Top-N 延误原因及占比
///
/// 占比分母为入选 Top-N 的计数之和，
/// 返回记录的 share_percent 合计为100。
pub fn top_reasons(
    events: &[WipEvent],
    threshold_days: i64,
    top_n: usize,
) -> EngineResult<Vec<ReasonShare>> {
    ensure_events(events)?;

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for (_, reason) in delayed_with_reason(events, threshold_days) {
        *counts.entry(reason.to_string()).or_insert(0) += 1;
    }

    // 计数降序，并列按原因升序（稳定排序保持BTreeMap序）
    let mut rows: Vec<(String, u64)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(top_n);

    let total: u64 = rows.iter().map(|&(_, n)| n).sum();

    Ok(rows
        .into_iter()
        .map(|(reason, count)| ReasonShare {
            reason,
            count,
            share_percent: round2(ratio_pct(count, total)),
        })
        .collect())
}
