// ==========================================
// 生产批次WIP分析系统 - 批次折叠器 (BatchCollapser)
// ==========================================
// 职责: 将逐事件行按分组键折叠为每键一行:
//       start = min(start_time), complete = max(complete_time)
// 约束: 时间戳缺失的事件不参与min/max；
//       整组都缺失时端点保持缺失（透传，不在此层报错）
// 输出: 按分组键升序，保证确定性
// ==========================================

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::domain::WipEvent;

/// 折叠后的批次行（每个分组键一行）
///
/// K 为分组键类型: batch_id 本身，或 batch_id × 产线 / 配方。
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSpan<K> {
    /// 分组键
    pub key: K,

    /// 组内最早开始时间（组内全部缺失则为 None）
    pub start: Option<NaiveDateTime>,

    /// 组内最晚完工时间（组内全部缺失则为 None）
    pub complete: Option<NaiveDateTime>,
}

/// 按任意分组键折叠事件
///
/// # 参数
/// - `events`: 原始事件序列
/// - `key_of`: 分组键函数（键须可排序，以保证输出确定性）
pub fn collapse_by<K, F>(events: &[WipEvent], key_of: F) -> Vec<BatchSpan<K>>
where
    K: Ord,
    F: Fn(&WipEvent) -> K,
{
    let mut groups: BTreeMap<K, (Option<NaiveDateTime>, Option<NaiveDateTime>)> = BTreeMap::new();

    for event in events {
        let entry = groups.entry(key_of(event)).or_insert((None, None));

        if let Some(start) = event.start_time {
            entry.0 = Some(entry.0.map_or(start, |cur| cur.min(start)));
        }
        if let Some(complete) = event.complete_time {
            entry.1 = Some(entry.1.map_or(complete, |cur| cur.max(complete)));
        }
    }

    groups
        .into_iter()
        .map(|(key, (start, complete))| BatchSpan {
            key,
            start,
            complete,
        })
        .collect()
}

/// 仅按批次折叠
pub fn collapse_batches(events: &[WipEvent]) -> Vec<BatchSpan<String>> {
    collapse_by(events, |e| e.batch_id.clone())
}

/// 按批次×产线折叠
pub fn collapse_batch_line(events: &[WipEvent]) -> Vec<BatchSpan<(String, u32)>> {
    collapse_by(events, |e| (e.batch_id.clone(), e.line_no))
}

/// 按批次×配方折叠
pub fn collapse_batch_formula(events: &[WipEvent]) -> Vec<BatchSpan<(String, String)>> {
    collapse_by(events, |e| (e.batch_id.clone(), e.formula_id.clone()))
}
