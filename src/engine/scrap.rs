// ==========================================
// 生产批次WIP分析系统 - 产线报废率视图
// ==========================================
// 职责: 事件级报废率按产线求均值（不折叠批次）
// 约束: 无报废观测值的事件不参与均值；
//       整条产线无观测值时从结果中省略（输出必须有限，不产生NaN）
// ==========================================

use std::collections::BTreeMap;

use crate::domain::WipEvent;
use crate::engine::error::{ensure_events, EngineResult};
use crate::engine::rate::{mean, round4};

/// 产线平均报废率
#[derive(Debug, Clone, PartialEq)]
pub struct LineScrapData {
    /// 产线号（升序）
    pub lines: Vec<String>,

    /// 平均报废率，保留4位小数
    pub avg_scrap_factor: Vec<f64>,
}

/// 计算产线平均报废率
pub fn line_scrap_factor(events: &[WipEvent]) -> EngineResult<LineScrapData> {
    ensure_events(events)?;

    let mut groups: BTreeMap<u32, (f64, u64)> = BTreeMap::new();
    for event in events {
        if let Some(scrap) = event.scrap_factor {
            let entry = groups.entry(event.line_no).or_insert((0.0, 0));
            entry.0 += scrap;
            entry.1 += 1;
        }
    }

    Ok(LineScrapData {
        lines: groups.keys().map(|line| line.to_string()).collect(),
        avg_scrap_factor: groups
            .values()
            .map(|&(sum, n)| round4(mean(sum, n)))
            .collect(),
    })
}
