// ==========================================
// 生产批次WIP分析系统 - WIP事件实体
// ==========================================
// 职责: 定义原始WIP事件（每行 = 批次内的一次工序/操作）
// 一个批次(batch_id)由多条事件组成，跨产线/配方
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// WIP事件（原始行，不可变）
///
/// 时间戳/报废率/原因可能缺失（对应源数据的空单元格），
/// 缺失值在聚合时按各视图的契约处理，不在实体层兜底。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WipEvent {
    /// 批次 ID
    pub batch_id: String,

    /// 产线号
    pub line_no: u32,

    /// 配方 ID
    pub formula_id: String,

    /// 实际开始时间
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,

    /// 完工时间
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_time: Option<NaiveDateTime>,

    /// 报废率 (0.0-1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrap_factor: Option<f64>,

    /// 延误原因（仅部分事件记录）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl WipEvent {
    /// 创建新的WIP事件
    pub fn new(batch_id: String, line_no: u32, formula_id: String) -> Self {
        Self {
            batch_id,
            line_no,
            formula_id,
            start_time: None,
            complete_time: None,
            scrap_factor: None,
            reason: None,
        }
    }

    /// 事件级加工天数（整天截断，complete - start）
    ///
    /// 任一时间戳缺失时返回 None。
    /// 注意: 负值不做校验（complete < start 属于源数据质量问题，照实透传）。
    pub fn processing_days(&self) -> Option<i64> {
        match (self.start_time, self.complete_time) {
            (Some(start), Some(complete)) => Some((complete - start).num_days()),
            _ => None,
        }
    }
}
