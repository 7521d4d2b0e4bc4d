// ==========================================
// 生产批次WIP分析系统 - DashboardApi DTO 定义
// ==========================================
// 职责: 定义各视图的响应结构（与前端图表字段一一对应）
// 约束: 数值字段必须有限（无NaN/Infinity）；
//       空数据以空序列/零比率表达，不用特殊值
// ==========================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ==========================================
// 加工天数直方图
// ==========================================

/// 直方图响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramResponse {
    /// 每个批次的加工天数（未分桶，供前端自由重分桶）
    pub raw_processing_days: Vec<i64>,

    /// 各桶计数 (y轴)
    pub counts: Vec<u64>,

    /// 桶边界 (x轴)，长度 = counts + 1
    pub bin_edges: Vec<f64>,

    /// 延误阈值（天）
    pub threshold: i64,

    /// 固定解读文案
    pub ai_insights: String,
}

// ==========================================
// 准时/延误占比
// ==========================================

/// 占比响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayShareResponse {
    /// 分类标签，固定 ["On Time", "Delayed"]
    pub categories: Vec<String>,

    /// 对应百分比 [准时%, 延误%]
    pub percentages: Vec<f64>,

    /// 延误阈值（天）
    pub threshold_days: i64,

    /// 固定解读文案
    pub ai_insights: String,
}

// ==========================================
// 月度/产线趋势
// ==========================================

/// 月度平均加工天数响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrendResponse {
    /// 月份 "YYYY-MM"（升序）
    pub months: Vec<String>,

    /// 各月平均加工天数
    pub avg_processing_days: Vec<f64>,

    /// 延误阈值（天）
    pub threshold: i64,

    /// 固定解读文案
    pub ai_insights: String,
}

/// 产线平均加工天数响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineTrendResponse {
    /// 产线号（升序）
    pub lines: Vec<String>,

    /// 各产线平均加工天数
    pub avg_processing_days: Vec<f64>,

    /// 延误阈值（天）
    pub threshold: i64,

    /// 固定解读文案
    pub ai_insights: String,
}

/// 产线×月度透视响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineMonthlyPivotResponse {
    /// 月份轴 "YYYY-MM"（升序）
    pub months: Vec<String>,

    /// 产线号 → 与月份轴按位置对齐的均值序列（缺失格为0）
    pub lines: BTreeMap<String, Vec<f64>>,

    /// 延误阈值（天）
    pub threshold: i64,

    /// 固定解读文案
    pub ai_insights: String,
}

// ==========================================
// 计数/排名
// ==========================================

/// 产线延误批次数响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayedCountByLineResponse {
    /// 产线号（按延误数降序）
    pub lines: Vec<String>,

    /// 对应延误批次数
    pub delayed_batches: Vec<u64>,

    /// 固定解读文案
    pub ai_insights: String,
}

/// 产线总量 vs 延误响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalVsDelayedResponse {
    /// 产线号（按总量降序）
    pub lines: Vec<String>,

    /// 总批次数
    pub total_batches: Vec<u64>,

    /// 延误批次数
    pub delayed_batches: Vec<u64>,

    /// 准时批次数
    pub on_time_batches: Vec<u64>,

    /// 固定解读文案
    pub ai_insights: String,
}

/// 配方延误率排名响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDelayFormulasResponse {
    /// 配方 ID（延误率降序，≤15条）
    pub formula_ids: Vec<String>,

    /// 延误率 (%)，保留2位小数
    pub delay_rates: Vec<f64>,

    /// 固定解读文案
    pub ai_insights: String,
}

/// 月度延误率响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyDelayRateResponse {
    /// 月份 "YYYY-MM"（升序）
    pub months: Vec<String>,

    /// 延误率 (%)，保留2位小数
    pub delay_rates: Vec<f64>,

    /// 参考线 (%)，仅供前端画线
    pub threshold: u32,

    /// 固定解读文案
    pub ai_insights: String,
}

/// 产线报废率响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineScrapFactorResponse {
    /// 产线号（升序）
    pub lines: Vec<String>,

    /// 平均报废率，保留4位小数
    pub avg_scrap_factor: Vec<f64>,

    /// 固定解读文案
    pub ai_insights: String,
}

// ==========================================
// 延误原因
// ==========================================

/// 按产线延误原因响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayReasonsByLineResponse {
    /// 产线号 → (原因 → 延误事件计数)
    pub delay_reasons_by_line: BTreeMap<String, BTreeMap<String, u64>>,

    /// 延误阈值（天）
    pub threshold_days: i64,
}

/// 原因占比记录（序列化字段名与源数据列名一致）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasonShareDto {
    /// 延误原因
    #[serde(rename = "REASON")]
    pub reason: String,

    /// 延误事件计数
    pub count: u64,

    /// 占比 (%)，保留2位小数
    pub share_percent: f64,
}

/// Top-10 延误原因响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDelayReasonsResponse {
    /// 原因占比记录（计数降序）
    pub top_delay_reasons: Vec<ReasonShareDto>,

    /// 延误阈值（天）
    pub threshold_days: i64,
}
