// ==========================================
// 生产批次WIP分析系统 - 分析配置
// ==========================================
// 职责: 把散落在各视图里的隐式常量（阈值/桶数/Top-N）
//       收敛为带文档默认值的显式参数
// ==========================================

use serde::{Deserialize, Serialize};

/// 默认延误阈值（天），当前界面固定为2
pub const DEFAULT_DELAY_THRESHOLD_DAYS: i64 = 2;

/// 默认直方图桶数
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// 配方延误率排名默认条数
pub const DEFAULT_FORMULA_TOP_N: usize = 15;

/// 延误原因排名默认条数
pub const DEFAULT_REASON_TOP_N: usize = 10;

/// 月度延误率参考线 (%)，仅供前端画线，不参与计算
pub const MONTHLY_RATE_REFERENCE_PCT: u32 = 50;

/// 分析配置
///
/// 各视图从这里取参数，不在函数体内写死字面量，
/// 以便单独测试不同阈值/条数。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// 延误阈值（天）
    #[serde(default = "default_threshold")]
    pub delay_threshold_days: i64,

    /// 直方图桶数
    #[serde(default = "default_bins")]
    pub histogram_bins: usize,

    /// 配方排名条数
    #[serde(default = "default_formula_top_n")]
    pub formula_top_n: usize,

    /// 原因排名条数
    #[serde(default = "default_reason_top_n")]
    pub reason_top_n: usize,
}

fn default_threshold() -> i64 {
    DEFAULT_DELAY_THRESHOLD_DAYS
}

fn default_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

fn default_formula_top_n() -> usize {
    DEFAULT_FORMULA_TOP_N
}

fn default_reason_top_n() -> usize {
    DEFAULT_REASON_TOP_N
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            delay_threshold_days: DEFAULT_DELAY_THRESHOLD_DAYS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            formula_top_n: DEFAULT_FORMULA_TOP_N,
            reason_top_n: DEFAULT_REASON_TOP_N,
        }
    }
}
