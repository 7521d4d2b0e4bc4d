// ==========================================
// 生产批次WIP分析系统 - 驾驶舱 API
// ==========================================
// 职责: 封装聚合引擎，按视图提供查询接口
// 架构: API 层 → 引擎层（纯函数） → RecordStore（只读）
// 约束: 每次查询在私有派生结构上计算，互不影响；
//       同一存储上重复调用结果逐位相同（幂等）
// ==========================================

use std::sync::Arc;

use crate::api::dto::*;
use crate::api::error::ApiResult;
use crate::api::insights;
use crate::config::analytics_config::MONTHLY_RATE_REFERENCE_PCT;
use crate::config::AnalyticsConfig;
use crate::engine;
use crate::store::RecordStore;

/// 驾驶舱API
///
/// 持有只读存储与分析配置，一个方法对应一个图表视图。
/// 存储经 Arc 共享，查询间无协调需求（引擎只读、无共享可变状态）。
pub struct DashboardApi {
    /// 记录存储（只读共享）
    store: Arc<RecordStore>,

    /// 分析配置（阈值/桶数/Top-N）
    config: AnalyticsConfig,
}

impl DashboardApi {
    /// 以默认配置创建
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self::with_config(store, AnalyticsConfig::default())
    }

    /// 以指定配置创建
    pub fn with_config(store: Arc<RecordStore>, config: AnalyticsConfig) -> Self {
        Self { store, config }
    }

    /// 当前配置
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    // ==========================================
    // 批次级视图
    // ==========================================

    /// 加工天数直方图
    pub fn processing_days_histogram(&self) -> ApiResult<HistogramResponse> {
        let data = engine::processing_histogram(
            self.store.events(),
            self.config.delay_threshold_days,
            self.config.histogram_bins,
        )?;

        Ok(HistogramResponse {
            raw_processing_days: data.raw_processing_days,
            counts: data.counts,
            bin_edges: data.bin_edges,
            threshold: self.config.delay_threshold_days,
            ai_insights: insights::HISTOGRAM.to_string(),
        })
    }

    /// 准时/延误占比
    pub fn delay_share(&self) -> ApiResult<DelayShareResponse> {
        let data = engine::delay_share(self.store.events(), self.config.delay_threshold_days)?;

        Ok(DelayShareResponse {
            categories: vec!["On Time".to_string(), "Delayed".to_string()],
            percentages: vec![data.on_time_pct, data.delayed_pct],
            threshold_days: self.config.delay_threshold_days,
            ai_insights: insights::DELAY_SHARE.to_string(),
        })
    }

    /// 月度平均加工天数
    pub fn monthly_average_delay(&self) -> ApiResult<MonthlyTrendResponse> {
        let data = engine::monthly_trend(self.store.events(), self.config.delay_threshold_days)?;

        Ok(MonthlyTrendResponse {
            months: data.labels,
            avg_processing_days: data.avg_processing_days,
            threshold: self.config.delay_threshold_days,
            ai_insights: insights::MONTHLY_TREND.to_string(),
        })
    }

    /// 产线平均加工天数
    pub fn line_average_delay(&self) -> ApiResult<LineTrendResponse> {
        let data = engine::line_trend(self.store.events(), self.config.delay_threshold_days)?;

        Ok(LineTrendResponse {
            lines: data.labels,
            avg_processing_days: data.avg_processing_days,
            threshold: self.config.delay_threshold_days,
            ai_insights: insights::LINE_TREND.to_string(),
        })
    }

    /// 产线×月度平均加工天数透视
    pub fn line_monthly_average_delay(&self) -> ApiResult<LineMonthlyPivotResponse> {
        let data =
            engine::line_monthly_pivot(self.store.events(), self.config.delay_threshold_days)?;

        Ok(LineMonthlyPivotResponse {
            months: data.months,
            lines: data.lines,
            threshold: self.config.delay_threshold_days,
            ai_insights: insights::LINE_MONTHLY_PIVOT.to_string(),
        })
    }

    // ==========================================
    // 计数/排名视图
    // ==========================================

    /// 产线延误批次数
    pub fn delayed_batches_by_line(&self) -> ApiResult<DelayedCountByLineResponse> {
        let data =
            engine::delayed_count_by_line(self.store.events(), self.config.delay_threshold_days)?;

        Ok(DelayedCountByLineResponse {
            lines: data.lines,
            delayed_batches: data.delayed_batches,
            ai_insights: insights::DELAYED_BY_LINE.to_string(),
        })
    }

    /// 产线总量 vs 延误
    pub fn delayed_vs_total_batches(&self) -> ApiResult<TotalVsDelayedResponse> {
        let data =
            engine::total_vs_delayed_by_line(self.store.events(), self.config.delay_threshold_days)?;

        Ok(TotalVsDelayedResponse {
            lines: data.lines,
            total_batches: data.total_batches,
            delayed_batches: data.delayed_batches,
            on_time_batches: data.on_time_batches,
            ai_insights: insights::TOTAL_VS_DELAYED.to_string(),
        })
    }

    /// 配方延误率排名 (Top-15)
    pub fn top_delay_formulas(&self) -> ApiResult<TopDelayFormulasResponse> {
        let data = engine::top_delay_rate_by_formula(
            self.store.events(),
            self.config.delay_threshold_days,
            self.config.formula_top_n,
        )?;

        Ok(TopDelayFormulasResponse {
            formula_ids: data.formula_ids,
            delay_rates: data.delay_rates,
            ai_insights: insights::TOP_DELAY_FORMULAS.to_string(),
        })
    }

    /// 月度延误率
    pub fn monthly_delay_rate(&self) -> ApiResult<MonthlyDelayRateResponse> {
        let data =
            engine::monthly_delay_rate(self.store.events(), self.config.delay_threshold_days)?;

        Ok(MonthlyDelayRateResponse {
            months: data.months,
            delay_rates: data.delay_rates,
            threshold: MONTHLY_RATE_REFERENCE_PCT,
            ai_insights: insights::MONTHLY_DELAY_RATE.to_string(),
        })
    }

    /// 产线平均报废率
    pub fn line_scrap_factor(&self) -> ApiResult<LineScrapFactorResponse> {
        let data = engine::line_scrap_factor(self.store.events())?;

        Ok(LineScrapFactorResponse {
            lines: data.lines,
            avg_scrap_factor: data.avg_scrap_factor,
            ai_insights: insights::LINE_SCRAP.to_string(),
        })
    }

    // ==========================================
    // 延误原因视图
    // ==========================================

    /// 按产线延误原因分解
    pub fn delay_reasons_by_line(&self) -> ApiResult<DelayReasonsByLineResponse> {
        let data = engine::reasons_by_line(self.store.events(), self.config.delay_threshold_days)?;

        Ok(DelayReasonsByLineResponse {
            delay_reasons_by_line: data,
            threshold_days: self.config.delay_threshold_days,
        })
    }

    /// Top-10 延误原因
    pub fn top_delay_reasons(&self) -> ApiResult<TopDelayReasonsResponse> {
        let rows = engine::top_reasons(
            self.store.events(),
            self.config.delay_threshold_days,
            self.config.reason_top_n,
        )?;

        Ok(TopDelayReasonsResponse {
            top_delay_reasons: rows
                .into_iter()
                .map(|r| ReasonShareDto {
                    reason: r.reason,
                    count: r.count,
                    share_percent: r.share_percent,
                })
                .collect(),
            threshold_days: self.config.delay_threshold_days,
        })
    }
}
