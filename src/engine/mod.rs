// ==========================================
// 生产批次WIP分析系统 - 聚合引擎层
// ==========================================
// 职责: 批次折叠 → 时长分类 → 七类聚合视图
// 红线: 无状态引擎，所有函数都是纯函数；
//       只读取事件切片，从不向 RecordStore 回写派生列；
//       每个视图各自重建所需的批次表（分组维度不同，不共享）
// ==========================================

pub mod classify;
pub mod collapse;
pub mod delay_share;
pub mod error;
pub mod histogram;
pub mod period;
pub mod pivot;
pub mod ranking;
pub mod rate;
pub mod reasons;
pub mod scrap;
pub mod trend;

pub use classify::{classify, ClassifiedBatch};
pub use collapse::{
    collapse_batch_formula, collapse_batch_line, collapse_batches, collapse_by, BatchSpan,
};
pub use delay_share::{delay_share, DelayShareData};
pub use error::{EngineError, EngineResult};
pub use histogram::{processing_histogram, HistogramData};
pub use period::MonthBucket;
pub use pivot::{line_monthly_pivot, LineMonthlyPivotData};
pub use ranking::{
    delayed_count_by_line, monthly_delay_rate, top_delay_rate_by_formula, total_vs_delayed_by_line,
    DelayedCountByLineData, MonthlyDelayRateData, TopDelayRateData, TotalVsDelayedData,
};
pub use reasons::{reasons_by_line, top_reasons, ReasonShare};
pub use scrap::{line_scrap_factor, LineScrapData};
pub use trend::{line_trend, monthly_trend, TrendData};
