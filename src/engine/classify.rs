// ==========================================
// 生产批次WIP分析系统 - 时长分类器 (DurationClassifier)
// ==========================================
// 职责: 由折叠批次行派生 processing_days 与 is_delayed
// 规则: processing_days = (complete - start) 整天截断
//       （18小时 → 0 天，25小时 → 1 天）
//       is_delayed = processing_days > threshold_days
// 约束: 阈值是参数而非字面量；无副作用，返回新行
// ==========================================

use chrono::NaiveDateTime;

use crate::engine::collapse::BatchSpan;
use crate::engine::error::{EngineError, EngineResult};

/// 已分类批次行
///
/// 负的 processing_days（complete < start）不做拒绝，照实分类；
/// 属于源数据质量缺口，引擎不强制校验。
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedBatch<K> {
    /// 分组键
    pub key: K,

    /// 最早开始时间
    pub start: NaiveDateTime,

    /// 最晚完工时间
    pub complete: NaiveDateTime,

    /// 加工天数（整天截断）
    pub processing_days: i64,

    /// 是否延误
    pub is_delayed: bool,
}

/// 对折叠批次行做时长分类
///
/// # 参数
/// - `spans`: 折叠批次行
/// - `threshold_days`: 延误阈值（天）
///
/// # 返回
/// - Ok(Vec<ClassifiedBatch>): 分类结果，顺序与输入一致
/// - Err(EngineError::MissingField): 某组端点整体缺失，
///   在视图边界显式暴露而非静默跳过
pub fn classify<K>(
    spans: Vec<BatchSpan<K>>,
    threshold_days: i64,
) -> EngineResult<Vec<ClassifiedBatch<K>>> {
    spans
        .into_iter()
        .map(|span| {
            let start = span.start.ok_or_else(|| EngineError::MissingField {
                field: "WIP_ACT_START_DATE".to_string(),
            })?;
            let complete = span.complete.ok_or_else(|| EngineError::MissingField {
                field: "WIP_CMPLT_DATE".to_string(),
            })?;

            let processing_days = (complete - start).num_days();

            Ok(ClassifiedBatch {
                key: span.key,
                start,
                complete,
                processing_days,
                is_delayed: processing_days > threshold_days,
            })
        })
        .collect()
}
