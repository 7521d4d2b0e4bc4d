// ==========================================
// 生产批次WIP分析系统 - 聚合引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 契约: 零计数分母不是错误（按约定返回0），
//       只有"无数据"和"字段缺失"才是可失败路径
// ==========================================

use thiserror::Error;

/// 聚合引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 数据集为空或未初始化，所有视图快速失败
    #[error("数据集不可用: {0}")]
    DataUnavailable(String),

    /// 必需字段缺失（时间戳/标识符），在视图边界检出
    #[error("必需字段缺失: {field}")]
    MissingField { field: String },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

/// 视图边界校验: 数据集非空
///
/// 所有视图的第一道检查，空存储直接失败，不退化为空响应。
pub fn ensure_events(events: &[crate::domain::WipEvent]) -> EngineResult<()> {
    if events.is_empty() {
        return Err(EngineError::DataUnavailable(
            "RecordStore为空，请先装载WIP事件".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WipEvent;

    #[test]
    fn test_ensure_events_空数据集() {
        let result = ensure_events(&[]);
        assert!(matches!(result, Err(EngineError::DataUnavailable(_))));
    }

    #[test]
    fn test_ensure_events_非空() {
        let events = vec![WipEvent::new("B001".to_string(), 1, "F001".to_string())];
        assert!(ensure_events(&events).is_ok());
    }
}
