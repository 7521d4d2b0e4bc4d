// ==========================================
// 生产批次WIP分析系统 - API层错误类型
// ==========================================
// 职责: 将引擎/导入层错误转换为面向调用方的业务错误
// 约束: 不做部分降级——视图要么完整成功，要么显式失败，
//       不回退到过期或默认数据
// ==========================================

use thiserror::Error;

use crate::engine::EngineError;
use crate::importer::ImportError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 数据可用性错误 =====
    #[error("数据集不可用: {0}")]
    DataUnavailable(String),

    #[error("必需字段缺失: {field}")]
    MissingField { field: String },

    // ===== 业务规则错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 导入错误 =====
    #[error("文件导入失败: {0}")]
    ImportFailed(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::DataUnavailable(msg) => ApiError::DataUnavailable(msg),
            EngineError::MissingField { field } => ApiError::MissingField { field },
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportFailed(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
