// ==========================================
// 生产批次WIP分析系统 - 核心库
// ==========================================
// 技术栈: Rust + serde + chrono
// 系统定位: 决策支持系统 (批次级WIP分析)
// 数据流: RecordStore → 批次折叠 → 时长分类 → 聚合视图 → 序列化结果
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 存储层 - 只读数据集
pub mod store;

// 引擎层 - 聚合计算
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 分析参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::WipEvent;

// 存储
pub use store::RecordStore;

// 引擎
pub use engine::{BatchSpan, ClassifiedBatch, EngineError, EngineResult, MonthBucket};

// 配置
pub use config::AnalyticsConfig;

// API
pub use api::{ApiError, ApiResult, DashboardApi};

// 导入
pub use importer::{ImportError, ImportResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "生产批次WIP分析系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
