// ==========================================
// 生产批次WIP分析系统 - 导入层
// ==========================================
// 职责: 外部数据文件 → 定型 WipEvent 集合
// 流程: 文件解析（Excel/CSV → 原始记录）→ 字段映射（定型+校验）
// ==========================================

pub mod error;
pub mod event_mapper;
pub mod file_parser;

pub use error::{ImportError, ImportResult};
pub use event_mapper::EventMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};

use std::path::Path;

use crate::domain::WipEvent;

/// 从数据文件装载WIP事件（按扩展名自动选择解析器）
pub fn load_wip_events<P: AsRef<Path>>(path: P) -> ImportResult<Vec<WipEvent>> {
    let path = path.as_ref();
    tracing::info!("开始装载WIP事件: {}", path.display());

    let records = UniversalFileParser.parse(path)?;
    tracing::debug!("文件解析完成: {} 条原始记录", records.len());

    let events = EventMapper::map_records(&records)?;
    tracing::info!("字段映射完成: {} 条WIP事件", events.len());

    Ok(events)
}
