// ==========================================
// 生产批次WIP分析系统 - RecordStore
// ==========================================
// 职责: 持有不可变的原始WIP事件集合
// 生命周期: 启动时装载一次，进程存活期内只读共享
// ==========================================

use std::path::Path;

use crate::domain::WipEvent;
use crate::importer::{self, ImportResult};

/// 记录存储
///
/// 原始事件的唯一属主。所有派生结构（批次行/月份桶/统计行）
/// 均按查询重新计算，归属于发起调用的那次查询。
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    events: Vec<WipEvent>,
}

impl RecordStore {
    /// 从内存事件集合创建存储
    pub fn new(events: Vec<WipEvent>) -> Self {
        Self { events }
    }

    /// 从数据文件装载（.xlsx/.xls/.csv）
    ///
    /// # 返回
    /// - Ok(RecordStore): 装载完成的存储
    /// - Err(ImportError): 文件/解析/字段映射错误
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let events = importer::load_wip_events(path)?;
        tracing::info!("RecordStore装载完成: {} 条WIP事件", events.len());
        Ok(Self::new(events))
    }

    /// 原始事件切片（只读）
    pub fn events(&self) -> &[WipEvent] {
        &self.events
    }

    /// 事件条数
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
