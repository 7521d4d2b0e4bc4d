// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use wip_batch_analytics::domain::WipEvent;

/// 解析测试时间戳（"YYYY-MM-DD HH:MM:SS" 或 "YYYY-MM-DD"）
pub fn dt(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
        })
        .unwrap_or_else(|_| panic!("非法测试时间戳: {}", raw))
}

// ==========================================
// WipEvent 构建器
// ==========================================

pub struct WipEventBuilder {
    event: WipEvent,
}

impl WipEventBuilder {
    pub fn new(batch_id: &str) -> Self {
        Self {
            event: WipEvent::new(batch_id.to_string(), 1, "F001".to_string()),
        }
    }

    pub fn line(mut self, line_no: u32) -> Self {
        self.event.line_no = line_no;
        self
    }

    pub fn formula(mut self, formula_id: &str) -> Self {
        self.event.formula_id = formula_id.to_string();
        self
    }

    pub fn span(mut self, start: &str, complete: &str) -> Self {
        self.event.start_time = Some(dt(start));
        self.event.complete_time = Some(dt(complete));
        self
    }

    pub fn no_timestamps(mut self) -> Self {
        self.event.start_time = None;
        self.event.complete_time = None;
        self
    }

    pub fn scrap(mut self, scrap_factor: f64) -> Self {
        self.event.scrap_factor = Some(scrap_factor);
        self
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.event.reason = Some(reason.to_string());
        self
    }

    pub fn build(self) -> WipEvent {
        self.event
    }
}

// ==========================================
// 标准测试数据集
// ==========================================

/// 混合数据集: 3条产线 / 3个配方 / 跨2个月，含准时与延误批次
///
/// 批次级时长（阈值2天）:
/// - B001 线1 F001 1月 1天 准时
/// - B002 线1 F001 1月 4天 延误 (原因 RM Short)
/// - B003 线1 F002 1月 5天 延误 (原因 RM Short)
/// - B004 线2 F002 2月 1天 准时
/// - B005 线2 F003 2月 6天 延误 (原因 Capacity Constraints)
/// - B006 线3 F003 2月 2天 准时（恰好等于阈值）
pub fn sample_events() -> Vec<WipEvent> {
    vec![
        WipEventBuilder::new("B001")
            .line(1)
            .formula("F001")
            .span("2024-01-02 08:00:00", "2024-01-03 10:00:00")
            .scrap(0.02)
            .build(),
        WipEventBuilder::new("B002")
            .line(1)
            .formula("F001")
            .span("2024-01-05 08:00:00", "2024-01-09 09:00:00")
            .scrap(0.03)
            .reason("RM Short")
            .build(),
        WipEventBuilder::new("B003")
            .line(1)
            .formula("F002")
            .span("2024-01-10 08:00:00", "2024-01-15 12:00:00")
            .scrap(0.04)
            .reason("RM Short")
            .build(),
        WipEventBuilder::new("B004")
            .line(2)
            .formula("F002")
            .span("2024-02-01 08:00:00", "2024-02-02 09:00:00")
            .scrap(0.05)
            .build(),
        WipEventBuilder::new("B005")
            .line(2)
            .formula("F003")
            .span("2024-02-03 08:00:00", "2024-02-09 10:00:00")
            .scrap(0.05)
            .reason("Capacity Constraints")
            .build(),
        WipEventBuilder::new("B006")
            .line(3)
            .formula("F003")
            .span("2024-02-10 08:00:00", "2024-02-12 08:00:00")
            .build(),
    ]
}
