// ==========================================
// 生产批次WIP分析系统 - WIP事件字段映射
// ==========================================
// 职责: 将原始字符串记录映射为定型 WipEvent
// 列名: 与源数据表 batch_details 保持一致
// 规则: 标识符列必填（缺失报错，带行号）；
//       时间戳/报废率/原因空单元格映射为 None
// ==========================================

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::WipEvent;
use crate::importer::error::{ImportError, ImportResult};

/// 批次 ID 列
pub const COL_BATCH_ID: &str = "WIP_BATCH_ID";
/// 产线号列
pub const COL_LINE_NO: &str = "LINE_NO";
/// 配方 ID 列
pub const COL_FORMULA_ID: &str = "FORMULA_ID";
/// 实际开始时间列
pub const COL_START_DATE: &str = "WIP_ACT_START_DATE";
/// 完工时间列
pub const COL_COMPLETE_DATE: &str = "WIP_CMPLT_DATE";
/// 报废率列
pub const COL_SCRAP_FACTOR: &str = "SCRAP_FACTOR";
/// 延误原因列
pub const COL_REASON: &str = "REASON";

/// 支持的日期时间格式（依次尝试）
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// 支持的纯日期格式（补 00:00:00）
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// WIP事件字段映射器
pub struct EventMapper;

impl EventMapper {
    /// 将原始记录批量映射为 WipEvent
    ///
    /// 行号从2起算（1为表头），报错时与电子表格行号对应。
    pub fn map_records(records: &[HashMap<String, String>]) -> ImportResult<Vec<WipEvent>> {
        records
            .iter()
            .enumerate()
            .map(|(idx, record)| Self::map_record(record, idx + 2))
            .collect()
    }

    /// 映射单条记录
    fn map_record(record: &HashMap<String, String>, row: usize) -> ImportResult<WipEvent> {
        let batch_id = required(record, COL_BATCH_ID, row)
            .map_err(|_| ImportError::PrimaryKeyMissing(row))?;
        let line_no = parse_line_no(record, row)?;
        let formula_id = required(record, COL_FORMULA_ID, row)?;

        let mut event = WipEvent::new(batch_id, line_no, formula_id);
        event.start_time = parse_datetime_opt(record, COL_START_DATE, row)?;
        event.complete_time = parse_datetime_opt(record, COL_COMPLETE_DATE, row)?;
        event.scrap_factor = parse_f64_opt(record, COL_SCRAP_FACTOR, row)?;
        event.reason = optional(record, COL_REASON);

        Ok(event)
    }
}

/// 必填字符串列
fn required(record: &HashMap<String, String>, field: &str, row: usize) -> ImportResult<String> {
    match record.get(field).map(|v| v.trim()) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ImportError::FieldMappingError {
            row,
            message: format!("{} 为空", field),
        }),
    }
}

/// 可选字符串列（空单元格 → None）
fn optional(record: &HashMap<String, String>, field: &str) -> Option<String> {
    record
        .get(field)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// 产线号: 必填，接受整数或整数值浮点（Excel 常见 "24.0"）
fn parse_line_no(record: &HashMap<String, String>, row: usize) -> ImportResult<u32> {
    let raw = required(record, COL_LINE_NO, row)?;

    let value: f64 = raw
        .parse()
        .map_err(|_| ImportError::TypeConversionError {
            row,
            field: COL_LINE_NO.to_string(),
            message: format!("无法解析为数值: {}", raw),
        })?;

    if value < 0.0 || value.fract() != 0.0 {
        return Err(ImportError::TypeConversionError {
            row,
            field: COL_LINE_NO.to_string(),
            message: format!("产线号必须是非负整数: {}", raw),
        });
    }

    Ok(value as u32)
}

/// 可选浮点列
fn parse_f64_opt(
    record: &HashMap<String, String>,
    field: &str,
    row: usize,
) -> ImportResult<Option<f64>> {
    match optional(record, field) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ImportError::TypeConversionError {
                row,
                field: field.to_string(),
                message: format!("无法解析为浮点数: {}", raw),
            }),
    }
}

/// 可选日期时间列，多格式依次尝试
fn parse_datetime_opt(
    record: &HashMap<String, String>,
    field: &str,
    row: usize,
) -> ImportResult<Option<NaiveDateTime>> {
    let raw = match optional(record, field) {
        None => return Ok(None),
        Some(raw) => raw,
    };

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, fmt) {
            return Ok(Some(dt));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&raw, fmt) {
            return Ok(d.and_hms_opt(0, 0, 0));
        }
    }

    Err(ImportError::DateFormatError {
        row,
        field: field.to_string(),
        value: raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_map_完整记录() {
        let records = vec![make_record(&[
            (COL_BATCH_ID, "B0001"),
            (COL_LINE_NO, "24"),
            (COL_FORMULA_ID, "F12"),
            (COL_START_DATE, "2024-01-05 08:30:00"),
            (COL_COMPLETE_DATE, "2024-01-08 16:00:00"),
            (COL_SCRAP_FACTOR, "0.031"),
            (COL_REASON, "RM Short"),
        ])];

        let events = EventMapper::map_records(&records).unwrap();

        assert_eq!(events.len(), 1);
        let ev = &events[0];
        assert_eq!(ev.batch_id, "B0001");
        assert_eq!(ev.line_no, 24);
        assert_eq!(ev.formula_id, "F12");
        assert!(ev.start_time.is_some());
        assert_eq!(ev.scrap_factor, Some(0.031));
        assert_eq!(ev.reason.as_deref(), Some("RM Short"));
    }

    #[test]
    fn test_map_可选列缺失为none() {
        let records = vec![make_record(&[
            (COL_BATCH_ID, "B0001"),
            (COL_LINE_NO, "1"),
            (COL_FORMULA_ID, "F01"),
            (COL_START_DATE, ""),
            (COL_REASON, ""),
        ])];

        let events = EventMapper::map_records(&records).unwrap();

        let ev = &events[0];
        assert_eq!(ev.start_time, None);
        assert_eq!(ev.complete_time, None);
        assert_eq!(ev.scrap_factor, None);
        assert_eq!(ev.reason, None);
    }

    #[test]
    fn test_map_批次id缺失() {
        let records = vec![make_record(&[(COL_LINE_NO, "1"), (COL_FORMULA_ID, "F01")])];

        let result = EventMapper::map_records(&records);

        // 行号从2起算
        assert!(matches!(result, Err(ImportError::PrimaryKeyMissing(2))));
    }

    #[test]
    fn test_map_产线号浮点形式() {
        let records = vec![make_record(&[
            (COL_BATCH_ID, "B0001"),
            (COL_LINE_NO, "24.0"),
            (COL_FORMULA_ID, "F01"),
        ])];

        let events = EventMapper::map_records(&records).unwrap();
        assert_eq!(events[0].line_no, 24);
    }

    #[test]
    fn test_map_产线号非法() {
        let records = vec![make_record(&[
            (COL_BATCH_ID, "B0001"),
            (COL_LINE_NO, "abc"),
            (COL_FORMULA_ID, "F01"),
        ])];

        let result = EventMapper::map_records(&records);
        assert!(matches!(
            result,
            Err(ImportError::TypeConversionError { .. })
        ));
    }

    #[test]
    fn test_map_日期多格式() {
        for raw in ["2024-01-05 08:30:00", "2024-01-05T08:30:00", "2024/01/05 08:30:00", "2024-01-05"] {
            let records = vec![make_record(&[
                (COL_BATCH_ID, "B0001"),
                (COL_LINE_NO, "1"),
                (COL_FORMULA_ID, "F01"),
                (COL_START_DATE, raw),
            ])];

            let events = EventMapper::map_records(&records).unwrap();
            assert!(events[0].start_time.is_some(), "格式解析失败: {}", raw);
        }
    }

    #[test]
    fn test_map_日期非法报错带行号() {
        let records = vec![
            make_record(&[
                (COL_BATCH_ID, "B0001"),
                (COL_LINE_NO, "1"),
                (COL_FORMULA_ID, "F01"),
            ]),
            make_record(&[
                (COL_BATCH_ID, "B0002"),
                (COL_LINE_NO, "1"),
                (COL_FORMULA_ID, "F01"),
                (COL_START_DATE, "05-01-2024"),
            ]),
        ];

        let result = EventMapper::map_records(&records);

        match result {
            Err(ImportError::DateFormatError { row, field, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(field, COL_START_DATE);
            }
            other => panic!("期望 DateFormatError, 实际 {:?}", other.err()),
        }
    }
}
