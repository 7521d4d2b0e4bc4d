// ==========================================
// 生产批次WIP分析系统 - 时段分桶器 (PeriodBinner)
// ==========================================
// 职责: 将时间戳截断到自然月，用于时序分组
// 约束: 只用于分组键，从不作为时长参与计算
// ==========================================

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 月份桶 (year, month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthBucket {
    /// 年
    pub year: i32,

    /// 月 (1-12)
    pub month: u32,
}

impl MonthBucket {
    /// 由时间戳截断到月初
    pub fn of(ts: NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }

    /// 序列化标签 "YYYY-MM"
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl std::fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_month_bucket_截断() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 27)
            .unwrap()
            .and_hms_opt(15, 42, 0)
            .unwrap();

        let bucket = MonthBucket::of(ts);

        assert_eq!(bucket.year, 2024);
        assert_eq!(bucket.month, 3);
        assert_eq!(bucket.label(), "2024-03");
    }

    #[test]
    fn test_month_bucket_跨年排序() {
        let dec = MonthBucket { year: 2023, month: 12 };
        let jan = MonthBucket { year: 2024, month: 1 };

        assert!(dec < jan);
        assert_eq!(dec.label(), "2023-12");
        assert_eq!(jan.label(), "2024-01");
    }
}
