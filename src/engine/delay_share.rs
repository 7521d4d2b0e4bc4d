// ==========================================
// 生产批次WIP分析系统 - 准时/延误占比视图
// ==========================================
// 职责: 将批次划分为 On Time / Delayed，各占总数百分比
// 契约: 非空输入两者之和为100（浮点舍入内）；
//       空输入两者均为0，不是NaN也不是错误
// ==========================================

use crate::domain::WipEvent;
use crate::engine::classify::{classify, ClassifiedBatch};
use crate::engine::collapse::collapse_batches;
use crate::engine::error::{ensure_events, EngineResult};
use crate::engine::rate::ratio_pct;

/// 准时/延误占比
#[derive(Debug, Clone, PartialEq)]
pub struct DelayShareData {
    /// 准时批次占比 (%)
    pub on_time_pct: f64,

    /// 延误批次占比 (%)
    pub delayed_pct: f64,
}

/// 计算准时/延误占比
pub fn delay_share(events: &[WipEvent], threshold_days: i64) -> EngineResult<DelayShareData> {
    ensure_events(events)?;

    let batches = classify(collapse_batches(events), threshold_days)?;
    Ok(share_of(&batches))
}

/// 占比核心计算（对空批次集返回0/0）
pub(crate) fn share_of<K>(batches: &[ClassifiedBatch<K>]) -> DelayShareData {
    let total = batches.len() as u64;
    let delayed = batches.iter().filter(|b| b.is_delayed).count() as u64;

    DelayShareData {
        on_time_pct: ratio_pct(total - delayed, total),
        delayed_pct: ratio_pct(delayed, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_dt(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn make_event(batch_id: &str, start_d: u32, complete_d: u32) -> WipEvent {
        let mut ev = WipEvent::new(batch_id.to_string(), 1, "F001".to_string());
        ev.start_time = Some(make_dt(start_d));
        ev.complete_time = Some(make_dt(complete_d));
        ev
    }

    #[test]
    fn test_delay_share_对半() {
        // (1月1日→1月2日)=1天准时, (1月1日→1月5日)=4天延误
        let events = vec![make_event("B001", 1, 2), make_event("B002", 1, 5)];

        let share = delay_share(&events, 2).unwrap();

        assert_eq!(share.on_time_pct, 50.0);
        assert_eq!(share.delayed_pct, 50.0);
    }

    #[test]
    fn test_delay_share_之和为100() {
        let events = vec![
            make_event("B001", 1, 2),
            make_event("B002", 1, 5),
            make_event("B003", 1, 9),
        ];

        let share = delay_share(&events, 2).unwrap();

        assert!((share.on_time_pct + share.delayed_pct - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_share_of_空输入为零() {
        let share = share_of::<String>(&[]);
        assert_eq!(share.on_time_pct, 0.0);
        assert_eq!(share.delayed_pct, 0.0);
    }

    #[test]
    fn test_delay_share_全延误() {
        let events = vec![make_event("B001", 1, 9), make_event("B002", 1, 12)];

        let share = delay_share(&events, 2).unwrap();

        assert_eq!(share.on_time_pct, 0.0);
        assert_eq!(share.delayed_pct, 100.0);
    }
}
