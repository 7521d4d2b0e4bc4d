// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试范围:
// 1. 全量视图的响应字段完整性
// 2. 空存储的快速失败语义
// 3. 端点缺失的 MissingField 暴露
// ==========================================

mod helpers;

use std::sync::Arc;

use helpers::test_data_builder::{sample_events, WipEventBuilder};
use wip_batch_analytics::{AnalyticsConfig, ApiError, DashboardApi, RecordStore};

fn make_api() -> DashboardApi {
    DashboardApi::new(Arc::new(RecordStore::new(sample_events())))
}

// ==========================================
// 响应字段完整性
// ==========================================

#[test]
fn test_histogram_响应字段() {
    let resp = make_api().processing_days_histogram().unwrap();

    assert_eq!(resp.counts.len(), 30);
    assert_eq!(resp.bin_edges.len(), 31);
    assert_eq!(resp.threshold, 2);
    assert!(!resp.ai_insights.is_empty());
    assert!(resp.bin_edges.iter().all(|e| e.is_finite()));
}

#[test]
fn test_delay_share_响应字段() {
    let resp = make_api().delay_share().unwrap();

    assert_eq!(resp.categories, vec!["On Time", "Delayed"]);
    assert_eq!(resp.percentages.len(), 2);
    assert!((resp.percentages[0] + resp.percentages[1] - 100.0).abs() < 1e-6);
}

#[test]
fn test_趋势与透视响应对齐() {
    let api = make_api();

    let monthly = api.monthly_average_delay().unwrap();
    assert_eq!(monthly.months.len(), monthly.avg_processing_days.len());
    assert_eq!(monthly.threshold, 2);

    let by_line = api.line_average_delay().unwrap();
    assert_eq!(by_line.lines.len(), by_line.avg_processing_days.len());

    let pivot = api.line_monthly_average_delay().unwrap();
    for series in pivot.lines.values() {
        assert_eq!(series.len(), pivot.months.len());
    }
}

#[test]
fn test_计数排名响应对齐() {
    let api = make_api();

    let delayed = api.delayed_batches_by_line().unwrap();
    assert_eq!(delayed.lines.len(), delayed.delayed_batches.len());
    // 降序
    for pair in delayed.delayed_batches.windows(2) {
        assert!(pair[0] >= pair[1]);
    }

    let totals = api.delayed_vs_total_batches().unwrap();
    assert_eq!(totals.lines.len(), totals.total_batches.len());
    assert_eq!(totals.lines.len(), totals.on_time_batches.len());
    // 按总量降序
    for pair in totals.total_batches.windows(2) {
        assert!(pair[0] >= pair[1]);
    }

    let formulas = api.top_delay_formulas().unwrap();
    assert!(formulas.formula_ids.len() <= 15);
    assert_eq!(formulas.formula_ids.len(), formulas.delay_rates.len());
}

#[test]
fn test_月度延误率参考线() {
    let resp = make_api().monthly_delay_rate().unwrap();

    assert_eq!(resp.threshold, 50);
    assert_eq!(resp.months.len(), resp.delay_rates.len());
}

#[test]
fn test_原因视图响应() {
    let api = make_api();

    let by_line = api.delay_reasons_by_line().unwrap();
    assert_eq!(by_line.threshold_days, 2);
    assert!(!by_line.delay_reasons_by_line.is_empty());

    let top = api.top_delay_reasons().unwrap();
    assert_eq!(top.threshold_days, 2);
    assert!(top.top_delay_reasons.len() <= 10);
    let share_sum: f64 = top
        .top_delay_reasons
        .iter()
        .map(|r| r.share_percent)
        .sum();
    assert!((share_sum - 100.0).abs() < 0.02);
}

#[test]
fn test_响应序列化字段名() {
    let top = make_api().top_delay_reasons().unwrap();
    let json = serde_json::to_value(&top).unwrap();

    // 记录字段名与源数据列名一致
    assert!(json["top_delay_reasons"][0].get("REASON").is_some());
    assert!(json["top_delay_reasons"][0].get("count").is_some());
    assert!(json["top_delay_reasons"][0].get("share_percent").is_some());
}

// ==========================================
// 错误语义
// ==========================================

#[test]
fn test_空存储全视图快速失败() {
    let api = DashboardApi::new(Arc::new(RecordStore::new(vec![])));

    assert!(matches!(
        api.processing_days_histogram(),
        Err(ApiError::DataUnavailable(_))
    ));
    assert!(matches!(api.delay_share(), Err(ApiError::DataUnavailable(_))));
    assert!(matches!(
        api.line_monthly_average_delay(),
        Err(ApiError::DataUnavailable(_))
    ));
    assert!(matches!(
        api.line_scrap_factor(),
        Err(ApiError::DataUnavailable(_))
    ));
    assert!(matches!(
        api.top_delay_reasons(),
        Err(ApiError::DataUnavailable(_))
    ));
}

#[test]
fn test_端点缺失暴露missing_field() {
    // 批次只有开始时间，没有任何完工时间
    let mut event = WipEventBuilder::new("B001").no_timestamps().build();
    event.start_time = Some(helpers::test_data_builder::dt("2024-01-01 08:00:00"));

    let api = DashboardApi::new(Arc::new(RecordStore::new(vec![event])));

    match api.delay_share() {
        Err(ApiError::MissingField { field }) => assert_eq!(field, "WIP_CMPLT_DATE"),
        other => panic!("期望 MissingField, 实际 {:?}", other.err()),
    }
}

#[test]
fn test_配置注入阈值() {
    let store = Arc::new(RecordStore::new(sample_events()));
    let config = AnalyticsConfig {
        delay_threshold_days: 10,
        ..AnalyticsConfig::default()
    };
    let api = DashboardApi::with_config(store, config);

    // 阈值10天: 样例中无延误批次
    let resp = api.delay_share().unwrap();
    assert_eq!(resp.percentages, vec![100.0, 0.0]);
}
