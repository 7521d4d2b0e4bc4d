// ==========================================
// 生产批次WIP分析系统 - 命令行入口
// ==========================================
// 用法: wip-batch-analytics <数据文件> [视图名]
// 行为: 装载 Excel/CSV 数据文件后输出视图 JSON；
//       不带视图名时输出全部视图的聚合对象
// ==========================================

use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use serde_json::json;

use wip_batch_analytics::{logging, DashboardApi, RecordStore};

/// 可用视图名（与原接口路径一致）
const VIEWS: [&str; 12] = [
    "processing-days-histogram",
    "delay-share",
    "monthly-average-delay",
    "line-average-delay",
    "line-monthly-average-delay",
    "delayed-batches-by-line",
    "delayed-vs-total-batches",
    "top-delay-formulas",
    "monthly-delay-rate",
    "line-scrap-factor",
    "delay-reasons-by-line",
    "delay-reasons-top10",
];

fn main() {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", wip_batch_analytics::APP_NAME);
    tracing::info!("系统版本: {}", wip_batch_analytics::VERSION);
    tracing::info!("==================================================");

    if let Err(err) = run() {
        tracing::error!("运行失败: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let data_path = args.next().ok_or_else(|| {
        anyhow!(
            "用法: wip-batch-analytics <数据文件> [视图名]\n可用视图: {}",
            VIEWS.join(", ")
        )
    })?;
    let view = args.next();

    let store = RecordStore::load(&data_path)
        .with_context(|| format!("装载数据文件失败: {}", data_path))?;
    tracing::info!("数据文件: {} ({} 条事件)", data_path, store.len());

    let api = DashboardApi::new(Arc::new(store));

    let output = match view.as_deref() {
        Some(name) => render_view(&api, name)?,
        None => render_all(&api)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// 输出单个视图
fn render_view(api: &DashboardApi, name: &str) -> anyhow::Result<serde_json::Value> {
    let value = match name {
        "processing-days-histogram" => serde_json::to_value(api.processing_days_histogram()?)?,
        "delay-share" => serde_json::to_value(api.delay_share()?)?,
        "monthly-average-delay" => serde_json::to_value(api.monthly_average_delay()?)?,
        "line-average-delay" => serde_json::to_value(api.line_average_delay()?)?,
        "line-monthly-average-delay" => serde_json::to_value(api.line_monthly_average_delay()?)?,
        "delayed-batches-by-line" => serde_json::to_value(api.delayed_batches_by_line()?)?,
        "delayed-vs-total-batches" => serde_json::to_value(api.delayed_vs_total_batches()?)?,
        "top-delay-formulas" => serde_json::to_value(api.top_delay_formulas()?)?,
        "monthly-delay-rate" => serde_json::to_value(api.monthly_delay_rate()?)?,
        "line-scrap-factor" => serde_json::to_value(api.line_scrap_factor()?)?,
        "delay-reasons-by-line" => serde_json::to_value(api.delay_reasons_by_line()?)?,
        "delay-reasons-top10" => serde_json::to_value(api.top_delay_reasons()?)?,
        other => bail!("未知视图: {}（可用: {}）", other, VIEWS.join(", ")),
    };
    Ok(value)
}

/// 输出全部视图
fn render_all(api: &DashboardApi) -> anyhow::Result<serde_json::Value> {
    let mut all = serde_json::Map::new();
    for name in VIEWS {
        all.insert(name.to_string(), render_view(api, name)?);
    }
    Ok(json!(all))
}
