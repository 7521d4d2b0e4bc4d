// ==========================================
// 生产批次WIP分析系统 - 比率计算辅助
// ==========================================
// 职责: 所有百分比/比率的唯一计算入口
// 契约: 分母为0时返回0，不失败、不产生NaN
// ==========================================

/// 百分比: numer / denom * 100
///
/// 分母为0按约定返回0.0（区分"无数据"与"错误"）。
pub fn ratio_pct(numer: u64, denom: u64) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64 * 100.0
    }
}

/// 均值（计数为0返回0.0）
pub fn mean(sum: f64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// 四舍五入到2位小数
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// 四舍五入到4位小数
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
