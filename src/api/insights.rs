// ==========================================
// 生产批次WIP分析系统 - 视图静态解读文案
// ==========================================
// 职责: 各视图随数据附带的固定解读文案
// 约束: 纯静态，不由数据派生，引擎不重算
// ==========================================

/// 加工天数直方图
pub const HISTOGRAM: &str = "批次加工天数分布直方图。红色虚线为2天延误阈值，\
阈值右侧的长尾批次是重点排查对象。";

/// 准时/延误占比
pub const DELAY_SHARE: &str = "准时与延误批次的占比对比。延误占比的小幅改善\
即可显著提升产能利用与交付表现。";

/// 月度平均加工天数
pub const MONTHLY_TREND: &str = "按月平均加工天数时序。持续高于2天阈值的月份\
提示系统性延误（需求激增/产能瓶颈/资源短缺）。";

/// 产线平均加工天数
pub const LINE_TREND: &str = "各产线平均加工天数对比。显著高于阈值的产线是\
全局延误的主要贡献者，建议优先做根因分析。";

/// 产线×月度透视
pub const LINE_MONTHLY_PIVOT: &str = "各产线逐月平均加工天数。突发尖峰多为\
一次性扰动（设备故障/人力缺口），持续爬升提示产能压力。";

/// 产线延误批次数
pub const DELAYED_BY_LINE: &str = "各产线延误批次数排名（降序）。头部产线\
通常贡献大部分延误，优化收益最大。";

/// 产线总量 vs 延误
pub const TOTAL_VS_DELAYED: &str = "各产线工作量拆分（准时/延误）。低量产线\
若延误占比仍高，说明延误并非纯粹由负载驱动。";

/// 配方延误率排名
pub const TOP_DELAY_FORMULAS: &str = "延误率最高的配方排名。高延误率配方提示\
工艺或物料层面的结构性问题。";

/// 月度延误率
pub const MONTHLY_DELAY_RATE: &str = "按月延误率时序，50%参考线仅供对照。\
剧烈波动提示过程不稳定或外部扰动。";

/// 产线报废率
pub const LINE_SCRAP: &str = "各产线平均报废率对比。报废率普遍集中时多为\
配方/原料层面的系统性因素，而非单线缺陷。";
