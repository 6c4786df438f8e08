use thiserror::Error;

/// 定义柏林钟时间转换过程中可能发生的各种错误。
///
/// 校验采取快速失败策略：在第一个违规处立即返回对应的错误，
/// 不做聚合报告，也不会静默回退到默认值。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// 未提供任何输入（空字符串或仅含空白字符）。
    #[error("未提供时间")]
    EmptyInput,
    /// 输入不是三个以冒号分隔的字段。
    #[error("无效的时间格式: '{0}'")]
    InvalidFormat(String),
    /// 某个时间字段无法解析为整数。
    #[error("时间值必须是数字: '{0}'")]
    NonNumeric(String),
    /// 小时字段超出 0-23 的范围。
    #[error("小时值 {0} 超出范围 (应在 0-23 之间)")]
    HoursOutOfBounds(i64),
    /// 分钟字段超出 0-59 的范围。
    #[error("分钟值 {0} 超出范围 (应在 0-59 之间)")]
    MinutesOutOfBounds(i64),
    /// 秒字段超出 0-59 的范围。
    #[error("秒值 {0} 超出范围 (应在 0-59 之间)")]
    SecondsOutOfBounds(i64),
}
