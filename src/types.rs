//! # 柏林钟的数据模型
//!
//! 该模块定义了转换过程中使用的核心类型：
//! 单盏灯的状态、经过校验的时刻，以及整个灯板的五行状态。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 表示灯板上一盏灯的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lamp {
    /// 熄灭。
    #[default]
    Off,
    /// 黄灯。
    Yellow,
    /// 红灯。
    Red,
}

impl Lamp {
    /// 返回该灯在文本显示中使用的符号。
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Lamp::Off => 'O',
            Lamp::Yellow => 'Y',
            Lamp::Red => 'R',
        }
    }
}

impl fmt::Display for Lamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 一天中的某个时刻。
///
/// 由 [`crate::parser::parse_time`] 在解析成功后填充，
/// 各字段均已通过范围校验：小时 0-23，分钟和秒 0-59。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// 小时 (0-23)。
    pub hours: u8,
    /// 分钟 (0-59)。
    pub minutes: u8,
    /// 秒 (0-59)。
    pub seconds: u8,
}

/// 柏林钟灯板的完整状态，行序固定为从上到下。
///
/// 各行的长度在类型层面固定，构造完成后不再变化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerlinClockState {
    /// 秒灯：偶数秒点亮为黄色。
    pub seconds_lamp: Lamp,
    /// 五小时行，每盏红灯代表 5 小时。
    pub five_hour_row: [Lamp; 4],
    /// 单小时行，每盏红灯代表 1 小时。
    pub one_hour_row: [Lamp; 4],
    /// 五分钟行，每盏黄灯代表 5 分钟，第 3、6、9 盏为红色刻钟标记。
    pub five_minute_row: [Lamp; 11],
    /// 单分钟行，每盏黄灯代表 1 分钟。
    pub one_minute_row: [Lamp; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamp_symbols() {
        assert_eq!(Lamp::Off.symbol(), 'O');
        assert_eq!(Lamp::Yellow.symbol(), 'Y');
        assert_eq!(Lamp::Red.symbol(), 'R');
        assert_eq!(Lamp::Red.to_string(), "R");
    }
}
