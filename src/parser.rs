//! # 时间字符串解析器
//!
//! 将 "HH:MM:SS" 形式的时间字符串解析为经过范围校验的 [`TimeOfDay`]。
//! 解析是纯函数，没有任何副作用。

use crate::error::ConvertError;
use crate::types::TimeOfDay;

const MAX_HOURS: i64 = 23;
const MAX_MINUTES: i64 = 59;
const MAX_SECONDS: i64 = 59;

/// 解析 "HH:MM:SS" 格式的时间字符串。
///
/// 字段不要求补零，"7:5:3" 与 "07:05:03" 等价。
/// 范围校验按秒、分钟、小时的顺序进行，在第一个违规处返回。
///
/// # 参数
///
/// * `time` - 时间字符串，三个以冒号分隔的整数字段。
///
/// # 返回
///
/// * `Ok(TimeOfDay)` - 校验通过的时刻。
/// * `Err(ConvertError)` - 首个被检测到的违规对应的错误。
///
/// # Errors
///
/// * [`ConvertError::EmptyInput`] - 输入为空或仅含空白字符
/// * [`ConvertError::InvalidFormat`] - 冒号分隔的字段数不为 3
/// * [`ConvertError::NonNumeric`] - 某个字段无法解析为整数
/// * [`ConvertError::SecondsOutOfBounds`] - 秒不在 0-59 之间
/// * [`ConvertError::MinutesOutOfBounds`] - 分钟不在 0-59 之间
/// * [`ConvertError::HoursOutOfBounds`] - 小时不在 0-23 之间
pub fn parse_time(time: &str) -> Result<TimeOfDay, ConvertError> {
    if time.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 3 {
        return Err(ConvertError::InvalidFormat(time.to_string()));
    }

    let parse_field = |part: &str| {
        part.parse::<i64>()
            .map_err(|_| ConvertError::NonNumeric(part.to_string()))
    };
    let hours = parse_field(parts[0])?;
    let minutes = parse_field(parts[1])?;
    let seconds = parse_field(parts[2])?;

    let seconds = checked_field(seconds, MAX_SECONDS, ConvertError::SecondsOutOfBounds)?;
    let minutes = checked_field(minutes, MAX_MINUTES, ConvertError::MinutesOutOfBounds)?;
    let hours = checked_field(hours, MAX_HOURS, ConvertError::HoursOutOfBounds)?;

    Ok(TimeOfDay {
        hours,
        minutes,
        seconds,
    })
}

/// 校验字段落在 `0..=max` 内并收窄为 `u8`。
fn checked_field(
    value: i64,
    max: i64,
    out_of_bounds: fn(i64) -> ConvertError,
) -> Result<u8, ConvertError> {
    if !(0..=max).contains(&value) {
        return Err(out_of_bounds(value));
    }
    u8::try_from(value).map_err(|_| out_of_bounds(value))
}
