//! # Berlin Clock Processor: A Converter from Wall-Clock Times to Lamp Displays
//!
//! This crate converts a wall-clock time string in `HH:MM:SS` format into the
//! lamp display of the Berlin Clock (Mengenlehreuhr): a fixed panel of five
//! lamp rows that encodes the time through illuminated lamps. The top lamp
//! blinks on even seconds, two rows of four lamps show the hours in units of
//! five and one, and two rows of eleven and four lamps show the minutes the
//! same way. Every third lamp of the eleven-lamp row marks a quarter of the
//! hour and lights up red instead of yellow.
//!
//! The three layers you will use are:
//! - [`convert_time`]: the combined operation, time string in, display string out.
//! - [`parse_time`]: converts a time string into a validated [`TimeOfDay`].
//! - [`build_state`] / [`generate_display`]: compute the typed
//!   [`BerlinClockState`] and render it as five lines of `Y`/`R`/`O` symbols.
//!
//! Validation is all-or-nothing: any malformed or out-of-range input yields a
//! [`ConvertError`] and no partial output.
//!
//! ## Examples
//!
//! ```rust
//! use berlin_clock_processor::convert_time;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let display = convert_time("13:17:01")?;
//!     let rows: Vec<&str> = display.lines().collect();
//!
//!     // 13:17:01 -> odd second, 2x5 + 3 hours, 3x5 + 2 minutes.
//!     assert_eq!(rows, ["O", "RROO", "RRRO", "YYROOOOOOOO", "YYOO"]);
//!
//!     assert!(convert_time("10:65:10").is_err());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod generator;
pub mod parser;
pub mod types;

use tracing::error;

pub use error::ConvertError;
pub use generator::{build_state, generate_display};
pub use parser::parse_time;
pub use types::{BerlinClockState, Lamp, TimeOfDay};

/// 将 "HH:MM:SS" 格式的时间字符串转换为柏林钟的五行文本显示。
///
/// # 参数
///
/// * `time` - 时间字符串，三个以冒号分隔的整数字段。
///
/// # 返回
///
/// * `Ok(String)` - 五行灯板文本，行间以 `'\n'` 分隔，各行长度固定为
///   1、4、4、11、4。
/// * `Err(ConvertError)` - 输入未通过校验时返回具体的错误信息。
///
/// # Errors
///
/// 校验失败即返回错误，不产生任何部分输出：
///
/// * [`ConvertError::EmptyInput`] - 输入为空或仅含空白字符
/// * [`ConvertError::InvalidFormat`] - 冒号分隔的字段数不为 3
/// * [`ConvertError::NonNumeric`] - 某个字段无法解析为整数
/// * [`ConvertError::SecondsOutOfBounds`] / [`ConvertError::MinutesOutOfBounds`] /
///   [`ConvertError::HoursOutOfBounds`] - 字段超出取值范围
pub fn convert_time(time: &str) -> Result<String, ConvertError> {
    let time_of_day = match parser::parse_time(time) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("无法解析时间 '{}': {}", time, e);
            return Err(e);
        }
    };

    Ok(generator::generate_display(&generator::build_state(
        time_of_day,
    )))
}
