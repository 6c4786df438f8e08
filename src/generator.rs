//! # 柏林钟灯板生成器
//!
//! 将 [`TimeOfDay`] 换算为五行灯板状态，并渲染为固定的五行文本。

use crate::types::{BerlinClockState, Lamp, TimeOfDay};

/// 行分隔符固定为 `'\n'`，与运行平台无关。
const LINE_SEPARATOR: char = '\n';

/// 文本显示的总长度：1+4+4+11+4 个灯符号加 4 个分隔符。
const DISPLAY_LEN: usize = 28;

/// 根据时刻计算整个灯板的状态。
///
/// 五行的含义：
/// 1. 秒灯，偶数秒点亮为黄色。
/// 2. 五小时行，点亮 `hours / 5` 盏红灯。
/// 3. 单小时行，点亮 `hours % 5` 盏红灯。
/// 4. 五分钟行，点亮 `minutes / 5` 盏黄灯，第 3、6、9 盏为红色刻钟标记。
/// 5. 单分钟行，点亮 `minutes % 5` 盏黄灯。
#[must_use]
pub fn build_state(time: TimeOfDay) -> BerlinClockState {
    BerlinClockState {
        seconds_lamp: if time.seconds % 2 == 0 {
            Lamp::Yellow
        } else {
            Lamp::Off
        },
        five_hour_row: lit_row(usize::from(time.hours / 5), Lamp::Red),
        one_hour_row: lit_row(usize::from(time.hours % 5), Lamp::Red),
        five_minute_row: lit_row(usize::from(time.minutes / 5), Lamp::Yellow),
        one_minute_row: lit_row(usize::from(time.minutes % 5), Lamp::Yellow),
    }
}

/// 将灯板状态渲染为五行文本。
///
/// 行序固定为：秒灯、五小时行、单小时行、五分钟行、单分钟行，
/// 行间以 `'\n'` 分隔，末尾没有多余的分隔符。
#[must_use]
pub fn generate_display(state: &BerlinClockState) -> String {
    let mut display = String::with_capacity(DISPLAY_LEN);
    display.push(state.seconds_lamp.symbol());

    let rows: [&[Lamp]; 4] = [
        &state.five_hour_row,
        &state.one_hour_row,
        &state.five_minute_row,
        &state.one_minute_row,
    ];
    for row in rows {
        display.push(LINE_SEPARATOR);
        for lamp in row {
            display.push(lamp.symbol());
        }
    }

    display
}

/// 从左到右点亮一行中的前 `lit_count` 盏灯，其余保持熄灭。
///
/// 十一灯行（五分钟行）中位置为 3 的倍数的灯点亮时显示为红色刻钟标记，
/// 不受行颜色参数影响。调用方保证 `lit_count` 不超过行长。
fn lit_row<const N: usize>(lit_count: usize, color: Lamp) -> [Lamp; N] {
    let mut row = [Lamp::Off; N];
    for (index, lamp) in row.iter_mut().take(lit_count).enumerate() {
        *lamp = if N == 11 && (index + 1) % 3 == 0 {
            Lamp::Red
        } else {
            color
        };
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hours: u8, minutes: u8, seconds: u8) -> TimeOfDay {
        TimeOfDay {
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn test_lit_row_plain() {
        assert_eq!(lit_row::<4>(0, Lamp::Red), [Lamp::Off; 4]);
        assert_eq!(
            lit_row::<4>(2, Lamp::Red),
            [Lamp::Red, Lamp::Red, Lamp::Off, Lamp::Off]
        );
        // 边界：四盏灯全部点亮
        assert_eq!(lit_row::<4>(4, Lamp::Red), [Lamp::Red; 4]);
    }

    #[test]
    fn test_lit_row_quarter_markers() {
        // 刻钟标记只出现在十一灯行
        assert_eq!(lit_row::<4>(4, Lamp::Yellow), [Lamp::Yellow; 4]);

        assert_eq!(
            lit_row::<11>(5, Lamp::Yellow)[..5],
            [
                Lamp::Yellow,
                Lamp::Yellow,
                Lamp::Red,
                Lamp::Yellow,
                Lamp::Yellow
            ]
        );

        let full = lit_row::<11>(11, Lamp::Yellow);
        for (index, lamp) in full.iter().enumerate() {
            let expected = if (index + 1) % 3 == 0 {
                Lamp::Red
            } else {
                Lamp::Yellow
            };
            assert_eq!(*lamp, expected, "位置 {} 的灯颜色不正确", index + 1);
        }
    }

    #[test]
    fn test_seconds_lamp_parity() {
        assert_eq!(build_state(time(0, 0, 0)).seconds_lamp, Lamp::Yellow);
        assert_eq!(build_state(time(0, 0, 1)).seconds_lamp, Lamp::Off);
        assert_eq!(build_state(time(0, 0, 58)).seconds_lamp, Lamp::Yellow);
        assert_eq!(build_state(time(0, 0, 59)).seconds_lamp, Lamp::Off);
    }

    #[test]
    fn test_build_state_hour_rows() {
        let state = build_state(time(13, 0, 0));
        assert_eq!(
            state.five_hour_row,
            [Lamp::Red, Lamp::Red, Lamp::Off, Lamp::Off]
        );
        assert_eq!(
            state.one_hour_row,
            [Lamp::Red, Lamp::Red, Lamp::Red, Lamp::Off]
        );

        // 23 点恰好点满五小时行
        let state = build_state(time(23, 0, 0));
        assert_eq!(state.five_hour_row, [Lamp::Red; 4]);
        assert_eq!(
            state.one_hour_row,
            [Lamp::Red, Lamp::Red, Lamp::Red, Lamp::Off]
        );
    }

    #[test]
    fn test_build_state_minute_rows() {
        let state = build_state(time(0, 29, 0));
        assert_eq!(
            state.five_minute_row[..6],
            [
                Lamp::Yellow,
                Lamp::Yellow,
                Lamp::Red,
                Lamp::Yellow,
                Lamp::Yellow,
                Lamp::Off
            ]
        );
        assert_eq!(
            state.one_minute_row,
            [Lamp::Yellow, Lamp::Yellow, Lamp::Yellow, Lamp::Yellow]
        );

        // 59 分点满五分钟行和单分钟行
        let state = build_state(time(0, 59, 0));
        assert_eq!(state.five_minute_row.len(), 11);
        assert!(state.five_minute_row.iter().all(|lamp| *lamp != Lamp::Off));
        assert_eq!(state.one_minute_row, [Lamp::Yellow; 4]);
    }

    #[test]
    fn test_generate_display_midnight() {
        let display = generate_display(&build_state(time(0, 0, 0)));
        assert_eq!(display, "Y\nOOOO\nOOOO\nOOOOOOOOOOO\nOOOO");
    }

    #[test]
    fn test_generate_display_has_no_trailing_separator() {
        let display = generate_display(&build_state(time(12, 34, 56)));
        assert!(!display.starts_with('\n'));
        assert!(!display.ends_with('\n'));
        assert_eq!(display.len(), DISPLAY_LEN);
    }
}
