use serde::{Deserialize, Serialize};
use std::fmt;
// --- 核心数据结构定义 ---

/// 卡牌颜色 (CardColor)
/// `Wild` 表示万能牌在被打出并由规则引擎指定颜色之前的"无色"状态；
/// 本 crate 只负责存储，不负责染色
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,    // 红 🔴
    Yellow, // 黄 🟡
    Green,  // 绿 🟢
    Blue,   // 蓝 🔵
    Wild,   // 无色 ⬛
}

/// 牌面值 (CardValue)
/// 数字牌 0-9 加上功能牌，采用封闭枚举，外部无法构造出未知牌面
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum CardValue {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// 单张 Uno 卡牌 (Card)
/// 纯数据类型：这里不包含任何出牌匹配规则，
/// "能不能压上一张牌"由外部规则引擎决定
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    pub color: CardColor,
    pub value: CardValue,
}

impl Card {
    pub fn new(color: CardColor, value: CardValue) -> Card {
        Card { color, value }
    }
}

// --- 实现辅助功能 ---

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            CardColor::Red => "🔴",
            CardColor::Yellow => "🟡",
            CardColor::Green => "🟢",
            CardColor::Blue => "🔵",
            CardColor::Wild => "⬛",
        })
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            CardValue::Zero => "0",
            CardValue::One => "1",
            CardValue::Two => "2",
            CardValue::Three => "3",
            CardValue::Four => "4",
            CardValue::Five => "5",
            CardValue::Six => "6",
            CardValue::Seven => "7",
            CardValue::Eight => "8",
            CardValue::Nine => "9",
            CardValue::Skip => "⊘",
            CardValue::Reverse => "⇄",
            CardValue::DrawTwo => "+2",
            CardValue::Wild => "W",
            CardValue::WildDrawFour => "+4",
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.color, self.value)
    }
}

// --- 单元测试 ---
