use crate::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// 参与者类型 (PlayerRole)
/// 只存在人类和电脑两种参与者，构造之后不可更改
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum PlayerRole {
    Human,   // 人类玩家
    Machine, // 电脑玩家
}

/// 按位置访问手牌时的越界错误
/// 这是本组件唯一的错误类型，不在内部捕获，直接向调用方传播
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("card index out of range (index={index}, len={len})")]
    OutOfRange { index: usize, len: usize },
}

/// 一名参与者的手牌 (Player)
///
/// 手牌实体只负责存储，不做任何规则校验：
/// - `cards` 按加入顺序保存当前持有的牌，移除时后续的牌依次前移。
/// - `role` 标记这副手牌属于人类还是电脑。
/// - `protected_by_uno` 记录玩家是否已成功喊出 "UNO" 而受到保护，
///   罚牌窗口的计时线程和回合线程会同时读写这个标志，
///   因此采用原子布尔值保证跨线程立即可见；
///   牌序列本身没有这个保证，结构性修改必须由单一逻辑持有者发起。
///
/// 发多少张、能不能出、要不要罚，都由外部的发牌/规则协作者决定，
/// 手牌对牌数不设上限，也不检查重复。
#[derive(Debug, Serialize, Deserialize)]
pub struct Player {
    cards: Vec<Card>,
    role: PlayerRole,
    protected_by_uno: AtomicBool,
}

impl Player {
    /// 创建一副空手牌，UNO 保护标志初始为 false
    pub fn new(role: PlayerRole) -> Player {
        Player {
            cards: Vec::new(),
            role,
            protected_by_uno: AtomicBool::new(false),
        }
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    /// 把一张牌追加到手牌末尾
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 以只读切片借出全部手牌，按加入顺序排列
    ///
    /// 切片直接别名内部存储，不产生拷贝，适合渲染层每帧读取；
    /// 结构性修改只能通过 [`Player::add_card`] / [`Player::remove_card`]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// 读取 `index` 位置的牌，不移除
    pub fn card(&self, index: usize) -> Result<&Card, HandError> {
        self.cards.get(index).ok_or(HandError::OutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// 移除并返回 `index` 位置的牌，后续的牌依次前移一位
    pub fn remove_card(&mut self, index: usize) -> Result<Card, HandError> {
        if index >= self.cards.len() {
            return Err(HandError::OutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// 当前手牌数量
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 设置 UNO 保护标志
    ///
    /// 原子写入，写入后对所有线程立即可见；
    /// 标志不与手牌数量联动，完全由调用方控制
    pub fn set_protected_by_uno(&self, value: bool) {
        self.protected_by_uno.store(value, Ordering::SeqCst);
    }

    /// 查询 UNO 保护标志
    pub fn is_protected_by_uno(&self) -> bool {
        self.protected_by_uno.load(Ordering::SeqCst)
    }
}

// AtomicBool 不是 Clone，手动实现：克隆体得到标志当前的快照
impl Clone for Player {
    fn clone(&self) -> Player {
        Player {
            cards: self.cards.clone(),
            role: self.role,
            protected_by_uno: AtomicBool::new(self.is_protected_by_uno()),
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            PlayerRole::Human => "HUMAN_PLAYER",
            PlayerRole::Machine => "MACHINE_PLAYER",
        })
    }
}

// --- 单元测试 ---
