//! # Uno 核心数据模型库
//!
//! 这个 `core` crate 包含了桌面版 Uno 游戏中与具体实现无关的
//! 核心数据类型：卡牌的定义，以及每位参与者的手牌实体。
//! 它的设计目标是与上层组件（发牌/回合管理、规则与罚牌引擎、
//! 渲染界面）解耦，使其可以被任何上层应用复用。
//! 出牌合法性校验、牌堆管理、胜负判定等逻辑均由外部协作者负责。

mod card;
mod player;

pub use card::*;

pub use player::*;
