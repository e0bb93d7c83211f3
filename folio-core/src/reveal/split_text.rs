//! 逐字符入场
//!
//! 文本先按空格拆成词，再拆成字符。字符序号在整段文本上连续计数，
//! 词间空格也占一个序号，因此延迟从左到右严格递增，跨词也不例外。

use crate::motion::{Millis, StyleSnapshot, Transform, Transition};

/// 全部字符入场后额外等待的时间
const SETTLE_BUFFER_MS: Millis = 600;

/// 单个字符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCell {
    pub ch: char,
    /// 在整段文本中的序号
    pub index: usize,
    /// 过渡延迟（毫秒）
    pub delay_ms: u32,
}

/// 一个词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub chars: Vec<CharCell>,
    /// 词后是否跟一个不换行空格
    pub trailing_space: bool,
}

/// 逐字符入场效果
#[derive(Debug, Clone, PartialEq)]
pub struct SplitText {
    text: String,
    delay_ms: u32,
    duration_ms: u32,
    from: StyleSnapshot,
    to: StyleSnapshot,
}

impl SplitText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay_ms: 50,
            duration_ms: 600,
            from: StyleSnapshot::hidden().with_transform(Transform::translate_y(40.0)),
            to: StyleSnapshot::shown(),
        }
    }

    /// 每个字符之间的延迟
    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// 入场前快照
    pub fn from(mut self, from: StyleSnapshot) -> Self {
        self.from = from;
        self
    }

    /// 入场后快照
    pub fn to(mut self, to: StyleSnapshot) -> Self {
        self.to = to;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 字符总数（含空格）
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// 拆分结果
    pub fn layout(&self) -> Vec<WordGroup> {
        let words: Vec<&str> = self.text.split(' ').collect();
        let last = words.len().saturating_sub(1);
        let mut index = 0usize;
        let mut groups = Vec::with_capacity(words.len());

        for (wi, word) in words.iter().enumerate() {
            let chars = word
                .chars()
                .map(|ch| {
                    let cell = CharCell {
                        ch,
                        index,
                        delay_ms: self.delay_ms.saturating_mul(index as u32),
                    };
                    index += 1;
                    cell
                })
                .collect();
            // 分隔空格占一个序号
            index += 1;
            groups.push(WordGroup {
                chars,
                trailing_space: wi < last,
            });
        }
        groups
    }

    /// 从触发到全部完成的时间
    pub fn completion_ms(&self) -> Millis {
        Millis::from(self.delay_ms) * self.char_count() as Millis + SETTLE_BUFFER_MS
    }

    /// 单个字符的快照
    pub fn snapshot(&self, revealed: bool) -> StyleSnapshot {
        if revealed { self.to } else { self.from }
    }

    /// 单个字符的 inline style
    pub fn char_style(&self, cell: &CharCell, revealed: bool) -> String {
        let transition = Transition::new(self.duration_ms, cell.delay_ms);
        format!(
            "display: inline-block; {}",
            self.snapshot(revealed).to_css_with(&transition)
        )
    }

    /// 创建与本文本匹配的完成计时器
    pub fn completion_timer(&self) -> CompletionTimer {
        CompletionTimer::new(self.completion_ms())
    }
}

/// 完成回调计时器
///
/// 触发时 `arm`，到期后 `poll` 恰好返回一次 `true`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionTimer {
    duration: Millis,
    deadline: Option<Millis>,
    fired: bool,
}

impl CompletionTimer {
    pub fn new(duration: Millis) -> Self {
        Self {
            duration,
            deadline: None,
            fired: false,
        }
    }

    /// 开始计时，重复调用不会推迟截止时间
    pub fn arm(&mut self, now: Millis) -> Millis {
        *self.deadline.get_or_insert(now + self.duration)
    }

    /// 截止时间（未开始时为 `None`）
    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// 检查是否到期
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if !self.fired && now >= deadline => {
                self.fired = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }
}
