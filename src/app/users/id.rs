//! 用户 ID 生成器

/// 单调递增的十进制字符串 ID，从 "1" 开始，删除后不复用
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> String {
        let current = self.next;
        self.next += 1;
        current.to_string()
    }

    /// 下一次调用 `next_id` 将返回的值
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
