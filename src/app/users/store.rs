//! 内存用户存储

use indexmap::IndexMap;

use super::model::{UpdateUserRequest, User};

/// 以 ID 为键的用户表，遍历顺序即插入顺序
#[derive(Debug, Default)]
pub struct UserStore {
    users: IndexMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn list(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn update(&mut self, id: &str, changes: UpdateUserRequest) -> Option<User> {
        let user = self.users.get_mut(id)?;
        changes.apply_to(user);
        Some(user.clone())
    }

    pub fn delete(&mut self, id: &str) -> Option<User> {
        // shift_remove 保持其余记录的相对顺序
        self.users.shift_remove(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn clear(&mut self) {
        self.users.clear();
    }
}
