//! 用户业务服务

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use super::{
    id::IdGenerator,
    model::{CreateUserRequest, UpdateUserRequest, User},
    store::UserStore,
};
use crate::core::error::CoreError;

pub const USER_NOT_FOUND: &str = "User not found.";
pub const MISSING_FIELDS: &str = "Missing required fields: username, email";

/// ID 生成器与用户表，由同一把锁保护
#[derive(Debug, Default)]
struct Registry {
    ids: IdGenerator,
    users: UserStore,
}

/// 用户服务
///
/// 克隆开销很小，所有克隆共享同一份内存数据。每个操作在一次加锁内完成，
/// 因此并发创建时 ID 仍然唯一且严格递增。
#[derive(Clone, Default)]
pub struct UserService {
    inner: Arc<Mutex<Registry>>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // 每个操作都是单步修改，锁中毒后数据依然一致
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.registry().users.list()
    }

    pub fn get_user(&self, id: &str) -> Result<User, CoreError> {
        match self.registry().users.get(id) {
            Some(user) => Ok(user.clone()),
            None => {
                debug!("用户 {} 不存在", id);
                Err(CoreError::NotFound(USER_NOT_FOUND.to_string()))
            }
        }
    }

    pub fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        // 校验先于分配 ID，失败的请求不消耗计数器
        let (Some(username), Some(email)) = (request.username, request.email) else {
            return Err(CoreError::BadRequest(MISSING_FIELDS.to_string()));
        };

        let mut registry = self.registry();
        let user = User {
            id: registry.ids.next_id(),
            username,
            email,
            full_name: request.full_name.unwrap_or_default(),
        };
        registry.users.insert(user.clone());

        info!("创建用户 {} ({})", user.id, user.username);
        Ok(user)
    }

    pub fn update_user(&self, id: &str, changes: UpdateUserRequest) -> Result<User, CoreError> {
        let user = self
            .registry()
            .users
            .update(id, changes)
            .ok_or_else(|| CoreError::NotFound(USER_NOT_FOUND.to_string()))?;

        info!("更新用户 {}", id);
        Ok(user)
    }

    pub fn delete_user(&self, id: &str) -> Result<User, CoreError> {
        let user = self
            .registry()
            .users
            .delete(id)
            .ok_or_else(|| CoreError::NotFound(USER_NOT_FOUND.to_string()))?;

        info!("删除用户 {}", id);
        Ok(user)
    }

    pub fn count(&self) -> usize {
        self.registry().users.len()
    }

    /// 下一个将被分配的 ID
    pub fn next_id_value(&self) -> u64 {
        self.registry().ids.peek()
    }

    /// 清空用户表并把 ID 计数器归位
    pub fn reset(&self) {
        let mut registry = self.registry();
        registry.users.clear();
        registry.ids.reset();
    }
}
