//! 用户数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

/// 创建用户请求
///
/// `username` 与 `email` 在反序列化阶段保持可选，缺失时由服务层给出 400。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// 更新用户请求，`None` 表示该字段不修改
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl UpdateUserRequest {
    /// 把请求中出现的字段写入用户，`id` 永不改变
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
    }
}

/// 删除用户响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
    pub user: User,
}

impl DeleteUserResponse {
    pub fn new(user: User) -> Self {
        Self {
            message: format!("User {} has been deleted.", user.id),
            user,
        }
    }
}
