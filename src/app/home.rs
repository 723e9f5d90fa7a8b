//! 首页

pub const WELCOME_MESSAGE: &str = "Welcome to the Banking Platform - User Management API!";

pub async fn home() -> &'static str {
    WELCOME_MESSAGE
}
