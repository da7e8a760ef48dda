//! 用户数据模型

use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub age: Number,
    pub hobbies: Vec<String>,
}

/// 创建用户请求，所有字段都可缺省，必填检查在服务层完成
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub age: Option<Number>,
    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
}

/// 更新用户请求
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub age: Option<Number>,
    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
}

/// 字段是否算作"已提供"：空字符串、0、空数组都视为未提供
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Number {
    fn is_truthy(&self) -> bool {
        self.as_f64().is_some_and(|n| n != 0.0)
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// 只保留 truthy 的值，`None` 和假值都返回 `None`
pub fn truthy<T: Truthy>(value: Option<T>) -> Option<T> {
    value.filter(|v| v.is_truthy())
}

impl User {
    /// 把请求中 truthy 的字段合并进当前记录，其余字段保持不变
    pub fn merge(&mut self, changes: UpdateUserRequest) {
        if let Some(username) = truthy(changes.username) {
            self.username = username;
        }
        if let Some(age) = truthy(changes.age) {
            self.age = age;
        }
        if let Some(hobbies) = truthy(changes.hobbies) {
            self.hobbies = hobbies;
        }
    }
}
