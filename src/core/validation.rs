//! 用户 ID 格式校验

use std::sync::LazyLock;

use regex::Regex;

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID 正则无效")
});

/// 只检查 8-4-4-4-12 的十六进制文本格式，不检查是否存在
pub fn is_valid_user_id(id: &str) -> bool {
    UUID_PATTERN.is_match(id)
}
