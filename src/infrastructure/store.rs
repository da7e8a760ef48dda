//! 内存用户存储
//!
//! 进程内唯一的数据来源，不做持久化。整个映射由一把互斥锁保护，
//! 每次存取（包括更新时的读-改-写）都在同一次加锁内完成。

use std::sync::{Mutex, MutexGuard};

use indexmap::IndexMap;

use crate::app::users::model::User;
use crate::core::error::CoreError;

#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<IndexMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, IndexMap<String, User>>, CoreError> {
        self.users
            .lock()
            .map_err(|e| CoreError::Internal(format!("用户存储锁已中毒: {}", e)))
    }

    pub fn get(&self, id: &str) -> Result<Option<User>, CoreError> {
        Ok(self.lock()?.get(id).cloned())
    }

    pub fn set(&self, id: String, user: User) -> Result<(), CoreError> {
        self.lock()?.insert(id, user);
        Ok(())
    }

    /// 删除记录，返回被删除的用户；保持其余记录的插入顺序
    pub fn delete(&self, id: &str) -> Result<Option<User>, CoreError> {
        Ok(self.lock()?.shift_remove(id))
    }

    /// 按插入顺序返回所有用户
    pub fn values(&self) -> Result<Vec<User>, CoreError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    /// 在一次加锁内修改记录并返回修改后的副本，记录不存在时返回 `None`
    pub fn update_with<F>(&self, id: &str, f: F) -> Result<Option<User>, CoreError>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.lock()?;
        Ok(users.get_mut(id).map(|user| {
            f(user);
            user.clone()
        }))
    }

    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.lock()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;
    use std::sync::Arc;
    use std::thread;

    fn user(id: &str, username: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            age: Number::from(30),
            hobbies: Vec::new(),
        }
    }

    #[test]
    fn test_set_get_delete() {
        let store = UserStore::new();
        assert!(store.is_empty().unwrap());

        store.set("a".into(), user("a", "alice")).unwrap();
        assert_eq!(store.get("a").unwrap().unwrap().username, "alice");
        assert!(store.get("b").unwrap().is_none());

        assert_eq!(store.delete("a").unwrap().unwrap().id, "a");
        assert!(store.delete("a").unwrap().is_none());
        assert!(store.get("a").unwrap().is_none());
    }

    #[test]
    fn test_values_keep_insertion_order() {
        let store = UserStore::new();
        for id in ["c", "a", "b", "d"] {
            store.set(id.into(), user(id, id)).unwrap();
        }
        store.delete("a").unwrap();

        let ids: Vec<String> = store.values().unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["c", "b", "d"]);
    }

    #[test]
    fn test_update_with() {
        let store = UserStore::new();
        store.set("a".into(), user("a", "alice")).unwrap();

        let updated = store
            .update_with("a", |u| u.username = "alicia".to_string())
            .unwrap()
            .unwrap();
        assert_eq!(updated.username, "alicia");
        assert_eq!(store.get("a").unwrap().unwrap().username, "alicia");

        assert!(store.update_with("missing", |_| unreachable!()).unwrap().is_none());
    }

    #[test]
    fn test_poisoned_lock_is_internal_error() {
        let store = Arc::new(UserStore::new());
        store.set("a".into(), user("a", "alice")).unwrap();

        let poisoner = Arc::clone(&store);
        let result = thread::spawn(move || {
            let _ = poisoner.update_with("a", |_| panic!("panic while holding the lock"));
        })
        .join();
        assert!(result.is_err());

        assert!(matches!(store.get("a"), Err(CoreError::Internal(_))));
        assert!(matches!(store.values(), Err(CoreError::Internal(_))));
        assert!(matches!(
            store.set("b".into(), user("b", "bob")),
            Err(CoreError::Internal(_))
        ));
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let store = Arc::new(UserStore::new());
        store.set("a".into(), user("a", "")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..100 {
                        store.update_with("a", |u| u.username.push('x')).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get("a").unwrap().unwrap().username.len(), 800);
        assert_eq!(store.len().unwrap(), 1);
    }
}
