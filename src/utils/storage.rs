use web_sys::{window, Storage};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Almacén clave/valor de strings (localStorage en el navegador)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> AppResult<Storage> {
        get_local_storage().ok_or_else(|| AppError::Storage("No se pudo acceder a localStorage".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("Error leyendo '{}' de localStorage", key)))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Error guardando '{}' en localStorage", key)))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| AppError::Storage(format!("Error eliminando '{}' de localStorage", key)))
    }
}

/// `Ok(None)` si la clave no existe; error si existe pero no se puede leer
pub fn load_json<S: KeyValueStore + ?Sized, T: DeserializeOwned>(store: &S, key: &str) -> AppResult<Option<T>> {
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::KeyValueStore;
    use crate::error::AppResult;

    /// Almacén en memoria para tests
    #[derive(Default)]
    pub struct MemoryStore {
        pub items: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> AppResult<()> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn json_values_are_read_back_from_store() {
        let store = MemoryStore::default();
        store.set("k", "[1,2,3]").unwrap();
        assert_eq!(load_json::<_, Vec<i32>>(&store, "k").unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(load_json::<_, Vec<i32>>(&store, "missing").unwrap(), None);
    }

    #[test]
    fn corrupt_json_is_an_error_not_a_panic() {
        let store = MemoryStore::default();
        store.set("k", "{not json").unwrap();
        assert!(matches!(load_json::<_, Vec<i32>>(&store, "k"), Err(AppError::Parse(_))));
    }
}
