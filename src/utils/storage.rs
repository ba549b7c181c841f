use std::fmt::Display;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

fn save_error(key: &str, cause: impl Display) -> AppError {
    AppError::Storage(format!("Could not save `{}`: {}", key, cause))
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), AppError> {
    LocalStorage::set(key, value).map_err(|e| save_error(key, e))
}

/// Missing keys and undecodable values both read as `None`.
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    match LocalStorage::get::<T>(key) {
        Ok(value) => Some(value),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(e) => {
            log::warn!("⚠️ Invalid value in localStorage `{}`: {}", key, e);
            None
        }
    }
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}
