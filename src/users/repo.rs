use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::users::{
    error::UserError,
    repo_types::{NewUser, User, UserPatch},
    services,
};

/// In-memory user collection. Insertion order is listing order.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with existing records, kept in the given order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        // Every mutation leaves the Vec whole, so a poisoned lock is still usable.
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_all(&self) -> Vec<User> {
        self.lock().clone()
    }

    /// Validate, assign `max(id) + 1` and append, all under one lock.
    pub fn create(&self, mut candidate: NewUser) -> Result<User, UserError> {
        services::validate(&mut candidate)?;

        let mut users = self.lock();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User::from_candidate(id, candidate);
        users.push(user.clone());

        info!(user_id = user.id, login = %user.login, "user created");
        Ok(user)
    }

    /// Merge a patch into the stored record with the same id.
    ///
    /// No validation runs here. When the patch has no birthday the name is
    /// reset to the record's login, even if the same patch just set a name.
    pub fn update(&self, patch: UserPatch) -> Result<User, UserError> {
        if patch.id == 0 {
            return Err(UserError::validation("id required"));
        }

        let mut users = self.lock();
        let existing = users
            .iter_mut()
            .find(|u| u.id == patch.id)
            .ok_or_else(|| UserError::not_found(format!("user {} not found", patch.id)))?;

        merge(existing, patch);

        info!(user_id = existing.id, login = %existing.login, "user updated");
        Ok(existing.clone())
    }
}

fn merge(existing: &mut User, patch: UserPatch) {
    if let Some(email) = patch.email {
        existing.email = email;
    }
    if let Some(login) = patch.login {
        existing.login = login;
    }
    if let Some(name) = patch.name.filter(|n| !n.trim().is_empty()) {
        existing.name = name;
    }
    match patch.birthday {
        Some(birthday) => existing.birthday = birthday,
        None => existing.name = existing.login.clone(),
    }
}
