/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::error::{StoreError, StoreResult};
use super::models::*;
use super::store::{Store, next_id};

impl Store {
    pub fn create_user(&mut self, new: NewUser) -> Record<User> {
        let id = next_id(&self.users);
        let user: User = new.into();

        self.users.insert(id, user.clone());
        tracing::info!("Created user {}: {}", id, user.username);

        Record::new(id, user)
    }

    /// Removes the user and every job it owns.
    pub fn delete_user(&mut self, id: Id) -> StoreResult<Record<User>> {
        let user = self
            .users
            .remove(&id)
            .ok_or(StoreError::UserNotFound(id))?;

        let owned = self.job_ids_of(id);
        for job_id in &owned {
            self.jobs.remove(job_id);
        }

        tracing::info!(
            "Deleted user {}: {} (cascaded {} jobs)",
            id,
            user.username,
            owned.len()
        );

        Ok(Record::new(id, user))
    }
}
