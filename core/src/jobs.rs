/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Job lifecycle. Every mutation here adjusts the owning user's counters so
//! that `jobs` and `jobs_complete` always equal the number of owned and
//! owned-and-complete jobs.

use super::error::{StoreError, StoreResult};
use super::models::*;
use super::store::{Store, next_id};

impl Store {
    pub fn jobs_for_user(&self, user_id: Id) -> StoreResult<Jobs> {
        if !self.contains_user(user_id) {
            return Err(StoreError::UserNotFound(user_id));
        }

        Ok(self
            .jobs
            .iter()
            .filter(|(_, job)| job.user_id == user_id)
            .map(|(id, job)| (*id, job.clone()))
            .collect())
    }

    /// Fails without touching the store when the owner does not exist.
    pub fn create_job(&mut self, new: NewJob) -> StoreResult<Record<Job>> {
        let owner = self
            .users
            .get_mut(&new.user_id)
            .ok_or(StoreError::UserNotFound(new.user_id))?;

        owner.jobs += 1;
        if new.complete {
            owner.jobs_complete += 1;
        }

        let id = next_id(&self.jobs);
        let job: Job = new.into();
        self.jobs.insert(id, job.clone());

        tracing::info!("Created job {} for user {}: {}", id, job.user_id, job.name);

        Ok(Record::new(id, job))
    }

    pub fn update_job(&mut self, patch: JobPatch) -> StoreResult<Record<Job>> {
        let job = self
            .jobs
            .get_mut(&patch.id)
            .ok_or(StoreError::JobNotFound(patch.id))?;

        // compared against the stored value before it is overwritten
        if let Some(complete) = patch.complete {
            if complete != job.complete {
                if let Some(owner) = self.users.get_mut(&job.user_id) {
                    owner.jobs_complete += if complete { 1 } else { -1 };
                }
                job.complete = complete;
            }
        }

        if let Some(name) = patch.name {
            job.name = name;
        }

        if let Some(description) = patch.description {
            job.description = description;
        }

        tracing::info!("Updated job {}", patch.id);

        Ok(Record::new(patch.id, job.clone()))
    }

    pub fn delete_job(&mut self, id: Id) -> StoreResult<Record<Job>> {
        let job = self.jobs.remove(&id).ok_or(StoreError::JobNotFound(id))?;

        if let Some(owner) = self.users.get_mut(&job.user_id) {
            owner.jobs -= 1;
            if job.complete {
                owner.jobs_complete -= 1;
            }
        }

        tracing::info!("Deleted job {} of user {}", id, job.user_id);

        Ok(Record::new(id, job))
    }
}
