/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! In-memory storage of users and jobs.
//!
//! Ids are allocated as the largest key in a collection plus one, so the id of
//! a deleted highest entry is handed out again by the next insert. The
//! operations that keep `User::jobs` and `User::jobs_complete` in step with
//! the jobs live in [`crate::users`] and [`crate::jobs`].

use super::consts::FIRST_ID;
use super::models::*;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Store {
    pub(crate) users: Users,
    pub(crate) jobs: Jobs,
}

pub(crate) fn next_id<T>(map: &BTreeMap<Id, T>) -> Id {
    map.last_key_value()
        .map(|(id, _)| id + 1)
        .unwrap_or(FIRST_ID)
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &Users {
        &self.users
    }

    pub fn jobs(&self) -> &Jobs {
        &self.jobs
    }

    pub fn user(&self, id: Id) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn job(&self, id: Id) -> Option<&Job> {
        self.jobs.get(&id)
    }

    pub fn contains_user(&self, id: Id) -> bool {
        self.users.contains_key(&id)
    }

    /// Ids of every job whose owner is `user_id`.
    pub(crate) fn job_ids_of(&self, user_id: Id) -> Vec<Id> {
        self.jobs
            .iter()
            .filter(|(_, job)| job.user_id == user_id)
            .map(|(id, _)| *id)
            .collect()
    }
}
