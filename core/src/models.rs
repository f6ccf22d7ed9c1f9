/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Id = i64;

pub type Users = BTreeMap<Id, User>;
pub type Jobs = BTreeMap<Id, Job>;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    /// Jobs currently owned, complete or not.
    pub jobs: i64,
    pub jobs_complete: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Job {
    pub name: String,
    pub user_id: Id,
    pub description: String,
    pub complete: bool,
}

/// A stored value together with the key it lives under.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record<T> {
    pub id: Id,
    #[serde(flatten)]
    pub value: T,
}

impl<T> Record<T> {
    pub fn new(id: Id, value: T) -> Self {
        Self { id, value }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub jobs: i64,
    pub jobs_complete: i64,
}

impl NewUser {
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            jobs: 0,
            jobs_complete: 0,
        }
    }
}

impl From<NewUser> for User {
    fn from(new: NewUser) -> Self {
        User {
            username: new.username,
            jobs: new.jobs,
            jobs_complete: new.jobs_complete,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewJob {
    pub name: String,
    pub user_id: Id,
    pub description: String,
    pub complete: bool,
}

impl From<NewJob> for Job {
    fn from(new: NewJob) -> Self {
        Job {
            name: new.name,
            user_id: new.user_id,
            description: new.description,
            complete: new.complete,
        }
    }
}

/// Partial update of a job. `None` leaves the stored field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobPatch {
    pub id: Id,
    pub name: Option<String>,
    pub description: Option<String>,
    pub complete: Option<bool>,
}

impl JobPatch {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}
