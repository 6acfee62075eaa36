use serde::Serialize;

use super::positive_id;
use crate::error::Result;
use crate::fields::{Email, Password, Username};

/// A user account. Field rules live in the field types; the entity only
/// checks its own identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    id: Option<i64>,
    username: Username,
    email: Email,
    #[serde(skip)]
    password: Password,
}

impl User {
    pub fn new(
        username: Username,
        email: Email,
        password: Password,
        id: Option<i64>,
    ) -> Result<Self> {
        let id = id.map(|id| positive_id("id", id)).transpose()?;
        Ok(User {
            id,
            username,
            email,
            password,
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
