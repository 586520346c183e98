use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::Display;

/// The substring every campus email address must contain.
pub const CAMPUS_EMAIL_DOMAIN: &str = "@school.edu";

/// Type-safe identifier for Users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields shared by every kind of user.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub(crate) id: UserId,
    pub(crate) name: String,
    pub(crate) email: String,
}

/// What a user does on the platform, with the data only that role carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    /// A registered user with no trading role yet.
    Member,
    /// Lists books under the name of `store`.
    Seller { store: String },
    /// Buys books, delivered to `shipping_address`.
    Buyer { shipping_address: String },
}

/// Represents a registered user of the platform.
///
/// # Catalog Framework
/// This struct implements the [`Record`](catalog_framework::Record) trait,
/// allowing it to be managed by a [`UserManager`](crate::users::UserManager).
///
/// The id and name are fixed once the user exists; only the email can change,
/// and only to another campus address (see [`change_email`](User::change_email)).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub(crate) profile: Profile,
    pub(crate) role: Role,
}

/// Read-only projection of a [`User`].
///
/// `store` and `shipping_address` are present only for sellers and buyers
/// respectively, and are left out of the serialized form otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

impl User {
    /// Creates a plain user with no trading role.
    ///
    /// # Arguments
    /// * `name` - User's display name
    /// * `id` - Unique identifier chosen by the caller
    /// * `email` - Contact address; not checked here, only on change
    pub fn new(name: impl Into<String>, id: impl Into<UserId>, email: impl Into<String>) -> Self {
        Self::with_role(name, id, email, Role::Member)
    }

    /// Creates a seller running the store named `store`.
    pub fn seller(
        name: impl Into<String>,
        id: impl Into<UserId>,
        email: impl Into<String>,
        store: impl Into<String>,
    ) -> Self {
        Self::with_role(
            name,
            id,
            email,
            Role::Seller {
                store: store.into(),
            },
        )
    }

    /// Creates a buyer whose purchases ship to `shipping_address`.
    pub fn buyer(
        name: impl Into<String>,
        id: impl Into<UserId>,
        email: impl Into<String>,
        shipping_address: impl Into<String>,
    ) -> Self {
        Self::with_role(
            name,
            id,
            email,
            Role::Buyer {
                shipping_address: shipping_address.into(),
            },
        )
    }

    fn with_role(
        name: impl Into<String>,
        id: impl Into<UserId>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            profile: Profile {
                id: id.into(),
                name: name.into(),
                email: email.into(),
            },
            role,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Projects the user into a [`UserInfo`], including the role-specific field.
    pub fn get_info(&self) -> UserInfo {
        let mut info = UserInfo {
            id: self.profile.id.clone(),
            name: self.profile.name.clone(),
            email: self.profile.email.clone(),
            store: None,
            shipping_address: None,
        };
        match &self.role {
            Role::Member => {}
            Role::Seller { store } => info.store = Some(store.clone()),
            Role::Buyer { shipping_address } => {
                info.shipping_address = Some(shipping_address.clone())
            }
        }
        info
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User({}): {}", self.profile.id, self.profile.name)
    }
}
