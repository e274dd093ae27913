//! Typed wrappers around the REST API resources.
//!
//! # Layout
//! ```text
//! ApiClient::surahs()   → Resource<'_, Surahs>   (CRUD on /surahs/)
//! ApiClient::takhtits() → Resource<'_, Takhtits> (CRUD + breakers/import)
//! ApiClient::auth()     → Auth<'_>               (login/logout/register)
//! ...
//! ```
//!
//! Collection resources share one generic [`Resource`]; each marker type
//! fixes the path, list parameters and response shapes. Extra endpoints
//! are inherent methods on the matching `Resource<'_, Kind>`.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::{ApiClient, ClientError};

pub mod auth;
pub mod ayahs;
pub mod groups;
pub mod health;
pub mod mushafs;
pub mod notifications;
pub mod phrases;
pub mod profile;
pub mod recitations;
pub mod surahs;
pub mod takhtits;
pub mod translations;
pub mod types;
pub mod upload;
pub mod users;
pub mod words;

pub use auth::Auth;
pub use ayahs::Ayahs;
pub use groups::Groups;
pub use health::HealthCheck;
pub use mushafs::Mushafs;
pub use notifications::Notifications;
pub use phrases::Phrases;
pub use profile::Profile;
pub use recitations::Recitations;
pub use surahs::Surahs;
pub use takhtits::Takhtits;
pub use translations::Translations;
pub use types::{ListParams, Paginated, Record, Status, UploadFile};
pub use upload::Upload;
pub use users::Users;
pub use words::Words;

/// Describes one CRUD collection of the API.
pub trait ResourceKind {
    /// Collection path with leading and trailing slash, e.g. `/surahs/`.
    const PATH: &'static str;
    /// Query parameters accepted by `list`.
    type ListParams: Serialize;
    /// Body returned by `list`.
    type List: DeserializeOwned;
    /// Body returned for a single record.
    type Record: DeserializeOwned;
}

/// CRUD access to one collection, borrowing the client.
pub struct Resource<'a, K> {
    client: &'a ApiClient,
    kind: PhantomData<K>,
}

impl<'a, K: ResourceKind> Resource<'a, K> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            kind: PhantomData,
        }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn path(&self) -> &'static str {
        K::PATH
    }

    /// Path of the record `id`, e.g. `/surahs/{id}/`.
    pub fn item_path(&self, id: &str) -> String {
        format!("{}{}/", K::PATH, id)
    }

    /// `GET /<resource>/`
    pub async fn list(&self, params: &K::ListParams) -> Result<K::List, ClientError> {
        self.client.get_with(K::PATH, params).await
    }

    /// `POST /<resource>/`
    pub async fn create<B>(&self, data: &B) -> Result<K::Record, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post(K::PATH, data).await
    }

    /// `GET /<resource>/{id}/`
    pub async fn retrieve(&self, id: &str) -> Result<K::Record, ClientError> {
        self.client.get(&self.item_path(id)).await
    }

    /// `PUT /<resource>/{id}/`
    pub async fn update<B>(&self, id: &str, data: &B) -> Result<K::Record, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.client.put(&self.item_path(id), data).await
    }

    /// `PATCH /<resource>/{id}/`
    pub async fn partial_update<B>(&self, id: &str, data: &B) -> Result<K::Record, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.client.patch(&self.item_path(id), data).await
    }

    /// `DELETE /<resource>/{id}/`
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client.delete(&self.item_path(id)).await
    }
}

impl ApiClient {
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    pub fn profile(&self) -> Profile<'_> {
        Profile::new(self)
    }

    pub fn upload(&self) -> Upload<'_> {
        Upload::new(self)
    }

    pub fn health(&self) -> HealthCheck<'_> {
        HealthCheck::new(self)
    }

    pub fn users(&self) -> Resource<'_, Users> {
        Resource::new(self)
    }

    pub fn groups(&self) -> Resource<'_, Groups> {
        Resource::new(self)
    }

    pub fn mushafs(&self) -> Resource<'_, Mushafs> {
        Resource::new(self)
    }

    pub fn surahs(&self) -> Resource<'_, Surahs> {
        Resource::new(self)
    }

    pub fn ayahs(&self) -> Resource<'_, Ayahs> {
        Resource::new(self)
    }

    pub fn words(&self) -> Resource<'_, Words> {
        Resource::new(self)
    }

    pub fn translations(&self) -> Resource<'_, Translations> {
        Resource::new(self)
    }

    pub fn recitations(&self) -> Resource<'_, Recitations> {
        Resource::new(self)
    }

    pub fn takhtits(&self) -> Resource<'_, Takhtits> {
        Resource::new(self)
    }

    pub fn phrases(&self) -> Resource<'_, Phrases> {
        Resource::new(self)
    }

    pub fn notifications(&self) -> Resource<'_, Notifications> {
        Resource::new(self)
    }
}
