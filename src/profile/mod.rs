//! Profile screen support: the identity provider and local cache
//! interfaces, and [`ProfileService`] which keeps the user's profile image
//! reference cached between sessions.

pub mod cache;
pub mod identity;

use std::sync::Arc;

use log::{info, warn};

pub use cache::{CacheError, FileCache, KeyValueCache, MemoryCache};
pub use identity::{AuthState, IdentityError, IdentityProvider, InMemoryIdentity, ProfileUpdate, UserProfile};

use crate::constants::{ERROR_EMPTY_DISPLAY_NAME, ERROR_NOT_AUTHENTICATED, ERROR_NO_PROFILE_IMAGE, PROFILE_IMAGE_KEY_PREFIX};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("{msg}", msg = ERROR_NOT_AUTHENTICATED)]
    NotAuthenticated,

    #[error("{msg}", msg = ERROR_NO_PROFILE_IMAGE)]
    NoImage,

    #[error("{msg}", msg = ERROR_EMPTY_DISPLAY_NAME)]
    InvalidName,

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Where a loaded profile image reference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Cache,
    Identity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileImage {
    pub uri: String,
    pub source: ImageSource,
}

pub struct ProfileService {
    identity: Arc<dyn IdentityProvider>,
    cache: Arc<dyn KeyValueCache>,
}

impl ProfileService {
    pub fn new(identity: Arc<dyn IdentityProvider>, cache: Arc<dyn KeyValueCache>) -> Self {
        Self { identity, cache }
    }

    pub fn identity(&self) -> &Arc<dyn IdentityProvider> {
        &self.identity
    }

    /// Cache key holding the image reference of `uid`
    pub fn image_key(uid: &str) -> String {
        format!("{}{}", PROFILE_IMAGE_KEY_PREFIX, uid)
    }

    async fn require_user(&self) -> Result<UserProfile, ProfileError> {
        self.identity.current_user().await.ok_or(ProfileError::NotAuthenticated)
    }

    /// Cache the image locally, then record it on the identity profile
    pub async fn save_profile_image(&self, uri: &str) -> Result<UserProfile, ProfileError> {
        let user = self.require_user().await?;
        let key = Self::image_key(&user.uid);

        self.cache.set(&key, uri).await?;
        let profile = self
            .identity
            .update_profile(ProfileUpdate {
                photo_url: Some(uri.to_string()),
                ..Default::default()
            })
            .await?;

        info!("Saved profile image for {}", user.uid);
        Ok(profile)
    }

    /// Cached reference first, then the provider's photo URL, which is
    /// written back to the cache for next time
    pub async fn load_profile_image(&self) -> Result<ProfileImage, ProfileError> {
        let user = self.require_user().await?;
        let key = Self::image_key(&user.uid);

        if let Some(uri) = self.cache.get(&key).await? {
            return Ok(ProfileImage {
                uri,
                source: ImageSource::Cache,
            });
        }

        let uri = user.photo_url.ok_or(ProfileError::NoImage)?;
        if let Err(e) = self.cache.set(&key, &uri).await {
            warn!("Could not backfill profile image cache: {}", e);
        }
        Ok(ProfileImage {
            uri,
            source: ImageSource::Identity,
        })
    }

    /// Forget the cached image reference, typically right before signing out
    pub async fn clear_profile_image_cache(&self) -> Result<(), ProfileError> {
        let user = self.require_user().await?;
        self.cache.remove(&Self::image_key(&user.uid)).await?;
        info!("Cleared profile image cache for {}", user.uid);
        Ok(())
    }

    pub async fn update_display_name(&self, name: &str) -> Result<UserProfile, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::InvalidName);
        }
        self.require_user().await?;

        let profile = self
            .identity
            .update_profile(ProfileUpdate {
                display_name: Some(name.to_string()),
                ..Default::default()
            })
            .await?;
        Ok(profile)
    }

    /// Clear the local cache and sign out
    pub async fn sign_out(&self) -> Result<(), ProfileError> {
        if self.identity.current_user().await.is_some() {
            self.clear_profile_image_cache().await?;
        }
        self.identity.sign_out().await?;
        Ok(())
    }
}
