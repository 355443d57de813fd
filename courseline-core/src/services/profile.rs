//! Profile service - the local user's profile and preferences

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{PreferencesUpdate, ProfileUpdate, User};
use crate::store::Store;

pub struct ProfileService {
    store: Arc<Store>,
}

impl ProfileService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn get_user(&self) -> Result<User> {
        Ok(self.store.load()?.user)
    }

    /// Update name, email or avatar.
    ///
    /// The updated profile is validated before anything is written; an
    /// invalid update leaves the stored profile unchanged.
    pub fn update_user_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let mut data = self.store.load()?;

        let mut user = data.user.clone();
        user.apply(update);
        user.validate().map_err(Error::validation)?;

        data.user = user.clone();
        self.store.save(&data)?;
        Ok(user)
    }

    /// Merge preference changes into the stored preferences
    pub fn update_user_preferences(&self, update: &PreferencesUpdate) -> Result<User> {
        let mut data = self.store.load()?;
        data.user.preferences.merge(update);
        self.store.save(&data)?;
        Ok(data.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{seed, MemoryStorage};
    use crate::domain::CURRENT_USER_ID;

    fn service() -> ProfileService {
        let store = Store::new(Arc::new(MemoryStorage::new()));
        ProfileService::new(Arc::new(store))
    }

    #[test]
    fn test_get_user_on_fresh_store() {
        assert_eq!(service().get_user().unwrap(), seed::default_user());
    }

    #[test]
    fn test_update_profile() {
        let profile = service();
        let user = profile
            .update_user_profile(&ProfileUpdate {
                name: Some("Grace Hopper".to_string()),
                email: Some("grace@example.org".to_string()),
                avatar: None,
            })
            .unwrap();

        assert_eq!(user.name, "Grace Hopper");
        assert_eq!(user.user_id, CURRENT_USER_ID);
        assert_eq!(profile.get_user().unwrap(), user);
    }

    #[test]
    fn test_invalid_profile_update_is_rejected() {
        let profile = service();
        let err = profile
            .update_user_profile(&ProfileUpdate {
                email: Some("grace-at-example".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = profile
            .update_user_profile(&ProfileUpdate {
                name: Some("   ".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("Name is required"));

        assert_eq!(profile.get_user().unwrap(), seed::default_user());
    }

    #[test]
    fn test_update_preferences_merges() {
        let profile = service();
        let user = profile
            .update_user_preferences(&PreferencesUpdate {
                preferred_categories: None,
                notifications: Some(true),
            })
            .unwrap();
        assert!(user.preferences.notifications);
        assert_eq!(
            user.preferences.preferred_categories,
            ["Programming", "Design"]
        );

        let user = profile
            .update_user_preferences(&PreferencesUpdate {
                preferred_categories: Some(vec!["Design".to_string()]),
                notifications: None,
            })
            .unwrap();
        assert!(user.preferences.notifications);
        assert_eq!(user.preferences.preferred_categories, ["Design"]);
        assert_eq!(profile.get_user().unwrap(), user);
    }
}
