use std::sync::Arc;

use tracing::{debug, warn};

use crate::database::entities::users;
use crate::database::{Filter, ListEdit, Store};
use crate::errors::{ApiError, ApiResult};

const SUBSCRIBERS_KEY: &str = "subscribedToUserIds";

/// Validates and applies user mutations.
#[derive(Clone)]
pub struct UserService {
    store: Arc<Store>,
}

impl UserService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Create a user with an empty subscriber list. Email uniqueness is not checked.
    pub async fn create_user(&self, data: users::CreateModel) -> ApiResult<users::Model> {
        require_non_empty("firstName", &data.first_name)?;
        require_non_empty("lastName", &data.last_name)?;
        require_non_empty("email", &data.email)?;

        let user = self.store.users.create(data).await;
        debug!("Created user {}", user.id);
        Ok(user)
    }

    /// Merge the provided fields into an existing user.
    pub async fn update_user(&self, id: &str, data: users::ChangeModel) -> ApiResult<users::Model> {
        if self.store.users.find_by_id(id).await.is_none() {
            return Err(ApiError::not_found("User", id));
        }

        if let Some(first_name) = &data.first_name {
            require_non_empty("firstName", first_name)?;
        }
        if let Some(last_name) = &data.last_name {
            require_non_empty("lastName", last_name)?;
        }
        if let Some(email) = &data.email {
            require_non_empty("email", email)?;
        }

        let user = self.store.users.change(id, data).await?;
        debug!("Updated user {}", user.id);
        Ok(user)
    }

    /// Record that `subscriber_id` follows `target_id`. Returns the subscriber.
    pub async fn subscribe_to(&self, subscriber_id: &str, target_id: &str) -> ApiResult<users::Model> {
        let subscriber = self.load_pair(subscriber_id, target_id).await?;

        match self
            .store
            .users
            .add_to_list(target_id, SUBSCRIBERS_KEY, subscriber_id)
            .await?
        {
            ListEdit::Added => {
                debug!("User {} subscribed to {}", subscriber_id, target_id);
                Ok(subscriber)
            }
            _ => {
                warn!("User {} is already subscribed to {}", subscriber_id, target_id);
                Err(ApiError::bad_request(format!(
                    "User '{}' is already subscribed to '{}'",
                    subscriber_id, target_id
                )))
            }
        }
    }

    /// Drop the `subscriber_id` -> `target_id` edge. Returns the subscriber.
    pub async fn unsubscribe_from(
        &self,
        subscriber_id: &str,
        target_id: &str,
    ) -> ApiResult<users::Model> {
        let subscriber = self.load_pair(subscriber_id, target_id).await?;

        match self
            .store
            .users
            .remove_from_list(target_id, SUBSCRIBERS_KEY, subscriber_id)
            .await?
        {
            ListEdit::Removed => {
                debug!("User {} unsubscribed from {}", subscriber_id, target_id);
                Ok(subscriber)
            }
            _ => {
                warn!("User {} is not subscribed to {}", subscriber_id, target_id);
                Err(ApiError::bad_request(format!(
                    "User '{}' is not subscribed to '{}'",
                    subscriber_id, target_id
                )))
            }
        }
    }

    /// Load both endpoints of an edge in one lookup and return the subscriber.
    async fn load_pair(&self, subscriber_id: &str, target_id: &str) -> ApiResult<users::Model> {
        let found = self
            .store
            .users
            .find_many(Some(&Filter::equals_any_of(
                "id",
                [subscriber_id, target_id],
            )))
            .await?;

        let subscriber = found
            .iter()
            .find(|user| user.id == subscriber_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("User", subscriber_id))?;

        if !found.iter().any(|user| user.id == target_id) {
            return Err(ApiError::not_found("User", target_id));
        }

        if subscriber_id == target_id {
            return Err(ApiError::bad_request("A user cannot subscribe to themselves"));
        }

        Ok(subscriber)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (Arc<Store>, UserService) {
        let store = Store::shared();
        (store.clone(), UserService::new(store))
    }

    fn new_user(first_name: &str) -> users::CreateModel {
        users::CreateModel {
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn create_user_starts_without_subscribers() {
        let (_, service) = service();
        let user = service.create_user(new_user("Alice")).await.unwrap();
        assert_eq!(user.first_name, "Alice");
        assert!(user.subscribed_to_user_ids.is_empty());
    }

    #[tokio::test]
    async fn create_user_rejects_blank_fields() {
        let (store, service) = service();
        let mut data = new_user("Alice");
        data.email = "  ".to_string();

        let err = service.create_user(data).await.unwrap_err();
        assert_eq!(err, ApiError::validation("email", "must not be empty"));
        assert!(store.users.is_empty().await);
    }

    #[tokio::test]
    async fn update_user_fails_for_unknown_id() {
        let (_, service) = service();
        let err = service
            .update_user("ghost", users::ChangeModel::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_user_reports_unknown_id_before_blank_fields() {
        let (_, service) = service();
        let err = service
            .update_user(
                "ghost",
                users::ChangeModel {
                    email: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::not_found("User", "ghost"));
    }

    #[tokio::test]
    async fn update_user_merges_only_provided_fields() {
        let (_, service) = service();
        let user = service.create_user(new_user("Alice")).await.unwrap();

        let updated = service
            .update_user(
                &user.id,
                users::ChangeModel {
                    last_name: Some("Liddell".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Alice");
        assert_eq!(updated.last_name, "Liddell");
        assert_eq!(updated.email, user.email);
    }

    #[tokio::test]
    async fn subscribe_records_edge_on_target() {
        let (store, service) = service();
        let alice = service.create_user(new_user("Alice")).await.unwrap();
        let bob = service.create_user(new_user("Bob")).await.unwrap();

        let returned = service.subscribe_to(&alice.id, &bob.id).await.unwrap();
        assert_eq!(returned.id, alice.id);

        let bob = store.users.find_by_id(&bob.id).await.unwrap();
        assert_eq!(bob.subscribed_to_user_ids, vec![alice.id.clone()]);
        let alice = store.users.find_by_id(&alice.id).await.unwrap();
        assert!(alice.subscribed_to_user_ids.is_empty());
    }

    #[tokio::test]
    async fn duplicate_subscribe_is_bad_request() {
        let (store, service) = service();
        let alice = service.create_user(new_user("Alice")).await.unwrap();
        let bob = service.create_user(new_user("Bob")).await.unwrap();

        service.subscribe_to(&alice.id, &bob.id).await.unwrap();
        let err = service.subscribe_to(&alice.id, &bob.id).await.unwrap_err();
        assert_eq!(err.error_code(), "BAD_REQUEST");

        let bob = store.users.find_by_id(&bob.id).await.unwrap();
        assert_eq!(bob.subscribed_to_user_ids.len(), 1);
    }

    #[tokio::test]
    async fn subscribe_with_missing_endpoint_is_not_found() {
        let (_, service) = service();
        let alice = service.create_user(new_user("Alice")).await.unwrap();

        let err = service.subscribe_to(&alice.id, "ghost").await.unwrap_err();
        assert_eq!(err, ApiError::not_found("User", "ghost"));

        let err = service.subscribe_to("ghost", &alice.id).await.unwrap_err();
        assert_eq!(err, ApiError::not_found("User", "ghost"));
    }

    #[tokio::test]
    async fn self_subscription_is_rejected() {
        let (store, service) = service();
        let alice = service.create_user(new_user("Alice")).await.unwrap();

        let err = service.subscribe_to(&alice.id, &alice.id).await.unwrap_err();
        assert!(err.is_client_error());

        let alice = store.users.find_by_id(&alice.id).await.unwrap();
        assert!(alice.subscribed_to_user_ids.is_empty());
    }

    #[tokio::test]
    async fn unsubscribe_without_edge_is_bad_request() {
        let (store, service) = service();
        let alice = service.create_user(new_user("Alice")).await.unwrap();
        let bob = service.create_user(new_user("Bob")).await.unwrap();

        let err = service.unsubscribe_from(&alice.id, &bob.id).await.unwrap_err();
        assert_eq!(err.error_code(), "BAD_REQUEST");

        let bob = store.users.find_by_id(&bob.id).await.unwrap();
        assert!(bob.subscribed_to_user_ids.is_empty());
    }

    #[tokio::test]
    async fn unsubscribe_removes_existing_edge() {
        let (store, service) = service();
        let alice = service.create_user(new_user("Alice")).await.unwrap();
        let bob = service.create_user(new_user("Bob")).await.unwrap();

        service.subscribe_to(&alice.id, &bob.id).await.unwrap();
        let returned = service.unsubscribe_from(&alice.id, &bob.id).await.unwrap();
        assert_eq!(returned.id, alice.id);

        let bob = store.users.find_by_id(&bob.id).await.unwrap();
        assert!(bob.subscribed_to_user_ids.is_empty());
    }

    #[tokio::test]
    async fn concurrent_duplicate_subscribes_record_one_edge() {
        let (store, service) = service();
        let alice = service.create_user(new_user("Alice")).await.unwrap();
        let bob = service.create_user(new_user("Bob")).await.unwrap();

        let (first, second) = tokio::join!(
            service.subscribe_to(&alice.id, &bob.id),
            service.subscribe_to(&alice.id, &bob.id)
        );
        assert_eq!(
            [first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(),
            1
        );

        let bob = store.users.find_by_id(&bob.id).await.unwrap();
        assert_eq!(bob.subscribed_to_user_ids, vec![alice.id]);
    }
}
