use std::sync::Arc;

use crate::database::Store;
use crate::services::UserService;

/// Capabilities handed to every resolver: the data store and the mutation service.
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: Arc<Store>,
    pub user_service: Arc<UserService>,
}

impl GraphQLContext {
    pub fn new(store: Arc<Store>) -> Self {
        let user_service = Arc::new(UserService::new(store.clone()));

        Self {
            store,
            user_service,
        }
    }
}
