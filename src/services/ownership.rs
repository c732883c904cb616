use thiserror::Error;
use tracing::debug;

use crate::auth::CallerIdentity;
use crate::database::models::{Store, StoreId, UserId};
use crate::database::repository::{RepositoryError, StoreRepository};

/// Reasons the ownership gate refuses a mutation. Both deny the request.
#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("user {caller} does not own store {store_id} (owner {owner})")]
    NotOwner {
        store_id: StoreId,
        owner: UserId,
        caller: UserId,
    },

    #[error("could not confirm owner of store {store_id}: {source}")]
    Lookup {
        store_id: StoreId,
        #[source]
        source: RepositoryError,
    },
}

/// Confirm that `caller` owns `store_id`, returning the record of truth.
///
/// Fails closed: the only way to get `Ok` is a successful lookup whose owner
/// equals the caller.
pub async fn authorize(
    stores: &dyn StoreRepository,
    caller: &CallerIdentity,
    store_id: StoreId,
) -> Result<Store, AuthzError> {
    let record = match stores.get_by_id(store_id).await {
        Ok(record) => record,
        Err(source) => return Err(AuthzError::Lookup { store_id, source }),
    };

    if record.user_id != caller.user_id {
        return Err(AuthzError::NotOwner {
            store_id,
            owner: record.user_id,
            caller: caller.user_id,
        });
    }

    debug!("User {} confirmed as owner of store {}", caller.user_id, store_id);
    Ok(record)
}
