//! In-memory data store backing the four entity collections.
//!
//! Every operation takes the collection lock once, so individual calls are
//! serialized. The list primitives check membership and mutate inside the
//! same critical section, which makes subscription edits atomic.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::entities::{member_types, posts, profiles, users, Entity, FieldKind};
use super::filter::Filter;
use crate::errors::{StoreError, StoreResult};

/// Outcome of an atomic list edit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ListEdit {
    Added,
    AlreadyPresent,
    Removed,
    Absent,
}

/// A keyed collection of records, iterated in insertion order.
pub struct Collection<M: Entity> {
    records: RwLock<IndexMap<String, M>>,
}

impl<M: Entity> Default for Collection<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Entity> Collection<M> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(IndexMap::new()),
        }
    }

    /// All records matching `filter`, or every record when no filter is given.
    pub async fn find_many(&self, filter: Option<&Filter>) -> StoreResult<Vec<M>> {
        if let Some(filter) = filter {
            filter.validate::<M>()?;
        }

        let records = self.records.read().await;
        let found = match filter {
            None => records.values().cloned().collect(),
            Some(filter) => match filter.exact_id() {
                Some(id) => records.get(id).cloned().into_iter().collect(),
                None => records
                    .values()
                    .filter(|record| filter.matches(*record))
                    .cloned()
                    .collect(),
            },
        };

        Ok(found)
    }

    /// First record matching `filter`.
    pub async fn find_one(&self, filter: &Filter) -> StoreResult<Option<M>> {
        filter.validate::<M>()?;

        let records = self.records.read().await;
        let found = match filter.exact_id() {
            Some(id) => records.get(id).cloned(),
            None => records
                .values()
                .find(|record| filter.matches(*record))
                .cloned(),
        };

        Ok(found)
    }

    pub async fn find_by_id(&self, id: &str) -> Option<M> {
        self.records.read().await.get(id).cloned()
    }

    /// Insert a new record under a freshly generated id.
    pub async fn create(&self, data: M::Create) -> M {
        let record = M::from_create(Uuid::new_v4().to_string(), data);
        self.records
            .write()
            .await
            .insert(record.id().to_string(), record.clone());
        record
    }

    /// Insert a record that already carries its id.
    pub async fn insert(&self, record: M) -> StoreResult<M> {
        let mut records = self.records.write().await;
        if records.contains_key(record.id()) {
            return Err(StoreError::DuplicateId {
                entity: M::NAME,
                id: record.id().to_string(),
            });
        }
        records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    /// Merge `change` into the record with `id`.
    pub async fn change(&self, id: &str, change: M::Change) -> StoreResult<M> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| StoreError::RecordNotFound {
                entity: M::NAME,
                id: id.to_string(),
            })?;
        record.apply_change(change);
        Ok(record.clone())
    }

    /// Append `value` to the list field `key` unless it is already there.
    pub async fn add_to_list(&self, id: &str, key: &str, value: &str) -> StoreResult<ListEdit> {
        self.edit_list(id, key, |list| {
            if list.iter().any(|item| item == value) {
                ListEdit::AlreadyPresent
            } else {
                list.push(value.to_string());
                ListEdit::Added
            }
        })
        .await
    }

    /// Remove `value` from the list field `key` if it is there.
    pub async fn remove_from_list(
        &self,
        id: &str,
        key: &str,
        value: &str,
    ) -> StoreResult<ListEdit> {
        self.edit_list(id, key, |list| {
            let before = list.len();
            list.retain(|item| item != value);
            if list.len() < before {
                ListEdit::Removed
            } else {
                ListEdit::Absent
            }
        })
        .await
    }

    async fn edit_list<F>(&self, id: &str, key: &str, edit: F) -> StoreResult<ListEdit>
    where
        F: FnOnce(&mut Vec<String>) -> ListEdit,
    {
        if M::field_kind(key) != Some(FieldKind::IdentifierList) {
            return Err(StoreError::NotAList {
                entity: M::NAME,
                key: key.to_string(),
            });
        }

        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| StoreError::RecordNotFound {
                entity: M::NAME,
                id: id.to_string(),
            })?;
        let list = record
            .list_field_mut(key)
            .ok_or_else(|| StoreError::NotAList {
                entity: M::NAME,
                key: key.to_string(),
            })?;

        Ok(edit(list))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// The four collections the resolvers read from.
#[derive(Default)]
pub struct Store {
    pub users: Collection<users::Model>,
    pub profiles: Collection<profiles::Model>,
    pub posts: Collection<posts::Model>,
    pub member_types: Collection<member_types::Model>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}
