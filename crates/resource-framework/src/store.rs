//! # Resource Store
//!
//! `ResourceStore<T>` is the in-memory, ordered collection of records of one
//! resource type. It is a plain value with `&mut self` mutation and no locking;
//! sharing it safely is the job of the [`ResourceActor`](crate::ResourceActor) that owns it.
//!
//! # Invariants
//! - Ids are unique within a store.
//! - Records are listed in insertion order. Deletion keeps the relative order of the rest.
//! - Ids come from a high-water-mark counter, so an id is never handed out twice,
//!   not even after the record that held it was deleted.
//! - Once `u32::MAX` has been used the counter is exhausted and `create` fails with
//!   [`StoreError::IdsExhausted`].
//!
//! Lookups are linear scans on the id. Stores are expected to stay small.

use crate::entity::Resource;
use crate::error::StoreError;
use crate::validation::Validate;
use rand::seq::SliceRandom;

/// Ordered in-memory collection of `T` records addressable by id.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: Resource> {
    records: Vec<T>,
    /// `None` once every id up to `u32::MAX` has been used.
    next_id: Option<u32>,
}

impl<T: Resource> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> ResourceStore<T> {
    /// Creates an empty store whose first assigned id is `1`.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Creates a store pre-populated with records that already carry ids.
    ///
    /// The counter resumes after the largest seeded id. A seed holding `u32::MAX` is
    /// accepted, but leaves no id for `create`.
    ///
    /// # Errors
    /// [`StoreError::DuplicateId`] if two seeded records share an id.
    pub fn with_records(records: Vec<T>) -> Result<Self, StoreError> {
        let mut next_id = Some(1);
        for (i, record) in records.iter().enumerate() {
            let id = record.id();
            if records[..i].iter().any(|r| r.id() == id) {
                return Err(StoreError::DuplicateId(id.to_string()));
            }
            let raw: u32 = id.into();
            next_id = match (next_id, raw.checked_add(1)) {
                (Some(current), Some(after)) => Some(current.max(after)),
                _ => None,
            };
        }
        Ok(Self { records, next_id })
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next successful `create` will assign, or `None` if ids are exhausted.
    pub fn next_id(&self) -> Option<T::Id> {
        self.next_id.map(T::Id::from)
    }

    pub fn get(&self, id: T::Id) -> Result<&T, StoreError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Validates `params`, assigns the next id and appends the new record.
    ///
    /// # Errors
    /// [`StoreError::Validation`] for a bad payload, [`StoreError::IdsExhausted`] when no
    /// unused id is left. Neither changes the store.
    pub fn create(&mut self, params: T::Create) -> Result<&T, StoreError> {
        params.validate().map_err(StoreError::Validation)?;

        let raw = self.next_id.ok_or(StoreError::IdsExhausted)?;
        self.next_id = raw.checked_add(1);
        self.records.push(T::from_create_params(T::Id::from(raw), params));

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Replaces every mutable field of the record `id`.
    ///
    /// Existence is checked before the payload, so an unknown id is always `NotFound`.
    /// An invalid payload leaves the record untouched.
    pub fn update(&mut self, id: T::Id, update: T::Update) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        update.validate().map_err(StoreError::Validation)?;
        record.apply_update(update);
        Ok(())
    }

    /// Removes the record `id` and returns it.
    pub fn delete(&mut self, id: T::Id) -> Result<T, StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Records matching `filter`, in insertion order.
    pub fn search(&self, filter: &T::Filter) -> Vec<&T> {
        self.records.iter().filter(|r| r.matches(filter)).collect()
    }

    /// A uniformly random record, or `None` when the store is empty.
    pub fn sample(&self) -> Option<&T> {
        self.records.choose(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationErrors, Validator};
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct WidgetId(u32);

    impl From<u32> for WidgetId {
        fn from(id: u32) -> Self {
            Self(id)
        }
    }

    impl From<WidgetId> for u32 {
        fn from(id: WidgetId) -> Self {
            id.0
        }
    }

    impl fmt::Display for WidgetId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: WidgetId,
        name: String,
        price: f64,
    }

    #[derive(Debug, Clone)]
    struct WidgetInput {
        name: String,
        price: f64,
    }

    impl Validate for WidgetInput {
        fn validate(&self) -> Result<(), ValidationErrors> {
            Validator::new()
                .required("name", &self.name)
                .max_chars("name", &self.name, 100)
                .in_range("price", self.price, 0.01, f64::MAX)
                .finish()
        }
    }

    impl Resource for Widget {
        type Id = WidgetId;
        type Create = WidgetInput;
        type Update = WidgetInput;
        type Filter = String;

        fn id(&self) -> WidgetId {
            self.id
        }

        fn from_create_params(id: WidgetId, params: WidgetInput) -> Self {
            Self {
                id,
                name: params.name,
                price: params.price,
            }
        }

        fn apply_update(&mut self, update: WidgetInput) {
            self.name = update.name;
            self.price = update.price;
        }

        fn matches(&self, filter: &String) -> bool {
            self.name.contains(filter.as_str())
        }
    }

    fn input(name: &str, price: f64) -> WidgetInput {
        WidgetInput {
            name: name.to_string(),
            price,
        }
    }

    fn widget(id: u32, name: &str) -> Widget {
        Widget {
            id: WidgetId(id),
            name: name.to_string(),
            price: 1.0,
        }
    }

    #[test]
    fn test_widget_gadget_scenario() {
        let mut store = ResourceStore::<Widget>::new();

        let widget = store.create(input("Widget", 9.99)).unwrap().clone();
        assert_eq!(widget.id, WidgetId(1));
        assert_eq!(widget.name, "Widget");
        assert_eq!(widget.price, 9.99);

        let gadget = store.create(input("Gadget", 19.99)).unwrap().clone();
        assert_eq!(gadget.id, WidgetId(2));

        store.delete(WidgetId(1)).unwrap();

        assert_eq!(store.list(), &[gadget]);
        assert_eq!(
            store.get(WidgetId(1)),
            Err(StoreError::NotFound("1".to_string()))
        );
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let mut store = ResourceStore::<Widget>::new();
        match store.create(input("", 9.99)) {
            Err(StoreError::Validation(errors)) => {
                assert!(errors.has_field("name"));
                assert!(!errors.has_field("price"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let mut store = ResourceStore::<Widget>::new();
        match store.create(input("X", -1.0)) {
            Err(StoreError::Validation(errors)) => assert!(errors.has_field("price")),
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_create_does_not_consume_an_id() {
        let mut store = ResourceStore::<Widget>::new();
        assert!(store.create(input("", 1.0)).is_err());
        let created = store.create(input("A", 1.0)).unwrap();
        assert_eq!(created.id, WidgetId(1));
    }

    #[test]
    fn test_ids_are_never_reused_after_delete() {
        let mut store = ResourceStore::<Widget>::new();
        let mut seen = Vec::new();
        for round in 0..5 {
            let a = store.create(input("a", 1.0)).unwrap().id;
            let b = store.create(input("b", 1.0)).unwrap().id;
            seen.push(a);
            seen.push(b);
            // delete the newest so that count + 1 would collide
            store.delete(b).unwrap();
            assert_eq!(store.len(), round + 1);
        }
        let ids: Vec<u32> = seen.iter().map(|id| id.0).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_get_returns_created_record() {
        let mut store = ResourceStore::<Widget>::new();
        let created = store.create(input("Widget", 9.99)).unwrap().clone();
        assert_eq!(store.get(created.id).unwrap(), &created);
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let mut store = ResourceStore::<Widget>::new();
        let id = store.create(input("Widget", 9.99)).unwrap().id;

        store.update(id, input("Sprocket", 4.5)).unwrap();
        // applying the same change again is a no-op
        store.update(id, input("Sprocket", 4.5)).unwrap();

        let updated = store.get(id).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Sprocket");
        assert_eq!(updated.price, 4.5);
    }

    #[test]
    fn test_update_unknown_id_is_not_found_even_with_invalid_payload() {
        let mut store = ResourceStore::<Widget>::new();
        assert_eq!(
            store.update(WidgetId(7), input("", -1.0)),
            Err(StoreError::NotFound("7".to_string()))
        );
    }

    #[test]
    fn test_invalid_update_leaves_record_untouched() {
        let mut store = ResourceStore::<Widget>::new();
        let id = store.create(input("Widget", 9.99)).unwrap().id;

        assert!(matches!(
            store.update(id, input("", 9.99)),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(store.get(id).unwrap().name, "Widget");
    }

    #[test]
    fn test_delete_preserves_order_and_second_delete_is_not_found() {
        let mut store = ResourceStore::<Widget>::new();
        for name in ["a", "b", "c", "d"] {
            store.create(input(name, 1.0)).unwrap();
        }

        let removed = store.delete(WidgetId(2)).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(
            store.delete(WidgetId(2)),
            Err(StoreError::NotFound("2".to_string()))
        );

        let names: Vec<&str> = store.list().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["a", "c", "d"]);
    }

    #[test]
    fn test_with_records_resumes_after_max_id() {
        let store =
            ResourceStore::with_records(vec![widget(3, "x"), widget(8, "y"), widget(5, "z")])
                .unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.next_id(), Some(WidgetId(9)));
        // seeded order is kept as-is
        let ids: Vec<u32> = store.list().iter().map(|w| w.id.0).collect();
        assert_eq!(ids, [3, 8, 5]);
    }

    #[test]
    fn test_seed_at_max_id_exhausts_the_counter() {
        let mut store = ResourceStore::with_records(vec![widget(u32::MAX, "last")]).unwrap();
        assert_eq!(store.next_id(), None);

        assert_eq!(
            store.create(input("overflow", 1.0)).err(),
            Some(StoreError::IdsExhausted)
        );
        // still rejected, and nothing was added
        assert_eq!(
            store.create(input("again", 1.0)).err(),
            Some(StoreError::IdsExhausted)
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(WidgetId(u32::MAX)).unwrap().name, "last");
    }

    #[test]
    fn test_last_id_is_handed_out_once() {
        let mut store = ResourceStore::with_records(vec![widget(u32::MAX - 1, "x")]).unwrap();

        let last = store.create(input("last", 1.0)).unwrap().id;
        assert_eq!(last, WidgetId(u32::MAX));
        assert_eq!(
            store.create(input("one more", 1.0)).err(),
            Some(StoreError::IdsExhausted)
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_with_records_rejects_duplicates() {
        let result = ResourceStore::with_records(vec![widget(1, "x"), widget(1, "y")]);
        assert_eq!(result.err(), Some(StoreError::DuplicateId("1".to_string())));
    }

    #[test]
    fn test_search_keeps_insertion_order() {
        let mut store = ResourceStore::<Widget>::new();
        for name in ["red box", "blue box", "red pen"] {
            store.create(input(name, 1.0)).unwrap();
        }
        let hits: Vec<&str> = store
            .search(&"red".to_string())
            .into_iter()
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(hits, ["red box", "red pen"]);
    }

    #[test]
    fn test_sample() {
        let mut store = ResourceStore::<Widget>::new();
        assert!(store.sample().is_none());

        store.create(input("only", 1.0)).unwrap();
        assert_eq!(store.sample().unwrap().name, "only");
    }

    #[test]
    fn test_list_length_tracks_creates_minus_deletes() {
        let mut store = ResourceStore::<Widget>::new();
        let mut creates = 0;
        let mut deletes = 0;
        for i in 0..10u32 {
            if store.create(input("w", 1.0)).is_ok() {
                creates += 1;
            }
            if i % 3 == 0 && store.delete(WidgetId(i + 1)).is_ok() {
                deletes += 1;
            }
            // deleting something absent never counts
            if store.delete(WidgetId(1000)).is_ok() {
                deletes += 1;
            }
            assert_eq!(store.list().len(), creates - deletes);
        }
    }
}
