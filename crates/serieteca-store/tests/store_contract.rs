// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serieteca_model::{Serie, SeriePatch};
use serieteca_store::{InMemorySerieStore, SerieStore, StoreError};

fn named(nombre: &str) -> Serie {
    Serie::new(Some(nombre.to_string()), None)
}

fn fecha(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::test]
async fn create_on_empty_store_assigns_id_one() {
    let store = InMemorySerieStore::new();
    let stored = store.create(named("Dark")).await;
    assert_eq!(stored.id, Some(1));
    assert_eq!(stored.nombre.as_deref(), Some("Dark"));
}

#[tokio::test]
async fn create_assigns_max_existing_id_plus_one() {
    let store = InMemorySerieStore::new();
    for expected in 1..=4_u64 {
        let stored = store.create(named("x")).await;
        assert_eq!(stored.id, Some(expected));
    }
    // Removing a record below the max must not affect the next id.
    store.delete(2).await.expect("delete id 2");
    assert_eq!(store.create(named("y")).await.id, Some(5));
}

#[tokio::test]
async fn create_discards_client_supplied_id() {
    let store = InMemorySerieStore::new();
    let candidate = Serie {
        id: Some(42),
        ..named("Dark")
    };
    let stored = store.create(candidate).await;
    assert_eq!(stored.id, Some(1));
}

#[tokio::test]
async fn find_by_id_returns_the_matching_record_or_none() {
    let store = InMemorySerieStore::new();
    store.create(named("Dark")).await;
    let second = store.create(named("Lost")).await;

    let found = store.find_by_id(2).await.expect("id 2 present");
    assert_eq!(found, second);
    assert!(store.find_by_id(3).await.is_none());
}

#[tokio::test]
async fn update_overwrites_exactly_the_non_null_fields() {
    let store = InMemorySerieStore::new();
    store
        .create(Serie::new(
            Some("Lost".to_string()),
            Some(fecha(2004, 9, 22)),
        ))
        .await;

    let unchanged = store
        .update(1, SeriePatch::default())
        .await
        .expect("all-null patch");
    assert_eq!(unchanged.nombre.as_deref(), Some("Lost"));
    assert_eq!(unchanged.fecha_estreno, Some(fecha(2004, 9, 22)));

    let renamed = store
        .update(
            1,
            SeriePatch {
                nombre: Some("Perdidos".to_string()),
                fecha_estreno: None,
            },
        )
        .await
        .expect("rename patch");
    assert_eq!(renamed.nombre.as_deref(), Some("Perdidos"));
    assert_eq!(renamed.fecha_estreno, Some(fecha(2004, 9, 22)));

    let rescheduled = store
        .update(
            1,
            SeriePatch {
                nombre: None,
                fecha_estreno: Some(fecha(2005, 1, 5)),
            },
        )
        .await
        .expect("date patch");
    assert_eq!(rescheduled.nombre.as_deref(), Some("Perdidos"));
    assert_eq!(rescheduled.fecha_estreno, Some(fecha(2005, 1, 5)));
}

#[tokio::test]
async fn update_on_missing_id_is_not_found() {
    let store = InMemorySerieStore::new();
    let err = store
        .update(
            99,
            SeriePatch {
                nombre: Some("X".to_string()),
                fecha_estreno: None,
            },
        )
        .await
        .expect_err("empty store");
    assert_eq!(err, StoreError::NotFound { id: 99 });
}

#[tokio::test]
async fn delete_removes_exactly_one_record_and_repeats_as_not_found() {
    let store = InMemorySerieStore::new();
    store.create(named("Dark")).await;
    store.create(named("Lost")).await;

    store.delete(1).await.expect("first delete");
    assert_eq!(store.list().await.len(), 1);
    assert!(store.find_by_id(1).await.is_none());

    let err = store.delete(1).await.expect_err("second delete");
    assert_eq!(err, StoreError::NotFound { id: 1 });
}

#[tokio::test]
async fn deleting_the_highest_id_makes_it_reusable() {
    let store = InMemorySerieStore::new();
    assert_eq!(store.create(named("A")).await.id, Some(1));
    assert_eq!(store.create(named("B")).await.id, Some(2));
    store.delete(1).await.expect("delete A");
    // Ids restart from current contents, so C does not get 3.
    assert_eq!(store.create(named("C")).await.id, Some(1));

    // Insertion order is preserved; the listing is not sorted by id.
    let listed = store.list().await;
    let ids: Vec<_> = listed.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![Some(2), Some(1)]);
    assert_eq!(listed[0].nombre.as_deref(), Some("B"));
    assert_eq!(listed[1].nombre.as_deref(), Some("C"));
}

#[tokio::test]
async fn list_returns_a_snapshot_without_side_effects() {
    let store = InMemorySerieStore::new();
    store.create(named("Dark")).await;
    let before = store.list().await;
    let after = store.list().await;
    assert_eq!(before, after);
    assert_eq!(before.len(), 1);
}
