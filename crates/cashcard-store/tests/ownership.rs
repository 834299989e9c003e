//! Owner-isolation properties of the in-memory store.
//!
//! These exercise the store with arbitrary record sets and page windows and
//! assert that no operation ever crosses an ownership boundary.

use cashcard_core::{PageRequest, Sort};
use cashcard_store::{CardStore, MemoryStore};
use proptest::prelude::*;

const OWNERS: [&str; 3] = ["sarah1", "kumar2", "esuez5"];

fn owner_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(OWNERS.as_slice())
}

fn amount_strategy() -> impl Strategy<Value = f64> {
    // Signed, zero allowed; the store enforces no range constraint.
    -10_000.0..10_000.0f64
}

fn sort_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(["id,asc", "id,desc", "amount,asc", "amount,desc"].as_slice())
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("tokio runtime")
}

proptest! {
    #[test]
    fn listing_never_crosses_owners(
        records in prop::collection::vec((owner_strategy(), amount_strategy()), 0..40),
        page in 0usize..5,
        size in 1usize..10,
        sort in sort_strategy(),
    ) {
        runtime().block_on(async {
            let store = MemoryStore::new();
            for (owner, amount) in &records {
                store.save_new(*amount, owner).await.unwrap();
            }

            let request = PageRequest { page, size, sort: Sort::parse(sort).unwrap() };
            for caller in OWNERS {
                let listed = store.find_by_owner(caller, &request).await.unwrap();
                prop_assert!(listed.iter().all(|card| card.owner == caller));
                prop_assert!(listed.len() <= size);
            }
            Ok(())
        })?;
    }

    #[test]
    fn foreign_ids_are_indistinguishable_from_missing(
        records in prop::collection::vec((owner_strategy(), amount_strategy()), 1..20),
    ) {
        runtime().block_on(async {
            let store = MemoryStore::new();
            let mut created = Vec::new();
            for (owner, amount) in &records {
                created.push(store.save_new(*amount, owner).await.unwrap());
            }

            for card in &created {
                for caller in OWNERS {
                    let found = store.find_by_id_and_owner(card.id, caller).await.unwrap();
                    let exists = store.exists_by_id_and_owner(card.id, caller).await.unwrap();
                    if caller == card.owner {
                        prop_assert_eq!(found.as_ref(), Some(card));
                        prop_assert!(exists);
                    } else {
                        prop_assert_eq!(found, None);
                        prop_assert!(!exists);
                    }
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn foreign_mutations_leave_store_unchanged(
        amount in amount_strategy(),
        new_amount in amount_strategy(),
    ) {
        runtime().block_on(async {
            let store = MemoryStore::new();
            let card = store.save_new(amount, "sarah1").await.unwrap();

            prop_assert!(!store.update_amount(card.id, "kumar2", new_amount).await.unwrap());
            prop_assert!(!store.delete_by_id_and_owner(card.id, "kumar2").await.unwrap());

            let unchanged = store
                .find_by_id_and_owner(card.id, "sarah1")
                .await
                .unwrap()
                .expect("owned card still present");
            prop_assert_eq!(unchanged, card);
            Ok(())
        })?;
    }
}
