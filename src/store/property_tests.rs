//! Property-Based Tests for the Store Module
//!
//! Uses proptest against the in-memory store to check the CRUD invariants.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::models::FuelInput;
use crate::store::{FuelStore, MemoryStore};

// == Strategies ==
/// Generates fuel quantities as whole or half liters
fn quantity_strategy() -> impl Strategy<Value = f64> {
    (0u32..20_000).prop_map(|n| f64::from(n) / 2.0)
}

fn input_strategy() -> impl Strategy<Value = FuelInput> {
    (quantity_strategy(), quantity_strategy(), quantity_strategy())
        .prop_map(|(liters, premium, pertalite)| FuelInput::new(liters, premium, pertalite))
}

/// Generates a sequence of store operations
#[derive(Debug, Clone)]
enum StoreOp {
    Insert(FuelInput),
    Update { slot: usize, input: FuelInput },
    Delete { slot: usize },
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        input_strategy().prop_map(StoreOp::Insert),
        (0usize..16, input_strategy()).prop_map(|(slot, input)| StoreOp::Update { slot, input }),
        (0usize..16).prop_map(|slot| StoreOp::Delete { slot }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Round-trip: every inserted record reads back with the same values.
    #[test]
    fn prop_insert_get_round_trip(inputs in prop::collection::vec(input_strategy(), 1..20)) {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            for input in inputs {
                let id = store.insert(input).await.unwrap();
                let record = store.get(id).await.unwrap().unwrap();
                prop_assert_eq!(record.id, id);
                prop_assert_eq!(record.jumlah_liter, input.jumlah_liter);
                prop_assert_eq!(record.premium, input.premium);
                prop_assert_eq!(record.pertalite, input.pertalite);
            }
            Ok(())
        })?;
    }

    // Listing after N inserts returns exactly N records with the inserted values.
    #[test]
    fn prop_list_returns_all_inserted(inputs in prop::collection::vec(input_strategy(), 0..30)) {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            for input in &inputs {
                store.insert(*input).await.unwrap();
            }

            let listed = store.list().await.unwrap();
            prop_assert_eq!(listed.len(), inputs.len());
            for (record, input) in listed.iter().zip(&inputs) {
                prop_assert_eq!(record.jumlah_liter, input.jumlah_liter);
                prop_assert_eq!(record.premium, input.premium);
                prop_assert_eq!(record.pertalite, input.pertalite);
            }
            Ok(())
        })?;
    }

    // For any sequence of operations the store agrees with a plain map model,
    // and rows affected is 1 for live ids and 0 otherwise.
    #[test]
    fn prop_operations_match_model(ops in prop::collection::vec(store_op_strategy(), 1..60)) {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            let mut model: HashMap<i64, FuelInput> = HashMap::new();
            let mut issued: Vec<i64> = Vec::new();

            for op in ops {
                match op {
                    StoreOp::Insert(input) => {
                        let id = store.insert(input).await.unwrap();
                        prop_assert!(!issued.contains(&id), "id {} reused", id);
                        issued.push(id);
                        model.insert(id, input);
                    }
                    StoreOp::Update { slot, input } => {
                        let id = issued.get(slot).copied().unwrap_or(10_000 + slot as i64);
                        let rows = store.update(id, input).await.unwrap();
                        let expected = u64::from(model.contains_key(&id));
                        prop_assert_eq!(rows, expected);
                        if let Some(entry) = model.get_mut(&id) {
                            *entry = input;
                        }
                    }
                    StoreOp::Delete { slot } => {
                        let id = issued.get(slot).copied().unwrap_or(10_000 + slot as i64);
                        let rows = store.delete(id).await.unwrap();
                        prop_assert_eq!(rows, u64::from(model.remove(&id).is_some()));
                    }
                }
            }

            prop_assert_eq!(store.len().await, model.len());
            for (id, input) in &model {
                let record = store.get(*id).await.unwrap().unwrap();
                prop_assert_eq!(record.jumlah_liter, input.jumlah_liter);
                prop_assert_eq!(record.premium, input.premium);
                prop_assert_eq!(record.pertalite, input.pertalite);
            }
            Ok(())
        })?;
    }
}
