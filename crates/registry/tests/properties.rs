#![allow(unused_crate_dependencies)]
//! Property tests over arbitrary well-formed definitions.

mod common;

use std::collections::BTreeSet;

use common::standard;
use openum_registry::{EnumRegistry, ErrorKind};
use proptest::prelude::*;

/// Unique identifier names paired with unique non-negative values, shuffled.
fn arb_items() -> impl Strategy<Value = Vec<(i64, String)>> {
	prop::collection::btree_set("[A-Za-z_][A-Za-z0-9_]{0,8}", 1..16)
		.prop_flat_map(|names| {
			let n = names.len();
			(Just(names), prop::collection::btree_set(0i64..10_000, n..=n))
		})
		.prop_map(|(names, values): (BTreeSet<String>, BTreeSet<i64>)| {
			values.into_iter().zip(names).collect::<Vec<_>>()
		})
		.prop_shuffle()
}

proptest! {
	/// `find` after `create` yields exactly the supplied items, ascending by value.
	#[test]
	fn prop_items_sorted_and_complete(items in arb_items()) {
		let reg = EnumRegistry::new(standard());
		reg.create("Generated", items.iter().map(|(v, n)| (*v, n.as_str()))).unwrap();

		let e = reg.find("Generated").unwrap();
		let got: Vec<(i64, String)> = e
			.items()
			.iter()
			.map(|i| (i.value() as i64, i.name().to_string()))
			.collect();

		let mut expected = items.clone();
		expected.sort();
		prop_assert_eq!(got, expected);
	}

	/// Every item resolves back to itself by value.
	#[test]
	fn prop_from_value_roundtrip(items in arb_items()) {
		let reg = EnumRegistry::new(standard());
		reg.create("Generated", items.iter().map(|(v, n)| (*v, n.as_str()))).unwrap();

		for item in reg.get("Generated").unwrap().items() {
			let found = reg.from_value("Generated", item.value() as i64).unwrap();
			prop_assert_eq!(found.as_ref().map(|i| i.name()), Some(item.name()));
		}
	}

	/// `from_value` finds an item iff some item carries that value.
	#[test]
	fn prop_from_value_matches_membership(items in arb_items(), query in 0i64..10_000) {
		let reg = EnumRegistry::new(standard());
		reg.create("Generated", items.iter().map(|(v, n)| (*v, n.as_str()))).unwrap();

		let expected = items.iter().find(|(v, _)| *v == query).map(|(_, n)| n.clone());
		let found = reg.from_value("Generated", query).unwrap().map(|i| i.name().to_string());
		prop_assert_eq!(found, expected);
	}

	/// Names and values stay pairwise unique after construction.
	#[test]
	fn prop_names_and_values_unique(items in arb_items()) {
		let reg = EnumRegistry::new(standard());
		reg.create("Generated", items.iter().map(|(v, n)| (*v, n.as_str()))).unwrap();

		let e = reg.get("Generated").unwrap();
		let names: BTreeSet<_> = e.names().collect();
		let values: BTreeSet<_> = e.iter().map(|i| i.value()).collect();
		prop_assert_eq!(names.len(), e.len());
		prop_assert_eq!(values.len(), e.len());
	}

	/// Unknown, non-reserved names never fail in `find`.
	#[test]
	fn prop_find_absent_is_none(name in "[A-Z][a-z]{3,10}Missing") {
		let reg = EnumRegistry::new(standard());
		prop_assert!(reg.find(&name).is_none());
		prop_assert_eq!(reg.get(&name).unwrap_err().kind(), ErrorKind::NoSuchMember);
	}

	/// Duplicating any key makes the whole definition fail and commit nothing.
	#[test]
	fn prop_duplicate_key_commits_nothing(items in arb_items(), pick in any::<prop::sample::Index>()) {
		let mut items = items;
		let (value, _) = items[pick.index(items.len())].clone();
		items.push((value, "DuplicateKeyItem_".to_string()));

		let reg = EnumRegistry::new(standard());
		let err = reg
			.create("Generated", items.iter().map(|(v, n)| (*v, n.as_str())))
			.unwrap_err();
		prop_assert_eq!(err.kind(), ErrorKind::DuplicateDefinition);
		prop_assert!(reg.find("Generated").is_none());
	}
}
