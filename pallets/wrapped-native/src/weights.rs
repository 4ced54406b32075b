//! Hand-estimated placeholder weights. Regenerate with `frame-omni-bencher v1 benchmark pallet`
//! against the `runtime-benchmarks` build before deploying.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn wrap() -> Weight;
	fn unwrap() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn wrap() -> Weight {
		Weight::from_parts(58_000_000, 7100)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	fn unwrap() -> Weight {
		Weight::from_parts(61_000_000, 7100)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(4))
	}
}

impl WeightInfo for () {
	fn wrap() -> Weight {
		Weight::from_parts(58_000_000, 7100)
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(4))
	}
	fn unwrap() -> Weight {
		Weight::from_parts(61_000_000, 7100)
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(4))
	}
}
