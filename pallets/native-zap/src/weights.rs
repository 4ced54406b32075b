//! Hand-estimated placeholder weights. Regenerate with `frame-omni-bencher v1 benchmark pallet`
//! against the `runtime-benchmarks` build before deploying.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn mint_with_native() -> Weight;
	fn burn_to_native() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn mint_with_native() -> Weight {
		Weight::from_parts(236_000_000, 40_000)
			.saturating_add(T::DbWeight::get().reads(16))
			.saturating_add(T::DbWeight::get().writes(14))
	}
	fn burn_to_native() -> Weight {
		Weight::from_parts(241_000_000, 40_000)
			.saturating_add(T::DbWeight::get().reads(17))
			.saturating_add(T::DbWeight::get().writes(15))
	}
}

impl WeightInfo for () {
	fn mint_with_native() -> Weight {
		Weight::from_parts(236_000_000, 40_000)
			.saturating_add(RocksDbWeight::get().reads(16))
			.saturating_add(RocksDbWeight::get().writes(14))
	}
	fn burn_to_native() -> Weight {
		Weight::from_parts(241_000_000, 40_000)
			.saturating_add(RocksDbWeight::get().reads(17))
			.saturating_add(RocksDbWeight::get().writes(15))
	}
}
