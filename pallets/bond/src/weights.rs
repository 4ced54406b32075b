//! Hand-estimated placeholder weights. Regenerate with `frame-omni-bencher v1 benchmark pallet`
//! against the `runtime-benchmarks` build before deploying.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn create_token(s: u32, ) -> Weight;
	fn mint() -> Weight;
	fn burn() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// The range of component `s` is `[1, 1000]`.
	fn create_token(s: u32, ) -> Weight {
		Weight::from_parts(52_000_000, 4200)
			.saturating_add(Weight::from_parts(28_000, 0).saturating_mul(s.into()))
			.saturating_add(Weight::from_parts(0, 32).saturating_mul(s.into()))
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(6))
	}
	fn mint() -> Weight {
		Weight::from_parts(118_000_000, 33_000)
			.saturating_add(T::DbWeight::get().reads(10))
			.saturating_add(T::DbWeight::get().writes(9))
	}
	fn burn() -> Weight {
		Weight::from_parts(121_000_000, 33_000)
			.saturating_add(T::DbWeight::get().reads(10))
			.saturating_add(T::DbWeight::get().writes(9))
	}
}

impl WeightInfo for () {
	/// The range of component `s` is `[1, 1000]`.
	fn create_token(s: u32, ) -> Weight {
		Weight::from_parts(52_000_000, 4200)
			.saturating_add(Weight::from_parts(28_000, 0).saturating_mul(s.into()))
			.saturating_add(Weight::from_parts(0, 32).saturating_mul(s.into()))
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(6))
	}
	fn mint() -> Weight {
		Weight::from_parts(118_000_000, 33_000)
			.saturating_add(RocksDbWeight::get().reads(10))
			.saturating_add(RocksDbWeight::get().writes(9))
	}
	fn burn() -> Weight {
		Weight::from_parts(121_000_000, 33_000)
			.saturating_add(RocksDbWeight::get().reads(10))
			.saturating_add(RocksDbWeight::get().writes(9))
	}
}
