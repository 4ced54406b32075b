#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::BenchmarkHelper as _;
use frame::deps::frame_benchmarking::{account, v2::*};
use frame::deps::frame_support::traits::fungible::Mutate as NativeMutate;
use frame::deps::frame_support::traits::fungibles::approvals::Mutate as ApprovalsMutate;
use frame::deps::frame_system::RawOrigin;
use primitives::{AssetInspector, Balance};

const UNIT: Balance = primitives::params::TOKEN_UNIT;

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn mint_with_native() {
    let caller: T::AccountId = account("caller", 0, 0);
    let _ = T::Currency::mint_into(&caller, 1_000 * UNIT);
    let token = T::BenchmarkHelper::create_wrapped_native_curve(&caller)
      .expect("benchmark curve is created");

    #[extrinsic_call]
    mint_with_native(
      RawOrigin::Signed(caller.clone()),
      token,
      UNIT,
      100 * UNIT,
      caller.clone(),
    );
  }

  #[benchmark]
  fn burn_to_native() {
    let caller: T::AccountId = account("caller", 0, 0);
    let _ = T::Currency::mint_into(&caller, 1_000 * UNIT);
    let token = T::BenchmarkHelper::create_wrapped_native_curve(&caller)
      .expect("benchmark curve is created");
    let token_id = token.local_id().expect("curve tokens are local assets");
    Pallet::<T>::do_mint_with_native(&caller, token, UNIT, 100 * UNIT, &caller)
      .expect("benchmark mint succeeds");
    T::Assets::approve(token_id, &caller, &Pallet::<T>::account_id(), UNIT)
      .expect("approval succeeds");

    #[extrinsic_call]
    burn_to_native(RawOrigin::Signed(caller.clone()), token, UNIT, 0, caller.clone());
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
