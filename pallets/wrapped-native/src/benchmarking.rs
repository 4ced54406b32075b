#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame::deps::frame_benchmarking::{account, v2::*};
use frame::deps::frame_support::traits::{fungible::Mutate as NativeMutate, tokens::Preservation};
use frame::deps::frame_system::RawOrigin;

const AMOUNT: u128 = 1_000_000_000_000_000_000;

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn wrap() {
    let caller: T::AccountId = account("caller", 0, 0);
    let _ = T::Currency::mint_into(&caller, AMOUNT * 2);

    #[extrinsic_call]
    wrap(RawOrigin::Signed(caller.clone()), AMOUNT);

    assert_eq!(Pallet::<T>::wrapped_supply(), AMOUNT);
  }

  #[benchmark]
  fn unwrap() {
    let caller: T::AccountId = account("caller", 0, 0);
    let _ = T::Currency::mint_into(&caller, AMOUNT * 2);
    Pallet::<T>::do_wrap(&caller, AMOUNT, Preservation::Preserve).expect("caller is funded");

    #[extrinsic_call]
    unwrap(RawOrigin::Signed(caller.clone()), AMOUNT);

    assert_eq!(Pallet::<T>::wrapped_supply(), 0);
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
