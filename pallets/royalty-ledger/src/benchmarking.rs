#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame::deps::frame_benchmarking::{account, v2::*};
use frame::deps::frame_support::traits::fungible::Mutate as NativeMutate;
use frame::deps::frame_system::RawOrigin;
use frame::deps::sp_runtime::Permill;
use primitives::{AssetKind, RoyaltyAccrual};

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn claim_royalties() {
    let beneficiary: T::AccountId = account("beneficiary", 0, 0);
    let gross: u128 = 1_000_000_000_000_000_000_000;
    let royalty = Pallet::<T>::accrue(
      &beneficiary,
      AssetKind::Native,
      gross,
      Permill::from_percent(1),
    )
    .expect("accrual fits");
    let _ = T::Currency::mint_into(&Pallet::<T>::account_id(), royalty * 2);

    #[extrinsic_call]
    claim_royalties(RawOrigin::Signed(beneficiary.clone()), AssetKind::Native);

    assert_eq!(
      Pallet::<T>::royalty_info(&beneficiary, AssetKind::Native).claimed,
      royalty
    );
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
