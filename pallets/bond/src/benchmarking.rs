#![cfg(feature = "runtime-benchmarks")]

use super::*;
use alloc::vec::Vec;
use frame::deps::frame_benchmarking::{account, v2::*};
use frame::deps::frame_support::traits::{Get, fungible::Mutate as NativeMutate};
use frame::deps::frame_system::RawOrigin;
use frame::deps::sp_runtime::Permill;
use primitives::{AssetKind, Balance};

const SEED: u32 = 0;

fn schedule<T: Config>(steps: u32) -> BondParams<T::MaxSteps> {
  let unit = T::TokenUnit::get();
  let ranges: Vec<Balance> = (1..=steps as Balance).map(|i| i * 1_000 * unit).collect();
  let prices: Vec<Balance> = (1..=steps as Balance).map(|i| i * unit / 100).collect();
  BondParams {
    mint_royalty: Permill::from_percent(1),
    burn_royalty: Permill::from_percent(1),
    reserve_asset: AssetKind::Native,
    max_supply: ranges.last().copied().unwrap_or_default(),
    step_ranges: ranges.try_into().expect("schedule fits MaxSteps"),
    step_prices: prices.try_into().expect("schedule fits MaxSteps"),
  }
}

/// Name and symbol of the longest accepted length
fn token_metadata<T: Config>() -> TokenParams<T::StringLimit> {
  let text = alloc::vec![b'x'; T::StringLimit::get() as usize];
  TokenParams {
    name: text.clone().try_into().expect("fits StringLimit"),
    symbol: text.try_into().expect("fits StringLimit"),
  }
}

fn funded_caller<T: Config>() -> T::AccountId {
  let caller: T::AccountId = account("caller", 0, SEED);
  let _ = T::Currency::mint_into(&caller, Balance::MAX / 4);
  caller
}

/// Funded caller and a native-reserve curve spanning `T::MaxSteps` steps.
fn setup_curve<T: Config>() -> (T::AccountId, AssetKind) {
  let caller = funded_caller::<T>();
  let token = Pallet::<T>::do_create_token(
    &caller,
    token_metadata::<T>(),
    schedule::<T>(T::MaxSteps::get()),
  )
  .expect("benchmark curve is valid");
  (caller, token)
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn create_token(s: Linear<1, { T::MaxSteps::get() }>) {
    let caller = funded_caller::<T>();
    let token_params = token_metadata::<T>();
    let bond_params = schedule::<T>(s);

    #[extrinsic_call]
    create_token(RawOrigin::Signed(caller), token_params, bond_params);

    assert_eq!(TokenCount::<T>::get(), 1);
  }

  #[benchmark]
  fn mint() {
    let (caller, token) = setup_curve::<T>();
    // Crosses every step boundary
    let amount = Pallet::<T>::token_bond(token)
      .map(|bond| bond.max_supply)
      .unwrap_or_default();

    #[extrinsic_call]
    mint(
      RawOrigin::Signed(caller.clone()),
      token,
      amount,
      Balance::MAX,
      caller.clone(),
    );

    assert_eq!(
      Pallet::<T>::token_bond(token).map(|bond| bond.current_supply),
      Some(amount)
    );
  }

  #[benchmark]
  fn burn() {
    let (caller, token) = setup_curve::<T>();
    let amount = Pallet::<T>::token_bond(token)
      .map(|bond| bond.max_supply)
      .unwrap_or_default();
    Pallet::<T>::do_mint(&caller, token, amount, Balance::MAX, &caller)
      .expect("benchmark mint succeeds");

    #[extrinsic_call]
    burn(RawOrigin::Signed(caller.clone()), token, amount, 0, caller.clone());

    assert_eq!(
      Pallet::<T>::token_bond(token).map(|bond| bond.current_supply),
      Some(0)
    );
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
