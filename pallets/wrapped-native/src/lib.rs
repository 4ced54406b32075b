//! Wrapped Native Pallet
//!
//! Represents the native currency as a `pallet-assets` token so it can serve as a bonding curve
//! reserve. Wrapping locks native currency in the pallet account and mints the same amount of the
//! wrapped asset; unwrapping burns it and releases the native currency again.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::wrapped-native";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use frame::deps::{
    frame_support::traits::{
      fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
      fungibles::{Create, Inspect, Mutate},
      tokens::{Fortitude, Precision, Preservation},
    },
    sp_runtime::{
      DispatchError,
      traits::{AccountIdConversion, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{AssetKind, Balance, NativeWrapper};

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Ledger of the wrapped asset
    type Assets: Inspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + Mutate<Self::AccountId, AssetId = u32, Balance = Balance>
      + Create<Self::AccountId>;

    /// Native currency being wrapped
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// Pallet ID deriving the account backing the wrapped supply
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// pallet-assets id of the wrapped asset
    #[pallet::constant]
    type WrappedAssetId: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Native currency wrapped
    Wrapped { who: T::AccountId, amount: Balance },
    /// Wrapped units returned for native currency
    Unwrapped { who: T::AccountId, amount: Balance },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Zero amount not allowed
    ZeroAmount,
    /// Not enough native currency or wrapped units
    InsufficientBalance,
    /// The wrapped asset has not been created
    WrappedAssetMissing,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Wrap `amount` of the caller's native currency, keeping the caller's existential deposit.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::wrap())]
    pub fn wrap(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_wrap(&who, amount, Preservation::Preserve)?;
      Ok(())
    }

    /// Unwrap `amount` of the caller's wrapped units.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::unwrap())]
    pub fn unwrap(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_unwrap(&who, amount)?;
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Account holding the native currency behind the wrapped supply
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Wrapped units in circulation
    pub fn wrapped_supply() -> Balance {
      T::Assets::total_issuance(T::WrappedAssetId::get())
    }

    pub(crate) fn do_wrap(
      who: &T::AccountId,
      amount: Balance,
      preservation: Preservation,
    ) -> Result<Balance, DispatchError> {
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      let asset_id = T::WrappedAssetId::get();
      ensure!(T::Assets::asset_exists(asset_id), Error::<T>::WrappedAssetMissing);
      ensure!(
        T::Currency::reducible_balance(who, preservation, Fortitude::Polite) >= amount,
        Error::<T>::InsufficientBalance
      );

      T::Currency::transfer(who, &Self::account_id(), amount, preservation)?;
      T::Assets::mint_into(asset_id, who, amount)?;

      Self::deposit_event(Event::Wrapped {
        who: who.clone(),
        amount,
      });
      Ok(amount)
    }

    pub(crate) fn do_unwrap(who: &T::AccountId, amount: Balance) -> Result<Balance, DispatchError> {
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      let asset_id = T::WrappedAssetId::get();
      ensure!(
        T::Assets::balance(asset_id, who) >= amount,
        Error::<T>::InsufficientBalance
      );

      T::Assets::burn_from(
        asset_id,
        who,
        amount,
        Preservation::Expendable,
        Precision::Exact,
        Fortitude::Polite,
      )?;
      T::Currency::transfer(&Self::account_id(), who, amount, Preservation::Expendable)?;

      Self::deposit_event(Event::Unwrapped {
        who: who.clone(),
        amount,
      });
      Ok(amount)
    }
  }

  impl<T: Config> NativeWrapper<T::AccountId, Balance> for Pallet<T> {
    fn wrapped_asset() -> AssetKind {
      AssetKind::Local(T::WrappedAssetId::get())
    }

    fn wrap(who: &T::AccountId, amount: Balance) -> Result<Balance, DispatchError> {
      Self::do_wrap(who, amount, Preservation::Expendable)
    }

    fn unwrap(who: &T::AccountId, amount: Balance) -> Result<Balance, DispatchError> {
      Self::do_unwrap(who, amount)
    }
  }

  /// Creates the wrapped asset, owned by the pallet account
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      let account = Pallet::<T>::account_id();
      frame_system::Pallet::<T>::inc_providers(&account);

      let asset_id = T::WrappedAssetId::get();
      if T::Assets::asset_exists(asset_id) {
        return;
      }
      if let Err(error) = T::Assets::create(
        asset_id,
        account,
        true,
        primitives::params::WRAPPED_NATIVE_MIN_BALANCE,
      ) {
        log::error!(
          target: LOG_TARGET,
          "failed to create wrapped native asset {asset_id}: {error:?}",
        );
      }
    }
  }
}
