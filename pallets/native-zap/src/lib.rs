//! Native Zap Pallet
//!
//! Lets users trade curve tokens whose reserve is the wrapped native asset while only ever
//! touching the native currency. Each call is one storage layer composing the wrapper and the
//! bond ledger:
//!
//! - `mint_with_native`: take native, wrap it, mint on the curve, unwrap and refund the excess
//! - `burn_to_native`: pull approved curve tokens, burn them on the curve, unwrap the payout and
//!   forward it as native currency
//!
//! The zap account only holds funds for the duration of a call.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::native-zap";

/// Helper for benchmarking, sets up a curve backed by the wrapped native asset
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  fn create_wrapped_native_curve(
    creator: &AccountId,
  ) -> Result<primitives::AssetKind, frame::deps::sp_runtime::DispatchError>;
}

#[cfg(feature = "runtime-benchmarks")]
impl<AccountId> BenchmarkHelper<AccountId> for () {
  fn create_wrapped_native_curve(
    _creator: &AccountId,
  ) -> Result<primitives::AssetKind, frame::deps::sp_runtime::DispatchError> {
    Err(frame::deps::sp_runtime::DispatchError::Other(
      "no curve available",
    ))
  }
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use frame::deps::{
    frame_support::{
      storage::with_storage_layer,
      traits::{
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        fungibles::{
          Inspect as FungiblesInspect, Mutate as FungiblesMutate,
          approvals::{Inspect as ApprovalsInspect, Mutate as ApprovalsMutate},
        },
        tokens::{Fortitude, Preservation},
      },
    },
    sp_runtime::{
      DispatchError,
      traits::{AccountIdConversion, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{AssetInspector, AssetKind, Balance, BondLedger, NativeWrapper};

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Bonding curve ledger
    type Bond: BondLedger<Self::AccountId, Balance>;

    /// Native currency wrapper whose asset backs zappable curves
    type Wrapper: NativeWrapper<Self::AccountId, Balance>;

    /// Ledger of curve tokens, with delegated transfers
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + FungiblesMutate<Self::AccountId, AssetId = u32, Balance = Balance>
      + ApprovalsInspect<Self::AccountId>
      + ApprovalsMutate<Self::AccountId>;

    /// Native currency
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// Pallet ID deriving the transit account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Benchmark setup hooks
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Curve tokens minted with native currency
    MintedWithNative {
      who: T::AccountId,
      token: AssetKind,
      receiver: T::AccountId,
      amount: Balance,
      native_spent: Balance,
      native_refunded: Balance,
    },
    /// Curve tokens burned for native currency
    BurnedToNative {
      who: T::AccountId,
      token: AssetKind,
      receiver: T::AccountId,
      amount: Balance,
      native_out: Balance,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Zero amount not allowed
    ZeroAmount,
    /// No curve exists for this token
    NoSuchToken,
    /// The curve's reserve is not the wrapped native asset
    ReserveNotWrappedNative,
    /// Zap account is not approved for enough curve tokens
    InsufficientAllowance,
    /// Caller holds too little native currency or curve tokens
    InsufficientBalance,
    /// Arithmetic would overflow
    ArithmeticOverflow,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Mint `amount` curve tokens to `receiver` paying with up to `native_in` native currency.
    ///
    /// Whatever the curve does not consume is returned to the caller in native currency. The
    /// caller must keep the existential deposit on top of `native_in`.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::mint_with_native())]
    pub fn mint_with_native(
      origin: OriginFor<T>,
      token: AssetKind,
      amount: Balance,
      native_in: Balance,
      receiver: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      with_storage_layer(|| Self::do_mint_with_native(&who, token, amount, native_in, &receiver))?;
      Ok(())
    }

    /// Burn `amount` approved curve tokens, paying at least `min_native_out` to `receiver`.
    ///
    /// The caller must first approve the zap account for `amount` through `pallet-assets`.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::burn_to_native())]
    pub fn burn_to_native(
      origin: OriginFor<T>,
      token: AssetKind,
      amount: Balance,
      min_native_out: Balance,
      receiver: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      with_storage_layer(|| {
        Self::do_burn_to_native(&who, token, amount, min_native_out, &receiver)
      })?;
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Transit account holding funds within a single call
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    fn ensure_zappable(token: AssetKind) -> DispatchResult {
      let reserve = T::Bond::reserve_asset(token).ok_or(Error::<T>::NoSuchToken)?;
      ensure!(
        reserve == T::Wrapper::wrapped_asset(),
        Error::<T>::ReserveNotWrappedNative
      );
      Ok(())
    }

    pub(crate) fn do_mint_with_native(
      who: &T::AccountId,
      token: AssetKind,
      amount: Balance,
      native_in: Balance,
      receiver: &T::AccountId,
    ) -> Result<Balance, DispatchError> {
      ensure!(!native_in.is_zero(), Error::<T>::ZeroAmount);
      Self::ensure_zappable(token)?;
      // The caller keeps their existential deposit, only the transit account is emptied
      ensure!(
        T::Currency::reducible_balance(who, Preservation::Preserve, Fortitude::Polite)
          >= native_in,
        Error::<T>::InsufficientBalance
      );

      let zap = Self::account_id();
      T::Currency::transfer(who, &zap, native_in, Preservation::Preserve)?;
      T::Wrapper::wrap(&zap, native_in)?;

      let (reserve_cost, royalty) = T::Bond::mint(&zap, token, amount, native_in, receiver)?;
      let native_spent = reserve_cost
        .checked_add(royalty)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      let native_refunded = native_in
        .checked_sub(native_spent)
        .ok_or(Error::<T>::ArithmeticOverflow)?;

      if !native_refunded.is_zero() {
        T::Wrapper::unwrap(&zap, native_refunded)?;
        T::Currency::transfer(&zap, who, native_refunded, Preservation::Expendable)?;
      }

      log::debug!(
        target: LOG_TARGET,
        "zap minted {amount} of {token:?} for {native_spent} native, refunded {native_refunded}",
      );

      Self::deposit_event(Event::MintedWithNative {
        who: who.clone(),
        token,
        receiver: receiver.clone(),
        amount,
        native_spent,
        native_refunded,
      });

      Ok(native_spent)
    }

    pub(crate) fn do_burn_to_native(
      who: &T::AccountId,
      token: AssetKind,
      amount: Balance,
      min_native_out: Balance,
      receiver: &T::AccountId,
    ) -> Result<Balance, DispatchError> {
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      Self::ensure_zappable(token)?;
      let token_id = token.local_id().ok_or(Error::<T>::NoSuchToken)?;

      let zap = Self::account_id();
      ensure!(
        T::Assets::allowance(token_id, who, &zap) >= amount,
        Error::<T>::InsufficientAllowance
      );
      ensure!(
        T::Assets::balance(token_id, who) >= amount,
        Error::<T>::InsufficientBalance
      );

      T::Assets::transfer_from(token_id, who, &zap, &zap, amount)?;
      let (reserve_refund, royalty) = T::Bond::burn(&zap, token, amount, min_native_out, &zap)?;
      let native_out = reserve_refund
        .checked_sub(royalty)
        .ok_or(Error::<T>::ArithmeticOverflow)?;

      if !native_out.is_zero() {
        T::Wrapper::unwrap(&zap, native_out)?;
        T::Currency::transfer(&zap, receiver, native_out, Preservation::Expendable)?;
      }

      log::debug!(
        target: LOG_TARGET,
        "zap burned {amount} of {token:?} for {native_out} native",
      );

      Self::deposit_event(Event::BurnedToNative {
        who: who.clone(),
        token,
        receiver: receiver.clone(),
        amount,
        native_out,
      });

      Ok(native_out)
    }
  }

  /// Keeps the transit account alive between calls
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
