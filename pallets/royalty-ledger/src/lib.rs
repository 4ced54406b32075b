//! Royalty Ledger Pallet
//!
//! Process-wide ledger of royalties accrued by bonding curves, keyed by beneficiary and
//! reserve asset. Curves credit it through [`primitives::RoyaltyAccrual`] and move the matching
//! funds into the pallet account; beneficiaries withdraw with `claim_royalties`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::royalty-ledger";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use frame::deps::{
    frame_support::traits::{
      fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
      fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate},
      tokens::Preservation,
    },
    sp_runtime::{
      DispatchError, Permill,
      traits::{AccountIdConversion, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{AssetKind, Balance, RoyaltyAccrual};

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Fungible assets holding non-native royalties
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + FungiblesMutate<Self::AccountId, AssetId = u32, Balance = Balance>;

    /// Native currency holding native royalties
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// Pallet ID deriving the royalty custody account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Royalty position of a beneficiary in one asset
  #[derive(
    Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
  )]
  pub struct RoyaltyInfo {
    /// Accrued and not yet claimed
    pub balance: Balance,
    /// Claimed over the lifetime of the ledger
    pub claimed: Balance,
  }

  /// Accrued royalties per beneficiary and reserve asset
  #[pallet::storage]
  pub type Royalties<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    AssetKind,
    RoyaltyInfo,
    ValueQuery,
  >;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Royalty credited to a beneficiary
    RoyaltyAccrued {
      beneficiary: T::AccountId,
      asset: AssetKind,
      amount: Balance,
    },
    /// Royalty paid out to its beneficiary
    RoyaltyClaimed {
      beneficiary: T::AccountId,
      asset: AssetKind,
      amount: Balance,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Ledger arithmetic would overflow
    ArithmeticOverflow,
    /// No unclaimed royalty for this asset
    NothingToClaim,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Withdraw the caller's unclaimed royalty in `asset`.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::claim_royalties())]
    pub fn claim_royalties(origin: OriginFor<T>, asset: AssetKind) -> DispatchResult {
      let who = ensure_signed(origin)?;

      let amount = Royalties::<T>::try_mutate(&who, asset, |info| -> Result<Balance, DispatchError> {
        let amount = info.balance;
        ensure!(!amount.is_zero(), Error::<T>::NothingToClaim);
        info.claimed = info
          .claimed
          .checked_add(amount)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        info.balance = Zero::zero();
        Ok(amount)
      })?;

      Self::pay_out(asset, &who, amount)?;

      Self::deposit_event(Event::RoyaltyClaimed {
        beneficiary: who,
        asset,
        amount,
      });

      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Account holding every accrued, unclaimed royalty
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Royalty position of `beneficiary` in `asset`
    pub fn royalty_info(beneficiary: &T::AccountId, asset: AssetKind) -> RoyaltyInfo {
      Royalties::<T>::get(beneficiary, asset)
    }

    fn pay_out(asset: AssetKind, to: &T::AccountId, amount: Balance) -> DispatchResult {
      let custody = Self::account_id();
      match asset {
        AssetKind::Native => {
          T::Currency::transfer(&custody, to, amount, Preservation::Expendable)?;
        }
        AssetKind::Local(id) => {
          T::Assets::transfer(id, &custody, to, amount, Preservation::Expendable)?;
        }
      }
      Ok(())
    }
  }

  impl<T: Config> RoyaltyAccrual<T::AccountId, Balance> for Pallet<T> {
    fn custody_account() -> T::AccountId {
      Self::account_id()
    }

    fn accrue(
      beneficiary: &T::AccountId,
      asset: AssetKind,
      gross: Balance,
      rate: Permill,
    ) -> Result<Balance, DispatchError> {
      let royalty = rate.mul_floor(gross);
      if royalty.is_zero() {
        return Ok(royalty);
      }

      Royalties::<T>::try_mutate(beneficiary, asset, |info| -> DispatchResult {
        info.balance = info
          .balance
          .checked_add(royalty)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        Ok(())
      })?;

      log::debug!(
        target: LOG_TARGET,
        "royalty accrued: {royalty} of {asset:?} on gross {gross} at {rate:?}",
      );

      Self::deposit_event(Event::RoyaltyAccrued {
        beneficiary: beneficiary.clone(),
        asset,
        amount: royalty,
      });

      Ok(royalty)
    }
  }

  /// Keeps the custody account alive with a zero native balance
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
