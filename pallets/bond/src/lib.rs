//! Bond Pallet
//!
//! Step-priced bonding curves. Every curve issues its own `pallet-assets` token against exactly
//! one reserve asset; the price of each supply unit comes from an immutable step schedule and
//! mint/burn movements of reserve are the integral of that schedule over the supply they touch.
//! A royalty is taken on top of every mint cost and out of every burn refund and credited to the
//! protocol beneficiary through the royalty ledger.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod curve;
pub mod types;
pub use types::{AssetKind, Bond, BondParams, BondStep, TokenParams};

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::bond";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use crate::curve::{self, CurveError};
  use crate::types::{Bond, BondParams, BondStep, TokenParams};
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{
      storage::with_storage_layer,
      traits::{
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        fungibles::{
          Create, Inspect, Mutate,
          metadata::{MetadataDeposit, Mutate as MetadataMutate},
        },
        tokens::{Fortitude, Precision, Preservation},
      },
    },
    sp_runtime::{
      DispatchError, Permill,
      traits::{AccountIdConversion, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{AssetInspector, AssetKind, Balance, BondLedger, RoyaltyAccrual};

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Ledger of curve tokens and non-native reserve assets
    type Assets: Inspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + Mutate<Self::AccountId, AssetId = u32, Balance = Balance>
      + Create<Self::AccountId>
      + MetadataMutate<Self::AccountId>
      + MetadataDeposit<Balance>;

    /// Native currency, usable as a reserve asset
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// Royalty ledger credited on every mint and burn
    type Royalties: RoyaltyAccrual<Self::AccountId, Balance>;

    /// Pallet ID deriving the reserve custody account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Beneficiary of mint and burn royalties
    type ProtocolBeneficiary: Get<Self::AccountId>;

    /// Longest accepted step schedule
    #[pallet::constant]
    type MaxSteps: Get<u32>;

    /// Upper bound for both royalty rates
    #[pallet::constant]
    type MaxRoyalty: Get<Permill>;

    /// Base units per whole curve token; step prices are quoted per whole token
    #[pallet::constant]
    type TokenUnit: Get<Balance>;

    /// Asset id of the first curve token, later curves take consecutive ids
    #[pallet::constant]
    type FirstTokenId: Get<u32>;

    /// Longest curve token name or symbol, at most the asset ledger's own limit
    #[pallet::constant]
    type StringLimit: Get<u32>;

    /// Native currency paid to the protocol beneficiary for every new curve
    #[pallet::constant]
    type CreationFee: Get<Balance>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Curve state by curve token
  #[pallet::storage]
  pub type TokenBond<T: Config> =
    StorageMap<_, Blake2_128Concat, AssetKind, Bond<T::AccountId>, OptionQuery>;

  /// Step schedule by curve token, immutable once written
  #[pallet::storage]
  pub type BondSteps<T: Config> =
    StorageMap<_, Blake2_128Concat, AssetKind, BoundedVec<BondStep, T::MaxSteps>, ValueQuery>;

  /// Number of curves created so far
  #[pallet::storage]
  pub type TokenCount<T: Config> = StorageValue<_, u32, ValueQuery>;

  /// Set while a mint or burn is executing
  #[pallet::storage]
  pub type Entered<T: Config> = StorageValue<_, bool, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// New curve token created
    TokenCreated {
      token: AssetKind,
      creator: T::AccountId,
      reserve_asset: AssetKind,
      max_supply: Balance,
      free_allocation: Balance,
      creation_fee: Balance,
    },
    /// Curve tokens minted against reserve
    Minted {
      token: AssetKind,
      who: T::AccountId,
      receiver: T::AccountId,
      amount: Balance,
      reserve_cost: Balance,
      royalty: Balance,
    },
    /// Curve tokens burned for a reserve refund
    Burned {
      token: AssetKind,
      who: T::AccountId,
      receiver: T::AccountId,
      amount: Balance,
      reserve_refund: Balance,
      royalty: Balance,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Supply would leave the schedule's range
    OutOfRange,
    /// Cost above the caller's maximum or refund below their minimum
    SlippageExceeded,
    /// Caller holds fewer curve tokens than requested
    InsufficientBalance,
    /// Arithmetic would overflow
    ArithmeticOverflow,
    /// A mint or burn is already executing
    Reentrancy,
    /// Zero amount not allowed
    ZeroAmount,
    /// No curve exists for this token
    NoSuchToken,
    /// Step schedule is empty, mismatched or not strictly increasing
    InvalidStepParams,
    /// Last step range differs from max supply
    MaxSupplyMismatch,
    /// Step schedule longer than `MaxSteps`
    TooManySteps,
    /// Royalty rate above `MaxRoyalty`
    InvalidRoyalty,
    /// Reserve asset does not exist
    InvalidReserveAsset,
    /// Next curve token id is already in use
    TokenIdTaken,
  }

  impl<T> From<CurveError> for Error<T> {
    fn from(error: CurveError) -> Self {
      match error {
        CurveError::EmptySchedule
        | CurveError::LengthMismatch
        | CurveError::RangesNotIncreasing => Error::InvalidStepParams,
        CurveError::MaxSupplyMismatch => Error::MaxSupplyMismatch,
        CurveError::OutOfRange => Error::OutOfRange,
        CurveError::Overflow => Error::ArithmeticOverflow,
      }
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Create a curve token priced by a step schedule.
    ///
    /// The caller pays `CreationFee` and the token metadata deposit in native currency. When
    /// the first step is free its whole range is issued to the caller.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_token(bond_params.step_ranges.len() as u32))]
    pub fn create_token(
      origin: OriginFor<T>,
      token_params: TokenParams<T::StringLimit>,
      bond_params: BondParams<T::MaxSteps>,
    ) -> DispatchResult {
      let creator = ensure_signed(origin)?;
      Self::do_create_token(&creator, token_params, bond_params)?;
      Ok(())
    }

    /// Mint `amount` curve tokens to `receiver`, paying at most `max_reserve_amount`.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::mint())]
    pub fn mint(
      origin: OriginFor<T>,
      token: AssetKind,
      amount: Balance,
      max_reserve_amount: Balance,
      receiver: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_mint(&who, token, amount, max_reserve_amount, &receiver)?;
      Ok(())
    }

    /// Burn `amount` curve tokens, paying at least `min_refund` reserve to `receiver`.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::burn())]
    pub fn burn(
      origin: OriginFor<T>,
      token: AssetKind,
      amount: Balance,
      min_refund: Balance,
      receiver: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_burn(&who, token, amount, min_refund, &receiver)?;
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Account holding the reserve of every curve
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Curve state of `token`
    pub fn token_bond(token: AssetKind) -> Option<Bond<T::AccountId>> {
      TokenBond::<T>::get(token)
    }

    /// Step schedule of `token`, empty if there is no curve
    pub fn steps(token: AssetKind) -> Vec<BondStep> {
      BondSteps::<T>::get(token).into_inner()
    }

    /// Reserve needed to mint `amount` now as `(total, royalty)`, `total` including the royalty.
    pub fn quote_mint(token: AssetKind, amount: Balance) -> Result<(Balance, Balance), DispatchError> {
      let bond = TokenBond::<T>::get(token).ok_or(Error::<T>::NoSuchToken)?;
      let steps = BondSteps::<T>::get(token);
      let cost = curve::reserve_for_mint(&steps, bond.current_supply, amount, T::TokenUnit::get())
        .map_err(Error::<T>::from)?;
      let royalty = bond.mint_royalty.mul_floor(cost);
      let total = cost
        .checked_add(royalty)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      Ok((total, royalty))
    }

    /// Reserve paid out for burning `amount` now as `(net, royalty)`.
    pub fn quote_burn(token: AssetKind, amount: Balance) -> Result<(Balance, Balance), DispatchError> {
      let bond = TokenBond::<T>::get(token).ok_or(Error::<T>::NoSuchToken)?;
      let steps = BondSteps::<T>::get(token);
      let refund = curve::reserve_for_burn(&steps, bond.current_supply, amount, T::TokenUnit::get())
        .map_err(Error::<T>::from)?;
      let royalty = bond.burn_royalty.mul_floor(refund);
      Ok((refund.saturating_sub(royalty), royalty))
    }

    /// Step price of the next unit minted, per whole token
    pub fn price_for_next_mint(token: AssetKind) -> Result<Balance, DispatchError> {
      let bond = TokenBond::<T>::get(token).ok_or(Error::<T>::NoSuchToken)?;
      let steps = BondSteps::<T>::get(token);
      curve::price_at(&steps, bond.current_supply).ok_or_else(|| Error::<T>::OutOfRange.into())
    }

    pub(crate) fn do_create_token(
      creator: &T::AccountId,
      token_params: TokenParams<T::StringLimit>,
      bond_params: BondParams<T::MaxSteps>,
    ) -> Result<AssetKind, DispatchError> {
      with_storage_layer(|| Self::create_token_inner(creator, token_params, bond_params))
    }

    fn create_token_inner(
      creator: &T::AccountId,
      token_params: TokenParams<T::StringLimit>,
      bond_params: BondParams<T::MaxSteps>,
    ) -> Result<AssetKind, DispatchError> {
      let max_royalty = T::MaxRoyalty::get();
      ensure!(
        bond_params.mint_royalty <= max_royalty && bond_params.burn_royalty <= max_royalty,
        Error::<T>::InvalidRoyalty
      );
      ensure!(
        Self::reserve_exists(bond_params.reserve_asset),
        Error::<T>::InvalidReserveAsset
      );

      let steps = curve::build_steps(
        &bond_params.step_ranges,
        &bond_params.step_prices,
        bond_params.max_supply,
      )
      .map_err(Error::<T>::from)?;
      let steps: BoundedVec<BondStep, T::MaxSteps> =
        steps.try_into().map_err(|_| Error::<T>::TooManySteps)?;

      let count = TokenCount::<T>::get();
      let token_id = T::FirstTokenId::get()
        .checked_add(count)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      ensure!(!T::Assets::asset_exists(token_id), Error::<T>::TokenIdTaken);
      let token = AssetKind::Local(token_id);

      let creation_fee = T::CreationFee::get();
      Self::transfer_asset(
        AssetKind::Native,
        creator,
        &T::ProtocolBeneficiary::get(),
        creation_fee,
        Preservation::Preserve,
      )?;

      let custody = Self::account_id();
      T::Assets::create(
        token_id,
        custody.clone(),
        true,
        primitives::params::CURVE_TOKEN_MIN_BALANCE,
      )?;

      // The pallet owns the token, so it reserves the metadata deposit the creator hands over
      let TokenParams { name, symbol } = token_params;
      let deposit = T::Assets::calc_metadata_deposit(&name, &symbol);
      Self::transfer_asset(
        AssetKind::Native,
        creator,
        &custody,
        deposit,
        Preservation::Preserve,
      )?;
      <T::Assets as MetadataMutate<T::AccountId>>::set(
        token_id,
        &custody,
        name.into_inner(),
        symbol.into_inner(),
        primitives::params::TOKEN_DECIMALS,
      )?;

      // A free first step belongs to the creator
      let free_allocation = match steps.first() {
        Some(step) if step.price.is_zero() => step.range_to,
        _ => Zero::zero(),
      };
      if !free_allocation.is_zero() {
        T::Assets::mint_into(token_id, creator, free_allocation)?;
      }

      TokenBond::<T>::insert(
        token,
        Bond {
          creator: creator.clone(),
          mint_royalty: bond_params.mint_royalty,
          burn_royalty: bond_params.burn_royalty,
          reserve_asset: bond_params.reserve_asset,
          max_supply: bond_params.max_supply,
          current_supply: free_allocation,
          reserve_balance: Zero::zero(),
        },
      );
      BondSteps::<T>::insert(token, steps);
      TokenCount::<T>::put(count.saturating_add(1));

      log::info!(
        target: LOG_TARGET,
        "curve token {token:?} created against {:?}, max supply {}, fee {creation_fee}",
        bond_params.reserve_asset,
        bond_params.max_supply,
      );

      Self::deposit_event(Event::TokenCreated {
        token,
        creator: creator.clone(),
        reserve_asset: bond_params.reserve_asset,
        max_supply: bond_params.max_supply,
        free_allocation,
        creation_fee,
      });

      Ok(token)
    }

    pub(crate) fn do_mint(
      who: &T::AccountId,
      token: AssetKind,
      amount: Balance,
      max_reserve_amount: Balance,
      receiver: &T::AccountId,
    ) -> Result<(Balance, Balance), DispatchError> {
      Self::non_reentrant(|| {
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
        let mut bond = TokenBond::<T>::get(token).ok_or(Error::<T>::NoSuchToken)?;
        let token_id = token.local_id().ok_or(Error::<T>::NoSuchToken)?;
        let steps = BondSteps::<T>::get(token);

        let reserve_cost =
          curve::reserve_for_mint(&steps, bond.current_supply, amount, T::TokenUnit::get())
            .map_err(Error::<T>::from)?;
        let royalty = T::Royalties::accrue(
          &T::ProtocolBeneficiary::get(),
          bond.reserve_asset,
          reserve_cost,
          bond.mint_royalty,
        )?;
        let total = reserve_cost
          .checked_add(royalty)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        ensure!(total <= max_reserve_amount, Error::<T>::SlippageExceeded);

        bond.current_supply = bond
          .current_supply
          .checked_add(amount)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        bond.reserve_balance = bond
          .reserve_balance
          .checked_add(reserve_cost)
          .ok_or(Error::<T>::ArithmeticOverflow)?;

        // Native payers keep their existential deposit, asset accounts may be emptied
        let preservation = if bond.reserve_asset.is_native() {
          Preservation::Preserve
        } else {
          Preservation::Expendable
        };
        Self::transfer_asset(
          bond.reserve_asset,
          who,
          &Self::account_id(),
          reserve_cost,
          preservation,
        )?;
        Self::transfer_asset(
          bond.reserve_asset,
          who,
          &T::Royalties::custody_account(),
          royalty,
          preservation,
        )?;
        T::Assets::mint_into(token_id, receiver, amount)?;
        TokenBond::<T>::insert(token, bond);

        log::debug!(
          target: LOG_TARGET,
          "minted {amount} of {token:?} for {reserve_cost} reserve plus {royalty} royalty",
        );

        Self::deposit_event(Event::Minted {
          token,
          who: who.clone(),
          receiver: receiver.clone(),
          amount,
          reserve_cost,
          royalty,
        });

        Ok((reserve_cost, royalty))
      })
    }

    pub(crate) fn do_burn(
      who: &T::AccountId,
      token: AssetKind,
      amount: Balance,
      min_refund: Balance,
      receiver: &T::AccountId,
    ) -> Result<(Balance, Balance), DispatchError> {
      Self::non_reentrant(|| {
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
        let mut bond = TokenBond::<T>::get(token).ok_or(Error::<T>::NoSuchToken)?;
        let token_id = token.local_id().ok_or(Error::<T>::NoSuchToken)?;
        ensure!(
          T::Assets::balance(token_id, who) >= amount,
          Error::<T>::InsufficientBalance
        );
        let steps = BondSteps::<T>::get(token);

        let reserve_refund =
          curve::reserve_for_burn(&steps, bond.current_supply, amount, T::TokenUnit::get())
            .map_err(Error::<T>::from)?;
        let royalty = T::Royalties::accrue(
          &T::ProtocolBeneficiary::get(),
          bond.reserve_asset,
          reserve_refund,
          bond.burn_royalty,
        )?;
        let net = reserve_refund
          .checked_sub(royalty)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        ensure!(net >= min_refund, Error::<T>::SlippageExceeded);

        T::Assets::burn_from(
          token_id,
          who,
          amount,
          Preservation::Expendable,
          Precision::Exact,
          Fortitude::Polite,
        )?;
        bond.current_supply = bond
          .current_supply
          .checked_sub(amount)
          .ok_or(Error::<T>::OutOfRange)?;
        bond.reserve_balance = bond
          .reserve_balance
          .checked_sub(reserve_refund)
          .ok_or(Error::<T>::ArithmeticOverflow)?;

        let custody = Self::account_id();
        Self::transfer_asset(
          bond.reserve_asset,
          &custody,
          receiver,
          net,
          Preservation::Expendable,
        )?;
        Self::transfer_asset(
          bond.reserve_asset,
          &custody,
          &T::Royalties::custody_account(),
          royalty,
          Preservation::Expendable,
        )?;
        TokenBond::<T>::insert(token, bond);

        log::debug!(
          target: LOG_TARGET,
          "burned {amount} of {token:?} for {net} reserve after {royalty} royalty",
        );

        Self::deposit_event(Event::Burned {
          token,
          who: who.clone(),
          receiver: receiver.clone(),
          amount,
          reserve_refund,
          royalty,
        });

        Ok((reserve_refund, royalty))
      })
    }

    /// Run `f` in its own storage layer, rejecting nested mint/burn execution.
    fn non_reentrant<R>(
      f: impl FnOnce() -> Result<R, DispatchError>,
    ) -> Result<R, DispatchError> {
      with_storage_layer(|| {
        ensure!(!Entered::<T>::get(), Error::<T>::Reentrancy);
        Entered::<T>::put(true);
        let result = f();
        Entered::<T>::kill();
        result
      })
    }

    fn reserve_exists(asset: AssetKind) -> bool {
      match asset {
        AssetKind::Native => true,
        AssetKind::Local(id) => T::Assets::asset_exists(id),
      }
    }

    fn transfer_asset(
      asset: AssetKind,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: Balance,
      preservation: Preservation,
    ) -> DispatchResult {
      if amount.is_zero() {
        return Ok(());
      }
      match asset {
        AssetKind::Native => {
          T::Currency::transfer(from, to, amount, preservation)?;
        }
        AssetKind::Local(id) => {
          T::Assets::transfer(id, from, to, amount, preservation)?;
        }
      }
      Ok(())
    }
  }

  impl<T: Config> BondLedger<T::AccountId, Balance> for Pallet<T> {
    fn reserve_asset(token: AssetKind) -> Option<AssetKind> {
      TokenBond::<T>::get(token).map(|bond| bond.reserve_asset)
    }

    fn mint(
      who: &T::AccountId,
      token: AssetKind,
      amount: Balance,
      max_reserve_amount: Balance,
      receiver: &T::AccountId,
    ) -> Result<(Balance, Balance), DispatchError> {
      Self::do_mint(who, token, amount, max_reserve_amount, receiver)
    }

    fn burn(
      who: &T::AccountId,
      token: AssetKind,
      amount: Balance,
      min_refund: Balance,
      receiver: &T::AccountId,
    ) -> Result<(Balance, Balance), DispatchError> {
      Self::do_burn(who, token, amount, min_refund, receiver)
    }
  }

  /// Keeps the reserve custody account alive with a zero native balance
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
