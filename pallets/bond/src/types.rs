//! Storage and call types of the bond pallet.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame::deps::frame_support::{
  BoundedVec, CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound, traits::Get,
};
use frame::deps::sp_runtime::{Permill, RuntimeDebug};
use scale_info::TypeInfo;

pub use primitives::{AssetKind, Balance};

/// One step of a price schedule.
///
/// Every supply unit above the previous step's `range_to` and up to this `range_to` costs
/// `price` reserve per whole token.
#[derive(
  Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct BondStep {
  pub range_to: Balance,
  pub price: Balance,
}

/// Per-curve accounting state.
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct Bond<AccountId> {
  /// Account that created the curve
  pub creator: AccountId,
  /// Royalty charged on top of the reserve cost of a mint
  pub mint_royalty: Permill,
  /// Royalty withheld from the reserve refund of a burn
  pub burn_royalty: Permill,
  /// The only asset accepted as backing
  pub reserve_asset: AssetKind,
  /// Last step's `range_to`
  pub max_supply: Balance,
  /// Curve tokens issued and not yet burned
  pub current_supply: Balance,
  /// Reserve held for this curve, royalties excluded
  pub reserve_balance: Balance,
}

/// Display metadata of a new curve token, bounded by the runtime's string limit.
#[derive(
  CloneNoBound,
  Encode,
  Decode,
  DecodeWithMemTracking,
  EqNoBound,
  PartialEqNoBound,
  RuntimeDebugNoBound,
  TypeInfo,
)]
#[scale_info(skip_type_params(StringLimit))]
pub struct TokenParams<StringLimit: Get<u32>> {
  pub name: BoundedVec<u8, StringLimit>,
  pub symbol: BoundedVec<u8, StringLimit>,
}

/// Parameters of a new curve.
///
/// Both schedules are bounded by `MaxSteps`, so oversized input fails to decode.
#[derive(
  CloneNoBound,
  Encode,
  Decode,
  DecodeWithMemTracking,
  EqNoBound,
  PartialEqNoBound,
  RuntimeDebugNoBound,
  TypeInfo,
)]
#[scale_info(skip_type_params(MaxSteps))]
pub struct BondParams<MaxSteps: Get<u32>> {
  pub mint_royalty: Permill,
  pub burn_royalty: Permill,
  pub reserve_asset: AssetKind,
  pub max_supply: Balance,
  pub step_ranges: BoundedVec<Balance, MaxSteps>,
  pub step_prices: BoundedVec<Balance, MaxSteps>,
}
