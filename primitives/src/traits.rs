//! Cross-pallet interfaces.
//!
//! Each pallet depends on the behaviour it consumes through one of these traits and the runtime
//! picks the implementation, so the bond ledger, royalty ledger, wrapper and zap never import each
//! other directly.

use crate::AssetKind;
use polkadot_sdk::sp_runtime::DispatchError;
use sp_arithmetic::Permill;

/// Process-wide royalty ledger shared by every curve.
pub trait RoyaltyAccrual<AccountId, Balance> {
  /// Account holding accrued, unclaimed royalty funds.
  fn custody_account() -> AccountId;

  /// Credit `floor(gross * rate)` of `asset` to `beneficiary` and return the credited amount.
  ///
  /// The caller is responsible for moving the returned amount into [`Self::custody_account`].
  fn accrue(
    beneficiary: &AccountId,
    asset: AssetKind,
    gross: Balance,
    rate: Permill,
  ) -> Result<Balance, DispatchError>;
}

/// Bonding curve entry points consumed by wrappers such as the native zap.
pub trait BondLedger<AccountId, Balance> {
  /// Reserve asset accepted by `token`'s curve, `None` if the token has no curve.
  fn reserve_asset(token: AssetKind) -> Option<AssetKind>;

  /// Mint `amount` of `token` to `receiver`, paying reserve from `who`.
  ///
  /// Returns `(reserve_cost, royalty)`; `who` pays their sum, which must not exceed
  /// `max_reserve_amount`.
  fn mint(
    who: &AccountId,
    token: AssetKind,
    amount: Balance,
    max_reserve_amount: Balance,
    receiver: &AccountId,
  ) -> Result<(Balance, Balance), DispatchError>;

  /// Burn `amount` of `token` held by `who`, paying the net refund to `receiver`.
  ///
  /// Returns `(reserve_refund, royalty)`; `receiver` gets `reserve_refund - royalty`, which must
  /// be at least `min_refund`.
  fn burn(
    who: &AccountId,
    token: AssetKind,
    amount: Balance,
    min_refund: Balance,
    receiver: &AccountId,
  ) -> Result<(Balance, Balance), DispatchError>;
}

/// One to one conversion between the native currency and its wrapped asset.
pub trait NativeWrapper<AccountId, Balance> {
  /// The wrapped representation of the native currency.
  fn wrapped_asset() -> AssetKind;

  /// Take `amount` native currency from `who` and credit the same amount of wrapped units.
  ///
  /// `who` may be emptied, so callers pass pallet transit accounts rather than user accounts.
  fn wrap(who: &AccountId, amount: Balance) -> Result<Balance, DispatchError>;

  /// Burn `amount` wrapped units of `who` and return the same amount of native currency.
  fn unwrap(who: &AccountId, amount: Balance) -> Result<Balance, DispatchError>;
}
