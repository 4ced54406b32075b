//! Ecosystem Constants for the Step Bond pallets
//!
//! This module centralizes system-level constants: pallet IDs used to derive custody accounts
//! and the fundamental economic parameters of the bonding curves.
//!
//! These constants are the single source of truth and are re-used by every runtime (and mock
//! runtime) that wires the pallets together.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate accounts for pallet-specific custody.
pub mod pallet_ids {
  /// Bond pallet ID (holds every curve's reserve balance)
  pub const BOND_PALLET_ID: &[u8; 8] = b"py/bond0";

  /// Royalty ledger pallet ID (holds accrued, unclaimed royalties)
  pub const ROYALTY_LEDGER_PALLET_ID: &[u8; 8] = b"py/royal";

  /// Wrapped native pallet ID (holds the native currency backing wrapped units)
  pub const WRAPPED_NATIVE_PALLET_ID: &[u8; 8] = b"py/wnatv";

  /// Native zap pallet ID (transit account for wrap/mint and burn/unwrap sequences)
  pub const NATIVE_ZAP_PALLET_ID: &[u8; 8] = b"py/nzap0";
}

/// Ecosystem parameters defining mathematical constants and thresholds.
pub mod params {
  use super::Balance;
  use sp_arithmetic::Permill;

  /// Number of base units in one whole curve token (18 decimals).
  ///
  /// Step prices are quoted per whole token, so the reserve owed for `n` base units at
  /// price `p` is `n * p / TOKEN_UNIT`.
  pub const TOKEN_UNIT: Balance = 1_000_000_000_000_000_000;

  /// Decimals of every curve token.
  pub const TOKEN_DECIMALS: u8 = 18;

  /// Maximum number of steps in a single curve schedule.
  pub const MAX_STEPS: u32 = 1000;

  /// Upper bound for mint and burn royalty rates (50%).
  pub const MAX_ROYALTY: Permill = Permill::from_percent(50);

  /// Minimum balance of a curve token account in pallet-assets.
  pub const CURVE_TOKEN_MIN_BALANCE: Balance = 1;

  /// First pallet-assets id handed out to curve tokens; ids are allocated sequentially.
  pub const FIRST_CURVE_TOKEN_ID: u32 = 0x1000_0000;

  /// pallet-assets id of the wrapped native currency, below the curve token range.
  pub const WRAPPED_NATIVE_ASSET_ID: u32 = 0x0FFF_FFFF;

  /// Minimum balance of a wrapped native account in pallet-assets.
  pub const WRAPPED_NATIVE_MIN_BALANCE: Balance = 1;
}
