use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Identity of every asset the bond pallets move around: reserve assets, curve tokens and
/// the wrapped native currency.
///
/// - `Native`: The system's native currency (managed by pallet-balances).
/// - `Local(u32)`: Assets managed by pallet-assets, including curve tokens and wrapped native.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum AssetKind {
  /// Native currency managed by pallet-balances
  #[default]
  Native,
  /// Local asset managed by pallet-assets
  Local(u32),
}

impl From<u32> for AssetKind {
  fn from(asset_id: u32) -> Self {
    AssetKind::Local(asset_id)
  }
}

/// Helper trait to inspect AssetKind properties
pub trait AssetInspector {
  fn is_native(&self) -> bool;
  fn local_id(&self) -> Option<u32>;
}

impl AssetInspector for AssetKind {
  fn is_native(&self) -> bool {
    matches!(self, AssetKind::Native)
  }

  fn local_id(&self) -> Option<u32> {
    match self {
      AssetKind::Local(id) => Some(*id),
      AssetKind::Native => None,
    }
  }
}
