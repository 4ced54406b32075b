extern crate alloc;

use crate as pallet_bond;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU64, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, Permill,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::params;
use std::cell::RefCell;

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CHARLIE: u64 = 3;
pub const PROTOCOL: u64 = 99;
pub const RESERVE_ID: u32 = 1;
pub const UNIT: u128 = params::TOKEN_UNIT;
pub const INITIAL_BALANCE: u128 = 1_000_000 * UNIT;
pub const MAX_STEPS: u32 = 16;
pub const STRING_LIMIT: u32 = 50;

thread_local! {
    pub static CREATION_FEE: RefCell<u128> = const { RefCell::new(0) };
}

pub fn set_creation_fee(fee: u128) {
  CREATION_FEE.with(|f| *f.borrow_mut() = fee);
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    RoyaltyLedger: pallet_royalty_ledger,
    Bond: pallet_bond,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<STRING_LIMIT>;
  type Freezer = ();
  type Extra = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  type ReserveData = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = ();
}

pub struct RoyaltyPalletId;
impl Get<PalletId> for RoyaltyPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::ROYALTY_LEDGER_PALLET_ID)
  }
}

impl pallet_royalty_ledger::Config for Test {
  type Assets = Assets;
  type Currency = Balances;
  type PalletId = RoyaltyPalletId;
  type WeightInfo = ();
}

pub struct BondPalletId;
impl Get<PalletId> for BondPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::BOND_PALLET_ID)
  }
}

pub struct CreationFee;
impl Get<u128> for CreationFee {
  fn get() -> u128 {
    CREATION_FEE.with(|f| *f.borrow())
  }
}

pub struct MaxRoyalty;
impl Get<Permill> for MaxRoyalty {
  fn get() -> Permill {
    params::MAX_ROYALTY
  }
}

impl pallet_bond::Config for Test {
  type Assets = Assets;
  type Currency = Balances;
  type Royalties = RoyaltyLedger;
  type PalletId = BondPalletId;
  type ProtocolBeneficiary = ConstU64<PROTOCOL>;
  type MaxSteps = ConstU32<MAX_STEPS>;
  type MaxRoyalty = MaxRoyalty;
  type TokenUnit = ConstU128<UNIT>;
  type FirstTokenId = ConstU32<{ params::FIRST_CURVE_TOKEN_ID }>;
  type StringLimit = ConstU32<STRING_LIMIT>;
  type CreationFee = CreationFee;
  type WeightInfo = ();
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  set_creation_fee(0);
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: alloc::vec![
      (ALICE, INITIAL_BALANCE),
      (BOB, INITIAL_BALANCE),
      (CHARLIE, INITIAL_BALANCE),
    ],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: alloc::vec![(RESERVE_ID, ALICE, true, 1)],
    metadata: alloc::vec![],
    accounts: alloc::vec![
      (RESERVE_ID, ALICE, INITIAL_BALANCE),
      (RESERVE_ID, BOB, INITIAL_BALANCE),
      (RESERVE_ID, CHARLIE, INITIAL_BALANCE),
    ],
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_royalty_ledger::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  pallet_bond::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
