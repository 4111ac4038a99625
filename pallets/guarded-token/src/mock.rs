use crate as pallet_guarded_token;
use frame_support::{derive_impl, parameter_types, traits::ConstU32, PalletId};
use frame_system::EnsureRoot;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        GuardedToken: pallet_guarded_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type DbWeight = ();
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
}

parameter_types! {
    pub const GuardedTokenPalletId: PalletId = PalletId(*b"py/guard");
}

impl pallet_guarded_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type InitializeOrigin = EnsureRoot<u64>;
    type PalletId = GuardedTokenPalletId;
    type MaxNameLength = ConstU32<64>;
    type MaxSymbolLength = ConstU32<16>;
    type MaxWhiteListBatch = ConstU32<16>;
    type WeightInfo = ();
}

/// Encodes to all zero bytes.
pub const NULL: u64 = 0;
pub const OWNER: u64 = 1;
pub const USER1: u64 = 2;
pub const USER2: u64 = 3;
pub const USER3: u64 = 4;

pub const DECIMALS: u8 = 18;
pub const UNIT: u128 = 1_000_000_000_000_000_000;
pub const TOTAL_SUPPLY: u128 = 1_000_000 * UNIT;
pub const TXN_LIMIT: u128 = 50 * UNIT;
pub const WALLET_BALANCE_LIMIT: u128 = 500 * UNIT;

pub fn units(amount: u128) -> u128 {
    amount * UNIT
}

/// Genesis matching a fresh deployment: supply minted to `OWNER`, anti-bot on.
pub fn genesis() -> pallet_guarded_token::GenesisConfig<Test> {
    pallet_guarded_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        name: b"Guarded Token".to_vec(),
        symbol: b"GRD".to_vec(),
        decimals: DECIMALS,
        total_supply: TOTAL_SUPPLY,
        transaction_limit: TXN_LIMIT,
        wallet_balance_limit: WALLET_BALANCE_LIMIT,
        anti_bot_enabled: true,
    }
}

fn build_ext(token: pallet_guarded_token::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    token.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(genesis())
}

/// Same as [`new_test_ext`] with anti-bot protection off, like the plain ERC20 suite.
pub fn new_unguarded_ext() -> sp_io::TestExternalities {
    build_ext(pallet_guarded_token::GenesisConfig::<Test> { anti_bot_enabled: false, ..genesis() })
}

/// No owner in genesis: the token waits for `initialize`.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build_ext(pallet_guarded_token::GenesisConfig::<Test>::default())
}
