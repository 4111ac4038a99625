//! Weights for pallet-guarded-token.
//!
//! Execution times are hand-set until `benchmarking.rs` is run on reference
//! hardware; the database access counts match what each call touches.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-guarded-token.
pub trait WeightInfo {
    fn initialize() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn increase_allowance() -> Weight;
    fn decrease_allowance() -> Weight;
    fn burn() -> Weight;
    fn burn_from() -> Weight;
    fn transfer_ownership() -> Weight;
    fn renounce_ownership() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn toggle_anti_bot_protection() -> Weight;
    fn add_to_white_list(n: u32) -> Weight;
    fn remove_from_white_list(n: u32) -> Weight;
    fn set_transaction_limit() -> Weight;
    fn set_wallet_balance_limit() -> Weight;
}

/// Weights for pallet-guarded-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn initialize() -> Weight {
        Weight::from_parts(40_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 11))
    }
    fn transfer() -> Weight {
        Weight::from_parts(30_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(6, 2))
    }
    fn approve() -> Weight {
        Weight::from_parts(15_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(38_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(7, 3))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(16_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(16_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(27_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn renounce_ownership() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn toggle_anti_bot_protection() -> Weight {
        Weight::from_parts(11_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn add_to_white_list(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 0)
            .saturating_add(Weight::from_parts(2_500_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(n.into()))
    }
    fn remove_from_white_list(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 0)
            .saturating_add(Weight::from_parts(2_500_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(n.into()))
    }
    fn set_transaction_limit() -> Weight {
        Weight::from_parts(11_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn set_wallet_balance_limit() -> Weight {
        Weight::from_parts(11_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(40_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 11))
    }
    fn transfer() -> Weight {
        Weight::from_parts(30_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(6, 2))
    }
    fn approve() -> Weight {
        Weight::from_parts(15_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(38_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(7, 3))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(16_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(16_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(27_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn renounce_ownership() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn toggle_anti_bot_protection() -> Weight {
        Weight::from_parts(11_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn add_to_white_list(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 0)
            .saturating_add(Weight::from_parts(2_500_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(n.into()))
    }
    fn remove_from_white_list(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 0)
            .saturating_add(Weight::from_parts(2_500_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(n.into()))
    }
    fn set_transaction_limit() -> Weight {
        Weight::from_parts(11_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn set_wallet_balance_limit() -> Weight {
        Weight::from_parts(11_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
}
