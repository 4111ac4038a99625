//! Benchmarking setup for pallet-guarded-token

use super::*;

#[allow(unused)]
use crate::Pallet as GuardedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SUPPLY: u128 = 1_000_000_000_000;
const AMOUNT: u128 = 1_000_000;

/// Initialize the token with `owner` holding the supply and protection on,
/// so transfers walk the full guard path.
fn set_up_token<T: Config>(owner: &T::AccountId) {
    Pallet::<T>::do_initialize(TokenSetup {
        name: b"Guarded Token".to_vec(),
        symbol: b"GRD".to_vec(),
        total_supply: SUPPLY,
        decimals: 18,
        owner: owner.clone(),
        transaction_limit: SUPPLY,
        wallet_balance_limit: SUPPLY,
        anti_bot_enabled: true,
    })
    .expect("token set up");
}

fn white_list_batch<T: Config>(n: u32) -> BoundedVec<T::AccountId, T::MaxWhiteListBatch> {
    let accounts: Vec<T::AccountId> = (0..n).map(|i| account("member", i, 0)).collect();
    BoundedVec::try_from(accounts).expect("batch within bound")
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        let owner: T::AccountId = account("owner", 0, 0);
        let name = sp_std::vec![b'n'; T::MaxNameLength::get() as usize];
        let symbol = sp_std::vec![b's'; T::MaxSymbolLength::get() as usize];
        let origin = T::InitializeOrigin::try_successful_origin().expect("Initialize origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, name, symbol, SUPPLY, 18, owner.clone(), AMOUNT, SUPPLY, true);

        assert_eq!(Balances::<T>::get(&owner), SUPPLY);
        assert!(Initialized::<T>::get());
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        set_up_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), AMOUNT);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        set_up_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), AMOUNT);

        assert_eq!(Allowances::<T>::get(&caller, &spender), AMOUNT);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        set_up_token::<T>(&owner);
        Allowances::<T>::insert(&owner, &spender, AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), AMOUNT);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 0);
    }

    #[benchmark]
    fn increase_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        set_up_token::<T>(&caller);
        Allowances::<T>::insert(&caller, &spender, AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), AMOUNT);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 2 * AMOUNT);
    }

    #[benchmark]
    fn decrease_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        set_up_token::<T>(&caller);
        Allowances::<T>::insert(&caller, &spender, 2 * AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), AMOUNT);

        assert_eq!(Allowances::<T>::get(&caller, &spender), AMOUNT);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), AMOUNT);

        assert_eq!(TotalSupply::<T>::get(), SUPPLY - AMOUNT);
    }

    #[benchmark]
    fn burn_from() {
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&owner);
        Allowances::<T>::insert(&owner, &spender, AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&owner), SUPPLY - AMOUNT);
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        set_up_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn renounce_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Owner::<T>::get(), None);
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&caller);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn toggle_anti_bot_protection() {
        let caller: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), false);

        assert!(!Guard::<T>::get().anti_bot_enabled);
    }

    #[benchmark]
    fn add_to_white_list(n: Linear<1, { T::MaxWhiteListBatch::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&caller);
        let accounts = white_list_batch::<T>(n);
        let last = accounts.last().cloned().expect("n >= 1");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), accounts);

        assert!(WhiteList::<T>::get(&last));
    }

    #[benchmark]
    fn remove_from_white_list(n: Linear<1, { T::MaxWhiteListBatch::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&caller);
        let accounts = white_list_batch::<T>(n);
        for account in accounts.iter() {
            WhiteList::<T>::insert(account, true);
        }
        let last = accounts.last().cloned().expect("n >= 1");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), accounts);

        assert!(!WhiteList::<T>::get(&last));
    }

    #[benchmark]
    fn set_transaction_limit() {
        let caller: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), AMOUNT);

        assert_eq!(Guard::<T>::get().transaction_limit, AMOUNT);
    }

    #[benchmark]
    fn set_wallet_balance_limit() {
        let caller: T::AccountId = whitelisted_caller();
        set_up_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), AMOUNT);

        assert_eq!(Guard::<T>::get().wallet_balance_limit, AMOUNT);
    }

    impl_benchmark_test_suite!(GuardedToken, crate::mock::new_uninitialized_ext(), crate::mock::Test);
}
