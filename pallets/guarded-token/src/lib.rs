//! # Guarded Token Pallet
//!
//! A fungible token ledger with ERC20 semantics (balances, allowances, burn)
//! plus owner-controlled transfer guards meant to throttle early trading:
//!
//! - a whitelist: while anti-bot protection is on, at least one side of every
//!   transfer must be whitelisted;
//! - a per-transaction limit and a per-wallet balance cap, both enforced while
//!   protection is on;
//! - a pause switch that halts `transfer` and `transfer_from`.
//!
//! The ledger is set up exactly once, either through the `initialize` call or
//! from the genesis config. The full supply is minted to the owner and the
//! owner and the pallet account are whitelisted.
//!
//! ## Storage layout
//!
//! Storage items are append-only across runtime upgrades. An existing item
//! keeps its name, key and value type. New items go after the existing ones
//! and come with a `STORAGE_VERSION` bump and a migration in [`migrations`].

#![cfg_attr(not(feature = "std"), no_std)]
// `pallet::getter` is deprecated upstream but still the clearest query surface here.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]
#![allow(clippy::too_many_arguments)]

use codec::Encode;
use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin, PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::AccountIdConversion;
use sp_std::prelude::*;

pub use guard::{GuardConfig, GuardError, TransferSnapshot};
pub use pallet::*;
pub use weights::WeightInfo;

pub mod guard;
pub mod migrations;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::guarded-token";

/// Everything the one-time initialization writes.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct TokenSetup<AccountId> {
    pub name: Vec<u8>,
    pub symbol: Vec<u8>,
    pub total_supply: u128,
    pub decimals: u8,
    pub owner: AccountId,
    pub transaction_limit: u128,
    pub wallet_balance_limit: u128,
    pub anti_bot_enabled: bool,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Origin allowed to run the one-time initialization (the deployer).
        type InitializeOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Derives the token's own account, which is whitelisted at initialization.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        #[pallet::constant]
        type MaxNameLength: Get<u32>;

        #[pallet::constant]
        type MaxSymbolLength: Get<u32>;

        /// Maximum number of accounts in one whitelist update.
        #[pallet::constant]
        type MaxWhiteListBatch: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Guarded Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T: Config> = StorageValue<_, BoundedVec<u8, T::MaxNameLength>, ValueQuery>;

    /// Token symbol (e.g., "GRD")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T: Config> =
        StorageValue<_, BoundedVec<u8, T::MaxSymbolLength>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Minted once at initialization, only ever reduced by burns.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Remaining allowance, keyed by (owner, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Current owner; `None` once ownership is renounced.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn guard_config)]
    pub type Guard<T> = StorageValue<_, GuardConfig, ValueQuery>;

    /// Accounts that open the anti-bot gate when on either side of a transfer.
    #[pallet::storage]
    #[pallet::getter(fn is_white_listed)]
    pub type WhiteList<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Set by initialization. Added in storage version 1.
    #[pallet::storage]
    #[pallet::getter(fn is_initialized)]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved. `from` is `None` for the initial mint, `to` is `None` for burns.
        Transfer { from: Option<T::AccountId>, to: Option<T::AccountId>, amount: u128 },
        /// Allowance of `spender` over `owner`'s tokens set to `amount`.
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        OwnershipTransferred {
            previous_owner: Option<T::AccountId>,
            new_owner: Option<T::AccountId>,
        },
        AntiBotProtectionUpdated { enabled: bool },
        /// Accounts added to (`added == true`) or removed from the whitelist.
        WhiteListUpdated { added: bool, accounts: BoundedVec<T::AccountId, T::MaxWhiteListBatch> },
        MaximumTransactionLimitUpdated { amount: u128 },
        MaximumWalletBalanceUpdated { amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Ownable: caller is not the owner.
        Unauthorized,
        /// Target or source is the null account.
        InvalidRecipient,
        /// Amount exceeds balance.
        InsufficientBalance,
        /// Amount exceeds the remaining allowance.
        InsufficientAllowance,
        /// Pausable: paused.
        OperationPaused,
        /// Transactions disabled for these accounts.
        TransactionsDisabled,
        /// Transaction limit exceeded : Please send lesser amounts.
        TransactionLimitExceeded,
        /// Exceeding maximum wallet balance : Please send lesser amounts.
        WalletBalanceLimitExceeded,
        /// Token is already initialized.
        ReinitializationBlocked,
        /// Arithmetic overflow or underflow.
        ArithmeticError,
        NameTooLong,
        SymbolTooLong,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Set up the token. Mints `total_supply` to `owner`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            name: Vec<u8>,
            symbol: Vec<u8>,
            total_supply: u128,
            decimals: u8,
            owner: T::AccountId,
            transaction_limit: u128,
            wallet_balance_limit: u128,
            anti_bot_enabled: bool,
        ) -> DispatchResult {
            T::InitializeOrigin::ensure_origin(origin)?;
            Self::do_initialize(TokenSetup {
                name,
                symbol,
                total_supply,
                decimals,
                owner,
                transaction_limit,
                wallet_balance_limit,
                anti_bot_enabled,
            })
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_transferable(&to)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Set the allowance of `spender` to exactly `amount`.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Self::is_null_account(&spender), Error::<T>::InvalidRecipient);
            Self::set_allowance(&owner, &spender, amount);
            Ok(())
        }

        /// Move `amount` from `from` to `to` out of the caller's allowance.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::OperationPaused);
            let remaining = Self::remaining_allowance(&from, &spender, amount)?;
            ensure!(!Self::is_null_account(&from), Error::<T>::InvalidRecipient);
            Self::ensure_transferable(&to)?;
            Self::do_transfer(&from, &to, amount)?;
            Self::write_allowance(&from, &spender, remaining);
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Self::is_null_account(&spender), Error::<T>::InvalidRecipient);
            let increased = Allowances::<T>::get(&owner, &spender)
                .checked_add(delta)
                .ok_or(Error::<T>::ArithmeticError)?;
            Self::set_allowance(&owner, &spender, increased);
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Self::is_null_account(&spender), Error::<T>::InvalidRecipient);
            let decreased = Allowances::<T>::get(&owner, &spender)
                .checked_sub(delta)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            Self::set_allowance(&owner, &spender, decreased);
            Ok(())
        }

        /// Destroy `amount` of the caller's tokens. Not subject to pause or guards.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_burn(&who, amount)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(origin: OriginFor<T>, owner: T::AccountId, amount: u128) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Self::remaining_allowance(&owner, &spender, amount)?;
            ensure!(!Self::is_null_account(&owner), Error::<T>::InvalidRecipient);
            Self::do_burn(&owner, amount)?;
            Self::write_allowance(&owner, &spender, remaining);
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let previous = Self::ensure_owner(origin)?;
            ensure!(!Self::is_null_account(&new_owner), Error::<T>::InvalidRecipient);
            Owner::<T>::put(&new_owner);
            log::info!(target: LOG_TARGET, "ownership transferred from {previous:?} to {new_owner:?}");
            Self::deposit_event(Event::OwnershipTransferred {
                previous_owner: Some(previous),
                new_owner: Some(new_owner),
            });
            Ok(())
        }

        /// Give up ownership for good. Every owner-only call fails afterwards.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::renounce_ownership())]
        pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
            let previous = Self::ensure_owner(origin)?;
            Owner::<T>::kill();
            log::info!(target: LOG_TARGET, "ownership renounced by {previous:?}");
            Self::deposit_event(Event::OwnershipTransferred {
                previous_owner: Some(previous),
                new_owner: None,
            });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Paused::<T>::put(true);
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Paused::<T>::put(false);
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::toggle_anti_bot_protection())]
        pub fn toggle_anti_bot_protection(origin: OriginFor<T>, enabled: bool) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Guard::<T>::mutate(|config| config.anti_bot_enabled = enabled);
            Self::deposit_event(Event::AntiBotProtectionUpdated { enabled });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::add_to_white_list(accounts.len() as u32))]
        pub fn add_to_white_list(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxWhiteListBatch>,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            for account in accounts.iter() {
                WhiteList::<T>::insert(account, true);
            }
            Self::deposit_event(Event::WhiteListUpdated { added: true, accounts });
            Ok(())
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::remove_from_white_list(accounts.len() as u32))]
        pub fn remove_from_white_list(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxWhiteListBatch>,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            for account in accounts.iter() {
                WhiteList::<T>::remove(account);
            }
            Self::deposit_event(Event::WhiteListUpdated { added: false, accounts });
            Ok(())
        }

        /// Overwrite the per-transaction limit. Not validated against supply.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::set_transaction_limit())]
        pub fn set_transaction_limit(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Guard::<T>::mutate(|config| config.transaction_limit = amount);
            Self::deposit_event(Event::MaximumTransactionLimitUpdated { amount });
            Ok(())
        }

        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::set_wallet_balance_limit())]
        pub fn set_wallet_balance_limit(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Guard::<T>::mutate(|config| config.wallet_balance_limit = amount);
            Self::deposit_event(Event::MaximumWalletBalanceUpdated { amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner. The token stays uninitialized when `None`.
        pub owner: Option<T::AccountId>,
        pub name: Vec<u8>,
        pub symbol: Vec<u8>,
        pub decimals: u8,
        /// Minted to `owner` in full.
        pub total_supply: u128,
        pub transaction_limit: u128,
        pub wallet_balance_limit: u128,
        pub anti_bot_enabled: bool,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let Some(ref owner) = self.owner else {
                return;
            };
            Pallet::<T>::do_initialize(TokenSetup {
                name: self.name.clone(),
                symbol: self.symbol.clone(),
                total_supply: self.total_supply,
                decimals: self.decimals,
                owner: owner.clone(),
                transaction_limit: self.transaction_limit,
                wallet_balance_limit: self.wallet_balance_limit,
                anti_bot_enabled: self.anti_bot_enabled,
            })
            .expect("Invalid guarded token genesis config");
        }
    }
}

impl<T> From<GuardError> for Error<T> {
    fn from(error: GuardError) -> Self {
        match error {
            GuardError::TransactionsDisabled => Error::<T>::TransactionsDisabled,
            GuardError::TransactionLimitExceeded => Error::<T>::TransactionLimitExceeded,
            GuardError::WalletBalanceLimitExceeded => Error::<T>::WalletBalanceLimitExceeded,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The token's own account.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// True for the account whose encoding is all zero bytes.
    pub fn is_null_account(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|byte| *byte == 0))
    }

    pub fn transaction_limit() -> u128 {
        Guard::<T>::get().transaction_limit
    }

    pub fn wallet_balance_limit() -> u128 {
        Guard::<T>::get().wallet_balance_limit
    }

    pub fn anti_bot_protection_status() -> bool {
        Guard::<T>::get().anti_bot_enabled
    }

    pub(crate) fn do_initialize(setup: TokenSetup<T::AccountId>) -> DispatchResult {
        ensure!(!Initialized::<T>::get(), Error::<T>::ReinitializationBlocked);
        ensure!(!Self::is_null_account(&setup.owner), Error::<T>::InvalidRecipient);
        let name: BoundedVec<u8, T::MaxNameLength> =
            setup.name.try_into().map_err(|_| Error::<T>::NameTooLong)?;
        let symbol: BoundedVec<u8, T::MaxSymbolLength> =
            setup.symbol.try_into().map_err(|_| Error::<T>::SymbolTooLong)?;
        let owner = setup.owner;

        Initialized::<T>::put(true);
        TokenName::<T>::put(name);
        TokenSymbol::<T>::put(symbol);
        Decimals::<T>::put(setup.decimals);

        // The mint does not pass through the guard.
        TotalSupply::<T>::put(setup.total_supply);
        Self::write_balance(&owner, setup.total_supply);
        Owner::<T>::put(&owner);

        WhiteList::<T>::insert(Self::account_id(), true);
        WhiteList::<T>::insert(&owner, true);
        Guard::<T>::put(GuardConfig {
            transaction_limit: setup.transaction_limit,
            wallet_balance_limit: setup.wallet_balance_limit,
            anti_bot_enabled: setup.anti_bot_enabled,
        });
        Paused::<T>::put(false);

        log::info!(
            target: LOG_TARGET,
            "initialized with supply {} owned by {owner:?}, anti-bot protection {}",
            setup.total_supply,
            setup.anti_bot_enabled,
        );
        Self::deposit_event(Event::Transfer {
            from: None,
            to: Some(owner.clone()),
            amount: setup.total_supply,
        });
        Self::deposit_event(Event::OwnershipTransferred {
            previous_owner: None,
            new_owner: Some(owner),
        });
        Ok(())
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    /// Pause and null recipient checks shared by the balance-moving calls.
    fn ensure_transferable(to: &T::AccountId) -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::OperationPaused);
        ensure!(!Self::is_null_account(to), Error::<T>::InvalidRecipient);
        Ok(())
    }

    fn remaining_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> Result<u128, DispatchError> {
        Allowances::<T>::get(owner, spender)
            .checked_sub(amount)
            .ok_or_else(|| Error::<T>::InsufficientAllowance.into())
    }

    /// Zero balances are not kept in storage.
    fn write_balance(who: &T::AccountId, amount: u128) {
        if amount == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, amount);
        }
    }

    fn write_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }

    fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        Self::write_allowance(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
    }

    /// Run the guard against live storage.
    fn check_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let snapshot = TransferSnapshot {
            sender_whitelisted: WhiteList::<T>::get(from),
            recipient_whitelisted: WhiteList::<T>::get(to),
            recipient_balance: Balances::<T>::get(to),
            amount,
        };
        Guard::<T>::get().check_transfer(&snapshot).map_err(|error| {
            log::debug!(
                target: LOG_TARGET,
                "transfer of {amount} from {from:?} to {to:?} rejected: {error:?}",
            );
            Error::<T>::from(error).into()
        })
    }

    /// Guard, balance check, then the balance writes. Nothing is written
    /// unless every check passed.
    fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::check_transfer(from, to, amount)?;

        let debited =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        if from != to {
            let credited =
                Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::ArithmeticError)?;
            Self::write_balance(from, debited);
            Self::write_balance(to, credited);
        }

        Self::deposit_event(Event::Transfer {
            from: Some(from.clone()),
            to: Some(to.clone()),
            amount,
        });
        Ok(())
    }

    fn do_burn(who: &T::AccountId, amount: u128) -> DispatchResult {
        let debited =
            Balances::<T>::get(who).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        let supply =
            TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::ArithmeticError)?;

        Self::write_balance(who, debited);
        TotalSupply::<T>::put(supply);

        Self::deposit_event(Event::Transfer { from: Some(who.clone()), to: None, amount });
        Ok(())
    }
}

#[cfg(any(feature = "try-runtime", test))]
impl<T: Config> Pallet<T> {
    /// Ledger invariants that must hold after every block.
    pub(crate) fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or(DispatchError::Other("sum of balances overflows"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            DispatchError::Other("sum of balances differs from total supply")
        );
        if let Some(owner) = Owner::<T>::get() {
            ensure!(
                !Self::is_null_account(&owner),
                DispatchError::Other("owner is the null account")
            );
        }
        ensure!(
            Initialized::<T>::get() || TotalSupply::<T>::get() == 0,
            DispatchError::Other("supply exists without initialization")
        );
        Ok(())
    }
}
