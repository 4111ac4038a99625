//! Storage migrations for pallet-guarded-token.
//!
//! Storage only ever grows: an upgrade adds items after the existing ones and
//! never renames, re-keys or retypes what is already on chain. Each new item
//! comes with a bump of `STORAGE_VERSION` and a versioned migration here that
//! fills it in for ledgers written by older code.
//!
//! Wire migrations into the runtime's `Executive` in order:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     (pallet_guarded_token::migrations::v1::MigrateToV1<Runtime>,),
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Initialized, Owner, Pallet, TokenName, TotalSupply, LOG_TARGET};

#[cfg(feature = "try-runtime")]
use crate::Balances;

/// Version 1 adds the `Initialized` flag.
///
/// Version 0 ledgers had no explicit flag and treated any configured token as
/// set up. The migration records that, so `initialize` stays blocked on
/// chains that were already live.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> MigrateToV1<T> {
        /// Whether a version 0 ledger already went through its setup.
        fn was_set_up() -> bool {
            Owner::<T>::exists() || TotalSupply::<T>::get() > 0 || !TokenName::<T>::get().is_empty()
        }
    }

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            if on_chain_version >= 1 {
                log::info!(
                    target: LOG_TARGET,
                    "storage already at {on_chain_version:?}, skipping v1 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            let set_up = Self::was_set_up();
            if set_up {
                Initialized::<T>::put(true);
            }
            StorageVersion::new(1).put::<Pallet<T>>();

            log::info!(
                target: LOG_TARGET,
                "migrated storage to v1, existing ledger marked initialized: {set_up}"
            );
            T::DbWeight::get().reads_writes(4, 2)
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let supply = TotalSupply::<T>::get();
            let sum: u128 = Balances::<T>::iter_values().fold(0u128, |acc, b| acc.saturating_add(b));
            log::info!(
                target: LOG_TARGET,
                "pre-upgrade: version {:?}, supply {supply}",
                Pallet::<T>::on_chain_storage_version()
            );
            Ok((Self::was_set_up(), supply, sum).encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (set_up, supply, sum): (bool, u128, u128) = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("failed to decode pre-state"))?;

            ensure!(
                Pallet::<T>::on_chain_storage_version() >= 1,
                sp_runtime::TryRuntimeError::Other("migration to v1 did not complete")
            );
            ensure!(
                TotalSupply::<T>::get() == supply,
                sp_runtime::TryRuntimeError::Other("total supply changed during migration")
            );
            let post_sum: u128 =
                Balances::<T>::iter_values().fold(0u128, |acc, b| acc.saturating_add(b));
            ensure!(
                post_sum == sum,
                sp_runtime::TryRuntimeError::Other("balances changed during migration")
            );
            if set_up {
                ensure!(
                    Initialized::<T>::get(),
                    sp_runtime::TryRuntimeError::Other("configured ledger left uninitialized")
                );
            }
            Ok(())
        }
    }
}
