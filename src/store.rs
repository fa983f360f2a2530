//! Address Book Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the profile page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Address, AddressList};

/// Address book state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ProfileState {
    /// Saved addresses as last loaded
    pub addresses: Vec<Address>,
    /// Default shipping address reported by the list endpoint
    pub default_address_id: Option<i64>,
    /// List request in flight
    pub loading: bool,
    /// Create/update request in flight
    pub saving: bool,
    /// Address whose delete request is in flight
    pub deleting: Option<i64>,
    /// Address modal visible
    pub modal_open: bool,
    /// Address being edited (None = adding a new one)
    pub editing: Option<Address>,
}

/// Type alias for the store
pub type ProfileStore = Store<ProfileState>;

/// Get the profile store from context
pub fn use_profile_store() -> ProfileStore {
    expect_context::<ProfileStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list after a (re)load
pub fn store_set_addresses(store: &ProfileStore, list: AddressList) {
    store.addresses().set(list.addresses);
    store.default_address_id().set(list.default_address_id);
}

/// Whether an address is the default shipping address
pub fn store_is_default(store: &ProfileStore, address: &Address) -> bool {
    store.default_address_id().get() == Some(address.address_id) || address.is_default_shipping
}

/// Whether `address_id` is the address currently being deleted
pub fn delete_in_flight(deleting: Option<i64>, address_id: i64) -> bool {
    deleting == Some(address_id)
}

pub fn store_is_deleting(store: &ProfileStore, address_id: i64) -> bool {
    delete_in_flight(store.deleting().get(), address_id)
}

/// Open the modal for a new address or for editing an existing one
pub fn store_open_editor(store: &ProfileStore, address: Option<Address>) {
    store.editing().set(address);
    store.modal_open().set(true);
}

pub fn store_close_editor(store: &ProfileStore) {
    store.modal_open().set(false);
    store.editing().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_in_flight_matches_only_that_address() {
        assert!(delete_in_flight(Some(4), 4));
        assert!(!delete_in_flight(Some(4), 5));
        assert!(!delete_in_flight(None, 4));
    }
}
