//! Address Modal Component
//!
//! Address form inside the generic modal; titled for add or edit.

use leptos::prelude::*;

use super::address_form::AddressForm;
use super::modal::Modal;
use crate::forms::AddressDraft;
use crate::models::Address;

#[component]
pub fn AddressModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    /// Address being edited; `None` adds a new one
    #[prop(into)] address: Signal<Option<Address>>,
    #[prop(into)] on_submit: Callback<AddressDraft>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let title = Signal::derive(move || {
        if address.with(Option::is_some) {
            "Sửa địa chỉ".to_string()
        } else {
            "Thêm địa chỉ mới".to_string()
        }
    });

    view! {
        <Modal open=open title=title on_close=on_close>
            // Rebuild the form whenever the edited address changes
            {move || {
                view! {
                    <AddressForm
                        address=address.get()
                        on_submit=on_submit
                        on_cancel=on_close
                        is_loading=is_loading
                    />
                }
            }}
        </Modal>
    }
}
