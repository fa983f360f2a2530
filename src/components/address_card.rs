//! Address Card Component

use leptos::prelude::*;

use super::delete_confirm_button::DeleteConfirmButton;
use crate::models::Address;

#[component]
pub fn AddressCard(
    address: Address,
    is_default: bool,
    /// Delete request for this address in flight
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] on_edit: Callback<Address>,
    #[prop(into)] on_delete: Callback<i64>,
    #[prop(into)] on_set_default: Callback<i64>,
) -> impl IntoView {
    let id = address.address_id;
    let city_line = format!("{}, {}", address.city, address.postal_code);
    let for_edit = address.clone();

    view! {
        <div class="address-card" class:default=is_default>
            {is_default.then(|| view! { <span class="address-default-badge">"Mặc định"</span> })}

            <div class="address-body">
                {(!address.phone_number.is_empty()).then(|| {
                    let phone = address.phone_number.clone();
                    view! { <p class="address-phone">{phone}</p> }
                })}
                <p class="address-line1">{address.address_line1.clone()}</p>
                {address
                    .address_line2
                    .clone()
                    .filter(|l| !l.is_empty())
                    .map(|line| view! { <p class="address-line2">{line}</p> })}
                <p>{city_line}</p>
                <p>{address.country.clone()}</p>
            </div>

            <div class="address-actions">
                <div class="address-actions-left">
                    <button class="btn btn-secondary" on:click=move |_| on_edit.run(for_edit.clone())>
                        "Sửa"
                    </button>
                    <DeleteConfirmButton
                        button_class="btn btn-danger"
                        disabled=deleting
                        on_confirm=move |_| on_delete.run(id)
                    />
                </div>
                {(!is_default).then(|| view! {
                    <button class="btn btn-outline" on:click=move |_| on_set_default.run(id)>
                        "Đặt làm mặc định"
                    </button>
                })}
            </div>
        </div>
    }
}
