//! Address Form Component
//!
//! Controlled address form. Required fields are checked before `on_submit`
//! fires; each error clears as soon as its field is edited.

use leptos::prelude::*;

use crate::forms::{AddressDraft, AddressField, FieldErrors};
use crate::models::Address;

#[component]
pub fn AddressForm(
    /// Address to edit; `None` starts a blank form
    address: Option<Address>,
    #[prop(into)] on_submit: Callback<AddressDraft>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let form = RwSignal::new(address.as_ref().map(AddressDraft::from_address).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::default());

    let text_field = move |field: AddressField, label: &'static str, placeholder: &'static str, kind: &'static str| {
        view! {
            <div class="form-field">
                <label>{label}</label>
                <input
                    type=kind
                    placeholder=placeholder
                    class:invalid=move || errors.with(|e| e.get(field).is_some())
                    disabled=move || is_loading.get()
                    prop:value=move || form.with(|f| f.get(field).to_string())
                    on:input=move |ev| {
                        form.update(|f| f.set(field, event_target_value(&ev)));
                        errors.update(|e| e.clear(field));
                    }
                />
                {move || errors.with(|e| e.get(field)).map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>
        }
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let found = form.with_untracked(AddressDraft::validate);
        if found.is_empty() {
            on_submit.run(form.get_untracked());
        } else {
            errors.set(found);
        }
    };

    view! {
        <form class="address-form" on:submit=on_form_submit>
            {text_field(AddressField::PhoneNumber, "Số điện thoại *", "Nhập số điện thoại", "tel")}
            {text_field(AddressField::AddressLine1, "Địa chỉ *", "Số nhà, tên đường, phường/xã", "text")}
            {text_field(AddressField::AddressLine2, "Địa chỉ bổ sung", "Căn hộ, tòa nhà, tầng, v.v.", "text")}
            {text_field(AddressField::City, "Thành phố / Tỉnh *", "Nhập thành phố / tỉnh", "text")}
            {text_field(AddressField::PostalCode, "Mã bưu điện *", "Nhập mã bưu điện", "text")}
            {text_field(AddressField::Country, "Quốc gia *", "Nhập quốc gia", "text")}

            <label class="form-checkbox">
                <input
                    type="checkbox"
                    disabled=move || is_loading.get()
                    prop:checked=move || form.with(|f| f.is_default_shipping)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.is_default_shipping = checked);
                    }
                />
                "Đặt làm địa chỉ giao hàng mặc định"
            </label>

            <div class="form-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || is_loading.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Hủy"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Đang lưu..." } else { "Lưu địa chỉ" }}
                </button>
            </div>
        </form>
    }
}
