//! Profile Page
//!
//! Account details form plus the address book.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use reactive_stores::Store;

use crate::api;
use crate::components::{AddressCard, AddressModal};
use crate::context::use_app_context;
use crate::forms::AddressDraft;
use crate::models::{Address, ProfileUpdate};
use crate::session::LOGIN_PATH;
use crate::store::{
    store_close_editor, store_is_default, store_is_deleting, store_open_editor, store_set_addresses,
    use_profile_store, ProfileState, ProfileStateStoreFields,
};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    provide_context(Store::new(ProfileState::default()));

    view! {
        <Show
            when=move || ctx.is_authenticated()
            fallback=|| view! { <AccessDenied /> }
        >
            <div class="profile-page">
                <h1>"Tài khoản của tôi"</h1>
                <ProfileForm />
                <AddressBook />
            </div>
        </Show>
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="page-state">
            <div class="page-state-icon">"🔒"</div>
            <h1>"Truy cập bị từ chối"</h1>
            <p>"Bạn cần đăng nhập để xem trang này."</p>
            <A href=LOGIN_PATH>"Đăng nhập"</A>
        </div>
    }
}

/// Current profile values, or blanks when no user is stored
fn profile_values() -> ProfileUpdate {
    use_app_context()
        .user()
        .map(|u| ProfileUpdate::from(&u))
        .unwrap_or_default()
}

#[component]
fn ProfileForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(profile_values());
    let (saving, set_saving) = signal(false);
    let email = move || ctx.user().and_then(|u| u.email).unwrap_or_default();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let data = form.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            match api::update_user_profile(&data).await {
                Ok(user) => {
                    form.set(ProfileUpdate::from(&user));
                    ctx.update_user(user);
                    ctx.success("Cập nhật thông tin thành công");
                }
                Err(e) => {
                    log::error!("[PROFILE] Update failed: {}", e);
                    ctx.error(format!("Không thể cập nhật thông tin: {e}"));
                }
            }
            set_saving.set(false);
        });
    };

    let on_cancel = move |_| {
        form.set(ctx.user().map(|u| ProfileUpdate::from(&u)).unwrap_or_default());
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <h2>"Thông tin cá nhân"</h2>
            <p class="profile-greeting">
                {move || ctx.user().map(|u| format!("Xin chào, {}", u.display_name()))}
            </p>
            <label class="form-field">
                <span>"Email"</span>
                <input type="email" prop:value=email disabled=true />
            </label>
            <div class="form-row">
                <label class="form-field">
                    <span>"Họ"</span>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Tên"</span>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="form-field">
                <span>"Số điện thoại"</span>
                <input
                    type="tel"
                    prop:value=move || form.with(|f| f.phone_number.clone())
                    on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                />
            </label>
            <div class="form-actions">
                <button type="button" class="btn btn-outline" on:click=on_cancel disabled=saving>
                    "Hủy"
                </button>
                <button type="submit" class="btn btn-primary" disabled=saving>
                    {move || if saving.get() { "Đang lưu..." } else { "Lưu thay đổi" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn AddressBook() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_profile_store();

    // Every mutation ends with a full reload
    let reload = move || {
        store.loading().set(true);
        spawn_local(async move {
            match api::get_addresses().await {
                Ok(list) => store_set_addresses(&store, list),
                Err(e) => {
                    log::error!("[PROFILE] Failed to load addresses: {}", e);
                    ctx.error(format!("Không thể tải danh sách địa chỉ: {e}"));
                }
            }
            store.loading().set(false);
        });
    };

    Effect::new(move |_| reload());

    let on_submit = Callback::new(move |draft: AddressDraft| {
        let data = draft.to_data();
        let editing_id = store.editing().with_untracked(|a| a.as_ref().map(|a| a.address_id));
        store.saving().set(true);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_address(id, &data)
                    .await
                    .map(|_| "Cập nhật địa chỉ thành công"),
                None => api::create_address(&data)
                    .await
                    .map(|_| "Thêm địa chỉ thành công"),
            };
            match result {
                Ok(message) => {
                    ctx.success(message);
                    store_close_editor(&store);
                    reload();
                }
                Err(e) => {
                    log::error!("[PROFILE] Failed to save address: {}", e);
                    ctx.error(format!("Không thể lưu địa chỉ: {e}"));
                }
            }
            store.saving().set(false);
        });
    });

    let on_delete = Callback::new(move |address_id: i64| {
        if store.deleting().get_untracked().is_some() {
            return;
        }
        store.deleting().set(Some(address_id));
        spawn_local(async move {
            match api::delete_address(address_id).await {
                Ok(()) => {
                    ctx.success("Đã xóa địa chỉ");
                    reload();
                }
                Err(e) => {
                    log::error!("[PROFILE] Failed to delete address {}: {}", address_id, e);
                    ctx.error(format!("Không thể xóa địa chỉ: {e}"));
                }
            }
            store.deleting().set(None);
        });
    });

    let on_set_default = Callback::new(move |address_id: i64| {
        spawn_local(async move {
            match api::set_default_address(address_id).await {
                Ok(()) => {
                    ctx.success("Đã đặt làm địa chỉ mặc định");
                    reload();
                }
                Err(e) => {
                    log::error!("[PROFILE] Failed to set default {}: {}", address_id, e);
                    ctx.error(format!("Không thể đặt địa chỉ mặc định: {e}"));
                }
            }
        });
    });

    let on_edit = Callback::new(move |address: Address| store_open_editor(&store, Some(address)));

    let address_list = move || {
        let addresses = store.addresses().get();
        if addresses.is_empty() {
            return view! { <p class="muted">"Bạn chưa có địa chỉ nào."</p> }.into_any();
        }
        addresses
            .into_iter()
            .map(|address| {
                let is_default = store_is_default(&store, &address);
                let id = address.address_id;
                view! {
                    <AddressCard
                        address=address
                        is_default=is_default
                        deleting=Signal::derive(move || store_is_deleting(&store, id))
                        on_edit=on_edit
                        on_delete=on_delete
                        on_set_default=on_set_default
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="address-book">
            <div class="section-header">
                <h2>"Sổ địa chỉ"</h2>
                <button class="btn btn-primary" on:click=move |_| store_open_editor(&store, None)>
                    "+ Thêm địa chỉ"
                </button>
            </div>

            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <p class="muted">"Đang tải địa chỉ..."</p> }
            >
                <div class="address-list">{address_list}</div>
            </Show>

            <AddressModal
                open=Signal::derive(move || store.modal_open().get())
                on_close=move |_| store_close_editor(&store)
                address=Signal::derive(move || store.editing().get())
                on_submit=on_submit
                is_loading=Signal::derive(move || store.saving().get())
            />
        </section>
    }
}
