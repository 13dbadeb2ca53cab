//! Store location CRUD.

use api::services::stores::{create_store, delete_store, list_stores, update_store, StoreInput};
use api::StoreLocation;
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay, Pagination, SearchBox,
};
use ui::{push_toast, use_toasts, ToastLevel};

use super::PAGE_SIZE;

#[component]
pub fn AdminStores() -> Element {
    let mut toasts = use_toasts();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 0u32);
    let mut reload = use_signal(|| 0u32);
    let mut editing = use_signal(|| Option::<Option<StoreLocation>>::None);
    let mut deleting = use_signal(|| Option::<StoreLocation>::None);

    let list = use_resource(move || async move {
        reload();
        list_stores(search(), page(), PAGE_SIZE).await.ok()
    });

    let handle_delete = move |_| {
        let Some(store) = deleting() else {
            return;
        };
        deleting.set(None);
        spawn(async move {
            match delete_store(store.id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Store deleted");
                    reload += 1;
                }
                Err(e) => push_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "admin-page",

            header {
                class: "admin-header",
                h1 { "Stores" }
                div {
                    class: "admin-header-actions",
                    SearchBox {
                        value: search(),
                        oninput: move |v| {
                            search.set(v);
                            page.set(0);
                        },
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| editing.set(Some(None)),
                        "New store"
                    }
                }
            }

            match list() {
                None => rsx! { p { class: "loading", "Loading..." } },
                Some(None) => rsx! { p { class: "form-error", "Could not load stores" } },
                Some(Some(stores)) => rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Address" }
                                th { "Phone" }
                                th { "Hours" }
                                th {}
                            }
                        }
                        tbody {
                            for store in stores.items.iter() {
                                tr {
                                    key: "{store.id}",
                                    td { "{store.name}" }
                                    td { "{store.address}" }
                                    td { {store.phone.clone().unwrap_or_default()} }
                                    td { {store.open_hours.clone().unwrap_or_default()} }
                                    td {
                                        class: "row-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let store = store.clone();
                                                move |_| editing.set(Some(Some(store.clone())))
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Danger,
                                            onclick: {
                                                let store = store.clone();
                                                move |_| deleting.set(Some(store.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Pagination {
                        page: page(),
                        total_pages: stores.total_pages,
                        onchange: move |p| page.set(p),
                    }
                },
            }

            if let Some(existing) = editing() {
                StoreForm {
                    existing: existing,
                    onsaved: move |_| {
                        editing.set(None);
                        reload += 1;
                    },
                    oncancel: move |_| editing.set(None),
                }
            }

            if let Some(store) = deleting() {
                ConfirmDialog {
                    title: "Delete store",
                    message: format!("Delete \"{}\"? Existing orders keep their store reference.", store.name),
                    on_confirm: handle_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}

#[component]
fn StoreForm(
    existing: Option<StoreLocation>,
    onsaved: EventHandler<()>,
    oncancel: EventHandler<()>,
) -> Element {
    let id = existing.as_ref().map(|s| s.id.clone());
    let mut name = use_signal(|| existing.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let mut address =
        use_signal(|| existing.as_ref().map(|s| s.address.clone()).unwrap_or_default());
    let mut phone = use_signal(|| {
        existing
            .as_ref()
            .and_then(|s| s.phone.clone())
            .unwrap_or_default()
    });
    let mut open_hours = use_signal(|| {
        existing
            .as_ref()
            .and_then(|s| s.open_hours.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = id.clone();
        spawn(async move {
            let n = name().trim().to_string();
            let a = address().trim().to_string();
            if n.is_empty() || a.is_empty() {
                error.set(Some("Name and address are required".to_string()));
                return;
            }

            let input = StoreInput {
                name: n,
                address: a,
                phone: {
                    let p = phone().trim().to_string();
                    (!p.is_empty()).then_some(p)
                },
                open_hours: {
                    let h = open_hours().trim().to_string();
                    (!h.is_empty()).then_some(h)
                },
            };

            saving.set(true);
            let result = match id {
                Some(id) => update_store(id, input).await.map(|_| ()),
                None => create_store(input).await.map(|_| ()),
            };
            match result {
                Ok(()) => onsaved.call(()),
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| oncancel.call(()),
            form {
                class: "admin-form",
                onsubmit: handle_submit,

                h2 { if existing.is_some() { "Edit store" } else { "New store" } }

                if let Some(err) = error() {
                    div { class: "form-error-banner", "{err}" }
                }

                Label { html_for: "store-name", "Name" }
                Input {
                    id: "store-name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                Label { html_for: "store-address", "Address" }
                Input {
                    id: "store-address",
                    value: address(),
                    oninput: move |evt: FormEvent| address.set(evt.value()),
                }

                Label { html_for: "store-phone", "Phone" }
                Input {
                    id: "store-phone",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }

                Label { html_for: "store-hours", "Opening hours" }
                Input {
                    id: "store-hours",
                    placeholder: "Mon-Fri 10:00-21:00",
                    value: open_hours(),
                    oninput: move |evt: FormEvent| open_hours.set(evt.value()),
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| oncancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
