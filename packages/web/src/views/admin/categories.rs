//! Ingredient category CRUD.

use api::services::categories::{
    create_category, delete_category, list_categories, update_category, CategoryInput,
};
use api::Category;
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay, Pagination, SearchBox,
};
use ui::{push_toast, use_toasts, ToastLevel};

use super::PAGE_SIZE;

#[component]
pub fn AdminCategories() -> Element {
    let mut toasts = use_toasts();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 0u32);
    let mut reload = use_signal(|| 0u32);
    // None: closed. Some(None): create. Some(Some(c)): edit.
    let mut editing = use_signal(|| Option::<Option<Category>>::None);
    let mut deleting = use_signal(|| Option::<Category>::None);

    let list = use_resource(move || async move {
        reload();
        list_categories(search(), page(), PAGE_SIZE).await.ok()
    });

    let handle_delete = move |_| {
        let Some(category) = deleting() else {
            return;
        };
        deleting.set(None);
        spawn(async move {
            match delete_category(category.id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Category deleted");
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
                h1 { "Categories" }
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
                        "New category"
                    }
                }
            }

            match list() {
                None => rsx! { p { class: "loading", "Loading..." } },
                Some(None) => rsx! { p { class: "form-error", "Could not load categories" } },
                Some(Some(categories)) => rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Description" }
                                th {}
                            }
                        }
                        tbody {
                            for category in categories.items.iter() {
                                tr {
                                    key: "{category.id}",
                                    td { "{category.name}" }
                                    td { {category.description.clone().unwrap_or_default()} }
                                    td {
                                        class: "row-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let category = category.clone();
                                                move |_| editing.set(Some(Some(category.clone())))
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Danger,
                                            onclick: {
                                                let category = category.clone();
                                                move |_| deleting.set(Some(category.clone()))
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
                        total_pages: categories.total_pages,
                        onchange: move |p| page.set(p),
                    }
                },
            }

            if let Some(existing) = editing() {
                CategoryForm {
                    existing: existing,
                    onsaved: move |_| {
                        editing.set(None);
                        reload += 1;
                    },
                    oncancel: move |_| editing.set(None),
                }
            }

            if let Some(category) = deleting() {
                ConfirmDialog {
                    title: "Delete category",
                    message: format!("Delete \"{}\"? Ingredients in it keep their data.", category.name),
                    on_confirm: handle_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}

#[component]
fn CategoryForm(
    existing: Option<Category>,
    onsaved: EventHandler<()>,
    oncancel: EventHandler<()>,
) -> Element {
    let id = existing.as_ref().map(|c| c.id.clone());
    let mut name = use_signal(|| existing.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let mut description = use_signal(|| {
        existing
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = id.clone();
        spawn(async move {
            let n = name().trim().to_string();
            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }

            let input = CategoryInput {
                name: n,
                description: {
                    let d = description().trim().to_string();
                    (!d.is_empty()).then_some(d)
                },
            };

            saving.set(true);
            let result = match id {
                Some(id) => update_category(id, input).await.map(|_| ()),
                None => create_category(input).await.map(|_| ()),
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

                h2 { if existing.is_some() { "Edit category" } else { "New category" } }

                if let Some(err) = error() {
                    div { class: "form-error-banner", "{err}" }
                }

                Label { html_for: "category-name", "Name" }
                Input {
                    id: "category-name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                Label { html_for: "category-description", "Description" }
                Input {
                    id: "category-description",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
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
