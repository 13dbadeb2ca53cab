//! Promotion code CRUD.

use api::services::promotions::{
    create_promotion, delete_promotion, list_promotions, update_promotion, PromotionInput,
};
use api::Promotion;
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay, Pagination, SearchBox,
};
use ui::{push_toast, use_toasts, ToastLevel};

use super::PAGE_SIZE;

#[component]
pub fn AdminPromotions() -> Element {
    let mut toasts = use_toasts();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 0u32);
    let mut reload = use_signal(|| 0u32);
    let mut editing = use_signal(|| Option::<Option<Promotion>>::None);
    let mut deleting = use_signal(|| Option::<Promotion>::None);

    let list = use_resource(move || async move {
        reload();
        list_promotions(search(), page(), PAGE_SIZE).await.ok()
    });

    let handle_delete = move |_| {
        let Some(promotion) = deleting() else {
            return;
        };
        deleting.set(None);
        spawn(async move {
            match delete_promotion(promotion.id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Promotion deleted");
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
                h1 { "Promotions" }
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
                        "New promotion"
                    }
                }
            }

            match list() {
                None => rsx! { p { class: "loading", "Loading..." } },
                Some(None) => rsx! { p { class: "form-error", "Could not load promotions" } },
                Some(Some(promotions)) => rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "Code" }
                                th { "Description" }
                                th { "Discount" }
                                th { "Active" }
                                th {}
                            }
                        }
                        tbody {
                            for promotion in promotions.items.iter() {
                                tr {
                                    key: "{promotion.id}",
                                    td { code { "{promotion.code}" } }
                                    td { "{promotion.description}" }
                                    td { {format!("{}%", promotion.discount_percent)} }
                                    td { if promotion.active { "Yes" } else { "No" } }
                                    td {
                                        class: "row-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let promotion = promotion.clone();
                                                move |_| editing.set(Some(Some(promotion.clone())))
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Danger,
                                            onclick: {
                                                let promotion = promotion.clone();
                                                move |_| deleting.set(Some(promotion.clone()))
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
                        total_pages: promotions.total_pages,
                        onchange: move |p| page.set(p),
                    }
                },
            }

            if let Some(existing) = editing() {
                PromotionForm {
                    existing: existing,
                    onsaved: move |_| {
                        editing.set(None);
                        reload += 1;
                    },
                    oncancel: move |_| editing.set(None),
                }
            }

            if let Some(promotion) = deleting() {
                ConfirmDialog {
                    title: "Delete promotion",
                    message: format!("Delete code \"{}\"?", promotion.code),
                    on_confirm: handle_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}

#[component]
fn PromotionForm(
    existing: Option<Promotion>,
    onsaved: EventHandler<()>,
    oncancel: EventHandler<()>,
) -> Element {
    let id = existing.as_ref().map(|p| p.id.clone());
    let mut code = use_signal(|| existing.as_ref().map(|p| p.code.clone()).unwrap_or_default());
    let mut description = use_signal(|| {
        existing
            .as_ref()
            .map(|p| p.description.clone())
            .unwrap_or_default()
    });
    let mut discount = use_signal(|| {
        existing
            .as_ref()
            .map(|p| p.discount_percent.to_string())
            .unwrap_or_default()
    });
    let mut active = use_signal(|| existing.as_ref().map(|p| p.active).unwrap_or(true));
    let mut starts_at = use_signal(|| {
        existing
            .as_ref()
            .and_then(|p| p.starts_at.clone())
            .unwrap_or_default()
    });
    let mut ends_at = use_signal(|| {
        existing
            .as_ref()
            .and_then(|p| p.ends_at.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = id.clone();
        spawn(async move {
            let c = code().trim().to_uppercase();
            if c.is_empty() {
                error.set(Some("Code is required".to_string()));
                return;
            }
            let percent = match discount().trim().parse::<f64>() {
                Ok(p) if (0.0..=100.0).contains(&p) => p,
                _ => {
                    error.set(Some("Discount must be a percentage between 0 and 100".to_string()));
                    return;
                }
            };

            let input = PromotionInput {
                code: c,
                description: description().trim().to_string(),
                discount_percent: percent,
                active: active(),
                starts_at: {
                    let s = starts_at().trim().to_string();
                    (!s.is_empty()).then_some(s)
                },
                ends_at: {
                    let e = ends_at().trim().to_string();
                    (!e.is_empty()).then_some(e)
                },
            };

            saving.set(true);
            let result = match id {
                Some(id) => update_promotion(id, input).await.map(|_| ()),
                None => create_promotion(input).await.map(|_| ()),
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

                h2 { if existing.is_some() { "Edit promotion" } else { "New promotion" } }

                if let Some(err) = error() {
                    div { class: "form-error-banner", "{err}" }
                }

                Label { html_for: "promo-code", "Code" }
                Input {
                    id: "promo-code",
                    placeholder: "SUMMER20",
                    value: code(),
                    oninput: move |evt: FormEvent| code.set(evt.value()),
                }

                Label { html_for: "promo-description", "Description" }
                Input {
                    id: "promo-description",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }

                Label { html_for: "promo-discount", "Discount (%)" }
                Input {
                    id: "promo-discount",
                    r#type: "number",
                    value: discount(),
                    oninput: move |evt: FormEvent| discount.set(evt.value()),
                }

                Label { html_for: "promo-starts", "Starts" }
                Input {
                    id: "promo-starts",
                    r#type: "date",
                    value: starts_at(),
                    oninput: move |evt: FormEvent| starts_at.set(evt.value()),
                }

                Label { html_for: "promo-ends", "Ends" }
                Input {
                    id: "promo-ends",
                    r#type: "date",
                    value: ends_at(),
                    oninput: move |evt: FormEvent| ends_at.set(evt.value()),
                }

                label {
                    class: "form-checkbox",
                    input {
                        r#type: "checkbox",
                        checked: active(),
                        onchange: move |evt: FormEvent| active.set(evt.checked()),
                    }
                    "Active"
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
