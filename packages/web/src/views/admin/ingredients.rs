//! Ingredient CRUD. Deletion is optimistic: the row disappears immediately
//! and comes back, in place, if the backend rejects the call.

use api::media::UploadedImage;
use api::services::categories::list_categories;
use api::services::ingredients::{
    create_ingredient, delete_ingredient, list_ingredients, update_ingredient, IngredientInput,
};
use api::{Category, Ingredient, NutritionFacts};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay, Pagination, SearchBox, Select,
};
use ui::{optimistic, push_toast, use_toasts, ImageUpload, ToastLevel};

use super::PAGE_SIZE;

#[component]
pub fn AdminIngredients() -> Element {
    let mut toasts = use_toasts();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 0u32);
    let mut reload = use_signal(|| 0u32);
    // Local copy of the current page, so deletes can mutate it optimistically.
    let mut items = use_signal(Vec::<Ingredient>::new);
    let mut total_pages = use_signal(|| 0u32);
    let mut loading = use_signal(|| true);
    let mut editing = use_signal(|| Option::<Option<Ingredient>>::None);
    let mut deleting = use_signal(|| Option::<Ingredient>::None);

    // Categories for the form's select; loaded once.
    let categories = use_resource(|| async move {
        list_categories(String::new(), 0, 100)
            .await
            .map(|page| page.items)
            .unwrap_or_default()
    });

    let _loader = use_resource(move || async move {
        reload();
        loading.set(true);
        match list_ingredients(search(), page(), PAGE_SIZE).await {
            Ok(result) => {
                total_pages.set(result.total_pages);
                items.set(result.items);
            }
            Err(e) => {
                tracing::warn!("failed to load ingredients: {e}");
                items.set(Vec::new());
            }
        }
        loading.set(false);
    });

    let handle_delete = move |_| {
        let Some(ingredient) = deleting() else {
            return;
        };
        deleting.set(None);

        let id = ingredient.id.clone();
        let Some(removed) = optimistic::remove_where(&mut items.write(), |i| i.id == id) else {
            return;
        };
        spawn(async move {
            match delete_ingredient(id).await {
                Ok(()) => push_toast(&mut toasts, ToastLevel::Success, "Ingredient deleted"),
                Err(e) => {
                    optimistic::restore(&mut items.write(), removed);
                    push_toast(&mut toasts, ToastLevel::Error, &e.to_string());
                }
            }
        });
    };

    rsx! {
        div {
            class: "admin-page",

            header {
                class: "admin-header",
                h1 { "Ingredients" }
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
                        "New ingredient"
                    }
                }
            }

            if loading() {
                p { class: "loading", "Loading..." }
            } else {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            th {}
                            th { "Name" }
                            th { "Price" }
                            th { "Calories" }
                            th { "Available" }
                            th {}
                        }
                    }
                    tbody {
                        for ingredient in items().iter() {
                            tr {
                                key: "{ingredient.id}",
                                td {
                                    if let Some(url) = &ingredient.image_url {
                                        img { class: "table-thumb", src: "{url}", alt: "{ingredient.name}" }
                                    }
                                }
                                td { "{ingredient.name}" }
                                td { {format!("${:.2} / {}", ingredient.price, ingredient.unit)} }
                                td { {format!("{:.0} kcal", ingredient.nutrition.calories)} }
                                td { if ingredient.available { "Yes" } else { "No" } }
                                td {
                                    class: "row-actions",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let ingredient = ingredient.clone();
                                            move |_| editing.set(Some(Some(ingredient.clone())))
                                        },
                                        "Edit"
                                    }
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        onclick: {
                                            let ingredient = ingredient.clone();
                                            move |_| deleting.set(Some(ingredient.clone()))
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
                    total_pages: total_pages(),
                    onchange: move |p| page.set(p),
                }
            }

            if let Some(existing) = editing() {
                IngredientForm {
                    existing: existing,
                    categories: categories().unwrap_or_default(),
                    onsaved: move |_| {
                        editing.set(None);
                        reload += 1;
                    },
                    oncancel: move |_| editing.set(None),
                }
            }

            if let Some(ingredient) = deleting() {
                ConfirmDialog {
                    title: "Delete ingredient",
                    message: format!("Delete \"{}\"? Past orders keep their lines.", ingredient.name),
                    on_confirm: handle_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}

#[component]
fn IngredientForm(
    existing: Option<Ingredient>,
    categories: Vec<Category>,
    onsaved: EventHandler<()>,
    oncancel: EventHandler<()>,
) -> Element {
    let id = existing.as_ref().map(|i| i.id.clone());
    let mut name = use_signal(|| existing.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let mut unit = use_signal(|| existing.as_ref().map(|i| i.unit.clone()).unwrap_or_default());
    let mut price = use_signal(|| {
        existing
            .as_ref()
            .map(|i| i.price.to_string())
            .unwrap_or_default()
    });
    let mut category_id = use_signal(|| {
        existing
            .as_ref()
            .map(|i| i.category_id.clone())
            .unwrap_or_default()
    });
    let mut image = use_signal(|| {
        existing.as_ref().and_then(|i| {
            match (i.image_url.clone(), i.image_public_id.clone()) {
                (Some(secure_url), Some(public_id)) => Some(UploadedImage {
                    secure_url,
                    public_id,
                }),
                _ => None,
            }
        })
    });
    let mut calories = use_signal(|| {
        existing
            .as_ref()
            .map(|i| i.nutrition.calories.to_string())
            .unwrap_or_default()
    });
    let mut protein = use_signal(|| {
        existing
            .as_ref()
            .map(|i| i.nutrition.protein.to_string())
            .unwrap_or_default()
    });
    let mut carbs = use_signal(|| {
        existing
            .as_ref()
            .map(|i| i.nutrition.carbs.to_string())
            .unwrap_or_default()
    });
    let mut fat = use_signal(|| {
        existing
            .as_ref()
            .map(|i| i.nutrition.fat.to_string())
            .unwrap_or_default()
    });
    let mut available = use_signal(|| existing.as_ref().map(|i| i.available).unwrap_or(true));
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let category_options: Vec<(String, String)> = categories
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = id.clone();
        spawn(async move {
            let n = name().trim().to_string();
            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if category_id().is_empty() {
                error.set(Some("Pick a category".to_string()));
                return;
            }
            let Ok(p) = price().trim().parse::<f64>() else {
                error.set(Some("Price must be a number".to_string()));
                return;
            };
            let parse_macro = |raw: String| raw.trim().parse::<f64>().unwrap_or(0.0);

            let input = IngredientInput {
                name: n,
                unit: unit().trim().to_string(),
                price: p,
                category_id: category_id(),
                image_url: image().map(|i| i.secure_url),
                image_public_id: image().map(|i| i.public_id),
                nutrition: NutritionFacts {
                    calories: parse_macro(calories()),
                    protein: parse_macro(protein()),
                    carbs: parse_macro(carbs()),
                    fat: parse_macro(fat()),
                },
                available: available(),
            };

            saving.set(true);
            let result = match id {
                Some(id) => update_ingredient(id, input).await.map(|_| ()),
                None => create_ingredient(input).await.map(|_| ()),
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
                class: "admin-form admin-form-wide",
                onsubmit: handle_submit,

                h2 { if existing.is_some() { "Edit ingredient" } else { "New ingredient" } }

                if let Some(err) = error() {
                    div { class: "form-error-banner", "{err}" }
                }

                Label { html_for: "ing-name", "Name" }
                Input {
                    id: "ing-name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                Label { html_for: "ing-category", "Category" }
                Select {
                    id: "ing-category",
                    value: category_id(),
                    options: {
                        let mut options = vec![(String::new(), "Pick a category...".to_string())];
                        options.extend(category_options.clone());
                        options
                    },
                    onchange: move |v| category_id.set(v),
                }

                div {
                    class: "form-row",
                    div {
                        Label { html_for: "ing-price", "Price" }
                        Input {
                            id: "ing-price",
                            r#type: "number",
                            value: price(),
                            oninput: move |evt: FormEvent| price.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "ing-unit", "Unit" }
                        Input {
                            id: "ing-unit",
                            placeholder: "serving",
                            value: unit(),
                            oninput: move |evt: FormEvent| unit.set(evt.value()),
                        }
                    }
                }

                div {
                    class: "form-row",
                    div {
                        Label { html_for: "ing-calories", "Calories" }
                        Input {
                            id: "ing-calories",
                            r#type: "number",
                            value: calories(),
                            oninput: move |evt: FormEvent| calories.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "ing-protein", "Protein (g)" }
                        Input {
                            id: "ing-protein",
                            r#type: "number",
                            value: protein(),
                            oninput: move |evt: FormEvent| protein.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "ing-carbs", "Carbs (g)" }
                        Input {
                            id: "ing-carbs",
                            r#type: "number",
                            value: carbs(),
                            oninput: move |evt: FormEvent| carbs.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "ing-fat", "Fat (g)" }
                        Input {
                            id: "ing-fat",
                            r#type: "number",
                            value: fat(),
                            oninput: move |evt: FormEvent| fat.set(evt.value()),
                        }
                    }
                }

                Label { "Image" }
                ImageUpload {
                    value: image(),
                    onchange: move |v| image.set(v),
                }

                label {
                    class: "form-checkbox",
                    input {
                        r#type: "checkbox",
                        checked: available(),
                        onchange: move |evt: FormEvent| available.set(evt.checked()),
                    }
                    "Available in the wizard"
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
