//! Bowl template CRUD, including the ordered step editor.

use api::services::categories::list_categories;
use api::services::templates::{
    create_template, delete_template, list_templates, update_template, TemplateInput,
    TemplateStepInput,
};
use api::{BowlTemplate, Category};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay, Select};
use ui::{push_toast, use_toasts, ToastLevel};

#[component]
pub fn AdminTemplates() -> Element {
    let mut toasts = use_toasts();
    let mut reload = use_signal(|| 0u32);
    let mut editing = use_signal(|| Option::<Option<BowlTemplate>>::None);
    let mut deleting = use_signal(|| Option::<BowlTemplate>::None);

    let list = use_resource(move || async move {
        reload();
        list_templates().await.ok()
    });
    let categories = use_resource(|| async move {
        list_categories(String::new(), 0, 100)
            .await
            .map(|page| page.items)
            .unwrap_or_default()
    });

    let handle_delete = move |_| {
        let Some(template) = deleting() else {
            return;
        };
        deleting.set(None);
        spawn(async move {
            match delete_template(template.id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Template deleted");
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
                h1 { "Bowl templates" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| editing.set(Some(None)),
                    "New template"
                }
            }

            match list() {
                None => rsx! { p { class: "loading", "Loading..." } },
                Some(None) => rsx! { p { class: "form-error", "Could not load templates" } },
                Some(Some(templates)) => rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Base price" }
                                th { "Steps" }
                                th {}
                            }
                        }
                        tbody {
                            for template in templates.iter() {
                                tr {
                                    key: "{template.id}",
                                    td { "{template.name}" }
                                    td { {format!("${:.2}", template.base_price)} }
                                    td {
                                        {template
                                            .steps
                                            .iter()
                                            .map(|s| s.label.as_str())
                                            .collect::<Vec<_>>()
                                            .join(" → ")}
                                    }
                                    td {
                                        class: "row-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let template = template.clone();
                                                move |_| editing.set(Some(Some(template.clone())))
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Danger,
                                            onclick: {
                                                let template = template.clone();
                                                move |_| deleting.set(Some(template.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }

            if let Some(existing) = editing() {
                TemplateForm {
                    existing: existing,
                    categories: categories().unwrap_or_default(),
                    onsaved: move |_| {
                        editing.set(None);
                        reload += 1;
                    },
                    oncancel: move |_| editing.set(None),
                }
            }

            if let Some(template) = deleting() {
                ConfirmDialog {
                    title: "Delete template",
                    message: format!("Delete \"{}\"? Customers can no longer start it.", template.name),
                    on_confirm: handle_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}

/// One editable step row in the form, all fields as raw strings.
#[derive(Clone, PartialEq, Default)]
struct StepRow {
    label: String,
    category_id: String,
    min: String,
    max: String,
}

impl StepRow {
    fn from_step(step: &api::TemplateStep) -> Self {
        Self {
            label: step.label.clone(),
            category_id: step.category_id.clone(),
            min: step.min_selections.to_string(),
            max: step.max_selections.to_string(),
        }
    }

    fn into_input(self, position: u32) -> Result<TemplateStepInput, String> {
        if self.label.trim().is_empty() {
            return Err(format!("Step {} needs a label", position + 1));
        }
        if self.category_id.is_empty() {
            return Err(format!("Step {} needs a category", position + 1));
        }
        let min = self.min.trim().parse::<u32>().unwrap_or(1);
        let max = self.max.trim().parse::<u32>().unwrap_or(1);
        if max < min {
            return Err(format!("Step {}: max below min", position + 1));
        }
        Ok(TemplateStepInput {
            label: self.label.trim().to_string(),
            category_id: self.category_id,
            position,
            min_selections: min,
            max_selections: max,
        })
    }
}

#[component]
fn TemplateForm(
    existing: Option<BowlTemplate>,
    categories: Vec<Category>,
    onsaved: EventHandler<()>,
    oncancel: EventHandler<()>,
) -> Element {
    let id = existing.as_ref().map(|t| t.id.clone());
    let mut name = use_signal(|| existing.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let mut description = use_signal(|| {
        existing
            .as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_default()
    });
    let mut base_price = use_signal(|| {
        existing
            .as_ref()
            .map(|t| t.base_price.to_string())
            .unwrap_or_default()
    });
    let mut steps = use_signal(|| {
        existing
            .as_ref()
            .map(|t| t.steps.iter().map(StepRow::from_step).collect::<Vec<_>>())
            .unwrap_or_default()
    });
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
            let Ok(price) = base_price().trim().parse::<f64>() else {
                error.set(Some("Base price must be a number".to_string()));
                return;
            };

            let mut step_inputs = Vec::new();
            for (position, row) in steps().into_iter().enumerate() {
                match row.into_input(position as u32) {
                    Ok(input) => step_inputs.push(input),
                    Err(e) => {
                        error.set(Some(e));
                        return;
                    }
                }
            }

            let input = TemplateInput {
                name: n,
                description: {
                    let d = description().trim().to_string();
                    (!d.is_empty()).then_some(d)
                },
                base_price: price,
                steps: step_inputs,
            };

            saving.set(true);
            let result = match id {
                Some(id) => update_template(id, input).await.map(|_| ()),
                None => create_template(input).await.map(|_| ()),
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

                h2 { if existing.is_some() { "Edit template" } else { "New template" } }

                if let Some(err) = error() {
                    div { class: "form-error-banner", "{err}" }
                }

                Label { html_for: "tpl-name", "Name" }
                Input {
                    id: "tpl-name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                Label { html_for: "tpl-description", "Description" }
                Input {
                    id: "tpl-description",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }

                Label { html_for: "tpl-price", "Base price" }
                Input {
                    id: "tpl-price",
                    r#type: "number",
                    value: base_price(),
                    oninput: move |evt: FormEvent| base_price.set(evt.value()),
                }

                h3 { "Steps" }
                for (index, row) in steps().iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "step-editor-row",

                        Input {
                            placeholder: "Step label",
                            value: row.label.clone(),
                            oninput: move |evt: FormEvent| steps.write()[index].label = evt.value(),
                        }
                        Select {
                            value: row.category_id.clone(),
                            options: {
                                let mut options = vec![(String::new(), "Category...".to_string())];
                                options.extend(category_options.clone());
                                options
                            },
                            onchange: move |v| steps.write()[index].category_id = v,
                        }
                        Input {
                            r#type: "number",
                            placeholder: "Min",
                            value: row.min.clone(),
                            oninput: move |evt: FormEvent| steps.write()[index].min = evt.value(),
                        }
                        Input {
                            r#type: "number",
                            placeholder: "Max",
                            value: row.max.clone(),
                            oninput: move |evt: FormEvent| steps.write()[index].max = evt.value(),
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| { steps.write().remove(index); },
                            "Remove"
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| steps.write().push(StepRow {
                        min: "1".to_string(),
                        max: "1".to_string(),
                        ..StepRow::default()
                    }),
                    "Add step"
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
