//! User management. Accounts are created through registration; admins edit
//! role, goal, and status, or delete.

use api::services::users::{delete_user, list_users, update_user, UserInput};
use api::{GoalCode, Role, User, UserStatus};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay, Pagination, SearchBox, Select,
};
use ui::{push_toast, use_toasts, ToastLevel};

use super::PAGE_SIZE;

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Customer => "Customer",
        Role::Admin => "Admin",
    }
}

fn status_label(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "Active",
        UserStatus::Unverified => "Unverified",
        UserStatus::Banned => "Banned",
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let mut toasts = use_toasts();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 0u32);
    let mut reload = use_signal(|| 0u32);
    let mut editing = use_signal(|| Option::<User>::None);
    let mut deleting = use_signal(|| Option::<User>::None);

    let list = use_resource(move || async move {
        reload();
        list_users(search(), page(), PAGE_SIZE).await.ok()
    });

    let handle_delete = move |_| {
        let Some(user) = deleting() else {
            return;
        };
        deleting.set(None);
        spawn(async move {
            match delete_user(user.id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "User deleted");
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
                h1 { "Users" }
                SearchBox {
                    value: search(),
                    oninput: move |v| {
                        search.set(v);
                        page.set(0);
                    },
                }
            }

            match list() {
                None => rsx! { p { class: "loading", "Loading..." } },
                Some(None) => rsx! { p { class: "form-error", "Could not load users" } },
                Some(Some(users)) => rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                                th { "Goal" }
                                th { "Status" }
                                th {}
                            }
                        }
                        tbody {
                            for user in users.items.iter() {
                                tr {
                                    key: "{user.id}",
                                    td { "{user.name}" }
                                    td { "{user.email}" }
                                    td { {role_label(user.role)} }
                                    td { {user.goal.map(|g| g.label()).unwrap_or("—")} }
                                    td { {status_label(user.status)} }
                                    td {
                                        class: "row-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let user = user.clone();
                                                move |_| editing.set(Some(user.clone()))
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Danger,
                                            onclick: {
                                                let user = user.clone();
                                                move |_| deleting.set(Some(user.clone()))
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
                        total_pages: users.total_pages,
                        onchange: move |p| page.set(p),
                    }
                },
            }

            if let Some(user) = editing() {
                UserForm {
                    existing: user,
                    onsaved: move |_| {
                        editing.set(None);
                        reload += 1;
                    },
                    oncancel: move |_| editing.set(None),
                }
            }

            if let Some(user) = deleting() {
                ConfirmDialog {
                    title: "Delete user",
                    message: format!("Delete {}? Their orders remain on record.", user.email),
                    on_confirm: handle_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    }
}

#[component]
fn UserForm(existing: User, onsaved: EventHandler<()>, oncancel: EventHandler<()>) -> Element {
    let id = existing.id.clone();
    let mut name = use_signal(|| existing.name.clone());
    let mut email = use_signal(|| existing.email.clone());
    let mut role = use_signal(|| existing.role);
    let mut goal = use_signal(|| existing.goal);
    let mut status = use_signal(|| existing.status);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = id.clone();
        spawn(async move {
            let n = name().trim().to_string();
            let e = email().trim().to_lowercase();
            if n.is_empty() || e.is_empty() {
                error.set(Some("Name and email are required".to_string()));
                return;
            }

            let input = UserInput {
                name: n,
                email: e,
                role: role(),
                goal: goal(),
                status: status(),
            };

            saving.set(true);
            match update_user(id, input).await {
                Ok(_) => onsaved.call(()),
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

                h2 { "Edit user" }

                if let Some(err) = error() {
                    div { class: "form-error-banner", "{err}" }
                }

                Label { html_for: "user-name", "Name" }
                Input {
                    id: "user-name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                Label { html_for: "user-email", "Email" }
                Input {
                    id: "user-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Label { html_for: "user-role", "Role" }
                Select {
                    id: "user-role",
                    value: role_label(role()).to_string(),
                    options: vec![
                        ("Customer".to_string(), "Customer".to_string()),
                        ("Admin".to_string(), "Admin".to_string()),
                    ],
                    onchange: move |v: String| {
                        role.set(if v == "Admin" { Role::Admin } else { Role::Customer });
                    },
                }

                Label { html_for: "user-goal", "Goal" }
                Select {
                    id: "user-goal",
                    value: goal().map(|g| g.label().to_string()).unwrap_or_default(),
                    options: {
                        let mut options = vec![(String::new(), "None".to_string())];
                        options.extend(
                            GoalCode::ALL
                                .iter()
                                .map(|g| (g.label().to_string(), g.label().to_string())),
                        );
                        options
                    },
                    onchange: move |v: String| {
                        goal.set(GoalCode::ALL.iter().copied().find(|g| g.label() == v));
                    },
                }

                Label { html_for: "user-status", "Status" }
                Select {
                    id: "user-status",
                    value: status_label(status()).to_string(),
                    options: vec![
                        ("Active".to_string(), "Active".to_string()),
                        ("Unverified".to_string(), "Unverified".to_string()),
                        ("Banned".to_string(), "Banned".to_string()),
                    ],
                    onchange: move |v: String| {
                        status.set(match v.as_str() {
                            "Unverified" => UserStatus::Unverified,
                            "Banned" => UserStatus::Banned,
                            _ => UserStatus::Active,
                        });
                    },
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
