/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use dioxus::prelude::*;
use webcraft_store::{Registration, View};

use crate::{navigate_later, use_navigator, use_services};

const REDIRECT_DELAY_MS: u32 = 1500;

#[derive(Clone, PartialEq)]
struct Message {
    text: String,
    error: bool,
}

impl Message {
    fn error(text: impl ToString) -> Self {
        Self { text: text.to_string(), error: true }
    }

    fn success(text: &str) -> Self {
        Self { text: text.to_string(), error: false }
    }
}

#[component]
pub fn Login(signup: bool) -> Element {
    let services = use_services();
    let view = use_navigator();
    let mut registering = use_signal(|| signup);
    let mut message = use_signal(|| None::<Message>);

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut reg = use_signal(Registration::default);

    let accounts = services.accounts();
    let on_login = move |evt: FormEvent| {
        evt.prevent_default();
        match accounts.login(&username(), &password()) {
            Ok(_) => {
                message.set(Some(Message::success("Login successful! Redirecting to dashboard...")));
                navigate_later(view, View::Dashboard, REDIRECT_DELAY_MS);
            }
            Err(err) => message.set(Some(Message::error(err))),
        }
    };

    let accounts = services.accounts();
    let on_register = move |evt: FormEvent| {
        evt.prevent_default();
        match accounts.register(&reg.read()) {
            Ok(_) => {
                message.set(Some(Message::success("Registration successful! Redirecting to dashboard...")));
                navigate_later(view, View::Dashboard, REDIRECT_DELAY_MS);
            }
            Err(err) => message.set(Some(Message::error(err))),
        }
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { if registering() { "Create an account" } else { "Welcome back" } }

                if let Some(msg) = message() {
                    div {
                        class: if msg.error { "auth-message error" } else { "auth-message success" },
                        span { "{msg.text}" }
                        button {
                            class: "icon-btn",
                            onclick: move |_| message.set(None),
                            "✕"
                        }
                    }
                }

                if registering() {
                    form {
                        onsubmit: on_register,
                        div {
                            class: "control-group",
                            label { "Username" }
                            input {
                                r#type: "text",
                                value: "{reg.read().username}",
                                oninput: move |evt| reg.write().username = evt.value(),
                            }
                        }
                        div {
                            class: "control-group",
                            label { "Email" }
                            input {
                                r#type: "email",
                                value: "{reg.read().email}",
                                oninput: move |evt| reg.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "control-group",
                            label { "Password" }
                            input {
                                r#type: "password",
                                value: "{reg.read().password}",
                                oninput: move |evt| reg.write().password = evt.value(),
                            }
                        }
                        div {
                            class: "control-group",
                            label { "Confirm Password" }
                            input {
                                r#type: "password",
                                value: "{reg.read().confirm}",
                                oninput: move |evt| reg.write().confirm = evt.value(),
                            }
                        }
                        button { class: "primary-btn", r#type: "submit", "Sign Up" }
                    }
                    p {
                        "Already have an account? "
                        button {
                            class: "link-btn",
                            onclick: move |_| registering.set(false),
                            "Log in"
                        }
                    }
                } else {
                    form {
                        onsubmit: on_login,
                        div {
                            class: "control-group",
                            label { "Username" }
                            input {
                                r#type: "text",
                                value: "{username}",
                                oninput: move |evt| username.set(evt.value()),
                            }
                        }
                        div {
                            class: "control-group",
                            label { "Password" }
                            input {
                                r#type: "password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                        button { class: "primary-btn", r#type: "submit", "Login" }
                    }
                    p {
                        "Don't have an account? "
                        button {
                            class: "link-btn",
                            onclick: move |_| registering.set(true),
                            "Sign up"
                        }
                    }
                }
            }
        }
    }
}
