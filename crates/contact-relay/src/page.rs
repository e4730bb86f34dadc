// File: src/page.rs
// Purpose: Server-rendered contact page and its no-JS form post

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use contact_form::{
    ContactForm, FieldEvent, FieldId, FieldState, NotificationKind, SubmitOutcome,
};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::collections::HashMap;
use tracing::debug;

use crate::relay::MailerRelay;
use crate::AppState;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 36rem; margin: 2rem auto; padding: 0 1rem; }
label { display: block; margin-top: 1rem; font-weight: 600; }
input, textarea { width: 100%; padding: .5rem; box-sizing: border-box; }
textarea { min-height: 8rem; }
.invalid { border-color: #b00020; }
.field-error { color: #b00020; font-size: .875rem; }
.toast { padding: .75rem 1rem; border-radius: .25rem; margin-bottom: 1rem; }
.toast.success { background: #e6f4ea; }
.toast.error { background: #fce8e6; }
.trap { position: absolute; left: -10000px; width: 1px; height: 1px; overflow: hidden; }
button { margin-top: 1rem; padding: .5rem 1.5rem; }
"#;

/// Render the whole page for the given form state
pub fn render(form: &ContactForm) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Contact" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    h1 { "Get in touch" }
                    @if let Some(toast) = form.notification() {
                        div class=(toast_class(toast.kind)) role="status" {
                            (toast.message)
                        }
                    }
                    form method="post" action="/" novalidate {
                        @for field in form.state().fields() {
                            (render_field(field))
                        }
                        button type="submit" disabled[form.is_loading()] { "Send" }
                    }
                }
            }
        }
    }
}

fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast success",
        NotificationKind::Error => "toast error",
    }
}

fn render_field(field: &FieldState) -> Markup {
    let id = field.id();
    let error = field.visible_error();
    let input_type = if field.rules().is_email { "email" } else { "text" };

    html! {
        @match id {
            FieldId::Honeypot => {
                div.trap aria-hidden="true" {
                    label for=(id.as_str()) { (id.label()) }
                    // Never echo what was posted into the trap
                    input type="text" id=(id.as_str()) name=(id.as_str())
                        value="" tabindex="-1" autocomplete="off";
                }
            }
            FieldId::Message => {
                label for=(id.as_str()) { (id.label()) }
                textarea.invalid[error.is_some()] id=(id.as_str()) name=(id.as_str())
                    required[field.rules().required] {
                    (field.value())
                }
                @if let Some(msg) = &error {
                    p.field-error { (msg) }
                }
            }
            _ => {
                label for=(id.as_str()) { (id.label()) }
                input.invalid[error.is_some()] type=(input_type)
                    id=(id.as_str()) name=(id.as_str()) value=(field.value())
                    required[field.rules().required];
                @if let Some(msg) = &error {
                    p.field-error { (msg) }
                }
            }
        }
    }
}

/// `GET /`
pub async fn contact_page() -> Html<String> {
    Html(render(&ContactForm::new()).into_string())
}

/// `POST /`: every posted field counts as blurred, then the usual submission
/// rules run against the in-process mailer
pub async fn contact_submit(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Html<String> {
    let mut form = ContactForm::new();
    for id in FieldId::ALL {
        let value = fields.get(id.as_str()).cloned().unwrap_or_default();
        form.update_field(id, value, FieldEvent::Blur);
    }

    let relay = MailerRelay::new(state);
    let markup = match form.submit(&relay).await {
        // A filled trap gets the same page a first visit gets
        SubmitOutcome::Dropped => render(&ContactForm::new()),
        outcome => {
            debug!(?outcome, "contact form posted");
            render(&form)
        }
    };

    Html(markup.into_string())
}
