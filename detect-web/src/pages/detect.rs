//! Detection page - single-language and multi-language text forms
//!
//! Each form owns a textarea, a live character counter, and an inline error
//! slot. Edit and submit events are wired to the length guard here; the
//! guard itself only sees element ids.

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement, HtmlTextAreaElement};

use shared::dto::detect::{DETECT_PATH, TEXT_FIELD};

use crate::form::guard::{counter_text, reset_indicators, validate_and_submit};
use crate::form::host::{DomForm, DomHost, DomTextInput};
use crate::utils::constants::{
    MAX_DETECT_CHARS, MIN_DETECT_CHARS, MULTI_FORM_PREFIX, SINGLE_FORM_PREFIX,
};

#[component]
pub fn DetectPage() -> impl IntoView {
    view! {
        <div class="content-wrapper">
            <div class="card">
                <h1 class="card-title">"Detect Language"</h1>
                <p class="subtitle">
                    "Paste a snippet of text and the detector will name its language."
                </p>

                <DetectForm
                    heading="Single language"
                    blurb="Best for text written in one language; the dominant language wins."
                    id_prefix=SINGLE_FORM_PREFIX
                    multi=false
                />
                <DetectForm
                    heading="Multiple languages"
                    blurb="Splits mixed text into runs and names the language of each run."
                    id_prefix=MULTI_FORM_PREFIX
                    multi=true
                />
            </div>
        </div>
    }
}

/// One detection form. The submit event is intercepted and only forwarded to
/// the native form submission when the length guard passes.
#[component]
fn DetectForm(
    heading: &'static str,
    blurb: &'static str,
    id_prefix: &'static str,
    multi: bool,
) -> impl IntoView {
    let input_id = format!("{}-text", id_prefix);
    let error_id = format!("{}-error", id_prefix);
    let counter_id = format!("{}-counter", id_prefix);
    let form_id = format!("{}-form", id_prefix);

    let edit_ids = (error_id.clone(), counter_id.clone());
    let submit_ids = (input_id.clone(), error_id.clone(), counter_id.clone());

    view! {
        <section class="detect-section">
            <h2>{heading}</h2>
            <p class="blurb">{blurb}</p>
            <form
                id=form_id
                action=DETECT_PATH
                method="post"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let (input_id, error_id, counter_id) = &submit_ids;
                    guard_submit(&ev, input_id, error_id, counter_id, multi);
                }
            >
                <textarea
                    id=input_id
                    name=TEXT_FIELD
                    rows="6"
                    placeholder="Type or paste text here..."
                    on:input=move |ev| {
                        let (error_id, counter_id) = &edit_ids;
                        refresh_indicators(&ev, error_id, counter_id);
                    }
                ></textarea>
                <div class="char-counter" id=counter_id>{counter_text(0)}</div>
                <div class="form-error" id=error_id></div>
                <button type="submit" class="btn">"Detect"</button>
            </form>
        </section>
    }
}

/// Edit handler: clear the error slot and refresh the character counter from
/// the textarea the event came from.
fn refresh_indicators(ev: &Event, error_id: &str, counter_id: &str) {
    let Some(host) = DomHost::new() else {
        log!("edit event fired outside a browser document");
        return;
    };
    let input = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
        .map(DomTextInput::TextArea);
    if let Some(input) = input {
        if let Err(e) = reset_indicators(&host, &input, error_id, counter_id) {
            log!("failed to refresh form indicators: {}", e);
        }
    }
}

/// Submit handler: run the length guard against the form the event came
/// from; the guard decides whether the native submission goes ahead.
fn guard_submit(ev: &Event, input_id: &str, error_id: &str, counter_id: &str, multi: bool) {
    let Some(host) = DomHost::new() else {
        log!("submit event fired outside a browser document");
        return;
    };
    let Some(form) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        .map(DomForm::new)
    else {
        log!("submit event did not come from a form element");
        return;
    };
    if let Err(e) = validate_and_submit(
        &host,
        input_id,
        &form,
        error_id,
        counter_id,
        MIN_DETECT_CHARS,
        MAX_DETECT_CHARS,
        multi,
    ) {
        log!("detection form is missing an element: {}", e);
    }
}
