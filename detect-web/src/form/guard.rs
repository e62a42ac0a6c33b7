//! Length validation gating detection form submission.
//!
//! On submit the guard trims the text field, refreshes the character counter,
//! and either writes a bounds error into the error slot or lets the form
//! submit. Multi-language mode is requested by appending the mode marker to
//! the form action right before submission.

use thiserror::Error;

use shared::dto::detect::{MODE_MULTI, MODE_PARAM};

use crate::form::host::{DisplaySlot, DocumentHost, FormTarget, TextInput};
use crate::utils::url::with_query_param;

/// Fatal lookup failure: the page is missing a display element the guard is
/// contracted to write. The input field itself is allowed to be absent; the
/// error and counter slots are not, once the field exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuardError {
    #[error("display element '{0}' not found in document")]
    SlotNotFound(String),
}

/// Strips leading and trailing whitespace. Interior whitespace is preserved.
pub fn normalize(text: &str) -> &str {
    text.trim()
}

/// Counter label with singular/plural wording.
pub fn counter_text(count: usize) -> String {
    if count == 1 {
        format!("{} character", count)
    } else {
        format!("{} characters", count)
    }
}

/// Validates the text field's length and submits the form when it is within
/// bounds.
///
/// A page without the input field has no client-side constraint and submits
/// directly, leaving both display slots untouched. Otherwise the field value
/// is trimmed and written back, the counter slot is refreshed, and the length
/// (in characters) is compared against `min_chars..=max_chars`. Out-of-range
/// text writes a message into the error slot instead of submitting; the
/// error slot is not cleared on success, edit events do that via
/// [`reset_indicators`].
pub fn validate_and_submit<H: DocumentHost>(
    host: &H,
    input_id: &str,
    form: &impl FormTarget,
    error_id: &str,
    counter_id: &str,
    min_chars: usize,
    max_chars: usize,
    multi: bool,
) -> Result<(), GuardError> {
    let Some(input) = host.text_input(input_id) else {
        submit_with_mode(form, multi);
        return Ok(());
    };

    let text = normalize(&input.value()).to_string();
    input.set_value(&text);

    let count = text.chars().count();
    display_slot(host, counter_id)?.set_text(&counter_text(count));

    if count < min_chars {
        display_slot(host, error_id)?.set_text(&format!(
            "Minimum length for language detection is {} characters",
            min_chars
        ));
    } else if count > max_chars {
        display_slot(host, error_id)?.set_text(&format!(
            "Maximum length for language detection is {} characters",
            max_chars
        ));
    } else {
        submit_with_mode(form, multi);
    }

    Ok(())
}

/// Clears the error slot and recounts the input's current, untrimmed value
/// into the counter slot. Wired to every edit event, independent of
/// submission.
pub fn reset_indicators<H: DocumentHost>(
    host: &H,
    input: &H::Input,
    error_id: &str,
    counter_id: &str,
) -> Result<(), GuardError> {
    display_slot(host, error_id)?.set_text("");
    let count = input.value().chars().count();
    display_slot(host, counter_id)?.set_text(&counter_text(count));
    Ok(())
}

fn display_slot<H: DocumentHost>(host: &H, id: &str) -> Result<H::Slot, GuardError> {
    host.display_slot(id)
        .ok_or_else(|| GuardError::SlotNotFound(id.to_string()))
}

fn submit_with_mode(form: &impl FormTarget, multi: bool) {
    if multi {
        form.set_action(&with_query_param(&form.action(), MODE_PARAM, MODE_MULTI));
    }
    form.submit();
}
