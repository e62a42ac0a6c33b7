//! Document access for the length guard.
//!
//! The guard never reaches into `web_sys` directly. It resolves elements
//! through the [`DocumentHost`] capability, so the validation logic also runs
//! against an in-memory document in tests. Elements are looked up fresh on
//! every call; nothing is cached between invocations.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

/// A text-bearing control with a readable and rewritable value.
pub trait TextInput {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// A display region whose text the guard rewrites.
pub trait DisplaySlot {
    fn set_text(&self, text: &str);
}

/// The form whose submission is gated by validation.
pub trait FormTarget {
    fn action(&self) -> String;
    fn set_action(&self, action: &str);
    fn submit(&self);
}

/// Lookup capability over the host document.
pub trait DocumentHost {
    type Input: TextInput;
    type Slot: DisplaySlot;

    fn text_input(&self, id: &str) -> Option<Self::Input>;
    fn display_slot(&self, id: &str) -> Option<Self::Slot>;
}

/// Browser-backed host reading from the live DOM.
pub struct DomHost {
    document: Document,
}

impl DomHost {
    /// Returns `None` outside a browser context.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl DocumentHost for DomHost {
    type Input = DomTextInput;
    type Slot = DomSlot;

    fn text_input(&self, id: &str) -> Option<DomTextInput> {
        DomTextInput::from_element(self.document.get_element_by_id(id)?)
    }

    fn display_slot(&self, id: &str) -> Option<DomSlot> {
        Some(DomSlot(self.document.get_element_by_id(id)?))
    }
}

/// Either kind of text control the detection page uses.
pub enum DomTextInput {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl DomTextInput {
    pub fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => Some(Self::TextArea(area)),
            Err(element) => element.dyn_into::<HtmlInputElement>().ok().map(Self::Input),
        }
    }
}

impl TextInput for DomTextInput {
    fn value(&self) -> String {
        match self {
            Self::TextArea(el) => el.value(),
            Self::Input(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::TextArea(el) => el.set_value(value),
            Self::Input(el) => el.set_value(value),
        }
    }
}

/// Display element written through `innerHTML`.
pub struct DomSlot(Element);

impl DisplaySlot for DomSlot {
    fn set_text(&self, text: &str) {
        self.0.set_inner_html(text);
    }
}

/// Form element submitting through the native form API.
pub struct DomForm(HtmlFormElement);

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self(form)
    }
}

impl FormTarget for DomForm {
    fn action(&self) -> String {
        self.0.action()
    }

    fn set_action(&self, action: &str) {
        self.0.set_action(action);
    }

    fn submit(&self) {
        // form.submit() does not fire the submit event, so the guard cannot
        // re-enter itself here
        self.0.submit().ok();
    }
}
