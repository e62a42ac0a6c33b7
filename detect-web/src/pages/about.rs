//! About Page - what the detector is and how it decides

use leptos::prelude::*;

use shared::dto::detect::SUPPORTED_LANGUAGES;

#[component]
pub fn AboutPage() -> impl IntoView {
    let languages = SUPPORTED_LANGUAGES.join(", ");

    view! {
        <div class="content-wrapper">
            <div class="card">
                <h1 class="card-title">"About Language Detection"</h1>

                <p class="blurb">
                    "The detector represents text as character n-grams and compares them
                    against per-language models in an n-gram vector space. For text written
                    in one language, the dominant language wins; mixed text can be split
                    into runs with a language named for each run."
                </p>

                <h2>"Supported languages"</h2>
                <p class="blurb">
                    "Models are trained for the following languages (ISO 639-1 codes): "
                    {languages}
                </p>

                <h2>"Input limits"</h2>
                <p class="blurb">
                    "Reliable detection needs at least 10 characters of text. Submissions
                    are capped at 5000 characters; paste a representative excerpt of longer
                    documents instead."
                </p>
            </div>
        </div>
    }
}
