//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" {..} class="nav-link-clean">
                    <span class="nav-title">
                        <span class="brand-accent">"Lang"</span><span class="brand-rest">"Detect"</span>
                    </span>
                </A>
                <A href="/about" {..} class="nav-link">"About"</A>
            </div>
        </nav>
    }
}
