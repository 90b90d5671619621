pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Navbar   |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside data-zone="left" class="app-sidebar">
                    <div class="app-sidebar__brand">"Café Admin"</div>
                    <Navbar />
                </aside>

                // Main content area
                <main data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
                    {children()}
                </main>
            </div>
        </div>
    }
}
