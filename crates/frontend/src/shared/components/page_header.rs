use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title row at the top of each page. Children are placed on the right as
/// page-level actions.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] subtitle: Option<&'static str>,
    /// Name understood by [`icon`].
    #[prop(optional)]
    icon_name: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page__header page-header">
            {icon_name.map(|name| view! { <span class="page-header__icon">{icon(name)}</span> })}
            <hgroup class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|text| view! { <p class="page-header__subtitle">{text}</p> })}
            </hgroup>
            {children.map(|actions| view! { <div class="page-header__actions">{actions()}</div> })}
        </header>
    }
}
