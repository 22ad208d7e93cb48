//! Shared list helpers: debounced search input and sort indicators.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and the filter update.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (the debounced one)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Follow external resets such as "Clear filters".
    Effect::new(move |_| {
        let external = value.get();
        if external.is_empty() {
            set_input_value.set(String::new());
        }
    });

    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Dropping a Timeout cancels it
        pending.set_value(Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        })));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

/// Indicator shown next to a sortable column header.
pub fn sort_indicator(is_current: bool, ascending: bool) -> &'static str {
    match (is_current, ascending) {
        (false, _) => " ⇅",
        (true, true) => " ▲",
        (true, false) => " ▼",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(false, true), " ⇅");
        assert_eq!(sort_indicator(true, true), " ▲");
        assert_eq!(sort_indicator(true, false), " ▼");
    }
}
