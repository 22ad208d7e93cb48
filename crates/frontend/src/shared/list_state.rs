//! Glue between thaw inputs and a page's [`ListControls`].

use contracts::shared::list_query::ListControls;
use leptos::prelude::*;

/// Mirror a text control into one filter field. Only real changes touch the
/// controls, so the page is reset to 1 on edits and not on mount.
pub fn bind_filter_input<F>(
    controls: RwSignal<ListControls<F>>,
    input: RwSignal<String>,
    read: fn(&F) -> String,
    write: fn(&mut F, String),
) where
    F: Default + Send + Sync + 'static,
{
    Effect::new(move |_| {
        let value = input.get();
        let current = controls.with_untracked(|c| read(&c.filter));
        if current != value {
            controls.update(|c| c.edit_filter(|f| write(f, value)));
        }
    });
}

/// Reset every bound control and the filter itself.
pub fn clear_filters<F>(controls: RwSignal<ListControls<F>>, inputs: &[RwSignal<String>])
where
    F: Default + Send + Sync + 'static,
{
    for input in inputs {
        input.set(String::new());
    }
    controls.update(|c| c.clear());
}
