//! Breadcrumb Component

use leptos::prelude::*;

use crate::route::Route;

/// One step of the trail; the last step is rendered without a link
#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub route: Option<Route>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, route: Route) -> Self {
        Self { label: label.into(), route: Some(route) }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self { label: label.into(), route: None }
    }
}

#[component]
pub fn Breadcrumb(#[prop(into)] trail: Signal<Vec<Crumb>>) -> impl IntoView {
    view! {
        <nav class="breadcrumb">
            {move || {
                let trail = trail.get();
                let last = trail.len().saturating_sub(1);
                trail
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let step = match crumb.route {
                            Some(route) if i != last => {
                                view! { <a href=route.href()>{crumb.label}</a> }.into_any()
                            }
                            _ => view! { <span class="breadcrumb-current">{crumb.label}</span> }.into_any(),
                        };
                        view! {
                            {(i > 0).then(|| view! { <span class="breadcrumb-sep">"→"</span> })}
                            {step}
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
