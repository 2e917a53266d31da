use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::graph_view::GraphView;
use crate::config::GraphConfig;

/// The trimmed draft, if submitting it would change the subject.
fn changed_subject(current: &str, draft: &str) -> Option<String> {
	let next = draft.trim();
	(next != current).then(|| next.to_owned())
}

/// Subject search plus the knowledge graph for the submitted subject.
#[component]
pub fn Home() -> impl IntoView {
	let config = GraphConfig::from_document();
	let draft = RwSignal::new(String::new());
	let subject = RwSignal::new(String::new());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let next =
			subject.with_untracked(|current| draft.with_untracked(|d| changed_subject(current, d)));
		if let Some(next) = next {
			subject.set(next);
		}
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="page-container">
				<div class="page-header">
					<h2>"Knowledge Graph Visualization"</h2>
					<form class="subject-form" on:submit=on_submit>
						<input
							type="text"
							placeholder="Virus name, e.g. Dengue Virus"
							prop:value=move || draft.get()
							on:input=move |ev| draft.set(event_target_value(&ev))
						/>
						<button type="submit">"Analyze"</button>
					</form>
					<p class="subtitle">"Click a node to focus it. Scroll to zoom. Drag background to pan."</p>
				</div>
				<GraphView subject=subject config=config />
			</div>
		</ErrorBoundary>
	}
}
