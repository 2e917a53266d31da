use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use crate::api::GraphClient;
use crate::components::force_graph::{ForceGraphCanvas, GraphData, LoadSequence};
use crate::config::GraphConfig;

/// Knowledge graph for `subject`, fetched from the analysis backend.
///
/// A blank subject shows an idle placeholder and issues no request. While a
/// fetch is in flight the previous graph stays on screen; a failed fetch
/// leaves it there.
#[component]
pub fn GraphView(
	/// Subject to fetch the graph for.
	#[prop(into)]
	subject: Signal<String>,
	/// Backend address and rendering settings.
	#[prop(optional)]
	config: GraphConfig,
) -> impl IntoView {
	let data = RwSignal::new(GraphData::default());
	let client = GraphClient::new(&config.api_base_url);
	let sequence = Rc::new(RefCell::new(LoadSequence::new()));

	Effect::new(move |_| {
		let subject = subject.get();
		let Some(ticket) = sequence.borrow_mut().begin(&subject) else {
			data.set(GraphData::default());
			return;
		};
		let (client, sequence) = (client.clone(), sequence.clone());
		spawn_local(async move {
			let result = client.fetch_graph(ticket.subject()).await;
			if let Some(graph) = sequence.borrow().settle(&ticket, result) {
				info!(
					"loaded graph for {:?}: {} nodes, {} links",
					ticket.subject(),
					graph.nodes.len(),
					graph.links.len()
				);
				data.set(graph);
			}
		});
	});

	let idle = move || data.with(GraphData::is_empty);
	let placeholder = move || {
		if subject.with(|s| s.trim().is_empty()) {
			"Ready to Analyze"
		} else {
			"Building Knowledge Graph..."
		}
	};

	view! {
		<div class="graph-view" style="position: relative; height: 600px; overflow: hidden;">
			<ForceGraphCanvas data=data config=config />
			<Show when=idle>
				<div class="graph-placeholder">{placeholder}</div>
			</Show>
		</div>
	}
}
