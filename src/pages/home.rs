use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_navigate, use_params_map};
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{File, KeyboardEvent};

use crate::components::browser::{EXPORT_FILE_NAME, download_json, haptic, read_file_text};
use crate::components::dock::Dock;
use crate::components::info_panel::InfoPanel;
use crate::components::resume_sheet::ResumeSheet;
use crate::components::search_sheet::SearchSheet;
use crate::components::splash::Splash;
use crate::components::top_bar::TopBar;
use crate::components::topic_map::scale::Chrome;
use crate::components::topic_map::{Scene, TopicMap};
use crate::config::MapConfig;
use crate::data::{default_edges, default_nodes};
use crate::graph::{Node, Progress, ReadFilter, filter_nodes, nearest_unread};
use crate::keyboard::is_next_unread_key;
use crate::routes::{BASE_PATH, resolve_topic};
use crate::session::Session;
use crate::storage::BrowserStore;

/// Optional rows that change the top bar's height. Refits follow changes to
/// this, not to the rows' contents, so visiting topics keeps the zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ChromeLayout {
	crumb_row: bool,
	import_error: bool,
}

impl ChromeLayout {
	fn track(crumbs: Signal<Vec<(String, String)>>, import_error: Signal<Option<String>>) -> Memo<Self> {
		Memo::new(move |_| Self {
			crumb_row: crumbs.with(|c| !c.is_empty()),
			import_error: import_error.with(Option::is_some),
		})
	}
}

/// Shared with the route children so deep links can drive the selection.
#[derive(Clone, Copy)]
struct MapContext {
	session: RwSignal<Session<BrowserStore>>,
	nodes: StoredValue<Vec<Node>>,
	/// Leaves the topic view and returns to the base address.
	close: Callback<()>,
}

/// The map view. Child routes only sync the address with the selection.
#[component]
pub fn Home() -> impl IntoView {
	let config = MapConfig::default();
	let content = config.content;
	let nodes = StoredValue::new(default_nodes());
	let session = RwSignal::new(Session::restore(BrowserStore, &default_edges(), config.crumb_cap));

	let read_filter = RwSignal::new(ReadFilter::All);
	let query = RwSignal::new(String::new());
	let sheet_open = RwSignal::new(false);
	let show_resume = RwSignal::new(true);
	let import_error = RwSignal::new(None::<String>);
	let refit = RwSignal::new(0u64);
	let view_center = RwSignal::new(content.center());
	let pending_route = RwSignal::new(None::<String>);

	let topbar_ref = NodeRef::<leptos::html::Header>::new();
	let dock_ref = NodeRef::<leptos::html::Div>::new();

	let navigate = use_navigate();
	Effect::new(move |_| {
		if let Some(path) = pending_route.get() {
			navigate(&path, Default::default());
		}
	});

	let read = Memo::new(move |_| session.with(|s| s.read().clone()));
	let filtered = Memo::new(move |_| {
		let read = read.get();
		nodes.with_value(|all| {
			query.with(|q| {
				filter_nodes(all, read_filter.get(), &read, q)
					.into_iter()
					.cloned()
					.collect::<Vec<Node>>()
			})
		})
	});
	let progress = Memo::new(move |_| {
		let read = read.get();
		nodes.with_value(|all| Progress::compute(all, &read))
	});
	let scene = Memo::new(move |_| {
		session.with(|s| {
			nodes.with_value(|all| {
				filtered.with(|visible| {
					let visible: Vec<&Node> = visible.iter().collect();
					Scene::build(&visible, all, s.edges(), s.read(), s.selected(), content)
				})
			})
		})
	});
	let edges = Memo::new(move |_| session.with(|s| s.edges().to_vec()));
	let selected_node = Memo::new(move |_| {
		session.with(|s| {
			let id = s.selected()?;
			nodes.with_value(|all| resolve_topic(all, id).cloned())
		})
	});
	let resume_node = Memo::new(move |_| {
		session.with(|s| {
			let id = s.resume()?;
			nodes.with_value(|all| resolve_topic(all, id).cloned())
		})
	});
	let crumbs = Memo::new(move |_| {
		session.with(|s| {
			nodes.with_value(|all| {
				s.crumbs()
					.ids()
					.iter()
					.filter_map(|id| resolve_topic(all, id).map(|n| (n.id.clone(), n.title.clone())))
					.collect::<Vec<_>>()
			})
		})
	});

	let focus = Callback::new(move |id: String| {
		haptic(10);
		let path = session.try_update(|s| s.focus_node(&id));
		debug!("focus {id}");
		pending_route.set(path);
	});
	let close = Callback::new(move |_: ()| {
		let path = session.try_update(|s| s.clear_selection());
		pending_route.set(path.map(str::to_owned));
	});
	let next_unread = Callback::new(move |_: ()| {
		let center = view_center.get_untracked();
		let pick = session.with_untracked(|s| {
			filtered.with_untracked(|pool| {
				nearest_unread(pool, s.read(), center, content).map(|n| n.id.clone())
			})
		});
		match pick {
			Some(id) => focus.run(id),
			None => debug!("no unread topic in the current view"),
		}
	});
	let find = Callback::new(move |_: ()| {
		haptic(10);
		sheet_open.set(true);
	});
	let center = Callback::new(move |_: ()| {
		haptic(8);
		refit.update(|n| *n += 1);
	});
	let reset = Callback::new(move |_: ()| session.update(|s| s.reset_read()));
	let export = Callback::new(move |_: ()| {
		let text = session.with_untracked(|s| nodes.with_value(|all| s.export_graph(all)));
		match text {
			Ok(text) => {
				if let Err(e) = download_json(EXPORT_FILE_NAME, &text) {
					warn!("export download failed: {e:?}");
				}
			}
			Err(e) => warn!("export failed: {e}"),
		}
	});
	let import = Callback::new(move |file: File| {
		read_file_text(&file, move |text| {
			let outcome = match text {
				Ok(text) => session.try_update(|s| s.import_graph(&text)),
				Err(e) => Some(Err(e)),
			};
			match outcome {
				Some(Ok(count)) => {
					info!("graph import adopted {count} edges");
					import_error.set(None);
				}
				Some(Err(e)) => import_error.set(Some(format!("Import failed: {e}"))),
				None => {}
			}
		});
	});
	let enter = Callback::new(move |_: ()| session.update(|s| s.enter()));
	let jump_back = Callback::new(move |_: ()| {
		if let Some(id) = session.with_untracked(|s| s.resume().map(str::to_owned)) {
			focus.run(id);
		}
	});

	let measure_chrome = Callback::new(move |_: ()| {
		let height = |el: Option<web_sys::Element>| {
			el.map(|el| el.get_bounding_client_rect().height()).unwrap_or(0.0)
		};
		Chrome {
			top: height(topbar_ref.get_untracked().map(Into::into)),
			bottom: height(dock_ref.get_untracked().map(Into::into)),
		}
	});

	let layout = ChromeLayout::track(crumbs.into(), import_error.into());
	Effect::new(move |prev: Option<ChromeLayout>| {
		let now = layout.get();
		if prev.is_some_and(|prev| prev != now) {
			refit.update(|n| *n += 1);
		}
		now
	});

	let keys = window_event_listener(leptos::ev::keydown, move |ev: KeyboardEvent| {
		let tag = ev
			.target()
			.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
			.map(|el| el.tag_name());
		if is_next_unread_key(&ev.key(), tag.as_deref()) {
			ev.prevent_default();
			next_unread.run(());
		}
	});
	on_cleanup(move || keys.remove());

	provide_context(MapContext {
		session,
		nodes,
		close,
	});

	view! {
		<div class="app">
			<TopBar
				node_ref=topbar_ref
				progress=progress
				query=query
				read_filter=read_filter
				crumbs=crumbs
				import_error=import_error
				on_find=find
				on_continue=next_unread
				on_reset=reset
				on_export=export
				on_import=import
				on_crumb=focus
			/>

			<main class="stage">
				<TopicMap
					scene=scene
					refit=refit
					chrome=measure_chrome
					on_pick=focus
					view_center=view_center
					config=config
				/>
			</main>

			{move || {
				resume_node
					.get()
					.map(|n| {
						view! { <ResumeSheet title=n.title open=show_resume on_jump=jump_back /> }
					})
			}}

			<Dock
				node_ref=dock_ref
				progress=progress
				on_find=find
				on_next=next_unread
				on_center=center
			/>

			<SearchSheet
				open=sheet_open
				nodes=nodes
				read=read
				read_filter=read_filter
				on_pick=focus
			/>

			{move || {
				selected_node
					.get()
					.map(|node| view! { <InfoPanel node=node edges=edges on_close=close /> })
			}}

			<Show when=move || !session.with(|s| s.has_entered())>
				<Splash on_enter=enter />
			</Show>

			<Outlet />
		</div>
	}
}

/// `/`: nothing selected.
#[component]
pub fn BaseRoute() -> impl IntoView {
	let ctx = expect_context::<MapContext>();
	Effect::new(move |_| {
		if ctx.session.with_untracked(|s| s.selected().is_some()) {
			ctx.session.update(|s| {
				s.clear_selection();
			});
		}
	});
}

/// `/topic/:id`: opens the topic, or falls back to `/` for unknown ids.
#[component]
pub fn TopicRoute() -> impl IntoView {
	let ctx = expect_context::<MapContext>();
	let params = use_params_map();
	Effect::new(move |_| {
		let Some(id) = params.with(|p| p.get("id")) else {
			return;
		};
		if ctx.nodes.with_value(|all| resolve_topic(all, &id).is_none()) {
			warn!("unknown topic {id}, returning to {BASE_PATH}");
			ctx.close.run(());
			return;
		}
		if ctx.session.with_untracked(|s| s.selected() != Some(id.as_str())) {
			ctx.session.update(|s| {
				s.focus_node(&id);
			});
		}
	});
}

#[cfg(test)]
mod tests {
	use leptos::reactive::owner::Owner;

	use super::*;

	fn crumb(id: &str) -> (String, String) {
		(id.to_owned(), id.to_uppercase())
	}

	#[test]
	fn visiting_topics_keeps_the_layout() {
		Owner::new().with(|| {
			let crumbs = RwSignal::new(vec![crumb("a")]);
			let import_error = RwSignal::new(None::<String>);
			let layout = ChromeLayout::track(crumbs.into(), import_error.into());
			let before = layout.get();

			crumbs.set(vec![crumb("b"), crumb("a")]);
			assert_eq!(layout.get(), before);
		});
	}

	#[test]
	fn rows_appearing_change_the_layout() {
		Owner::new().with(|| {
			let crumbs = RwSignal::new(Vec::new());
			let import_error = RwSignal::new(None::<String>);
			let layout = ChromeLayout::track(crumbs.into(), import_error.into());
			assert_eq!(
				layout.get(),
				ChromeLayout {
					crumb_row: false,
					import_error: false,
				}
			);

			crumbs.set(vec![crumb("a")]);
			import_error.set(Some("Import failed: not JSON".into()));
			assert_eq!(
				layout.get(),
				ChromeLayout {
					crumb_row: true,
					import_error: true,
				}
			);
		});
	}
}
