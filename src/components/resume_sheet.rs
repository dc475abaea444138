use std::time::Duration;

use leptos::prelude::*;

use super::browser::haptic;

/// Viewports up to this width count as mobile and auto-hide the sheet.
const MOBILE_MAX_WIDTH: f64 = 900.0;
const AUTO_HIDE_AFTER: Duration = Duration::from_secs(6);

fn is_mobile() -> bool {
	web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|v| v.as_f64())
		.is_some_and(|w| w <= MOBILE_MAX_WIDTH)
}

/// "Jump back in" sheet for the resume pointer, collapsing to a chip once
/// dismissed.
#[component]
pub fn ResumeSheet(
	#[prop(into)] title: Signal<String>,
	open: RwSignal<bool>,
	on_jump: Callback<()>,
) -> impl IntoView {
	if is_mobile() {
		set_timeout(move || open.set(false), AUTO_HIDE_AFTER);
	}
	let dismiss = move || {
		haptic(8);
		open.set(false);
	};

	view! {
		<Show
			when=move || open.get()
			fallback=move || {
				view! {
					<button
						class="resumeChip"
						aria-label="Show resume"
						title=move || format!("Resume: {}", title.get())
						on:click=move |_| {
							haptic(10);
							open.set(true);
						}
					>
						<span class="resumeChipK">"Resume"</span>
						<span class="resumeChipT">{move || title.get()}</span>
					</button>
				}
			}
		>
			<div class="resumeDim" aria-hidden="true" on:click=move |_| dismiss() />
			<div class="resumeSheet" role="region" aria-label="Resume">
				<div class="resumeGrab" aria-hidden="true" />
				<div class="resumeSheetRow">
					<div>
						<div class="resumeSheetKicker">"Resume"</div>
						<div class="resumeSheetTitle">{move || title.get()}</div>
					</div>
					<div class="resumeSheetActions">
						<button class="resumeBtn" on:click=move |_| on_jump.run(())>
							"Jump back in"
						</button>
						<button class="resumeX" on:click=move |_| dismiss() aria-label="Dismiss resume">
							"✕"
						</button>
					</div>
				</div>
			</div>
		</Show>
	}
}
