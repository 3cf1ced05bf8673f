use crate::api::{ApiClient, ApiError, ApiErrorKind};
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Input, Spinner,
};
use crate::confirm::{ConfirmConfig, ConfirmController, ConfirmDialog};
use crate::drafts::NoteForm;
use crate::models::{Note, NotePayload};
use crate::state::{AppContext, AppState, EditMode, SortKey, SortOrder};
use crate::toast::{ToastController, ToastHost};
use crate::util::{format_timestamp, truncate_preview, Debouncer};
use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;
use std::str::FromStr;

const SEARCH_DEBOUNCE_MS: i32 = 300;
const MOBILE_BREAKPOINT_PX: f64 = 600.0;
const PREVIEW_MAX_CHARS: usize = 50;

const SELECT_CLASS: &str = "border-input h-8 rounded-md border bg-transparent px-2 text-xs outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2";

/// User-facing wording for a failed API call. `operation` reads as a verb
/// phrase ("create note", "load notes") and only shows in the generic arm.
pub(crate) fn error_message(e: &ApiError, operation: &str) -> String {
    match &e.kind {
        ApiErrorKind::Network => "Connection failed. Check your network.".to_string(),
        ApiErrorKind::Http(400) => "Invalid data. Please check your input.".to_string(),
        ApiErrorKind::Http(404) => "Note not found. It may have been deleted.".to_string(),
        ApiErrorKind::Http(s) if *s >= 500 => "Server error. Please try again later.".to_string(),
        _ => format!("Failed to {operation}. Please try again."),
    }
}

// Post-mutation store transitions, kept synchronous and separate from the
// async handlers so the selection/mode contract is directly testable.

pub(crate) fn apply_create_success(state: &AppState, created: Note) {
    let id = created.id;
    state.add_note(created);
    state.select_note(id);
    state.set_edit_mode(EditMode::View);
    state.set_unsaved_changes(false);
}

pub(crate) fn apply_update_success(state: &AppState, updated: Note) {
    state.update_note_in_list(updated);
    state.set_edit_mode(EditMode::View);
    state.set_unsaved_changes(false);
}

pub(crate) fn apply_delete_success(state: &AppState, id: i64) {
    state.remove_note(id);
    if state.selected_note_id.get_untracked() == Some(id) {
        state.select_note(None);
        state.set_edit_mode(EditMode::View);
    }
}

/// Logs a failed remote op and raises exactly one error toast; touches no
/// other state. Returns whether the caller should reload the list (a 404
/// means our copy of it is stale).
fn report_remote_error(toaster: ToastController, e: &ApiError, operation: &str) -> bool {
    leptos::logging::error!("{operation} failed: {e}");
    toaster.error(error_message(e, operation));
    e.status() == Some(404)
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct NoteRouteParams {
    pub id: Option<i64>,
}

/// The whole app on one page: toolbar, search/sort controls, list pane and
/// detail pane, with the confirm dialog and toast stack mounted at the root.
///
/// On narrow viewports only one pane shows at a time; `show_detail` picks
/// which.
#[component]
pub fn MainLayout() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let confirm = expect_context::<ConfirmController>();
    let toaster = expect_context::<ToastController>();
    let params = use_params::<NoteRouteParams>();
    let navigate = StoredValue::new(use_navigate());

    let api = StoredValue::new(ApiClient::from_env());

    let save_loading: RwSignal<bool> = RwSignal::new(false);
    let load_error: RwSignal<Option<String>> = RwSignal::new(None);
    let search_input: RwSignal<String> = RwSignal::new(String::new());
    let is_mobile: RwSignal<bool> = RwSignal::new(false);
    let show_detail: RwSignal<bool> = RwSignal::new(false);

    let check_mobile = move || {
        let width = window()
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);
        is_mobile.set(width < MOBILE_BREAKPOINT_PX);
    };
    check_mobile();
    let _resize_handle = window_event_listener(ev::resize, move |_| check_mobile());

    // List loading with a stale-response guard: only the most recently
    // started load may apply its result.
    let load_notes_sv = StoredValue::new(move || {
        let request_id = app_state.0.begin_notes_load();
        let api = api.get_value();
        app_state.0.set_loading(true);

        spawn_local(async move {
            let result = api.list_notes().await;
            if !app_state.0.is_current_notes_load(request_id) {
                return;
            }

            match result {
                Ok(notes) => {
                    load_error.set(None);
                    app_state.0.set_notes(notes);
                }
                Err(e) => {
                    leptos::logging::error!("load notes failed: {e}");
                    load_error.set(Some(error_message(&e, "load notes")));
                }
            }
            app_state.0.set_loading(false);
        });
    });
    load_notes_sv.with_value(|load| load());

    // Route is the source of truth for which note is open: /notes/:id
    // selects, anything else leaves the explicit handlers in charge.
    Effect::new(move |_| {
        if let Some(id) = params.get().ok().and_then(|p| p.id) {
            if app_state.0.selected_note_id.get_untracked() != Some(id) {
                app_state.0.select_note(Some(id));
                app_state.0.set_edit_mode(EditMode::View);
                app_state.0.set_unsaved_changes(false);
            }
            if is_mobile.get_untracked() {
                show_detail.set(true);
            }
        }
    });

    // Raw input is debounced into the store's search term; equal values are
    // dropped so a re-settled identical term does not recompute the list.
    let search_debounce = Debouncer::new(SEARCH_DEBOUNCE_MS);
    Effect::new(move |prev: Option<String>| {
        let value = search_input.get();
        if prev.is_some() || !value.is_empty() {
            let term = value.clone();
            search_debounce.schedule(move || {
                if app_state.0.search_term.get_untracked() != term {
                    app_state.0.set_search_term(term);
                }
            });
        }
        value
    });

    let clear_search = move |_| {
        search_input.set(String::new());
        app_state.0.set_search_term(String::new());
    };

    let on_sort_key_change = move |ev: web_sys::Event| {
        if let Ok(key) = SortKey::from_str(&event_target_value(&ev)) {
            app_state.0.set_sort_by(key);
        }
    };

    let on_sort_order_change = move |ev: web_sys::Event| {
        if let Ok(order) = SortOrder::from_str(&event_target_value(&ev)) {
            app_state.0.set_sort_order(order);
        }
    };

    let handle_remote_error = move |e: ApiError, operation: &'static str| {
        if report_remote_error(toaster, &e, operation) {
            load_notes_sv.with_value(|load| load());
        }
    };

    let start_create = move || {
        app_state.0.select_note(None);
        app_state.0.set_edit_mode(EditMode::Create);
        app_state.0.set_unsaved_changes(false);
        if is_mobile.get_untracked() {
            show_detail.set(true);
        }
        navigate.with_value(|nav| nav("/", Default::default()));
    };

    let confirm_for_new = confirm.clone();
    let on_new_note = move |_| {
        if app_state.0.has_unsaved_changes.get_untracked() {
            confirm_for_new.request(ConfirmConfig::discard_changes(), start_create);
        } else {
            start_create();
        }
    };

    let open_note = move |note: Note| {
        let Some(id) = note.id else {
            return;
        };
        app_state.0.select_note(Some(id));
        app_state.0.set_edit_mode(EditMode::View);
        app_state.0.set_unsaved_changes(false);
        if is_mobile.get_untracked() {
            show_detail.set(true);
        }
        navigate.with_value(|nav| nav(&format!("/notes/{id}"), Default::default()));
    };

    let confirm_for_select = confirm.clone();
    let on_note_selected = Callback::new(move |note: Note| {
        if app_state.0.has_unsaved_changes.get_untracked() {
            confirm_for_select.request(ConfirmConfig::discard_changes(), move || open_note(note));
        } else {
            open_note(note);
        }
    });

    let on_note_saved = Callback::new(move |payload: NotePayload| {
        let api = api.get_value();

        match app_state.0.edit_mode.get_untracked() {
            EditMode::Create => {
                save_loading.set(true);
                spawn_local(async move {
                    match api.create_note(&payload).await {
                        Ok(created) => {
                            let id = created.id;
                            apply_create_success(&app_state.0, created);
                            toaster.success("Note created successfully");
                            if let Some(id) = id {
                                navigate.with_value(|nav| {
                                    nav(&format!("/notes/{id}"), Default::default());
                                });
                            }
                        }
                        Err(e) => handle_remote_error(e, "create note"),
                    }
                    save_loading.set(false);
                });
            }
            EditMode::Edit => {
                let Some(id) = app_state.0.selected_note_id.get_untracked() else {
                    return;
                };
                save_loading.set(true);
                spawn_local(async move {
                    match api.update_note(id, &payload).await {
                        Ok(updated) => {
                            apply_update_success(&app_state.0, updated);
                            toaster.success("Note updated successfully");
                        }
                        Err(e) => handle_remote_error(e, "update note"),
                    }
                    save_loading.set(false);
                });
            }
            EditMode::View => {}
        }
    });

    let on_form_cancel = Callback::new(move |_: ()| {
        let was_create = app_state.0.edit_mode.get_untracked() == EditMode::Create;
        app_state.0.set_edit_mode(EditMode::View);
        app_state.0.set_unsaved_changes(false);
        if was_create && is_mobile.get_untracked() {
            show_detail.set(false);
        }
    });

    let on_edit = Callback::new(move |_: ()| {
        if app_state.0.edit_mode.get_untracked() == EditMode::View
            && app_state.0.selected_note_id.get_untracked().is_some()
        {
            app_state.0.set_edit_mode(EditMode::Edit);
        }
    });

    let confirm_for_delete = confirm.clone();
    let on_delete = Callback::new(move |_: ()| {
        if app_state.0.edit_mode.get_untracked() != EditMode::View {
            return;
        }
        let Some(id) = app_state.0.selected_note_id.get_untracked() else {
            return;
        };
        let Some(note) = app_state
            .0
            .notes
            .get_untracked()
            .into_iter()
            .find(|n| n.id == Some(id))
        else {
            return;
        };

        confirm_for_delete.request(ConfirmConfig::delete_note(&note.title), move || {
            let api = api.get_value();
            spawn_local(async move {
                match api.delete_note(id).await {
                    Ok(()) => {
                        apply_delete_success(&app_state.0, id);
                        toaster.success("Note deleted successfully");
                        if is_mobile.get_untracked() {
                            show_detail.set(false);
                        }
                        navigate.with_value(|nav| nav("/", Default::default()));
                    }
                    Err(e) => handle_remote_error(e, "delete note"),
                }
            });
        });
    });

    let go_back = move || {
        app_state.0.set_edit_mode(EditMode::View);
        app_state.0.set_unsaved_changes(false);
        show_detail.set(false);
        navigate.with_value(|nav| nav("/", Default::default()));
    };

    let confirm_for_back = confirm.clone();
    let on_back = Callback::new(move |_: ()| {
        if app_state.0.has_unsaved_changes.get_untracked() {
            confirm_for_back.request(ConfirmConfig::discard_changes(), go_back);
        } else {
            go_back();
        }
    });

    let selected_note = Signal::derive(move || app_state.0.selected_note());
    let list_notes = Signal::derive(move || app_state.0.filtered_notes());
    let has_search = Signal::derive(move || !app_state.0.search_term.get().trim().is_empty());

    view! {
        <div class="flex h-screen flex-col bg-background text-foreground">
            <header class="flex items-center justify-between gap-3 border-b px-4 py-3">
                <div class="flex items-center gap-2">
                    <h1 class="text-sm font-semibold">"Notemark"</h1>
                    <Show when=move || app_state.0.is_loading.get() fallback=|| ().into_view()>
                        <Spinner class="text-muted-foreground" />
                    </Show>
                </div>
                <Button size=ButtonSize::Sm on:click=on_new_note>"New Note"</Button>
            </header>

            <div class="flex flex-wrap items-center gap-2 border-b px-4 py-2">
                <div class="relative min-w-[180px] max-w-sm flex-1">
                    <Input
                        placeholder="Search notes..."
                        bind_value=search_input
                        class="h-8 pr-8 text-sm"
                    />
                    <Show when=move || !search_input.get().is_empty() fallback=|| ().into_view()>
                        <button
                            type="button"
                            class="absolute top-1/2 right-2 -translate-y-1/2 text-muted-foreground hover:text-foreground"
                            aria-label="Clear search"
                            on:click=clear_search
                        >
                            <X class="size-3.5" />
                        </button>
                    </Show>
                </div>

                <label class="text-xs text-muted-foreground" r#for="sort-key">"Sort by"</label>
                <select
                    id="sort-key"
                    class=SELECT_CLASS
                    prop:value=move || app_state.0.sort_by.get().to_string()
                    on:change=on_sort_key_change
                >
                    <option value="updatedAt">"Last updated"</option>
                    <option value="createdAt">"Created"</option>
                    <option value="title">"Title"</option>
                </select>
                <select
                    aria-label="Sort order"
                    class=SELECT_CLASS
                    prop:value=move || app_state.0.sort_order.get().to_string()
                    on:change=on_sort_order_change
                >
                    <option value="desc">"Descending"</option>
                    <option value="asc">"Ascending"</option>
                </select>
            </div>

            <div class="flex min-h-0 flex-1">
                <Show
                    when=move || !is_mobile.get() || !show_detail.get()
                    fallback=|| ().into_view()
                >
                    <aside class="flex w-full flex-col overflow-y-auto border-r sm:w-80">
                        <Show when=move || load_error.get().is_some() fallback=|| ().into_view()>
                            <div class="px-3 pt-3">
                                <Alert class="border-destructive/30">
                                    <AlertDescription class="text-destructive text-xs">
                                        {move || load_error.get()}
                                    </AlertDescription>
                                </Alert>
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    class="mt-2"
                                    on:click=move |_| load_notes_sv.with_value(|load| load())
                                >
                                    "Retry"
                                </Button>
                            </div>
                        </Show>

                        <NotesList
                            notes=list_notes
                            selected_id=app_state.0.selected_note_id
                            loading=app_state.0.is_loading
                            has_search=has_search
                            on_select=on_note_selected
                        />
                    </aside>
                </Show>

                <Show
                    when=move || !is_mobile.get() || show_detail.get()
                    fallback=|| ().into_view()
                >
                    <main class="min-w-0 flex-1 overflow-y-auto">
                        <NoteDetail
                            note=selected_note
                            saving=save_loading
                            show_back=is_mobile
                            on_save=on_note_saved
                            on_cancel=on_form_cancel
                            on_edit=on_edit
                            on_delete=on_delete
                            on_back=on_back
                        />
                    </main>
                </Show>
            </div>

            <ConfirmDialog />
            <ToastHost />
        </div>
    }
}

#[component]
fn NotesList(
    #[prop(into)] notes: Signal<Vec<Note>>,
    #[prop(into)] selected_id: Signal<Option<i64>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] has_search: Signal<bool>,
    #[prop(into)] on_select: Callback<Note>,
) -> impl IntoView {
    view! {
        <div class="flex flex-1 flex-col">
            {move || {
                if loading.get() && notes.get().is_empty() {
                    return view! {
                        <div class="flex items-center justify-center py-10">
                            <Spinner />
                        </div>
                    }
                        .into_any();
                }

                let items = notes.get();
                if items.is_empty() {
                    let hint = if has_search.get() {
                        "No notes match your search."
                    } else {
                        "No notes yet. Create your first note."
                    };
                    return view! {
                        <p class="px-4 py-8 text-center text-xs text-muted-foreground">{hint}</p>
                    }
                        .into_any();
                }

                view! {
                    <ul class="flex flex-col">
                        {items
                            .into_iter()
                            .map(|note| {
                                let id = note.id;
                                let title = note.title.clone();
                                let preview = truncate_preview(&note.content, PREVIEW_MAX_CHARS);
                                let updated = format_timestamp(note.updated_at.as_deref());

                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class=move || {
                                                let base = "flex w-full flex-col items-start gap-0.5 border-b px-4 py-3 text-left hover:bg-accent";
                                                if id.is_some() && selected_id.get() == id {
                                                    format!("{base} bg-accent")
                                                } else {
                                                    base.to_string()
                                                }
                                            }
                                            on:click=move |_| on_select.run(note.clone())
                                        >
                                            <span class="w-full truncate text-sm font-medium">{title}</span>
                                            <span class="w-full truncate text-xs text-muted-foreground">{preview}</span>
                                            <span class="text-[10px] text-muted-foreground">{updated}</span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn NoteDetail(
    #[prop(into)] note: Signal<Option<Note>>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] show_back: Signal<bool>,
    #[prop(into)] on_save: Callback<NotePayload>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    // In create mode the form starts from an empty draft regardless of
    // whatever note is still selected underneath.
    let form_note = Signal::derive(move || match app_state.0.edit_mode.get() {
        EditMode::Create => None,
        _ => note.get(),
    });

    view! {
        <div class="flex h-full flex-col gap-3 p-4">
            <Show when=move || show_back.get() fallback=|| ().into_view()>
                <div>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        on:click=move |_| on_back.run(())
                    >
                        "Back to list"
                    </Button>
                </div>
            </Show>

            {move || match app_state.0.edit_mode.get() {
                EditMode::View => {
                    match note.get() {
                        Some(n) => {
                            view! {
                                <article class="flex min-h-0 flex-1 flex-col gap-2">
                                    <header class="flex items-start justify-between gap-3">
                                        <div class="min-w-0">
                                            <h2 class="truncate text-lg font-semibold">{n.title.clone()}</h2>
                                            <p class="text-xs text-muted-foreground">
                                                {format!(
                                                    "Created {} · Updated {}",
                                                    format_timestamp(n.created_at.as_deref()),
                                                    format_timestamp(n.updated_at.as_deref()),
                                                )}
                                            </p>
                                        </div>
                                        <div class="flex shrink-0 gap-2">
                                            <Button
                                                variant=ButtonVariant::Outline
                                                size=ButtonSize::Sm
                                                on:click=move |_| on_edit.run(())
                                            >
                                                "Edit"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Destructive
                                                size=ButtonSize::Sm
                                                on:click=move |_| on_delete.run(())
                                            >
                                                "Delete"
                                            </Button>
                                        </div>
                                    </header>
                                    <div class="flex-1 overflow-y-auto whitespace-pre-wrap text-sm">
                                        {n.content.clone()}
                                    </div>
                                </article>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="flex h-full items-center justify-center">
                                    <Card class="max-w-xs">
                                        <CardHeader>
                                            <CardTitle class="text-base">"No note selected"</CardTitle>
                                            <CardDescription class="text-xs">
                                                "Your notes live in the list on the left."
                                            </CardDescription>
                                        </CardHeader>
                                        <CardContent class="text-xs text-muted-foreground">
                                            "Select a note to read it, or create a new one."
                                        </CardContent>
                                    </Card>
                                </div>
                            }
                                .into_any()
                        }
                    }
                }
                _ => {
                    view! {
                        <NoteForm
                            note=form_note
                            saving=saving
                            on_save=on_save
                            on_cancel=on_cancel
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_error(status: u16) -> ApiError {
        ApiError {
            kind: ApiErrorKind::Http(status),
            message: "boom".to_string(),
        }
    }

    fn note(id: i64, title: &str) -> Note {
        Note {
            id: Some(id),
            title: title.to_string(),
            content: "body".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_error_message_maps_statuses() {
        assert_eq!(
            error_message(&http_error(400), "create note"),
            "Invalid data. Please check your input."
        );
        assert_eq!(
            error_message(&http_error(404), "update note"),
            "Note not found. It may have been deleted."
        );
        assert_eq!(
            error_message(&http_error(500), "delete note"),
            "Server error. Please try again later."
        );
        assert_eq!(
            error_message(&http_error(503), "delete note"),
            "Server error. Please try again later."
        );
    }

    #[test]
    fn test_error_message_network_and_fallback() {
        let net = ApiError {
            kind: ApiErrorKind::Network,
            message: "offline".to_string(),
        };
        assert_eq!(
            error_message(&net, "create note"),
            "Connection failed. Check your network."
        );

        // 409, parse errors etc. fall through to the generic wording.
        assert_eq!(
            error_message(&http_error(409), "update note"),
            "Failed to update note. Please try again."
        );
        let parse = ApiError {
            kind: ApiErrorKind::Parse,
            message: "bad json".to_string(),
        };
        assert_eq!(
            error_message(&parse, "load notes"),
            "Failed to load notes. Please try again."
        );
    }

    #[test]
    fn test_create_success_selects_new_note_in_view_mode() {
        let state = AppState::new();
        state.set_edit_mode(EditMode::Create);
        state.set_unsaved_changes(true);

        apply_create_success(&state, note(7, "fresh"));

        assert_eq!(state.selected_note_id.get_untracked(), Some(7));
        assert_eq!(state.edit_mode.get_untracked(), EditMode::View);
        assert!(!state.has_unsaved_changes.get_untracked());
        assert_eq!(state.notes.get_untracked().len(), 1);
    }

    #[test]
    fn test_update_success_replaces_note_and_returns_to_view() {
        let state = AppState::new();
        state.set_notes(vec![note(1, "old"), note(2, "other")]);
        state.select_note(Some(1));
        state.set_edit_mode(EditMode::Edit);
        state.set_unsaved_changes(true);

        apply_update_success(&state, note(1, "new"));

        let notes = state.notes.get_untracked();
        assert_eq!(notes[0].title, "new");
        assert_eq!(notes[1].title, "other");
        assert_eq!(state.edit_mode.get_untracked(), EditMode::View);
        assert!(!state.has_unsaved_changes.get_untracked());
        assert_eq!(state.selected_note_id.get_untracked(), Some(1));
    }

    #[test]
    fn test_delete_success_clears_selection_and_mode() {
        let state = AppState::new();
        state.set_notes(vec![note(1, "a"), note(2, "b")]);
        state.select_note(Some(1));
        state.set_edit_mode(EditMode::View);

        apply_delete_success(&state, 1);

        assert_eq!(state.selected_note_id.get_untracked(), None);
        assert_eq!(state.edit_mode.get_untracked(), EditMode::View);
        assert_eq!(state.notes.get_untracked().len(), 1);
    }

    #[test]
    fn test_failed_delete_leaves_selection_and_mode_unchanged() {
        let state = AppState::new();
        state.set_notes(vec![note(1, "a"), note(2, "b")]);
        state.select_note(Some(1));
        state.set_edit_mode(EditMode::View);

        let toaster = ToastController::new();
        let reload = report_remote_error(toaster, &http_error(500), "delete note");

        // One error notification, nothing else moved.
        assert!(!reload);
        assert_eq!(toaster.toasts.get_untracked().len(), 1);
        assert_eq!(state.selected_note_id.get_untracked(), Some(1));
        assert_eq!(state.edit_mode.get_untracked(), EditMode::View);
        assert_eq!(state.notes.get_untracked().len(), 2);
    }

    #[test]
    fn test_not_found_failure_requests_list_reload() {
        let toaster = ToastController::new();
        assert!(report_remote_error(toaster, &http_error(404), "update note"));
        assert!(!report_remote_error(toaster, &http_error(400), "update note"));
        assert_eq!(toaster.toasts.get_untracked().len(), 2);
    }

    #[test]
    fn test_delete_of_unselected_note_keeps_selection() {
        let state = AppState::new();
        state.set_notes(vec![note(1, "a"), note(2, "b")]);
        state.select_note(Some(2));

        apply_delete_success(&state, 1);

        assert_eq!(state.selected_note_id.get_untracked(), Some(2));
        assert_eq!(state.notes.get_untracked().len(), 1);
    }
}
