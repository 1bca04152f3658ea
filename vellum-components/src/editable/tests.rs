use vellum_ui::{
    FocusManager, KeyPress, Scope, ScopeError,
    testing::{CallRecorder, capture_warnings},
    winit::keyboard::{ModifiersState, NamedKey},
};

use super::*;

struct Harness {
    focus: FocusManager,
    editable: Editable,
    on_edit: CallRecorder<()>,
    on_change: CallRecorder<String>,
    on_submit: CallRecorder<String>,
    on_cancel: CallRecorder<String>,
}

impl Harness {
    fn new(args: EditableArgs) -> Self {
        vellum_ui::logging::init_test_tracing();
        let focus = FocusManager::new();
        let mut harness = Self {
            editable: Editable::new(EditableArgs::default(), &focus),
            focus,
            on_edit: CallRecorder::new(),
            on_change: CallRecorder::new(),
            on_submit: CallRecorder::new(),
            on_cancel: CallRecorder::new(),
        };
        harness.editable = Editable::new(harness.wire(args), &harness.focus);
        harness
    }

    /// Attaches the recorders to `args`, as a parent would on every render.
    fn wire(&self, args: EditableArgs) -> EditableArgs {
        args.on_edit_shared(self.on_edit.unit_callback())
            .on_change_shared(self.on_change.callback())
            .on_submit_shared(self.on_submit.callback())
            .on_cancel_shared(self.on_cancel.callback())
    }

    fn with_text() -> Self {
        Self::new(EditableArgs::default().default_value("Some text"))
    }

    fn preview(&self) -> PreviewProps {
        self.editable.preview_props(PreviewOverrides::default())
    }

    fn input(&self) -> InputProps {
        self.editable.input_props(InputOverrides::default())
    }
}

fn enter() -> KeyPress {
    KeyPress::named(NamedKey::Enter)
}

fn escape() -> KeyPress {
    KeyPress::named(NamedKey::Escape)
}

#[test]
fn renders_value_in_input_and_preview() {
    let h = Harness::with_text();

    assert_eq!(h.input().value, "Some text");
    assert_eq!(h.preview().text, "Some text");
    assert!(!h.preview().is_placeholder);
}

#[test]
fn initial_mode_follows_start_with_edit_view() {
    for start in [false, true] {
        let h = Harness::new(
            EditableArgs::default()
                .default_value("Some text")
                .start_with_edit_view(start),
        );
        assert_eq!(h.editable.is_editing(), start);
        assert_eq!(h.input().hidden, !start);
        assert_eq!(h.preview().hidden, start);
    }
}

#[test]
fn focusing_preview_starts_editing_and_tracks_changes() {
    let h = Harness::with_text();

    h.preview().focus();
    assert!(h.editable.is_editing());
    assert_eq!(h.on_edit.count(), 1);

    h.input().change("Updated text");
    assert_eq!(h.on_change.calls(), vec!["Updated text".to_string()]);
    assert_eq!(h.preview().text, "Updated text");
    assert_eq!(h.input().value, "Updated text");
}

#[test]
fn placeholder_is_forwarded() {
    let h = Harness::new(EditableArgs::default().placeholder("Enter some text"));

    assert_eq!(h.input().placeholder.as_deref(), Some("Enter some text"));
    let preview = h.preview();
    assert_eq!(preview.text, "Enter some text");
    assert!(preview.is_placeholder);
}

#[test]
fn disabled_blocks_every_entry_trigger() {
    let h = Harness::new(EditableArgs::default().default_value("Some text").disabled(true));

    assert!(h.input().disabled);
    assert!(!h.preview().focusable);

    h.preview().focus();
    h.editable.edit();
    let edit = h.editable.edit_props(ControlOverrides::default());
    assert!(edit.disabled);
    edit.on_click.fire();

    assert!(!h.editable.is_editing());
    assert!(h.on_edit.is_empty());
}

#[test]
fn read_only_blocks_entry_but_allows_exit() {
    let h = Harness::new(
        EditableArgs::default()
            .default_value("Some text")
            .read_only(true)
            .start_with_edit_view(true),
    );
    assert!(h.input().read_only);

    h.input().key_down(enter());
    assert!(!h.editable.is_editing());
    assert_eq!(h.on_submit.calls(), vec!["Some text".to_string()]);

    h.preview().focus();
    h.editable.edit();
    assert!(!h.editable.is_editing());
    assert!(h.on_edit.is_empty());
}

#[test]
fn escape_cancels_with_initial_value() {
    let h = Harness::with_text();

    h.input().key_down(escape());

    assert_eq!(h.on_cancel.calls(), vec!["Some text".to_string()]);
}

#[test]
fn escape_restores_snapshot_after_changes() {
    let h = Harness::with_text();

    h.preview().focus();
    h.input().change("Updated text");
    h.input().change("Updated text again");
    h.input().key_down(escape());

    assert!(!h.editable.is_editing());
    assert_eq!(h.editable.value(), "Some text");
    assert_eq!(h.on_cancel.calls(), vec!["Some text".to_string()]);
    assert_eq!(h.on_change.last().as_deref(), Some("Some text"));
    assert!(h.on_submit.is_empty());
}

#[test]
fn enter_submits_current_value() {
    let h = Harness::with_text();

    h.preview().focus();
    h.input().key_down(enter());
    assert_eq!(h.on_submit.calls(), vec!["Some text".to_string()]);
    assert!(!h.editable.is_editing());

    h.preview().focus();
    h.input().change("Changed");
    h.input().key_down(enter());
    assert_eq!(h.on_submit.last().as_deref(), Some("Changed"));
    assert_eq!(h.preview().text, "Changed");
}

#[test]
fn enter_with_shift_or_meta_is_text_input() {
    let h = Harness::with_text();
    h.preview().focus();

    h.input().key_down(enter().with_modifiers(ModifiersState::SHIFT));
    h.input().key_down(enter().with_modifiers(ModifiersState::SUPER));

    assert!(h.on_submit.is_empty());
    assert!(h.on_cancel.is_empty());
    assert!(h.editable.is_editing());
}

#[test]
fn only_shift_and_meta_suppress_enter() {
    let h = Harness::with_text();
    h.preview().focus();

    h.input().key_down(KeyPress::character("a"));
    assert!(h.on_submit.is_empty());

    h.input()
        .key_down(enter().with_modifiers(ModifiersState::CONTROL));
    assert_eq!(h.on_submit.count(), 1);
    assert!(h.on_cancel.is_empty());
}

#[test]
fn change_reports_new_text() {
    let h = Harness::with_text();

    h.input().change("New text");

    assert_eq!(h.on_change.calls(), vec!["New text".to_string()]);
}

#[test]
fn focus_leaves_input_when_editing_ends() {
    let h = Harness::new(
        EditableArgs::default()
            .default_value("Some text")
            .select_all_on_focus(true),
    );
    let input_id = h.editable.input_focus();

    h.preview().focus();
    assert!(!h.focus.is_focused(input_id));

    let requests = h.editable.commit();
    assert!(h.focus.is_focused(input_id));
    assert_eq!(
        requests,
        vec![HostRequest::SelectAllText { target: input_id }]
    );

    h.input().key_down(enter());
    assert!(!h.focus.is_focused(input_id));
    assert!(h.editable.commit().is_empty());
    assert!(!h.focus.is_focused(input_id));
}

#[test]
fn select_all_can_be_disabled() {
    let h = Harness::new(
        EditableArgs::default()
            .default_value("Some text")
            .select_all_on_focus(false),
    );

    h.preview().focus();

    assert!(h.editable.commit().is_empty());
    assert!(h.focus.is_focused(h.editable.input_focus()));
}

#[test]
fn stale_input_focus_is_dropped() {
    let h = Harness::with_text();

    h.preview().focus();
    h.input().key_down(escape());

    assert!(h.editable.commit().is_empty());
    assert_eq!(h.focus.focused(), None);
}

#[test]
fn edit_control_takes_focus_back() {
    let h = Harness::with_text();
    let edit = h.editable.edit_props(ControlOverrides::default());

    edit.click();
    h.editable.commit();
    assert!(h.focus.is_focused(h.editable.input_focus()));

    h.input().key_down(enter());
    // The preview-mode render shows the edit control again.
    h.editable.edit_props(ControlOverrides::default());
    h.editable.commit();
    assert!(h.focus.is_focused(edit.focus_id));
}

#[test]
fn edit_control_missing_from_render_keeps_focus_released() {
    let h = Harness::with_text();
    let edit = h.editable.edit_props(ControlOverrides::default());
    let input_id = h.editable.input_focus();

    // Later renders show only the preview and the input.
    h.preview().focus();
    h.editable.commit();
    assert!(h.focus.is_focused(input_id));

    h.input().key_down(enter());
    h.editable.commit();
    assert!(!h.focus.is_focused(edit.focus_id));
    assert_eq!(h.focus.focused(), None);
}

#[test]
fn on_edit_fires_once_per_entry() {
    let h = Harness::with_text();

    h.preview().focus();
    h.preview().focus();
    h.editable.edit();

    assert_eq!(h.on_edit.count(), 1);
}

#[test]
fn snapshot_is_frozen_while_editing() {
    let h = Harness::with_text();

    h.preview().focus();
    h.input().change("Draft");
    h.editable.edit();

    assert_eq!(h.editable.previous_value(), "Some text");
    assert_eq!(h.editable.state().value, "Draft");
}

#[test]
fn enter_with_submit_on_blur_does_not_cancel() {
    let h = Harness::new(
        EditableArgs::default()
            .default_value("Some text")
            .submit_on_blur(true),
    );

    h.preview().focus();
    h.input().key_down(enter());

    assert_eq!(h.on_submit.calls(), vec!["Some text".to_string()]);
    assert!(h.on_cancel.is_empty());
}

#[test]
fn blur_submits_by_default() {
    let h = Harness::with_text();

    h.preview().focus();
    h.input().blur(BlurEvent::new());

    assert_eq!(h.on_submit.calls(), vec!["Some text".to_string()]);
    assert!(h.on_cancel.is_empty());
    assert!(!h.editable.is_editing());
}

#[test]
fn blur_cancels_without_submit_on_blur() {
    let h = Harness::new(
        EditableArgs::default()
            .default_value("Some text")
            .submit_on_blur(false),
    );

    h.preview().focus();
    h.input().change("Discarded");
    h.input().blur(BlurEvent::new());

    assert!(h.on_submit.is_empty());
    assert_eq!(h.on_cancel.calls(), vec!["Some text".to_string()]);
    assert_eq!(h.editable.value(), "Some text");
}

#[test]
fn blur_outside_edit_mode_is_ignored() {
    let h = Harness::with_text();

    h.input().blur(BlurEvent::new());

    assert!(h.on_submit.is_empty());
    assert!(h.on_cancel.is_empty());
}

#[test]
fn blur_towards_cancel_control_lets_the_click_decide() {
    let h = Harness::with_text();
    let cancel = h.editable.cancel_props(ControlOverrides::default());

    h.preview().focus();
    h.input().change("Discarded");
    h.input().blur(BlurEvent::to(cancel.focus_id));
    assert!(h.on_submit.is_empty());
    assert!(h.editable.is_editing());

    cancel.click();
    assert_eq!(h.on_cancel.calls(), vec!["Some text".to_string()]);
    assert!(h.on_submit.is_empty());
}

#[test]
fn textarea_shares_key_rules() {
    let h = Harness::with_text();
    let textarea = h.editable.textarea_props(InputOverrides::default());
    assert!(textarea.multiline);
    assert_eq!(textarea.value, "Some text");
    assert!(!h.input().multiline);

    h.preview().focus();
    let textarea = h.editable.textarea_props(InputOverrides::default());
    textarea.key_down(enter().with_modifiers(ModifiersState::SHIFT));
    assert!(h.editable.is_editing());

    textarea.key_down(enter());
    assert_eq!(h.on_submit.count(), 1);
}

#[test]
fn caller_handlers_run_after_the_editable() {
    let h = Harness::with_text();
    let seen = CallRecorder::<(bool, String)>::new();

    let editable = h.editable.clone();
    let recorder = seen.callback();
    let input = h.editable.input_props(InputOverrides::default().on_change(move |value| {
        recorder.call((editable.value() == value, value));
    }));
    input.change("Typed");

    assert_eq!(seen.calls(), vec![(true, "Typed".to_string())]);
    assert_eq!(input.on_change.len(), 2);
}

#[test]
fn callbacks_may_reenter_the_controller() {
    let focus = FocusManager::new();
    let observed = CallRecorder::<bool>::new();
    let slot: State<Option<Editable>> = State::new(None);

    let recorder = observed.callback();
    let handle = slot.clone();
    let editable = Editable::new(
        EditableArgs::default().on_submit(move |_| {
            if let Some(editable) = handle.get() {
                recorder.call(editable.is_editing());
            }
        }),
        &focus,
    );
    slot.set(Some(editable.clone()));

    editable.edit();
    editable.submit();

    assert_eq!(observed.calls(), vec![false]);
    slot.set(None);
}

#[test]
fn controlled_value_is_mirrored_not_overwritten() {
    let h = Harness::new(EditableArgs::default().value("Server"));

    h.preview().focus();
    h.input().change("Local");
    assert_eq!(h.on_change.calls(), vec!["Local".to_string()]);
    assert_eq!(h.editable.value(), "Server");

    h.editable
        .update_args(h.wire(EditableArgs::default().value("Local")));
    assert_eq!(h.editable.value(), "Local");
    assert!(h.editable.is_editing());

    h.input().key_down(escape());
    assert_eq!(h.on_cancel.calls(), vec!["Server".to_string()]);
    assert_eq!(h.on_change.last().as_deref(), Some("Server"));
    assert_eq!(h.editable.value(), "Local");
}

#[test]
fn controlled_value_wins_over_default() {
    let (h, warnings) = capture_warnings(|| {
        Harness::new(
            EditableArgs::default()
                .value("controlled")
                .default_value("default"),
        )
    });
    assert_eq!(h.editable.value(), "controlled");
    assert!(warnings.contains("controlled value wins"));
}

#[test]
fn controlled_value_alone_does_not_warn() {
    let (_, warnings) =
        capture_warnings(|| Harness::new(EditableArgs::default().value("controlled")));
    assert!(warnings.is_empty());
}

#[test]
fn custom_controls_are_plain_buttons_and_fire_outside_edit_mode() {
    let h = Harness::new(EditableArgs::default().preview_focusable(false));
    let scope = h.editable.provide(&Scope::new());
    let control = use_editable_control(&scope).expect("editable provided");

    let edit = control.edit_props(ControlOverrides::default());
    let submit = control.submit_props(ControlOverrides::default());
    let cancel = control.cancel_props(ControlOverrides::default());
    assert_eq!(edit.button_type, ButtonType::Button);
    assert_eq!(submit.button_type, ButtonType::Button);
    assert_eq!(cancel.button_type, ButtonType::Button);

    submit.click();
    cancel.click();

    assert_eq!(h.on_submit.calls(), vec![String::new()]);
    assert_eq!(h.on_cancel.calls(), vec![String::new()]);
}

#[test]
fn custom_edit_control_switches_mode() {
    let h = Harness::new(EditableArgs::default().preview_focusable(false));
    let scope = h.editable.provide(&Scope::new());
    let control = use_editable_control(&scope).expect("editable provided");

    h.preview().focus();
    assert!(!control.is_editing());

    control.edit_props(ControlOverrides::default()).click();
    assert!(control.is_editing());
    assert_eq!(h.on_edit.count(), 1);
}

#[test]
fn custom_control_handlers_are_composed() {
    let h = Harness::with_text();
    let clicks = CallRecorder::<()>::new();
    let click = clicks.unit_callback();

    let submit = h
        .editable
        .submit_props(ControlOverrides::default().on_click(move || click.call()));
    submit.click();

    assert_eq!(h.on_submit.count(), 1);
    assert_eq!(clicks.count(), 1);
}

#[test]
fn custom_controls_outside_an_editable_fail_fast() {
    let err = use_editable_control(&Scope::new())
        .err()
        .expect("no editable provided");
    assert!(matches!(err, ScopeError::Missing { .. }));
}

#[test]
fn worked_example_edit_type_cancel() {
    let h = Harness::with_text();

    h.preview().focus();
    assert!(h.editable.is_editing());
    assert_eq!(h.on_edit.count(), 1);

    h.input().change("Updated text");
    assert_eq!(h.on_change.calls(), vec!["Updated text".to_string()]);
    assert_eq!(h.preview().text, "Updated text");

    h.input().key_down(escape());
    assert_eq!(h.editable.value(), "Some text");
    assert_eq!(h.on_cancel.calls(), vec!["Some text".to_string()]);
}

#[test]
fn worked_example_enter_submits_unchanged() {
    let h = Harness::with_text();
    let input_id = h.editable.input_focus();

    h.preview().focus();
    h.editable.commit();
    h.input().key_down(enter());

    assert_eq!(h.on_submit.calls(), vec!["Some text".to_string()]);
    assert!(!h.editable.is_editing());
    assert!(!h.focus.is_focused(input_id));
}
