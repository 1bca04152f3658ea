//! Inline text that switches between a preview and an input when edited.
//!
//! ## Usage
//!
//! Create an [`Editable`] controller from [`EditableArgs`], then ask it for
//! prop bundles ([`Editable::preview_props`], [`Editable::input_props`],
//! [`Editable::textarea_props`]) and attach them to whatever elements the
//! renderer draws. Custom edit/submit/cancel buttons read the controller from
//! a [`Scope`] through [`use_editable_control`].
//!
//! ```
//! use vellum_components::editable::{EditableArgs, Editable, InputOverrides, PreviewOverrides};
//! use vellum_ui::{FocusManager, KeyPress, winit::keyboard::NamedKey};
//!
//! let focus = FocusManager::new();
//! let editable = Editable::new(
//!     EditableArgs::default()
//!         .default_value("Some text")
//!         .on_submit(|value| println!("saved {value}")),
//!     &focus,
//! );
//!
//! editable.preview_props(PreviewOverrides::default()).focus();
//! assert!(editable.is_editing());
//!
//! let input = editable.input_props(InputOverrides::default());
//! input.change("Updated text");
//! input.key_down(KeyPress::named(NamedKey::Enter));
//! assert!(!editable.is_editing());
//! assert_eq!(editable.value(), "Updated text");
//! ```

mod control;
mod props;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use derive_setters::Setters;
use vellum_ui::{
    Callback, CallbackWith, EffectQueue, Focus, FocusId, FocusManager, KeyPress, Scope, State,
    winit::keyboard::NamedKey,
};

pub use control::{EditableControl, use_editable_control};
pub use props::{
    BlurEvent, ButtonType, ControlOverrides, ControlProps, HostRequest, InputOverrides,
    InputProps, PreviewOverrides, PreviewProps,
};

/// Arguments for configuring an [`Editable`].
#[derive(Clone, PartialEq, Setters)]
pub struct EditableArgs {
    /// Initial value when the editable is uncontrolled.
    #[setters(strip_option, into)]
    pub default_value: Option<String>,
    /// Controlled value. When set, the controller mirrors it on every
    /// [`Editable::update_args`] and never overwrites it; the caller reflects
    /// changes back from [`EditableArgs::on_change`].
    #[setters(strip_option, into)]
    pub value: Option<String>,
    /// Called with the new text whenever the value changes.
    #[setters(skip)]
    pub on_change: CallbackWith<String>,
    /// Called when the editable enters edit mode.
    #[setters(skip)]
    pub on_edit: Callback,
    /// Called with the current value when an edit is submitted.
    #[setters(skip)]
    pub on_submit: CallbackWith<String>,
    /// Called with the restored value when an edit is cancelled.
    #[setters(skip)]
    pub on_cancel: CallbackWith<String>,
    /// Whether the editable is disabled.
    pub disabled: bool,
    /// Whether the editable is read-only.
    pub read_only: bool,
    /// Whether focusing the preview starts editing.
    pub preview_focusable: bool,
    /// Whether the editable starts in edit mode.
    pub start_with_edit_view: bool,
    /// Whether losing focus submits (`true`) or cancels (`false`) the edit.
    pub submit_on_blur: bool,
    /// Whether the input text is selected when editing starts.
    pub select_all_on_focus: bool,
    /// Text shown by the preview and the input while the value is empty.
    #[setters(strip_option, into)]
    pub placeholder: Option<String>,
}

impl EditableArgs {
    /// Set the change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Set the change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: CallbackWith<String>) -> Self {
        self.on_change = on_change;
        self
    }

    /// Set the edit-start handler.
    pub fn on_edit<F>(mut self, on_edit: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_edit = Callback::new(on_edit);
        self
    }

    /// Set the edit-start handler using a shared callback.
    pub fn on_edit_shared(mut self, on_edit: Callback) -> Self {
        self.on_edit = on_edit;
        self
    }

    /// Set the submit handler.
    pub fn on_submit<F>(mut self, on_submit: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_submit = CallbackWith::new(on_submit);
        self
    }

    /// Set the submit handler using a shared callback.
    pub fn on_submit_shared(mut self, on_submit: CallbackWith<String>) -> Self {
        self.on_submit = on_submit;
        self
    }

    /// Set the cancel handler.
    pub fn on_cancel<F>(mut self, on_cancel: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_cancel = CallbackWith::new(on_cancel);
        self
    }

    /// Set the cancel handler using a shared callback.
    pub fn on_cancel_shared(mut self, on_cancel: CallbackWith<String>) -> Self {
        self.on_cancel = on_cancel;
        self
    }

    /// Whether the editable may enter edit mode at all.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.read_only
    }

    fn initial_value(&self) -> String {
        self.value
            .clone()
            .or_else(|| self.default_value.clone())
            .unwrap_or_default()
    }
}

impl Default for EditableArgs {
    fn default() -> Self {
        Self {
            default_value: None,
            value: None,
            on_change: CallbackWith::noop(),
            on_edit: Callback::noop(),
            on_submit: CallbackWith::noop(),
            on_cancel: CallbackWith::noop(),
            disabled: false,
            read_only: false,
            preview_focusable: true,
            start_with_edit_view: false,
            submit_on_blur: true,
            select_all_on_focus: true,
            placeholder: None,
        }
    }
}

/// Snapshot of an editable's interaction state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditableState {
    /// Whether the input is shown.
    pub is_editing: bool,
    /// The live text.
    pub value: String,
    /// The value captured when editing last started; restored on cancel.
    pub previous_value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditableEffect {
    FocusInput { select_all: bool },
    FocusEditControl,
}

struct EditableInner {
    args: EditableArgs,
    state: EditableState,
    effects: EffectQueue<EditableEffect>,
    /// Set by `edit_props` during a render, consumed by the next `commit`.
    edit_control_rendered: bool,
}

impl EditableInner {
    fn is_controlled(&self) -> bool {
        self.args.value.is_some()
    }

    /// Leaves edit mode and schedules focus for the edit control, applied
    /// only if the committed render still shows one.
    fn leave_edit_mode(&mut self) {
        self.state.is_editing = false;
        self.effects.push(EditableEffect::FocusEditControl);
    }
}

struct EditableFocus {
    input: Focus,
    preview: Focus,
    edit: Focus,
    submit: Focus,
    cancel: Focus,
}

/// Controller for an editable text.
///
/// Clones share state, so handlers produced by the prop getters keep working
/// after the controller that produced them is moved or dropped.
#[derive(Clone)]
pub struct Editable {
    inner: State<EditableInner>,
    focus: Arc<EditableFocus>,
}

impl Editable {
    /// Creates a controller whose focusable elements are tracked by
    /// `focus_manager`.
    pub fn new(args: EditableArgs, focus_manager: &FocusManager) -> Self {
        if args.value.is_some() && args.default_value.is_some() {
            tracing::warn!(
                "editable received both `value` and `default_value`; the controlled value wins"
            );
        }

        let value = args.initial_value();
        let state = EditableState {
            is_editing: args.start_with_edit_view,
            previous_value: value.clone(),
            value,
        };
        tracing::trace!(is_editing = state.is_editing, "editable created");

        Self {
            inner: State::new(EditableInner {
                args,
                state,
                effects: EffectQueue::new(),
                edit_control_rendered: false,
            }),
            focus: Arc::new(EditableFocus {
                input: focus_manager.create(),
                preview: focus_manager.create(),
                edit: focus_manager.create(),
                submit: focus_manager.create(),
                cancel: focus_manager.create(),
            }),
        }
    }

    /// Applies the arguments of a new render.
    ///
    /// A controlled value replaces the live value; edit mode and the snapshot
    /// are kept.
    pub fn update_args(&self, args: EditableArgs) {
        self.inner.with_mut(|inner| {
            if let Some(value) = &args.value {
                inner.state.value.clone_from(value);
            }
            inner.args = args;
        });
    }

    /// Whether the input is currently shown.
    pub fn is_editing(&self) -> bool {
        self.inner.with(|inner| inner.state.is_editing)
    }

    /// The live value.
    pub fn value(&self) -> String {
        self.inner.with(|inner| inner.state.value.clone())
    }

    /// The value captured when editing last started.
    pub fn previous_value(&self) -> String {
        self.inner.with(|inner| inner.state.previous_value.clone())
    }

    /// A copy of the whole interaction state.
    pub fn state(&self) -> EditableState {
        self.inner.with(|inner| inner.state.clone())
    }

    /// Focus id of the input element.
    pub fn input_focus(&self) -> FocusId {
        self.focus.input.id()
    }

    /// Returns a child scope exposing this controller to custom controls.
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.clone())
    }

    /// Enters edit mode.
    ///
    /// Does nothing when already editing, disabled or read-only.
    pub fn edit(&self) {
        let on_edit = self.inner.with_mut(|inner| {
            if inner.state.is_editing || !inner.args.is_interactive() {
                return None;
            }
            inner.state.previous_value = inner.state.value.clone();
            inner.state.is_editing = true;
            inner.effects.push(EditableEffect::FocusInput {
                select_all: inner.args.select_all_on_focus,
            });
            Some(inner.args.on_edit.clone())
        });

        match on_edit {
            Some(on_edit) => {
                tracing::debug!("editable entered edit mode");
                on_edit.call();
            }
            None => tracing::trace!("edit request ignored"),
        }
    }

    /// Handles focus arriving on the preview element.
    pub fn preview_focus(&self) {
        if self.inner.with(|inner| inner.args.preview_focusable) {
            self.edit();
        }
    }

    /// Commits the current value and leaves edit mode.
    ///
    /// Fires `on_submit` even when not editing, with whatever value is held.
    pub fn submit(&self) {
        let (on_submit, value) = self.inner.with_mut(|inner| {
            inner.leave_edit_mode();
            (inner.args.on_submit.clone(), inner.state.value.clone())
        });
        self.focus.input.unfocus();

        tracing::debug!(value = %value, "editable submitted");
        on_submit.call(value);
    }

    /// Restores the value captured when editing started and leaves edit mode.
    ///
    /// Fires `on_cancel` even when not editing, with the held snapshot.
    pub fn cancel(&self) {
        let (on_change, on_cancel, previous, reverted) = self.inner.with_mut(|inner| {
            let previous = inner.state.previous_value.clone();
            let reverted = inner.state.value != previous;
            if reverted && !inner.is_controlled() {
                inner.state.value = previous.clone();
            }
            inner.leave_edit_mode();
            (
                inner.args.on_change.clone(),
                inner.args.on_cancel.clone(),
                previous,
                reverted,
            )
        });
        self.focus.input.unfocus();

        tracing::debug!(value = %previous, reverted, "editable cancelled");
        if reverted {
            on_change.call(previous.clone());
        }
        on_cancel.call(previous);
    }

    /// Handles new text from the input.
    pub fn change(&self, value: impl Into<String>) {
        let value = value.into();
        let on_change = self.inner.with_mut(|inner| {
            if !inner.is_controlled() {
                inner.state.value.clone_from(&value);
            }
            inner.args.on_change.clone()
        });

        tracing::trace!(value = %value, "editable changed");
        on_change.call(value);
    }

    /// Handles a key press inside the input.
    ///
    /// Escape cancels; Enter submits unless Shift or Meta is held, in which
    /// case the press is left to the text field.
    pub fn key_down(&self, press: &KeyPress) {
        if press.is(NamedKey::Escape) {
            self.cancel();
        } else if press.is(NamedKey::Enter) && !press.shift() && !press.meta() {
            self.submit();
        }
    }

    /// Handles the input losing focus.
    ///
    /// Ignored when not editing, or when focus moves to this editable's
    /// submit or cancel control so the click on it decides the outcome.
    pub fn blur(&self, event: BlurEvent) {
        let towards_control = event.related.is_some_and(|target| {
            target == self.focus.submit.id() || target == self.focus.cancel.id()
        });
        let submit_on_blur = self.inner.with(|inner| {
            (inner.state.is_editing && !towards_control).then_some(inner.args.submit_on_blur)
        });

        match submit_on_blur {
            Some(true) => self.submit(),
            Some(false) => self.cancel(),
            None => tracing::trace!(towards_control, "blur ignored"),
        }
    }

    /// Runs effects scheduled for after the host committed a render.
    ///
    /// Focus moves are applied directly; requests the host must carry out
    /// itself are returned. Focus returns to the edit control only if
    /// [`Editable::edit_props`] was requested since the previous commit.
    /// Otherwise input focus stays released.
    pub fn commit(&self) -> Vec<HostRequest> {
        let (effects, is_editing, edit_control_rendered) = self.inner.with_mut(|inner| {
            (
                inner.effects.take(),
                inner.state.is_editing,
                std::mem::take(&mut inner.edit_control_rendered),
            )
        });

        let mut requests = Vec::new();
        for effect in effects {
            tracing::trace!(?effect, "applying editable effect");
            match effect {
                // Stale once a later event left edit mode before this commit.
                EditableEffect::FocusInput { select_all } if is_editing => {
                    self.focus.input.request_focus();
                    if select_all {
                        requests.push(HostRequest::SelectAllText {
                            target: self.focus.input.id(),
                        });
                    }
                }
                EditableEffect::FocusEditControl if !is_editing && edit_control_rendered => {
                    self.focus.edit.request_focus();
                }
                _ => {}
            }
        }
        requests
    }
}
