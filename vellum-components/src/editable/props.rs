//! Prop bundles handed to the elements that render an editable.

use closure::closure;
use vellum_ui::{CallbackWith, FocusId, Handlers, KeyPress};

use super::Editable;

/// The `type` a button element should carry.
///
/// Editable controls are only ever plain buttons, so clicking one never
/// submits or resets an enclosing form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ButtonType {
    /// A plain button that never submits an enclosing form.
    #[default]
    Button,
}

/// Where focus went when an element lost it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlurEvent {
    /// The element receiving focus, if the host knows it.
    pub related: Option<FocusId>,
}

impl BlurEvent {
    /// Focus left for an unknown element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus moved to `target`.
    pub fn to(target: FocusId) -> Self {
        Self {
            related: Some(target),
        }
    }
}

/// Work the host must perform after a commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum HostRequest {
    /// Select the whole text of the input identified by `target`.
    SelectAllText {
        /// Focus id of the input.
        target: FocusId,
    },
}

/// Caller-supplied handlers merged into [`ControlProps`].
#[derive(Clone, Default, PartialEq)]
pub struct ControlOverrides {
    /// Extra click handlers, run after the editable's own.
    pub on_click: Handlers<()>,
}

impl ControlOverrides {
    /// Adds a click handler.
    pub fn on_click<F>(mut self, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click.push(CallbackWith::new(move |()| on_click()));
        self
    }
}

/// Props for an edit, submit or cancel button.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlProps {
    /// Always [`ButtonType::Button`], so the control never submits a form.
    pub button_type: ButtonType,
    /// Whether the button should be rendered disabled.
    pub disabled: bool,
    /// Focus id the button element should carry.
    pub focus_id: FocusId,
    /// Click handlers, the editable's first.
    pub on_click: Handlers<()>,
}

impl ControlProps {
    /// Dispatches a click, unless the button is disabled.
    pub fn click(&self) {
        if !self.disabled {
            self.on_click.fire();
        }
    }
}

/// Caller-supplied handlers merged into [`PreviewProps`].
#[derive(Clone, Default, PartialEq)]
pub struct PreviewOverrides {
    /// Extra focus handlers, run after the editable's own.
    pub on_focus: Handlers<()>,
}

impl PreviewOverrides {
    /// Adds a focus handler.
    pub fn on_focus<F>(mut self, on_focus: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_focus.push(CallbackWith::new(move |()| on_focus()));
        self
    }
}

/// Props for the element showing the value outside edit mode.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewProps {
    /// Whether the preview should be hidden (edit mode).
    pub hidden: bool,
    /// Whether the preview should take part in keyboard focus order.
    pub focusable: bool,
    /// Text to display: the value, or the placeholder when the value is empty.
    pub text: String,
    /// Whether `text` is the placeholder.
    pub is_placeholder: bool,
    /// Focus id the preview element should carry.
    pub focus_id: FocusId,
    /// Focus handlers, the editable's first.
    pub on_focus: Handlers<()>,
}

impl PreviewProps {
    /// Dispatches focus arriving on the preview.
    pub fn focus(&self) {
        self.on_focus.fire();
    }
}

/// Caller-supplied handlers merged into [`InputProps`].
#[derive(Clone, Default, PartialEq)]
pub struct InputOverrides {
    /// Extra change handlers.
    pub on_change: Handlers<String>,
    /// Extra key handlers.
    pub on_key_down: Handlers<KeyPress>,
    /// Extra blur handlers.
    pub on_blur: Handlers<BlurEvent>,
}

impl InputOverrides {
    /// Adds a change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change.push(CallbackWith::new(on_change));
        self
    }

    /// Adds a key handler.
    pub fn on_key_down<F>(mut self, on_key_down: F) -> Self
    where
        F: Fn(KeyPress) + Send + Sync + 'static,
    {
        self.on_key_down.push(CallbackWith::new(on_key_down));
        self
    }

    /// Adds a blur handler.
    pub fn on_blur<F>(mut self, on_blur: F) -> Self
    where
        F: Fn(BlurEvent) + Send + Sync + 'static,
    {
        self.on_blur.push(CallbackWith::new(on_blur));
        self
    }
}

/// Props for the single-line input or the multi-line textarea.
#[derive(Clone, Debug, PartialEq)]
pub struct InputProps {
    /// Text the field should show.
    pub value: String,
    /// Placeholder for an empty field.
    pub placeholder: Option<String>,
    /// Whether the field should be hidden (preview mode).
    pub hidden: bool,
    /// Whether the field is disabled.
    pub disabled: bool,
    /// Whether the field rejects character input.
    pub read_only: bool,
    /// Whether the field accepts line breaks.
    pub multiline: bool,
    /// Focus id the field element should carry.
    pub focus_id: FocusId,
    /// Change handlers, the editable's first.
    pub on_change: Handlers<String>,
    /// Key handlers, the editable's first.
    pub on_key_down: Handlers<KeyPress>,
    /// Blur handlers, the editable's first.
    pub on_blur: Handlers<BlurEvent>,
}

impl InputProps {
    /// Dispatches new text.
    pub fn change(&self, value: impl Into<String>) {
        self.on_change.call(value.into());
    }

    /// Dispatches a key press.
    pub fn key_down(&self, press: KeyPress) {
        self.on_key_down.call(press);
    }

    /// Dispatches loss of focus.
    pub fn blur(&self, event: BlurEvent) {
        self.on_blur.call(event);
    }
}

impl Editable {
    fn control_props(
        &self,
        focus_id: FocusId,
        disabled: bool,
        action: CallbackWith<()>,
        overrides: ControlOverrides,
    ) -> ControlProps {
        ControlProps {
            button_type: ButtonType::Button,
            disabled,
            focus_id,
            on_click: Handlers::from(action).extend(overrides.on_click),
        }
    }

    /// Props for a button that starts editing.
    ///
    /// Requesting these props registers the button, for the render in
    /// progress, as the element that takes focus back when editing ends.
    pub fn edit_props(&self, overrides: ControlOverrides) -> ControlProps {
        let disabled = self.inner.with_mut(|inner| {
            inner.edit_control_rendered = true;
            !inner.args.is_interactive()
        });
        let editable = self.clone();
        self.control_props(
            self.focus.edit.id(),
            disabled,
            CallbackWith::new(closure!(clone editable, |_: ()| editable.edit())),
            overrides,
        )
    }

    /// Props for a button that submits the edit.
    pub fn submit_props(&self, overrides: ControlOverrides) -> ControlProps {
        let editable = self.clone();
        self.control_props(
            self.focus.submit.id(),
            false,
            CallbackWith::new(closure!(clone editable, |_: ()| editable.submit())),
            overrides,
        )
    }

    /// Props for a button that cancels the edit.
    pub fn cancel_props(&self, overrides: ControlOverrides) -> ControlProps {
        let editable = self.clone();
        self.control_props(
            self.focus.cancel.id(),
            false,
            CallbackWith::new(closure!(clone editable, |_: ()| editable.cancel())),
            overrides,
        )
    }

    /// Props for the preview element.
    pub fn preview_props(&self, overrides: PreviewOverrides) -> PreviewProps {
        let (hidden, focusable, value, placeholder) = self.inner.with(|inner| {
            (
                inner.state.is_editing,
                inner.args.preview_focusable && inner.args.is_interactive(),
                inner.state.value.clone(),
                inner.args.placeholder.clone(),
            )
        });
        let (text, is_placeholder) = match placeholder {
            Some(placeholder) if value.is_empty() => (placeholder, true),
            _ => (value, false),
        };

        let editable = self.clone();
        let on_focus = Handlers::from(CallbackWith::new(
            closure!(clone editable, |_: ()| editable.preview_focus()),
        ));

        PreviewProps {
            hidden,
            focusable,
            text,
            is_placeholder,
            focus_id: self.focus.preview.id(),
            on_focus: on_focus.extend(overrides.on_focus),
        }
    }

    /// Props for a single-line input.
    pub fn input_props(&self, overrides: InputOverrides) -> InputProps {
        self.field_props(false, overrides)
    }

    /// Props for a multi-line textarea.
    ///
    /// Key handling is the same as for the input: Shift+Enter or Meta+Enter
    /// inserts a line break instead of submitting.
    pub fn textarea_props(&self, overrides: InputOverrides) -> InputProps {
        self.field_props(true, overrides)
    }

    fn field_props(&self, multiline: bool, overrides: InputOverrides) -> InputProps {
        let (value, placeholder, hidden, disabled, read_only) = self.inner.with(|inner| {
            (
                inner.state.value.clone(),
                inner.args.placeholder.clone(),
                !inner.state.is_editing,
                inner.args.disabled,
                inner.args.read_only,
            )
        });

        let editable = self.clone();
        let on_change = Handlers::from(CallbackWith::new(
            closure!(clone editable, |value: String| editable.change(value)),
        ));
        let on_key_down = Handlers::from(CallbackWith::new(
            closure!(clone editable, |press: KeyPress| editable.key_down(&press)),
        ));
        let on_blur = Handlers::from(CallbackWith::new(
            closure!(clone editable, |event: BlurEvent| editable.blur(event)),
        ));

        InputProps {
            value,
            placeholder,
            hidden,
            disabled,
            read_only,
            multiline,
            focus_id: self.focus.input.id(),
            on_change: on_change.extend(overrides.on_change),
            on_key_down: on_key_down.extend(overrides.on_key_down),
            on_blur: on_blur.extend(overrides.on_blur),
        }
    }
}
