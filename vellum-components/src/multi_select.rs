//! Selection model behind a multi-value select field.
//!
//! ## Usage
//!
//! Drive the field of a multi select: toggle options from the list, remove
//! tags, clear the selection and render the joined labels. Drawing the list
//! and its overlay is left to the renderer.
//!
//! ```
//! use vellum_components::multi_select::{MultiSelectArgs, MultiSelectController, SelectItem};
//!
//! let select = MultiSelectController::new(
//!     MultiSelectArgs::default()
//!         .items([SelectItem::option("Red", "red"), SelectItem::option("Blue", "blue")])
//!         .placeholder("Pick colors"),
//! );
//! assert_eq!(select.display_text(), "Pick colors");
//!
//! select.toggle("red");
//! select.toggle("blue");
//! assert_eq!(select.display_text(), "Red, Blue");
//! ```

mod item;

use derive_setters::Setters;
use smallvec::SmallVec;
use vellum_ui::{Callback, CallbackWith, Scope, ScopeError, State};

pub use item::{SelectItem, SelectOption, find_option};

/// Defaults for [`MultiSelectArgs`].
pub struct MultiSelectDefaults;

impl MultiSelectDefaults {
    /// Separator placed after every label but the last.
    pub const SEPARATOR: &'static str = ",";
}

/// Arguments for configuring a [`MultiSelectController`].
#[derive(Clone, PartialEq, Setters)]
pub struct MultiSelectArgs {
    /// Initial selection when uncontrolled.
    #[setters(skip)]
    pub default_value: Vec<String>,
    /// Controlled selection. Mirrored on every
    /// [`MultiSelectController::update_args`]; the caller reflects changes
    /// back from `on_change`.
    #[setters(skip)]
    pub value: Option<Vec<String>>,
    /// Options offered by the list.
    #[setters(skip)]
    pub items: Vec<SelectItem>,
    /// Separator placed after every label but the last.
    #[setters(into)]
    pub separator: String,
    /// Whether a clear affordance is shown while something is selected.
    pub clearable: bool,
    /// Whether the list closes after each toggle.
    pub close_on_select: bool,
    /// Upper bound on the number of selected values.
    #[setters(strip_option)]
    pub max_select_values: Option<usize>,
    /// Text shown while nothing is selected.
    #[setters(strip_option, into)]
    pub placeholder: Option<String>,
    /// Whether the select is disabled.
    pub disabled: bool,
    /// Whether the selection is read-only.
    pub read_only: bool,
    /// Called with the full selection after every change.
    #[setters(skip)]
    pub on_change: CallbackWith<Vec<String>>,
    /// Called when the list opens.
    #[setters(skip)]
    pub on_open: Callback,
    /// Called when the list closes.
    #[setters(skip)]
    pub on_close: Callback,
}

impl MultiSelectArgs {
    /// Set the initial selection.
    pub fn default_value<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_value = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set a controlled selection.
    pub fn value<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the offered options.
    pub fn items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SelectItem>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(Vec<String>) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Set the change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: CallbackWith<Vec<String>>) -> Self {
        self.on_change = on_change;
        self
    }

    /// Set the open handler.
    pub fn on_open<F>(mut self, on_open: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_open = Callback::new(on_open);
        self
    }

    /// Set the close handler.
    pub fn on_close<F>(mut self, on_close: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Callback::new(on_close);
        self
    }

    fn is_interactive(&self) -> bool {
        !self.disabled && !self.read_only
    }
}

impl Default for MultiSelectArgs {
    fn default() -> Self {
        Self {
            default_value: Vec::new(),
            value: None,
            items: Vec::new(),
            separator: MultiSelectDefaults::SEPARATOR.to_string(),
            clearable: true,
            close_on_select: false,
            max_select_values: None,
            placeholder: None,
            disabled: false,
            read_only: false,
            on_change: CallbackWith::noop(),
            on_open: Callback::noop(),
            on_close: Callback::noop(),
        }
    }
}

/// A selected value as handed to a custom tag renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedTag {
    /// The selected value.
    pub value: String,
    /// Its label.
    pub label: String,
    /// Position in the selection.
    pub index: usize,
    /// Deselects this value.
    pub on_remove: Callback,
}

/// What header and footer slots of the list receive.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectListScope {
    /// The current selection.
    pub value: Vec<String>,
    /// Closes the list.
    pub on_close: Callback,
}

struct MultiSelectInner {
    args: MultiSelectArgs,
    value: Vec<String>,
    is_open: bool,
}

impl MultiSelectInner {
    fn label_of(&self, value: &str) -> String {
        find_option(&self.args.items, value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| value.to_string())
    }
}

/// Controller for a multi select field.
#[derive(Clone)]
pub struct MultiSelectController {
    inner: State<MultiSelectInner>,
}

impl MultiSelectController {
    /// Creates a controller from its arguments.
    pub fn new(args: MultiSelectArgs) -> Self {
        if args.value.is_some() && !args.default_value.is_empty() {
            tracing::warn!(
                "multi select received both `value` and `default_value`; the controlled value wins"
            );
        }
        let value = args
            .value
            .clone()
            .unwrap_or_else(|| args.default_value.clone());

        Self {
            inner: State::new(MultiSelectInner {
                args,
                value,
                is_open: false,
            }),
        }
    }

    /// Applies the arguments of a new render.
    pub fn update_args(&self, args: MultiSelectArgs) {
        self.inner.with_mut(|inner| {
            if let Some(value) = &args.value {
                inner.value.clone_from(value);
            }
            inner.args = args;
        });
    }

    /// The current selection.
    pub fn value(&self) -> Vec<String> {
        self.inner.with(|inner| inner.value.clone())
    }

    /// Whether `value` is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.inner
            .with(|inner| inner.value.iter().any(|selected| selected == value))
    }

    /// Whether the option list is open.
    pub fn is_open(&self) -> bool {
        self.inner.with(|inner| inner.is_open)
    }

    /// Opens the option list.
    pub fn open(&self) {
        let on_open = self.inner.with_mut(|inner| {
            if inner.is_open || !inner.args.is_interactive() {
                return None;
            }
            inner.is_open = true;
            Some(inner.args.on_open.clone())
        });
        if let Some(on_open) = on_open {
            tracing::debug!("multi select opened");
            on_open.call();
        }
    }

    /// Closes the option list.
    pub fn close(&self) {
        let on_close = self.inner.with_mut(|inner| {
            if !inner.is_open {
                return None;
            }
            inner.is_open = false;
            Some(inner.args.on_close.clone())
        });
        if let Some(on_close) = on_close {
            tracing::debug!("multi select closed");
            on_close.call();
        }
    }

    /// Selects `value` if it is not selected, deselects it otherwise.
    ///
    /// Unknown or disabled options are never selected, and nothing beyond
    /// `max_select_values` is added.
    pub fn toggle(&self, value: &str) {
        let close_on_select = self.update_value(|inner| {
            let mut next = inner.value.clone();
            if let Some(position) = next.iter().position(|selected| selected == value) {
                next.remove(position);
                return Some(next);
            }

            let selectable =
                find_option(&inner.args.items, value).is_some_and(|option| !option.disabled);
            let below_limit = inner
                .args
                .max_select_values
                .is_none_or(|max| next.len() < max);
            if !selectable || !below_limit {
                tracing::trace!(value, selectable, below_limit, "toggle ignored");
                return None;
            }
            next.push(value.to_string());
            Some(next)
        });

        if close_on_select == Some(true) {
            self.close();
        }
    }

    /// Deselects `value`.
    pub fn remove(&self, value: &str) {
        self.update_value(|inner| {
            let position = inner.value.iter().position(|selected| selected == value)?;
            let mut next = inner.value.clone();
            next.remove(position);
            Some(next)
        });
    }

    /// Deselects the value at `index`.
    pub fn remove_at(&self, index: usize) {
        self.update_value(|inner| {
            (index < inner.value.len()).then(|| {
                let mut next = inner.value.clone();
                next.remove(index);
                next
            })
        });
    }

    /// Deselects everything.
    pub fn clear(&self) {
        self.update_value(|inner| (!inner.value.is_empty()).then(Vec::new));
    }

    /// Applies a new selection computed by `next`, returning whether the list
    /// should close, or `None` when nothing changed.
    fn update_value(
        &self,
        next: impl FnOnce(&MultiSelectInner) -> Option<Vec<String>>,
    ) -> Option<bool> {
        let (on_change, value, close_on_select) = self.inner.with_mut(|inner| {
            if !inner.args.is_interactive() {
                return None;
            }
            let value = next(inner)?;
            if inner.args.value.is_none() {
                inner.value.clone_from(&value);
            }
            Some((
                inner.args.on_change.clone(),
                value,
                inner.args.close_on_select,
            ))
        })?;

        tracing::debug!(?value, "multi select changed");
        on_change.call(value);
        Some(close_on_select)
    }

    /// Labels of the selected values, in selection order.
    ///
    /// A value without a matching option is shown as-is.
    pub fn labels(&self) -> Vec<String> {
        self.inner.with(|inner| {
            inner
                .value
                .iter()
                .map(|value| inner.label_of(value))
                .collect()
        })
    }

    /// Labels with the separator appended to all but the last.
    pub fn display_segments(&self) -> SmallVec<[String; 4]> {
        let separator = self.inner.with(|inner| inner.args.separator.clone());
        let labels = self.labels();
        let last = labels.len().saturating_sub(1);
        labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                if index == last {
                    label
                } else {
                    format!("{label}{separator}")
                }
            })
            .collect()
    }

    /// Text for the field: the segments separated by spaces, or the
    /// placeholder when nothing is selected.
    pub fn display_text(&self) -> String {
        let segments = self.display_segments();
        if segments.is_empty() {
            return self
                .inner
                .with(|inner| inner.args.placeholder.clone())
                .unwrap_or_default();
        }
        segments.join(" ")
    }

    /// Whether the clear affordance should be shown instead of the dropdown
    /// icon.
    pub fn show_clear_icon(&self) -> bool {
        self.inner
            .with(|inner| inner.args.clearable && !inner.value.is_empty())
    }

    /// Selected values as tags for a custom renderer.
    pub fn tags(&self) -> Vec<SelectedTag> {
        let selected = self.inner.with(|inner| {
            inner
                .value
                .iter()
                .map(|value| (value.clone(), inner.label_of(value)))
                .collect::<Vec<_>>()
        });

        selected
            .into_iter()
            .enumerate()
            .map(|(index, (value, label))| {
                let controller = self.clone();
                let target = value.clone();
                SelectedTag {
                    value,
                    label,
                    index,
                    on_remove: Callback::new(move || controller.remove(&target)),
                }
            })
            .collect()
    }

    /// Data for the list's header and footer slots.
    pub fn list_scope(&self) -> SelectListScope {
        let controller = self.clone();
        SelectListScope {
            value: self.value(),
            on_close: Callback::new(move || controller.close()),
        }
    }

    /// Returns a child scope exposing this controller to the field and list.
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.clone())
    }
}

/// Looks up the nearest [`MultiSelectController`] provided with
/// [`MultiSelectController::provide`].
///
/// # Errors
///
/// Returns [`ScopeError::Missing`] outside a multi select.
pub fn use_multi_select(scope: &Scope) -> Result<MultiSelectController, ScopeError> {
    scope
        .get::<MultiSelectController>()
        .map(|controller| MultiSelectController::clone(&controller))
}
