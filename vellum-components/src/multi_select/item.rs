//! Options offered by a multi select.

/// A selectable option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Text shown for the option and for its tag once selected.
    pub label: String,
    /// Value reported through `on_change`.
    pub value: String,
    /// Whether the option can be toggled.
    pub disabled: bool,
}

impl SelectOption {
    /// An enabled option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    /// Returns the option with `disabled` set.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// An entry in the option list: a single option or a labelled group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectItem {
    /// A top-level option.
    Option(SelectOption),
    /// A labelled group of options.
    Group {
        /// Group heading.
        label: String,
        /// Options in the group.
        items: Vec<SelectOption>,
    },
}

impl SelectItem {
    /// A top-level option.
    pub fn option(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Option(SelectOption::new(label, value))
    }

    /// A group of options.
    pub fn group(label: impl Into<String>, items: impl IntoIterator<Item = SelectOption>) -> Self {
        Self::Group {
            label: label.into(),
            items: items.into_iter().collect(),
        }
    }

    /// Options contained in this item, in display order.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::Option(option) => std::slice::from_ref(option),
            Self::Group { items, .. } => items,
        }
    }
}

impl From<SelectOption> for SelectItem {
    fn from(option: SelectOption) -> Self {
        Self::Option(option)
    }
}

/// Finds the option with `value` among `items`, groups included.
pub fn find_option<'a>(items: &'a [SelectItem], value: &str) -> Option<&'a SelectOption> {
    items
        .iter()
        .flat_map(SelectItem::options)
        .find(|option| option.value == value)
}
