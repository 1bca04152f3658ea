//! Access to an editable from custom controls rendered inside it.

use vellum_ui::{Scope, ScopeError};

use super::{ControlOverrides, ControlProps, Editable};

/// Handle given to custom edit/submit/cancel controls.
#[derive(Clone)]
pub struct EditableControl {
    editable: Editable,
}

impl EditableControl {
    /// Whether the editable is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.editable.is_editing()
    }

    /// Props for a button that starts editing.
    pub fn edit_props(&self, overrides: ControlOverrides) -> ControlProps {
        self.editable.edit_props(overrides)
    }

    /// Props for a button that submits the edit.
    pub fn submit_props(&self, overrides: ControlOverrides) -> ControlProps {
        self.editable.submit_props(overrides)
    }

    /// Props for a button that cancels the edit.
    pub fn cancel_props(&self, overrides: ControlOverrides) -> ControlProps {
        self.editable.cancel_props(overrides)
    }

    /// The underlying controller.
    pub fn editable(&self) -> &Editable {
        &self.editable
    }
}

/// Looks up the nearest [`Editable`] provided with [`Editable::provide`].
///
/// # Errors
///
/// Returns [`ScopeError::Missing`] when the control is composed outside an
/// editable.
pub fn use_editable_control(scope: &Scope) -> Result<EditableControl, ScopeError> {
    let editable = scope.get::<Editable>()?;
    Ok(EditableControl {
        editable: Editable::clone(&editable),
    })
}
