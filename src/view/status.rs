//! Single-slot status message.

use tracing::warn;

use super::PriceView;

/// Severity of a status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Warning,
    Loading,
    #[default]
    None,
}

impl StatusKind {
    /// Returns a short display label.
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
            StatusKind::Warning => "warning",
            StatusKind::Loading => "loading",
            StatusKind::None => "",
        }
    }
}

/// The status surface: visibility, text, and at most one severity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusSlot {
    pub visible: bool,
    pub text: String,
    /// Applied severity; `None` when hidden or when shown without one.
    pub kind: Option<StatusKind>,
}

impl PriceView {
    /// Shows `message` with the given severity, or hides the slot when
    /// `message` is empty.
    pub fn set_status(&mut self, kind: StatusKind, message: &str) {
        let Some(slot) = self.status.as_mut() else {
            warn!(kind = kind.label(), "status surface missing, dropping message");
            return;
        };

        slot.text = message.to_string();
        slot.kind = None;

        if message.is_empty() {
            slot.visible = false;
            return;
        }

        slot.visible = true;
        if kind != StatusKind::None {
            slot.kind = Some(kind);
        }
    }
}
