//! Copy-to-clipboard button states.

/// Visual state of a code block's copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    /// Waiting for a click.
    #[default]
    Idle,
    /// Text reached the clipboard.
    Copied,
    /// Clipboard unavailable or write rejected.
    Failed,
}

impl CopyFeedback {
    /// Map a clipboard write result to the feedback to show.
    pub fn from_outcome<T, E>(outcome: &Result<T, E>) -> Self {
        if outcome.is_ok() {
            Self::Copied
        } else {
            Self::Failed
        }
    }

    /// Icon class for the button's `<i>`.
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Idle => "fas fa-copy",
            Self::Copied => "fas fa-check",
            Self::Failed => "fas fa-times",
        }
    }

    /// Inline text color; empty clears the override.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Copied => "#4CAF50",
            Self::Failed => "#f44336",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CopyFeedback;

    #[test]
    fn outcome_maps_to_feedback() {
        let ok: Result<(), ()> = Ok(());
        let err: Result<(), &str> = Err("NotAllowedError");
        assert_eq!(CopyFeedback::from_outcome(&ok), CopyFeedback::Copied);
        assert_eq!(CopyFeedback::from_outcome(&err), CopyFeedback::Failed);
    }

    #[test]
    fn idle_is_the_default_look() {
        assert_eq!(CopyFeedback::default().icon_class(), "fas fa-copy");
        assert_eq!(CopyFeedback::Idle.color(), "");
    }
}
