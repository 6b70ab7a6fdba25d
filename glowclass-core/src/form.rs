//! Form state and the submit-button lifecycle
//!
//! The page owns a single `FormState` that controlled inputs write into on
//! every keystroke. It is cleared only after a successful remote insert;
//! a failed insert leaves it untouched so the visitor can retry.

/// Experience level preselected when the page loads.
pub const DEFAULT_EXPERIENCE: &str = "beginner";

/// Current value of every field on the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pincode: String,
    pub city: String,
    pub experience: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            pincode: String::new(),
            city: String::new(),
            experience: DEFAULT_EXPERIENCE.to_string(),
        }
    }
}

impl FormState {
    /// Return every field to its initial value after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submit-button state: at most one insert may be in flight per click,
/// re-enabled only once the prior attempt resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn is_disabled(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmitState::Idle => "Secure Your Spot Now",
            SubmitState::Submitting => "Reserving your spot...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_starts_empty_with_default_experience() {
        let form = FormState::default();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.phone.is_empty());
        assert!(form.pincode.is_empty());
        assert!(form.city.is_empty());
        assert_eq!(form.experience, DEFAULT_EXPERIENCE);
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut form = FormState {
            name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            phone: "9820098200".to_string(),
            pincode: "400058".to_string(),
            city: "Mumbai".to_string(),
            experience: "advanced".to_string(),
        };
        form.reset();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_submit_state_drives_the_button() {
        assert!(!SubmitState::Idle.is_disabled());
        assert!(SubmitState::Submitting.is_disabled());
        assert_eq!(SubmitState::Idle.label(), "Secure Your Spot Now");
        assert_eq!(SubmitState::Submitting.label(), "Reserving your spot...");
    }
}
