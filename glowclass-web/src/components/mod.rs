mod benefits;
mod hero;
mod registration_form;
mod social_proof;
mod toast;

pub use benefits::Benefits;
pub use hero::Hero;
pub use registration_form::RegistrationForm;
pub use social_proof::SocialProof;
pub use toast::{Toast, ToastStack};
