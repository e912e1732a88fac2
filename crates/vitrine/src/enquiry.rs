#![forbid(unsafe_code)]

//! The contact form's submission path.
//!
//! Nothing is sent anywhere: the form acknowledges locally and logs the
//! enquiry so the rest of the page flow can be exercised end to end.

/// A filled-in contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enquiry {
    /// Sender's name.
    pub name: String,
    /// Reply address, as typed.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// What the form shows after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment {
    /// Confirmation copy.
    pub message: &'static str,
}

/// Accept an enquiry and acknowledge it. Always succeeds.
pub fn submit(enquiry: &Enquiry) -> Acknowledgment {
    tracing::info!(name = %enquiry.name, "contact enquiry received");
    Acknowledgment {
        message: "Thanks for getting in touch. We'll reply within a few days.",
    }
}
