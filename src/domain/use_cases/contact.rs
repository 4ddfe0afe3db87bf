use validator::Validate;

use crate::{
    entities::contact::{ContactForm, ContactResponse},
    errors::AppError,
};

/// Validates and logs contact submissions. Messages are only written to the
/// process log: there is no persistence and no outbound delivery. Wiring a
/// mail or queue service in is a separate collaborator, not this handler's
/// concern.
pub fn submit_contact(form: ContactForm) -> Result<ContactResponse, AppError> {
    form.validate()?;

    tracing::info!(
        name = %form.name,
        email = %form.email,
        subject = %form.subject,
        message = %form.message,
        "📧 New contact message"
    );

    Ok(ContactResponse {
        message: "Message received successfully!".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Budi Santoso".into(),
            email: "budi@example.com".into(),
            subject: "Halo".into(),
            message: "Saya tertarik bekerja sama.".into(),
        }
    }

    #[test]
    fn valid_submission_is_confirmed() {
        let response = submit_contact(valid_form()).unwrap();
        assert_eq!(response.message, "Message received successfully!");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = valid_form();
        form.email = "not-an-email".into();

        let err = submit_contact(form).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn blank_subject_is_rejected() {
        let mut form = valid_form();
        form.subject = "".into();

        assert!(matches!(
            submit_contact(form),
            Err(AppError::ValidationError(_))
        ));
    }
}
