use crate::sanitize::FieldSanitizer;

/// One contact-form submission, request-scoped. Built from the parsed body
/// pairs and discarded once the confirmation page is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub message: String,
    pub gender: String,
    pub subjects: Vec<String>,
}

impl Submission {
    /// Build a submission from ordered (name, value) pairs.
    /// First occurrence wins for scalar fields; every `subject` value is
    /// collected in body order. Missing fields stay empty.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut first_name = None;
        let mut last_name = None;
        let mut email = None;
        let mut country = None;
        let mut message = None;
        let mut gender = None;
        let mut subjects = Vec::new();

        for (name, value) in pairs {
            let slot = match name.as_str() {
                "first_name" => &mut first_name,
                "last_name" => &mut last_name,
                "email" => &mut email,
                "country" => &mut country,
                "message" => &mut message,
                "gender" => &mut gender,
                "subject" => {
                    subjects.push(value.clone());
                    continue;
                }
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.clone());
            }
        }

        Submission {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            country: country.unwrap_or_default(),
            message: message.unwrap_or_default(),
            gender: gender.unwrap_or_default(),
            subjects,
        }
    }

    /// Apply the sanitizer to every scalar field and to each subject,
    /// preserving order.
    pub fn sanitized(&self, sanitizer: &FieldSanitizer) -> Submission {
        Submission {
            first_name: sanitizer.sanitize(&self.first_name),
            last_name: sanitizer.sanitize(&self.last_name),
            email: sanitizer.sanitize(&self.email),
            country: sanitizer.sanitize(&self.country),
            message: sanitizer.sanitize(&self.message),
            gender: sanitizer.sanitize(&self.gender),
            subjects: self
                .subjects
                .iter()
                .map(|s| sanitizer.sanitize(s))
                .collect(),
        }
    }
}
