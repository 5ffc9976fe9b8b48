use serde::Deserialize;
use validator::Validate;

// Customer creation form. Required fields fail validation when blank;
// email and business name stay optional.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last Name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "ID Number is required"))]
    pub id_number: String,

    #[validate(length(min = 1, message = "Phone Number is required"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 1, message = "Postal Code is required"))]
    pub postal_code: String,

    #[validate(email)]
    pub email_address: Option<String>,

    pub business_name: Option<String>,
}

impl CreateCustomerRequest {
    /// Treat blank optional fields as absent
    pub fn normalized(mut self) -> Self {
        self.email_address = self.email_address.filter(|v| !v.trim().is_empty());
        self.business_name = self.business_name.filter(|v| !v.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateCustomerRequest {
        CreateCustomerRequest {
            first_name: "Ada".to_string(),
            last_name: "Okafor".to_string(),
            id_number: "ID-100".to_string(),
            phone_number: "555-0100".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            email_address: None,
            business_name: None,
        }
    }

    #[test]
    fn complete_request_validates() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn missing_required_field_fails_validation() {
        let mut req = request();
        req.first_name = String::new();
        let errors = req.validate().expect_err("blank first name must fail");
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn blank_optionals_normalize_to_absent() {
        let mut req = request();
        req.email_address = Some("  ".to_string());
        req.business_name = Some(String::new());
        let req = req.normalized();
        assert!(req.email_address.is_none());
        assert!(req.business_name.is_none());
    }
}
