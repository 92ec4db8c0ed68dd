use serde::{Deserialize, Serialize};

/// Country calling codes offered by the contact step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountryCode {
    #[serde(rename = "+91")]
    India,
    #[serde(rename = "+1")]
    America,
}

impl CountryCode {
    pub const ALL: [CountryCode; 2] = [CountryCode::India, CountryCode::America];

    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::India => "+91",
            CountryCode::America => "+1",
        }
    }

    /// Label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            CountryCode::India => "India (+91)",
            CountryCode::America => "America (+1)",
        }
    }

    /// Cycle through unselected -> India -> America -> unselected
    pub fn cycle(current: Option<CountryCode>, forward: bool) -> Option<CountryCode> {
        let order = [None, Some(CountryCode::India), Some(CountryCode::America)];
        let pos = order.iter().position(|c| *c == current).unwrap_or(0);
        let len = order.len();
        let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
        order[next]
    }
}

/// Every input on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    EmailId,
    Password,
    FirstName,
    LastName,
    Address,
    CountryCode,
    PhoneNumber,
    AcceptTermsAndCondition,
}

impl Field {
    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            Field::EmailId => "emailId",
            Field::Password => "password",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Address => "address",
            Field::CountryCode => "countryCode",
            Field::PhoneNumber => "phoneNumber",
            Field::AcceptTermsAndCondition => "acceptTermsAndCondition",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::EmailId => "Email",
            Field::Password => "Password",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Address => "Address",
            Field::CountryCode => "Country Code",
            Field::PhoneNumber => "Phone Number",
            Field::AcceptTermsAndCondition => "Accept Terms and Conditions",
        }
    }

    /// Whether the field is edited as free text
    pub fn is_text(&self) -> bool {
        !matches!(self, Field::CountryCode | Field::AcceptTermsAndCondition)
    }
}

/// Value of a single field as seen by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

/// Flat record backing the registration wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRecord {
    pub email_id: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub country_code: Option<CountryCode>,
    pub phone_number: String,
    pub accept_terms_and_condition: bool,
}

impl RegistrationRecord {
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::EmailId => FieldValue::Text(&self.email_id),
            Field::Password => FieldValue::Text(&self.password),
            Field::FirstName => FieldValue::Text(&self.first_name),
            Field::LastName => FieldValue::Text(&self.last_name),
            Field::Address => FieldValue::Text(&self.address),
            Field::CountryCode => {
                FieldValue::Text(self.country_code.map(|c| c.as_str()).unwrap_or(""))
            }
            Field::PhoneNumber => FieldValue::Text(&self.phone_number),
            Field::AcceptTermsAndCondition => FieldValue::Flag(self.accept_terms_and_condition),
        }
    }

    /// Current text of a free-text field; empty for the selector and checkbox
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::EmailId => &self.email_id,
            Field::Password => &self.password,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Address => &self.address,
            Field::PhoneNumber => &self.phone_number,
            Field::CountryCode | Field::AcceptTermsAndCondition => "",
        }
    }

    /// Returns false when the field is not a text field
    pub(crate) fn set_text(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::EmailId => &mut self.email_id,
            Field::Password => &mut self.password,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Address => &mut self.address,
            Field::PhoneNumber => &mut self.phone_number,
            Field::CountryCode | Field::AcceptTermsAndCondition => return false,
        };
        *slot = value;
        true
    }
}

/// Body posted to the submit endpoint.
///
/// `acceptTermsAndCondition` is validated on the contact step but never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub email_id: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub country_code: String,
    pub phone_number: String,
}

impl From<&RegistrationRecord> for SubmitPayload {
    fn from(record: &RegistrationRecord) -> Self {
        Self {
            email_id: record.email_id.clone(),
            password: record.password.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            address: record.address.clone(),
            country_code: record
                .country_code
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            phone_number: record.phone_number.clone(),
        }
    }
}
