use serde::{Deserialize, Serialize};

use crate::domain::common::{opaque_id, Record};
use crate::enums::Gender;
use crate::shared::validation::{validate_schema, FieldErrors, FieldRule, ValidationRules};

// ============================================================================
// Record
// ============================================================================

/// Сотрудник кафе
///
/// `gender` is kept exactly as the server sent it ("Female", "male", ...);
/// it is normalized only when a form is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "email")]
    pub email_address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default, deserialize_with = "opaque_id")]
    pub cafe_id: String,
    /// Denormalized for display only
    #[serde(default)]
    pub cafe_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub days_worked: Option<i64>,
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn record_index() -> &'static str {
        "a002"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }

    fn message_noun() -> &'static str {
        "employee"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL_ADDRESS: &str = "emailAddress";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const GENDER: &str = "gender";
    pub const CAFE_ID: &str = "cafeId";
}

/// Правила формы сотрудника
pub const EMPLOYEE_SCHEMA: &[FieldRule] = &[
    FieldRule::new(fields::NAME, "Name", ValidationRules::required()),
    FieldRule::new(
        fields::EMAIL_ADDRESS,
        "Email",
        ValidationRules::required().email(),
    ),
    FieldRule::new(
        fields::PHONE_NUMBER,
        "Phone number",
        ValidationRules::required(),
    ),
    FieldRule::new(
        fields::GENDER,
        "Gender",
        ValidationRules::required().one_of(Gender::CODES),
    ),
    FieldRule::new(fields::CAFE_ID, "Cafe", ValidationRules::required()),
];

/// Raw, user-editable field values of the employee form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeFormValues {
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: String,
    pub cafe_id: String,
}

impl EmployeeFormValues {
    /// Seed from a fetched record; gender stays as displayed by the server
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email_address: employee.email_address.clone(),
            phone_number: employee.phone_number.clone(),
            gender: employee.gender.clone(),
            cafe_id: employee.cafe_id.clone(),
        }
    }

    pub fn value_of(&self, field: &str) -> &str {
        match field {
            fields::NAME => &self.name,
            fields::EMAIL_ADDRESS => &self.email_address,
            fields::PHONE_NUMBER => &self.phone_number,
            fields::GENDER => &self.gender,
            fields::CAFE_ID => &self.cafe_id,
            _ => "",
        }
    }

    /// Validate and normalize into the wire payload
    pub fn into_dto(self) -> Result<EmployeeDto, FieldErrors> {
        let mut errors = validate_schema(EMPLOYEE_SCHEMA, |field| self.value_of(field));
        let gender = Gender::parse(&self.gender);
        if gender.is_none() && errors.get(fields::GENDER).is_none() {
            errors.insert(fields::GENDER, "Gender must be male or female");
        }
        match gender {
            Some(gender) if errors.is_empty() => Ok(EmployeeDto {
                name: self.name.trim().to_string(),
                email_address: self.email_address.trim().to_string(),
                phone_number: self.phone_number.trim().to_string(),
                gender,
                cafe_id: self.cafe_id.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// DTO для создания/обновления сотрудника
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    pub cafe_id: String,
}
