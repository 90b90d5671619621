//! Form Validation & Submission Controller state
//!
//! ```text
//!  Loading ──apply_loaded(ok)──▶ Editing ──begin_submit(valid)──▶ Submitting
//!     │                            ▲  │                              │
//!     └─apply_loaded(err)─▶ LoadFailed │ begin_submit(invalid)        │
//!                                  │  ▼                              │
//!                                  └─ Editing ◀──finish_submit(err)──┤
//!                                                                    ▼
//!                                                   Succeeded (navigate away)
//! ```
//!
//! Field state lives in schema order. Async results come back with the
//! ticket they were issued under and are ignored if it no longer matches.

use contracts::shared::validation::{FieldErrors, FieldRule};

use super::gateway::{GatewayError, Operation};

/// Values of a record's form, readable by field key
pub trait FormValues {
    fn value_of(&self, field: &str) -> &str;
}

impl FormValues for contracts::domain::a001_cafe::aggregate::CafeDto {
    fn value_of(&self, field: &str) -> &str {
        contracts::domain::a001_cafe::aggregate::CafeDto::value_of(self, field)
    }
}

impl FormValues for contracts::domain::a002_employee::aggregate::EmployeeFormValues {
    fn value_of(&self, field: &str) -> &str {
        contracts::domain::a002_employee::aggregate::EmployeeFormValues::value_of(self, field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub value: String,
    /// Baseline for dirty tracking (empty on create, fetched on edit)
    pub initial: String,
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn is_dirty(&self) -> bool {
        self.value != self.initial
    }

    /// Message to render: only once the user has been there
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    LoadFailed,
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Why `begin_submit` did not hand out a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Not in `Editing` (still loading, already submitting, ...)
    Busy,
    /// Local rules failed; messages are attached to the fields
    Invalid(FieldErrors),
}

/// What the view should do after `finish_submit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    NavigateToList,
    StayOnForm,
    Ignored,
}

/// What the view should do when the user cancels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelDecision {
    Leave,
    ConfirmDiscard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: &'static [FieldRule],
    noun: &'static str,
    mode: FormMode,
    fields: Vec<(&'static str, FieldState)>,
    phase: FormPhase,
    notice: Option<String>,
    seeded_id: Option<String>,
    load_seq: u64,
    submit_seq: u64,
}

impl FormState {
    /// Empty form, ready for input
    pub fn for_create(schema: &'static [FieldRule], noun: &'static str) -> Self {
        Self::build(schema, noun, FormMode::Create, FormPhase::Editing)
    }

    /// Form waiting for `begin_load`
    pub fn for_edit(schema: &'static [FieldRule], noun: &'static str) -> Self {
        Self::build(schema, noun, FormMode::Edit, FormPhase::Loading)
    }

    fn build(
        schema: &'static [FieldRule],
        noun: &'static str,
        mode: FormMode,
        phase: FormPhase,
    ) -> Self {
        Self {
            schema,
            noun,
            mode,
            fields: schema
                .iter()
                .map(|rule| (rule.name, FieldState::default()))
                .collect(),
            phase,
            notice: None,
            seeded_id: None,
            load_seq: 0,
            submit_seq: 0,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Id the edit form was seeded from
    pub fn seeded_id(&self) -> Option<&str> {
        self.seeded_id.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, f)| f)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| f)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldState)> {
        self.fields.iter().map(|(n, f)| (*n, f))
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn visible_error(&self, name: &str) -> Option<String> {
        self.field(name)
            .and_then(FieldState::visible_error)
            .map(str::to_string)
    }

    fn rule(&self, name: &str) -> Option<&'static FieldRule> {
        self.schema.iter().find(|rule| rule.name == name)
    }

    /// User typed into a field
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let rule = self.rule(name);
        if let Some(field) = self.field_mut(name) {
            field.value = value.into();
            field.error = rule.and_then(|r| r.check(&field.value).err());
        }
    }

    /// User left a field
    pub fn touch(&mut self, name: &str) {
        let rule = self.rule(name);
        if let Some(field) = self.field_mut(name) {
            field.touched = true;
            field.error = rule.and_then(|r| r.check(&field.value).err());
        }
    }

    // ------------------------------------------------------------------
    // Edit mode loading
    // ------------------------------------------------------------------

    /// Ask for the record `id`. Returns `None` when the form was already
    /// seeded from that id, so each id is fetched and seeded exactly once.
    pub fn begin_load(&mut self, id: &str) -> Option<LoadTicket> {
        if self.seeded_id.as_deref() == Some(id) {
            return None;
        }
        self.load_seq += 1;
        self.phase = FormPhase::Loading;
        self.notice = None;
        Some(LoadTicket(self.load_seq))
    }

    /// Seed from the fetched record, or enter the terminal failed state.
    /// Returns `false` for a stale ticket.
    pub fn apply_loaded(
        &mut self,
        ticket: LoadTicket,
        id: &str,
        result: Result<&dyn FormValues, &GatewayError>,
    ) -> bool {
        if ticket.0 != self.load_seq {
            log::warn!("Discarding stale {} load for id {}", self.noun, id);
            return false;
        }
        match result {
            Ok(values) => {
                for (name, field) in self.fields.iter_mut() {
                    let value = values.value_of(name).to_string();
                    *field = FieldState {
                        initial: value.clone(),
                        value,
                        touched: false,
                        error: None,
                    };
                }
                self.seeded_id = Some(id.to_string());
                self.phase = FormPhase::Editing;
            }
            Err(error) => {
                let message = if error.is_not_found() {
                    error.user_message(Operation::Load, self.noun)
                } else {
                    GatewayError::Server {
                        status: None,
                        message: None,
                    }
                    .user_message(Operation::Load, self.noun)
                };
                self.notice = Some(message);
                self.phase = FormPhase::LoadFailed;
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Validate everything and, if valid, switch to `Submitting`.
    ///
    /// `build` turns the current values into the wire payload and is where
    /// the record's own rules run.
    pub fn begin_submit<P, F>(&mut self, build: F) -> Result<(SubmitTicket, P), SubmitBlocked>
    where
        F: FnOnce(&FormState) -> Result<P, FieldErrors>,
    {
        if self.phase != FormPhase::Editing {
            return Err(SubmitBlocked::Busy);
        }

        for (_, field) in self.fields.iter_mut() {
            field.touched = true;
        }

        match build(self) {
            Ok(payload) => {
                for (_, field) in self.fields.iter_mut() {
                    field.error = None;
                }
                self.notice = None;
                self.submit_seq += 1;
                self.phase = FormPhase::Submitting;
                Ok((SubmitTicket(self.submit_seq), payload))
            }
            Err(errors) => {
                self.apply_field_errors(&errors);
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    fn apply_field_errors(&mut self, errors: &FieldErrors) {
        for (name, field) in self.fields.iter_mut() {
            field.error = errors.get(name).map(str::to_string);
        }
    }

    /// Gateway answered. Success → leave; failure → back to editing with a
    /// notice and the entered values intact.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), GatewayError>,
    ) -> SubmitOutcome {
        if ticket.0 != self.submit_seq || self.phase != FormPhase::Submitting {
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(()) => {
                self.phase = FormPhase::Succeeded;
                SubmitOutcome::NavigateToList
            }
            Err(error) => {
                let operation = match self.mode {
                    FormMode::Create => Operation::Create,
                    FormMode::Edit => Operation::Update,
                };
                if let Some(fields) = error.field_errors() {
                    for (name, field) in self.fields.iter_mut() {
                        if let Some(message) = fields.get(name) {
                            field.error = Some(message.to_string());
                            field.touched = true;
                        }
                    }
                }
                self.notice = Some(error.user_message(operation, self.noun));
                self.phase = FormPhase::Editing;
                SubmitOutcome::StayOnForm
            }
        }
    }

    // ------------------------------------------------------------------
    // Cancel
    // ------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|(_, f)| f.is_dirty())
    }

    pub fn cancel(&self) -> CancelDecision {
        if self.is_dirty() {
            CancelDecision::ConfirmDiscard
        } else {
            CancelDecision::Leave
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_cafe::aggregate::{fields, CafeDto, CAFE_SCHEMA};
    use contracts::domain::a002_employee::aggregate::{
        fields as emp, EmployeeFormValues, EMPLOYEE_SCHEMA,
    };
    use contracts::enums::Gender;

    fn cafe_payload(form: &FormState) -> Result<CafeDto, FieldErrors> {
        let dto = CafeDto::new(
            form.value(fields::NAME).to_string(),
            form.value(fields::DESCRIPTION).to_string(),
            form.value(fields::LOCATION).to_string(),
        );
        dto.validate().map(|_| dto)
    }

    fn filled_cafe() -> FormState {
        let mut form = FormState::for_create(CAFE_SCHEMA, "cafe");
        form.set_value(fields::NAME, "Central");
        form.set_value(fields::DESCRIPTION, "Downtown spot");
        form.set_value(fields::LOCATION, "Main St");
        form
    }

    #[test]
    fn fields_follow_schema_order() {
        let form = FormState::for_create(CAFE_SCHEMA, "cafe");
        let names: Vec<_> = form.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "description", "location"]);
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = FormState::for_create(CAFE_SCHEMA, "cafe");
        form.set_value(fields::NAME, "abc");
        assert_eq!(form.visible_error(fields::NAME), None);
        form.touch(fields::NAME);
        assert_eq!(
            form.visible_error(fields::NAME).as_deref(),
            Some("Name must be at least 6 characters")
        );
        form.set_value(fields::NAME, "abcdef");
        assert_eq!(form.visible_error(fields::NAME), None);
    }

    #[test]
    fn short_or_long_name_blocks_submission() {
        for name in ["a", "abcde", "abcdefghijk"] {
            let mut form = filled_cafe();
            form.set_value(fields::NAME, name);
            match form.begin_submit(cafe_payload) {
                Err(SubmitBlocked::Invalid(errors)) => {
                    assert!(errors.get(fields::NAME).unwrap().starts_with("Name must be"));
                }
                other => panic!("{name:?} should be blocked, got {other:?}"),
            }
            assert_eq!(form.phase(), FormPhase::Editing);
            assert!(form.visible_error(fields::NAME).is_some());
        }
    }

    #[test]
    fn submit_touches_every_field() {
        let mut form = FormState::for_create(CAFE_SCHEMA, "cafe");
        assert!(form.begin_submit(cafe_payload).is_err());
        assert_eq!(form.visible_error(fields::NAME).as_deref(), Some("Name is required"));
        assert_eq!(
            form.visible_error(fields::DESCRIPTION).as_deref(),
            Some("Description is required")
        );
        assert_eq!(
            form.visible_error(fields::LOCATION).as_deref(),
            Some("Location is required")
        );
    }

    #[test]
    fn valid_submit_and_success_navigates() {
        let mut form = filled_cafe();
        let (ticket, dto) = form.begin_submit(cafe_payload).unwrap();
        assert_eq!(dto.name, "Central");
        assert_eq!(form.phase(), FormPhase::Submitting);

        // second click while in flight
        assert_eq!(form.begin_submit(cafe_payload).unwrap_err(), SubmitBlocked::Busy);

        assert_eq!(form.finish_submit(ticket, Ok(())), SubmitOutcome::NavigateToList);
        assert_eq!(form.phase(), FormPhase::Succeeded);
    }

    #[test]
    fn failure_keeps_values_and_shows_notice() {
        let mut form = filled_cafe();
        let (ticket, _) = form.begin_submit(cafe_payload).unwrap();
        let outcome = form.finish_submit(ticket, Err(GatewayError::Transport("timeout".into())));
        assert_eq!(outcome, SubmitOutcome::StayOnForm);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.notice(), Some("No response from server"));
        assert_eq!(form.value(fields::NAME), "Central");

        form.dismiss_notice();
        assert_eq!(form.notice(), None);
        assert!(form.begin_submit(cafe_payload).is_ok());
    }

    #[test]
    fn server_field_messages_land_on_fields() {
        let mut form = filled_cafe();
        let (ticket, _) = form.begin_submit(cafe_payload).unwrap();
        let mut fields_err = FieldErrors::new();
        fields_err.insert("name", "Name already taken");
        form.finish_submit(
            ticket,
            Err(GatewayError::Validation {
                message: None,
                fields: fields_err,
            }),
        );
        assert_eq!(form.notice(), Some("Invalid cafe data"));
        assert_eq!(
            form.visible_error(fields::NAME).as_deref(),
            Some("Name already taken")
        );
    }

    #[test]
    fn stale_submit_result_ignored() {
        let mut form = filled_cafe();
        let (first, _) = form.begin_submit(cafe_payload).unwrap();
        form.finish_submit(first, Err(GatewayError::NotFound));
        let (_second, _) = form.begin_submit(cafe_payload).unwrap();
        assert_eq!(form.finish_submit(first, Ok(())), SubmitOutcome::Ignored);
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn create_cancel_needs_confirmation_only_when_dirty() {
        let mut form = FormState::for_create(CAFE_SCHEMA, "cafe");
        assert_eq!(form.cancel(), CancelDecision::Leave);
        form.set_value(fields::LOCATION, "x");
        assert_eq!(form.cancel(), CancelDecision::ConfirmDiscard);
        form.set_value(fields::LOCATION, "");
        assert_eq!(form.cancel(), CancelDecision::Leave);
    }

    fn ann() -> EmployeeFormValues {
        EmployeeFormValues {
            name: "Ann".into(),
            email_address: "a@x.com".into(),
            phone_number: "555".into(),
            gender: "Female".into(),
            cafe_id: "7".into(),
        }
    }

    fn employee_payload(
        form: &FormState,
    ) -> Result<contracts::domain::a002_employee::aggregate::EmployeeDto, FieldErrors> {
        EmployeeFormValues {
            name: form.value(emp::NAME).to_string(),
            email_address: form.value(emp::EMAIL_ADDRESS).to_string(),
            phone_number: form.value(emp::PHONE_NUMBER).to_string(),
            gender: form.value(emp::GENDER).to_string(),
            cafe_id: form.value(emp::CAFE_ID).to_string(),
        }
        .into_dto()
    }

    #[test]
    fn edit_seeds_display_value_and_normalizes_on_submit() {
        let mut form = FormState::for_edit(EMPLOYEE_SCHEMA, "employee");
        assert_eq!(form.phase(), FormPhase::Loading);
        assert!(form.begin_submit(employee_payload).is_err());

        let ticket = form.begin_load("42").unwrap();
        let values = ann();
        assert!(form.apply_loaded(ticket, "42", Ok(&values)));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.value(emp::GENDER), "Female");
        assert!(!form.is_dirty());

        let (_, dto) = form.begin_submit(employee_payload).unwrap();
        assert_eq!(dto.gender, Gender::Female);
    }

    #[test]
    fn edit_reseeds_once_per_id() {
        let mut form = FormState::for_edit(EMPLOYEE_SCHEMA, "employee");
        let ticket = form.begin_load("42").unwrap();
        form.apply_loaded(ticket, "42", Ok(&ann()));
        form.set_value(emp::NAME, "Annie");

        assert_eq!(form.begin_load("42"), None);
        assert_eq!(form.value(emp::NAME), "Annie");

        assert!(form.begin_load("43").is_some());
        assert_eq!(form.phase(), FormPhase::Loading);
    }

    #[test]
    fn stale_load_for_previous_id_is_dropped() {
        let mut form = FormState::for_edit(EMPLOYEE_SCHEMA, "employee");
        let old = form.begin_load("1").unwrap();
        let new = form.begin_load("2").unwrap();
        let mut other = ann();
        other.name = "Old".into();
        assert!(!form.apply_loaded(old, "1", Ok(&other)));
        assert!(form.apply_loaded(new, "2", Ok(&ann())));
        assert_eq!(form.value(emp::NAME), "Ann");
    }

    #[test]
    fn load_failure_is_terminal_with_message() {
        let mut form = FormState::for_edit(CAFE_SCHEMA, "cafe");
        let ticket = form.begin_load("9").unwrap();
        form.apply_loaded(ticket, "9", Err(&GatewayError::NotFound));
        assert_eq!(form.phase(), FormPhase::LoadFailed);
        assert_eq!(form.notice(), Some("Cafe not found"));
        assert_eq!(form.begin_submit(cafe_payload).unwrap_err(), SubmitBlocked::Busy);

        let mut form = FormState::for_edit(CAFE_SCHEMA, "cafe");
        let ticket = form.begin_load("9").unwrap();
        form.apply_loaded(ticket, "9", Err(&GatewayError::Transport("down".into())));
        assert_eq!(form.notice(), Some("Failed to fetch cafe details"));
    }

    #[test]
    fn edit_dirty_compares_with_fetched_baseline() {
        let mut form = FormState::for_edit(EMPLOYEE_SCHEMA, "employee");
        let ticket = form.begin_load("42").unwrap();
        form.apply_loaded(ticket, "42", Ok(&ann()));
        assert_eq!(form.cancel(), CancelDecision::Leave);
        form.set_value(emp::PHONE_NUMBER, "556");
        assert_eq!(form.cancel(), CancelDecision::ConfirmDiscard);
        form.set_value(emp::PHONE_NUMBER, "555");
        assert_eq!(form.cancel(), CancelDecision::Leave);
    }
}
