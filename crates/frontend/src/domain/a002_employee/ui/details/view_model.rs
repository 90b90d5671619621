use crate::domain::{a001_cafe, a002_employee::api};
use crate::shared::dom;
use crate::shared::form_state::{CancelDecision, FormMode, FormState, SubmitBlocked, SubmitOutcome};
use crate::shared::gateway::AppGateway;
use contracts::domain::a002_employee::aggregate::{
    fields, Employee, EmployeeDto, EmployeeFormValues, EMPLOYEE_SCHEMA,
};
use contracts::domain::common::Record;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// ViewModel for the employee create/edit form
#[derive(Clone)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<FormState>,
    /// `(id, name)` of every café, for the café drop-down
    pub cafes: RwSignal<Vec<(String, String)>>,
    gateway: AppGateway,
}

fn build_payload(form: &FormState) -> Result<EmployeeDto, FieldErrors> {
    EmployeeFormValues {
        name: form.value(fields::NAME).to_string(),
        email_address: form.value(fields::EMAIL_ADDRESS).to_string(),
        phone_number: form.value(fields::PHONE_NUMBER).to_string(),
        gender: form.value(fields::GENDER).to_string(),
        cafe_id: form.value(fields::CAFE_ID).to_string(),
    }
    .into_dto()
}

impl EmployeeDetailsViewModel {
    pub fn new(gateway: AppGateway, mode: FormMode) -> Self {
        let noun = Employee::message_noun();
        let form = match mode {
            FormMode::Create => FormState::for_create(EMPLOYEE_SCHEMA, noun),
            FormMode::Edit => FormState::for_edit(EMPLOYEE_SCHEMA, noun),
        };
        Self {
            form: RwSignal::new(form),
            cafes: RwSignal::new(Vec::new()),
            gateway,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.mode() == FormMode::Edit)
    }

    /// Café choices; a failure only leaves the drop-down short
    pub fn load_cafes(&self) {
        let cafes = self.cafes;
        let gateway = self.gateway.clone();
        spawn_local(async move {
            match a001_cafe::api::fetch_all(&gateway).await {
                Ok(list) => {
                    let options = list.into_iter().map(|c| (c.id, c.name)).collect();
                    cafes.try_set(options);
                }
                Err(e) => log::error!("Failed to load cafes for employee form: {}", e),
            }
        });
    }

    /// Fetch the record and seed the form, once per id
    pub fn load(&self, id: String) {
        let Some(ticket) = self.form.try_update(|f| f.begin_load(&id)).flatten() else {
            return;
        };
        let form = self.form;
        let gateway = self.gateway.clone();
        spawn_local(async move {
            let result = api::fetch_by_id(&gateway, &id)
                .await
                .map(|employee| EmployeeFormValues::from_employee(&employee));
            if let Err(e) = &result {
                log::error!("Failed to load employee {}: {}", id, e);
            }
            form.try_update(|f| match &result {
                Ok(values) => f.apply_loaded(ticket, &id, Ok(values)),
                Err(e) => f.apply_loaded(ticket, &id, Err(e)),
            });
        });
    }

    /// Validate (normalizing gender), then create or update
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let started = self.form.try_update(|f| {
            let id = f.seeded_id().map(str::to_string);
            f.begin_submit(build_payload).map(|(ticket, dto)| (ticket, dto, id))
        });
        let (ticket, dto, id) = match started {
            Some(Ok(started)) => started,
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                log::debug!("Employee form has {} invalid field(s)", errors.len());
                return;
            }
            _ => return,
        };

        let form = self.form;
        let gateway = self.gateway.clone();
        spawn_local(async move {
            let result = match &id {
                None => api::create(&gateway, &dto).await,
                Some(id) => api::update(&gateway, id, &dto).await,
            };
            let result = match result {
                Ok(saved) => {
                    log::info!("Saved employee {}", saved.id());
                    Ok(())
                }
                Err(e) => {
                    log::error!("Failed to save employee: {}", e);
                    Err(e)
                }
            };
            let outcome = form.try_update(|f| f.finish_submit(ticket, result));
            if outcome == Some(SubmitOutcome::NavigateToList) {
                (on_saved)(());
            }
        });
    }

    pub fn cancel_command(&self, on_cancel: Rc<dyn Fn(())>) {
        let decision = self.form.with_untracked(FormState::cancel);
        if decision == CancelDecision::Leave || dom::confirm_discard() {
            (on_cancel)(());
        }
    }
}
