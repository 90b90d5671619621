use super::logo::LogoState;
use crate::domain::a001_cafe::api;
use crate::shared::dom;
use crate::shared::form_state::{FormMode, FormState, SubmitBlocked, SubmitOutcome};
use crate::shared::gateway::{AppGateway, GatewayError};
use contracts::domain::a001_cafe::aggregate::{fields, Cafe, CafeDto, CAFE_SCHEMA};
use contracts::domain::common::Record;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// ViewModel for the café create/edit form
#[derive(Clone)]
pub struct CafeDetailsViewModel {
    pub form: RwSignal<FormState>,
    pub logo: RwSignal<LogoState>,
    gateway: AppGateway,
}

fn build_payload(form: &FormState) -> Result<CafeDto, FieldErrors> {
    let dto = CafeDto::new(
        form.value(fields::NAME).to_string(),
        form.value(fields::DESCRIPTION).to_string(),
        form.value(fields::LOCATION).to_string(),
    );
    dto.validate().map(|_| dto)
}

impl CafeDetailsViewModel {
    pub fn new(gateway: AppGateway, mode: FormMode) -> Self {
        let form = match mode {
            FormMode::Create => FormState::for_create(CAFE_SCHEMA, Cafe::message_noun()),
            FormMode::Edit => FormState::for_edit(CAFE_SCHEMA, Cafe::message_noun()),
        };
        Self {
            form: RwSignal::new(form),
            logo: RwSignal::new(LogoState::default()),
            gateway,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.mode() == FormMode::Edit)
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
                .map(|cafe| CafeDto::from_cafe(&cafe));
            if let Err(e) = &result {
                log::error!("Failed to load cafe {}: {}", id, e);
            }
            // the page may be gone by now
            form.try_update(|f| match &result {
                Ok(dto) => f.apply_loaded(ticket, &id, Ok(dto)),
                Err(e) => f.apply_loaded(ticket, &id, Err(e)),
            });
        });
    }

    /// Validate, then create or update
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let started = self.form.try_update(|f| {
            let id = f.seeded_id().map(str::to_string);
            f.begin_submit(build_payload).map(|(ticket, dto)| (ticket, dto, id))
        });
        let (ticket, dto, id) = match started {
            Some(Ok(started)) => started,
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                log::debug!("Cafe form has {} invalid field(s)", errors.len());
                return;
            }
            _ => return,
        };

        let form = self.form;
        let gateway = self.gateway.clone();
        spawn_local(async move {
            let result = match id {
                None => api::create(&gateway, &dto).await.map(|created| {
                    log::info!("Created cafe {}", created.id());
                }),
                Some(id) => match api::update(&gateway, &id, &dto.into_update(id.clone())).await {
                    Ok(true) => Ok(()),
                    Ok(false) => Err(GatewayError::Server {
                        status: None,
                        message: None,
                    }),
                    Err(e) => Err(e),
                },
            };
            if let Err(e) = &result {
                log::error!("Failed to save cafe: {}", e);
            }
            let outcome = form.try_update(|f| f.finish_submit(ticket, result));
            if outcome == Some(SubmitOutcome::NavigateToList) {
                (on_saved)(());
            }
        });
    }

    /// Leave the form, asking first when something was changed
    pub fn cancel_command(&self, on_cancel: Rc<dyn Fn(())>) {
        let dirty = self.form.with_untracked(FormState::is_dirty)
            || self.logo.with_untracked(LogoState::is_dirty);
        if !dirty || dom::confirm_discard() {
            (on_cancel)(());
        }
    }
}
