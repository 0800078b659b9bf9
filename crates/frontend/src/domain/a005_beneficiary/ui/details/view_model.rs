use contracts::domain::a005_beneficiary::aggregate::{Beneficiary, BeneficiaryDto};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_beneficiary::hooks::{use_beneficiary, Beneficiaries};

#[derive(Clone, Copy)]
pub struct BeneficiaryDetailsViewModel {
    hooks: Beneficiaries,
    pub form: RwSignal<BeneficiaryDto>,
    pub error: RwSignal<Option<String>>,
    pub field_errors: RwSignal<FieldErrors>,
    pub is_saving: RwSignal<bool>,
    pub confirm_delete: RwSignal<bool>,
}

impl BeneficiaryDetailsViewModel {
    pub fn new(id: Option<String>) -> Self {
        let vm = Self {
            hooks: use_beneficiary(id),
            form: RwSignal::new(BeneficiaryDto::default()),
            error: RwSignal::new(None),
            field_errors: RwSignal::new(FieldErrors::new()),
            is_saving: RwSignal::new(false),
            confirm_delete: RwSignal::new(false),
        };
        Effect::new(move |_| {
            if let Some(b) = vm.hooks.current.data.get() {
                vm.form.set(b.into());
            }
        });
        vm
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_loading(&self) -> bool {
        self.hooks.current.loading.get()
    }

    pub fn load_error(&self) -> Option<String> {
        self.hooks.current.error.get()
    }

    pub fn field_error(&self, field: &'static str) -> Option<&'static str> {
        self.field_errors.with(|e| e.get(field))
    }

    pub fn save_command(&self, on_saved: Callback<Beneficiary>) {
        let dto = self.form.get_untracked();
        let errors = dto.validate();
        if let Some(first) = errors.first() {
            self.error.set(Some(first.to_string()));
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(FieldErrors::new());
        self.error.set(None);
        self.is_saving.set(true);

        let this = *self;
        spawn_local(async move {
            let result = match dto.id.clone() {
                Some(id) => this.hooks.update(id, dto).await,
                None => this.hooks.create(dto).await,
            };
            this.is_saving.set(false);
            match (result.success, result.data) {
                (true, Some(saved)) => {
                    this.form.set(saved.clone().into());
                    on_saved.run(saved);
                }
                _ => this.error.set(result.message),
            }
        });
    }

    /// First click arms the confirmation, the second one deletes.
    pub fn delete_command(&self, on_deleted: Callback<()>) {
        if !self.confirm_delete.get_untracked() {
            self.confirm_delete.set(true);
            return;
        }
        let Some(id) = self.form.with_untracked(|f| f.id.clone()) else {
            return;
        };
        self.confirm_delete.set(false);
        self.is_saving.set(true);
        let this = *self;
        spawn_local(async move {
            let result = this.hooks.delete(id).await;
            this.is_saving.set(false);
            if result.success {
                on_deleted.run(());
            } else {
                this.error.set(result.message);
            }
        });
    }
}

/// Blank inputs clear an optional field.
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::optional;

    #[test]
    fn test_optional() {
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional(" Vietcombank ".to_string()), Some("Vietcombank".to_string()));
    }
}
