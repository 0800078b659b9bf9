use contracts::domain::a001_base_policy::aggregate::{
    BasePolicy, BasePolicyDto, BasePolicyStatus, ThresholdOperator, TriggerCondition,
};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_base_policy::hooks::{use_base_policy, BasePolicies};

/// ViewModel for the product form (create and edit)
#[derive(Clone, Copy)]
pub struct BasePolicyDetailsViewModel {
    hooks: BasePolicies,
    pub form: RwSignal<BasePolicyDto>,
    pub status: RwSignal<Option<BasePolicyStatus>>,
    pub error: RwSignal<Option<String>>,
    pub field_errors: RwSignal<FieldErrors>,
    pub is_saving: RwSignal<bool>,
}

impl BasePolicyDetailsViewModel {
    pub fn new(id: Option<String>) -> Self {
        let is_new = id.is_none();
        let vm = Self {
            hooks: use_base_policy(id),
            form: RwSignal::new(BasePolicyDto::default()),
            status: RwSignal::new(None),
            error: RwSignal::new(None),
            field_errors: RwSignal::new(FieldErrors::new()),
            is_saving: RwSignal::new(false),
        };
        if is_new {
            vm.form.update(|f| f.trigger_conditions.push(blank_condition()));
        }

        let this = vm;
        Effect::new(move |_| {
            if let Some(policy) = this.hooks.current.data.get() {
                this.apply(policy);
            }
        });
        vm
    }

    fn apply(&self, policy: BasePolicy) {
        self.status.set(Some(policy.status));
        self.form.set(policy.into());
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

    /// Archived products are read-only.
    pub fn is_read_only(&self) -> bool {
        self.status.get() == Some(BasePolicyStatus::Archived)
    }

    pub fn field_error(&self, field: &'static str) -> Option<&'static str> {
        self.field_errors.with(|e| e.get(field))
    }

    pub fn add_condition(&self) {
        self.form.update(|f| f.trigger_conditions.push(blank_condition()));
    }

    pub fn remove_condition(&self, index: usize) {
        self.form.update(|f| {
            if index < f.trigger_conditions.len() {
                f.trigger_conditions.remove(index);
            }
        });
    }

    pub fn update_condition(&self, index: usize, change: impl FnOnce(&mut TriggerCondition)) {
        self.form.update(|f| {
            if let Some(condition) = f.trigger_conditions.get_mut(index) {
                change(condition);
            }
        });
    }

    /// Validates locally, then creates or updates. `on_saved` receives the
    /// stored product.
    pub fn save_command(&self, on_saved: Callback<BasePolicy>) {
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
                    this.apply(saved.clone());
                    on_saved.run(saved);
                }
                _ => this.error.set(result.message),
            }
        });
    }

    pub fn archive_command(&self) {
        let Some(id) = self.form.with_untracked(|f| f.id.clone()) else {
            return;
        };
        self.is_saving.set(true);
        let this = *self;
        spawn_local(async move {
            let result = this.hooks.archive(id).await;
            this.is_saving.set(false);
            match (result.success, result.data) {
                (true, Some(archived)) => this.apply(archived),
                _ => this.error.set(result.message),
            }
        });
    }
}

fn blank_condition() -> TriggerCondition {
    TriggerCondition {
        parameter: String::new(),
        operator: ThresholdOperator::Lt,
        threshold: 0.0,
        unit: String::new(),
        window_days: 30,
        payout_percent: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_condition_fails_validation() {
        let dto = BasePolicyDto {
            trigger_conditions: vec![blank_condition()],
            ..Default::default()
        };
        assert!(dto.validate().get("trigger_conditions").is_some());
    }
}
