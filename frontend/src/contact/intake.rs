use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::submit::{ContactRequest, SubmitError};

pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for contacting us! Our team will be in touch with you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    InstitutionName,
    FullName,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::InstitutionName, Field::FullName, Field::Phone];

    /// Value of the input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::InstitutionName => "institutionName",
            Field::FullName => "fullName",
            Field::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::InstitutionName => "Institution Name",
            Field::FullName => "Your Name",
            Field::Phone => "Contact Phone",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::InstitutionName => "Enter your school or institution name",
            Field::FullName => "Enter your full name",
            Field::Phone => "Enter your contact phone number",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Phone => "tel",
            _ => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub institution_name: String,
    pub full_name: String,
    pub phone: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::InstitutionName => &self.institution_name,
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::InstitutionName => &mut self.institution_name,
            Field::FullName => &mut self.full_name,
            Field::Phone => &mut self.phone,
        };
        *slot = value;
    }

    /// Fields the browser's `required` check would reject.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| self.get(field).is_empty())
            .collect()
    }

    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            institution_name: self.institution_name.clone(),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Pending,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("required fields are empty: {missing:?}")]
    Incomplete { missing: Vec<Field> },
    #[error("a submission is already in flight")]
    AlreadyPending,
    #[error("the form has already been submitted")]
    AlreadySubmitted,
}

/// What the contact section should display.
#[derive(Debug, PartialEq)]
pub enum ContactView<'a> {
    Form { form: &'a ContactForm, pending: bool },
    Confirmation(&'static str),
}

impl ContactView<'_> {
    pub fn visible_fields(&self) -> &'static [Field] {
        match self {
            ContactView::Form { .. } => &Field::ALL,
            ContactView::Confirmation(_) => &[],
        }
    }
}

/// Contact form lifecycle: `Editing -> Pending -> Submitted`, with
/// `Submitted` terminal for the lifetime of the owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactIntake {
    form: ContactForm,
    phase: Phase,
}

impl Default for ContactIntake {
    fn default() -> Self {
        Self { form: ContactForm::default(), phase: Phase::Editing }
    }
}

impl ContactIntake {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Replaces one field. Returns `false` once the form is gone.
    pub fn set_field(&mut self, field: Field, value: String) -> bool {
        if self.phase == Phase::Submitted {
            return false;
        }
        self.form.set(field, value);
        true
    }

    pub fn submit(&mut self) -> Result<ContactRequest, IntakeError> {
        match self.phase {
            Phase::Pending => return Err(IntakeError::AlreadyPending),
            Phase::Submitted => return Err(IntakeError::AlreadySubmitted),
            Phase::Editing => {}
        }
        let missing = self.form.missing();
        if !missing.is_empty() {
            return Err(IntakeError::Incomplete { missing });
        }
        self.phase = Phase::Pending;
        Ok(self.form.to_request())
    }

    /// Applies the outcome of the in-flight submission. Returns whether the
    /// phase changed; outcomes arriving outside `Pending` are ignored.
    pub fn settle(&mut self, outcome: Result<(), SubmitError>) -> bool {
        if self.phase != Phase::Pending {
            return false;
        }
        self.phase = match outcome {
            Ok(()) => Phase::Submitted,
            Err(_) => Phase::Editing,
        };
        true
    }

    pub fn view(&self) -> ContactView<'_> {
        match self.phase {
            Phase::Submitted => ContactView::Confirmation(CONFIRMATION_MESSAGE),
            Phase::Editing | Phase::Pending => ContactView::Form {
                form: &self.form,
                pending: self.phase == Phase::Pending,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    use super::*;
    use crate::config;
    use crate::contact::submit::testing::ManualClock;
    use crate::contact::submit::{cancellable, ContactSubmitter, SimulatedSubmitter};

    fn filled() -> ContactIntake {
        let mut intake = ContactIntake::default();
        intake.set_field(Field::InstitutionName, "Riverside School".to_string());
        intake.set_field(Field::FullName, "Jane Doe".to_string());
        intake.set_field(Field::Phone, "555-0100".to_string());
        intake
    }

    #[test]
    fn field_names_round_trip_through_the_dom_name() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert!("email".parse::<Field>().is_err());
    }

    #[test]
    fn set_field_only_touches_the_named_field() {
        let mut intake = ContactIntake::default();
        intake.set_field(Field::InstitutionName, "A".to_string());
        intake.set_field(Field::FullName, "B".to_string());
        assert_eq!(
            intake.form(),
            &ContactForm {
                institution_name: "A".to_string(),
                full_name: "B".to_string(),
                phone: String::new(),
            }
        );
    }

    #[test]
    fn last_write_per_field_wins_regardless_of_interleaving() {
        let writes = [
            (Field::Phone, "1"),
            (Field::FullName, "x"),
            (Field::Phone, "2"),
            (Field::InstitutionName, "School"),
            (Field::FullName, "y"),
        ];
        let mut forward = ContactIntake::default();
        for (field, value) in writes {
            forward.set_field(field, value.to_string());
        }
        let mut grouped = ContactIntake::default();
        for field in [Field::FullName, Field::InstitutionName, Field::Phone] {
            for (f, value) in writes.iter().filter(|(f, _)| *f == field) {
                grouped.set_field(*f, value.to_string());
            }
        }
        assert_eq!(forward, grouped);
        assert_eq!(forward.form().phone, "2");
        assert_eq!(forward.form().full_name, "y");
    }

    #[test]
    fn incomplete_form_cannot_be_submitted() {
        let mut intake = ContactIntake::default();
        intake.set_field(Field::InstitutionName, "Riverside School".to_string());
        intake.set_field(Field::Phone, "555-0100".to_string());
        let before = intake.clone();

        assert_eq!(
            intake.submit(),
            Err(IntakeError::Incomplete { missing: vec![Field::FullName] })
        );
        assert_eq!(intake, before);
        assert_eq!(intake.phase(), Phase::Editing);
    }

    #[test]
    fn submit_moves_to_pending_and_rejects_repeats() {
        let mut intake = filled();
        let request = intake.submit().unwrap();
        assert_eq!(request.full_name, "Jane Doe");
        assert_eq!(intake.phase(), Phase::Pending);
        assert_eq!(intake.submit(), Err(IntakeError::AlreadyPending));
        assert_eq!(intake.view(), ContactView::Form { form: intake.form(), pending: true });
    }

    #[test]
    fn submitted_is_terminal() {
        let mut intake = filled();
        intake.submit().unwrap();
        assert!(intake.settle(Ok(())));
        assert!(intake.is_submitted());

        assert!(!intake.set_field(Field::Phone, "000".to_string()));
        assert_eq!(intake.submit(), Err(IntakeError::AlreadySubmitted));
        assert!(!intake.settle(Err(SubmitError::Rejected("late".to_string()))));
        assert!(intake.is_submitted());
    }

    #[test]
    fn failed_submission_returns_to_editing_with_values_kept() {
        let mut intake = filled();
        intake.submit().unwrap();
        assert!(intake.settle(Err(SubmitError::Rejected("503".to_string()))));
        assert_eq!(intake.phase(), Phase::Editing);
        assert_eq!(intake.form().institution_name, "Riverside School");
    }

    #[test]
    fn settle_without_pending_submission_is_ignored() {
        let mut intake = ContactIntake::default();
        assert!(!intake.settle(Ok(())));
        assert_eq!(intake.phase(), Phase::Editing);
    }

    #[test]
    fn filled_form_shows_confirmation_after_the_simulated_delay() {
        let clock = ManualClock::default();
        let submitter = SimulatedSubmitter::with_sleep(clock.clone(), config::SUBMIT_DELAY_MS);
        let intake = Rc::new(RefCell::new(filled()));

        let request = intake.borrow_mut().submit().unwrap();
        let (task, _pending) = cancellable(submitter.submit(request));
        let mut pool = LocalPool::new();
        let owner = intake.clone();
        pool.spawner()
            .spawn_local(async move {
                if let Ok(outcome) = task.await {
                    owner.borrow_mut().settle(outcome);
                }
            })
            .unwrap();

        clock.advance(999);
        pool.run_until_stalled();
        assert!(!intake.borrow().is_submitted());
        assert_eq!(intake.borrow().view().visible_fields().len(), 3);

        clock.advance(1);
        pool.run_until_stalled();
        let intake = intake.borrow();
        assert!(intake.is_submitted());
        assert_eq!(intake.view(), ContactView::Confirmation(CONFIRMATION_MESSAGE));
        assert!(intake.view().visible_fields().is_empty());
    }

    #[test]
    fn teardown_mid_delay_leaves_the_form_pending() {
        let clock = ManualClock::default();
        let submitter = SimulatedSubmitter::with_sleep(clock.clone(), config::SUBMIT_DELAY_MS);
        let intake = Rc::new(RefCell::new(filled()));

        let request = intake.borrow_mut().submit().unwrap();
        let (task, pending) = cancellable(submitter.submit(request));
        let mut pool = LocalPool::new();
        let owner = intake.clone();
        pool.spawner()
            .spawn_local(async move {
                if let Ok(outcome) = task.await {
                    owner.borrow_mut().settle(outcome);
                }
            })
            .unwrap();

        pool.run_until_stalled();
        drop(pending);
        clock.advance(1_000);
        pool.run();
        assert_eq!(intake.borrow().phase(), Phase::Pending);
    }
}
