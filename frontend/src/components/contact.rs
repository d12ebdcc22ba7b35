use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::contact::intake::{ContactIntake, ContactView, Field};
use crate::contact::submit::{cancellable, PendingSubmission, SubmitError, SubmitterHandle};
use crate::navigation::sections::SectionId;

/// The submitter is compared by identity, so owners should keep one handle
/// alive across renders rather than building a new one each time.
#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub submitter: SubmitterHandle,
}

pub enum ContactMsg {
    SetField(Field, String),
    Submit,
    Settled(Result<(), SubmitError>),
}

pub struct ContactSection {
    intake: ContactIntake,
    pending: Option<PendingSubmission>,
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ContactProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            intake: ContactIntake::default(),
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetField(field, value) => self.intake.set_field(field, value),
            ContactMsg::Submit => match self.intake.submit() {
                Ok(request) => {
                    info!("Submitting contact request for {}", request.institution_name);
                    let (task, pending) = cancellable(ctx.props().submitter.0.submit(request));
                    self.pending = Some(pending);

                    let link = ctx.link().clone();
                    spawn_local(async move {
                        if let Ok(outcome) = task.await {
                            link.send_message(ContactMsg::Settled(outcome));
                        }
                    });
                    true
                }
                Err(err) => {
                    debug!("Contact submit ignored: {}", err);
                    false
                }
            },
            ContactMsg::Settled(outcome) => {
                self.pending = None;
                if let Err(err) = &outcome {
                    warn!("Contact submission failed: {}", err);
                }
                let changed = self.intake.settle(outcome);
                if self.intake.is_submitted() {
                    info!("Contact request accepted");
                }
                changed
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(pending) = self.pending.take() {
            debug!("Cancelling in-flight contact submission");
            pending.cancel();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.intake.view() {
            ContactView::Form { form, pending } => {
                let onsubmit = ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    ContactMsg::Submit
                });
                let oninput = ctx.link().batch_callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    match input.name().parse::<Field>() {
                        Ok(field) => Some(ContactMsg::SetField(field, input.value())),
                        Err(err) => {
                            warn!("{}", err);
                            None
                        }
                    }
                });

                html! {
                    <form class="contact-form" {onsubmit}>
                        { for Field::ALL.into_iter().map(|field| html! {
                            <div class="form-group" key={field.name()}>
                                <label for={field.name()}>{field.label()}</label>
                                <input
                                    id={field.name()}
                                    type={field.input_type()}
                                    name={field.name()}
                                    value={form.get(field).to_string()}
                                    oninput={oninput.clone()}
                                    required={true}
                                    placeholder={field.placeholder()}
                                />
                            </div>
                        }) }
                        <button type="submit" class="submit-button" disabled={pending}>
                            { if pending { "Sending..." } else { "Submit" } }
                        </button>
                    </form>
                }
            }
            ContactView::Confirmation(message) => html! {
                <div class="success-message">{message}</div>
            },
        };

        html! {
            <section id={SectionId::Contact.as_str()} class="contact-section">
                <div class="contact-container">
                    <h2 class="section-title">{"Contact Us"}</h2>
                    <p class="section-subtitle">
                        {"Fill out the form below to learn how Talko can support your educational institution"}
                    </p>
                    <div class="form-wrapper">
                        { body }
                    </div>
                </div>
                <style>
                    {r#"
                        .contact-section {
                            padding: 100px 0;
                            background-color: #fff;
                        }

                        .contact-container {
                            width: 100%;
                            max-width: 1200px;
                            margin: 0 auto;
                            padding: 0 20px;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                        }

                        .form-wrapper {
                            width: 100%;
                            max-width: 600px;
                            background-color: #fff;
                            padding: 40px;
                            border-radius: 10px;
                            box-shadow: 0 5px 20px rgba(0, 0, 0, 0.05);
                        }

                        .contact-form {
                            display: flex;
                            flex-direction: column;
                            gap: 20px;
                        }

                        .form-group {
                            display: flex;
                            flex-direction: column;
                            gap: 8px;
                        }

                        .form-group label {
                            font-weight: 600;
                            color: var(--dark-color);
                        }

                        .form-group input {
                            padding: 12px 15px;
                            border: 1px solid #e1e1e1;
                            border-radius: 5px;
                            font-size: 1rem;
                            transition: var(--transition);
                        }

                        .form-group input:focus {
                            outline: none;
                            border-color: var(--primary-color);
                            box-shadow: 0 0 0 2px rgba(74, 109, 255, 0.2);
                        }

                        .submit-button {
                            padding: 15px;
                            background-color: var(--primary-color);
                            color: #fff;
                            border: none;
                            border-radius: 5px;
                            font-size: 1rem;
                            font-weight: 600;
                            cursor: pointer;
                            transition: var(--transition);
                            margin-top: 10px;
                        }

                        .submit-button:hover {
                            background-color: var(--accent-color);
                        }

                        .submit-button:disabled {
                            background-color: #ccc;
                            cursor: not-allowed;
                        }

                        .success-message {
                            text-align: center;
                            padding: 20px;
                            background-color: rgba(46, 204, 113, 0.1);
                            border: 1px solid #2ecc71;
                            border-radius: 5px;
                            color: #2ecc71;
                            font-weight: 500;
                        }
                    "#}
                </style>
            </section>
        }
    }
}
