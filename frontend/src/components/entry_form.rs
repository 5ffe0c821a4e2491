use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;
use wof_shared::validation::{EntryForm as EntryFormData, FormField};

use crate::styles;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Surname => self.surname.as_deref(),
            FormField::Email => self.email.as_deref(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EntryFormProps {
    pub frozen: bool,
    pub errors: FieldErrors,
    pub on_submit: Callback<EntryFormData>,
}

#[function_component(EntryForm)]
pub fn entry_form(props: &EntryFormProps) -> Html {
    let name_ref = use_node_ref();
    let surname_ref = use_node_ref();
    let email_ref = use_node_ref();

    let input_ref = {
        let name_ref = name_ref.clone();
        let surname_ref = surname_ref.clone();
        let email_ref = email_ref.clone();
        move |field: FormField| match field {
            FormField::Name => name_ref.clone(),
            FormField::Surname => surname_ref.clone(),
            FormField::Email => email_ref.clone(),
        }
    };

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();
        let frozen = props.frozen;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if frozen {
                return;
            }

            let mut form = EntryFormData::default();
            for field in FormField::ALL {
                // Missing inputs read as empty and fail validation
                let value = input_ref(field)
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();
                form.set(field, value);
            }
            on_submit.emit(form);
        })
    };

    html! {
        <form id="wof-form" class={styles::FORM} {onsubmit} novalidate={true}>
            { for FormField::ALL.iter().map(|&field| {
                let error = props.errors.get(field);
                html! {
                    <>
                        <div class={styles::FORM_ROW}>
                            <label for={field.input_id()} class={styles::TEXT_LABEL}>{field.label()}</label>
                            <input
                                id={field.input_id()}
                                ref={input_ref(field)}
                                type={field.input_type()}
                                class={if error.is_some() { styles::INPUT_ERROR } else { styles::INPUT }}
                                disabled={props.frozen}
                                aria-describedby={field.error_slot_id()}
                            />
                        </div>
                        <div id={field.error_slot_id()} class={styles::TEXT_ERROR}>
                            { error.unwrap_or_default() }
                        </div>
                    </>
                }
            }) }
            if !props.frozen {
                <button id="wof-form-submit" type="submit" class={styles::BUTTON_PRIMARY}>
                    {"Submit"}
                </button>
            }
        </form>
    }
}
