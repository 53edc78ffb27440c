use barbershop_shared::{Identifier, ReviewDraft, ReviewFormData};
use validator::{Validate, ValidationErrors};
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const DEFAULT_RATING: u8 = 5;

/// Validates the form input and turns it into a draft.
pub fn build_draft(
    rating: u8,
    comment: &str,
    barber_id: &Identifier,
    client_id: Option<&Identifier>,
) -> Result<ReviewDraft, String> {
    let form = ReviewFormData {
        rating,
        comment: comment.trim().to_string(),
        barber_id: barber_id.clone(),
        client_id: client_id.cloned(),
    };

    form.validate().map_err(|e| describe(&e))?;
    Ok(form.into())
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<&str> = errors.field_errors().into_keys().collect();
    fields.sort_unstable();

    fields
        .into_iter()
        .map(|field| match field {
            "rating" => "Rating must be between 1 and 5",
            "comment" => "Comment must be at most 2000 characters",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(". ")
}

#[derive(Properties, PartialEq)]
pub struct ReviewFormProps {
    pub barber_id: Identifier,
    #[prop_or_default]
    pub client_id: Option<Identifier>,
    #[prop_or_default]
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_submit: Callback<ReviewDraft>,
    pub on_close: Callback<()>,
}

#[function_component(ReviewForm)]
pub fn review_form(props: &ReviewFormProps) -> Html {
    let rating = use_state(|| DEFAULT_RATING);
    let comment = use_state(String::new);
    let validation_error = use_state(|| None::<String>);

    let on_rating = {
        let rating = rating.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            rating.set(value.parse().unwrap_or(0));
        })
    };

    let on_comment = {
        let comment = comment.clone();
        Callback::from(move |e: InputEvent| {
            comment.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_submit = {
        let rating = rating.clone();
        let comment = comment.clone();
        let validation_error = validation_error.clone();
        let barber_id = props.barber_id.clone();
        let client_id = props.client_id.clone();
        let on_submit = props.on_submit.clone();
        let submitting = props.submitting;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submitting {
                return;
            }
            match build_draft(*rating, &comment, &barber_id, client_id.as_ref()) {
                Ok(draft) => {
                    validation_error.set(None);
                    on_submit.emit(draft);
                }
                Err(message) => validation_error.set(Some(message)),
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let message = (*validation_error).clone().or_else(|| props.error.clone());

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog">
                <h2>{ "Leave a Review" }</h2>
                <form onsubmit={on_submit}>
                    <label for="review-rating">{ "Rating" }</label>
                    <select id="review-rating" onchange={on_rating}>
                        { for (1..=5u8).rev().map(|value| html! {
                            <option value={value.to_string()} selected={*rating == value}>
                                { ("★".repeat(value as usize)) }
                            </option>
                        })}
                    </select>
                    <label for="review-comment">{ "Comment" }</label>
                    <textarea
                        id="review-comment"
                        placeholder="How was your appointment?"
                        value={(*comment).clone()}
                        oninput={on_comment}
                    />
                    if let Some(message) = message {
                        <div class="form-error">{ message }</div>
                    }
                    <div class="modal-actions">
                        <button type="button" class="btn" onclick={close} disabled={props.submitting}>
                            { "Cancel" }
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                            { if props.submitting { "Submitting..." } else { "Submit Review" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_input_builds_draft() {
        let draft = build_draft(
            4,
            "  Clean fade  ",
            &Identifier::Number(3),
            Some(&Identifier::Number(42)),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({ "rating": 4, "comment": "Clean fade", "barber_id": 3, "client_id": 42 })
        );
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let err = build_draft(0, "", &Identifier::Number(3), None).unwrap_err();
        assert_eq!(err, "Rating must be between 1 and 5");
    }

    #[test]
    fn test_all_errors_reported() {
        let long = "x".repeat(2001);
        let err = build_draft(9, &long, &Identifier::Number(3), None).unwrap_err();
        assert_eq!(
            err,
            "Comment must be at most 2000 characters. Rating must be between 1 and 5"
        );
    }
}
