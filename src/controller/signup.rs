//! Account registration controller.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::controller::http::{bad_request, ok, server_error};
use crate::controller::{Controller, HttpError, HttpRequest, HttpResponse};
use crate::dto::{Account, AddAccountInput};
use crate::ports::{AddAccount, ApplicationError, EmailValidator};

/// Raw sign-up form. Values stay untyped until validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub password: Option<Value>,
    pub password_confirmation: Option<Value>,
}

impl SignUpRequest {
    /// Read the form out of a request body.
    ///
    /// A missing body, or a body that is not a JSON object, reads as an
    /// empty form.
    pub fn from_body(body: Option<Value>) -> Self {
        match body {
            Some(body @ Value::Object(_)) => {
                serde_json::from_value(body).unwrap_or_default()
            },
            _ => Self::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum SignUpError {
    #[error(transparent)]
    Rejected(#[from] HttpError),
    #[error("collaborator failed: {0}")]
    Collaborator(#[from] ApplicationError),
}

/// Require a non-empty string value for `field`.
fn required<'a>(
    field: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a str, HttpError> {
    match value {
        None | Some(Value::Null) => Err(HttpError::MissingParam(field)),
        Some(Value::String(value)) if value.is_empty() => {
            Err(HttpError::MissingParam(field))
        },
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(HttpError::InvalidParam(field)),
    }
}

/// Validates sign-up forms and hands them to the account creation use case.
pub struct SignUpController {
    email_validator: Box<dyn EmailValidator>,
    add_account: Box<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(
        email_validator: Box<dyn EmailValidator>,
        add_account: Box<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn sign_up(
        &self,
        form: &SignUpRequest,
    ) -> Result<Account, SignUpError> {
        // Order matters: the first missing field is the one reported.
        let name = required("name", form.name.as_ref())?;
        let email = required("email", form.email.as_ref())?;
        let password = required("password", form.password.as_ref())?;
        let password_confirmation = required(
            "passwordConfirmation",
            form.password_confirmation.as_ref(),
        )?;

        if password != password_confirmation {
            return Err(HttpError::InvalidParam("passwordConfirmation").into());
        }

        if !self.email_validator.is_valid(email)? {
            return Err(HttpError::InvalidParam("email").into());
        }

        let account = self
            .add_account
            .add(AddAccountInput {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            })
            .await?;

        Ok(account)
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let form = SignUpRequest::from_body(request.body);

        match self.sign_up(&form).await {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "account created");
                metrics::counter!("signup_requests_total", "outcome" => "created")
                    .increment(1);

                ok(account)
            },
            Err(SignUpError::Rejected(error)) => {
                tracing::debug!(error = %error, "sign-up rejected");
                metrics::counter!("signup_requests_total", "outcome" => "rejected")
                    .increment(1);

                bad_request(error)
            },
            Err(SignUpError::Collaborator(err)) => {
                tracing::error!(error = ?err, "sign-up failed");
                metrics::counter!("signup_requests_total", "outcome" => "failed")
                    .increment(1);

                server_error()
            },
        }
    }
}
