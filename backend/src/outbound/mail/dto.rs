//! DTO for the mail service's dispatch request.

use serde::Serialize;

use crate::domain::AdminAlert;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MailRequestDto<'a> {
    pub(super) subject: &'a str,
    pub(super) body: &'a str,
    pub(super) recipient_address: &'a str,
}

impl<'a> From<&'a AdminAlert> for MailRequestDto<'a> {
    fn from(alert: &'a AdminAlert) -> Self {
        Self {
            subject: alert.subject(),
            body: alert.body(),
            recipient_address: alert.recipient().as_str(),
        }
    }
}
