use crate::{
    error::{NotifyError, Result},
    models::notification::{NotificationRequest, Target},
};

pub fn validate_request(request: &NotificationRequest) -> Result<()> {
    if request.title.is_empty() {
        return Err(NotifyError::InvalidArgument(
            "Notification title cannot be empty".to_string(),
        ));
    }

    if request.body.is_empty() {
        return Err(NotifyError::InvalidArgument(
            "Notification body cannot be empty".to_string(),
        ));
    }

    if request.target.value().is_empty() {
        let what = match request.target {
            Target::Token(_) => "Device token",
            Target::Topic(_) => "Topic name",
        };
        return Err(NotifyError::InvalidArgument(format!(
            "{} cannot be empty",
            what
        )));
    }

    Ok(())
}
