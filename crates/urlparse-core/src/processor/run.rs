//! Per-event execution.

use serde_json::Value;

use super::{ProcessError, ResolvedMapping, UrlParse, ERROR_MESSAGE_KEY};
use crate::event::{value_type_name, Event, EventError};
use crate::url_model::parse_url;

impl UrlParse {
    /// Applies every mapping to `event` in configured order.
    ///
    /// On `Err` in strict mode the event equals its input plus `error.message`.
    /// In best-effort mode this never returns `Err`.
    pub fn run(&self, event: &mut Event) -> Result<(), ProcessError> {
        let mut backup = self.plan.fail_on_error().then(|| event.clone());

        for mapping in self.plan.mappings() {
            let Err(err) = self.parse_field(mapping, event) else {
                continue;
            };
            let message = format!("failed to parse fields in urlparse processor: {}", err);
            tracing::debug!("{}", message);

            if let Some(snapshot) = backup.take() {
                *event = snapshot;
                if let Err(put_err) = event.put_value(ERROR_MESSAGE_KEY, Value::String(message)) {
                    tracing::warn!(error = %put_err, "could not annotate event at {}", ERROR_MESSAGE_KEY);
                }
                return Err(err);
            }
        }

        Ok(())
    }

    fn parse_field(&self, mapping: &ResolvedMapping, event: &mut Event) -> Result<(), ProcessError> {
        let value = match event.get_value(&mapping.from) {
            Ok(value) => value,
            Err(EventError::KeyNotFound) if self.plan.ignore_missing() => {
                tracing::trace!(key = %mapping.from, "source field missing, skipped");
                return Ok(());
            }
            Err(EventError::KeyNotFound) => {
                return Err(ProcessError::MissingField {
                    key: mapping.from.clone(),
                })
            }
            Err(source) => {
                return Err(ProcessError::Lookup {
                    key: mapping.from.clone(),
                    source,
                })
            }
        };

        let Some(raw) = value.as_str() else {
            return Err(ProcessError::TypeMismatch {
                key: mapping.from.clone(),
                found: value_type_name(value),
            });
        };

        let parsed = parse_url(raw).map_err(|source| ProcessError::UrlSyntax {
            value: raw.to_string(),
            source,
        })?;

        event
            .put_value(&mapping.to, parsed.into_value())
            .map_err(|source| ProcessError::Write {
                key: mapping.to.clone(),
                source,
            })?;
        Ok(())
    }
}
