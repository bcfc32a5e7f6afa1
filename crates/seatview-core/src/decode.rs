//! Payload decoding for bridge callbacks.
//!
//! Callback stubs JSON-stringify every positional argument before handing it
//! to the transport, so each argument arrives as text containing JSON, or as
//! JSON `null` when the stub had nothing to pass. Decoders here unwrap that
//! double encoding into typed domain values.
//!
//! Ticket-type decoding is lenient (a malformed payload collapses to an
//! absent result); everything else is strict and reports a [`DecodeError`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::objects::{ChartObject, SelectionValidator, TicketType};

/// Text content of a JSON-stringified argument.
fn text(args: &[Value], index: usize) -> DecodeResult<&str> {
    match args.get(index) {
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(DecodeError::NotText(index)),
        None => Err(DecodeError::MissingArgument(index)),
    }
}

/// Parse the JSON carried inside a stringified argument.
fn from_text<T: DeserializeOwned>(args: &[Value], index: usize) -> DecodeResult<T> {
    let text = text(args, index)?;
    serde_json::from_str(text).map_err(|e| DecodeError::InvalidJson {
        argument: index,
        message: e.to_string(),
    })
}

/// Decode a single object descriptor.
pub fn object(args: &[Value], index: usize) -> DecodeResult<ChartObject> {
    from_text(args, index)
}

/// Decode a list of object descriptors.
pub fn objects(args: &[Value], index: usize) -> DecodeResult<Vec<ChartObject>> {
    from_text(args, index)
}

/// Decode a float argument.
pub fn float(args: &[Value], index: usize) -> DecodeResult<f64> {
    text(args, index)?
        .parse()
        .map_err(|_| DecodeError::InvalidPrimitive {
            argument: index,
            expected: "float",
        })
}

/// Decode a boolean argument.
pub fn boolean(args: &[Value], index: usize) -> DecodeResult<bool> {
    text(args, index)?
        .parse()
        .map_err(|_| DecodeError::InvalidPrimitive {
            argument: index,
            expected: "boolean",
        })
}

/// Decode a nullable ticket type.
///
/// A missing argument, JSON `null`, and the stringified `"null"` all mean
/// the widget attached no ticket type and yield `Ok(None)`.
pub fn ticket_type(args: &[Value], index: usize) -> DecodeResult<Option<TicketType>> {
    let Some(value) = args.get(index) else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    let text = value.as_str().ok_or(DecodeError::NotText(index))?;
    if text == "null" {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| DecodeError::InvalidJson {
            argument: index,
            message: e.to_string(),
        })
}

/// Decode a list of ticket types, leniently.
///
/// Any malformed payload collapses to `None` rather than failing.
pub fn ticket_types(args: &[Value], index: usize) -> Option<Vec<TicketType>> {
    let text = args.get(index)?.as_str()?;
    serde_json::from_str(text).ok()
}

/// Decode the reason codes of a failed selection.
pub fn validators(args: &[Value], index: usize) -> DecodeResult<Vec<SelectionValidator>> {
    from_text(args, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stringified(payload: &Value) -> Value {
        Value::String(payload.to_string())
    }

    #[test]
    fn test_object_decodes_stringified_descriptor() {
        let args = vec![stringified(&json!({
            "label": "A-1",
            "objectType": "seat",
            "forSale": true,
        }))];

        let object = object(&args, 0).unwrap();
        assert_eq!(object.label, "A-1");
        assert_eq!(object.object_type.as_deref(), Some("seat"));
        assert_eq!(object.for_sale, Some(true));
    }

    #[test]
    fn test_objects_decodes_stringified_list() {
        let args = vec![stringified(&json!([
            { "label": "A-1" },
            { "label": "A-2" },
        ]))];

        let objects = objects(&args, 0).unwrap();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[1].label, "A-2");
    }

    #[test]
    fn test_primitive_arguments_parse_from_text() {
        let args = vec![Value::String("12.5".into()), Value::String("true".into())];
        assert_eq!(float(&args, 0).unwrap(), 12.5);
        assert!(boolean(&args, 1).unwrap());
    }

    #[test]
    fn test_malformed_strict_payload_is_an_error() {
        let args = vec![Value::String("not json".into())];
        assert!(matches!(
            object(&args, 0),
            Err(DecodeError::InvalidJson { argument: 0, .. })
        ));
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let args: Vec<Value> = vec![];
        assert!(matches!(
            float(&args, 0),
            Err(DecodeError::MissingArgument(0))
        ));
    }

    #[test]
    fn test_ticket_type_decodes_and_tolerates_null_forms() {
        let ticket = json!({ "ticketType": "adult", "price": 30.0 });
        let args = vec![stringified(&ticket)];
        let decoded = ticket_type(&args, 0).unwrap().unwrap();
        assert_eq!(decoded.ticket_type, "adult");
        assert_eq!(decoded.price, 30.0);

        // Stringified "null" and JSON null both mean no ticket type.
        assert_eq!(ticket_type(&[Value::String("null".into())], 0).unwrap(), None);
        assert_eq!(ticket_type(&[Value::Null], 0).unwrap(), None);
        assert_eq!(ticket_type(&[], 0).unwrap(), None);
    }

    #[test]
    fn test_malformed_ticket_type_list_is_absent_not_an_error() {
        let args = vec![Value::String("not json".into())];
        assert_eq!(ticket_types(&args, 0), None);

        let args = vec![Value::Null];
        assert_eq!(ticket_types(&args, 0), None);
    }

    #[test]
    fn test_well_formed_ticket_type_list_decodes() {
        let args = vec![stringified(&json!([
            { "ticketType": "adult", "price": 30.0 },
            { "ticketType": "child", "price": 15.0, "label": "Children" },
        ]))];

        let tickets = ticket_types(&args, 0).unwrap();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[1].label.as_deref(), Some("Children"));
    }

    #[test]
    fn test_validators_decode_reason_codes() {
        let args = vec![stringified(&json!([
            { "type": "noOrphanSeats" },
            { "type": "consecutiveSeats" },
        ]))];

        let reasons = validators(&args, 0).unwrap();
        assert_eq!(
            reasons,
            vec![
                SelectionValidator::NoOrphanSeats,
                SelectionValidator::ConsecutiveSeats,
            ]
        );
    }
}
