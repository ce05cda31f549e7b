use crate::json::value::JsonValue;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::text::string;

/// The literal `null`
pub fn null<'code>() -> impl Parser<'code, Output = JsonValue> {
    string("null").map(|_| JsonValue::Null)
}

/// The literal `true`, or failing that `false`
///
/// When neither matches, the failure is the one from the `false` attempt.
pub fn boolean<'code>() -> impl Parser<'code, Output = JsonValue> {
    string("true")
        .map(|_| JsonValue::Boolean(true))
        .or(string("false").map(|_| JsonValue::Boolean(false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_null() {
        let (value, cursor) = parse(&null(), "null").unwrap();

        assert_eq!(value, JsonValue::Null);
        assert!(cursor.is_empty());
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_null_truncated() {
        let err = parse(&null(), "nul").unwrap_err();

        assert!(err.to_string().contains("expected 'l'"));
        assert!(err.to_string().contains("end of input"));
        assert_eq!(
            err.to_string(),
            "expected 'null', but found 'nul' (expected 'l', but reached end of input)"
        );
    }

    #[test]
    fn test_null_consumes_exactly_four() {
        let (_, cursor) = parse(&null(), "null, 1").unwrap();

        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.remaining(), ", 1");
    }

    #[test]
    fn test_true() {
        let (value, cursor) = parse(&boolean(), "true").unwrap();

        assert_eq!(value, JsonValue::Boolean(true));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_false() {
        let (value, cursor) = parse(&boolean(), "false").unwrap();

        assert_eq!(value, JsonValue::Boolean(false));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_neither_reports_false_branch() {
        let err = parse(&boolean(), "maybe").unwrap_err();

        assert_eq!(
            err.to_string(),
            "expected 'false', but found 'maybe' (expected 'f', found 'm')"
        );
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_trailing_input_not_consumed() {
        let (value, cursor) = parse(&boolean(), "true123").unwrap();

        assert_eq!(value, JsonValue::Boolean(true));
        assert_eq!(cursor.remaining(), "123");
    }

    #[test]
    fn test_outcomes_are_repeatable() {
        let parser = boolean();

        for input in ["true", "false", "maybe", "tru", ""] {
            assert_eq!(parse(&parser, input), parse(&parser, input));
        }
    }
}
