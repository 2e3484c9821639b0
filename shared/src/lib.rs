use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for the calculation endpoint.
///
/// Serialized as snake_case JSON; this is the wire contract between the
/// frontend controller and the backend computation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Pre-tip bill amount (non-negative)
    pub bill_amount: f64,
    /// Tip percentage in [0, 100]
    pub tip_percentage: f64,
    /// Number of people splitting the bill (at least 1)
    pub split_count: u32,
}

/// Per-person breakdown of the bill and tip shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub bill_per_person: f64,
    pub tip_per_person: f64,
}

/// A completed calculation as produced by the backend.
///
/// All amounts are rounded to 2 decimal places. Immutable once received;
/// the frontend consumes it for the result displays and the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub bill_amount: f64,
    pub tip_percentage: f64,
    pub tip_amount: f64,
    pub total_amount: f64,
    pub split_count: u32,
    pub per_person_amount: f64,
    pub breakdown: Breakdown,
}

/// Response envelope for the calculation endpoint.
///
/// `data` is present exactly when `success` is true, `error` exactly when it
/// is false. The frontend treats any well-formed envelope as authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculateResponse {
    pub fn ok(data: CalculationResult) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Validation failures for calculator inputs.
///
/// The `Display` strings are the user-facing inline error messages; both the
/// frontend controller and the backend surface them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Bill amount must be positive")]
    NegativeAmount,
    #[error("Split count must be at least 1")]
    InvalidSplitCount,
    #[error("Tip percentage must be between 0 and 100")]
    OutOfRange,
}

/// Validate a bill amount. Zero is a valid bill.
pub fn validate_bill_amount(amount: f64) -> Result<f64, ValidationError> {
    if amount < 0.0 {
        return Err(ValidationError::NegativeAmount);
    }
    Ok(amount)
}

/// Validate a tip percentage against the [0, 100] range.
pub fn validate_tip_percentage(percentage: f64) -> Result<f64, ValidationError> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(ValidationError::OutOfRange);
    }
    Ok(percentage)
}

/// Validate a split count. Takes the raw parsed integer so that zero and
/// negative user input reach the range check instead of failing earlier.
pub fn validate_split_count(count: i64) -> Result<u32, ValidationError> {
    if count < 1 {
        return Err(ValidationError::InvalidSplitCount);
    }
    Ok(count as u32)
}

/// Format an amount as a currency string with two decimal places.
///
/// NaN or infinite input is a caller responsibility and is not guarded here.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Tunables shared by the calculator UI and its tests.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub currency_symbol: String,
    /// Preset tip percentages offered as buttons
    pub tip_presets: Vec<f64>,
    pub default_tip_percentage: f64,
    pub default_split_count: u32,
    /// Quiet period before a debounced recalculation fires
    pub debounce_delay_ms: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            tip_presets: vec![10.0, 15.0, 18.0, 20.0, 25.0],
            default_tip_percentage: 18.0,
            default_split_count: 1,
            debounce_delay_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bill_amount() {
        assert_eq!(validate_bill_amount(100.0).unwrap(), 100.0);
        assert_eq!(validate_bill_amount(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_bill_amount_rejected() {
        assert_eq!(
            validate_bill_amount(-10.0).unwrap_err(),
            ValidationError::NegativeAmount
        );
    }

    #[test]
    fn test_valid_tip_percentage() {
        assert_eq!(validate_tip_percentage(15.0).unwrap(), 15.0);
        assert_eq!(validate_tip_percentage(0.0).unwrap(), 0.0);
        assert_eq!(validate_tip_percentage(100.0).unwrap(), 100.0);
    }

    #[test]
    fn test_tip_percentage_out_of_range_rejected() {
        assert_eq!(
            validate_tip_percentage(150.0).unwrap_err(),
            ValidationError::OutOfRange
        );
        assert_eq!(
            validate_tip_percentage(-1.0).unwrap_err(),
            ValidationError::OutOfRange
        );
    }

    #[test]
    fn test_valid_split_count() {
        assert_eq!(validate_split_count(4).unwrap(), 4);
        assert_eq!(validate_split_count(1).unwrap(), 1);
    }

    #[test]
    fn test_split_count_below_one_rejected() {
        assert_eq!(
            validate_split_count(0).unwrap_err(),
            ValidationError::InvalidSplitCount
        );
        assert_eq!(
            validate_split_count(-3).unwrap_err(),
            ValidationError::InvalidSplitCount
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::NegativeAmount.to_string(),
            "Bill amount must be positive"
        );
        assert_eq!(
            ValidationError::InvalidSplitCount.to_string(),
            "Split count must be at least 1"
        );
        assert_eq!(
            ValidationError::OutOfRange.to_string(),
            "Tip percentage must be between 0 and 100"
        );
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(28.75), "$28.75");
        assert_eq!(format_currency(1234.5), "$1234.50");
    }

    #[test]
    fn test_response_envelope_shape() {
        let failure = CalculateResponse::failure("Bill amount must be positive");
        assert!(!failure.success);
        assert!(failure.data.is_none());

        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Bill amount must be positive");
        // `data` is omitted entirely on failure, not serialized as null
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.default_tip_percentage, 18.0);
        assert_eq!(config.default_split_count, 1);
        assert!(config.tip_presets.contains(&config.default_tip_percentage));
    }
}
