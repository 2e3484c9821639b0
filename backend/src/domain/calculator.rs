//! Tip and bill split calculation logic.
//!
//! All business rules for turning a validated request into amounts live here;
//! the REST layer only translates between HTTP and this service.

use shared::{Breakdown, CalculateRequest, CalculationResult};

/// Service handling bill, tip, and split calculations.
///
/// Every returned amount is rounded to 2 decimal places, matching what the
/// UI displays.
#[derive(Clone)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Tip amount for a bill at the given percentage.
    pub fn calculate_tip(&self, bill_amount: f64, tip_percentage: f64) -> f64 {
        round_to_cents(bill_amount * (tip_percentage / 100.0))
    }

    /// Total amount including tip.
    pub fn calculate_total(&self, bill_amount: f64, tip_amount: f64) -> f64 {
        round_to_cents(bill_amount + tip_amount)
    }

    /// Equal share of the total for each person.
    pub fn calculate_per_person(&self, total_amount: f64, split_count: u32) -> f64 {
        round_to_cents(total_amount / split_count as f64)
    }

    /// Per-person shares of the bill and the tip separately.
    pub fn calculate_breakdown(
        &self,
        bill_amount: f64,
        tip_amount: f64,
        split_count: u32,
    ) -> Breakdown {
        Breakdown {
            bill_per_person: round_to_cents(bill_amount / split_count as f64),
            tip_per_person: round_to_cents(tip_amount / split_count as f64),
        }
    }

    /// Run the full calculation for an already-validated request.
    pub fn calculate(&self, request: &CalculateRequest) -> CalculationResult {
        let tip_amount = self.calculate_tip(request.bill_amount, request.tip_percentage);
        let total_amount = self.calculate_total(request.bill_amount, tip_amount);
        let per_person_amount = self.calculate_per_person(total_amount, request.split_count);
        let breakdown =
            self.calculate_breakdown(request.bill_amount, tip_amount, request.split_count);

        CalculationResult {
            bill_amount: request.bill_amount,
            tip_percentage: request.tip_percentage,
            tip_amount,
            total_amount,
            split_count: request.split_count,
            per_person_amount,
            breakdown,
        }
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> CalculatorService {
        CalculatorService::new()
    }

    #[test]
    fn test_calculate_tip() {
        let service = create_test_service();

        assert_eq!(service.calculate_tip(100.0, 15.0), 15.0);
        assert_eq!(service.calculate_tip(0.0, 18.0), 0.0);
    }

    #[test]
    fn test_calculate_total() {
        let service = create_test_service();

        assert_eq!(service.calculate_total(100.0, 15.0), 115.0);
    }

    #[test]
    fn test_calculate_per_person() {
        let service = create_test_service();

        assert_eq!(service.calculate_per_person(115.0, 4), 28.75);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let service = create_test_service();

        assert_eq!(service.calculate_tip(100.0, 15.5), 15.5);
        assert_eq!(service.calculate_per_person(100.0, 3), 33.33);
        assert_eq!(service.calculate_tip(33.33, 17.5), 5.83);
    }

    #[test]
    fn test_calculate_breakdown() {
        let service = create_test_service();

        let breakdown = service.calculate_breakdown(100.0, 15.0, 4);
        assert_eq!(breakdown.bill_per_person, 25.0);
        assert_eq!(breakdown.tip_per_person, 3.75);
    }

    #[test]
    fn test_full_calculation() {
        let service = create_test_service();

        let request = CalculateRequest {
            bill_amount: 100.0,
            tip_percentage: 15.0,
            split_count: 4,
        };
        let result = service.calculate(&request);

        assert_eq!(result.tip_amount, 15.0);
        assert_eq!(result.total_amount, 115.0);
        assert_eq!(result.per_person_amount, 28.75);
        assert_eq!(result.split_count, 4);
        assert_eq!(result.breakdown.bill_per_person, 25.0);
        assert_eq!(result.breakdown.tip_per_person, 3.75);
    }

    #[test]
    fn test_zero_tip_percentage() {
        let service = create_test_service();

        let request = CalculateRequest {
            bill_amount: 50.0,
            tip_percentage: 0.0,
            split_count: 2,
        };
        let result = service.calculate(&request);

        assert_eq!(result.tip_amount, 0.0);
        assert_eq!(result.total_amount, 50.0);
        assert_eq!(result.per_person_amount, 25.0);
    }
}
