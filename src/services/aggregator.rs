//! Cost aggregation
//!
//! Combines the two ledgers and the tax configuration into a [`CostSummary`].
//! Pure and linear in the ledger sizes, so callers recompute on every read.

use crate::models::{CostSummary, Expense, Feature, TaxConfiguration};

/// Compute the cost summary for an estimate
pub fn compute_summary(
    expenses: &[Expense],
    features: &[Feature],
    tax: &TaxConfiguration,
) -> CostSummary {
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
    let total_feature_cost: f64 = features.iter().map(Feature::cost).sum();
    let subtotal = total_expenses + total_feature_cost;

    let effective_tax_rate = tax.effective_rate();
    let surcharge = tax.surcharge();
    let tax_amount = subtotal * effective_tax_rate;

    CostSummary {
        total_expenses,
        total_feature_cost,
        subtotal,
        effective_tax_rate,
        tax_amount,
        surcharge,
        total_cost: subtotal + tax_amount + surcharge,
        auto_entrepreneur: tax.is_auto_entrepreneur(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Complexity, AUTO_ENTREPRENEUR_RATE, CASNOS_ANNUAL_SURCHARGE};
    use proptest::prelude::*;

    fn standard(rate: f64) -> TaxConfiguration {
        TaxConfiguration::with_standard_rate(rate).unwrap()
    }

    fn server() -> Expense {
        Expense::new("Server", 1000.0)
    }

    fn auth() -> Feature {
        Feature::new("Auth", Complexity::Medium, 10.0, 50.0)
    }

    #[test]
    fn test_empty_standard() {
        let summary = compute_summary(&[], &[], &standard(0.20));
        assert_eq!(summary.subtotal, 0.0);
        assert_eq!(summary.tax_amount, 0.0);
        assert_eq!(summary.surcharge, 0.0);
        assert_eq!(summary.total_cost, 0.0);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_empty_auto_entrepreneur_is_surcharge_only() {
        let mut tax = standard(0.20);
        tax.set_auto_entrepreneur(true);

        let summary = compute_summary(&[], &[], &tax);
        assert_eq!(summary.subtotal, 0.0);
        assert_eq!(summary.total_cost, CASNOS_ANNUAL_SURCHARGE);
    }

    #[test]
    fn test_single_expense() {
        let summary = compute_summary(&[server()], &[], &standard(0.20));
        assert_eq!(summary.total_expenses, 1000.0);
        assert_eq!(summary.subtotal, 1000.0);
        assert_eq!(summary.tax_amount, 200.0);
        assert_eq!(summary.total_cost, 1200.0);
    }

    #[test]
    fn test_single_feature() {
        let summary = compute_summary(&[], &[auth()], &standard(0.20));
        assert_eq!(summary.total_feature_cost, 500.0);
        assert_eq!(summary.subtotal, 500.0);
        assert_eq!(summary.tax_amount, 100.0);
        assert_eq!(summary.total_cost, 600.0);
    }

    #[test]
    fn test_combined_auto_entrepreneur() {
        let mut tax = standard(0.20);
        tax.set_auto_entrepreneur(true);

        let summary = compute_summary(&[server()], &[auth()], &tax);
        assert_eq!(summary.subtotal, 1500.0);
        assert_eq!(summary.tax_amount, 7.5);
        assert_eq!(summary.surcharge, 24000.0);
        assert_eq!(summary.total_cost, 25507.5);
        assert!(summary.auto_entrepreneur);
    }

    #[test]
    fn test_complexity_does_not_affect_cost() {
        let low = Feature::new("Auth", Complexity::Low, 10.0, 50.0);
        let high = Feature::new("Auth", Complexity::High, 10.0, 50.0);
        let tax = standard(0.20);

        assert_eq!(
            compute_summary(&[], &[low], &tax).total_cost,
            compute_summary(&[], &[high], &tax).total_cost
        );
    }

    fn expense_strategy() -> impl Strategy<Value = Expense> {
        ("[a-z]{1,12}", 0.01f64..1_000_000.0).prop_map(|(name, amount)| Expense::new(name, amount))
    }

    fn feature_strategy() -> impl Strategy<Value = Feature> {
        (
            "[a-z]{1,12}",
            prop_oneof![
                Just(Complexity::Low),
                Just(Complexity::Medium),
                Just(Complexity::High)
            ],
            0.1f64..500.0,
            0.1f64..10_000.0,
        )
            .prop_map(|(name, complexity, hours, rate)| Feature::new(name, complexity, hours, rate))
    }

    proptest! {
        #[test]
        fn prop_summary_is_pure(
            expenses in prop::collection::vec(expense_strategy(), 0..20),
            features in prop::collection::vec(feature_strategy(), 0..20),
            rate in 0.0f64..=1.0,
            auto in any::<bool>(),
        ) {
            let mut tax = standard(rate);
            tax.set_auto_entrepreneur(auto);

            let first = compute_summary(&expenses, &features, &tax);
            let second = compute_summary(&expenses, &features, &tax);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_total_is_sum_of_parts(
            expenses in prop::collection::vec(expense_strategy(), 0..20),
            features in prop::collection::vec(feature_strategy(), 0..20),
            rate in 0.0f64..=1.0,
            auto in any::<bool>(),
        ) {
            let mut tax = standard(rate);
            tax.set_auto_entrepreneur(auto);

            let s = compute_summary(&expenses, &features, &tax);
            prop_assert_eq!(s.subtotal, s.total_expenses + s.total_feature_cost);
            prop_assert_eq!(s.total_cost, s.subtotal + s.tax_amount + s.surcharge);
        }

        #[test]
        fn prop_auto_entrepreneur_ignores_standard_rate(
            expenses in prop::collection::vec(expense_strategy(), 0..10),
            features in prop::collection::vec(feature_strategy(), 0..10),
            rate in 0.0f64..=1.0,
        ) {
            let mut tax = standard(rate);
            tax.set_auto_entrepreneur(true);

            let s = compute_summary(&expenses, &features, &tax);
            prop_assert_eq!(s.effective_tax_rate, AUTO_ENTREPRENEUR_RATE);
            prop_assert_eq!(s.tax_amount, s.subtotal * 0.005);
            prop_assert_eq!(s.surcharge, 24000.0);
        }
    }
}
