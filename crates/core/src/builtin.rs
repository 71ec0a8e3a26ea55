//! Stock queries available without a catalog file.

use chrono::NaiveDate;

use crate::types::{CatalogRecord, Category, Cell, SampleOutput};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid literal date")
}

fn sample(columns: &[&str], rows: Vec<Vec<Cell>>) -> SampleOutput {
    SampleOutput { columns: columns.iter().map(|c| c.to_string()).collect(), rows }
}

pub(crate) fn records() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord::new(
            "1",
            "30D Active New Customers (Txn-Based)",
            "Returns all customers who performed their first transaction in the last 30 days. \
             A customer is considered new if their first-ever transaction date is within the \
             rolling 30-day period.",
            Category::CustomerAnalytics,
            day(2024, 12, 1),
        )
        .with_sql(
            "WITH date_series AS (
    SELECT TRUNC(SYSDATE - LEVEL) AS end_date
    FROM dual
    CONNECT BY LEVEL <= 30
),
first_txn AS (
    SELECT
        SUBSTR(ds_customer_msisdn, -9) AS customer_id,
        MIN(TRUNC(ord_endtime)) AS first_txn_date
    FROM mpesa.fct_mst_txn_transaction_info
    WHERE ord_initiator_mnemonic = 'CUSTOMER'
    GROUP BY SUBSTR(ds_customer_msisdn, -9)
)
SELECT
    f.customer_id,
    f.first_txn_date
FROM first_txn f
WHERE f.first_txn_date >= TRUNC(SYSDATE - 30);",
        )
        .with_sample_output(sample(
            &["customer_id", "first_txn_date"],
            vec![
                vec![Cell::from("712345678"), Cell::from("2024-12-10")],
                vec![Cell::from("723456789"), Cell::from("2024-12-09")],
                vec![Cell::from("734567890"), Cell::from("2024-12-08")],
            ],
        )),
        CatalogRecord::new(
            "2",
            "Active Customers Monthly",
            "Counts unique active customers per month based on transaction activity.",
            Category::CustomerAnalytics,
            day(2024, 11, 15),
        )
        .with_sql(
            "SELECT
    TRUNC(ord_endtime, 'MM') AS month,
    COUNT(DISTINCT SUBSTR(ds_customer_msisdn, -9)) AS active_customers
FROM mpesa.fct_mst_txn_transaction_info
WHERE ord_initiator_mnemonic = 'CUSTOMER'
GROUP BY TRUNC(ord_endtime, 'MM')
ORDER BY month DESC;",
        )
        .with_sample_output(sample(
            &["month", "active_customers"],
            vec![
                vec![Cell::from("2024-12-01"), Cell::from(268_610_i64)],
                vec![Cell::from("2024-11-01"), Cell::from(245_890_i64)],
                vec![Cell::from("2024-10-01"), Cell::from(231_450_i64)],
            ],
        )),
        CatalogRecord::new(
            "3",
            "Active Users Daily Trend",
            "Daily trend of active users over the last 30 days.",
            Category::TrendAnalysis,
            day(2024, 11, 20),
        )
        .with_sql(
            "SELECT
    TRUNC(ord_endtime) AS txn_date,
    COUNT(DISTINCT SUBSTR(ds_customer_msisdn, -9)) AS daily_active
FROM mpesa.fct_mst_txn_transaction_info
WHERE ord_endtime >= SYSDATE - 30
GROUP BY TRUNC(ord_endtime)
ORDER BY txn_date;",
        )
        .with_sample_output(sample(
            &["txn_date", "daily_active"],
            vec![
                vec![Cell::from("2024-12-11"), Cell::from(42_350_i64)],
                vec![Cell::from("2024-12-10"), Cell::from(41_200_i64)],
                vec![Cell::from("2024-12-09"), Cell::from(43_100_i64)],
            ],
        )),
        CatalogRecord::new(
            "4",
            "Activity Summary SQL",
            "Comprehensive activity summary including transaction counts and amounts.",
            Category::SummaryReports,
            day(2024, 12, 5),
        )
        .with_sql(
            "SELECT
    TRUNC(ord_endtime) AS activity_date,
    COUNT(*) AS total_transactions,
    SUM(amount) AS total_amount,
    AVG(amount) AS avg_amount
FROM mpesa.fct_mst_txn_transaction_info
WHERE ord_endtime >= SYSDATE - 7
GROUP BY TRUNC(ord_endtime)
ORDER BY activity_date DESC;",
        )
        .with_sample_output(sample(
            &["activity_date", "total_transactions", "total_amount", "avg_amount"],
            vec![
                vec![Cell::from("2024-12-11"), Cell::from(152_340_i64), Cell::from(45_670_000_i64), Cell::from(299.85_f64)],
                vec![Cell::from("2024-12-10"), Cell::from(148_920_i64), Cell::from(43_890_000_i64), Cell::from(294.71_f64)],
            ],
        )),
        CatalogRecord::new(
            "5",
            "Top Up Revenue Analysis",
            "Analyzes top-up transactions and revenue by region.",
            Category::RevenueAnalysis,
            day(2024, 12, 8),
        )
        .with_sql(
            "SELECT
    region,
    COUNT(*) AS topup_count,
    SUM(amount) AS total_revenue
FROM mpesa.fct_topup_transactions
WHERE txn_date >= SYSDATE - 30
GROUP BY region
ORDER BY total_revenue DESC;",
        )
        .with_sample_output(sample(
            &["region", "topup_count", "total_revenue"],
            vec![
                vec![Cell::from("Nairobi"), Cell::from(89_450_i64), Cell::from(12_340_000_i64)],
                vec![Cell::from("Mombasa"), Cell::from(45_230_i64), Cell::from(6_780_000_i64)],
                vec![Cell::from("Kisumu"), Cell::from(32_100_i64), Cell::from(4_560_000_i64)],
            ],
        )),
    ]
}
