use dialnorm_core::{PlanTable, RegionCode, RegionPlan};

pub fn code(raw: &str) -> RegionCode {
    RegionCode::new(raw).expect("region code")
}

/// A handful of regions shaped after their real plans, enough to exercise
/// shared calling codes, trunk prefixes and overlapping country codes.
pub fn plan_table() -> PlanTable {
    PlanTable::new(vec![
        RegionPlan::new(code("US"), 1, vec![10])
            .with_international_prefix("011")
            .with_national_prefix("1", false)
            .with_leading_digits(["201", "202", "212", "310", "415", "541", "617", "718"])
            .with_groups(vec![3, 3, 4]),
        RegionPlan::new(code("CA"), 1, vec![10])
            .with_international_prefix("011")
            .with_national_prefix("1", false)
            .with_leading_digits(["416", "514", "604"])
            .with_groups(vec![3, 3, 4]),
        RegionPlan::new(code("NO"), 47, vec![8])
            .with_international_prefix("00")
            .with_leading_digits(["2", "3", "4", "6", "7", "9"])
            .with_groups(vec![3, 2, 3]),
        RegionPlan::new(code("LT"), 370, vec![8])
            .with_international_prefix("00")
            .with_national_prefix("8", true)
            .with_leading_digits(["3", "4", "5", "6"])
            .with_groups(vec![1, 3, 4]),
        RegionPlan::new(code("PL"), 48, vec![9])
            .with_international_prefix("00")
            .with_leading_digits(["5", "6", "7", "8"])
            .with_groups(vec![3, 3, 3]),
        RegionPlan::new(code("TK"), 690, vec![4, 5, 6, 7])
            .with_international_prefix("00")
            .with_leading_digits(["2", "3", "4", "5", "7", "8", "9"]),
    ])
    .expect("plan table")
}
