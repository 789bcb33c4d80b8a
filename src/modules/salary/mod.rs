// Salary arithmetic. Pure, no side effects.

pub mod inbound;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryBreakdown {
    pub present_days: i64,
    pub pay_per_day: i64,
    pub salary: i64,
}

pub fn calculate(present_days: i64, pay_per_day: i64) -> SalaryBreakdown {
    SalaryBreakdown {
        present_days,
        pay_per_day,
        salary: present_days * pay_per_day,
    }
}
