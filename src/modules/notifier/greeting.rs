use chrono::{DateTime, Local, Timelike};

pub fn salutation(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Greeting text for the review message. Time-of-day salutation plus the
/// current month name.
pub fn compose(now: DateTime<Local>) -> String {
    format!(
        "Hi,\n{}.\n\nI've attached the timesheet and invoice for {}.\nPlease review and approve.",
        salutation(now.hour()),
        now.format("%B"),
    )
}

#[cfg(test)]
mod greeting_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Good Morning")]
    #[case(11, "Good Morning")]
    #[case(12, "Good Afternoon")]
    #[case(16, "Good Afternoon")]
    #[case(17, "Good Evening")]
    #[case(23, "Good Evening")]
    fn it_should_pick_the_salutation_for_the_hour(#[case] hour: u32, #[case] expected: &str) {
        assert_eq!(salutation(hour), expected);
    }

    #[rstest]
    fn it_should_mention_the_month_by_name() {
        let july_morning = Local.with_ymd_and_hms(2024, 7, 31, 9, 0, 0).unwrap();
        let message = compose(july_morning);
        assert!(message.starts_with("Hi,\nGood Morning.\n"));
        assert!(message.contains("the timesheet and invoice for July."));
        assert!(message.ends_with("Please review and approve."));
    }
}
